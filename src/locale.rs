//! Translation catalog and number formatting.
//!
//! Catalog keys are the exact English source strings. A catalog that has no
//! entry for a key returns the source text unchanged.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluralCategory {
    One,
    Other,
}

impl PluralCategory {
    /// Exactly 1 is singular; everything else, 0 included, is plural.
    pub fn for_count(n: i64) -> Self {
        if n == 1 { Self::One } else { Self::Other }
    }
}

pub trait Catalog {
    fn translate(&self, source: &str) -> String;

    /// Choose between the singular and plural source templates for `n`.
    fn translate_plural(&self, singular: &str, plural: &str, n: i64) -> String;

    fn format_number(&self, n: i64) -> String;
}

/// Identity translations with `,` thousands grouping.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishCatalog;

impl Catalog for EnglishCatalog {
    fn translate(&self, source: &str) -> String {
        source.to_string()
    }

    fn translate_plural(&self, singular: &str, plural: &str, n: i64) -> String {
        match PluralCategory::for_count(n) {
            PluralCategory::One => singular.to_string(),
            PluralCategory::Other => plural.to_string(),
        }
    }

    fn format_number(&self, n: i64) -> String {
        group_digits(n, ",")
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct NumberFormat {
    #[serde(default = "default_separator")]
    pub thousands_separator: String,
}

fn default_separator() -> String {
    ",".to_string()
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self {
            thousands_separator: default_separator(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PluralForms {
    pub one: String,
    pub other: String,
}

/// A catalog read from a TOML file:
///
/// ```toml
/// [number]
/// thousands_separator = "."
///
/// [messages]
/// "Dates must be in the format: YYYY-MM-DD, YYYY-MM-DD, YYYY-MM-DD" = "..."
///
/// [plurals."%d year"]
/// one = "%d anno"
/// other = "%d anni"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlCatalog {
    #[serde(default)]
    pub number: NumberFormat,
    #[serde(default)]
    pub messages: HashMap<String, String>,
    /// Keyed by the singular source template.
    #[serde(default)]
    pub plurals: HashMap<String, PluralForms>,
}

impl TomlCatalog {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let catalog = Self::parse(&content)?;
        tracing::debug!(
            path = %path.as_ref().display(),
            messages = catalog.messages.len(),
            plurals = catalog.plurals.len(),
            "loaded catalog"
        );
        Ok(catalog)
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

impl Catalog for TomlCatalog {
    fn translate(&self, source: &str) -> String {
        self.messages
            .get(source)
            .cloned()
            .unwrap_or_else(|| source.to_string())
    }

    fn translate_plural(&self, singular: &str, plural: &str, n: i64) -> String {
        let category = PluralCategory::for_count(n);
        match (self.plurals.get(singular), category) {
            (Some(forms), PluralCategory::One) => forms.one.clone(),
            (Some(forms), PluralCategory::Other) => forms.other.clone(),
            (None, _) => EnglishCatalog.translate_plural(singular, plural, n),
        }
    }

    fn format_number(&self, n: i64) -> String {
        group_digits(n, &self.number.thousands_separator)
    }
}

/// Insert `separator` between groups of three digits.
pub fn group_digits(n: i64, separator: &str) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 * separator.len() + 1);

    if n < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(ch);
    }
    out
}
