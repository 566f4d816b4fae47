//! `[timeless-text ...]` placeholders embedded in user content.
//!
//! ```text
//! I have worked for [timeless-text y="2009" m="3"] in web dev.
//! We have [timeless-text combined="1998-01-01, 2004-05-12" text] years of experience.
//! ```
//!
//! A doubled bracket (`[[timeless-text y="2000"]]`) is an escape and renders
//! the placeholder itself, without the outer brackets.

use std::collections::HashMap;
use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::{Captures, Regex};
use tracing::{debug, warn};

use crate::elapsed::format_elapsed_years;
use crate::locale::Catalog;
use crate::request::FormatRequest;

pub const TAG: &str = "timeless-text";

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[(\[?)timeless-text((?:\s[^\]]*)?)\](\]?)").expect("placeholder pattern is valid")
});

static ATTRIBUTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"([\w-]+)\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"']+))|"([^"]*)"|([^\s"'=]+)"#)
        .expect("attribute pattern is valid")
});

/// Parse the attribute text of a placeholder into `key -> value` pairs.
///
/// Keys are lowercased. A bare word becomes a key with an empty value.
pub fn parse_attributes(raw: &str) -> HashMap<String, String> {
    let mut attrs = HashMap::new();

    for caps in ATTRIBUTE.captures_iter(raw) {
        if let Some(key) = caps.get(1) {
            let value = caps
                .get(2)
                .or_else(|| caps.get(3))
                .or_else(|| caps.get(4))
                .map(|m| m.as_str())
                .unwrap_or_default();
            attrs.insert(key.as_str().to_lowercase(), value.to_string());
        } else if let Some(flag) = caps.get(5).or_else(|| caps.get(6)) {
            attrs.insert(flag.as_str().to_lowercase(), String::new());
        }
    }

    attrs
}

/// Render one placeholder's attributes. Errors come back as their
/// translated message, which is what ends up in the content.
pub fn render_attributes(raw: &str, today: NaiveDate, catalog: &dyn Catalog) -> String {
    let request = FormatRequest::from_attributes(&parse_attributes(raw));

    match format_elapsed_years(&request, today, catalog) {
        Ok(rendered) => rendered.to_string(),
        Err(e) => {
            warn!(attributes = raw.trim(), kind = ?e.kind(), "placeholder failed");
            match e.source_message() {
                Some(source) => catalog.translate(source),
                None => e.to_string(),
            }
        }
    }
}

/// Replace every placeholder in `content`, all against the same `today`.
pub fn render_content(content: &str, today: NaiveDate, catalog: &dyn Catalog) -> String {
    let mut count = 0usize;
    let rendered = PLACEHOLDER.replace_all(content, |caps: &Captures| {
        let escaped = !caps[1].is_empty() && !caps[3].is_empty();
        if escaped {
            return format!("[{TAG}{}]", &caps[2]);
        }
        count += 1;
        // A lone leading or trailing bracket is kept as plain text
        format!("{}{}{}", &caps[1], render_attributes(&caps[2], today, catalog), &caps[3])
    });
    debug!(placeholders = count, "rendered content");
    rendered.into_owned()
}
