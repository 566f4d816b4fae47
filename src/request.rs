use std::collections::HashMap;

use chrono::NaiveDate;
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

use crate::age::DateSpec;
use crate::error::{Result, TimelessError};

/// Parameters of one placeholder or CLI invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FormatRequest {
    #[serde(default, rename = "y")]
    pub year: Option<String>,
    #[serde(default, rename = "m")]
    pub month: Option<String>,
    #[serde(default, rename = "d")]
    pub day: Option<String>,
    #[serde(default)]
    pub combined: Option<String>,
    /// Return the bare number instead of a phrase. Any value counts.
    #[serde(default, deserialize_with = "deserialize_presence")]
    pub text: bool,
}

fn deserialize_presence<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    IgnoredAny::deserialize(deserializer).map(|_| true)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Single,
    Combined,
}

impl FormatRequest {
    pub fn single(year: impl Into<String>) -> Self {
        Self {
            year: Some(year.into()),
            ..Self::default()
        }
    }

    pub fn combined(dates: impl Into<String>) -> Self {
        Self {
            combined: Some(dates.into()),
            ..Self::default()
        }
    }

    pub fn with_month(mut self, month: impl Into<String>) -> Self {
        self.month = Some(month.into());
        self
    }

    pub fn with_day(mut self, day: impl Into<String>) -> Self {
        self.day = Some(day.into());
        self
    }

    pub fn as_text(mut self) -> Self {
        self.text = true;
        self
    }

    /// Build a request from loose `key -> value` attributes.
    ///
    /// Unknown keys are ignored. `text` only needs to be present.
    pub fn from_attributes(attrs: &HashMap<String, String>) -> Self {
        Self {
            year: attrs.get("y").cloned(),
            month: attrs.get("m").cloned(),
            day: attrs.get("d").cloned(),
            combined: attrs.get("combined").cloned(),
            text: attrs.contains_key("text"),
        }
    }

    pub fn mode(&self) -> Mode {
        match self.combined.as_deref() {
            Some(list) if !list.is_empty() => Mode::Combined,
            _ => Mode::Single,
        }
    }

    pub fn date_spec(&self, today: NaiveDate) -> Result<DateSpec> {
        DateSpec::parse(
            self.year.as_deref(),
            self.month.as_deref(),
            self.day.as_deref(),
            today,
        )
    }
}

/// Split a `YYYY-MM-DD, YYYY-MM-DD, ...` list into date specs.
///
/// `/` is accepted as a separator inside a date. Month and day may be left
/// off an entry, in which case they default to 1. Anything past the day is
/// ignored.
pub fn parse_combined(list: &str, today: NaiveDate) -> Result<Vec<DateSpec>> {
    if !list.contains(',') {
        return Err(TimelessError::MalformedCombinedList {
            value: list.to_string(),
        });
    }

    let normalized = list.replace('/', "-");
    normalized
        .split(',')
        .map(|entry| {
            let mut parts = entry.split('-').map(str::trim);
            let (year, month, day) = (parts.next(), parts.next(), parts.next());
            let spec = DateSpec::parse(year, month, day, today)?;
            // Calendar check here keeps errors reported in list order
            spec.to_date()?;
            Ok(spec)
        })
        .collect()
}
