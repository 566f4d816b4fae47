use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use crate::age::year_span;
use crate::error::Result;
use crate::locale::Catalog;
use crate::request::{FormatRequest, Mode, parse_combined};

pub const SINGULAR_TEMPLATE: &str = "%d year";
pub const PLURAL_TEMPLATE: &str = "%d years";

/// A successful render: either the bare count or a localized phrase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Rendered {
    Count(u32),
    Phrase(String),
}

impl fmt::Display for Rendered {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rendered::Count(n) => write!(f, "{n}"),
            Rendered::Phrase(phrase) => f.write_str(phrase),
        }
    }
}

/// Total whole years for the request, summed over every date in
/// combined mode. The first invalid date fails the whole request.
pub fn compute_total(request: &FormatRequest, today: NaiveDate) -> Result<u32> {
    match request.mode() {
        Mode::Single => year_span(request.date_spec(today)?, today),
        Mode::Combined => {
            let list = request.combined.as_deref().unwrap_or_default();
            let mut total = 0u32;
            for spec in parse_combined(list, today)? {
                total = total.saturating_add(year_span(spec, today)?);
            }
            debug!(total, "combined year spans");
            Ok(total)
        }
    }
}

/// Render the request against `today`.
pub fn format_elapsed_years(
    request: &FormatRequest,
    today: NaiveDate,
    catalog: &dyn Catalog,
) -> Result<Rendered> {
    let total = compute_total(request, today)?;

    if request.text {
        return Ok(Rendered::Count(total));
    }

    Ok(Rendered::Phrase(phrase(total, catalog)))
}

/// "N year" / "N years", with the number grouped for the catalog's locale.
pub fn phrase(n: u32, catalog: &dyn Catalog) -> String {
    let n = i64::from(n);
    let template = catalog.translate_plural(SINGULAR_TEMPLATE, PLURAL_TEMPLATE, n);
    template.replacen("%d", &catalog.format_number(n), 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TimelessError;
    use crate::locale::{EnglishCatalog, TomlCatalog};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    #[test]
    fn test_text_flag_returns_count() {
        let request = FormatRequest::single("2000").with_month("6").with_day("15").as_text();
        let rendered = format_elapsed_years(&request, today(), &EnglishCatalog).unwrap();
        assert_eq!(rendered, Rendered::Count(24));
    }

    #[test]
    fn test_phrase_before_anniversary() {
        let request = FormatRequest::single("2000").with_month("6").with_day("16");
        let rendered = format_elapsed_years(&request, today(), &EnglishCatalog).unwrap();
        assert_eq!(rendered, Rendered::Phrase("23 years".to_string()));
    }

    #[test]
    fn test_pluralization_boundary() {
        assert_eq!(phrase(0, &EnglishCatalog), "0 years");
        assert_eq!(phrase(1, &EnglishCatalog), "1 year");
        assert_eq!(phrase(2, &EnglishCatalog), "2 years");
        assert_eq!(phrase(1500, &EnglishCatalog), "1,500 years");
    }

    #[test]
    fn test_combined_sum_matches_individual_spans() {
        let combined = FormatRequest::combined("1990-1-1,2000-1-1").as_text();
        let first = compute_total(&FormatRequest::single("1990"), today()).unwrap();
        let second = compute_total(&FormatRequest::single("2000"), today()).unwrap();
        assert_eq!(
            format_elapsed_years(&combined, today(), &EnglishCatalog).unwrap(),
            Rendered::Count(first + second)
        );
        assert_eq!(first + second, 58);
    }

    #[test]
    fn test_combined_error_overrides_partial_sum() {
        let request = FormatRequest::combined("1990-1-1,3000-1-1");
        let err = format_elapsed_years(&request, today(), &EnglishCatalog).unwrap_err();
        assert!(matches!(err, TimelessError::InvalidYear { .. }));
    }

    #[test]
    fn test_combined_takes_precedence_over_year() {
        let mut request = FormatRequest::combined("2010-6-15, 2020-6-15").as_text();
        request.year = Some("99".to_string());
        assert_eq!(compute_total(&request, today()).unwrap(), 18);
    }

    #[test]
    fn test_localized_phrase() {
        let catalog = TomlCatalog::parse(
            r#"
[number]
thousands_separator = "."

[plurals."%d year"]
one = "%d anno"
other = "%d anni"
"#,
        )
        .unwrap();
        assert_eq!(phrase(1, &catalog), "1 anno");
        assert_eq!(phrase(2024, &catalog), "2.024 anni");
    }

    #[test]
    fn test_rendered_display_and_json() {
        assert_eq!(Rendered::Count(5).to_string(), "5");
        assert_eq!(Rendered::Phrase("5 years".into()).to_string(), "5 years");
        assert_eq!(
            serde_json::to_string(&Rendered::Count(5)).unwrap(),
            r#"{"type":"count","value":5}"#
        );
    }

    #[test]
    fn test_idempotent_for_same_today() {
        let request = FormatRequest::combined("1999-12-31, 2004/02/29");
        let first = format_elapsed_years(&request, today(), &EnglishCatalog).unwrap();
        let second = format_elapsed_years(&request, today(), &EnglishCatalog).unwrap();
        assert_eq!(first, second);
    }
}
