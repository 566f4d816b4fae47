use chrono::NaiveDate;
use timeless_text::{
    EnglishCatalog, ErrorKind, FormatRequest, Rendered, compute_total, format_elapsed_years,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_anniversary_example() {
    let today = date(2024, 6, 15);

    let on_anniversary = FormatRequest::single("2000").with_month("6").with_day("15").as_text();
    assert_eq!(
        format_elapsed_years(&on_anniversary, today, &EnglishCatalog).unwrap(),
        Rendered::Count(24)
    );

    let day_before = FormatRequest::single("2000").with_month("6").with_day("16");
    assert_eq!(
        format_elapsed_years(&day_before, today, &EnglishCatalog).unwrap(),
        Rendered::Phrase("23 years".to_string())
    );
}

#[test]
fn test_january_first_is_plain_year_difference() {
    let today = date(2026, 10, 16);
    for year in [1000, 1492, 1999, 2000, 2026] {
        let request = FormatRequest::single(year.to_string());
        assert_eq!(compute_total(&request, today).unwrap(), (2026 - year) as u32);
    }
}

#[test]
fn test_rejections() {
    let today = date(2024, 6, 15);

    let err =
        format_elapsed_years(&FormatRequest::single("99"), today, &EnglishCatalog).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidYear);

    let err =
        format_elapsed_years(&FormatRequest::single("2025"), today, &EnglishCatalog).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidYear);

    let err = format_elapsed_years(&FormatRequest::combined("1990-01-01"), today, &EnglishCatalog)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedCombinedList);
    assert_eq!(
        err.to_string(),
        "Dates must be in the format: YYYY-MM-DD, YYYY-MM-DD, YYYY-MM-DD"
    );

    let err = format_elapsed_years(
        &FormatRequest::single("2000").with_month("13"),
        today,
        &EnglishCatalog,
    )
    .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidDate);
}

#[test]
fn test_year_limit_follows_given_today() {
    let request = FormatRequest::single("2025").as_text();
    assert!(compute_total(&request, date(2024, 12, 31)).is_err());
    assert_eq!(compute_total(&request, date(2025, 1, 1)).unwrap(), 0);
}

#[test]
fn test_combined_sum_of_individual_spans() {
    let today = date(2024, 3, 1);
    let dates = ["1990-05-20", "2000-02-29", "2012/12/12"];

    let individual: u32 = dates
        .iter()
        .map(|d| {
            let parts: Vec<&str> = d.split(['-', '/']).collect();
            let request = FormatRequest::single(parts[0]).with_month(parts[1]).with_day(parts[2]);
            compute_total(&request, today).unwrap()
        })
        .sum();

    let combined = FormatRequest::combined(dates.join(", ")).as_text();
    assert_eq!(
        format_elapsed_years(&combined, today, &EnglishCatalog).unwrap(),
        Rendered::Count(individual)
    );
    assert_eq!(individual, 33 + 24 + 11);
}

#[test]
fn test_blank_combined_list_does_not_fall_back_to_year() {
    let today = date(2024, 6, 15);
    let mut request = FormatRequest::combined("  ");
    request.year = Some("2000".to_string());

    let err = format_elapsed_years(&request, today, &EnglishCatalog).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedCombinedList);
}

#[test]
fn test_json_request_with_text_value() {
    let json = r#"{"y": "2000", "m": "6", "d": "15", "text": "1"}"#;
    let request: FormatRequest = serde_json::from_str(json).unwrap();
    assert_eq!(
        format_elapsed_years(&request, date(2024, 6, 15), &EnglishCatalog).unwrap(),
        Rendered::Count(24)
    );
}

#[test]
fn test_padded_year_is_rejected_but_list_entries_are_trimmed() {
    let today = date(2024, 6, 15);
    let err = compute_total(&FormatRequest::single(" 2000"), today).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidYear);

    let request = FormatRequest::combined(" 2000 - 6 - 15 , 1990-01-01-05").as_text();
    assert_eq!(compute_total(&request, today).unwrap(), 24 + 34);
}
