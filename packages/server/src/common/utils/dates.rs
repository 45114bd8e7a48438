//! Event date parsing and display formatting.
//!
//! Dates in front-matter are local wall-clock values without an offset.
//! Formatting goes through `Utc` only to reach `format_localized`; no zone
//! conversion happens.

use chrono::{Locale, NaiveDate, NaiveDateTime, TimeZone, Utc};

const DATE_TIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M"];

/// Parse `YYYY-MM-DD` (midnight) or a date with a time of day
pub fn parse_event_date(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0);
    }

    DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
}

fn localized(date: NaiveDateTime, format: &str) -> String {
    Utc.from_utc_datetime(&date)
        .format_localized(format, Locale::es_ES)
        .to_string()
}

/// "miércoles, 10 de enero de 2024"
pub fn format_full_date(date: NaiveDateTime) -> String {
    localized(date, "%A, %-d de %B de %Y")
}

/// "10 de febrero de 2024"
pub fn format_short_date(date: NaiveDateTime) -> String {
    localized(date, "%-d de %B de %Y")
}

/// "14 DE OCTUBRE DE 2023, 11:00"
pub fn format_card_date(date: NaiveDateTime) -> String {
    localized(date, "%-d de %B de %Y, %H:%M").to_uppercase()
}

/// "Wednesday, January 10, 2024"
pub fn format_english_full_date(date: NaiveDateTime) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jan_10_2024() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 10)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    #[test]
    fn parses_plain_dates_as_midnight() {
        assert_eq!(parse_event_date("2024-01-10"), Some(jan_10_2024()));
        assert_eq!(parse_event_date(" 2024-01-10 "), Some(jan_10_2024()));
    }

    #[test]
    fn parses_dates_with_time() {
        let expected = NaiveDate::from_ymd_opt(2023, 10, 14)
            .unwrap()
            .and_hms_opt(11, 0, 0)
            .unwrap();

        assert_eq!(parse_event_date("2023-10-14T11:00"), Some(expected));
        assert_eq!(parse_event_date("2023-10-14T11:00:00"), Some(expected));
        assert_eq!(parse_event_date("2023-10-14 11:00"), Some(expected));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse_event_date("next tuesday"), None);
        assert_eq!(parse_event_date("2024-13-40"), None);
        assert_eq!(parse_event_date(""), None);
    }

    #[test]
    fn spanish_formats() {
        assert_eq!(format_full_date(jan_10_2024()), "miércoles, 10 de enero de 2024");
        assert_eq!(format_short_date(jan_10_2024()), "10 de enero de 2024");
    }

    #[test]
    fn card_format_is_uppercase_with_time() {
        let date = parse_event_date("2023-10-14T11:00").unwrap();
        assert_eq!(format_card_date(date), "14 DE OCTUBRE DE 2023, 11:00");
    }

    #[test]
    fn english_full_format() {
        assert_eq!(format_english_full_date(jan_10_2024()), "Wednesday, January 10, 2024");
    }
}
