//! Argument parsers shared by the subcommands.

use chrono::{DateTime, NaiveDate, Utc};
use drp_core::FormConfig;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a YYYY-MM-DD day.
pub fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|e| format!("invalid date '{value}' (expected YYYY-MM-DD): {e}"))
}

/// Parse a YYYY-MM month into its first day.
pub fn parse_month(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(&format!("{value}-01"), DATE_FORMAT)
        .map_err(|e| format!("invalid month '{value}' (expected YYYY-MM): {e}"))
}

/// Parse an RFC 3339 timestamp and convert it to UTC.
pub fn parse_now(value: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(value)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| format!("invalid timestamp '{value}' (expected RFC 3339): {e}"))
}

/// Form configuration with an optional earliest-day override.
pub fn config(min_date: Option<NaiveDate>) -> FormConfig {
    match min_date {
        Some(min_date) => FormConfig::default().with_min_date(min_date),
        None => FormConfig::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2024-03-05"),
            Ok(NaiveDate::from_ymd_opt(2024, 3, 5).unwrap())
        );
        assert!(parse_date("05/03/2024").is_err());
        assert!(parse_date("2024-02-30").is_err());
    }

    #[test]
    fn test_parse_month() {
        assert_eq!(
            parse_month("2024-03"),
            Ok(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap())
        );
        assert!(parse_month("2024-13").is_err());
        assert!(parse_month("2024-03-05").is_err());
    }

    #[test]
    fn test_parse_now_converts_to_utc() {
        let now = parse_now("2024-03-10T23:30:00-02:00").unwrap();
        assert_eq!(now, Utc.with_ymd_and_hms(2024, 3, 11, 1, 30, 0).unwrap());
        assert!(parse_now("2024-03-10").is_err());
    }

    #[test]
    fn test_config_override() {
        let min = NaiveDate::from_ymd_opt(2023, 6, 1).unwrap();
        assert_eq!(config(Some(min)).min_date, min);
        assert_eq!(config(None), FormConfig::default());
    }
}
