//! DateTime parsing utilities with consistent error handling.
//!
//! Stored records carry creation timestamps as RFC3339 text authored by
//! campaign tools. Malformed values must degrade to a deterministic
//! default rather than fail a read.

use chrono::{DateTime, Utc};

/// Parses an RFC3339 timestamp string, returning an error if parsing fails.
///
/// # Examples
///
/// ```
/// use chroniclr_domain::common::parse_datetime;
/// use chrono::Datelike;
///
/// let dt = parse_datetime("2024-03-02T18:00:00Z").unwrap();
/// assert_eq!(dt.year(), 2024);
/// ```
///
/// # Errors
///
/// Returns `chrono::ParseError` if the string is not valid RFC3339.
pub fn parse_datetime(s: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(s).map(|dt| dt.with_timezone(&Utc))
}

/// Parses an RFC3339 timestamp string, falling back to the provided
/// default on error.
///
/// # Examples
///
/// ```
/// use chroniclr_domain::common::parse_datetime_or;
/// use chrono::{DateTime, Datelike, Utc};
///
/// let dt = parse_datetime_or("not-a-date", DateTime::<Utc>::UNIX_EPOCH);
/// assert_eq!(dt.year(), 1970);
/// ```
pub fn parse_datetime_or(s: &str, default: DateTime<Utc>) -> DateTime<Utc> {
    parse_datetime(s).unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, TimeZone, Timelike};

    #[test]
    fn test_parse_datetime_valid() {
        let dt = parse_datetime("2024-03-02T18:30:00Z").unwrap();
        assert_eq!(dt.year(), 2024);
        assert_eq!(dt.month(), 3);
        assert_eq!(dt.day(), 2);
        assert_eq!(dt.hour(), 18);
        assert_eq!(dt.minute(), 30);
    }

    #[test]
    fn test_parse_datetime_converts_offsets_to_utc() {
        let dt = parse_datetime("2024-03-02T18:30:00+02:00").unwrap();
        assert_eq!(dt.hour(), 16);
    }

    #[test]
    fn test_parse_datetime_invalid() {
        assert!(parse_datetime("half past nine").is_err());
        assert!(parse_datetime("").is_err());
    }

    #[test]
    fn test_parse_datetime_or_falls_back() {
        let default = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(parse_datetime_or("garbage", default), default);
        assert_ne!(parse_datetime_or("2024-03-02T18:30:00Z", default), default);
    }
}
