use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use mongodb::bson;

/// Parses a `YYYY-MM-DD` calendar date from a request body or query string.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// Stores calendar dates as midnight UTC so range comparisons stay on
/// whole-day boundaries.
pub fn to_bson_datetime(date: NaiveDate) -> bson::DateTime {
    bson::DateTime::from_millis(date.and_time(NaiveTime::MIN).and_utc().timestamp_millis())
}

fn as_utc(value: bson::DateTime) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(value.timestamp_millis()).unwrap_or_default()
}

/// Calendar date of a stored exercise, for inclusive from/to filtering.
pub fn calendar_date(value: bson::DateTime) -> NaiveDate {
    as_utc(value).date_naive()
}

/// Human-readable date string, e.g. "Tue Jan 10 2023".
pub fn format_date(value: bson::DateTime) -> String {
    as_utc(value).format("%a %b %d %Y").to_string()
}

pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_iso_calendar_dates() {
        let date = parse_date("2023-01-10").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2023, 1, 10).unwrap());
        // Surrounding whitespace is tolerated, garbage is not
        assert!(parse_date(" 2023-02-01 ").is_some());
        assert!(parse_date("tomorrow").is_none());
        assert!(parse_date("2023-13-01").is_none());
        assert!(parse_date("").is_none());
    }

    #[test]
    fn formats_like_a_date_string() {
        let date = NaiveDate::from_ymd_opt(2023, 1, 10).unwrap();
        assert_eq!(format_date(to_bson_datetime(date)), "Tue Jan 10 2023");

        let date = NaiveDate::from_ymd_opt(2023, 2, 1).unwrap();
        assert_eq!(format_date(to_bson_datetime(date)), "Wed Feb 01 2023");
    }

    #[test]
    fn round_trips_through_bson_at_midnight() {
        let date = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
        let stored = to_bson_datetime(date);
        assert_eq!(calendar_date(stored), date);
        assert_eq!(stored.timestamp_millis() % 86_400_000, 0);
    }
}
