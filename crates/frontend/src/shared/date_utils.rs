/// Utilities for date and time formatting
///
/// Provides consistent date/time formatting across the application
use chrono::{DateTime, NaiveDate, Utc};

/// Format timestamp as `MMM d, yyyy`
/// Example: 2024-03-05T14:02:26Z -> "Mar 5, 2024"
pub fn format_date(value: &DateTime<Utc>) -> String {
    value.format("%b %-d, %Y").to_string()
}

/// Format "YYYY-MM" period as `MMM yyyy`
/// Example: "2024-03" -> "Mar 2024"
pub fn format_period(period: &str) -> String {
    NaiveDate::parse_from_str(&format!("{}-01", period), "%Y-%m-%d")
        .map(|d| d.format("%b %Y").to_string())
        .unwrap_or_else(|_| period.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_date() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 5, 14, 2, 26).unwrap();
        assert_eq!(format_date(&ts), "Mar 5, 2024");
        let ts = Utc.with_ymd_and_hms(2024, 12, 31, 23, 59, 59).unwrap();
        assert_eq!(format_date(&ts), "Dec 31, 2024");
    }

    #[test]
    fn test_format_period() {
        assert_eq!(format_period("2024-03"), "Mar 2024");
        assert_eq!(format_period("invalid"), "invalid");
    }
}
