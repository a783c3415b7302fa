//! Shared utility functions for WTD crates.

/// Date and time utility functions
pub mod dates {
    use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, TimeDelta, TimeZone};

    /// Format a NaiveDate as "YYYY-MM-DD" (HTML date input format)
    pub fn format_date(date: &NaiveDate) -> String {
        date.format("%Y-%m-%d").to_string()
    }

    /// Parse a date string in "YYYY-MM-DD" format
    pub fn parse_date(s: &str) -> anyhow::Result<NaiveDate> {
        Ok(NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")?)
    }

    /// "Oct 14"
    pub fn format_short_date(date: &NaiveDate) -> String {
        date.format("%b %-d").to_string()
    }

    /// Chart axis label: "09:00", or "14 Oct 09:00" when the date is needed
    /// to keep labels unique across a multi-day span.
    pub fn format_time_label(ts: &DateTime<FixedOffset>, include_date: bool) -> String {
        if include_date {
            ts.format("%-d %b %H:%M").to_string()
        } else {
            ts.format("%H:%M").to_string()
        }
    }

    /// Midnight at the start of `date` in `offset`.
    pub fn start_of_day(date: &NaiveDate, offset: &FixedOffset) -> DateTime<FixedOffset> {
        let naive = date.and_time(NaiveTime::MIN);
        offset.from_utc_datetime(&(naive - TimeDelta::seconds(offset.local_minus_utc() as i64)))
    }

    /// The last second of `date` in `offset`.
    pub fn end_of_day(date: &NaiveDate, offset: &FixedOffset) -> DateTime<FixedOffset> {
        start_of_day(date, offset) + TimeDelta::days(1) - TimeDelta::seconds(1)
    }

    /// Long relative time: "Just now", "2 min ago", "1 hour ago", "3 days ago".
    pub fn relative_time(then: &DateTime<FixedOffset>, now: &DateTime<FixedOffset>) -> String {
        let minutes = (*now - *then).num_minutes();
        if minutes < 1 {
            return "Just now".to_string();
        }
        if minutes < 60 {
            return format!("{} min ago", minutes);
        }
        let hours = minutes / 60;
        if hours < 24 {
            return if hours == 1 {
                "1 hour ago".to_string()
            } else {
                format!("{} hours ago", hours)
            };
        }
        let days = hours / 24;
        if days == 1 {
            "1 day ago".to_string()
        } else {
            format!("{} days ago", days)
        }
    }

    /// Compact relative time for narrow panels: "now", "2m ago", "1h ago", "3d ago".
    pub fn relative_time_compact(
        then: &DateTime<FixedOffset>,
        now: &DateTime<FixedOffset>,
    ) -> String {
        let minutes = (*now - *then).num_minutes();
        if minutes < 1 {
            "now".to_string()
        } else if minutes < 60 {
            format!("{}m ago", minutes)
        } else if minutes < 60 * 24 {
            format!("{}h ago", minutes / 60)
        } else {
            format!("{}d ago", minutes / (60 * 24))
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        fn utc() -> FixedOffset {
            FixedOffset::east_opt(0).unwrap()
        }

        #[test]
        fn test_format_and_parse() {
            let date = NaiveDate::from_ymd_opt(2023, 6, 15).unwrap();
            let formatted = format_date(&date);
            assert_eq!(formatted, "2023-06-15");
            let parsed = parse_date(&formatted).unwrap();
            assert_eq!(parsed, date);
            assert!(parse_date("15/06/2023").is_err());
        }

        #[test]
        fn test_short_dates() {
            let date = NaiveDate::from_ymd_opt(2024, 10, 4).unwrap();
            assert_eq!(format_short_date(&date), "Oct 4");
        }

        #[test]
        fn test_time_labels() {
            let ts = utc().with_ymd_and_hms(2024, 10, 14, 9, 5, 0).unwrap();
            assert_eq!(format_time_label(&ts, false), "09:05");
            assert_eq!(format_time_label(&ts, true), "14 Oct 09:05");
        }

        #[test]
        fn test_day_bounds_respect_offset() {
            let offset = FixedOffset::east_opt(2 * 3600).unwrap();
            let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
            let start = start_of_day(&date, &offset);
            assert_eq!(start.to_rfc3339(), "2024-03-01T00:00:00+02:00");
            let end = end_of_day(&date, &offset);
            assert_eq!(end.to_rfc3339(), "2024-03-01T23:59:59+02:00");
        }

        #[test]
        fn test_relative_time() {
            let now = utc().with_ymd_and_hms(2024, 10, 14, 12, 0, 0).unwrap();
            let ago = |mins: i64| now - TimeDelta::minutes(mins);
            assert_eq!(relative_time(&ago(0), &now), "Just now");
            assert_eq!(relative_time(&ago(2), &now), "2 min ago");
            assert_eq!(relative_time(&ago(60), &now), "1 hour ago");
            assert_eq!(relative_time(&ago(185), &now), "3 hours ago");
            assert_eq!(relative_time(&ago(60 * 24), &now), "1 day ago");
            assert_eq!(relative_time(&ago(60 * 72), &now), "3 days ago");

            assert_eq!(relative_time_compact(&ago(0), &now), "now");
            assert_eq!(relative_time_compact(&ago(15), &now), "15m ago");
            assert_eq!(relative_time_compact(&ago(61), &now), "1h ago");
            assert_eq!(relative_time_compact(&ago(60 * 50), &now), "2d ago");
        }
    }
}

/// Number formatting helpers
pub mod numbers {
    /// Compact count: 950 -> "950", 24_512 -> "24.5k", 3_200_000 -> "3.2M"
    pub fn format_count(n: usize) -> String {
        if n >= 1_000_000 {
            format!("{:.1}M", n as f64 / 1_000_000.0)
        } else if n >= 1_000 {
            format!("{:.1}k", n as f64 / 1_000.0)
        } else {
            n.to_string()
        }
    }

    /// Value with its unit; percentages and degree signs attach without a space.
    pub fn with_unit(value: f64, precision: usize, unit: &str) -> String {
        if unit == "%" || unit.starts_with('°') {
            format!("{:.*}{}", precision, value, unit)
        } else {
            format!("{:.*} {}", precision, value, unit)
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_format_count() {
            assert_eq!(format_count(0), "0");
            assert_eq!(format_count(950), "950");
            assert_eq!(format_count(24_512), "24.5k");
            assert_eq!(format_count(3_200_000), "3.2M");
        }

        #[test]
        fn test_with_unit() {
            assert_eq!(with_unit(96.04, 1, "%"), "96.0%");
            assert_eq!(with_unit(5.24, 1, "NTU"), "5.2 NTU");
            assert_eq!(with_unit(31.0, 1, "°C"), "31.0°C");
        }
    }
}
