use chrono::{DateTime, FixedOffset, NaiveDate, TimeDelta};
use std::fmt;
use std::str::FromStr;
use wtd_sensors::error::DashboardError;
use wtd_utils::dates::{end_of_day, format_date, format_short_date, parse_date, start_of_day};

/// Calendar-date bounds for a custom range. `to` is inclusive through the
/// end of that day; an open end runs up to now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CustomRange {
    from: NaiveDate,
    to: Option<NaiveDate>,
}

impl CustomRange {
    pub fn new(from: NaiveDate, to: Option<NaiveDate>) -> Result<Self, DashboardError> {
        if let Some(to) = to {
            if to < from {
                return Err(DashboardError::InvertedRange { from, to });
            }
        }
        Ok(CustomRange { from, to })
    }

    pub fn from(&self) -> NaiveDate {
        self.from
    }

    pub fn to(&self) -> Option<NaiveDate> {
        self.to
    }
}

/// Window of history selected for the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeRange {
    SixHours,
    TwelveHours,
    #[default]
    Day,
    Week,
    Custom(CustomRange),
}

impl TimeRange {
    /// Preset buttons, in display order.
    pub const PRESETS: [TimeRange; 4] = [
        TimeRange::SixHours,
        TimeRange::TwelveHours,
        TimeRange::Day,
        TimeRange::Week,
    ];

    pub fn hours(&self) -> Option<i64> {
        match self {
            TimeRange::SixHours => Some(6),
            TimeRange::TwelveHours => Some(12),
            TimeRange::Day => Some(24),
            TimeRange::Week => Some(168),
            TimeRange::Custom(_) => None,
        }
    }

    pub fn label(&self) -> String {
        match self {
            TimeRange::Custom(range) => match range.to {
                Some(to) if to != range.from => {
                    format!("{} - {}", format_short_date(&range.from), format_short_date(&to))
                }
                Some(_) => format_short_date(&range.from),
                None => format!("Since {}", format_short_date(&range.from)),
            },
            preset => preset.to_string(),
        }
    }

    /// Inclusive `[start, end]` bounds relative to `now`. Custom day
    /// boundaries are taken in `now`'s offset.
    pub fn window(&self, now: DateTime<FixedOffset>) -> (DateTime<FixedOffset>, DateTime<FixedOffset>) {
        match self {
            TimeRange::Custom(range) => {
                let offset = now.offset();
                let start = start_of_day(&range.from, offset);
                let end = match range.to {
                    Some(to) => end_of_day(&to, offset),
                    None => now,
                };
                (start, end)
            }
            preset => {
                let hours = preset.hours().unwrap_or(24);
                (now - TimeDelta::hours(hours), now)
            }
        }
    }

    pub fn contains(&self, ts: &DateTime<FixedOffset>, now: DateTime<FixedOffset>) -> bool {
        let (start, end) = self.window(now);
        start <= *ts && *ts <= end
    }

    /// Labels need a date once the window spans more than a day.
    pub fn includes_date(&self, now: DateTime<FixedOffset>) -> bool {
        let (start, end) = self.window(now);
        end - start > TimeDelta::hours(24)
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeRange::SixHours => f.write_str("6h"),
            TimeRange::TwelveHours => f.write_str("12h"),
            TimeRange::Day => f.write_str("24h"),
            TimeRange::Week => f.write_str("7d"),
            TimeRange::Custom(range) => {
                write!(f, "{}..", format_date(&range.from))?;
                if let Some(to) = range.to {
                    f.write_str(&format_date(&to))?;
                }
                Ok(())
            }
        }
    }
}

impl FromStr for TimeRange {
    type Err = DashboardError;

    /// Accepts "6h", "12h", "24h", "7d", "YYYY-MM-DD..YYYY-MM-DD" or an
    /// open-ended "YYYY-MM-DD..".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.to_lowercase().as_str() {
            "6h" => return Ok(TimeRange::SixHours),
            "12h" => return Ok(TimeRange::TwelveHours),
            "24h" | "1d" => return Ok(TimeRange::Day),
            "7d" | "168h" => return Ok(TimeRange::Week),
            _ => {}
        }

        let (from, to) = s
            .split_once("..")
            .ok_or_else(|| DashboardError::TimeRange(s.to_string()))?;
        let from = parse_date(from).map_err(|_| DashboardError::TimeRange(s.to_string()))?;
        let to = match to.trim() {
            "" => None,
            to => Some(parse_date(to).map_err(|_| DashboardError::TimeRange(s.to_string()))?),
        };
        Ok(TimeRange::Custom(CustomRange::new(from, to)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::noon;
    use chrono::TimeZone;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn preset_windows() {
        let now = noon();
        assert_eq!(TimeRange::SixHours.window(now), (now - TimeDelta::hours(6), now));
        assert_eq!(TimeRange::Week.window(now).0, now - TimeDelta::days(7));
        assert!(TimeRange::Day.contains(&(now - TimeDelta::hours(24)), now));
        assert!(!TimeRange::Day.contains(&(now - TimeDelta::hours(25)), now));
    }

    #[test]
    fn custom_window_covers_whole_days() {
        let range = TimeRange::Custom(CustomRange::new(date(2024, 10, 10), Some(date(2024, 10, 11))).unwrap());
        let (start, end) = range.window(noon());
        let utc = FixedOffset::east_opt(0).unwrap();
        assert_eq!(start, utc.with_ymd_and_hms(2024, 10, 10, 0, 0, 0).unwrap());
        assert_eq!(end, utc.with_ymd_and_hms(2024, 10, 11, 23, 59, 59).unwrap());
    }

    #[test]
    fn open_custom_range_ends_now() {
        let range = TimeRange::Custom(CustomRange::new(date(2024, 10, 13), None).unwrap());
        assert_eq!(range.window(noon()).1, noon());
        assert!(range.includes_date(noon()));
        assert_eq!(range.label(), "Since Oct 13");
    }

    #[test]
    fn inverted_custom_range_is_rejected() {
        assert_eq!(
            CustomRange::new(date(2024, 10, 12), Some(date(2024, 10, 11))),
            Err(DashboardError::InvertedRange {
                from: date(2024, 10, 12),
                to: date(2024, 10, 11)
            })
        );
        assert!("2024-10-12..2024-10-11".parse::<TimeRange>().is_err());
    }

    #[test]
    fn labels_include_date_beyond_a_day() {
        assert!(!TimeRange::SixHours.includes_date(noon()));
        assert!(!TimeRange::Day.includes_date(noon()));
        assert!(TimeRange::Week.includes_date(noon()));
        let single = TimeRange::Custom(CustomRange::new(date(2024, 10, 1), Some(date(2024, 10, 1))).unwrap());
        assert!(!single.includes_date(noon()));
        assert_eq!(single.label(), "Oct 1");
    }

    #[test]
    fn parse_and_display() {
        assert_eq!("7d".parse::<TimeRange>().unwrap(), TimeRange::Week);
        assert_eq!(" 12H ".parse::<TimeRange>().unwrap(), TimeRange::TwelveHours);
        for preset in TimeRange::PRESETS {
            assert_eq!(preset.to_string().parse::<TimeRange>().unwrap(), preset);
        }
        let custom: TimeRange = "2024-10-01..2024-10-05".parse().unwrap();
        assert_eq!(custom.to_string(), "2024-10-01..2024-10-05");
        assert_eq!(custom.label(), "Oct 1 - Oct 5");
        let open: TimeRange = "2024-10-01..".parse().unwrap();
        assert_eq!(open.to_string(), "2024-10-01..");
        assert_eq!(
            "fortnight".parse::<TimeRange>(),
            Err(DashboardError::TimeRange("fortnight".to_string()))
        );
    }
}
