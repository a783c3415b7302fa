use chrono::NaiveDate;
use std::fmt;

/// Errors raised while loading reference data or interpreting user input.
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardError {
    /// A metric key that does not name one of the seven sensors.
    UnknownMetric(String),
    /// The embedded sensor fixture is malformed or incomplete.
    SensorFixture(String),
    /// A time range string that is neither a preset nor a custom range.
    TimeRange(String),
    /// A custom range that ends before it starts.
    InvertedRange { from: NaiveDate, to: NaiveDate },
}

impl fmt::Display for DashboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DashboardError::UnknownMetric(key) => write!(f, "Unknown metric: {}", key),
            DashboardError::SensorFixture(msg) => write!(f, "Sensor fixture error: {}", msg),
            DashboardError::TimeRange(s) => write!(f, "Invalid time range: {}", s),
            DashboardError::InvertedRange { from, to } => {
                write!(f, "Date range ends ({}) before it starts ({})", to, from)
            }
        }
    }
}

impl std::error::Error for DashboardError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let e = DashboardError::UnknownMetric("salinity".to_string());
        assert_eq!(e.to_string(), "Unknown metric: salinity");

        let from = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        let to = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let e = DashboardError::InvertedRange { from, to };
        assert_eq!(
            e.to_string(),
            "Date range ends (2024-03-01) before it starts (2024-03-10)"
        );
    }
}
