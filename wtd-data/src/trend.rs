use crate::statistics::summarize;
use crate::time_range::TimeRange;
use chrono::{DateTime, FixedOffset};
use serde::Serialize;
use wtd_sensors::historical::HistoricalDataPoint;
use wtd_sensors::metric::Metric;

/// Changes smaller than this many percent read as stable.
pub const STABLE_BAND_PCT: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Up,
    Down,
    Stable,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Trend {
    pub direction: TrendDirection,
    /// Signed change from the baseline, in percent.
    pub percent: f64,
}

impl Trend {
    pub fn against_baseline(current: f64, baseline: f64) -> Trend {
        if baseline == 0.0 || !baseline.is_finite() || !current.is_finite() {
            return Trend {
                direction: TrendDirection::Stable,
                percent: 0.0,
            };
        }
        let percent = (current - baseline) / baseline.abs() * 100.0;
        let direction = if percent.abs() < STABLE_BAND_PCT {
            TrendDirection::Stable
        } else if percent > 0.0 {
            TrendDirection::Up
        } else {
            TrendDirection::Down
        };
        Trend { direction, percent }
    }

    /// Card caption, e.g. "+2.3% from avg".
    pub fn text(&self) -> String {
        match self.direction {
            TrendDirection::Stable => "Stable".to_string(),
            _ => format!("{:+.1}% from avg", self.percent),
        }
    }
}

/// Average of `metric` over the 24 hours before `now`, if any history
/// covers that window.
pub fn baseline(
    history: &[HistoricalDataPoint],
    metric: Metric,
    now: DateTime<FixedOffset>,
) -> Option<f64> {
    let values: Vec<f64> = history
        .iter()
        .filter(|p| TimeRange::Day.contains(&p.timestamp, now))
        .filter_map(|p| p.value(metric))
        .collect();
    if values.is_empty() {
        return None;
    }
    Some(summarize(&values).avg)
}
