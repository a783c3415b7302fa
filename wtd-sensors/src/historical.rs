use crate::metric::Metric;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// One simulated hourly bucket of historical readings.
///
/// Generated once at load and never modified. Dissolved oxygen is not
/// recorded historically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalDataPoint {
    pub timestamp: DateTime<FixedOffset>,
    pub water_level: f64,
    pub flow_rate: f64,
    pub pressure: f64,
    pub ph: f64,
    pub turbidity: f64,
    pub temperature: f64,
}

impl HistoricalDataPoint {
    /// The recorded value for `metric`, or `None` for live-only metrics.
    pub fn value(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::WaterLevel => Some(self.water_level),
            Metric::FlowRate => Some(self.flow_rate),
            Metric::Pressure => Some(self.pressure),
            Metric::Ph => Some(self.ph),
            Metric::Turbidity => Some(self.turbidity),
            Metric::Temperature => Some(self.temperature),
            Metric::DissolvedOxygen => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn value_by_metric() {
        let point = HistoricalDataPoint {
            timestamp: FixedOffset::east_opt(0)
                .unwrap()
                .with_ymd_and_hms(2024, 5, 1, 12, 0, 0)
                .unwrap(),
            water_level: 70.0,
            flow_rate: 130.0,
            pressure: 3.0,
            ph: 7.2,
            turbidity: 2.1,
            temperature: 22.0,
        };
        assert_eq!(point.value(Metric::FlowRate), Some(130.0));
        assert_eq!(point.value(Metric::Ph), Some(7.2));
        assert_eq!(point.value(Metric::DissolvedOxygen), None);
        for metric in Metric::CHARTED {
            assert!(point.value(metric).is_some());
        }
    }
}
