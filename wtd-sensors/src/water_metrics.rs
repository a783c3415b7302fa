use crate::metric::Metric;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// A snapshot of all seven live readings.
///
/// Snapshots are replaced wholesale on every tick, never merged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaterMetrics {
    /// Tank level (%)
    pub water_level: f64,
    /// Flow rate (L/min)
    pub flow_rate: f64,
    /// Line pressure (bar)
    pub pressure: f64,
    pub ph: f64,
    /// Turbidity (NTU)
    pub turbidity: f64,
    /// Temperature (°C)
    pub temperature: f64,
    /// Dissolved oxygen (mg/L)
    pub dissolved_oxygen: f64,
    pub timestamp: DateTime<FixedOffset>,
}

impl WaterMetrics {
    pub fn value(&self, metric: Metric) -> f64 {
        match metric {
            Metric::WaterLevel => self.water_level,
            Metric::FlowRate => self.flow_rate,
            Metric::Pressure => self.pressure,
            Metric::Ph => self.ph,
            Metric::Turbidity => self.turbidity,
            Metric::Temperature => self.temperature,
            Metric::DissolvedOxygen => self.dissolved_oxygen,
        }
    }
}
