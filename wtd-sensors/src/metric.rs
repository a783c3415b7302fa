use crate::error::DashboardError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the seven water-treatment sensor channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    WaterLevel,
    FlowRate,
    Pressure,
    Ph,
    Turbidity,
    Temperature,
    DissolvedOxygen,
}

impl Metric {
    /// Every sensor, in display order.
    pub const ALL: [Metric; 7] = [
        Metric::WaterLevel,
        Metric::FlowRate,
        Metric::Pressure,
        Metric::Ph,
        Metric::Turbidity,
        Metric::Temperature,
        Metric::DissolvedOxygen,
    ];

    /// Sensors recorded in historical data and drawn as gauges.
    /// Dissolved oxygen is only available as a live reading.
    pub const CHARTED: [Metric; 6] = [
        Metric::WaterLevel,
        Metric::FlowRate,
        Metric::Pressure,
        Metric::Ph,
        Metric::Turbidity,
        Metric::Temperature,
    ];

    /// Position in [`Metric::ALL`].
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Stable snake_case key used in fixtures, CSV headers and CLI flags.
    pub fn key(&self) -> &'static str {
        match self {
            Metric::WaterLevel => "water_level",
            Metric::FlowRate => "flow_rate",
            Metric::Pressure => "pressure",
            Metric::Ph => "ph",
            Metric::Turbidity => "turbidity",
            Metric::Temperature => "temperature",
            Metric::DissolvedOxygen => "dissolved_oxygen",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Metric::WaterLevel => "Water Level",
            Metric::FlowRate => "Flow Rate",
            Metric::Pressure => "Pressure",
            Metric::Ph => "pH Level",
            Metric::Turbidity => "Turbidity",
            Metric::Temperature => "Temperature",
            Metric::DissolvedOxygen => "Dissolved O\u{2082}",
        }
    }

    pub fn is_charted(&self) -> bool {
        !matches!(self, Metric::DissolvedOxygen)
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Metric {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        Metric::ALL
            .iter()
            .copied()
            .find(|m| m.key() == key)
            .ok_or_else(|| DashboardError::UnknownMetric(s.to_string()))
    }
}
