use crate::alerts::AlertFeed;
use chrono::{DateTime, FixedOffset, Timelike};
use serde::Serialize;
use wtd_utils::numbers::format_count;

/// Reported uptime. The mock plant never goes down.
pub const SYSTEM_UPTIME_PCT: f64 = 98.7;

/// Readings each sensor is assumed to log per minute.
pub const SAMPLES_PER_SENSOR_MINUTE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SystemPerformance {
    pub uptime_pct: f64,
    pub sensors_online: usize,
    pub sensors_total: usize,
    pub data_points_today: usize,
    pub alerts_today: usize,
}

impl SystemPerformance {
    /// Figures for the dashboard panel. Data points grow with the time of day
    /// at [`SAMPLES_PER_SENSOR_MINUTE`] per online sensor.
    pub fn compute(
        sensors_online: usize,
        sensors_total: usize,
        alerts: &AlertFeed,
        now: DateTime<FixedOffset>,
    ) -> Self {
        let minutes = (now.hour() * 60 + now.minute()) as usize;
        Self {
            uptime_pct: SYSTEM_UPTIME_PCT,
            sensors_online,
            sensors_total,
            data_points_today: minutes * SAMPLES_PER_SENSOR_MINUTE * sensors_online,
            alerts_today: alerts.today_count(now, false),
        }
    }

    pub fn uptime_text(&self) -> String {
        format!("{:.1}%", self.uptime_pct)
    }

    pub fn sensors_text(&self) -> String {
        format!("{}/{}", self.sensors_online, self.sensors_total)
    }

    pub fn data_points_text(&self) -> String {
        format_count(self.data_points_today)
    }
}
