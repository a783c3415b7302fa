//! Threshold alert feed.
//!
//! Alerts are produced on status transitions, not on every reading: a metric
//! that stays in Warning for an hour raises one entry when it enters Warning
//! and one Resolved entry when it drops back to Normal.

use chrono::{DateTime, FixedOffset, TimeDelta};
use serde::Serialize;
use std::collections::VecDeque;
use wtd_sensors::metric::Metric;
use wtd_sensors::sensor_config::{SensorConfig, SensorTable};
use wtd_sensors::status::Status;
use wtd_sensors::water_metrics::WaterMetrics;
use wtd_utils::dates::start_of_day;
use wtd_utils::numbers::with_unit;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertLevel {
    Warning,
    Critical,
    Resolved,
}

impl AlertLevel {
    fn from_status(status: Status) -> AlertLevel {
        match status {
            Status::Normal => AlertLevel::Resolved,
            Status::Warning => AlertLevel::Warning,
            Status::Critical => AlertLevel::Critical,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AlertLevel::Warning => "warning",
            AlertLevel::Critical => "critical",
            AlertLevel::Resolved => "resolved",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Alert {
    pub id: u64,
    pub metric: Metric,
    pub level: AlertLevel,
    pub title: String,
    pub message: String,
    pub value: f64,
    pub raised_at: DateTime<FixedOffset>,
}

impl Alert {
    pub fn is_resolved(&self) -> bool {
        self.level == AlertLevel::Resolved
    }
}

fn describe(metric: Metric, level: AlertLevel, value: f64, config: &SensorConfig) -> (String, String) {
    let reading = with_unit(value, 1, &config.unit);
    match level {
        AlertLevel::Resolved => (
            format!("{} Normalized", metric.label()),
            format!("{} returned to normal at {}", metric.label(), reading),
        ),
        AlertLevel::Warning | AlertLevel::Critical => {
            let threshold = if level == AlertLevel::Critical {
                config.critical
            } else {
                config.warning
            };
            let (adjective, side) = if config.is_low_bad() {
                ("Low", "below")
            } else {
                ("High", "above")
            };
            (
                format!("{} {}", adjective, metric.label()),
                format!(
                    "{} at {}, {} the {} threshold of {}",
                    metric.label(),
                    reading,
                    side,
                    level.as_str(),
                    with_unit(threshold, 1, &config.unit)
                ),
            )
        }
    }
}

/// Newest-first feed of alerts, bounded to [`AlertFeed::CAPACITY`] entries.
#[derive(Debug, Clone, PartialEq)]
pub struct AlertFeed {
    entries: VecDeque<Alert>,
    last: [Status; Metric::ALL.len()],
    next_id: u64,
}

impl Default for AlertFeed {
    fn default() -> Self {
        Self {
            entries: VecDeque::new(),
            last: [Status::Normal; Metric::ALL.len()],
            next_id: 1,
        }
    }
}

impl AlertFeed {
    pub const CAPACITY: usize = 50;

    pub fn new() -> Self {
        Self::default()
    }

    /// A feed seeded with a few recent entries, so a fresh dashboard is not
    /// empty. Sample statuses carry over, so the first reading that clears
    /// them raises a Resolved entry.
    pub fn with_samples(table: &SensorTable, now: DateTime<FixedOffset>) -> Self {
        let mut feed = Self::new();
        let samples = [
            (Metric::Ph, Status::Normal, 7.2, TimeDelta::hours(1)),
            (Metric::WaterLevel, Status::Critical, 96.0, TimeDelta::minutes(15)),
            (Metric::Turbidity, Status::Warning, 5.2, TimeDelta::minutes(2)),
        ];
        for (metric, status, value, ago) in samples {
            feed.push(table, metric, status, value, now - ago);
        }
        feed
    }

    fn push(
        &mut self,
        table: &SensorTable,
        metric: Metric,
        status: Status,
        value: f64,
        raised_at: DateTime<FixedOffset>,
    ) -> &Alert {
        let level = AlertLevel::from_status(status);
        let (title, message) = describe(metric, level, value, table.get(metric));
        self.last[metric.index()] = status;
        self.entries.push_front(Alert {
            id: self.next_id,
            metric,
            level,
            title,
            message,
            value,
            raised_at,
        });
        self.next_id += 1;
        self.entries.truncate(Self::CAPACITY);
        &self.entries[0]
    }

    /// Compare a new snapshot against the last known statuses and record an
    /// entry for every metric whose status changed. Returns how many entries
    /// were added.
    pub fn observe(&mut self, table: &SensorTable, metrics: &WaterMetrics) -> usize {
        let mut added = 0;
        for metric in Metric::ALL {
            let value = metrics.value(metric);
            let status = table.status(metric, value);
            if status == self.last[metric.index()] {
                continue;
            }
            let alert = self.push(table, metric, status, value, metrics.timestamp);
            log::info!("{}: {}", alert.level.as_str(), alert.message);
            added += 1;
        }
        added
    }

    pub fn last_status(&self, metric: Metric) -> Status {
        self.last[metric.index()]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries newest first, optionally restricted to critical ones.
    pub fn entries(&self, critical_only: bool) -> impl Iterator<Item = &Alert> {
        self.entries
            .iter()
            .filter(move |a| !critical_only || a.level == AlertLevel::Critical)
    }

    /// The newest entry per metric, where that entry is still unresolved.
    pub fn active(&self, critical_only: bool) -> Vec<&Alert> {
        let mut seen = [false; Metric::ALL.len()];
        let mut active = Vec::new();
        for alert in &self.entries {
            let slot = &mut seen[alert.metric.index()];
            if *slot {
                continue;
            }
            *slot = true;
            if alert.is_resolved() || (critical_only && alert.level != AlertLevel::Critical) {
                continue;
            }
            active.push(alert);
        }
        active
    }

    /// Active alerts, as in [`AlertFeed::active`], raised since local
    /// midnight of `now`.
    pub fn today_count(&self, now: DateTime<FixedOffset>, critical_only: bool) -> usize {
        let midnight = start_of_day(&now.date_naive(), now.offset());
        self.active(critical_only)
            .into_iter()
            .filter(|a| a.raised_at >= midnight)
            .count()
    }
}
