//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use crate::theme::Palette;
use chrono::{DateTime, FixedOffset};
use dioxus::prelude::*;
use wtd_data::alerts::AlertFeed;
use wtd_data::chart::{filter_points, ChartPoint, HistoryChart};
use wtd_data::feed::PondFeed;
use wtd_data::session::{Pond, Session};
use wtd_data::settings::Settings;
use wtd_sensors::historical::HistoricalDataPoint;
use wtd_sensors::sensor_config::SensorTable;
use wtd_sensors::water_metrics::WaterMetrics;

/// Shared state for the dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Sensor ranges and thresholds (None until loaded)
    pub sensors: Signal<Option<SensorTable>>,
    /// Whether the sensor table is still loading
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
    /// Live readings and per-pond history source
    pub feed: Signal<PondFeed>,
    /// Latest live snapshot, replaced every tick
    pub metrics: Signal<WaterMetrics>,
    /// Hourly history for the selected pond
    pub history: Signal<Vec<HistoricalDataPoint>>,
    /// Time range, zoom, drag and brush state of the history chart
    pub chart: Signal<HistoryChart>,
    pub alerts: Signal<AlertFeed>,
    /// Active tab, open overlay and pond
    pub session: Signal<Session>,
    pub settings: Signal<Settings>,
    /// OS dark-mode preference, used when the theme is "system"
    pub system_dark: Signal<bool>,
    /// Time of the last tick
    pub now: Signal<DateTime<FixedOffset>>,
}

impl AppState {
    /// Create a new AppState seeded with `seed` at time `now`.
    pub fn new(seed: u64, now: DateTime<FixedOffset>) -> Self {
        let feed = PondFeed::new(seed);
        let metrics = feed.current_metrics(now);
        let history = feed.history(Pond::default(), now);
        Self {
            sensors: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            feed: Signal::new(feed),
            metrics: Signal::new(metrics),
            history: Signal::new(history),
            chart: Signal::new(HistoryChart::new()),
            alerts: Signal::new(AlertFeed::new()),
            session: Signal::new(Session::new()),
            settings: Signal::new(Settings::default()),
            system_dark: Signal::new(false),
            now: Signal::new(now),
        }
    }

    /// Parse the embedded sensor table and seed the alert feed. Reads are
    /// untracked so a mount effect calling this does not re-run on ticks.
    pub fn load_sensors(&mut self) {
        match SensorTable::embedded() {
            Ok(table) => {
                let now = *self.now.peek();
                self.alerts.set(AlertFeed::with_samples(&table, now));
                self.sensors.set(Some(table));
            }
            Err(e) => {
                log::error!("Failed to load sensor table: {}", e);
                self.error_msg
                    .set(Some(format!("Failed to load sensor configuration: {}", e)));
            }
        }
        self.loading.set(false);
    }

    /// Replace the live snapshot and record any status transitions.
    pub fn tick(&mut self, now: DateTime<FixedOffset>) {
        let metrics = {
            let sensors = self.sensors.peek();
            let history = self.history.peek();
            self.feed.peek().tick(
                now,
                (*sensors).as_ref(),
                &history,
                &mut self.alerts.write(),
                &mut self.chart.write(),
            )
        };
        self.metrics.set(metrics);
        self.now.set(now);
    }

    /// Switch ponds, regenerating history when the pond changes.
    pub fn select_pond(&mut self, pond: Pond) {
        let now = *self.now.peek();
        let history = self.feed.peek().select_pond(
            pond,
            now,
            &mut self.session.write(),
            &mut self.chart.write(),
        );
        if let Some(history) = history {
            self.history.set(history);
        }
    }

    pub fn is_dark(&self) -> bool {
        self.settings.read().theme.is_dark((self.system_dark)())
    }

    pub fn palette(&self) -> Palette {
        Palette::for_dark(self.is_dark())
    }

    /// History filtered to the chart's time range, as of the last tick.
    pub fn chart_points(&self) -> Vec<ChartPoint> {
        let range = self.chart.read().time_range();
        filter_points(&self.history.read(), range, (self.now)())
    }
}
