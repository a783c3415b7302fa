//! What happens on each timer tick and on a pond switch.
//!
//! The operations work on borrowed pieces of dashboard state so the UI can
//! keep each piece in its own signal.

use crate::alerts::AlertFeed;
use crate::chart::{filter_points, HistoryChart};
use crate::session::{Pond, Session};
use crate::simulator::{Simulator, DEFAULT_LOOKBACK_HOURS};
use chrono::{DateTime, FixedOffset};
use wtd_sensors::historical::HistoricalDataPoint;
use wtd_sensors::sensor_config::SensorTable;
use wtd_sensors::water_metrics::WaterMetrics;

/// Live readings from one shared simulator, plus per-pond history.
#[derive(Clone)]
pub struct PondFeed {
    seed: u64,
    live: Simulator,
}

impl PondFeed {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            live: Simulator::new(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn current_metrics(&self, now: DateTime<FixedOffset>) -> WaterMetrics {
        self.live.current_metrics(now)
    }

    /// Hourly history for `pond` ending at `now`. The same pond always gets
    /// the same generator, so switching back shows the same past.
    pub fn history(&self, pond: Pond, now: DateTime<FixedOffset>) -> Vec<HistoricalDataPoint> {
        Simulator::new(pond.seed(self.seed)).historical(now, DEFAULT_LOOKBACK_HOURS)
    }

    /// Take a reading at `now`, record status transitions once the sensor
    /// table is loaded, and drop chart windows that the moved range window
    /// no longer fits.
    pub fn tick(
        &self,
        now: DateTime<FixedOffset>,
        table: Option<&SensorTable>,
        history: &[HistoricalDataPoint],
        alerts: &mut AlertFeed,
        chart: &mut HistoryChart,
    ) -> WaterMetrics {
        let metrics = self.current_metrics(now);
        if let Some(table) = table {
            alerts.observe(table, &metrics);
        }
        let len = filter_points(history, chart.time_range(), now).len();
        if !chart.fits(len) {
            chart.sync(len);
        }
        metrics
    }

    /// Switch `session` to `pond`. When the pond changes, the chart's zoom,
    /// brush and any drag are cleared and the new pond's history returned.
    pub fn select_pond(
        &self,
        pond: Pond,
        now: DateTime<FixedOffset>,
        session: &mut Session,
        chart: &mut HistoryChart,
    ) -> Option<Vec<HistoricalDataPoint>> {
        if !session.select_pond(pond) {
            return None;
        }
        log::info!("Switched to {}", pond);
        chart.reset_view();
        Some(self.history(pond, now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::noon;
    use crate::time_range::TimeRange;
    use chrono::TimeDelta;

    fn zoomed_day_chart() -> HistoryChart {
        let mut chart = HistoryChart::new();
        chart.set_time_range(TimeRange::Day);
        chart.begin_selection(18);
        chart.update_selection(24);
        chart.end_selection(25);
        assert!(chart.is_zoomed());
        chart
    }

    #[test]
    fn pond_switch_resets_the_chart_view() {
        let feed = PondFeed::new(5);
        let mut session = Session::new();
        let mut chart = zoomed_day_chart();
        chart.set_brush(2, 8, 25);
        chart.begin_selection(4);
        chart.update_selection(9);

        let before = feed.history(session.pond(), noon());
        let history = feed
            .select_pond(Pond(1), noon(), &mut session, &mut chart)
            .unwrap();
        assert_eq!(session.pond(), Pond(1));
        assert_ne!(history, before);
        assert_eq!(history.len(), before.len());
        assert!(!chart.is_zoomed());
        assert!(chart.brush().is_none());
        assert!(!chart.is_selecting());
        assert!(chart.selection_range().is_none());
        assert_eq!(chart.time_range(), TimeRange::Day);

        // same pond again is a no-op
        let mut chart = zoomed_day_chart();
        assert!(feed.select_pond(Pond(1), noon(), &mut session, &mut chart).is_none());
        assert!(chart.is_zoomed());
    }

    #[test]
    fn pond_history_is_repeatable() {
        let feed = PondFeed::new(5);
        assert_eq!(feed.history(Pond(2), noon()), feed.history(Pond(2), noon()));
        assert_ne!(feed.history(Pond(2), noon()), feed.history(Pond(4), noon()));
    }

    #[test]
    fn tick_drops_windows_the_range_outgrew() {
        let feed = PondFeed::new(8);
        let history = feed.history(Pond::default(), noon());
        let mut alerts = AlertFeed::new();
        let mut chart = zoomed_day_chart();

        // still fits on the clock it was made at
        feed.tick(noon(), None, &history, &mut alerts, &mut chart);
        assert!(chart.is_zoomed());

        // three hours on the day window only overlaps 22 generated points
        let later = noon() + TimeDelta::hours(3);
        let metrics = feed.tick(later, None, &history, &mut alerts, &mut chart);
        assert_eq!(metrics.timestamp, later);
        assert!(!chart.is_zoomed());
        assert!(alerts.is_empty());
    }

    #[test]
    fn tick_records_transitions_once_sensors_load() {
        let feed = PondFeed::new(8);
        let table = SensorTable::embedded().unwrap();
        let mut alerts = AlertFeed::with_samples(&table, noon());
        let mut chart = HistoryChart::new();
        let before = alerts.len();

        let metrics = feed.tick(noon(), Some(&table), &[], &mut alerts, &mut chart);
        for metric in wtd_sensors::metric::Metric::ALL {
            assert_eq!(
                alerts.last_status(metric),
                table.status(metric, metrics.value(metric))
            );
        }
        assert!(alerts.len() >= before);
    }
}
