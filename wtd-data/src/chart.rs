//! State behind the historical chart.
//!
//! [`HistoryChart`] owns the user's choices (time range, active metrics,
//! zoom window, in-progress drag and overview brush) but not the data. The
//! caller filters the history with [`filter_points`] and hands the result to
//! the query methods, which keeps the controller cheap to store in a signal.

use crate::statistics::{summarize, MetricSummary};
use crate::time_range::TimeRange;
use crate::zoom::{self, ZoomWindow};
use chrono::{DateTime, FixedOffset};
use wtd_sensors::historical::HistoricalDataPoint;
use wtd_sensors::metric::Metric;
use wtd_utils::dates::format_time_label;

/// Metrics plotted before the user picks any.
pub const DEFAULT_METRICS: [Metric; 2] = [Metric::WaterLevel, Metric::FlowRate];

/// A historical point inside the selected time range, with its axis label.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    /// Position in the filtered series.
    pub index: usize,
    pub label: String,
    pub point: HistoricalDataPoint,
}

impl ChartPoint {
    pub fn value(&self, metric: Metric) -> Option<f64> {
        self.point.value(metric)
    }
}

/// Keep the points inside `range` (inclusive at both ends), oldest first.
pub fn filter_points(
    data: &[HistoricalDataPoint],
    range: TimeRange,
    now: DateTime<FixedOffset>,
) -> Vec<ChartPoint> {
    let (start, end) = range.window(now);
    let include_date = range.includes_date(now);

    data.iter()
        .filter(|p| start <= p.timestamp && p.timestamp <= end)
        .enumerate()
        .map(|(index, p)| ChartPoint {
            index,
            label: format_time_label(&p.timestamp, include_date),
            point: p.clone(),
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Selection {
    anchor: usize,
    current: Option<usize>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HistoryChart {
    time_range: TimeRange,
    active: Vec<Metric>,
    zoom: Option<ZoomWindow>,
    selection: Option<Selection>,
    brush: Option<ZoomWindow>,
}

impl Default for HistoryChart {
    fn default() -> Self {
        Self {
            time_range: TimeRange::default(),
            active: DEFAULT_METRICS.to_vec(),
            zoom: None,
            selection: None,
            brush: None,
        }
    }
}

impl HistoryChart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn time_range(&self) -> TimeRange {
        self.time_range
    }

    /// Switch ranges. Indices from the old range mean nothing in the new one,
    /// so zoom, brush and any drag are dropped.
    pub fn set_time_range(&mut self, range: TimeRange) {
        self.time_range = range;
        self.zoom = None;
        self.brush = None;
        self.selection = None;
    }

    pub fn active_metrics(&self) -> &[Metric] {
        &self.active
    }

    pub fn is_active(&self, metric: Metric) -> bool {
        self.active.contains(&metric)
    }

    /// Remove `metric` if plotted, append it otherwise. Live-only metrics are
    /// ignored.
    pub fn toggle_metric(&mut self, metric: Metric) {
        if !metric.is_charted() {
            return;
        }
        if let Some(pos) = self.active.iter().position(|m| *m == metric) {
            self.active.remove(pos);
        } else {
            self.active.push(metric);
        }
    }

    pub fn zoom(&self) -> Option<ZoomWindow> {
        self.zoom
    }

    pub fn is_zoomed(&self) -> bool {
        self.zoom.is_some()
    }

    /// Points covered by the zoom window, or all of them.
    pub fn visible<'a>(&self, points: &'a [ChartPoint]) -> &'a [ChartPoint] {
        zoom::visible(self.zoom, points)
    }

    /// Points actually drawn: the zoomed slice, or the brushed slice when
    /// not zoomed.
    pub fn rendered<'a>(&self, points: &'a [ChartPoint]) -> &'a [ChartPoint] {
        match (self.zoom, self.brush) {
            (None, Some(brush)) => brush.slice(points),
            _ => self.visible(points),
        }
    }

    /// Summary of every active metric over the visible points.
    pub fn statistics(&self, points: &[ChartPoint]) -> Vec<MetricSummary> {
        let visible = self.visible(points);
        self.active
            .iter()
            .map(|&metric| {
                let values: Vec<f64> = visible.iter().filter_map(|p| p.value(metric)).collect();
                MetricSummary {
                    metric,
                    summary: summarize(&values),
                }
            })
            .collect()
    }

    pub fn zoom_in(&mut self, len: usize) {
        self.zoom = zoom::zoom_in(self.zoom, len);
    }

    pub fn zoom_out(&mut self, len: usize) {
        self.zoom = zoom::zoom_out(self.zoom, len);
    }

    pub fn reset_zoom(&mut self) {
        self.zoom = None;
    }

    /// Pointer pressed over visible point `index`.
    pub fn begin_selection(&mut self, index: usize) {
        self.selection = Some(Selection {
            anchor: index,
            current: None,
        });
    }

    /// Pointer moved over visible point `index`; ignored unless dragging.
    pub fn update_selection(&mut self, index: usize) {
        if let Some(selection) = self.selection.as_mut() {
            selection.current = Some(index);
        }
    }

    pub fn is_selecting(&self) -> bool {
        self.selection.is_some()
    }

    /// Sorted visible-index span of the drag so far, for shading.
    pub fn selection_range(&self) -> Option<(usize, usize)> {
        let selection = self.selection?;
        let current = selection.current?;
        Some((selection.anchor.min(current), selection.anchor.max(current)))
    }

    /// Pointer released or left the plot. The drag is applied as a zoom when
    /// it moved and always cleared afterwards.
    pub fn end_selection(&mut self, len: usize) {
        if let Some(Selection {
            anchor,
            current: Some(current),
        }) = self.selection.take()
        {
            self.zoom = zoom::apply_selection(self.zoom, anchor, current, len);
        }
    }

    pub fn brush(&self) -> Option<ZoomWindow> {
        self.brush
    }

    /// Set the overview brush. A brush covering everything is the same as no
    /// brush.
    pub fn set_brush(&mut self, start: usize, end: usize, len: usize) {
        let (start, end) = (start.min(end), start.max(end));
        self.brush = match ZoomWindow::new(start, end, len) {
            Some(w) if w.left() == 0 && w.right() + 1 == len => None,
            other => other,
        };
    }

    pub fn clear_brush(&mut self) {
        self.brush = None;
    }

    /// Drop zoom, brush and any drag while keeping the range and metrics.
    pub fn reset_view(&mut self) {
        self.zoom = None;
        self.brush = None;
        self.selection = None;
    }

    /// Whether the zoom and brush windows are valid for `len` points.
    pub fn fits(&self, len: usize) -> bool {
        self.zoom.map_or(true, |w| w.fits(len)) && self.brush.map_or(true, |w| w.fits(len))
    }

    /// Drop windows that no longer fit after the filtered series changed
    /// length (new history, or time has moved on).
    pub fn sync(&mut self, len: usize) {
        if self.zoom.is_some_and(|w| !w.fits(len)) {
            log::debug!("Dropping zoom window that no longer fits {} points", len);
            self.zoom = None;
        }
        if self.brush.is_some_and(|w| !w.fits(len)) {
            self.brush = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulator::Simulator;
    use crate::test_support::noon;
    use crate::time_range::CustomRange;
    use chrono::{NaiveDate, TimeDelta};

    fn history() -> Vec<HistoricalDataPoint> {
        Simulator::new(21).historical(noon(), 168)
    }

    #[test]
    fn filter_keeps_inclusive_window() {
        let data = history();
        let points = filter_points(&data, TimeRange::Day, noon());
        assert_eq!(points.len(), 25);
        assert_eq!(points[0].point.timestamp, noon() - TimeDelta::hours(24));
        assert_eq!(points[0].label, "12:00");
        assert_eq!(points[24].index, 24);

        assert_eq!(filter_points(&data, TimeRange::SixHours, noon()).len(), 7);
        assert_eq!(filter_points(&data, TimeRange::Week, noon()).len(), 169);
    }

    #[test]
    fn week_labels_carry_the_date() {
        let data = history();
        let points = filter_points(&data, TimeRange::Week, noon());
        assert_eq!(points[0].label, "7 Oct 12:00");
        assert_eq!(points[168].label, "14 Oct 12:00");
    }

    #[test]
    fn custom_range_filters_by_day() {
        let data = history();
        let day = NaiveDate::from_ymd_opt(2024, 10, 10).unwrap();
        let range = TimeRange::Custom(CustomRange::new(day, Some(day)).unwrap());
        let points = filter_points(&data, range, noon());
        assert_eq!(points.len(), 24);
        assert_eq!(points[0].label, "00:00");
        assert_eq!(points[23].label, "23:00");
    }

    #[test]
    fn toggle_appends_and_removes() {
        let mut chart = HistoryChart::new();
        assert_eq!(chart.active_metrics(), &[Metric::WaterLevel, Metric::FlowRate]);
        chart.toggle_metric(Metric::Ph);
        assert_eq!(
            chart.active_metrics(),
            &[Metric::WaterLevel, Metric::FlowRate, Metric::Ph]
        );
        chart.toggle_metric(Metric::WaterLevel);
        assert_eq!(chart.active_metrics(), &[Metric::FlowRate, Metric::Ph]);
        chart.toggle_metric(Metric::DissolvedOxygen);
        assert!(!chart.is_active(Metric::DissolvedOxygen));
    }

    #[test]
    fn range_change_resets_zoom_and_brush() {
        let data = history();
        let points = filter_points(&data, TimeRange::Day, noon());
        let mut chart = HistoryChart::new();
        chart.set_brush(2, 10, points.len());
        assert_eq!(chart.rendered(&points).len(), 9);
        chart.zoom_in(points.len());
        assert!(chart.is_zoomed());
        chart.begin_selection(1);
        chart.set_time_range(TimeRange::Week);
        assert!(!chart.is_zoomed());
        assert!(chart.brush().is_none());
        assert!(!chart.is_selecting());
    }

    #[test]
    fn drag_zooms_relative_to_view() {
        let data = history();
        let points = filter_points(&data, TimeRange::Day, noon());
        let len = points.len();
        let mut chart = HistoryChart::new();

        chart.begin_selection(15);
        chart.update_selection(3);
        assert_eq!(chart.selection_range(), Some((3, 15)));
        chart.end_selection(len);
        assert_eq!(chart.visible(&points).len(), 13);
        assert_eq!(chart.visible(&points)[0].index, 3);
        assert!(!chart.is_selecting());

        chart.begin_selection(2);
        chart.update_selection(6);
        chart.end_selection(len);
        let visible = chart.visible(&points);
        assert_eq!((visible[0].index, visible[visible.len() - 1].index), (5, 9));
    }

    #[test]
    fn click_without_drag_does_nothing() {
        let mut chart = HistoryChart::new();
        chart.begin_selection(4);
        chart.end_selection(25);
        assert!(!chart.is_zoomed());
        chart.update_selection(9);
        assert_eq!(chart.selection_range(), None);
    }

    #[test]
    fn statistics_follow_the_zoom() {
        let data = history();
        let points = filter_points(&data, TimeRange::Day, noon());
        let mut chart = HistoryChart::new();

        let full = chart.statistics(&points);
        assert_eq!(full.len(), 2);
        assert_eq!(full[0].metric, Metric::WaterLevel);

        chart.zoom_in(points.len());
        let zoomed = chart.statistics(&points);
        let visible = chart.visible(&points);
        let expected: Vec<f64> = visible.iter().map(|p| p.point.flow_rate).collect();
        assert_eq!(zoomed[1].summary, summarize(&expected));
        assert!(zoomed[0].summary.min >= full[0].summary.min);
        assert!(zoomed[0].summary.max <= full[0].summary.max);
    }

    #[test]
    fn brush_only_affects_rendering() {
        let data = history();
        let points = filter_points(&data, TimeRange::Day, noon());
        let mut chart = HistoryChart::new();
        let before = chart.statistics(&points);
        chart.set_brush(20, 5, points.len());
        assert_eq!(chart.rendered(&points).len(), 16);
        assert_eq!(chart.visible(&points).len(), 25);
        assert_eq!(chart.statistics(&points), before);

        chart.set_brush(0, 24, points.len());
        assert!(chart.brush().is_none());
    }

    #[test]
    fn zoom_takes_precedence_over_brush() {
        let data = history();
        let points = filter_points(&data, TimeRange::Day, noon());
        let mut chart = HistoryChart::new();
        chart.set_brush(0, 5, points.len());
        chart.zoom_in(points.len());
        assert_eq!(chart.rendered(&points), chart.visible(&points));
        chart.reset_zoom();
        assert_eq!(chart.rendered(&points).len(), 6);
    }

    #[test]
    fn sync_drops_stale_windows() {
        let mut chart = HistoryChart::new();
        chart.zoom_in(25);
        chart.set_brush(10, 20, 25);
        chart.sync(25);
        assert!(chart.is_zoomed());
        assert!(!chart.fits(7));
        chart.sync(7);
        assert!(chart.fits(7));
        assert!(!chart.is_zoomed());
        assert!(chart.brush().is_none());
    }

    #[test]
    fn reset_view_keeps_range_and_metrics() {
        let mut chart = HistoryChart::new();
        chart.set_time_range(TimeRange::Week);
        chart.toggle_metric(Metric::Ph);
        chart.zoom_in(169);
        chart.set_brush(3, 9, 169);
        chart.begin_selection(2);
        chart.reset_view();
        assert!(!chart.is_zoomed());
        assert!(chart.brush().is_none());
        assert!(!chart.is_selecting());
        assert_eq!(chart.time_range(), TimeRange::Week);
        assert!(chart.is_active(Metric::Ph));
    }
}
