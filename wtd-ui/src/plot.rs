//! SVG rendering of the historical chart and its overview strip.
//!
//! Both are drawn with plotters into a string that the components inline.
//! The chart's coordinate spec is kept so pointer positions over the SVG can
//! be turned back into point indices.

use crate::theme::{metric_color, plot_color, Palette};
use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::types::RangedCoordf64;
use plotters::coord::{CoordTranslate, ReverseCoordTranslate};
use plotters::prelude::*;
use plotters_svg::SVGBackend;
use wtd_data::chart::ChartPoint;
use wtd_data::statistics::summarize;
use wtd_sensors::metric::Metric;

pub const PLOT_WIDTH: u32 = 800;
pub const PLOT_HEIGHT: u32 = 320;
pub const OVERVIEW_HEIGHT: u32 = 48;

const X_LABELS: usize = 8;
const Y_LABELS: usize = 5;

/// Maps pixels over a rendered plot to point indices and back.
#[derive(Clone)]
pub struct PixelMap {
    coords: Cartesian2d<RangedCoordf64, RangedCoordf64>,
    count: usize,
    y_floor: f64,
    left: i32,
    right: i32,
    top: i32,
    bottom: i32,
}

impl PixelMap {
    fn new(coords: Cartesian2d<RangedCoordf64, RangedCoordf64>, count: usize, y: (f64, f64)) -> Self {
        let x = x_range(count);
        let (left, bottom) = coords.translate(&(x.start, y.0));
        let (right, top) = coords.translate(&(x.end, y.1));
        PixelMap {
            coords,
            count,
            y_floor: y.0,
            left,
            right,
            top,
            bottom,
        }
    }

    /// Nearest point to horizontal pixel `px`, clamped to the series.
    pub fn index_at(&self, px: f64) -> Option<usize> {
        if self.count == 0 {
            return None;
        }
        let px = (px.round() as i32).clamp(self.left, self.right);
        let (x, _) = self.coords.reverse_translate((px, self.bottom))?;
        let last = self.count - 1;
        Some((x.round().max(0.0) as usize).min(last))
    }

    /// Horizontal pixel of point `index`.
    pub fn x_of(&self, index: usize) -> f64 {
        self.coords.translate(&(index as f64, self.y_floor)).0 as f64
    }

    /// Vertical pixel extent of the plotting area, top first.
    pub fn plot_span(&self) -> (f64, f64) {
        (self.top as f64, self.bottom as f64)
    }
}

pub struct HistoryPlot {
    pub svg: String,
    pub map: PixelMap,
}

/// Value range over every plotted series, padded by 5 %.
fn y_range(points: &[ChartPoint], metrics: &[Metric]) -> (f64, f64) {
    let values: Vec<f64> = metrics
        .iter()
        .flat_map(|&m| points.iter().filter_map(move |p| p.value(m)))
        .collect();
    if values.is_empty() {
        return (0.0, 1.0);
    }
    let summary = summarize(&values);
    let span = summary.max - summary.min;
    if span <= f64::EPSILON {
        return (summary.min - 1.0, summary.max + 1.0);
    }
    let pad = span * 0.05;
    (summary.min - pad, summary.max + pad)
}

fn x_range(count: usize) -> std::ops::Range<f64> {
    0.0..count.saturating_sub(1).max(1) as f64
}

/// Consecutive runs of recorded values, split wherever a value is missing.
fn runs(points: &[ChartPoint], metric: Metric) -> Vec<Vec<(f64, f64)>> {
    let mut out = Vec::new();
    let mut current = Vec::new();
    for (i, p) in points.iter().enumerate() {
        match p.value(metric).filter(|v| v.is_finite()) {
            Some(v) => current.push((i as f64, v)),
            None if !current.is_empty() => out.push(std::mem::take(&mut current)),
            None => {}
        }
    }
    if !current.is_empty() {
        out.push(current);
    }
    out
}

/// Draw `metrics` over `points`. `selection` is an inclusive index span into
/// `points` shaded as the pending zoom.
pub fn render_history(
    points: &[ChartPoint],
    metrics: &[Metric],
    selection: Option<(usize, usize)>,
    palette: &Palette,
) -> anyhow::Result<HistoryPlot> {
    let count = points.len();
    let (y_lo, y_hi) = y_range(points, metrics);
    let grid = plot_color(palette.grid);
    let axis = plot_color(palette.axis);
    let labels: Vec<&str> = points.iter().map(|p| p.label.as_str()).collect();
    let x_label = |x: &f64| {
        let i = x.round();
        if (x - i).abs() > 1e-6 || i < 0.0 {
            return String::new();
        }
        labels.get(i as usize).map(|l| l.to_string()).unwrap_or_default()
    };
    let y_label = |y: &f64| format!("{:.1}", y);

    let mut svg = String::new();
    let map = {
        let root = SVGBackend::with_string(&mut svg, (PLOT_WIDTH, PLOT_HEIGHT)).into_drawing_area();
        root.fill(&plot_color(palette.card))?;
        let mut chart = ChartBuilder::on(&root)
            .margin(10i32)
            .x_label_area_size(30u32)
            .y_label_area_size(50u32)
            .build_cartesian_2d(x_range(count), y_lo..y_hi)?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(X_LABELS)
            .y_labels(Y_LABELS)
            .light_line_style(grid)
            .bold_line_style(grid)
            .axis_style(axis)
            .label_style(("sans-serif", 12).into_font().color(&axis))
            .x_label_formatter(&x_label)
            .y_label_formatter(&y_label)
            .draw()?;

        for &metric in metrics {
            let stroke = plot_color(metric_color(metric).0).stroke_width(2);
            for run in runs(points, metric) {
                chart.draw_series(LineSeries::new(run, stroke))?;
            }
        }

        if let Some((lo, hi)) = selection {
            let shade = plot_color(palette.primary).mix(0.3).filled();
            chart.draw_series(std::iter::once(Rectangle::new(
                [(lo as f64, y_lo), (hi as f64, y_hi)],
                shade,
            )))?;
        }

        let map = PixelMap::new(chart.as_coord_spec().clone(), count, (y_lo, y_hi));
        root.present()?;
        map
    };
    Ok(HistoryPlot { svg, map })
}

/// Draw the whole series of `metric` with the brushed span `window`
/// highlighted.
pub fn render_overview(
    points: &[ChartPoint],
    metric: Option<Metric>,
    window: (usize, usize),
    palette: &Palette,
) -> anyhow::Result<String> {
    let metrics: Vec<Metric> = metric.into_iter().collect();
    let (y_lo, y_hi) = y_range(points, &metrics);

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (PLOT_WIDTH, OVERVIEW_HEIGHT)).into_drawing_area();
        root.fill(&plot_color(palette.brush_fill))?;
        let mut chart = ChartBuilder::on(&root)
            .margin_top(4i32)
            .margin_bottom(4i32)
            .margin_left(60i32)
            .margin_right(10i32)
            .build_cartesian_2d(x_range(points.len()), y_lo..y_hi)?;

        for &metric in &metrics {
            for run in runs(points, metric) {
                chart.draw_series(LineSeries::new(run, plot_color(palette.muted).stroke_width(1)))?;
            }
        }

        let primary = plot_color(palette.primary);
        let (start, end) = window;
        let corners = [(start as f64, y_lo), (end as f64, y_hi)];
        chart.draw_series(std::iter::once(Rectangle::new(corners, primary.mix(0.2).filled())))?;
        chart.draw_series(std::iter::once(Rectangle::new(corners, primary.stroke_width(1))))?;
        root.present()?;
    }
    Ok(svg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::DARK;
    use chrono::{FixedOffset, TimeDelta, TimeZone};
    use wtd_sensors::historical::HistoricalDataPoint;

    fn points(n: usize) -> Vec<ChartPoint> {
        let start = FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2024, 10, 14, 0, 0, 0)
            .unwrap();
        (0..n)
            .map(|i| ChartPoint {
                index: i,
                label: format!("{:02}:00", i % 24),
                point: HistoricalDataPoint {
                    timestamp: start + TimeDelta::hours(i as i64),
                    water_level: 60.0 + i as f64,
                    flow_rate: 300.0 - i as f64,
                    pressure: 50.0,
                    ph: 7.2,
                    turbidity: 1.0,
                    temperature: 18.0,
                },
            })
            .collect()
    }

    fn hex(metric: Metric) -> String {
        let rgb = plot_color(metric_color(metric).0).to_backend_color().rgb;
        format!("#{:02X}{:02X}{:02X}", rgb.0, rgb.1, rgb.2)
    }

    #[test]
    fn series_are_drawn_in_metric_colours() {
        let pts = points(25);
        let plot = render_history(&pts, &[Metric::WaterLevel], None, &DARK).unwrap();
        let svg = plot.svg.to_uppercase();
        assert!(svg.contains(&hex(Metric::WaterLevel)));
        assert!(!svg.contains(&hex(Metric::Pressure)));
    }

    #[test]
    fn pixels_map_back_to_indices() {
        let pts = points(25);
        let plot = render_history(&pts, &[Metric::WaterLevel], None, &DARK).unwrap();
        let map = &plot.map;
        assert_eq!(map.index_at(map.x_of(5)), Some(5));
        assert_eq!(map.index_at(map.x_of(24)), Some(24));
        assert_eq!(map.index_at(-500.0), Some(0));
        assert_eq!(map.index_at(5000.0), Some(24));
        assert!(map.x_of(0) < map.x_of(1));
        let (top, bottom) = map.plot_span();
        assert!(top < bottom);
    }

    #[test]
    fn selection_is_shaded() {
        let pts = points(25);
        let rects = |svg: &str| svg.matches("<rect").count();
        let plain = render_history(&pts, &[Metric::FlowRate], None, &DARK).unwrap();
        let shaded = render_history(&pts, &[Metric::FlowRate], Some((3, 9)), &DARK).unwrap();
        assert_eq!(rects(&shaded.svg), rects(&plain.svg) + 1);
    }

    #[test]
    fn no_metrics_still_renders_axes() {
        let pts = points(4);
        let plot = render_history(&pts, &[], None, &DARK).unwrap();
        assert!(plot.svg.starts_with("<svg"));
        assert!(!plot.svg.to_uppercase().contains(&hex(Metric::WaterLevel)));
        assert_eq!(plot.map.index_at(plot.map.x_of(3)), Some(3));
    }

    #[test]
    fn overview_marks_the_window() {
        let pts = points(25);
        let svg = render_overview(&pts, Some(Metric::WaterLevel), (4, 12), &DARK).unwrap();
        assert!(svg.contains("<polyline"));
        // background, filled window and its outline
        assert_eq!(svg.matches("<rect").count(), 3);
    }

    #[test]
    fn empty_input_has_no_index() {
        let plot = render_history(&[], &[Metric::WaterLevel], None, &DARK).unwrap();
        assert_eq!(plot.map.index_at(100.0), None);
    }
}
