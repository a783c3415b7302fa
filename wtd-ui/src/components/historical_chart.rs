//! Historical chart card: range and metric pickers, zoomable SVG plot,
//! overview brush and statistics for the visible period.

use crate::plot::{render_history, render_overview, OVERVIEW_HEIGHT, PLOT_HEIGHT, PLOT_WIDTH};
use crate::state::AppState;
use crate::theme::{chip_text, metric_color, with_alpha, Palette};
use dioxus::prelude::*;
use wtd_data::chart::{ChartPoint, HistoryChart};
use wtd_data::time_range::{CustomRange, TimeRange};
use wtd_sensors::metric::Metric;
use wtd_utils::dates::{format_date, parse_date};

#[component]
pub fn HistoricalChart() -> Element {
    let state = use_context::<AppState>();
    let palette = state.palette();
    let card_style = palette.card_style();
    let points = state.chart_points();
    let chart = (state.chart)();
    let visible_len = chart.visible(&points).len();

    rsx! {
        div {
            style: "{card_style} padding: 24px;",
            ChartToolbar {}
            MetricChips {}
            if points.is_empty() {
                div {
                    style: "display: flex; align-items: center; justify-content: center; height: 320px; color: {palette.muted}; font-size: 14px;",
                    "No data in the selected range"
                }
            } else {
                ChartPlot { points: points.clone(), chart: chart.clone() }
                if chart.is_zoomed() {
                    p {
                        style: "margin: 12px 0 0 0; font-size: 12px; color: {palette.muted}; text-align: center;",
                        "Showing {visible_len} of {points.len()} data points"
                    }
                } else {
                    BrushStrip { points: points.clone(), chart: chart.clone() }
                }
            }
            ChartStatistics { points: points.clone(), chart: chart.clone() }
        }
    }
}

fn toolbar_button(palette: &Palette, active: bool) -> String {
    let (bg, fg) = if active {
        (palette.primary, "#ffffff")
    } else {
        (palette.secondary, palette.text)
    };
    format!(
        "padding: 6px 12px; border: none; border-radius: 8px; background: {}; color: {}; font-size: 13px; font-weight: 500; cursor: pointer;",
        bg, fg
    )
}

#[component]
fn ChartToolbar() -> Element {
    let mut state = use_context::<AppState>();
    let mut picker_open = use_signal(|| false);
    let mut from_text = use_signal(String::new);
    let mut to_text = use_signal(String::new);
    let mut range_error = use_signal(|| None::<String>);
    let palette = state.palette();
    let chart = (state.chart)();
    let current = chart.time_range();
    let zoomed = chart.is_zoomed();
    let is_custom = matches!(current, TimeRange::Custom(_));

    let presets: Vec<(TimeRange, String)> = TimeRange::PRESETS
        .iter()
        .map(|&range| (range, toolbar_button(&palette, range == current)))
        .collect();
    let custom_style = toolbar_button(&palette, is_custom);
    let custom_label = if is_custom {
        current.label()
    } else {
        "Custom".to_string()
    };
    let zoom_button = |enabled: bool| {
        let opacity = if enabled { "1" } else { "0.5" };
        format!(
            "padding: 4px 8px; border: none; border-radius: 6px; background: transparent; color: {}; font-size: 14px; cursor: pointer; opacity: {};",
            palette.muted, opacity
        )
    };
    let zoom_in_style = zoom_button(true);
    let zoom_out_style = zoom_button(zoomed);
    let input_style = format!(
        "padding: 6px 8px; border: 1px solid {}; border-radius: 6px; background: {}; color: {}; font-size: 13px;",
        palette.border, palette.secondary, palette.text
    );
    let clear_style = format!("{} flex: 1;", toolbar_button(&palette, false));
    let apply_style = format!("{} flex: 1;", toolbar_button(&palette, true));

    let on_apply = move |_| {
        let from = match parse_date(&from_text()) {
            Ok(date) => date,
            Err(e) => {
                range_error.set(Some(format!("Invalid start date: {}", e)));
                return;
            }
        };
        let to_raw = to_text();
        let to = if to_raw.trim().is_empty() {
            None
        } else {
            match parse_date(&to_raw) {
                Ok(date) => Some(date),
                Err(e) => {
                    range_error.set(Some(format!("Invalid end date: {}", e)));
                    return;
                }
            }
        };
        match CustomRange::new(from, to) {
            Ok(range) => {
                state.chart.write().set_time_range(TimeRange::Custom(range));
                range_error.set(None);
                picker_open.set(false);
            }
            Err(e) => range_error.set(Some(e.to_string())),
        }
    };

    let on_clear = move |_| {
        from_text.set(String::new());
        to_text.set(String::new());
        range_error.set(None);
        picker_open.set(false);
    };

    let len = state.chart_points().len();

    rsx! {
        div {
            style: "display: flex; flex-wrap: wrap; align-items: center; justify-content: space-between; gap: 16px; margin-bottom: 20px;",
            div {
                h3 { style: "margin: 0; font-size: 18px; font-weight: 600;", "Historical Data" }
                p {
                    style: "margin: 4px 0 0 0; font-size: 12px; color: {palette.muted};",
                    "Click and drag on the chart to zoom into a specific area"
                }
            }
            div {
                style: "display: flex; flex-wrap: wrap; align-items: center; gap: 12px;",
                div {
                    style: "display: flex; gap: 2px; padding: 2px; border: 1px solid {palette.border}; border-radius: 8px;",
                    button {
                        style: "{zoom_in_style}",
                        title: "Zoom In",
                        onclick: move |_| state.chart.write().zoom_in(len),
                        "+"
                    }
                    button {
                        style: "{zoom_out_style}",
                        title: "Zoom Out",
                        disabled: !zoomed,
                        onclick: move |_| state.chart.write().zoom_out(len),
                        "\u{2212}"
                    }
                    button {
                        style: "{zoom_out_style}",
                        title: "Reset Zoom",
                        disabled: !zoomed,
                        onclick: move |_| state.chart.write().reset_zoom(),
                        "\u{21BA}"
                    }
                }
                div {
                    style: "position: relative; display: flex; flex-wrap: wrap; gap: 8px;",
                    for (range, style) in presets {
                        button {
                            key: "{range}",
                            style: "{style}",
                            onclick: move |_| state.chart.write().set_time_range(range),
                            "{range}"
                        }
                    }
                    button {
                        style: "{custom_style}",
                        onclick: move |_| picker_open.set(!picker_open()),
                        "\u{1F4C5} {custom_label}"
                    }
                    if picker_open() {
                        div {
                            style: "position: absolute; top: 100%; right: 0; z-index: 30; margin-top: 8px; padding: 16px; width: 260px; border: 1px solid {palette.border}; border-radius: 12px; background: {palette.card}; box-shadow: 0 10px 25px rgba(0, 0, 0, 0.3);",
                            h4 { style: "margin: 0; font-size: 14px; font-weight: 500;", "Select date range" }
                            p {
                                style: "margin: 4px 0 12px 0; font-size: 12px; color: {palette.muted};",
                                "Choose start and end dates for the chart"
                            }
                            div {
                                style: "display: flex; flex-direction: column; gap: 8px;",
                                label { style: "font-size: 12px; color: {palette.muted};", "From" }
                                input {
                                    r#type: "date",
                                    style: "{input_style}",
                                    value: "{from_text}",
                                    oninput: move |evt: Event<FormData>| from_text.set(evt.value()),
                                }
                                label { style: "font-size: 12px; color: {palette.muted};", "To (optional)" }
                                input {
                                    r#type: "date",
                                    style: "{input_style}",
                                    value: "{to_text}",
                                    oninput: move |evt: Event<FormData>| to_text.set(evt.value()),
                                }
                            }
                            if let Some(err) = range_error() {
                                p { style: "margin: 8px 0 0 0; font-size: 12px; color: {palette.critical};", "{err}" }
                            }
                            div {
                                style: "display: flex; gap: 8px; margin-top: 12px;",
                                button { style: "{clear_style}", onclick: on_clear, "Clear" }
                                button {
                                    style: "{apply_style}",
                                    disabled: from_text().is_empty(),
                                    onclick: on_apply,
                                    "Apply"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn MetricChips() -> Element {
    let mut state = use_context::<AppState>();
    let palette = state.palette();
    let chart = (state.chart)();
    let chips: Vec<(Metric, String)> = Metric::CHARTED
        .iter()
        .map(|&metric| {
            let style = if chart.is_active(metric) {
                format!(
                    "padding: 6px 12px; border: 1px solid transparent; border-radius: 999px; background: {}; color: {}; font-size: 12px; font-weight: 500; cursor: pointer;",
                    metric_color(metric).0,
                    chip_text(metric)
                )
            } else {
                format!(
                    "padding: 6px 12px; border: 1px solid {}; border-radius: 999px; background: transparent; color: {}; font-size: 12px; font-weight: 500; cursor: pointer;",
                    palette.border, palette.muted
                )
            };
            (metric, style)
        })
        .collect();

    rsx! {
        div {
            style: "display: flex; flex-wrap: wrap; gap: 8px; margin-bottom: 20px;",
            for (metric, style) in chips {
                button {
                    key: "{metric.key()}",
                    style: "{style}",
                    onclick: move |_| state.chart.write().toggle_metric(metric),
                    "{metric.label()}"
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct ChartPlotProps {
    points: Vec<ChartPoint>,
    chart: HistoryChart,
}

#[component]
fn ChartPlot(props: ChartPlotProps) -> Element {
    let mut state = use_context::<AppState>();
    let mut hover = use_signal(|| None::<usize>);
    let palette = state.palette();
    let total = props.points.len();
    let chart = &props.chart;
    let rendered = chart.rendered(&props.points);
    let count = rendered.len();
    // drag indices are relative to the zoomed slice, which starts before the
    // brushed slice when a brush is set
    let offset = match (rendered.first(), chart.visible(&props.points).first()) {
        (Some(r), Some(v)) => r.index.saturating_sub(v.index),
        _ => 0,
    };
    let last = count.saturating_sub(1);
    let selection = chart
        .selection_range()
        .map(|(lo, hi)| (lo.saturating_sub(offset).min(last), hi.saturating_sub(offset).min(last)));

    let plot = match render_history(rendered, chart.active_metrics(), selection, &palette) {
        Ok(plot) => plot,
        Err(e) => {
            log::error!("history chart failed to render: {}", e);
            return rsx! {
                p { style: "color: {palette.critical}; font-size: 14px;", "Chart unavailable: {e}" }
            };
        }
    };
    let svg = plot.svg;
    let map = plot.map;
    let (top, bottom) = map.plot_span();
    let plot_height = bottom - top;

    let hover_info = hover().filter(|&i| i < count).map(|i| {
        let point = &rendered[i];
        let readings: Vec<(Metric, &'static str, String)> = chart
            .active_metrics()
            .iter()
            .map(|&metric| {
                let text = point
                    .value(metric)
                    .map(|v| format!("{:.1}", v))
                    .unwrap_or_else(|| "-".to_string());
                (metric, metric_color(metric).0, text)
            })
            .collect();
        let line_x = map.x_of(i);
        (line_x, line_x + 12.0, point.label.clone(), readings)
    });
    let hover_x = hover_info.as_ref().map(|(hx, ..)| *hx);

    let down_map = map.clone();
    let move_map = map;

    rsx! {
        div {
            style: "overflow-x: auto; user-select: none;",
            div {
                style: "position: relative; width: {PLOT_WIDTH}px; height: {PLOT_HEIGHT}px;",
                div { dangerous_inner_html: "{svg}" }
                if let Some(hx) = hover_x {
                    div {
                        style: "position: absolute; left: {hx}px; top: {top}px; height: {plot_height}px; border-left: 1px dashed {palette.axis}; pointer-events: none;",
                    }
                }
                div {
                    style: "position: absolute; inset: 0; cursor: crosshair;",
                    onmousedown: move |evt: MouseEvent| {
                        if let Some(i) = down_map.index_at(evt.element_coordinates().x) {
                            state.chart.write().begin_selection(i + offset);
                        }
                    },
                    onmousemove: move |evt: MouseEvent| {
                        let i = move_map.index_at(evt.element_coordinates().x);
                        hover.set(i);
                        if let Some(i) = i {
                            if state.chart.peek().is_selecting() {
                                state.chart.write().update_selection(i + offset);
                            }
                        }
                    },
                    onmouseup: move |_| state.chart.write().end_selection(total),
                    onmouseleave: move |_| {
                        hover.set(None);
                        if state.chart.peek().is_selecting() {
                            state.chart.write().end_selection(total);
                        }
                    },
                }
                if let Some((_, tip_x, label, readings)) = hover_info {
                    div {
                        style: "position: absolute; top: 8px; left: {tip_x}px; pointer-events: none; padding: 8px 12px; border: 1px solid {palette.border}; border-radius: 8px; background: {palette.card}; font-size: 12px; white-space: nowrap;",
                        p { style: "margin: 0 0 4px 0; color: {palette.muted};", "{label}" }
                        for (metric, color, text) in readings {
                            p {
                                key: "{metric.key()}",
                                style: "margin: 0; color: {color};",
                                "{metric.label()}: {text}"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct BrushStripProps {
    points: Vec<ChartPoint>,
    chart: HistoryChart,
}

/// Overview of the whole range with start/end handles selecting the plotted
/// window.
#[component]
fn BrushStrip(props: BrushStripProps) -> Element {
    let mut state = use_context::<AppState>();
    let palette = state.palette();
    let len = props.points.len();
    if len < 2 {
        return rsx! {};
    }
    let last = len - 1;
    let (start, end) = props
        .chart
        .brush()
        .filter(|b| b.fits(len))
        .map(|b| (b.left(), b.right()))
        .unwrap_or((0, last));

    let first_metric = props.chart.active_metrics().first().copied();
    let svg = match render_overview(&props.points, first_metric, (start, end), &palette) {
        Ok(svg) => svg,
        Err(e) => {
            log::error!("overview failed to render: {}", e);
            return rsx! {};
        }
    };
    let input_style = format!("display: block; width: {}px; margin: 0;", PLOT_WIDTH);
    let start_label = props.points[start].label.clone();
    let end_label = props.points[end].label.clone();

    rsx! {
        div {
            style: "margin-top: 12px; overflow-x: auto;",
            div {
                style: "width: {PLOT_WIDTH}px;",
                div { style: "height: {OVERVIEW_HEIGHT}px;", dangerous_inner_html: "{svg}" }
                input {
                    r#type: "range",
                    "aria-label": "Brush start",
                    style: "{input_style}",
                    min: "0",
                    max: "{last}",
                    value: "{start}",
                    oninput: move |evt: Event<FormData>| {
                        if let Ok(i) = evt.value().parse::<usize>() {
                            state.chart.write().set_brush(i.min(end.saturating_sub(1)), end, len);
                        }
                    },
                }
                input {
                    r#type: "range",
                    "aria-label": "Brush end",
                    style: "{input_style}",
                    min: "0",
                    max: "{last}",
                    value: "{end}",
                    oninput: move |evt: Event<FormData>| {
                        if let Ok(i) = evt.value().parse::<usize>() {
                            state.chart.write().set_brush(start, i.max(start + 1), len);
                        }
                    },
                }
                div {
                    style: "display: flex; justify-content: space-between; font-size: 11px; color: {palette.muted};",
                    span { "{start_label}" }
                    span { "{end_label}" }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct ChartStatisticsProps {
    points: Vec<ChartPoint>,
    chart: HistoryChart,
}

#[component]
fn ChartStatistics(props: ChartStatisticsProps) -> Element {
    let state = use_context::<AppState>();
    let palette = state.palette();
    let stats = props.chart.statistics(&props.points);
    if stats.is_empty() {
        return rsx! {};
    }
    let tile_style = format!(
        "display: flex; align-items: center; gap: 12px; padding: 12px; border-radius: 8px; background: {};",
        with_alpha(palette.secondary, 0.5)
    );
    let rows: Vec<(Metric, &'static str, String, String, String)> = stats
        .iter()
        .map(|s| {
            (
                s.metric,
                metric_color(s.metric).0,
                format!("{:.1}", s.summary.min),
                format!("{:.1}", s.summary.max),
                format!("{:.1}", s.summary.avg),
            )
        })
        .collect();
    let period = match props.chart.time_range() {
        TimeRange::Custom(range) => match range.to() {
            Some(to) => format!("{} to {}", format_date(&range.from()), format_date(&to)),
            None => format!("since {}", format_date(&range.from())),
        },
        preset => format!("last {}", preset),
    };

    rsx! {
        div {
            style: "margin-top: 24px; padding-top: 24px; border-top: 1px solid {palette.border};",
            h4 {
                style: "margin: 0 0 16px 0; font-size: 14px; font-weight: 600;",
                "Basic statistics for selected period ({period})"
            }
            div {
                style: "display: grid; grid-template-columns: repeat(auto-fill, minmax(220px, 1fr)); gap: 16px;",
                for (metric, color, min, max, avg) in rows {
                    div {
                        key: "{metric.key()}",
                        style: "{tile_style}",
                        span { style: "width: 12px; height: 12px; border-radius: 50%; flex-shrink: 0; background: {color};" }
                        div {
                            style: "flex: 1; min-width: 0;",
                            p { style: "margin: 0; font-size: 14px; font-weight: 500;", "{metric.label()}" }
                            div {
                                style: "display: flex; gap: 16px; margin-top: 4px; font-size: 12px; color: {palette.muted};",
                                span { "Min: " b { style: "color: {palette.text};", "{min}" } }
                                span { "Max: " b { style: "color: {palette.text};", "{max}" } }
                                span { "Avg: " b { style: "color: {palette.text};", "{avg}" } }
                            }
                        }
                    }
                }
            }
        }
    }
}
