//! One view per navigation tab.

use dioxus::prelude::*;
use wtd_data::alerts::Alert;
use wtd_data::gauge::GaugeSize;
use wtd_data::trend::{baseline, Trend};
use wtd_sensors::metric::Metric;
use wtd_sensors::sensor_config::SensorConfig;
use wtd_sensors::status::Status;
use wtd_ui::components::{
    AlertList, CircularGauge, HistoricalChart, MetricCard, SettingsPanel, SystemPerformanceCard,
};
use wtd_ui::state::AppState;
use wtd_ui::theme::metric_icon;

/// Metrics shown as cards under the gauges.
const CARD_METRICS: [Metric; 4] = [
    Metric::WaterLevel,
    Metric::FlowRate,
    Metric::Pressure,
    Metric::DissolvedOxygen,
];

#[derive(Props, Clone, PartialEq)]
struct PageTitleProps {
    title: String,
    subtitle: String,
}

#[component]
fn PageTitle(props: PageTitleProps) -> Element {
    let state = use_context::<AppState>();
    let palette = state.palette();
    rsx! {
        div {
            h2 { style: "margin: 0 0 4px 0; font-size: 24px; font-weight: 700;", "{props.title}" }
            p { style: "margin: 0; color: {palette.muted};", "{props.subtitle}" }
        }
    }
}

#[component]
pub fn DashboardView() -> Element {
    let state = use_context::<AppState>();
    let Some(table) = (state.sensors)() else {
        return rsx! {};
    };
    let palette = state.palette();
    let card_style = palette.card_style();
    let metrics = (state.metrics)();
    let now = (state.now)();

    let gauges: Vec<(Metric, f64, SensorConfig)> = Metric::CHARTED
        .iter()
        .map(|&m| (m, metrics.value(m), table.get(m).clone()))
        .collect();
    let cards: Vec<(Metric, String, String, Status, Option<Trend>)> = {
        let history = state.history.read();
        CARD_METRICS
            .iter()
            .map(|&m| {
                let value = metrics.value(m);
                let config = table.get(m);
                let trend = baseline(&history, m, now).map(|avg| Trend::against_baseline(value, avg));
                (m, format!("{:.1}", value), config.unit.clone(), config.status(value), trend)
            })
            .collect()
    };
    let sensors_total = gauges.len();

    rsx! {
        PageTitle {
            title: "Real-Time Monitoring".to_string(),
            subtitle: "Live sensor readings from your system".to_string(),
        }
        section {
            style: "{card_style} padding: 24px;",
            h3 { style: "margin: 0 0 24px 0; font-size: 18px; font-weight: 600;", "Primary Metrics" }
            div {
                class: "wtd-grid-gauges",
                for (metric, value, config) in gauges {
                    CircularGauge {
                        key: "{metric.key()}",
                        value,
                        config,
                        label: metric.label().to_string(),
                        size: GaugeSize::Sm,
                        icon: metric_icon(metric).to_string(),
                    }
                }
            }
        }
        div {
            class: "wtd-grid-cards",
            for (metric, value, unit, status, trend) in cards {
                MetricCard {
                    key: "{metric.key()}",
                    title: metric.label().to_string(),
                    value,
                    unit,
                    status,
                    trend,
                    icon: metric_icon(metric).to_string(),
                }
            }
        }
        SystemPerformanceCard { sensors_online: sensors_total, sensors_total }
    }
}

#[component]
pub fn HistoryView() -> Element {
    rsx! {
        PageTitle {
            title: "Historical Analysis".to_string(),
            subtitle: "Analyze trends and patterns over time".to_string(),
        }
        HistoricalChart {}
    }
}

#[component]
pub fn AlertsView() -> Element {
    let state = use_context::<AppState>();
    let palette = state.palette();
    let card_style = palette.card_style();
    let critical_only = state.settings.read().critical_only;
    let (active, history): (Vec<Alert>, Vec<Alert>) = {
        let feed = state.alerts.read();
        (
            feed.active(critical_only).into_iter().cloned().collect(),
            feed.entries(critical_only).cloned().collect(),
        )
    };

    rsx! {
        PageTitle {
            title: "Alerts & Notifications".to_string(),
            subtitle: "Actively ongoing alerts".to_string(),
        }
        div {
            style: "{card_style}",
            AlertList { alerts: active, empty_text: "No active alerts".to_string() }
        }
        PageTitle {
            title: "Alert History".to_string(),
            subtitle: "Past alerts and notifications, newest first".to_string(),
        }
        div {
            style: "{card_style}",
            AlertList { alerts: history, empty_text: "No historical alerts".to_string() }
        }
    }
}

#[component]
pub fn SettingsView() -> Element {
    rsx! {
        PageTitle {
            title: "Settings".to_string(),
            subtitle: "Configure your monitoring preferences".to_string(),
        }
        SettingsPanel {}
    }
}
