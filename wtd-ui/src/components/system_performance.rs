use crate::state::AppState;
use dioxus::prelude::*;
use wtd_data::performance::SystemPerformance;

#[derive(Props, Clone, PartialEq)]
pub struct SystemPerformanceCardProps {
    pub sensors_online: usize,
    pub sensors_total: usize,
}

#[component]
pub fn SystemPerformanceCard(props: SystemPerformanceCardProps) -> Element {
    let state = use_context::<AppState>();
    let palette = state.palette();
    let card_style = palette.card_style();
    let perf = SystemPerformance::compute(
        props.sensors_online,
        props.sensors_total,
        &state.alerts.read(),
        (state.now)(),
    );
    let rows = [
        ("System Uptime", perf.uptime_text(), palette.success),
        ("Sensors Online", perf.sensors_text(), palette.text),
        ("Data Points Today", perf.data_points_text(), palette.text),
        ("Alerts Today", perf.alerts_today.to_string(), palette.warning),
    ];

    rsx! {
        div {
            style: "{card_style}",
            h3 { style: "margin: 0 0 16px 0; font-size: 16px; font-weight: 600;", "System Performance" }
            div {
                style: "display: flex; flex-direction: column; gap: 12px;",
                for (label, value, color) in rows {
                    div {
                        key: "{label}",
                        style: "display: flex; justify-content: space-between; font-size: 14px;",
                        span { style: "color: {palette.muted};", "{label}" }
                        span { style: "font-weight: 600; color: {color};", "{value}" }
                    }
                }
            }
        }
    }
}
