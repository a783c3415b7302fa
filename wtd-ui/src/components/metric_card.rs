use crate::state::AppState;
use dioxus::prelude::*;
use wtd_data::trend::{Trend, TrendDirection};
use wtd_sensors::status::Status;

#[derive(Props, Clone, PartialEq)]
pub struct MetricCardProps {
    pub title: String,
    pub value: String,
    pub unit: String,
    pub status: Status,
    /// Omitted for metrics without history
    pub trend: Option<Trend>,
    pub icon: String,
}

#[component]
pub fn MetricCard(props: MetricCardProps) -> Element {
    let state = use_context::<AppState>();
    let palette = state.palette();
    let accent = palette.status(props.status);
    let card_style = palette.card_style();
    let trend = props.trend.map(|t| {
        let (arrow, color) = match t.direction {
            TrendDirection::Up => ("\u{2197}", palette.success),
            TrendDirection::Down => ("\u{2198}", palette.critical),
            TrendDirection::Stable => ("\u{2192}", palette.muted),
        };
        (format!("{} {}", arrow, t.text()), color)
    });

    rsx! {
        div {
            style: "{card_style} border-left: 4px solid {accent};",
            div {
                style: "display: flex; justify-content: space-between; align-items: flex-start;",
                div {
                    p {
                        style: "margin: 0 0 8px 0; font-size: 14px; color: {palette.muted};",
                        "{props.title}"
                    }
                    div {
                        style: "display: flex; align-items: baseline; gap: 4px;",
                        span { style: "font-size: 28px; font-weight: 700;", "{props.value}" }
                        span { style: "font-size: 14px; color: {palette.muted};", "{props.unit}" }
                    }
                }
                div {
                    style: "padding: 8px; border-radius: 8px; background: {palette.secondary}; color: {accent}; font-size: 18px;",
                    "{props.icon}"
                }
            }
            if let Some((text, color)) = trend {
                p {
                    style: "margin: 12px 0 0 0; font-size: 12px; font-weight: 500; color: {color};",
                    "{text}"
                }
            }
        }
    }
}
