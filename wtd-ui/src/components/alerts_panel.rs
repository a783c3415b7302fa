//! Slide-in alerts panel and the alert list shared with the alerts tab.

use crate::state::AppState;
use crate::theme::with_alpha;
use dioxus::prelude::*;
use wtd_data::alerts::{Alert, AlertLevel};
use wtd_data::session::Panel;
use wtd_utils::dates::{relative_time, relative_time_compact};

fn level_glyph(level: AlertLevel) -> &'static str {
    match level {
        AlertLevel::Warning => "\u{26A0}",
        AlertLevel::Critical => "\u{26D4}",
        AlertLevel::Resolved => "\u{2714}",
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct AlertListProps {
    pub alerts: Vec<Alert>,
    /// Short relative times ("2m ago") for narrow layouts
    #[props(default)]
    pub compact: bool,
    pub empty_text: String,
}

#[component]
pub fn AlertList(props: AlertListProps) -> Element {
    let state = use_context::<AppState>();
    let palette = state.palette();
    let now = (state.now)();

    if props.alerts.is_empty() {
        return rsx! {
            p {
                style: "margin: 0; padding: 16px 0; font-size: 14px; color: {palette.muted}; text-align: center;",
                "{props.empty_text}"
            }
        };
    }

    let rows: Vec<(u64, String, String, Alert)> = props
        .alerts
        .into_iter()
        .map(|alert| {
            let color = palette.alert(alert.level);
            let style = format!(
                "display: flex; gap: 12px; padding: 12px; border-radius: 8px; border: 1px solid {}; background: {};",
                with_alpha(color, 0.3),
                with_alpha(color, 0.1)
            );
            let when = if props.compact {
                relative_time_compact(&alert.raised_at, &now)
            } else {
                relative_time(&alert.raised_at, &now)
            };
            (alert.id, style, when, alert)
        })
        .collect();

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 8px;",
            for (id, style, when, alert) in rows {
                div {
                    key: "{id}",
                    style: "{style}",
                    span {
                        style: "font-size: 16px; color: {palette.alert(alert.level)};",
                        "{level_glyph(alert.level)}"
                    }
                    div {
                        style: "flex: 1; min-width: 0;",
                        div {
                            style: "display: flex; justify-content: space-between; gap: 8px;",
                            span { style: "font-size: 14px; font-weight: 600; color: {palette.text};", "{alert.title}" }
                            span { style: "font-size: 12px; color: {palette.muted}; white-space: nowrap;", "{when}" }
                        }
                        p {
                            style: "margin: 4px 0 0 0; font-size: 13px; color: {palette.muted};",
                            "{alert.message}"
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn AlertsPanel() -> Element {
    let mut state = use_context::<AppState>();
    let palette = state.palette();
    if !state.session.read().is_open(Panel::Alerts) {
        return rsx! {};
    }
    let critical_only = state.settings.read().critical_only;
    let now = (state.now)();
    let (active, today): (Vec<Alert>, usize) = {
        let feed = state.alerts.read();
        (
            feed.active(critical_only).into_iter().cloned().collect(),
            feed.today_count(now, critical_only),
        )
    };
    let empty_text = if critical_only {
        "No critical alerts"
    } else {
        "No active alerts"
    };

    rsx! {
        div {
            style: "position: fixed; inset: 0; z-index: 60; background: rgba(0, 0, 0, 0.4);",
            onclick: move |_| state.session.write().close(Panel::Alerts),
        }
        aside {
            style: "position: fixed; top: 0; right: 0; bottom: 0; z-index: 70; width: min(380px, 100vw); overflow-y: auto; padding: 20px; background: {palette.card}; border-left: 1px solid {palette.border}; color: {palette.text};",
            div {
                style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 4px;",
                h2 { style: "margin: 0; font-size: 18px; font-weight: 700;", "Alerts" }
                button {
                    style: "border: none; background: transparent; color: {palette.muted}; font-size: 18px; cursor: pointer;",
                    "aria-label": "Close alerts",
                    onclick: move |_| state.session.write().close(Panel::Alerts),
                    "\u{2715}"
                }
            }
            p {
                style: "margin: 0 0 16px 0; font-size: 13px; color: {palette.muted};",
                "{today} active alerts today"
            }
            AlertList { alerts: active, compact: true, empty_text: empty_text.to_string() }
        }
    }
}
