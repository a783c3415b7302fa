//! Sticky top bar: menu button, pond title, system status, theme and alerts.

use super::{Connection, PondSelector, StatusIndicator, ThemeToggle};
use crate::state::AppState;
use dioxus::prelude::*;
use wtd_data::session::Panel;
use wtd_utils::dates::relative_time;

#[component]
pub fn Header() -> Element {
    let mut state = use_context::<AppState>();
    let palette = state.palette();
    let session = (state.session)();
    let critical_only = state.settings.read().critical_only;
    let badge = state.alerts.read().active(critical_only).len();
    let connection = Connection::assess(
        state.error_msg.read().is_some(),
        state.alerts.read().active(true).len(),
    );
    let last_update = relative_time(&state.metrics.read().timestamp, &(state.now)());
    let chevron = if session.is_open(Panel::PondMenu) {
        "\u{25B4}"
    } else {
        "\u{25BE}"
    };

    rsx! {
        header {
            style: "position: sticky; top: 0; z-index: 50; border-bottom: 1px solid {palette.border}; background: {palette.background}; backdrop-filter: blur(12px);",
            div {
                style: "display: flex; align-items: center; justify-content: space-between; padding: 12px 16px; max-width: 1280px; margin: 0 auto;",
                div {
                    style: "display: flex; align-items: center; gap: 16px;",
                    button {
                        class: "wtd-mobile-only",
                        style: "padding: 8px; border: none; border-radius: 8px; background: transparent; color: {palette.muted}; cursor: pointer; font-size: 18px;",
                        "aria-label": "Menu",
                        onclick: move |_| state.session.write().toggle(Panel::MobileMenu),
                        "\u{2630}"
                    }
                    div {
                        style: "position: relative; display: flex; align-items: center; gap: 12px;",
                        div {
                            style: "padding: 8px; border-radius: 12px; background: {palette.secondary}; color: {palette.primary}; font-size: 20px;",
                            "\u{1F4A7}"
                        }
                        button {
                            style: "display: flex; align-items: center; gap: 6px; border: none; background: transparent; cursor: pointer; color: {palette.text}; font-size: 24px; font-weight: 700;",
                            onclick: move |_| state.session.write().toggle(Panel::PondMenu),
                            "{session.pond()}"
                            span { style: "font-size: 14px; color: {palette.muted};", "{chevron}" }
                        }
                        if session.is_open(Panel::PondMenu) {
                            PondSelector {}
                        }
                    }
                }
                div {
                    style: "display: flex; align-items: center; gap: 16px;",
                    div {
                        class: "wtd-desktop-only",
                        StatusIndicator {
                            status: connection,
                            label: "System Status".to_string(),
                            last_update: Some(last_update),
                        }
                    }
                    div {
                        style: "display: flex; align-items: center; gap: 8px;",
                        ThemeToggle {}
                        button {
                            style: "position: relative; padding: 8px; border: none; border-radius: 8px; background: transparent; color: {palette.muted}; cursor: pointer; font-size: 18px;",
                            "aria-label": "Alerts",
                            onclick: move |_| state.session.write().toggle(Panel::Alerts),
                            "\u{1F514}"
                            if badge > 0 {
                                span {
                                    style: "position: absolute; top: 2px; right: 0; min-width: 16px; height: 16px; padding: 0 4px; border-radius: 8px; background: {palette.critical}; color: #fff; font-size: 10px; line-height: 16px; text-align: center;",
                                    "{badge}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
