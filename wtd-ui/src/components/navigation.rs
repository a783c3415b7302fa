//! Tab navigation: desktop sidebar, mobile slide-in menu and bottom bar.

use crate::state::AppState;
use crate::theme::Palette;
use dioxus::prelude::*;
use wtd_data::session::{Panel, Tab};

fn tab_icon(tab: Tab) -> &'static str {
    match tab {
        Tab::Dashboard => "\u{25A6}",
        Tab::History => "\u{1F4C8}",
        Tab::Alerts => "\u{1F514}",
        Tab::Settings => "\u{2699}",
    }
}

fn tab_items(palette: &Palette, active: Tab) -> Vec<(Tab, String)> {
    Tab::ALL
        .iter()
        .map(|&tab| {
            let (bg, fg) = if tab == active {
                (palette.primary, "#ffffff")
            } else {
                ("transparent", palette.muted)
            };
            let style = format!(
                "display: flex; align-items: center; gap: 12px; width: 100%; padding: 10px 12px; border: none; border-radius: 8px; background: {}; color: {}; font-size: 14px; font-weight: 500; cursor: pointer; text-align: left;",
                bg, fg
            );
            (tab, style)
        })
        .collect()
}

/// Left-hand navigation shown on wide screens.
#[component]
pub fn Sidebar() -> Element {
    let mut state = use_context::<AppState>();
    let palette = state.palette();
    let items = tab_items(&palette, state.session.read().tab());
    let card_style = palette.card_style();

    rsx! {
        aside {
            class: "wtd-desktop-only",
            style: "flex-direction: column; gap: 24px; width: 240px; min-height: calc(100vh - 65px); padding: 24px 16px; border-right: 1px solid {palette.border}; background: {palette.card};",
            nav {
                style: "display: flex; flex-direction: column; gap: 4px;",
                for (tab, style) in items {
                    button {
                        key: "{tab.label()}",
                        style: "{style}",
                        onclick: move |_| state.session.write().select_tab(tab),
                        span { "{tab_icon(tab)}" }
                        "{tab.label()}"
                    }
                }
            }
            div {
                style: "{card_style} padding: 16px;",
                h3 {
                    style: "margin: 0 0 8px 0; font-size: 14px; font-weight: 600;",
                    "System Health"
                }
                div {
                    style: "display: flex; align-items: center; gap: 8px; font-size: 13px; color: {palette.muted};",
                    span { style: "width: 8px; height: 8px; border-radius: 50%; background: {palette.success};" }
                    "All systems operational"
                }
            }
        }
    }
}

/// Slide-in menu for narrow screens. Choosing a tab closes it.
#[component]
pub fn MobileMenu() -> Element {
    let mut state = use_context::<AppState>();
    let palette = state.palette();
    let session = (state.session)();
    if !session.is_open(Panel::MobileMenu) {
        return rsx! {};
    }
    let items = tab_items(&palette, session.tab());

    rsx! {
        div {
            class: "wtd-mobile-only",
            div {
                style: "position: fixed; inset: 0; z-index: 60; background: rgba(0, 0, 0, 0.5);",
                onclick: move |_| state.session.write().close(Panel::MobileMenu),
            }
            nav {
                style: "position: fixed; top: 0; bottom: 0; left: 0; z-index: 70; width: 260px; padding: 24px 16px; background: {palette.card}; border-right: 1px solid {palette.border}; display: flex; flex-direction: column; gap: 4px;",
                div {
                    style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 16px; color: {palette.text};",
                    span { style: "font-size: 18px; font-weight: 700;", "Menu" }
                    button {
                        style: "border: none; background: transparent; color: {palette.muted}; font-size: 18px; cursor: pointer;",
                        "aria-label": "Close menu",
                        onclick: move |_| state.session.write().close(Panel::MobileMenu),
                        "\u{2715}"
                    }
                }
                for (tab, style) in items {
                    button {
                        key: "{tab.label()}",
                        style: "{style}",
                        onclick: move |_| state.session.write().select_tab(tab),
                        span { "{tab_icon(tab)}" }
                        "{tab.label()}"
                    }
                }
            }
        }
    }
}

/// Fixed tab bar along the bottom of narrow screens.
#[component]
pub fn BottomNav() -> Element {
    let mut state = use_context::<AppState>();
    let palette = state.palette();
    let active = state.session.read().tab();
    let items: Vec<(Tab, String)> = Tab::ALL
        .iter()
        .map(|&tab| {
            let color = if tab == active { palette.primary } else { palette.muted };
            let style = format!(
                "flex: 1; display: flex; flex-direction: column; align-items: center; gap: 2px; padding: 8px 0; border: none; background: transparent; color: {}; font-size: 11px; cursor: pointer;",
                color
            );
            (tab, style)
        })
        .collect();

    rsx! {
        nav {
            class: "wtd-mobile-only",
            style: "position: fixed; bottom: 0; left: 0; right: 0; z-index: 40; border-top: 1px solid {palette.border}; background: {palette.card};",
            div {
                style: "display: flex;",
                for (tab, style) in items {
                    button {
                        key: "{tab.label()}",
                        style: "{style}",
                        onclick: move |_| state.session.write().select_tab(tab),
                        span { style: "font-size: 18px;", "{tab_icon(tab)}" }
                        "{tab.label()}"
                    }
                }
            }
        }
    }
}
