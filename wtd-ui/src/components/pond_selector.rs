//! Dropdown list of ponds under the header title.

use crate::state::AppState;
use dioxus::prelude::*;
use wtd_data::session::Pond;

#[component]
pub fn PondSelector() -> Element {
    let mut state = use_context::<AppState>();
    let palette = state.palette();
    let current = state.session.read().pond();

    let items: Vec<(Pond, String)> = Pond::ALL
        .iter()
        .map(|&pond| {
            let (background, color) = if pond == current {
                (palette.secondary, palette.primary)
            } else {
                ("transparent", palette.text)
            };
            let style = format!(
                "display: block; width: 100%; text-align: left; padding: 10px 14px; border: none; cursor: pointer; background: {}; color: {};",
                background, color
            );
            (pond, style)
        })
        .collect();

    rsx! {
        div {
            style: "position: absolute; top: 100%; left: 0; margin-top: 8px; min-width: 160px; z-index: 60; background: {palette.card}; border: 1px solid {palette.border}; border-radius: 8px; box-shadow: 0 8px 24px rgba(0,0,0,0.3); overflow: hidden;",
            for (pond, style) in items {
                button {
                    key: "{pond.0}",
                    style: "{style}",
                    onclick: move |_| state.select_pond(pond),
                    "{pond}"
                }
            }
        }
    }
}
