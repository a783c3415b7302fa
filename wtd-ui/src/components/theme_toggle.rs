//! Sun/moon button flipping between light and dark.

use crate::state::AppState;
use dioxus::prelude::*;

#[component]
pub fn ThemeToggle() -> Element {
    let mut state = use_context::<AppState>();
    let dark = state.is_dark();
    let palette = state.palette();
    let (glyph, target) = if dark {
        ("\u{263E}", "light")
    } else {
        ("\u{2600}", "dark")
    };

    let on_click = move |_| {
        let system_dark = (state.system_dark)();
        state.settings.with_mut(|s| s.theme = s.theme.toggled(system_dark));
    };

    rsx! {
        button {
            style: "padding: 8px; border: none; border-radius: 8px; background: transparent; color: {palette.muted}; cursor: pointer; font-size: 18px;",
            "aria-label": "Switch to {target} mode",
            onclick: on_click,
            "{glyph}"
        }
    }
}
