//! Water Treatment Monitoring Dashboard
//!
//! Live gauges and metric cards for one pond of a treatment plant, a
//! zoomable history chart, the alert feed and user settings. Every reading
//! comes from the seeded simulator in `wtd-data`; there is no backend.
//!
//! Data flow:
//! 1. On mount the sensor table embedded from `fixtures/sensors.csv` is
//!    parsed and the alert feed is seeded with sample entries.
//! 2. A timer loop replaces the live snapshot every refresh interval
//!    (settings, default 3 s) and records status transitions as alerts.
//! 3. History for the selected pond is generated once and re-filtered for
//!    the chart whenever the time range changes or the clock moves on.

mod views;

use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use views::{AlertsView, DashboardView, HistoryView, SettingsView};
use wtd_data::session::Tab;
use wtd_ui::components::{
    AlertsPanel, BottomNav, ErrorDisplay, Header, LoadingSpinner, MobileMenu, Sidebar,
};
use wtd_ui::platform;
use wtd_ui::state::AppState;
use wtd_ui::theme::RESPONSIVE_CSS;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("wtd-dashboard-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state =
        use_context_provider(|| AppState::new(platform::random_seed(), platform::now()));

    // Load sensor configuration on mount
    use_effect(move || {
        let system_dark = platform::system_prefers_dark();
        state.system_dark.set(system_dark);
        state.load_sensors();
        platform::configure_platform(state.settings.peek().theme.is_dark(system_dark));
    });

    // Keep the document theme in step with the settings
    use_effect(move || {
        let dark = state.is_dark();
        if let Err(e) = platform::apply_theme(dark) {
            log::error!("Failed to apply theme: {}", platform::describe(&e));
        }
    });

    // Live readings; the loop ends when the app unmounts
    use_future(move || async move {
        loop {
            let millis = state.settings.peek().refresh_millis();
            TimeoutFuture::new(millis).await;
            state.tick(platform::now());
        }
    });

    let palette = state.palette();
    let tab = state.session.read().tab();

    rsx! {
        style { {RESPONSIVE_CSS} }
        div {
            style: "min-height: 100vh; background: {palette.background}; color: {palette.text}; font-family: system-ui, -apple-system, sans-serif;",
            Header {}
            div {
                style: "display: flex;",
                Sidebar {}
                main {
                    style: "flex: 1; min-width: 0; padding: 24px 16px 112px 16px; overflow: auto;",
                    div {
                        style: "max-width: 1280px; margin: 0 auto; display: flex; flex-direction: column; gap: 24px;",
                        if let Some(err) = (state.error_msg)() {
                            ErrorDisplay { message: err }
                        } else if (state.loading)() {
                            LoadingSpinner {}
                        } else {
                            match tab {
                                Tab::Dashboard => rsx! { DashboardView {} },
                                Tab::History => rsx! { HistoryView {} },
                                Tab::Alerts => rsx! { AlertsView {} },
                                Tab::Settings => rsx! { SettingsView {} },
                            }
                        }
                    }
                }
            }
            MobileMenu {}
            BottomNav {}
            AlertsPanel {}
        }
    }
}
