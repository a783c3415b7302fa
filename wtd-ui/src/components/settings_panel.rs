//! Settings tab: notifications, display, data and export.

use crate::platform::{describe, download_csv};
use crate::state::AppState;
use crate::theme::Palette;
use dioxus::prelude::*;
use wtd_data::export::{export_file_name, to_csv};
use wtd_data::settings::{
    retention_label, ThemePreference, MAX_REFRESH_SECS, MIN_REFRESH_SECS, RETENTION_CHOICES,
};

#[derive(Props, Clone, PartialEq)]
struct ToggleRowProps {
    label: String,
    description: String,
    on: bool,
    palette: Palette,
    ontoggle: EventHandler<()>,
}

#[component]
fn ToggleRow(props: ToggleRowProps) -> Element {
    let palette = props.palette;
    let (track, knob) = if props.on {
        (palette.primary, "left: 22px;")
    } else {
        (palette.gauge_track, "left: 2px;")
    };

    rsx! {
        div {
            style: "display: flex; justify-content: space-between; align-items: center; gap: 16px; padding: 12px 0;",
            div {
                p { style: "margin: 0; font-size: 14px; font-weight: 500;", "{props.label}" }
                p { style: "margin: 2px 0 0 0; font-size: 12px; color: {palette.muted};", "{props.description}" }
            }
            button {
                style: "position: relative; flex-shrink: 0; width: 44px; height: 24px; border: none; border-radius: 12px; background: {track}; cursor: pointer;",
                "role": "switch",
                "aria-checked": "{props.on}",
                "aria-label": "{props.label}",
                onclick: move |_| props.ontoggle.call(()),
                span {
                    style: "position: absolute; top: 2px; {knob} width: 20px; height: 20px; border-radius: 50%; background: #fff; transition: left 0.2s;",
                }
            }
        }
    }
}

#[component]
pub fn SettingsPanel() -> Element {
    let mut state = use_context::<AppState>();
    let mut export_error = use_signal(|| None::<String>);
    let palette = state.palette();
    let card_style = palette.card_style();
    let settings = (state.settings)();
    let refresh = settings.refresh_secs();
    let retention = settings.retention_days();
    let section_title = "margin: 0 0 8px 0; font-size: 16px; font-weight: 600;";
    let control_style = format!(
        "padding: 6px 10px; border: 1px solid {}; border-radius: 6px; background: {}; color: {}; font-size: 14px;",
        palette.border, palette.secondary, palette.text
    );
    let button_style = format!(
        "padding: 8px 16px; border: 1px solid {}; border-radius: 8px; background: {}; color: {}; font-size: 14px; cursor: pointer;",
        palette.border, palette.secondary, palette.text
    );
    let primary_button_style = format!(
        "padding: 8px 16px; border: none; border-radius: 8px; background: {}; color: #fff; font-size: 14px; cursor: pointer;",
        palette.primary
    );
    let themes: Vec<(ThemePreference, bool)> = ThemePreference::ALL
        .iter()
        .map(|&t| (t, t == settings.theme))
        .collect();
    let retentions: Vec<(u32, bool)> = RETENTION_CHOICES
        .iter()
        .map(|&d| (d, d == retention))
        .collect();

    let on_export = move |_| {
        let pond = state.session.read().pond();
        let date = (state.now)().date_naive();
        let result = to_csv(&state.history.read())
            .map_err(|e| e.to_string())
            .and_then(|csv| {
                download_csv(&export_file_name(pond.0, &date), &csv).map_err(|e| describe(&e))
            });
        match result {
            Ok(()) => export_error.set(None),
            Err(e) => {
                log::error!("Export failed: {}", e);
                export_error.set(Some(e));
            }
        }
    };

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 24px; max-width: 720px;",
            section {
                style: "{card_style}",
                h3 { style: "{section_title}", "Notifications" }
                ToggleRow {
                    label: "Email Alerts".to_string(),
                    description: "Send threshold alerts by email".to_string(),
                    on: settings.email_alerts,
                    palette,
                    ontoggle: move |_| state.settings.with_mut(|s| s.email_alerts = !s.email_alerts),
                }
                ToggleRow {
                    label: "Push Notifications".to_string(),
                    description: "Show alerts as browser notifications".to_string(),
                    on: settings.push_notifications,
                    palette,
                    ontoggle: move |_| state.settings.with_mut(|s| s.push_notifications = !s.push_notifications),
                }
                ToggleRow {
                    label: "Critical Alerts Only".to_string(),
                    description: "Hide warnings from the alerts panel and badge".to_string(),
                    on: settings.critical_only,
                    palette,
                    ontoggle: move |_| state.settings.with_mut(|s| s.critical_only = !s.critical_only),
                }
            }
            section {
                style: "{card_style}",
                h3 { style: "{section_title}", "Display" }
                div {
                    style: "display: flex; justify-content: space-between; align-items: center; padding: 12px 0;",
                    label { r#for: "wtd-theme", style: "font-size: 14px; font-weight: 500;", "Theme" }
                    select {
                        id: "wtd-theme",
                        style: "{control_style}",
                        onchange: move |evt: Event<FormData>| {
                            match evt.value().parse::<ThemePreference>() {
                                Ok(theme) => state.settings.with_mut(|s| s.theme = theme),
                                Err(e) => log::warn!("{}", e),
                            }
                        },
                        for (theme, selected) in themes {
                            option { key: "{theme.key()}", value: "{theme.key()}", selected, "{theme}" }
                        }
                    }
                }
                div {
                    style: "padding: 12px 0;",
                    div {
                        style: "display: flex; justify-content: space-between; font-size: 14px; font-weight: 500;",
                        label { r#for: "wtd-refresh", "Refresh Rate" }
                        span { style: "color: {palette.muted};", "{refresh}s" }
                    }
                    input {
                        id: "wtd-refresh",
                        r#type: "range",
                        min: "{MIN_REFRESH_SECS}",
                        max: "{MAX_REFRESH_SECS}",
                        step: "1",
                        value: "{refresh}",
                        style: "width: 100%; margin-top: 8px;",
                        oninput: move |evt: Event<FormData>| {
                            if let Ok(secs) = evt.value().parse::<u32>() {
                                state.settings.with_mut(|s| s.set_refresh_secs(secs));
                            }
                        },
                    }
                }
            }
            section {
                style: "{card_style}",
                h3 { style: "{section_title}", "Data" }
                div {
                    style: "display: flex; justify-content: space-between; align-items: center; padding: 12px 0;",
                    label { r#for: "wtd-retention", style: "font-size: 14px; font-weight: 500;", "Data Retention" }
                    select {
                        id: "wtd-retention",
                        style: "{control_style}",
                        onchange: move |evt: Event<FormData>| {
                            if let Ok(days) = evt.value().parse::<u32>() {
                                state.settings.with_mut(|s| {
                                    s.set_retention_days(days);
                                });
                            }
                        },
                        for (days, selected) in retentions {
                            option { key: "{days}", value: "{days}", selected, "{retention_label(days)}" }
                        }
                    }
                }
                div {
                    style: "display: flex; gap: 12px; padding-top: 12px;",
                    button { style: "{primary_button_style}", onclick: on_export, "Export CSV" }
                    button {
                        style: "{button_style}",
                        onclick: move |_| state.settings.with_mut(|s| s.reset()),
                        "Reset to Defaults"
                    }
                }
                if let Some(err) = export_error() {
                    p { style: "margin: 8px 0 0 0; font-size: 13px; color: {palette.critical};", "{err}" }
                }
            }
        }
    }
}
