//! Connection status dot with label.

use crate::state::AppState;
use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connection {
    Online,
    Offline,
    Warning,
}

impl Connection {
    /// Offline when the sensor table failed to load, Warning while any
    /// critical alert is active.
    pub fn assess(load_failed: bool, critical_alerts: usize) -> Connection {
        if load_failed {
            Connection::Offline
        } else if critical_alerts > 0 {
            Connection::Warning
        } else {
            Connection::Online
        }
    }

    pub fn text(&self) -> &'static str {
        match self {
            Connection::Online => "Online",
            Connection::Offline => "Offline",
            Connection::Warning => "Warning",
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct StatusIndicatorProps {
    pub status: Connection,
    pub label: String,
    /// Shown as "Last update: ..." when present
    pub last_update: Option<String>,
}

#[component]
pub fn StatusIndicator(props: StatusIndicatorProps) -> Element {
    let state = use_context::<AppState>();
    let palette = state.palette();
    let color = match props.status {
        Connection::Online => palette.success,
        Connection::Offline => palette.critical,
        Connection::Warning => palette.warning,
    };
    let dot_style = format!(
        "width: 12px; height: 12px; border-radius: 50%; background: {}; box-shadow: 0 0 10px {};",
        color, color
    );

    rsx! {
        div {
            style: "display: flex; align-items: center; gap: 12px;",
            title: "{props.status.text()}",
            div { style: "{dot_style}" }
            div {
                span {
                    style: "font-size: 14px; font-weight: 500; color: {palette.text};",
                    "{props.label}"
                }
                if let Some(update) = props.last_update {
                    p {
                        style: "margin: 0; font-size: 12px; color: {palette.muted};",
                        "Last update: {update}"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_failure_outranks_alerts() {
        assert_eq!(Connection::assess(false, 0), Connection::Online);
        assert_eq!(Connection::assess(false, 2), Connection::Warning);
        assert_eq!(Connection::assess(true, 2), Connection::Offline);
        assert_eq!(Connection::assess(true, 0).text(), "Offline");
    }
}
