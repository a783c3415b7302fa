//! Dioxus RSX components for the water treatment dashboard.

mod alerts_panel;
mod circular_gauge;
mod error_display;
mod header;
mod historical_chart;
mod loading_spinner;
mod metric_card;
mod navigation;
mod pond_selector;
mod settings_panel;
mod status_indicator;
mod system_performance;
mod theme_toggle;

pub use alerts_panel::{AlertList, AlertsPanel};
pub use circular_gauge::CircularGauge;
pub use error_display::ErrorDisplay;
pub use header::Header;
pub use historical_chart::HistoricalChart;
pub use loading_spinner::LoadingSpinner;
pub use metric_card::MetricCard;
pub use navigation::{BottomNav, MobileMenu, Sidebar};
pub use pond_selector::PondSelector;
pub use settings_panel::SettingsPanel;
pub use status_indicator::{Connection, StatusIndicator};
pub use system_performance::SystemPerformanceCard;
pub use theme_toggle::ThemeToggle;
