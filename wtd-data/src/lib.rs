//! Data processing for the water treatment dashboard.
//!
//! This crate holds everything between the mock sensors and the rendered
//! components: the simulator that produces readings, the chart state
//! controller (time range filter, zoom window, drag selection, brush),
//! statistics, trends, the alert feed and the session/settings state the
//! UI is driven by. Nothing here depends on Dioxus, so it is unit tested
//! natively and shared with the CLI.

pub mod alerts;
pub mod chart;
pub mod export;
pub mod feed;
pub mod gauge;
pub mod performance;
pub mod session;
pub mod settings;
pub mod simulator;
pub mod statistics;
pub mod time_range;
pub mod trend;
pub mod zoom;
