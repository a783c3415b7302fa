//! Shared Dioxus components and browser glue for the water treatment dashboard.
//!
//! This crate provides:
//! - `state`: Reactive AppState with Dioxus Signals
//! - `theme`: Light and dark palettes, status and metric colours
//! - `platform`: `web-sys` wrappers for theme classes, media queries and downloads
//! - `plot`: plotters SVG rendering of the history chart and its overview
//! - `components`: RSX components (gauges, cards, chart, panels, navigation)

pub mod components;
pub mod platform;
pub mod plot;
pub mod state;
pub mod theme;
