pub mod error;
pub mod historical;
pub mod metric;
pub mod sensor_config;
pub mod status;
pub mod water_metrics;
