//! Ring gauge for one bounded reading.

use crate::state::AppState;
use dioxus::prelude::*;
use wtd_data::gauge::{GaugeGeometry, GaugeSize};
use wtd_sensors::sensor_config::SensorConfig;

#[derive(Props, Clone, PartialEq)]
pub struct CircularGaugeProps {
    pub value: f64,
    pub config: SensorConfig,
    pub label: String,
    #[props(default)]
    pub size: GaugeSize,
    pub icon: String,
}

#[component]
pub fn CircularGauge(props: CircularGaugeProps) -> Element {
    let state = use_context::<AppState>();
    let palette = state.palette();
    let geometry = GaugeGeometry::new(props.size, props.config.fraction(props.value));
    let status = props.config.status(props.value);
    let color = palette.status(status);
    let center = geometry.center();
    let width = geometry.width;
    let value_size = if props.size == GaugeSize::Sm { 20 } else { 28 };

    rsx! {
        div {
            style: "display: flex; flex-direction: column; align-items: center; gap: 8px;",
            title: "{props.label}: {status.as_str()}",
            div {
                style: "position: relative; width: {width}px; height: {width}px;",
                svg {
                    width: "{width}",
                    height: "{width}",
                    "viewBox": "0 0 {width} {width}",
                    style: "transform: rotate(-90deg);",
                    circle {
                        cx: "{center}",
                        cy: "{center}",
                        r: "{geometry.radius}",
                        fill: "none",
                        stroke: "{palette.gauge_track}",
                        "stroke-width": "{geometry.stroke}",
                    }
                    circle {
                        cx: "{center}",
                        cy: "{center}",
                        r: "{geometry.radius}",
                        fill: "none",
                        stroke: "{color}",
                        "stroke-width": "{geometry.stroke}",
                        "stroke-linecap": "round",
                        "stroke-dasharray": "{geometry.circumference}",
                        "stroke-dashoffset": "{geometry.dash_offset}",
                        style: "transition: stroke-dashoffset 0.5s ease-out, stroke 0.3s;",
                    }
                }
                div {
                    style: "position: absolute; inset: 0; display: flex; flex-direction: column; align-items: center; justify-content: center;",
                    span { style: "font-size: 16px; color: {color};", "{props.icon}" }
                    span {
                        style: "font-size: {value_size}px; font-weight: 700; color: {palette.text};",
                        "{props.value:.1}"
                    }
                    span { style: "font-size: 12px; color: {palette.muted};", "{props.config.unit}" }
                }
            }
            span {
                style: "font-size: 14px; font-weight: 500; color: {palette.muted}; text-align: center;",
                "{props.label}"
            }
        }
    }
}
