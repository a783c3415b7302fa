//! Ring geometry for the circular gauges.

use std::f64::consts::PI;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GaugeSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl GaugeSize {
    pub fn width(&self) -> f64 {
        match self {
            GaugeSize::Sm => 120.0,
            GaugeSize::Md => 160.0,
            GaugeSize::Lg => 200.0,
        }
    }

    pub fn stroke(&self) -> f64 {
        match self {
            GaugeSize::Sm => 8.0,
            GaugeSize::Md => 10.0,
            GaugeSize::Lg => 12.0,
        }
    }
}

/// Circle parameters for a progress ring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaugeGeometry {
    pub width: f64,
    pub stroke: f64,
    pub radius: f64,
    pub circumference: f64,
    pub dash_offset: f64,
}

impl GaugeGeometry {
    /// `fraction` is clamped to `0.0..=1.0`.
    pub fn new(size: GaugeSize, fraction: f64) -> Self {
        let width = size.width();
        let stroke = size.stroke();
        let radius = (width - stroke) / 2.0;
        let circumference = 2.0 * PI * radius;
        let fraction = if fraction.is_finite() {
            fraction.clamp(0.0, 1.0)
        } else {
            0.0
        };
        Self {
            width,
            stroke,
            radius,
            circumference,
            dash_offset: circumference * (1.0 - fraction),
        }
    }

    pub fn center(&self) -> f64 {
        self.width / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gauge_geometry() {
        let g = GaugeGeometry::new(GaugeSize::Md, 0.5);
        assert_eq!(g.radius, 75.0);
        assert!((g.circumference - 2.0 * PI * 75.0).abs() < 1e-9);
        assert!((g.dash_offset - g.circumference / 2.0).abs() < 1e-9);
        assert_eq!(g.center(), 80.0);

        let lg = GaugeGeometry::new(GaugeSize::Lg, 2.0);
        assert_eq!(lg.radius, 94.0);
        assert_eq!(lg.dash_offset, 0.0);
        let sm = GaugeGeometry::new(GaugeSize::Sm, -1.0);
        assert_eq!(sm.radius, 56.0);
        assert_eq!(sm.dash_offset, sm.circumference);
    }
}
