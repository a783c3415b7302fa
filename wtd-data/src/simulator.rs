//! Mock sensor feed.
//!
//! Current readings are uniform draws inside fixed ranges. Historical
//! readings follow a sinusoidal daily pattern with added noise, one point
//! per hour.

use chrono::{DateTime, FixedOffset, TimeDelta, Timelike};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::cell::RefCell;
use std::f64::consts::PI;
use std::rc::Rc;
use wtd_sensors::historical::HistoricalDataPoint;
use wtd_sensors::water_metrics::WaterMetrics;

/// Lookback window generated for the history chart (7 days).
pub const DEFAULT_LOOKBACK_HOURS: u32 = 168;

/// Default interval between live snapshots.
pub const DEFAULT_TICK_SECS: u32 = 3;

/// Seeded source of mock readings.
///
/// Cheaply cloneable (via `Rc`); clones draw from the same generator, so
/// sharing one between components in single-threaded WASM keeps the
/// sequence consistent.
#[derive(Clone)]
pub struct Simulator {
    rng: Rc<RefCell<StdRng>>,
}

impl Simulator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Rc::new(RefCell::new(StdRng::seed_from_u64(seed))),
        }
    }

    /// Draw a fresh snapshot stamped with `now`.
    pub fn current_metrics(&self, now: DateTime<FixedOffset>) -> WaterMetrics {
        generate_current_metrics(&mut *self.rng.borrow_mut(), now)
    }

    /// Generate `hours + 1` hourly points ending at `now`.
    pub fn historical(&self, now: DateTime<FixedOffset>, hours: u32) -> Vec<HistoricalDataPoint> {
        generate_historical(&mut *self.rng.borrow_mut(), now, hours)
    }
}

/// Daily modulation in `-0.2..=0.2`, peaking at 06:00 and bottoming at 18:00.
pub fn daily_pattern(hour_of_day: u32) -> f64 {
    ((hour_of_day as f64 / 24.0) * PI * 2.0).sin() * 0.2
}

pub fn generate_current_metrics<R: Rng + ?Sized>(
    rng: &mut R,
    now: DateTime<FixedOffset>,
) -> WaterMetrics {
    WaterMetrics {
        water_level: 65.0 + rng.gen::<f64>() * 20.0,
        flow_rate: 120.0 + rng.gen::<f64>() * 40.0,
        pressure: 2.5 + rng.gen::<f64>() * 1.5,
        ph: 6.8 + rng.gen::<f64>() * 0.8,
        turbidity: 1.5 + rng.gen::<f64>() * 2.0,
        temperature: 18.0 + rng.gen::<f64>() * 8.0,
        dissolved_oxygen: 7.0 + rng.gen::<f64>() * 2.0,
        timestamp: now,
    }
}

pub fn generate_historical<R: Rng + ?Sized>(
    rng: &mut R,
    now: DateTime<FixedOffset>,
    hours: u32,
) -> Vec<HistoricalDataPoint> {
    let mut data = Vec::with_capacity(hours as usize + 1);

    for i in (0..=hours).rev() {
        let timestamp = now - TimeDelta::hours(i as i64);
        let pattern = daily_pattern(timestamp.hour());
        // centred noise in -0.5..0.5
        let mut noise = || rng.gen::<f64>() - 0.5;

        let water_level = 70.0 + pattern * 15.0 + noise() * 10.0;
        let flow_rate = 130.0 + pattern * 30.0 + noise() * 20.0;
        let pressure = 3.0 + pattern * 0.5 + noise() * 0.5;
        let ph = 7.2 + noise() * 0.4;
        let turbidity = 2.0 + pattern.abs() * 1.5 + (noise() + 0.5) * 0.5;
        let temperature = 22.0 + pattern * 3.0 + noise() * 2.0;

        data.push(HistoricalDataPoint {
            timestamp,
            water_level,
            flow_rate,
            pressure,
            ph,
            turbidity,
            temperature,
        });
    }

    log::debug!("Generated {} historical points over {}h", data.len(), hours);
    data
}
