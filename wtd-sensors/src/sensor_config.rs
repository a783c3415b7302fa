use crate::error::DashboardError;
use crate::metric::Metric;
use crate::status::Status;
use csv::{ReaderBuilder, Trim};
use serde::{Deserialize, Serialize};

/// Embedded sensor reference data: range, unit and thresholds per metric.
pub static CSV_OBJECT: &str = include_str!("../../fixtures/sensors.csv");

/// Display range, unit and alert thresholds for one sensor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorConfig {
    pub min: f64,
    pub max: f64,
    pub unit: String,
    pub warning: f64,
    pub critical: f64,
}

impl SensorConfig {
    pub fn status(&self, value: f64) -> Status {
        Status::classify(value, self.warning, self.critical)
    }

    /// Position of `value` within `[min, max]`, clamped to `0.0..=1.0`.
    pub fn fraction(&self, value: f64) -> f64 {
        let span = self.max - self.min;
        if span <= 0.0 {
            return 0.0;
        }
        ((value - self.min) / span).clamp(0.0, 1.0)
    }

    /// True when low readings are the dangerous ones.
    pub fn is_low_bad(&self) -> bool {
        self.critical < self.warning
    }
}

#[derive(Debug, Deserialize)]
struct SensorRow {
    metric: String,
    min: f64,
    max: f64,
    unit: String,
    warning: f64,
    critical: f64,
}

/// Sensor configuration for every [`Metric`], indexed by metric.
#[derive(Debug, Clone, PartialEq)]
pub struct SensorTable {
    configs: Vec<SensorConfig>,
}

impl SensorTable {
    /// Parse the fixture compiled into the binary.
    pub fn embedded() -> Result<SensorTable, DashboardError> {
        SensorTable::parse_sensor_csv(CSV_OBJECT)
    }

    /// Parse a CSV string of sensor rows.
    ///
    /// Expected CSV columns: metric, min, max, unit, warning, critical.
    /// Every metric must appear exactly once.
    pub fn parse_sensor_csv(csv_object: &str) -> Result<SensorTable, DashboardError> {
        let mut slots: Vec<Option<SensorConfig>> = vec![None; Metric::ALL.len()];
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .trim(Trim::All)
            .from_reader(csv_object.as_bytes());

        for row in rdr.deserialize::<SensorRow>() {
            let row = row.map_err(|e| DashboardError::SensorFixture(e.to_string()))?;
            let metric: Metric = row.metric.parse()?;
            if row.max <= row.min {
                return Err(DashboardError::SensorFixture(format!(
                    "{}: max {} is not above min {}",
                    metric.key(),
                    row.max,
                    row.min
                )));
            }
            let slot = &mut slots[metric.index()];
            if slot.is_some() {
                return Err(DashboardError::SensorFixture(format!(
                    "duplicate row for {}",
                    metric.key()
                )));
            }
            *slot = Some(SensorConfig {
                min: row.min,
                max: row.max,
                unit: row.unit,
                warning: row.warning,
                critical: row.critical,
            });
        }

        let mut configs = Vec::with_capacity(slots.len());
        for (metric, slot) in Metric::ALL.iter().zip(slots) {
            match slot {
                Some(config) => configs.push(config),
                None => {
                    return Err(DashboardError::SensorFixture(format!(
                        "missing row for {}",
                        metric.key()
                    )))
                }
            }
        }
        log::debug!("Loaded {} sensor configurations", configs.len());
        Ok(SensorTable { configs })
    }

    pub fn get(&self, metric: Metric) -> &SensorConfig {
        &self.configs[metric.index()]
    }

    pub fn status(&self, metric: Metric, value: f64) -> Status {
        self.get(metric).status(value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Metric, &SensorConfig)> {
        Metric::ALL.iter().copied().zip(self.configs.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_table_matches_reference() {
        let table = SensorTable::embedded().unwrap();
        let level = table.get(Metric::WaterLevel);
        assert_eq!(level.unit, "%");
        assert_eq!(level.warning, 85.0);
        assert_eq!(level.critical, 95.0);

        let flow = table.get(Metric::FlowRate);
        assert_eq!((flow.min, flow.max), (0.0, 200.0));
        assert_eq!(flow.unit, "L/min");

        assert_eq!(table.get(Metric::Pressure).critical, 4.5);
        assert_eq!(table.get(Metric::Ph).warning, 8.5);
        assert_eq!(table.get(Metric::Turbidity).critical, 8.0);
        assert_eq!(table.get(Metric::Temperature).unit, "°C");
        assert!(table.get(Metric::DissolvedOxygen).is_low_bad());
        assert_eq!(table.iter().count(), 7);
    }

    #[test]
    fn table_status_uses_metric_thresholds() {
        let table = SensorTable::embedded().unwrap();
        assert_eq!(table.status(Metric::Pressure, 3.2), Status::Normal);
        assert_eq!(table.status(Metric::Pressure, 4.2), Status::Warning);
        assert_eq!(table.status(Metric::Pressure, 4.5), Status::Critical);
        assert_eq!(table.status(Metric::DissolvedOxygen, 8.1), Status::Normal);
        assert_eq!(table.status(Metric::DissolvedOxygen, 3.0), Status::Critical);
    }

    #[test]
    fn fraction_is_clamped() {
        let config = SensorConfig {
            min: 0.0,
            max: 5.0,
            unit: "bar".to_string(),
            warning: 4.0,
            critical: 4.5,
        };
        assert_eq!(config.fraction(2.5), 0.5);
        assert_eq!(config.fraction(-1.0), 0.0);
        assert_eq!(config.fraction(7.0), 1.0);
    }

    #[test]
    fn missing_row_is_rejected() {
        let csv = "metric,min,max,unit,warning,critical\nwater_level,0,100,%,85,95\n";
        match SensorTable::parse_sensor_csv(csv) {
            Err(DashboardError::SensorFixture(msg)) => assert!(msg.contains("flow_rate")),
            other => panic!("expected fixture error, got {:?}", other),
        }
    }

    #[test]
    fn unknown_metric_is_rejected() {
        let csv = "metric,min,max,unit,warning,critical\nsalinity,0,40,ppt,35,38\n";
        assert_eq!(
            SensorTable::parse_sensor_csv(csv),
            Err(DashboardError::UnknownMetric("salinity".to_string()))
        );
    }

    #[test]
    fn duplicate_and_empty_range_rows_are_rejected() {
        let duplicate = format!("{}water_level,0,100,%,85,95\n", CSV_OBJECT);
        assert!(matches!(
            SensorTable::parse_sensor_csv(&duplicate),
            Err(DashboardError::SensorFixture(_))
        ));

        let flat = CSV_OBJECT.replace("pressure,0,5,", "pressure,5,5,");
        assert!(matches!(
            SensorTable::parse_sensor_csv(&flat),
            Err(DashboardError::SensorFixture(_))
        ));
    }
}
