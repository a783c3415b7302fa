//! `snapshot` and `watch`.

use chrono::{DateTime, FixedOffset, Local};
use log::info;
use serde::Serialize;
use std::fmt::Write;
use std::time::Duration;
use wtd_data::alerts::AlertFeed;
use wtd_data::export::to_json;
use wtd_data::settings::{MAX_REFRESH_SECS, MIN_REFRESH_SECS};
use wtd_data::simulator::Simulator;
use wtd_sensors::metric::Metric;
use wtd_sensors::sensor_config::SensorTable;
use wtd_sensors::status::Status;
use wtd_sensors::water_metrics::WaterMetrics;
use wtd_utils::numbers::with_unit;

#[derive(Debug, Serialize)]
pub struct Reading<'a> {
    pub metric: Metric,
    pub value: f64,
    pub unit: &'a str,
    pub status: Status,
}

#[derive(Debug, Serialize)]
pub struct Snapshot<'a> {
    pub timestamp: DateTime<FixedOffset>,
    pub readings: Vec<Reading<'a>>,
}

pub fn snapshot<'a>(metrics: &WaterMetrics, table: &'a SensorTable) -> Snapshot<'a> {
    let readings = table
        .iter()
        .map(|(metric, config)| {
            let value = metrics.value(metric);
            Reading {
                metric,
                value,
                unit: &config.unit,
                status: config.status(value),
            }
        })
        .collect();
    Snapshot {
        timestamp: metrics.timestamp,
        readings,
    }
}

/// Fixed-width table, one sensor per line.
pub fn render_table(snapshot: &Snapshot) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", snapshot.timestamp.format("%Y-%m-%d %H:%M:%S"));
    for r in &snapshot.readings {
        let _ = writeln!(
            out,
            "  {:<18}{:>14}  {}",
            r.metric.label(),
            with_unit(r.value, 1, r.unit),
            r.status
        );
    }
    out
}

fn now() -> DateTime<FixedOffset> {
    Local::now().fixed_offset()
}

pub fn run_snapshot(seed: u64, json: bool) -> anyhow::Result<()> {
    let table = SensorTable::embedded()?;
    let metrics = Simulator::new(seed).current_metrics(now());
    let snap = snapshot(&metrics, &table);
    if json {
        println!("{}", to_json(&snap)?);
    } else {
        print!("{}", render_table(&snap));
    }
    Ok(())
}

pub async fn run_watch(seed: u64, interval_secs: u32, count: Option<usize>) -> anyhow::Result<()> {
    let interval_secs = interval_secs.clamp(MIN_REFRESH_SECS, MAX_REFRESH_SECS);
    let table = SensorTable::embedded()?;
    let simulator = Simulator::new(seed);
    let mut feed = AlertFeed::new();
    let mut ticker = tokio::time::interval(Duration::from_secs(interval_secs as u64));

    info!("Watching with seed {} every {}s", seed, interval_secs);

    let mut emitted = 0usize;
    while count.map_or(true, |c| emitted < c) {
        ticker.tick().await;
        let metrics = simulator.current_metrics(now());
        let raised = feed.observe(&table, &metrics);
        print!("{}", render_table(&snapshot(&metrics, &table)));
        for alert in feed.entries(false).take(raised) {
            println!("  [{}] {}: {}", alert.level.as_str(), alert.title, alert.message);
        }
        emitted += 1;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn calm() -> WaterMetrics {
        WaterMetrics {
            water_level: 72.0,
            flow_rate: 140.0,
            pressure: 3.1,
            ph: 7.2,
            turbidity: 5.5,
            temperature: 22.0,
            dissolved_oxygen: 8.0,
            timestamp: FixedOffset::east_opt(0)
                .unwrap()
                .with_ymd_and_hms(2024, 10, 14, 12, 0, 0)
                .unwrap(),
        }
    }

    #[test]
    fn snapshot_covers_every_sensor() {
        let table = SensorTable::embedded().unwrap();
        let snap = snapshot(&calm(), &table);
        assert_eq!(snap.readings.len(), Metric::ALL.len());
        let turbidity = snap
            .readings
            .iter()
            .find(|r| r.metric == Metric::Turbidity)
            .unwrap();
        assert_eq!(turbidity.status, Status::Warning);
        assert_eq!(turbidity.unit, "NTU");
    }

    #[test]
    fn table_lines() {
        let table = SensorTable::embedded().unwrap();
        let text = render_table(&snapshot(&calm(), &table));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "2024-10-14 12:00:00");
        assert_eq!(lines.len(), 1 + Metric::ALL.len());
        assert!(lines.iter().any(|l| l.contains("Turbidity") && l.ends_with("warning")));
    }

    #[test]
    fn json_uses_snake_case_keys() {
        let table = SensorTable::embedded().unwrap();
        let json = to_json(&snapshot(&calm(), &table)).unwrap();
        assert!(json.contains("\"metric\": \"dissolved_oxygen\""));
        assert!(json.contains("\"status\": \"normal\""));
    }

    #[tokio::test]
    async fn watch_stops_after_count() {
        run_watch(7, 1, Some(2)).await.unwrap();
    }
}
