use anyhow::{anyhow, Result};
use csv::Writer;
use serde::Serialize;
use wtd_sensors::historical::HistoricalDataPoint;

pub const CSV_HEADER: [&str; 7] = [
    "timestamp",
    "water_level",
    "flow_rate",
    "pressure",
    "ph",
    "turbidity",
    "temperature",
];

fn fixed(value: f64) -> String {
    format!("{:.2}", value)
}

/// Historical points as CSV, RFC 3339 timestamps and values to two decimals.
pub fn to_csv(points: &[HistoricalDataPoint]) -> Result<String> {
    let mut writer = Writer::from_writer(vec![]);
    writer.write_record(CSV_HEADER)?;
    for p in points {
        writer.write_record([
            p.timestamp.to_rfc3339(),
            fixed(p.water_level),
            fixed(p.flow_rate),
            fixed(p.pressure),
            fixed(p.ph),
            fixed(p.turbidity),
            fixed(p.temperature),
        ])?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| anyhow!("flushing CSV buffer: {}", e))?;
    Ok(String::from_utf8(bytes)?)
}

pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Download name for an export taken on `date`, e.g. "pond-3-2024-10-14.csv".
pub fn export_file_name(pond: u8, date: &chrono::NaiveDate) -> String {
    format!("pond-{}-{}.csv", pond, wtd_utils::dates::format_date(date))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulator::Simulator;
    use crate::test_support::noon;

    #[test]
    fn csv_has_header_and_one_row_per_point() {
        let points = Simulator::new(4).historical(noon(), 3);
        let csv = to_csv(&points).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(
            lines[0],
            "timestamp,water_level,flow_rate,pressure,ph,turbidity,temperature"
        );
        assert!(lines[4].starts_with("2024-10-14T12:00:00+00:00,"));
        assert_eq!(lines[4].split(',').count(), 7);
    }

    #[test]
    fn csv_reads_back() {
        let points = Simulator::new(4).historical(noon(), 2);
        let csv = to_csv(&points).unwrap();
        let mut rdr = csv::Reader::from_reader(csv.as_bytes());
        let rows: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 3);
        let ph: f64 = rows[0][4].parse().unwrap();
        assert!((ph - points[0].ph).abs() < 0.005 + 1e-9);
    }

    #[test]
    fn json_is_an_array() {
        let points = Simulator::new(4).historical(noon(), 1);
        let json = to_json(&points).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.as_array().map(|a| a.len()), Some(2));
        assert!(parsed[0].get("water_level").is_some());
    }

    #[test]
    fn file_name() {
        assert_eq!(export_file_name(3, &noon().date_naive()), "pond-3-2024-10-14.csv");
    }
}
