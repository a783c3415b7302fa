//! `history`: the chart's filtered table, as CSV or JSON.

use crate::Format;
use chrono::{DateTime, FixedOffset, Local};
use log::info;
use wtd_data::export::{to_csv, to_json};
use wtd_data::simulator::Simulator;
use wtd_data::statistics::summarize_metrics;
use wtd_data::time_range::TimeRange;
use wtd_sensors::historical::HistoricalDataPoint;
use wtd_sensors::metric::Metric;

/// History for `hours` back from `now`, restricted to `range`.
pub fn filtered_history(
    seed: u64,
    hours: u32,
    range: TimeRange,
    now: DateTime<FixedOffset>,
) -> Vec<HistoricalDataPoint> {
    Simulator::new(seed)
        .historical(now, hours)
        .into_iter()
        .filter(|p| range.contains(&p.timestamp, now))
        .collect()
}

pub fn render(points: &[HistoricalDataPoint], format: Format) -> anyhow::Result<String> {
    match format {
        Format::Csv => to_csv(points),
        Format::Json => to_json(points),
    }
}

pub fn run_history(
    seed: u64,
    hours: u32,
    range: TimeRange,
    format: Format,
    output: Option<&str>,
) -> anyhow::Result<()> {
    let now = Local::now().fixed_offset();
    let points = filtered_history(seed, hours, range, now);
    info!(
        "{} of {} hourly points fall in {}",
        points.len(),
        hours + 1,
        range.label()
    );
    for s in summarize_metrics(&points, &Metric::CHARTED) {
        info!(
            "  {:<12} min {:.1}  max {:.1}  avg {:.1}",
            s.metric.key(),
            s.summary.min,
            s.summary.max,
            s.summary.avg
        );
    }

    let body = render(&points, format)?;
    match output {
        Some(path) => {
            std::fs::write(path, &body)?;
            info!("History written to {}", path);
        }
        None => print!("{}", body),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use wtd_data::export::CSV_HEADER;

    fn noon() -> DateTime<FixedOffset> {
        FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2024, 10, 14, 12, 0, 0)
            .unwrap()
    }

    #[test]
    fn presets_trim_the_lookback() {
        assert_eq!(filtered_history(1, 168, TimeRange::Week, noon()).len(), 169);
        assert_eq!(filtered_history(1, 168, TimeRange::Day, noon()).len(), 25);
        assert_eq!(filtered_history(1, 168, TimeRange::SixHours, noon()).len(), 7);
        // a range wider than the lookback is limited by the lookback
        assert_eq!(filtered_history(1, 12, TimeRange::Day, noon()).len(), 13);
    }

    #[test]
    fn custom_day_range() {
        let range: TimeRange = "2024-10-13..2024-10-13".parse().unwrap();
        let points = filtered_history(1, 168, range, noon());
        assert_eq!(points.len(), 24);
        assert!(points.iter().all(|p| p.timestamp.date_naive().to_string() == "2024-10-13"));
    }

    #[test]
    fn csv_output_has_header_and_rows() {
        let points = filtered_history(1, 168, TimeRange::SixHours, noon());
        let csv = render(&points, Format::Csv).unwrap();
        let mut lines = csv.lines();
        assert_eq!(lines.next().unwrap(), CSV_HEADER.join(","));
        assert_eq!(lines.count(), 7);
    }

    #[test]
    fn json_output_is_an_array() {
        let points = filtered_history(1, 168, TimeRange::SixHours, noon());
        let json = render(&points, Format::Json).unwrap();
        assert!(json.trim_start().starts_with('['));
        assert_eq!(json.matches("\"water_level\"").count(), 7);
    }
}
