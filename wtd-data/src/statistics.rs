use serde::Serialize;
use wtd_sensors::historical::HistoricalDataPoint;
use wtd_sensors::metric::Metric;

/// Minimum, maximum and mean of a series.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Summary {
    pub min: f64,
    pub max: f64,
    pub avg: f64,
}

/// Summarize a slice of values. Non-finite values are skipped and an empty
/// input summarizes to all zeros.
pub fn summarize(values: &[f64]) -> Summary {
    let mut count = 0usize;
    let mut sum = 0.0;
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;

    for &v in values.iter().filter(|v| v.is_finite()) {
        count += 1;
        sum += v;
        min = min.min(v);
        max = max.max(v);
    }

    if count == 0 {
        return Summary::default();
    }

    // rounding in the sum can leave the mean a hair outside [min, max]
    let avg = (sum / count as f64).clamp(min, max);
    Summary { min, max, avg }
}

/// Summary of one metric over a set of historical points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricSummary {
    pub metric: Metric,
    #[serde(flatten)]
    pub summary: Summary,
}

pub fn summarize_metric(points: &[HistoricalDataPoint], metric: Metric) -> Summary {
    let values: Vec<f64> = points.iter().filter_map(|p| p.value(metric)).collect();
    summarize(&values)
}

/// Summaries for each of `metrics`, in the given order.
pub fn summarize_metrics(points: &[HistoricalDataPoint], metrics: &[Metric]) -> Vec<MetricSummary> {
    metrics
        .iter()
        .map(|&metric| MetricSummary {
            metric,
            summary: summarize_metric(points, metric),
        })
        .collect()
}
