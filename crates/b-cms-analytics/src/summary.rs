//! ---
//! bcms_section: "06-analytics"
//! bcms_subsection: "module"
//! bcms_type: "source"
//! bcms_scope: "code"
//! bcms_description: "Parameter summaries for the boiler detail view."
//! bcms_version: "v0.1.0"
//! bcms_owner: "tbd"
//! ---
use serde::{Deserialize, Serialize};

use b_cms_telemetry::{BoilerSample, TelemetrySeries};

/// Direction of the most recent movement, latest sample against the one
/// before it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Stable,
}

/// Reduced statistics over one telemetry parameter.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ParameterSummary {
    pub mean: f64,
    pub max: f64,
    pub min: f64,
    pub latest: f64,
    pub trend: Trend,
}

/// Summarise a run of values. Returns `None` for empty input; a single value
/// reports a stable trend.
pub fn summarize(values: &[f64]) -> Option<ParameterSummary> {
    let latest = *values.last()?;
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let trend = match values.len() {
        1 => Trend::Stable,
        n => {
            let previous = values[n - 2];
            if latest > previous {
                Trend::Up
            } else if latest < previous {
                Trend::Down
            } else {
                Trend::Stable
            }
        }
    };
    Some(ParameterSummary {
        mean,
        max,
        min,
        latest,
        trend,
    })
}

/// Summarise one field of a series through an accessor, e.g.
/// `summarize_field(&series, |s| s.efficiency_pct)`.
pub fn summarize_field<F>(series: &TelemetrySeries, accessor: F) -> Option<ParameterSummary>
where
    F: Fn(&BoilerSample) -> f64,
{
    let values: Vec<f64> = series.iter().map(accessor).collect();
    summarize(&values)
}

/// The most recent `hours` worth of points of a series.
///
/// Uses the series' exact [`points_per_hour`](TelemetrySeries::points_per_hour)
/// density, so a 24 h window over a 168 h series yields
/// `floor(24 * 100 / 168)` points. Spans at or beyond the series span return
/// the whole series; non-positive spans return an empty slice.
pub fn tail_window(series: &TelemetrySeries, hours: f64) -> &[BoilerSample] {
    let samples = series.samples();
    if hours <= 0.0 {
        return &samples[samples.len()..];
    }
    let requested = (hours * series.points_per_hour()).floor() as usize;
    let count = requested.min(samples.len());
    &samples[samples.len() - count..]
}

#[cfg(test)]
mod tests {
    use super::*;
    use b_cms_telemetry::TelemetryGenerator;

    #[test]
    fn empty_input_has_no_summary() {
        assert!(summarize(&[]).is_none());
    }

    #[test]
    fn single_value_is_stable() {
        let summary = summarize(&[42.0]).unwrap();
        assert_eq!(summary.latest, 42.0);
        assert_eq!(summary.mean, 42.0);
        assert_eq!(summary.trend, Trend::Stable);
    }

    #[test]
    fn summary_reports_extremes_and_mean() {
        let summary = summarize(&[1.0, 5.0, 3.0]).unwrap();
        assert_eq!(summary.min, 1.0);
        assert_eq!(summary.max, 5.0);
        assert_eq!(summary.mean, 3.0);
        assert_eq!(summary.latest, 3.0);
        assert_eq!(summary.trend, Trend::Down);
    }

    #[test]
    fn trend_compares_latest_against_previous_only() {
        assert_eq!(summarize(&[9.0, 1.0, 2.0]).unwrap().trend, Trend::Up);
        assert_eq!(summarize(&[1.0, 9.0, 2.0]).unwrap().trend, Trend::Down);
        assert_eq!(summarize(&[1.0, 2.0, 2.0]).unwrap().trend, Trend::Stable);
    }

    #[test]
    fn field_summary_stays_inside_the_field_window() {
        let series = TelemetryGenerator::seeded(31).series(24.0);
        let summary = summarize_field(&series, |s| s.efficiency_pct).unwrap();
        assert!(summary.min >= 83.0);
        assert!(summary.max <= 92.0);
        assert!(summary.mean >= summary.min && summary.mean <= summary.max);
    }

    #[test]
    fn tail_window_slices_exactly() {
        let series = TelemetryGenerator::seeded(8).series(168.0);
        let day = tail_window(&series, 24.0);
        assert_eq!(day.len(), (24.0 * 100.0 / 168.0) as usize);
        let full = tail_window(&series, 168.0);
        assert_eq!(full.len(), series.len());
        let beyond = tail_window(&series, 500.0);
        assert_eq!(beyond.len(), series.len());
    }

    #[test]
    fn tail_window_returns_the_newest_points() {
        let series = TelemetryGenerator::seeded(12).series(168.0);
        let window = tail_window(&series, 24.0);
        assert_eq!(
            window.last().unwrap().timestamp,
            series.latest().unwrap().timestamp
        );
    }

    #[test]
    fn non_positive_window_is_empty() {
        let series = TelemetryGenerator::seeded(14).series(24.0);
        assert!(tail_window(&series, 0.0).is_empty());
        assert!(tail_window(&series, -3.0).is_empty());
    }
}
