//! ---
//! bcms_section: "02-telemetry-core"
//! bcms_subsection: "module"
//! bcms_type: "source"
//! bcms_scope: "code"
//! bcms_description: "Fixed-cardinality telemetry series container."
//! bcms_version: "v0.1.0"
//! bcms_owner: "tbd"
//! ---
use serde::{Deserialize, Serialize};

use crate::sample::BoilerSample;

/// Every series carries exactly this many points; the requested span only
/// changes the spacing between them.
pub const SERIES_POINTS: usize = 100;

/// An ordered run of [`BoilerSample`]s with monotonically increasing
/// timestamps and fixed cardinality.
///
/// Granularity is always `span / 100`. Callers that need "the last N hours"
/// of a longer series slice with [`TelemetrySeries::points_per_hour`] instead
/// of guessing a conversion constant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetrySeries {
    span_hours: f64,
    spacing_ms: f64,
    samples: Vec<BoilerSample>,
}

impl TelemetrySeries {
    pub(crate) fn new(samples: Vec<BoilerSample>, span_hours: f64, spacing_ms: f64) -> Self {
        debug_assert_eq!(samples.len(), SERIES_POINTS);
        Self {
            span_hours,
            spacing_ms,
            samples,
        }
    }

    /// The span this series covers, in hours.
    pub fn span_hours(&self) -> f64 {
        self.span_hours
    }

    /// Inter-point spacing in milliseconds (`span_hours * 3_600_000 / 100`).
    pub fn spacing_ms(&self) -> f64 {
        self.spacing_ms
    }

    /// Exact point density of this series.
    ///
    /// Use this to convert "hours of history" into a point count when
    /// slicing, e.g. `(hours * series.points_per_hour()).floor()`.
    pub fn points_per_hour(&self) -> f64 {
        SERIES_POINTS as f64 / self.span_hours
    }

    /// All samples in ascending timestamp order.
    pub fn samples(&self) -> &[BoilerSample] {
        &self.samples
    }

    /// Most recent sample.
    pub fn latest(&self) -> Option<&BoilerSample> {
        self.samples.last()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BoilerSample> {
        self.samples.iter()
    }
}

impl<'a> IntoIterator for &'a TelemetrySeries {
    type Item = &'a BoilerSample;
    type IntoIter = std::slice::Iter<'a, BoilerSample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}
