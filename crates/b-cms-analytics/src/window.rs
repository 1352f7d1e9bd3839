//! ---
//! bcms_section: "06-analytics"
//! bcms_subsection: "module"
//! bcms_type: "source"
//! bcms_scope: "code"
//! bcms_description: "Bounded realtime sample buffer."
//! bcms_version: "v0.1.0"
//! bcms_owner: "tbd"
//! ---
use std::collections::VecDeque;

use b_cms_telemetry::BoilerSample;

/// Realtime points the dashboard trend strip keeps by default.
pub const DEFAULT_REALTIME_POINTS: usize = 30;

/// Bounded buffer of live samples in arrival order; pushing beyond capacity
/// discards the oldest entry.
#[derive(Debug, Clone)]
pub struct RollingWindow {
    capacity: usize,
    samples: VecDeque<BoilerSample>,
}

impl RollingWindow {
    /// A window holding at most `capacity` samples. A zero capacity is
    /// promoted to one so the window always retains the latest sample.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            samples: VecDeque::with_capacity(capacity),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Append a sample, evicting the oldest when full.
    pub fn push(&mut self, sample: BoilerSample) {
        if self.samples.len() == self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(sample);
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Newest sample, if any has arrived yet.
    pub fn latest(&self) -> Option<&BoilerSample> {
        self.samples.back()
    }

    pub fn iter(&self) -> impl Iterator<Item = &BoilerSample> {
        self.samples.iter()
    }

    /// Copy out the window contents, oldest first.
    pub fn to_vec(&self) -> Vec<BoilerSample> {
        self.samples.iter().cloned().collect()
    }
}

impl Default for RollingWindow {
    fn default() -> Self {
        Self::new(DEFAULT_REALTIME_POINTS)
    }
}
