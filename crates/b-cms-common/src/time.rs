//! ---
//! bcms_section: "01-core-functionality"
//! bcms_subsection: "module"
//! bcms_type: "source"
//! bcms_scope: "code"
//! bcms_description: "Shared primitives and utilities for the core runtime."
//! bcms_version: "v0.1.0"
//! bcms_owner: "tbd"
//! ---
use chrono::{DateTime, TimeZone, Utc};

/// Milliseconds in one hour.
pub const MILLIS_PER_HOUR: f64 = 3_600_000.0;

/// Current wall-clock time as epoch milliseconds.
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Convert a span in hours to milliseconds.
pub fn hours_to_millis(hours: f64) -> f64 {
    hours * MILLIS_PER_HOUR
}

/// Convert epoch milliseconds back to a UTC timestamp, clamping out-of-range input.
pub fn millis_to_datetime(millis: i64) -> DateTime<Utc> {
    match Utc.timestamp_millis_opt(millis) {
        chrono::LocalResult::Single(dt) => dt,
        _ => DateTime::<Utc>::MIN_UTC,
    }
}
