//! ---
//! bcms_section: "06-analytics"
//! bcms_subsection: "module"
//! bcms_type: "source"
//! bcms_scope: "code"
//! bcms_description: "Analytics module exports."
//! bcms_version: "v0.1.0"
//! bcms_owner: "tbd"
//! ---
//! Dashboard-side reductions over generated telemetry: per-parameter
//! summaries, exact tail slicing, and the bounded realtime window.

pub mod summary;
pub mod window;

pub use summary::{summarize, summarize_field, tail_window, ParameterSummary, Trend};
pub use window::{RollingWindow, DEFAULT_REALTIME_POINTS};
