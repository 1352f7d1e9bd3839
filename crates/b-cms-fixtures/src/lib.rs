//! ---
//! bcms_section: "07-fixtures"
//! bcms_subsection: "module"
//! bcms_type: "source"
//! bcms_scope: "code"
//! bcms_description: "Fixtures module exports."
//! bcms_version: "v0.1.0"
//! bcms_owner: "tbd"
//! ---
//! Static fixtures backing the recommendation and operator views: the model
//! recommendation table, the seed alarm set, and the capped operator log.
//! None of these are computed at runtime; the telemetry core never reads
//! them.

pub mod alarms;
pub mod operator_log;
pub mod predictions;

pub use alarms::{seed_alarms, Alarm, AlarmSeverity};
pub use operator_log::{seed_logs, LogBook, LogStatus, OperatorLogEntry, LOG_CAP};
pub use predictions::{model_predictions, ModelPrediction, PredictionModel};
