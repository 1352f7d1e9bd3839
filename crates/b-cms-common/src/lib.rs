//! ---
//! bcms_section: "01-core-functionality"
//! bcms_subsection: "module"
//! bcms_type: "source"
//! bcms_scope: "code"
//! bcms_description: "Shared primitives and utilities for the core runtime."
//! bcms_version: "v0.1.0"
//! bcms_owner: "tbd"
//! ---
//! Core shared primitives for the B-CMS workspace.
//! This crate exposes configuration loading, logging initialisation, and
//! time utilities consumed across the workspace.

pub mod config;
pub mod logging;
pub mod time;

pub use config::{ApiConfig, AppConfig, LoadedAppConfig, LoggingConfig, TelemetryConfig};
pub use logging::{init_tracing, LogFormat};
