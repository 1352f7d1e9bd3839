//! ---
//! bcms_section: "02-telemetry-core"
//! bcms_subsection: "module"
//! bcms_type: "source"
//! bcms_scope: "code"
//! bcms_description: "Telemetry sample value objects."
//! bcms_version: "v0.1.0"
//! bcms_owner: "tbd"
//! ---
use serde::{Deserialize, Serialize};

/// One instant of boiler telemetry.
///
/// Samples are value objects: generated fresh on each draw, immutable once
/// returned, no identity and no persistence. `biomass_flow_tph` is always
/// derived from `coal_flow_tph` and `cofiring_ratio_pct`; efficiency and CO₂
/// are derived from the independent fields before clamping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoilerSample {
    /// Epoch milliseconds (UTC).
    pub timestamp: i64,
    /// Main steam temperature (°C).
    pub steam_temp_c: f64,
    /// Drum pressure (bar).
    pub drum_pressure_bar: f64,
    /// Coal mass flow (t/h).
    pub coal_flow_tph: f64,
    /// Biomass mass flow (t/h), always `coal_flow_tph * cofiring_ratio_pct / 100`.
    pub biomass_flow_tph: f64,
    /// Unit load (MW).
    pub load_mw: f64,
    /// Primary air flow (t/h).
    pub primary_air_tph: f64,
    /// Secondary air flow (t/h).
    pub secondary_air_tph: f64,
    /// Excess air (%).
    pub excess_air_pct: f64,
    /// Thermal efficiency (%).
    pub efficiency_pct: f64,
    /// CO₂ emission (mg/Nm³).
    pub co2_mg_nm3: f64,
    /// O₂ flue-gas level (%).
    pub o2_pct: f64,
    /// CO level (ppm).
    pub co_ppm: f64,
    /// NOₓ level (mg/Nm³).
    pub nox_mg_nm3: f64,
    /// Cofiring ratio (%, biomass fraction of total fuel mass).
    pub cofiring_ratio_pct: f64,
}
