//! ---
//! bcms_section: "02-telemetry-core"
//! bcms_subsection: "module"
//! bcms_type: "source"
//! bcms_scope: "code"
//! bcms_description: "KPI reduction and status classification."
//! bcms_version: "v0.1.0"
//! bcms_owner: "tbd"
//! ---
use serde::{Deserialize, Serialize};

use crate::sample::BoilerSample;

/// Efficiency below this is a warning (%).
pub const WARNING_EFFICIENCY_PCT: f64 = 86.0;
/// CO₂ above this is a warning (mg/Nm³).
pub const WARNING_CO2_MG_NM3: f64 = 820.0;
/// Efficiency below this is critical (%).
pub const CRITICAL_EFFICIENCY_PCT: f64 = 84.0;
/// CO₂ above this is critical (mg/Nm³).
pub const CRITICAL_CO2_MG_NM3: f64 = 860.0;

/// Health classification derived from efficiency and CO₂ only.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum KpiStatus {
    Optimal,
    Warning,
    Critical,
}

impl KpiStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            KpiStatus::Optimal => "optimal",
            KpiStatus::Warning => "warning",
            KpiStatus::Critical => "critical",
        }
    }
}

impl std::fmt::Display for KpiStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a sample's health from its efficiency and CO₂ emission.
///
/// Rules fire in order and later rules override earlier ones, so a sample
/// can move straight from optimal to critical without the warning band ever
/// applying.
pub fn classify(efficiency_pct: f64, co2_mg_nm3: f64) -> KpiStatus {
    let mut status = KpiStatus::Optimal;
    if efficiency_pct < WARNING_EFFICIENCY_PCT || co2_mg_nm3 > WARNING_CO2_MG_NM3 {
        status = KpiStatus::Warning;
    }
    if efficiency_pct < CRITICAL_EFFICIENCY_PCT || co2_mg_nm3 > CRITICAL_CO2_MG_NM3 {
        status = KpiStatus::Critical;
    }
    status
}

/// Reduced telemetry view used for status display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiSnapshot {
    pub steam_temp_c: f64,
    pub drum_pressure_bar: f64,
    pub efficiency_pct: f64,
    pub co2_mg_nm3: f64,
    pub cofiring_ratio_pct: f64,
    pub load_mw: f64,
    pub status: KpiStatus,
}

impl KpiSnapshot {
    /// Reduce a full sample to the KPI subset and classify it.
    pub fn from_sample(sample: &BoilerSample) -> Self {
        Self {
            steam_temp_c: sample.steam_temp_c,
            drum_pressure_bar: sample.drum_pressure_bar,
            efficiency_pct: sample.efficiency_pct,
            co2_mg_nm3: sample.co2_mg_nm3,
            cofiring_ratio_pct: sample.cofiring_ratio_pct,
            load_mw: sample.load_mw,
            status: classify(sample.efficiency_pct, sample.co2_mg_nm3),
        }
    }
}
