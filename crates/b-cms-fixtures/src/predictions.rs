//! ---
//! bcms_section: "07-fixtures"
//! bcms_subsection: "module"
//! bcms_type: "source"
//! bcms_scope: "code"
//! bcms_description: "Static model recommendation table."
//! bcms_version: "v0.1.0"
//! bcms_owner: "tbd"
//! ---
use serde::{Deserialize, Serialize};

/// Offline models whose study results back the recommendation view.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PredictionModel {
    #[serde(rename = "ANN")]
    Ann,
    #[serde(rename = "RSM")]
    Rsm,
    #[serde(rename = "LightGBM")]
    LightGbm,
}

impl std::fmt::Display for PredictionModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            PredictionModel::Ann => "ANN",
            PredictionModel::Rsm => "RSM",
            PredictionModel::LightGbm => "LightGBM",
        })
    }
}

/// One row of the recommendation table. Values are study output committed as
/// a fixture; there is no inference at runtime.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ModelPrediction {
    pub model: PredictionModel,
    pub accuracy_pct: f64,
    pub predicted_efficiency_pct: f64,
    /// Recommended cofiring ratio; capped at the 5 % ceiling.
    pub optimal_cofiring_ratio_pct: f64,
    pub predicted_co2_mg_nm3: f64,
    pub recommended_steam_temp_c: f64,
    pub recommended_o2_pct: f64,
    pub confidence: f64,
}

/// The committed recommendation table, one entry per model.
pub fn model_predictions() -> Vec<ModelPrediction> {
    vec![
        ModelPrediction {
            model: PredictionModel::Ann,
            accuracy_pct: 94.5,
            predicted_efficiency_pct: 88.8,
            optimal_cofiring_ratio_pct: 5.0,
            predicted_co2_mg_nm3: 752.0,
            recommended_steam_temp_c: 538.7,
            recommended_o2_pct: 3.44,
            confidence: 0.92,
        },
        ModelPrediction {
            model: PredictionModel::Rsm,
            accuracy_pct: 91.8,
            predicted_efficiency_pct: 88.3,
            optimal_cofiring_ratio_pct: 4.8,
            predicted_co2_mg_nm3: 765.0,
            recommended_steam_temp_c: 538.4,
            recommended_o2_pct: 3.46,
            confidence: 0.89,
        },
        ModelPrediction {
            model: PredictionModel::LightGbm,
            accuracy_pct: 95.2,
            predicted_efficiency_pct: 89.2,
            optimal_cofiring_ratio_pct: 5.0,
            predicted_co2_mg_nm3: 745.0,
            recommended_steam_temp_c: 538.9,
            recommended_o2_pct: 3.43,
            confidence: 0.94,
        },
    ]
}
