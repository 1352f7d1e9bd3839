//! ---
//! bcms_section: "07-fixtures"
//! bcms_subsection: "module"
//! bcms_type: "source"
//! bcms_scope: "code"
//! bcms_description: "Seed alarm fixtures for the operator view."
//! bcms_version: "v0.1.0"
//! bcms_owner: "tbd"
//! ---
use serde::{Deserialize, Serialize};

const MINUTE_MS: i64 = 60_000;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AlarmSeverity {
    Info,
    Warning,
    Critical,
}

/// A fixture alarm entry. There is no rule engine behind these; the seed set
/// is the whole population.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Alarm {
    pub id: String,
    /// Epoch milliseconds (UTC).
    pub timestamp: i64,
    pub severity: AlarmSeverity,
    pub message: String,
    pub parameter: String,
    pub value: String,
    pub acknowledged: bool,
}

/// Seed alarms with timestamps placed relative to `now_ms`.
pub fn seed_alarms(now_ms: i64) -> Vec<Alarm> {
    vec![
        Alarm {
            id: "alarm-1".to_owned(),
            timestamp: now_ms - 5 * MINUTE_MS,
            severity: AlarmSeverity::Warning,
            message: "CO2 emission approaching upper limit".to_owned(),
            parameter: "CO2".to_owned(),
            value: "825 mg/Nm3".to_owned(),
            acknowledged: false,
        },
        Alarm {
            id: "alarm-2".to_owned(),
            timestamp: now_ms - 15 * MINUTE_MS,
            severity: AlarmSeverity::Info,
            message: "Cofiring ratio optimized at 5%".to_owned(),
            parameter: "Cofiring Ratio".to_owned(),
            value: "5.0%".to_owned(),
            acknowledged: true,
        },
        Alarm {
            id: "alarm-3".to_owned(),
            timestamp: now_ms - 45 * MINUTE_MS,
            severity: AlarmSeverity::Warning,
            message: "O2 level slightly high".to_owned(),
            parameter: "O2 Flue Gas".to_owned(),
            value: "3.48%".to_owned(),
            acknowledged: true,
        },
        Alarm {
            id: "alarm-4".to_owned(),
            timestamp: now_ms - 90 * MINUTE_MS,
            severity: AlarmSeverity::Info,
            message: "Load unit stable at 400 MW".to_owned(),
            parameter: "Unit Load".to_owned(),
            value: "400.1 MW".to_owned(),
            acknowledged: true,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_set_is_newest_first() {
        let alarms = seed_alarms(10_000_000);
        assert_eq!(alarms.len(), 4);
        assert!(alarms.windows(2).all(|w| w[0].timestamp > w[1].timestamp));
    }

    #[test]
    fn only_the_live_co2_alarm_is_unacknowledged() {
        let alarms = seed_alarms(0);
        let open: Vec<_> = alarms.iter().filter(|a| !a.acknowledged).collect();
        assert_eq!(open.len(), 1);
        assert_eq!(open[0].parameter, "CO2");
        assert_eq!(open[0].severity, AlarmSeverity::Warning);
    }

    #[test]
    fn severity_serialises_lowercase() {
        assert_eq!(
            serde_json::to_string(&AlarmSeverity::Critical).unwrap(),
            "\"critical\""
        );
    }
}
