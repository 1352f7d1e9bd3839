//! ---
//! bcms_section: "07-fixtures"
//! bcms_subsection: "module"
//! bcms_type: "source"
//! bcms_scope: "code"
//! bcms_description: "Operator log fixtures and the capped log book."
//! bcms_version: "v0.1.0"
//! bcms_owner: "tbd"
//! ---
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

const MINUTE_MS: f64 = 60_000.0;

/// Entries retained by a [`LogBook`], newest first.
pub const LOG_CAP: usize = 50;

/// Probability that a poll tick appends an automatic entry.
const APPEND_PROBABILITY: f64 = 0.3;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogStatus {
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OperatorLogEntry {
    pub id: String,
    /// Epoch milliseconds (UTC).
    pub timestamp: i64,
    pub user: String,
    pub action: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_value: Option<String>,
    pub status: LogStatus,
}

struct SeedAction {
    action: &'static str,
    parameter: &'static str,
    old_value: Option<&'static str>,
    new_value: Option<&'static str>,
    status: LogStatus,
}

const SEED_ACTIONS: &[SeedAction] = &[
    SeedAction {
        action: "Adjusted coal flow",
        parameter: "coal_flow_tph",
        old_value: Some("360.2"),
        new_value: Some("360.5"),
        status: LogStatus::Success,
    },
    SeedAction {
        action: "Optimized O2 level",
        parameter: "o2_pct",
        old_value: Some("3.48"),
        new_value: Some("3.45"),
        status: LogStatus::Success,
    },
    SeedAction {
        action: "Updated excess air",
        parameter: "excess_air_pct",
        old_value: Some("22.3"),
        new_value: Some("22.6"),
        status: LogStatus::Success,
    },
    SeedAction {
        action: "Reset alarm",
        parameter: "alarm",
        old_value: None,
        new_value: None,
        status: LogStatus::Warning,
    },
    SeedAction {
        action: "Adjusted primary air",
        parameter: "primary_air_tph",
        old_value: Some("210.9"),
        new_value: Some("211.5"),
        status: LogStatus::Success,
    },
    SeedAction {
        action: "Steam temp stabilization",
        parameter: "steam_temp_c",
        old_value: Some("538.2"),
        new_value: Some("538.6"),
        status: LogStatus::Success,
    },
];

/// Automatic actions the system appends while polling.
const AUTO_ACTIONS: &[&str] = &[
    "Auto adjustment applied",
    "Setpoint updated",
    "Parameter optimized",
    "Alarm acknowledged",
];

/// Seed log entries with randomised recent timestamps, newest first.
pub fn seed_logs<R: Rng>(now_ms: i64, rng: &mut R) -> Vec<OperatorLogEntry> {
    SEED_ACTIONS
        .iter()
        .enumerate()
        .map(|(index, seed)| OperatorLogEntry {
            id: format!("log-{index}"),
            timestamp: now_ms
                - (index as f64 * rng.gen_range(0.0..120.0) * MINUTE_MS) as i64,
            user: if rng.gen_bool(0.5) {
                "Operator A".to_owned()
            } else {
                "Operator B".to_owned()
            },
            action: seed.action.to_owned(),
            parameter: Some(seed.parameter.to_owned()),
            old_value: seed.old_value.map(str::to_owned),
            new_value: seed.new_value.map(str::to_owned),
            status: seed.status,
        })
        .collect()
}

/// Capped operator log, newest first. Seeded from the fixture table and
/// extended by canned automatic entries while the daemon polls.
#[derive(Debug)]
pub struct LogBook {
    entries: Vec<OperatorLogEntry>,
    rng: StdRng,
}

impl LogBook {
    /// Deterministic book for reproducible output.
    pub fn seeded(seed: u64, now_ms: i64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let entries = seed_logs(now_ms, &mut rng);
        Self { entries, rng }
    }

    /// Book drawing from OS entropy.
    pub fn from_entropy(now_ms: i64) -> Self {
        let mut rng = StdRng::from_entropy();
        let entries = seed_logs(now_ms, &mut rng);
        Self { entries, rng }
    }

    /// Entries, newest first.
    pub fn entries(&self) -> &[OperatorLogEntry] {
        &self.entries
    }

    /// Possibly append an automatic entry for this poll tick. Roughly one
    /// tick in three produces one.
    pub fn maybe_append_auto(&mut self, now_ms: i64, auto_mode: bool) -> Option<&OperatorLogEntry> {
        if !self.rng.gen_bool(APPEND_PROBABILITY) {
            return None;
        }
        let action = AUTO_ACTIONS[self.rng.gen_range(0..AUTO_ACTIONS.len())];
        let user = if auto_mode { "System (Auto)" } else { "Operator" };
        self.insert(OperatorLogEntry {
            id: Uuid::new_v4().to_string(),
            timestamp: now_ms,
            user: user.to_owned(),
            action: action.to_owned(),
            parameter: None,
            old_value: None,
            new_value: None,
            status: LogStatus::Success,
        });
        self.entries.first()
    }

    /// Record a manual operator action, e.g. a control-panel apply.
    pub fn record_manual(&mut self, now_ms: i64, user: &str, action: &str) {
        self.insert(OperatorLogEntry {
            id: Uuid::new_v4().to_string(),
            timestamp: now_ms,
            user: user.to_owned(),
            action: action.to_owned(),
            parameter: None,
            old_value: None,
            new_value: None,
            status: LogStatus::Success,
        });
    }

    fn insert(&mut self, entry: OperatorLogEntry) {
        self.entries.insert(0, entry);
        self.entries.truncate(LOG_CAP);
    }
}
