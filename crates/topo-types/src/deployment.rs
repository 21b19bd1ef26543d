//! Per-unit deployment policy types

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// How a new compute-unit version receives traffic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RolloutStrategy {
    /// Immediate full cutover
    AllAtOnce,

    /// Shift 10% of traffic, bake for 10 minutes, then cut over
    Canary10Percent10Minutes,
}

impl RolloutStrategy {
    /// Share of traffic sent to the new version before full cutover
    pub fn initial_traffic_percent(&self) -> u32 {
        match self {
            RolloutStrategy::AllAtOnce => 100,
            RolloutStrategy::Canary10Percent10Minutes => 10,
        }
    }

    /// Observation period before full cutover
    pub fn bake_time(&self) -> Duration {
        match self {
            RolloutStrategy::AllAtOnce => Duration::ZERO,
            RolloutStrategy::Canary10Percent10Minutes => Duration::from_secs(10 * 60),
        }
    }

    pub fn is_canary(&self) -> bool {
        matches!(self, RolloutStrategy::Canary10Percent10Minutes)
    }
}

/// Log retention classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogRetention {
    OneWeek,
    OneYear,
}

impl LogRetention {
    pub fn days(&self) -> u32 {
        match self {
            LogRetention::OneWeek => 7,
            LogRetention::OneYear => 365,
        }
    }
}

/// Operational settings of a single compute unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentPolicy {
    pub rollout: RolloutStrategy,
    pub log_retention: LogRetention,
    /// Error count per evaluation window that fires the unit's alarm
    pub error_alarm_threshold: u32,
}

/// Traffic-shifting group for a unit's live alias
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentGroupSpec {
    /// Logical id of the alias being shifted
    pub alias: String,
    pub rollout: RolloutStrategy,
    /// Logical ids of alarms that roll the deployment back
    pub rollback_alarms: Vec<String>,
}
