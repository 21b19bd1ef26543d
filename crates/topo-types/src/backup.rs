//! Backup vault, plan and selection descriptors

use crate::resource::RemovalPolicy;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackupVaultSpec {
    pub vault_name: String,
    pub removal: RemovalPolicy,
}

/// Schedule and lifecycle of recovery points
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackupRule {
    pub schedule_expression: String,
    #[serde(with = "crate::duration_secs")]
    pub start_window: Duration,
    #[serde(with = "crate::duration_secs")]
    pub completion_window: Duration,
    pub move_to_cold_storage_after_days: u32,
    pub delete_after_days: u32,
}

impl BackupRule {
    /// Midnight on the first of every month
    pub fn monthly() -> Self {
        Self {
            schedule_expression: "cron(0 0 1 * ? *)".to_string(),
            start_window: Duration::from_secs(60 * 60),
            completion_window: Duration::from_secs(3 * 60 * 60),
            move_to_cold_storage_after_days: 30,
            delete_after_days: 365,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackupPlanSpec {
    pub plan_name: String,
    /// Logical id of the vault
    pub vault: String,
    pub rules: Vec<BackupRule>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackupSelectionSpec {
    pub selection_name: String,
    /// Logical id of the plan
    pub plan: String,
    /// Logical ids of the protected resources
    pub resources: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monthly_rule() {
        let rule = BackupRule::monthly();
        assert_eq!(rule.start_window, Duration::from_secs(3600));
        assert_eq!(rule.completion_window, Duration::from_secs(3 * 3600));
        assert_eq!(rule.move_to_cold_storage_after_days, 30);
        assert_eq!(rule.delete_after_days, 365);
        assert!(rule.delete_after_days > rule.move_to_cold_storage_after_days);
    }
}
