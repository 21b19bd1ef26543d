//! Per-compute-unit deployment policy

use crate::classifier::PRODUCTION_STAGE;
use topo_types::{
    ComputeUnitSpec, DeploymentPolicy, EnvironmentFlags, LogRetention, RolloutStrategy,
    ERROR_ALARM_THRESHOLD,
};

/// Operational settings for `unit` in the classified environment
///
/// Rollout follows the production-like flag; log retention follows the literal
/// production stage name. Every unit currently shares the same settings.
pub fn policy_for(_unit: &ComputeUnitSpec, flags: EnvironmentFlags, stage: &str) -> DeploymentPolicy {
    let rollout = if flags.is_production_like() {
        RolloutStrategy::Canary10Percent10Minutes
    } else {
        RolloutStrategy::AllAtOnce
    };

    DeploymentPolicy {
        rollout,
        log_retention: log_retention(stage),
        error_alarm_threshold: ERROR_ALARM_THRESHOLD,
    }
}

/// One year for the production stage, one week everywhere else
pub fn log_retention(stage: &str) -> LogRetention {
    if stage == PRODUCTION_STAGE {
        LogRetention::OneYear
    } else {
        LogRetention::OneWeek
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::classify;
    use topo_types::{HttpMethod, TablePermission};

    fn unit() -> ComputeUnitSpec {
        ComputeUnitSpec::new(
            "CreateUser",
            "create-user",
            HttpMethod::Post,
            "/v1/users",
            TablePermission::Full,
        )
    }

    #[test]
    fn test_prod_gets_canary_and_long_retention() {
        let policy = policy_for(&unit(), classify("prod"), "prod");
        assert_eq!(policy.rollout, RolloutStrategy::Canary10Percent10Minutes);
        assert_eq!(policy.log_retention, LogRetention::OneYear);
        assert_eq!(policy.error_alarm_threshold, 5);
    }

    #[test]
    fn test_retention_matches_literal_stage() {
        assert_eq!(log_retention("prod"), LogRetention::OneYear);
        assert_eq!(log_retention("Prod"), LogRetention::OneWeek);
        assert_eq!(log_retention("staging"), LogRetention::OneWeek);
    }

    #[test]
    fn test_non_prod_stages_cut_over_immediately() {
        for stage in ["rd", "dev", "staging", "local", ""] {
            let policy = policy_for(&unit(), classify(stage), stage);
            assert_eq!(policy.rollout, RolloutStrategy::AllAtOnce, "stage {stage}");
            assert_eq!(policy.log_retention, LogRetention::OneWeek, "stage {stage}");
            assert_eq!(policy.error_alarm_threshold, 5, "stage {stage}");
        }
    }
}
