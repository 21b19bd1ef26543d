//! Conditional resources as a predicate table
//!
//! Adding or removing an optional resource set is a change to
//! [`FEATURE_TABLE`], not to the composer's control flow.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use topo_types::EnvironmentFlags;

/// Optional resource sets
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConditionalFeature {
    /// Vault, monthly plan and table selection
    BackupPlan,

    /// Human notification endpoint on the alarm topic
    AlarmSubscription,

    /// Custom domain base-path mapping
    DomainMapping,
}

/// Predicate over environment flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureCondition {
    Always,
    ContinuousDelivery,
    ProductionLike,
}

impl FeatureCondition {
    pub fn holds(&self, flags: EnvironmentFlags) -> bool {
        match self {
            FeatureCondition::Always => true,
            FeatureCondition::ContinuousDelivery => flags.is_continuous_delivery_stage(),
            FeatureCondition::ProductionLike => flags.is_production_like(),
        }
    }
}

pub const FEATURE_TABLE: &[(ConditionalFeature, FeatureCondition)] = &[
    (
        ConditionalFeature::BackupPlan,
        FeatureCondition::ContinuousDelivery,
    ),
    (
        ConditionalFeature::AlarmSubscription,
        FeatureCondition::ProductionLike,
    ),
    (
        ConditionalFeature::DomainMapping,
        FeatureCondition::ContinuousDelivery,
    ),
];

/// Features whose condition holds for `flags`
pub fn enabled_features(flags: EnvironmentFlags) -> BTreeSet<ConditionalFeature> {
    FEATURE_TABLE
        .iter()
        .filter(|(_, condition)| condition.holds(flags))
        .map(|(feature, _)| *feature)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::classify;

    #[test]
    fn test_prod_enables_everything() {
        let features = enabled_features(classify("prod"));
        assert_eq!(features.len(), 3);
    }

    #[test]
    fn test_dev_gets_backup_without_subscription() {
        let features = enabled_features(classify("dev"));
        assert!(features.contains(&ConditionalFeature::BackupPlan));
        assert!(features.contains(&ConditionalFeature::DomainMapping));
        assert!(!features.contains(&ConditionalFeature::AlarmSubscription));
    }

    #[test]
    fn test_local_gets_nothing() {
        assert!(enabled_features(classify("local")).is_empty());
    }

    #[test]
    fn test_every_feature_listed_once() {
        let listed: BTreeSet<_> = FEATURE_TABLE.iter().map(|(f, _)| *f).collect();
        assert_eq!(listed.len(), FEATURE_TABLE.len());
    }
}
