//! Naming phase: every physical name of the deployment, claimed up front

use crate::error::Result;
use crate::registry::NameRegistry;
use std::collections::BTreeSet;
use topo_policy::{ConditionalFeature, NamingPolicy};
use topo_types::ComputeUnitSpec;

/// Names of the resources derived from one compute unit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitNames {
    pub logical_name: String,
    pub function: String,
    pub log_group: String,
    pub alarm: String,
}

/// All physical names of one synthesis pass
#[derive(Debug, Clone)]
pub struct NamePlan {
    pub naming: NamingPolicy,
    pub alarm_topic: String,
    pub users_table: String,
    pub access_log_group: String,
    pub api: String,
    pub backup: Option<String>,
    pub units: Vec<UnitNames>,
    registry: NameRegistry,
}

impl NamePlan {
    pub fn build(
        naming: NamingPolicy,
        units: &[ComputeUnitSpec],
        features: &BTreeSet<ConditionalFeature>,
    ) -> Result<Self> {
        let mut registry = NameRegistry::new();

        let alarm_topic = naming.alarm_topic();
        registry.claim("topic", &alarm_topic, "SnsTopic")?;

        let users_table = naming.users_table();
        registry.claim("table", &users_table, "UserTable")?;

        let access_log_group = naming.access_log_group();
        registry.claim("log_group", &access_log_group, "AccessLogsLogGroup")?;

        let api = naming.stack_name().to_string();
        registry.claim("rest_api", &api, "ApiGateway")?;

        let backup = if features.contains(&ConditionalFeature::BackupPlan) {
            let name = naming.stack_name().to_string();
            registry.claim("backup_vault", &name, "BackupVault")?;
            registry.claim("backup_plan", &name, "BackupPlan")?;
            Some(name)
        } else {
            None
        };

        let mut unit_names = Vec::with_capacity(units.len());
        for unit in units {
            let logical = unit.logical_name.as_str();
            let names = UnitNames {
                logical_name: unit.logical_name.clone(),
                function: naming.function(logical),
                log_group: naming.function_log_group(logical),
                alarm: naming.function_alarm(logical),
            };
            registry.claim("function", &names.function, logical)?;
            registry.claim("log_group", &names.log_group, logical)?;
            registry.claim("alarm", &names.alarm, logical)?;
            unit_names.push(names);
        }

        Ok(Self {
            naming,
            alarm_topic,
            users_table,
            access_log_group,
            api,
            backup,
            units: unit_names,
            registry,
        })
    }

    pub fn unit(&self, logical_name: &str) -> Option<&UnitNames> {
        self.units.iter().find(|u| u.logical_name == logical_name)
    }

    pub fn registry(&self) -> &NameRegistry {
        &self.registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::user_compute_units;
    use crate::error::ComposerError;
    use topo_policy::{classify, enabled_features};

    #[test]
    fn test_dev_plan() {
        let features = enabled_features(classify("dev"));
        let plan = NamePlan::build(
            NamingPolicy::new("cf-user", "dev"),
            &user_compute_units(),
            &features,
        )
        .unwrap();

        assert_eq!(plan.alarm_topic, "cf-user-dev-app-alarm");
        assert_eq!(plan.users_table, "cf-user-dev-app-user");
        assert_eq!(plan.backup.as_deref(), Some("cf-user-dev-app"));
        assert_eq!(
            plan.unit("GetUser").map(|u| u.function.as_str()),
            Some("cf-user-dev-app-GetUser")
        );
        // topic, table, access logs, api, vault, plan + 3 per unit
        assert_eq!(plan.registry().len(), 6 + 3 * 4);
    }

    #[test]
    fn test_duplicate_unit_name_rejected() {
        let mut units = user_compute_units();
        units.push(units[0].clone());

        let err = NamePlan::build(
            NamingPolicy::new("cf-user", "local"),
            &units,
            &BTreeSet::new(),
        )
        .unwrap_err();

        assert!(matches!(
            err,
            ComposerError::DuplicateResourceName { ref name, .. } if name == "cf-user-local-app-CreateUser"
        ));
    }
}
