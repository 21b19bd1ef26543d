//! Resource assembly
//!
//! Turns the outputs of the earlier phases into ordered resource descriptors.
//! A descriptor may only depend on descriptors pushed before it, so emission
//! order is always a valid provisioning order.

mod compute;
mod gateway;
mod notifications;
mod storage;

pub use compute::unit_resources;
pub use gateway::{base_path_mapping, gateway_core, gateway_routes};
pub use notifications::{alarm_subscription, alarm_topic};
pub use storage::{backup_resources, users_table};

use crate::error::{ComposerError, Result};
use crate::plan::NamePlan;
use std::collections::BTreeSet;
use topo_types::{EnvironmentDescriptor, EnvironmentFlags, ResourceDescriptor};

/// Logical ids of the stack-level resources
pub mod ids {
    pub const TOPIC: &str = "SnsTopic";
    pub const TOPIC_SUBSCRIPTION: &str = "SnsTopicSubscription";
    pub const USERS_TABLE: &str = "UserTable";
    pub const BACKUP_VAULT: &str = "BackupVault";
    pub const BACKUP_PLAN: &str = "BackupPlan";
    pub const BACKUP_SELECTION: &str = "BackupPlanSelection";
    pub const AUTHORIZER: &str = "Auth0Authorizer";
    pub const ACCESS_LOGS: &str = "AccessLogsLogGroup";
    pub const API: &str = "ApiGateway";
    pub const API_ERRORS: &str = "ApiErrors";
    pub const BASE_PATH_MAPPING: &str = "BasePathMapping";

    pub fn unit_log_group(unit: &str) -> String {
        format!("{unit}LogGroup")
    }

    pub fn unit_alias(unit: &str) -> String {
        format!("{unit}Alias")
    }

    pub fn unit_alarm(unit: &str) -> String {
        format!("{unit}Errors")
    }

    pub fn unit_deployment_group(unit: &str) -> String {
        format!("{unit}DeploymentGroup")
    }

    pub fn unit_table_grant(unit: &str) -> String {
        format!("{unit}TableGrant")
    }
}

/// Read-only inputs shared by every assembly step
#[derive(Debug, Clone, Copy)]
pub struct AssemblyContext<'a> {
    pub descriptor: &'a EnvironmentDescriptor,
    pub flags: EnvironmentFlags,
    pub names: &'a NamePlan,
}

/// Ordered descriptor list with logical-id and dependency checks
#[derive(Debug, Default)]
pub struct Assembly {
    resources: Vec<ResourceDescriptor>,
    logical_ids: BTreeSet<String>,
}

impl Assembly {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, resource: ResourceDescriptor) -> Result<()> {
        if self.logical_ids.contains(&resource.logical_id) {
            return Err(ComposerError::DuplicateLogicalId(resource.logical_id));
        }

        if let Some(missing) = resource
            .depends_on
            .iter()
            .find(|d| !self.logical_ids.contains(*d))
        {
            return Err(ComposerError::DanglingDependency {
                resource: resource.logical_id.clone(),
                dependency: missing.clone(),
            });
        }

        self.logical_ids.insert(resource.logical_id.clone());
        self.resources.push(resource);
        Ok(())
    }

    pub fn extend(&mut self, resources: impl IntoIterator<Item = ResourceDescriptor>) -> Result<()> {
        for resource in resources {
            self.push(resource)?;
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    pub fn into_resources(self) -> Vec<ResourceDescriptor> {
        self.resources
    }
}
