//! Resource descriptors
//!
//! Every provisioned unit is emitted as a ResourceDescriptor: a stable logical
//! id, an optional physical name, a typed payload and the logical ids it
//! depends on. The provisioning backend materializes descriptors in order.

use crate::api::{
    ApiMethodSpec, ApiResourceSpec, AuthorizerSpec, BasePathMappingSpec, RestApiSpec,
};
use crate::backup::{BackupPlanSpec, BackupSelectionSpec, BackupVaultSpec};
use crate::compute::{AliasSpec, FunctionSpec, TableGrantSpec};
use crate::deployment::DeploymentGroupSpec;
use crate::monitoring::{AlarmSpec, LogGroupSpec, SubscriptionSpec, TopicSpec};
use crate::storage::TableSpec;
use serde::{Deserialize, Serialize};

/// What happens to the underlying resource when it leaves the stack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemovalPolicy {
    Destroy,
    Retain,
}

/// Typed payload of a descriptor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ResourceKind {
    Topic(TopicSpec),
    TopicSubscription(SubscriptionSpec),
    Table(TableSpec),
    BackupVault(BackupVaultSpec),
    BackupPlan(BackupPlanSpec),
    BackupSelection(BackupSelectionSpec),
    Authorizer(AuthorizerSpec),
    LogGroup(LogGroupSpec),
    RestApi(RestApiSpec),
    ApiResource(ApiResourceSpec),
    ApiMethod(ApiMethodSpec),
    Function(FunctionSpec),
    TableGrant(TableGrantSpec),
    Alias(AliasSpec),
    Alarm(AlarmSpec),
    DeploymentGroup(DeploymentGroupSpec),
    BasePathMapping(BasePathMappingSpec),
}

impl ResourceKind {
    /// Short type tag, matching the serialized `type` field
    pub fn kind_name(&self) -> &'static str {
        match self {
            ResourceKind::Topic(_) => "topic",
            ResourceKind::TopicSubscription(_) => "topic_subscription",
            ResourceKind::Table(_) => "table",
            ResourceKind::BackupVault(_) => "backup_vault",
            ResourceKind::BackupPlan(_) => "backup_plan",
            ResourceKind::BackupSelection(_) => "backup_selection",
            ResourceKind::Authorizer(_) => "authorizer",
            ResourceKind::LogGroup(_) => "log_group",
            ResourceKind::RestApi(_) => "rest_api",
            ResourceKind::ApiResource(_) => "api_resource",
            ResourceKind::ApiMethod(_) => "api_method",
            ResourceKind::Function(_) => "function",
            ResourceKind::TableGrant(_) => "table_grant",
            ResourceKind::Alias(_) => "alias",
            ResourceKind::Alarm(_) => "alarm",
            ResourceKind::DeploymentGroup(_) => "deployment_group",
            ResourceKind::BasePathMapping(_) => "base_path_mapping",
        }
    }
}

/// One node of the topology graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceDescriptor {
    /// Stable identifier within the stack
    pub logical_id: String,

    /// Provider-visible name, when the resource has one
    pub physical_name: Option<String>,

    #[serde(flatten)]
    pub kind: ResourceKind,

    /// Logical ids that must exist before this resource
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub depends_on: Vec<String>,
}

impl ResourceDescriptor {
    pub fn new(logical_id: impl Into<String>, kind: ResourceKind) -> Self {
        Self {
            logical_id: logical_id.into(),
            physical_name: None,
            kind,
            depends_on: Vec::new(),
        }
    }

    pub fn named(mut self, physical_name: impl Into<String>) -> Self {
        self.physical_name = Some(physical_name.into());
        self
    }

    pub fn depends_on(mut self, logical_id: impl Into<String>) -> Self {
        let id = logical_id.into();
        if !self.depends_on.contains(&id) {
            self.depends_on.push(id);
        }
        self
    }

    pub fn kind_name(&self) -> &'static str {
        self.kind.kind_name()
    }
}
