//! Topology Types - Core types for deployment topology composition
//!
//! The user service stack is described as a deterministic graph of resource
//! descriptors. This crate holds the vocabulary shared by the policy layer,
//! the composer and the operator CLI.
//!
//! ## Architectural Boundaries
//!
//! - **topo-types** owns: the data model (descriptors, flags, specs, resources)
//! - **topo-policy** owns: stage classification, naming, per-unit deployment policy
//! - **topo-composer** owns: route table construction and synthesis of the full graph
//! - The provisioning backend owns: turning descriptors into real infrastructure
//!
//! ## Key Concepts
//!
//! - **EnvironmentDescriptor**: Immutable synthesis input (account, region, stage, ...)
//! - **EnvironmentFlags**: Policy flags derived once from the stage
//! - **ComputeUnitSpec**: One request-handling unit per logical operation
//! - **RouteBinding**: HTTP method + path bound to exactly one compute unit
//! - **DeploymentPolicy**: Rollout, log retention and alarm threshold per unit
//! - **TopologyResult**: Ordered resource descriptors plus dependency edges

#![deny(unsafe_code)]
#![cfg_attr(feature = "strict-docs", warn(missing_docs))]
#![cfg_attr(not(feature = "strict-docs"), allow(missing_docs))]

pub mod api;
pub mod backup;
pub mod compute;
pub mod deployment;
pub mod environment;
pub mod monitoring;
pub mod resource;
pub mod route;
pub mod storage;
pub mod topology;

mod duration_secs;

// Re-export main types
pub use api::{
    AllowList, ApiMethodSpec, ApiResourceSpec, AuthorizerSpec, BasePathMappingSpec, CorsPolicy,
    EndpointType, GatewayResponse, GatewayResponseType, RestApiSpec, LIVE_STAGE,
};
pub use backup::{BackupPlanSpec, BackupRule, BackupSelectionSpec, BackupVaultSpec};
pub use compute::{
    AliasSpec, Architecture, ComputeUnitSpec, FunctionSpec, HttpMethod, TableGrantSpec,
    TablePermission,
};
pub use deployment::{DeploymentGroupSpec, DeploymentPolicy, LogRetention, RolloutStrategy};
pub use environment::{
    AuthorizerRef, DescriptorError, EnvironmentDescriptor, EnvironmentDescriptorBuilder,
    EnvironmentFlags,
};
pub use monitoring::{
    AlarmMetric, AlarmSpec, AlarmThreshold, ComparisonOperator, LogGroupSpec, Statistic,
    SubscriptionProtocol, SubscriptionSpec, TopicSpec, ERROR_ALARM_THRESHOLD,
};
pub use resource::{RemovalPolicy, ResourceDescriptor, ResourceKind};
pub use route::{ApiPath, RouteBinding, RouteKey};
pub use storage::{
    AttributeType, BillingMode, GlobalIndex, KeyAttribute, StreamView, TableEncryption, TableSpec,
};
pub use topology::{TopologyFingerprint, TopologyResult};
