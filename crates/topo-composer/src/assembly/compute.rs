//! Per-compute-unit resources
//!
//! Each unit becomes a function, a table grant, a log group, a live alias, an
//! error alarm notifying the shared topic, and a deployment group that rolls
//! back on that alarm.

use super::{ids, AssemblyContext};
use crate::plan::UnitNames;
use topo_types::{
    AlarmMetric, AlarmSpec, AlarmThreshold, AliasSpec, ComputeUnitSpec, DeploymentGroupSpec,
    DeploymentPolicy, FunctionSpec, LogGroupSpec, RemovalPolicy, ResourceDescriptor,
    ResourceKind, TableGrantSpec, LIVE_STAGE,
};

pub fn unit_resources(
    ctx: &AssemblyContext<'_>,
    unit: &ComputeUnitSpec,
    names: &UnitNames,
    policy: &DeploymentPolicy,
) -> Vec<ResourceDescriptor> {
    let id = unit.logical_name.as_str();
    let alias_id = ids::unit_alias(id);
    let alarm_id = ids::unit_alarm(id);

    let function = ResourceDescriptor::new(
        id,
        ResourceKind::Function(
            FunctionSpec::bootstrap(&names.function, unit.code_asset())
                .with_env("SERVICE", &ctx.descriptor.service)
                .with_env("STAGE", &ctx.descriptor.stage)
                .with_env("USER_TABLE_NAME", &ctx.names.users_table),
        ),
    )
    .named(&names.function)
    .depends_on(ids::USERS_TABLE);

    let grant = ResourceDescriptor::new(
        ids::unit_table_grant(id),
        ResourceKind::TableGrant(TableGrantSpec {
            table: ids::USERS_TABLE.to_string(),
            grantee: id.to_string(),
            permission: unit.table_permission,
        }),
    )
    .depends_on(ids::USERS_TABLE)
    .depends_on(id);

    let log_group = ResourceDescriptor::new(
        ids::unit_log_group(id),
        ResourceKind::LogGroup(LogGroupSpec {
            log_group_name: names.log_group.clone(),
            retention: policy.log_retention,
            removal: RemovalPolicy::Destroy,
        }),
    )
    .named(&names.log_group)
    .depends_on(id);

    let alias = ResourceDescriptor::new(
        alias_id.as_str(),
        ResourceKind::Alias(AliasSpec {
            alias_name: LIVE_STAGE.to_string(),
            function: id.to_string(),
        }),
    )
    .depends_on(id);

    let alarm = ResourceDescriptor::new(
        alarm_id.as_str(),
        ResourceKind::Alarm(AlarmSpec {
            alarm_name: Some(names.alarm.clone()),
            description: "The latest deployment errors > 0".to_string(),
            metric: AlarmMetric::FunctionErrors {
                alias: alias_id.clone(),
            },
            threshold: AlarmThreshold {
                threshold: policy.error_alarm_threshold,
                ..AlarmThreshold::errors()
            },
            actions_enabled: true,
            actions: vec![ids::TOPIC.to_string()],
        }),
    )
    .named(&names.alarm)
    .depends_on(alias_id.as_str())
    .depends_on(ids::TOPIC);

    let deployment_group = ResourceDescriptor::new(
        ids::unit_deployment_group(id),
        ResourceKind::DeploymentGroup(DeploymentGroupSpec {
            alias: alias_id.clone(),
            rollout: policy.rollout,
            rollback_alarms: vec![alarm_id.clone()],
        }),
    )
    .depends_on(alias_id.as_str())
    .depends_on(alarm_id.as_str());

    vec![function, grant, log_group, alias, alarm, deployment_group]
}
