//! Users table and its backup plan

use super::{ids, AssemblyContext};
use topo_types::{
    BackupPlanSpec, BackupRule, BackupSelectionSpec, BackupVaultSpec, RemovalPolicy,
    ResourceDescriptor, ResourceKind, TableSpec,
};

pub fn users_table(ctx: &AssemblyContext<'_>) -> ResourceDescriptor {
    ResourceDescriptor::new(
        ids::USERS_TABLE,
        ResourceKind::Table(TableSpec::single_table(&ctx.names.users_table)),
    )
    .named(&ctx.names.users_table)
}

/// Vault, monthly plan and table selection; empty when backups are disabled
pub fn backup_resources(ctx: &AssemblyContext<'_>) -> Vec<ResourceDescriptor> {
    let Some(name) = ctx.names.backup.as_deref() else {
        return Vec::new();
    };

    let vault = ResourceDescriptor::new(
        ids::BACKUP_VAULT,
        ResourceKind::BackupVault(BackupVaultSpec {
            vault_name: name.to_string(),
            removal: RemovalPolicy::Destroy,
        }),
    )
    .named(name);

    let plan = ResourceDescriptor::new(
        ids::BACKUP_PLAN,
        ResourceKind::BackupPlan(BackupPlanSpec {
            plan_name: name.to_string(),
            vault: ids::BACKUP_VAULT.to_string(),
            rules: vec![BackupRule::monthly()],
        }),
    )
    .named(name)
    .depends_on(ids::BACKUP_VAULT);

    let selection = ResourceDescriptor::new(
        ids::BACKUP_SELECTION,
        ResourceKind::BackupSelection(BackupSelectionSpec {
            selection_name: ids::BACKUP_SELECTION.to_string(),
            plan: ids::BACKUP_PLAN.to_string(),
            resources: vec![ids::USERS_TABLE.to_string()],
        }),
    )
    .depends_on(ids::BACKUP_PLAN)
    .depends_on(ids::USERS_TABLE);

    vec![vault, plan, selection]
}
