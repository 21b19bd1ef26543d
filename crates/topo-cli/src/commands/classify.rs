//! Stage classification command

use crate::config::CliConfig;
use crate::error::CliResult;
use crate::output::{self, OutputFormat};
use serde::Serialize;
use tabled::Tabled;
use topo_policy::{domain_host, enabled_features, log_retention, Classifier};

/// Everything the policy layer derives from a stage
#[derive(Debug, Serialize, Tabled)]
pub struct StageRow {
    stage: String,
    production_like: bool,
    continuous_delivery: bool,
    rollout: String,
    log_retention_days: u32,
    features: String,
    domain: String,
}

/// Execute the classify command
pub fn execute(stage: &str, config: &CliConfig, format: OutputFormat) -> CliResult<()> {
    let flags = Classifier::new(config.stage_mode).classify(stage)?;
    let rollout = if flags.is_production_like() {
        "canary 10% / 10 min"
    } else {
        "all at once"
    };
    let features: Vec<String> = enabled_features(flags)
        .iter()
        .map(|f| format!("{f:?}"))
        .collect();

    let row = StageRow {
        stage: stage.to_string(),
        production_like: flags.is_production_like(),
        continuous_delivery: flags.is_continuous_delivery_stage(),
        rollout: rollout.to_string(),
        log_retention_days: log_retention(stage).days(),
        features: features.join(", "),
        domain: domain_host(stage, flags, &config.base_domain).unwrap_or_else(|| "-".into()),
    };

    output::print_output(vec![row], format)
}
