//! Topology diff command

use super::DescriptorArgs;
use crate::config::CliConfig;
use crate::error::CliResult;
use crate::output::{self, print_info, OutputFormat};
use serde::Serialize;
use std::path::Path;
use tabled::Tabled;
use topo_composer::{diff, TopologyDiff};
use topo_types::TopologyResult;

/// Table row for one changed resource
#[derive(Debug, Serialize, Tabled)]
pub struct ChangeRow {
    change: String,
    id: String,
}

fn rows(changes: &TopologyDiff) -> Vec<ChangeRow> {
    let tagged = |change: &'static str, ids: &[String]| {
        ids.iter()
            .map(|id| ChangeRow {
                change: change.to_string(),
                id: id.clone(),
            })
            .collect::<Vec<_>>()
    };

    let mut rows = tagged("added", &changes.added);
    rows.extend(tagged("removed", &changes.removed));
    rows.extend(tagged("changed", &changes.changed));
    rows
}

/// Read a topology previously written by `topo synth`
pub fn load_topology(path: &Path) -> CliResult<TopologyResult> {
    let format = output::file_format(path)?;
    let contents = std::fs::read_to_string(path)?;
    match format {
        Some(OutputFormat::Yaml) => Ok(serde_yaml::from_str(&contents)?),
        Some(_) => Ok(serde_json::from_str(&contents)?),
        // Extensionless files are JSON unless written with `-o yaml`
        None => match serde_json::from_str(&contents) {
            Ok(topology) => Ok(topology),
            Err(_) => Ok(serde_yaml::from_str(&contents)?),
        },
    }
}

/// Execute the diff command
pub fn execute(
    args: &DescriptorArgs,
    config: &CliConfig,
    previous: &Path,
    format: OutputFormat,
) -> CliResult<()> {
    let previous = load_topology(previous)?;
    let current = args.composer(config)?.synthesize()?;
    let changes = diff(&previous, &current);

    match format {
        OutputFormat::Table if changes.is_empty() => {
            print_info("No changes");
            Ok(())
        }
        OutputFormat::Table => output::print_output(rows(&changes), format),
        OutputFormat::Json | OutputFormat::Yaml => output::print_single(&changes, format),
    }
}
