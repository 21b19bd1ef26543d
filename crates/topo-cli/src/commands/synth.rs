//! Topology synthesis command

use super::DescriptorArgs;
use crate::config::CliConfig;
use crate::error::CliResult;
use crate::output::{self, print_success, OutputFormat};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tabled::Tabled;
use topo_types::{ResourceDescriptor, TopologyResult};
use tracing::info;

/// Table row for resource display
#[derive(Debug, Serialize, Tabled)]
pub struct ResourceRow {
    /// Logical id
    id: String,
    /// Resource type
    #[tabled(rename = "type")]
    kind: String,
    /// Provider-visible name
    name: String,
    /// Dependencies
    depends_on: String,
}

impl From<&ResourceDescriptor> for ResourceRow {
    fn from(resource: &ResourceDescriptor) -> Self {
        Self {
            id: resource.logical_id.clone(),
            kind: resource.kind_name().to_string(),
            name: resource.physical_name.clone().unwrap_or_else(|| "-".into()),
            depends_on: resource.depends_on.join(", "),
        }
    }
}

/// Execute the synth command
pub fn execute(
    args: &DescriptorArgs,
    config: &CliConfig,
    out: Option<PathBuf>,
    format: OutputFormat,
) -> CliResult<()> {
    let topology = args.composer(config)?.synthesize()?;
    info!(stack = %topology.stack_name, resources = topology.len(), "Synthesized");

    match out {
        Some(path) => {
            let encoded = encode(&topology, &path, format)?;
            std::fs::write(&path, encoded)?;
            print_success(&format!(
                "Wrote {} resources of {} to {}",
                topology.len(),
                topology.stack_name,
                path.display()
            ));
            Ok(())
        }
        None if format == OutputFormat::Table => {
            let rows: Vec<ResourceRow> = topology.resources.iter().map(ResourceRow::from).collect();
            output::print_output(rows, format)
        }
        None => output::print_single(&topology, format),
    }
}

/// The file extension decides the encoding; without one, JSON unless YAML was requested
fn encode(topology: &TopologyResult, path: &Path, format: OutputFormat) -> CliResult<String> {
    let encoding = match output::file_format(path)? {
        Some(encoding) => encoding,
        None if format == OutputFormat::Yaml => OutputFormat::Yaml,
        None => OutputFormat::Json,
    };
    output::render(topology, encoding)
}
