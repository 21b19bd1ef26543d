//! Route table command

use crate::error::CliResult;
use crate::output::{self, OutputFormat};
use serde::Serialize;
use tabled::Tabled;
use topo_composer::{build_routes, user_compute_units};
use topo_types::RouteBinding;

/// Table row for route display
#[derive(Debug, Serialize, Tabled)]
pub struct RouteRow {
    method: String,
    path: String,
    target: String,
}

impl From<RouteBinding> for RouteRow {
    fn from(binding: RouteBinding) -> Self {
        Self {
            method: binding.method.to_string(),
            path: binding.path.to_string(),
            target: binding.target,
        }
    }
}

/// Execute the routes command
pub fn execute(format: OutputFormat) -> CliResult<()> {
    let rows: Vec<RouteRow> = build_routes(&user_compute_units())?
        .into_iter()
        .map(RouteRow::from)
        .collect();
    output::print_output(rows, format)
}
