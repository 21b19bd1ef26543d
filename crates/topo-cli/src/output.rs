//! Output formatting utilities

use crate::error::{CliError, CliResult};
use colored::*;
use serde::Serialize;
use std::path::Path;
use tabled::{Table, Tabled};

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// YAML format
    Yaml,
}

/// Encode a value as JSON or YAML; tables fall back to JSON
pub fn render<T: Serialize + ?Sized>(data: &T, format: OutputFormat) -> CliResult<String> {
    match format {
        OutputFormat::Table | OutputFormat::Json => Ok(serde_json::to_string_pretty(data)?),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(data)?),
    }
}

/// Encoding implied by a topology file's extension, `None` when it has none
pub fn file_format(path: &Path) -> CliResult<Option<OutputFormat>> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("yaml") | Some("yml") => Ok(Some(OutputFormat::Yaml)),
        Some("json") => Ok(Some(OutputFormat::Json)),
        Some(other) => Err(CliError::InvalidInput(format!(
            "unsupported topology file extension .{other}"
        ))),
        None => Ok(None),
    }
}

/// Print a list of rows in the specified format
pub fn print_output<T: Serialize + Tabled>(data: Vec<T>, format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Table => {
            if data.is_empty() {
                println!("{}", "No results".dimmed());
            } else {
                println!("{}", Table::new(data));
            }
        }
        OutputFormat::Json | OutputFormat::Yaml => println!("{}", render(&data, format)?),
    }
    Ok(())
}

/// Print a single item in the specified format
pub fn print_single<T: Serialize>(data: &T, format: OutputFormat) -> CliResult<()> {
    println!("{}", render(data, format)?);
    Ok(())
}

/// Print a success message to stderr
pub fn print_success(message: &str) {
    eprintln!("{} {}", "✓".green(), message);
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red(), message);
}

/// Print an info message to stderr
pub fn print_info(message: &str) {
    eprintln!("{} {}", "ℹ".blue(), message);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_default() {
        assert_eq!(OutputFormat::default(), OutputFormat::Table);
    }

    #[test]
    fn test_render_formats() {
        let value = serde_json::json!({ "stage": "dev" });
        assert!(render(&value, OutputFormat::Json).unwrap().contains("\"stage\": \"dev\""));
        assert_eq!(render(&value, OutputFormat::Yaml).unwrap(), "stage: dev\n");
    }

    #[test]
    fn test_file_format_follows_extension() {
        assert_eq!(file_format(Path::new("t.yml")).unwrap(), Some(OutputFormat::Yaml));
        assert_eq!(file_format(Path::new("t.yaml")).unwrap(), Some(OutputFormat::Yaml));
        assert_eq!(file_format(Path::new("t.json")).unwrap(), Some(OutputFormat::Json));
        assert_eq!(file_format(Path::new("topology")).unwrap(), None);
        assert!(matches!(
            file_format(Path::new("t.toml")),
            Err(CliError::InvalidInput(_))
        ));
    }
}
