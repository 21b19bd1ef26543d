//! CLI error types

use thiserror::Error;
use topo_composer::ComposerError;
use topo_policy::PolicyError;
use topo_types::DescriptorError;

/// CLI error types
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Environment descriptor is incomplete
    #[error(transparent)]
    Descriptor(#[from] DescriptorError),

    /// Stage rejected by the classifier
    #[error(transparent)]
    Policy(#[from] PolicyError),

    /// Synthesis failed
    #[error("Synthesis failed: {0}")]
    Composer(#[from] ComposerError),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;
