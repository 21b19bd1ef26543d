//! Configuration for the topo CLI

use crate::error::CliResult;
use serde::{Deserialize, Serialize};
use topo_composer::ComposerSettings;
use topo_policy::{StageMode, DEFAULT_BASE_DOMAIN};

/// Default recipient of alarm notifications
pub const DEFAULT_NOTIFICATION_ENDPOINT: &str = "aws_alarm@classifind.app";

/// Main CLI configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Domain under which stage hosts are mounted
    #[serde(default = "default_base_domain")]
    pub base_domain: String,

    /// Endpoint subscribed to production alarms
    #[serde(default = "default_notification_endpoint")]
    pub notification_endpoint: String,

    /// Handling of unrecognized stage names
    #[serde(default)]
    pub stage_mode: StageMode,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            base_domain: default_base_domain(),
            notification_endpoint: default_notification_endpoint(),
            stage_mode: StageMode::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter used when RUST_LOG is unset
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON log lines
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

fn default_base_domain() -> String {
    DEFAULT_BASE_DOMAIN.to_string()
}

fn default_notification_endpoint() -> String {
    DEFAULT_NOTIFICATION_ENDPOINT.to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl CliConfig {
    /// Load configuration: defaults, then the optional file, then `TOPO_*` variables
    pub fn load(path: Option<&str>) -> CliResult<Self> {
        let mut builder = config::Config::builder();

        builder = builder.add_source(config::Config::try_from(&CliConfig::default())?);

        if let Some(path) = path {
            builder = builder.add_source(config::File::with_name(path).required(true));
        }

        // `__` separates nesting so single underscores stay inside field names
        builder = builder.add_source(
            config::Environment::with_prefix("TOPO")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        Ok(builder.build()?.try_deserialize()?)
    }

    pub fn composer_settings(&self) -> ComposerSettings {
        ComposerSettings {
            base_domain: self.base_domain.clone(),
            stage_mode: self.stage_mode,
        }
    }
}
