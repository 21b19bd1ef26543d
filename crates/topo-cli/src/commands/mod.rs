//! CLI command implementations

pub mod classify;
pub mod diff;
pub mod fingerprint;
pub mod routes;
pub mod synth;

use crate::config::CliConfig;
use crate::error::CliResult;
use clap::Args;
use topo_composer::TopologyComposer;
use topo_types::{AuthorizerRef, EnvironmentDescriptor};
use tracing::debug;

/// Environment descriptor inputs, read from flags or the process environment
#[derive(Debug, Clone, Default, Args)]
pub struct DescriptorArgs {
    /// Target cloud account
    #[arg(long, env = "CDK_DEFAULT_ACCOUNT", global = true)]
    pub account: Option<String>,

    /// Target region
    #[arg(long, env = "CDK_DEFAULT_REGION", global = true)]
    pub region: Option<String>,

    /// Service name
    #[arg(long, env = "SERVICE", global = true)]
    pub service: Option<String>,

    /// Deployment stage
    #[arg(long, env = "STAGE", global = true)]
    pub stage: Option<String>,

    /// Reference to the externally managed authorizer function
    #[arg(long, env = "AUTHORIZER_FUNCTION_ARN", global = true)]
    pub authorizer: Option<String>,

    /// ISO 3166 country code tagged on the stack
    #[arg(long, env = "ISO_3166_CODE", global = true)]
    pub country_code: Option<String>,

    /// Alarm notification endpoint, overriding the configured one
    #[arg(long, global = true)]
    pub notification_endpoint: Option<String>,
}

impl DescriptorArgs {
    /// Assemble and validate the descriptor; any absent field is an error
    pub fn descriptor(&self, config: &CliConfig) -> CliResult<EnvironmentDescriptor> {
        let field = |value: &Option<String>| value.clone().unwrap_or_default();

        let descriptor = EnvironmentDescriptor {
            account: field(&self.account),
            region: field(&self.region),
            service: field(&self.service),
            stage: field(&self.stage),
            authorizer: AuthorizerRef::new(field(&self.authorizer)),
            notification_endpoint: self
                .notification_endpoint
                .clone()
                .unwrap_or_else(|| config.notification_endpoint.clone()),
            country_code: field(&self.country_code),
        };

        descriptor.validate()?;
        debug!(service = %descriptor.service, stage = %descriptor.stage, "Descriptor loaded");
        Ok(descriptor)
    }

    pub fn composer(&self, config: &CliConfig) -> CliResult<TopologyComposer> {
        Ok(TopologyComposer::new(self.descriptor(config)?).with_settings(config.composer_settings()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use topo_types::DescriptorError;
    use crate::error::CliError;

    fn complete() -> DescriptorArgs {
        DescriptorArgs {
            account: Some("123456789012".into()),
            region: Some("eu-west-1".into()),
            service: Some("cf-user".into()),
            stage: Some("dev".into()),
            authorizer: Some("arn:aws:lambda:eu-west-1:123456789012:function:auth0".into()),
            country_code: Some("GB".into()),
            notification_endpoint: None,
        }
    }

    #[test]
    fn test_notification_endpoint_falls_back_to_config() {
        let descriptor = complete().descriptor(&CliConfig::default()).unwrap();
        assert_eq!(descriptor.notification_endpoint, "aws_alarm@classifind.app");

        let args = DescriptorArgs {
            notification_endpoint: Some("https://hooks.example.org/alarms".into()),
            ..complete()
        };
        let descriptor = args.descriptor(&CliConfig::default()).unwrap();
        assert_eq!(descriptor.notification_endpoint, "https://hooks.example.org/alarms");
    }

    #[test]
    fn test_first_missing_field_is_reported() {
        let args = DescriptorArgs {
            region: None,
            country_code: None,
            ..complete()
        };

        match args.descriptor(&CliConfig::default()) {
            Err(CliError::Descriptor(DescriptorError::MissingConfiguration { field })) => {
                assert_eq!(field, "region")
            }
            other => panic!("unexpected result {other:?}"),
        }
    }
}
