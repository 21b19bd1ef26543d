//! Environment descriptor and derived policy flags
//!
//! An EnvironmentDescriptor is the only input to synthesis. It is built once,
//! validated before any resource is described, and never mutated afterwards.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque handle to a pre-existing authorization compute unit
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthorizerRef(String);

impl AuthorizerRef {
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AuthorizerRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Immutable synthesis input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentDescriptor {
    /// Target account identifier
    pub account: String,

    /// Target region identifier
    pub region: String,

    /// Service name, first component of every resource name
    pub service: String,

    /// Deployment stage (e.g. "dev", "staging", "prod")
    pub stage: String,

    /// Handle to the token authorizer compute unit
    pub authorizer: AuthorizerRef,

    /// Address subscribed to the alarm topic in production-like stages
    pub notification_endpoint: String,

    /// ISO 3166 country code
    pub country_code: String,
}

impl EnvironmentDescriptor {
    pub fn builder() -> EnvironmentDescriptorBuilder {
        EnvironmentDescriptorBuilder::default()
    }

    /// Re-check every required field; blank values count as absent.
    pub fn validate(&self) -> Result<(), DescriptorError> {
        let fields = [
            ("account", self.account.as_str()),
            ("region", self.region.as_str()),
            ("service", self.service.as_str()),
            ("stage", self.stage.as_str()),
            ("authorizer_reference", self.authorizer.as_str()),
            ("notification_endpoint", self.notification_endpoint.as_str()),
            ("country_code", self.country_code.as_str()),
        ];

        for (field, value) in fields {
            if value.trim().is_empty() {
                return Err(DescriptorError::MissingConfiguration { field });
            }
        }

        Ok(())
    }
}

/// Builder that fails closed on any absent field
#[derive(Debug, Clone, Default)]
pub struct EnvironmentDescriptorBuilder {
    account: Option<String>,
    region: Option<String>,
    service: Option<String>,
    stage: Option<String>,
    authorizer: Option<String>,
    notification_endpoint: Option<String>,
    country_code: Option<String>,
}

impl EnvironmentDescriptorBuilder {
    pub fn account(mut self, account: impl Into<String>) -> Self {
        self.account = Some(account.into());
        self
    }

    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    pub fn service(mut self, service: impl Into<String>) -> Self {
        self.service = Some(service.into());
        self
    }

    pub fn stage(mut self, stage: impl Into<String>) -> Self {
        self.stage = Some(stage.into());
        self
    }

    pub fn authorizer(mut self, reference: impl Into<String>) -> Self {
        self.authorizer = Some(reference.into());
        self
    }

    pub fn notification_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.notification_endpoint = Some(endpoint.into());
        self
    }

    pub fn country_code(mut self, code: impl Into<String>) -> Self {
        self.country_code = Some(code.into());
        self
    }

    /// Build the descriptor, reporting the first missing field in declaration order
    pub fn build(self) -> Result<EnvironmentDescriptor, DescriptorError> {
        fn required(
            value: Option<String>,
            field: &'static str,
        ) -> Result<String, DescriptorError> {
            match value {
                Some(v) if !v.trim().is_empty() => Ok(v),
                _ => Err(DescriptorError::MissingConfiguration { field }),
            }
        }

        Ok(EnvironmentDescriptor {
            account: required(self.account, "account")?,
            region: required(self.region, "region")?,
            service: required(self.service, "service")?,
            stage: required(self.stage, "stage")?,
            authorizer: AuthorizerRef::new(required(self.authorizer, "authorizer_reference")?),
            notification_endpoint: required(
                self.notification_endpoint,
                "notification_endpoint",
            )?,
            country_code: required(self.country_code, "country_code")?,
        })
    }
}

/// Policy flags derived from the stage
///
/// Production-like stages are always continuous-delivery stages. The
/// constructors are the only way to obtain a value, so the implication holds
/// for every instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EnvironmentFlags {
    is_production_like: bool,
    is_continuous_delivery_stage: bool,
}

impl EnvironmentFlags {
    /// Production: canary rollout, human alarm notification, backups, domain
    pub const fn production() -> Self {
        Self {
            is_production_like: true,
            is_continuous_delivery_stage: true,
        }
    }

    /// Pipeline-managed stage that is not production
    pub const fn continuous_delivery() -> Self {
        Self {
            is_production_like: false,
            is_continuous_delivery_stage: true,
        }
    }

    /// Local or otherwise unmanaged stage
    pub const fn local() -> Self {
        Self {
            is_production_like: false,
            is_continuous_delivery_stage: false,
        }
    }

    pub const fn is_production_like(&self) -> bool {
        self.is_production_like
    }

    pub const fn is_continuous_delivery_stage(&self) -> bool {
        self.is_continuous_delivery_stage
    }
}

/// Descriptor validation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DescriptorError {
    #[error("Missing required configuration: {field}")]
    MissingConfiguration { field: &'static str },
}
