//! Resource naming
//!
//! Every physical name is derived from `(service, stage, logical)`. Within a
//! single `(service, stage)` pair distinct logical names always yield distinct
//! names. Across pairs no such guarantee holds: `("a-b", "c")` and
//! `("a", "b-c")` share every name, and the composer only ever sees one pair.

/// `{service}-{stage}-{logical}`
pub fn name(service: &str, stage: &str, logical: &str) -> String {
    format!("{service}-{stage}-{logical}")
}

/// Naming policy bound to one deployment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamingPolicy {
    service: String,
    stage: String,
    stack_name: String,
}

impl NamingPolicy {
    /// Logical name of the application stack itself
    pub const STACK_LOGICAL_NAME: &'static str = "app";

    pub fn new(service: impl Into<String>, stage: impl Into<String>) -> Self {
        let service = service.into();
        let stage = stage.into();
        let stack_name = name(&service, &stage, Self::STACK_LOGICAL_NAME);
        Self {
            service,
            stage,
            stack_name,
        }
    }

    pub fn service(&self) -> &str {
        &self.service
    }

    pub fn stage(&self) -> &str {
        &self.stage
    }

    /// `{service}-{stage}-app`
    pub fn stack_name(&self) -> &str {
        &self.stack_name
    }

    pub fn stack_description(&self) -> String {
        format!("{} {} application stack", self.service, self.stage)
    }

    /// Cross-cutting resource: `{stack}-{suffix}`
    pub fn resource(&self, suffix: &str) -> String {
        format!("{}-{}", self.stack_name, suffix)
    }

    pub fn alarm_topic(&self) -> String {
        self.resource("alarm")
    }

    pub fn users_table(&self) -> String {
        self.resource("user")
    }

    pub fn function(&self, logical_name: &str) -> String {
        self.resource(logical_name)
    }

    pub fn function_alarm(&self, logical_name: &str) -> String {
        format!("{}-errors", self.function(logical_name))
    }

    pub fn function_log_group(&self, logical_name: &str) -> String {
        format!("/aws/lambda/{}", self.function(logical_name))
    }

    pub fn access_log_group(&self) -> String {
        format!("/aws/api-gateway/{}", self.stack_name)
    }
}
