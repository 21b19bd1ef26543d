//! Compute unit specifications and their provisioned shape
//!
//! A ComputeUnitSpec is declared statically, one per logical operation. The
//! composer expands each into a function, a live alias, a log group, a table
//! grant, an error alarm and a deployment group.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

/// HTTP verbs accepted by the route table
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Access a compute unit needs on the users table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TablePermission {
    Full,
    ReadOnly,
}

/// One request-handling unit bound to a single route
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComputeUnitSpec {
    /// Logical name, e.g. "CreateUser"
    pub logical_name: String,

    /// Build artifact directory, e.g. "create-user"
    pub artifact: String,

    /// API path served by this unit
    pub resource_path: String,

    /// HTTP verb served by this unit
    pub http_method: HttpMethod,

    /// Required access to the users table
    pub table_permission: TablePermission,
}

impl ComputeUnitSpec {
    pub fn new(
        logical_name: impl Into<String>,
        artifact: impl Into<String>,
        http_method: HttpMethod,
        resource_path: impl Into<String>,
        table_permission: TablePermission,
    ) -> Self {
        Self {
            logical_name: logical_name.into(),
            artifact: artifact.into(),
            resource_path: resource_path.into(),
            http_method,
            table_permission,
        }
    }

    /// Location of the packaged handler relative to the repository root
    pub fn code_asset(&self) -> String {
        format!("./dist/{}/bootstrap.zip", self.artifact)
    }
}

/// CPU architecture of a function
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Architecture {
    Arm64,
    X86_64,
}

/// Provisioned function
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionSpec {
    pub function_name: String,
    pub code_asset: String,
    pub handler: String,
    pub runtime: String,
    pub architecture: Architecture,
    #[serde(with = "crate::duration_secs")]
    pub timeout: Duration,
    pub memory_mb: u32,
    pub tracing: bool,
    pub environment: BTreeMap<String, String>,
    /// Published versions outlive stack updates
    pub retain_versions: bool,
}

impl FunctionSpec {
    /// Custom-runtime function with the stack's standard sizing
    pub fn bootstrap(function_name: impl Into<String>, code_asset: impl Into<String>) -> Self {
        Self {
            function_name: function_name.into(),
            code_asset: code_asset.into(),
            handler: "bootstrap".to_string(),
            runtime: "provided.al2".to_string(),
            architecture: Architecture::Arm64,
            timeout: Duration::from_secs(30),
            memory_mb: 1024,
            tracing: true,
            environment: BTreeMap::new(),
            retain_versions: true,
        }
    }

    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.environment.insert(key.into(), value.into());
        self
    }
}

/// Live alias pointing at the current function version
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasSpec {
    pub alias_name: String,
    /// Logical id of the function
    pub function: String,
}

/// Access grant of a compute unit on a table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableGrantSpec {
    /// Logical id of the table
    pub table: String,
    /// Logical id of the function receiving the grant
    pub grantee: String,
    pub permission: TablePermission,
}
