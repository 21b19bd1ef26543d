//! Route bindings and API path handling
//!
//! Path-parameter segments such as `{userId}` are opaque placeholders; they
//! are forwarded verbatim and never validated at this layer.

use crate::compute::HttpMethod;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Normalized API path, always rooted at `/`
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApiPath(String);

impl ApiPath {
    /// Normalize a path: leading slash, no trailing or repeated slashes
    pub fn new(path: &str) -> Self {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        Self(format!("/{}", segments.join("/")))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('/').filter(|s| !s.is_empty())
    }

    pub fn is_root(&self) -> bool {
        self.0 == "/"
    }

    /// Last segment, `None` for the root
    pub fn path_part(&self) -> Option<&str> {
        self.segments().last()
    }

    /// Every proper ancestor from the first segment down, root excluded
    pub fn ancestors(&self) -> Vec<ApiPath> {
        let segments: Vec<&str> = self.segments().collect();
        (1..segments.len())
            .map(|n| ApiPath(format!("/{}", segments[..n].join("/"))))
            .collect()
    }

    pub fn parent(&self) -> Option<ApiPath> {
        self.ancestors().pop()
    }

    /// Names of `{placeholder}` segments
    pub fn parameters(&self) -> Vec<&str> {
        self.segments()
            .filter_map(|s| s.strip_prefix('{').and_then(|s| s.strip_suffix('}')))
            .collect()
    }
}

impl fmt::Display for ApiPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identity of a route: one compute unit per key
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RouteKey {
    pub path: ApiPath,
    pub method: HttpMethod,
}

impl fmt::Display for RouteKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.path)
    }
}

/// HTTP method + path bound to a compute unit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteBinding {
    pub method: HttpMethod,
    pub path: ApiPath,
    /// Logical name of the target compute unit
    pub target: String,
}

impl RouteBinding {
    pub fn key(&self) -> RouteKey {
        RouteKey {
            path: self.path.clone(),
            method: self.method,
        }
    }
}
