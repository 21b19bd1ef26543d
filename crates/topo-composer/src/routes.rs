//! Route table builder
//!
//! Binds each compute unit to its (path, method) pair and derives the API
//! resource hierarchy the bindings need.

use crate::error::{ComposerError, Result};
use std::collections::BTreeMap;
use topo_types::{ApiPath, ComputeUnitSpec, RouteBinding, RouteKey};
use tracing::debug;

/// Bind every unit to its route; a (path, method) pair may be claimed once
pub fn build_routes(units: &[ComputeUnitSpec]) -> Result<Vec<RouteBinding>> {
    let mut claimed: BTreeMap<RouteKey, &str> = BTreeMap::new();
    let mut bindings = Vec::with_capacity(units.len());

    for unit in units {
        let binding = RouteBinding {
            method: unit.http_method,
            path: ApiPath::new(&unit.resource_path),
            target: unit.logical_name.clone(),
        };
        let key = binding.key();

        if let Some(existing) = claimed.get(&key) {
            return Err(ComposerError::DuplicateRouteBinding {
                key,
                existing: existing.to_string(),
                conflicting: unit.logical_name.clone(),
            });
        }

        debug!(route = %key, target = %unit.logical_name, "Route bound");
        claimed.insert(key, &unit.logical_name);
        bindings.push(binding);
    }

    Ok(bindings)
}

/// Distinct non-root resource paths, parents before children, in first-use order
pub fn resource_paths(bindings: &[RouteBinding]) -> Vec<ApiPath> {
    let mut paths: Vec<ApiPath> = Vec::new();

    for binding in bindings {
        let mut chain = binding.path.ancestors();
        if !binding.path.is_root() {
            chain.push(binding.path.clone());
        }
        for path in chain {
            if !paths.contains(&path) {
                paths.push(path);
            }
        }
    }

    paths
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::user_compute_units;
    use topo_types::{HttpMethod, TablePermission};

    #[test]
    fn test_user_routes() {
        let bindings = build_routes(&user_compute_units()).unwrap();
        let keys: Vec<String> = bindings.iter().map(|b| b.key().to_string()).collect();
        assert_eq!(
            keys,
            vec![
                "POST /v1/users",
                "PUT /v1/users/{userId}",
                "DELETE /v1/users/{userId}",
                "GET /v1/users/{userId}",
            ]
        );
    }

    #[test]
    fn test_colliding_unit_rejected() {
        let mut units = user_compute_units();
        units.push(ComputeUnitSpec::new(
            "ReplaceUser",
            "replace-user",
            HttpMethod::Put,
            "/v1/users/{userId}/",
            TablePermission::Full,
        ));

        match build_routes(&units).unwrap_err() {
            ComposerError::DuplicateRouteBinding {
                key,
                existing,
                conflicting,
            } => {
                assert_eq!(key.to_string(), "PUT /v1/users/{userId}");
                assert_eq!(existing, "UpdateUser");
                assert_eq!(conflicting, "ReplaceUser");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_same_path_different_method_allowed() {
        let mut units = user_compute_units();
        units.push(ComputeUnitSpec::new(
            "ListUsers",
            "list-users",
            HttpMethod::Get,
            "/v1/users",
            TablePermission::ReadOnly,
        ));
        assert_eq!(build_routes(&units).unwrap().len(), 5);
    }

    #[test]
    fn test_resource_paths_parent_first() {
        let bindings = build_routes(&user_compute_units()).unwrap();
        let paths: Vec<String> = resource_paths(&bindings)
            .iter()
            .map(|p| p.to_string())
            .collect();
        assert_eq!(paths, vec!["/v1", "/v1/users", "/v1/users/{userId}"]);
    }
}
