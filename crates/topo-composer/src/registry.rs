//! Per-synthesis registry of physical names
//!
//! Names are unique per resource kind: the API, the backup vault and the
//! backup plan all carry the stack name without colliding.

use crate::error::{ComposerError, Result};
use std::collections::BTreeMap;

/// (kind, physical name) -> logical id that claimed it
#[derive(Debug, Clone, Default)]
pub struct NameRegistry {
    claims: BTreeMap<(&'static str, String), String>,
}

impl NameRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim `name` for `owner`; fails if a resource of the same kind holds it
    pub fn claim(&mut self, kind: &'static str, name: &str, owner: &str) -> Result<()> {
        let key = (kind, name.to_string());
        if let Some(existing) = self.claims.get(&key) {
            return Err(ComposerError::DuplicateResourceName {
                name: name.to_string(),
                existing: existing.clone(),
                conflicting: owner.to_string(),
            });
        }
        self.claims.insert(key, owner.to_string());
        Ok(())
    }

    pub fn owner(&self, kind: &'static str, name: &str) -> Option<&str> {
        self.claims
            .get(&(kind, name.to_string()))
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.claims.len()
    }

    pub fn is_empty(&self) -> bool {
        self.claims.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_claim_fails() {
        let mut registry = NameRegistry::new();
        registry.claim("topic", "svc-dev-app-alarm", "SnsTopic").unwrap();

        let err = registry
            .claim("topic", "svc-dev-app-alarm", "OtherTopic")
            .unwrap_err();
        assert_eq!(
            err,
            ComposerError::DuplicateResourceName {
                name: "svc-dev-app-alarm".into(),
                existing: "SnsTopic".into(),
                conflicting: "OtherTopic".into(),
            }
        );
        assert_eq!(registry.owner("topic", "svc-dev-app-alarm"), Some("SnsTopic"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_same_name_different_kind() {
        let mut registry = NameRegistry::new();
        registry.claim("rest_api", "svc-dev-app", "ApiGateway").unwrap();
        registry.claim("backup_vault", "svc-dev-app", "BackupVault").unwrap();
        assert_eq!(registry.len(), 2);
    }
}
