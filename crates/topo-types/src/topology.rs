//! Synthesis output
//!
//! A TopologyResult is produced by exactly one synthesis pass and handed to
//! the provisioning backend. Equal descriptors always encode to the same
//! bytes: every map is a BTreeMap and resource order is significant.

use crate::environment::EnvironmentFlags;
use crate::resource::ResourceDescriptor;
use crate::route::RouteBinding;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Content digest of a topology's canonical encoding
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TopologyFingerprint(String);

impl TopologyFingerprint {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TopologyFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Complete, internally consistent resource graph for one stack
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopologyResult {
    pub stack_name: String,
    pub description: String,
    pub account: String,
    pub region: String,
    pub tags: BTreeMap<String, String>,
    pub flags: EnvironmentFlags,
    pub routes: Vec<RouteBinding>,
    pub resources: Vec<ResourceDescriptor>,
}

impl TopologyResult {
    pub fn resource(&self, logical_id: &str) -> Option<&ResourceDescriptor> {
        self.resources.iter().find(|r| r.logical_id == logical_id)
    }

    pub fn contains(&self, logical_id: &str) -> bool {
        self.resource(logical_id).is_some()
    }

    /// Resources whose serialized type tag equals `kind_name`
    pub fn resources_of<'a>(
        &'a self,
        kind_name: &'a str,
    ) -> impl Iterator<Item = &'a ResourceDescriptor> + 'a {
        self.resources
            .iter()
            .filter(move |r| r.kind_name() == kind_name)
    }

    /// Dependency edges as (dependent, dependency) pairs, in emission order
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> {
        self.resources.iter().flat_map(|r| {
            r.depends_on
                .iter()
                .map(move |d| (r.logical_id.as_str(), d.as_str()))
        })
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    /// Compact JSON encoding used for fingerprinting and diffing
    pub fn to_canonical_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn fingerprint(&self) -> Result<TopologyFingerprint, serde_json::Error> {
        let canonical = self.to_canonical_json()?;
        let digest = blake3::hash(canonical.as_bytes());
        Ok(TopologyFingerprint(digest.to_hex().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monitoring::TopicSpec;
    use crate::resource::ResourceKind;

    fn topology(topic_name: &str) -> TopologyResult {
        TopologyResult {
            stack_name: "cf-user-dev-app".into(),
            description: "cf-user dev application stack".into(),
            account: "123456789012".into(),
            region: "eu-west-1".into(),
            tags: BTreeMap::new(),
            flags: EnvironmentFlags::continuous_delivery(),
            routes: Vec::new(),
            resources: vec![
                ResourceDescriptor::new(
                    "SnsTopic",
                    ResourceKind::Topic(TopicSpec {
                        topic_name: topic_name.into(),
                    }),
                ),
                ResourceDescriptor::new(
                    "OtherTopic",
                    ResourceKind::Topic(TopicSpec {
                        topic_name: "other".into(),
                    }),
                )
                .depends_on("SnsTopic"),
            ],
        }
    }

    #[test]
    fn test_lookup_and_edges() {
        let topo = topology("alarm");
        assert!(topo.contains("SnsTopic"));
        assert!(!topo.contains("Missing"));
        assert_eq!(topo.resources_of("topic").count(), 2);
        assert_eq!(topo.edges().collect::<Vec<_>>(), vec![("OtherTopic", "SnsTopic")]);
    }

    #[test]
    fn test_fingerprint_tracks_content() {
        let a = topology("alarm").fingerprint().unwrap();
        let b = topology("alarm").fingerprint().unwrap();
        let c = topology("alarm-2").fingerprint().unwrap();

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.as_str().len(), 64);
    }
}
