//! Resource-level comparison of two topologies

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use topo_types::{ResourceDescriptor, TopologyResult};

/// Logical ids that differ between two topologies
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopologyDiff {
    /// Present only in the current topology, in current order
    pub added: Vec<String>,

    /// Present only in the previous topology, in previous order
    pub removed: Vec<String>,

    /// Present in both with a different descriptor, in current order
    pub changed: Vec<String>,
}

impl TopologyDiff {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.changed.is_empty()
    }

    pub fn len(&self) -> usize {
        self.added.len() + self.removed.len() + self.changed.len()
    }
}

fn by_id(topology: &TopologyResult) -> BTreeMap<&str, &ResourceDescriptor> {
    topology
        .resources
        .iter()
        .map(|r| (r.logical_id.as_str(), r))
        .collect()
}

pub fn diff(previous: &TopologyResult, current: &TopologyResult) -> TopologyDiff {
    let before = by_id(previous);
    let after = by_id(current);

    let mut result = TopologyDiff::default();

    for resource in &current.resources {
        match before.get(resource.logical_id.as_str()) {
            None => result.added.push(resource.logical_id.clone()),
            Some(old) if *old != resource => result.changed.push(resource.logical_id.clone()),
            Some(_) => {}
        }
    }

    result.removed = previous
        .resources
        .iter()
        .filter(|r| !after.contains_key(r.logical_id.as_str()))
        .map(|r| r.logical_id.clone())
        .collect();

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use topo_types::{EnvironmentFlags, ResourceKind, TopicSpec};

    fn topic(id: &str, name: &str) -> ResourceDescriptor {
        ResourceDescriptor::new(
            id,
            ResourceKind::Topic(TopicSpec {
                topic_name: name.to_string(),
            }),
        )
    }

    fn topology(resources: Vec<ResourceDescriptor>) -> TopologyResult {
        TopologyResult {
            stack_name: "cf-user-dev-app".into(),
            description: "cf-user dev".into(),
            account: "123456789012".into(),
            region: "eu-west-1".into(),
            tags: BTreeMap::new(),
            flags: EnvironmentFlags::continuous_delivery(),
            routes: Vec::new(),
            resources,
        }
    }

    #[test]
    fn test_identical_topologies() {
        let a = topology(vec![topic("A", "a"), topic("B", "b")]);
        assert!(diff(&a, &a.clone()).is_empty());
    }

    #[test]
    fn test_added_removed_changed() {
        let previous = topology(vec![topic("A", "a"), topic("B", "b"), topic("C", "c")]);
        let current = topology(vec![topic("D", "d"), topic("B", "b2"), topic("A", "a")]);

        let changes = diff(&previous, &current);
        assert_eq!(changes.added, vec!["D"]);
        assert_eq!(changes.removed, vec!["C"]);
        assert_eq!(changes.changed, vec!["B"]);
        assert_eq!(changes.len(), 3);
    }
}
