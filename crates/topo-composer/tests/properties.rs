//! Property tests: synthesis is total over stages and its output is a valid,
//! deterministic provisioning order.

use proptest::prelude::*;
use std::collections::BTreeSet;
use topo_composer::{ids, TopologyComposer};
use topo_policy::Classifier;
use topo_types::{EnvironmentDescriptor, RolloutStrategy, ResourceKind};

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

fn arb_stage() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("rd".to_string()),
        Just("dev".to_string()),
        Just("staging".to_string()),
        Just("prod".to_string()),
        "[a-z][a-z0-9]{0,11}",
    ]
}

fn arb_descriptor() -> impl Strategy<Value = EnvironmentDescriptor> {
    ("[a-z][a-z0-9-]{1,10}", arb_stage(), "[A-Z]{2}").prop_map(|(service, stage, country)| {
        EnvironmentDescriptor::builder()
            .account("123456789012")
            .region("eu-west-1")
            .service(service)
            .stage(stage)
            .authorizer("arn:aws:lambda:eu-west-1:123456789012:function:auth0")
            .notification_endpoint("aws_alarm@classifind.app")
            .country_code(country)
            .build()
            .unwrap()
    })
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn every_descriptor_synthesizes(descriptor in arb_descriptor()) {
        let topology = TopologyComposer::new(descriptor.clone()).synthesize().unwrap();
        let recognized = Classifier::is_recognized(&descriptor.stage);

        prop_assert_eq!(topology.flags.is_continuous_delivery_stage(), recognized);
        prop_assert_eq!(topology.contains(ids::BACKUP_PLAN), recognized);
        prop_assert_eq!(topology.contains(ids::BASE_PATH_MAPPING), recognized);
        prop_assert_eq!(
            topology.contains(ids::TOPIC_SUBSCRIPTION),
            descriptor.stage == "prod"
        );
    }

    #[test]
    fn logical_ids_unique_and_dependencies_resolved(descriptor in arb_descriptor()) {
        let topology = TopologyComposer::new(descriptor).synthesize().unwrap();

        let mut seen = BTreeSet::new();
        for resource in &topology.resources {
            for dependency in &resource.depends_on {
                prop_assert!(
                    seen.contains(dependency.as_str()),
                    "{} depends on {} before it exists",
                    resource.logical_id,
                    dependency
                );
            }
            prop_assert!(seen.insert(resource.logical_id.as_str()));
        }
    }

    #[test]
    fn physical_names_are_distinct_per_kind(descriptor in arb_descriptor()) {
        let topology = TopologyComposer::new(descriptor).synthesize().unwrap();

        let mut names = BTreeSet::new();
        for resource in &topology.resources {
            if let Some(name) = &resource.physical_name {
                prop_assert!(names.insert((resource.kind_name(), name.clone())));
            }
        }
    }

    #[test]
    fn canary_iff_production(descriptor in arb_descriptor()) {
        let topology = TopologyComposer::new(descriptor.clone()).synthesize().unwrap();

        for resource in topology.resources_of("deployment_group") {
            if let ResourceKind::DeploymentGroup(group) = &resource.kind {
                prop_assert_eq!(
                    group.rollout == RolloutStrategy::Canary10Percent10Minutes,
                    descriptor.stage == "prod"
                );
            }
        }
    }

    #[test]
    fn fingerprint_is_stable(descriptor in arb_descriptor()) {
        let composer = TopologyComposer::new(descriptor);
        let first = composer.synthesize().unwrap();
        let second = composer.synthesize().unwrap();

        prop_assert_eq!(first.fingerprint().unwrap(), second.fingerprint().unwrap());
        prop_assert_eq!(first, second);
    }
}
