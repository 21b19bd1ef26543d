//! Topology composer
//!
//! Drives one synthesis pass through its phases:
//!
//! 1. validate the descriptor and classify the stage
//! 2. claim every physical name
//! 3. build the route table
//! 4. compute a deployment policy per compute unit
//! 5. assemble the ordered resource graph
//!
//! A pass either reaches `Done` with a complete [`TopologyResult`] or stops in
//! `Failed` with nothing emitted.

use crate::assembly::{
    alarm_subscription, alarm_topic, backup_resources, base_path_mapping, gateway_core,
    gateway_routes, unit_resources, users_table, Assembly, AssemblyContext,
};
use crate::catalog::user_compute_units;
use crate::error::{ComposerError, Result};
use crate::phase::{PhaseTracker, SynthesisPhase};
use crate::plan::NamePlan;
use crate::routes::{build_routes, resource_paths};
use std::collections::BTreeMap;
use topo_policy::{
    domain_host, enabled_features, policy_for, Classifier, ConditionalFeature, NamingPolicy,
    StageMode, DEFAULT_BASE_DOMAIN,
};
use topo_types::{
    ComputeUnitSpec, DeploymentPolicy, EnvironmentDescriptor, TopologyResult,
};
use tracing::{debug, info, instrument, warn};

/// Knobs that are not part of the environment descriptor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposerSettings {
    /// Domain under which stage hosts are mounted
    pub base_domain: String,

    /// Handling of stage names outside the continuous-delivery allow-list
    pub stage_mode: StageMode,
}

impl Default for ComposerSettings {
    fn default() -> Self {
        Self {
            base_domain: DEFAULT_BASE_DOMAIN.to_string(),
            stage_mode: StageMode::default(),
        }
    }
}

/// Outcome of one synthesis pass, including the phases it went through
#[derive(Debug)]
pub struct SynthesisRun {
    tracker: PhaseTracker,
    outcome: Result<TopologyResult>,
}

impl SynthesisRun {
    /// Terminal phase: `Done` or `Failed`
    pub fn phase(&self) -> SynthesisPhase {
        self.tracker.current()
    }

    pub fn trail(&self) -> &[SynthesisPhase] {
        self.tracker.trail()
    }

    pub fn failed_in(&self) -> Option<SynthesisPhase> {
        self.tracker.failed_in()
    }

    pub fn result(&self) -> Option<&TopologyResult> {
        self.outcome.as_ref().ok()
    }

    pub fn error(&self) -> Option<&ComposerError> {
        self.outcome.as_ref().err()
    }

    pub fn into_result(self) -> Result<TopologyResult> {
        self.outcome
    }
}

/// Synthesizes the user service topology for one environment
#[derive(Debug, Clone)]
pub struct TopologyComposer {
    descriptor: EnvironmentDescriptor,
    units: Vec<ComputeUnitSpec>,
    settings: ComposerSettings,
}

impl TopologyComposer {
    /// Composer over the standard user compute units
    pub fn new(descriptor: EnvironmentDescriptor) -> Self {
        Self {
            descriptor,
            units: user_compute_units(),
            settings: ComposerSettings::default(),
        }
    }

    pub fn with_units(mut self, units: Vec<ComputeUnitSpec>) -> Self {
        self.units = units;
        self
    }

    pub fn with_settings(mut self, settings: ComposerSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn descriptor(&self) -> &EnvironmentDescriptor {
        &self.descriptor
    }

    pub fn units(&self) -> &[ComputeUnitSpec] {
        &self.units
    }

    pub fn settings(&self) -> &ComposerSettings {
        &self.settings
    }

    /// Run synthesis and return the topology or the first error
    pub fn synthesize(&self) -> Result<TopologyResult> {
        self.run().into_result()
    }

    /// Run synthesis, keeping the phase trail alongside the outcome
    #[instrument(skip(self), fields(service = %self.descriptor.service, stage = %self.descriptor.stage))]
    pub fn run(&self) -> SynthesisRun {
        let mut tracker = PhaseTracker::new();
        let outcome = self.drive(&mut tracker);

        if let Err(err) = &outcome {
            tracker.fail();
            warn!(
                phase = ?tracker.failed_in(),
                error = %err,
                "Synthesis failed"
            );
        }

        SynthesisRun { tracker, outcome }
    }

    fn drive(&self, tracker: &mut PhaseTracker) -> Result<TopologyResult> {
        use SynthesisPhase::*;
        let descriptor = &self.descriptor;

        tracker.advance_to(ClassifyingEnvironment)?;
        descriptor.validate()?;
        let flags = Classifier::new(self.settings.stage_mode).classify(&descriptor.stage)?;
        let features = enabled_features(flags);
        info!(
            production_like = flags.is_production_like(),
            continuous_delivery = flags.is_continuous_delivery_stage(),
            features = ?features,
            "Environment classified"
        );

        tracker.advance_to(NamingResources)?;
        let names = NamePlan::build(
            NamingPolicy::new(&descriptor.service, &descriptor.stage),
            &self.units,
            &features,
        )?;
        debug!(names = names.registry().len(), stack = %names.naming.stack_name(), "Names claimed");

        tracker.advance_to(BuildingRoutes)?;
        let routes = build_routes(&self.units)?;
        let paths = resource_paths(&routes);
        debug!(routes = routes.len(), paths = paths.len(), "Route table built");

        tracker.advance_to(ComputingDeploymentPolicies)?;
        let policies: Vec<DeploymentPolicy> = self
            .units
            .iter()
            .map(|unit| policy_for(unit, flags, &descriptor.stage))
            .collect();

        tracker.advance_to(ComposingTopology)?;
        let ctx = AssemblyContext {
            descriptor,
            flags,
            names: &names,
        };
        let mut assembly = Assembly::new();

        assembly.push(alarm_topic(&ctx))?;
        if features.contains(&ConditionalFeature::AlarmSubscription) {
            assembly.push(alarm_subscription(&ctx))?;
        }
        assembly.push(users_table(&ctx))?;
        assembly.extend(gateway_core(&ctx))?;
        assembly.extend(backup_resources(&ctx))?;

        for ((unit, unit_names), policy) in self.units.iter().zip(&names.units).zip(&policies) {
            assembly.extend(unit_resources(&ctx, unit, unit_names, policy))?;
        }

        assembly.extend(gateway_routes(&paths, &routes))?;

        if features.contains(&ConditionalFeature::DomainMapping) {
            if let Some(host) = domain_host(&descriptor.stage, flags, &self.settings.base_domain) {
                debug!(host = %host, "Mapping custom domain");
                assembly.push(base_path_mapping(host))?;
            }
        }

        let resources = assembly.into_resources();
        info!(resources = resources.len(), "Topology composed");

        let tags = BTreeMap::from([
            ("country".to_string(), descriptor.country_code.clone()),
            ("service".to_string(), descriptor.service.clone()),
            ("stage".to_string(), descriptor.stage.clone()),
        ]);

        tracker.advance_to(Done)?;
        Ok(TopologyResult {
            stack_name: names.naming.stack_name().to_string(),
            description: names.naming.stack_description(),
            account: descriptor.account.clone(),
            region: descriptor.region.clone(),
            tags,
            flags,
            routes,
            resources,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use topo_types::DescriptorError;

    fn descriptor(stage: &str) -> EnvironmentDescriptor {
        EnvironmentDescriptor::builder()
            .account("123456789012")
            .region("eu-west-1")
            .service("cf-user")
            .stage(stage)
            .authorizer("arn:aws:lambda:eu-west-1:123456789012:function:auth0")
            .notification_endpoint("aws_alarm@classifind.app")
            .country_code("GB")
            .build()
            .unwrap()
    }

    #[test]
    fn test_successful_run_reaches_done() {
        let run = TopologyComposer::new(descriptor("dev")).run();

        assert_eq!(run.phase(), SynthesisPhase::Done);
        assert_eq!(run.trail().len(), 7);
        assert!(run.failed_in().is_none());
        assert!(run.error().is_none());

        let topology = run.result().unwrap();
        assert_eq!(topology.stack_name, "cf-user-dev-app");
        assert_eq!(topology.tags["country"], "GB");
        assert_eq!(topology.tags["stage"], "dev");
    }

    #[test]
    fn test_strict_mode_fails_while_classifying() {
        let settings = ComposerSettings {
            stage_mode: StageMode::Strict,
            ..ComposerSettings::default()
        };
        let run = TopologyComposer::new(descriptor("qa"))
            .with_settings(settings)
            .run();

        assert_eq!(run.phase(), SynthesisPhase::Failed);
        assert_eq!(run.failed_in(), Some(SynthesisPhase::ClassifyingEnvironment));
        assert!(run.result().is_none());
    }

    #[test]
    fn test_missing_field_fails_before_naming() {
        let mut descriptor = descriptor("dev");
        descriptor.region.clear();

        let run = TopologyComposer::new(descriptor).run();
        assert_eq!(run.failed_in(), Some(SynthesisPhase::ClassifyingEnvironment));
        assert_eq!(
            run.into_result().unwrap_err(),
            ComposerError::Descriptor(DescriptorError::MissingConfiguration { field: "region" })
        );
    }
}
