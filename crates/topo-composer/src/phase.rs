//! Synthesis state machine
//!
//! Phases advance strictly in order; `Failed` is reachable from any
//! non-terminal phase and records where the failure happened.

use crate::error::{ComposerError, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SynthesisPhase {
    Uninitialized,
    ClassifyingEnvironment,
    NamingResources,
    BuildingRoutes,
    ComputingDeploymentPolicies,
    ComposingTopology,
    Done,
    Failed,
}

impl SynthesisPhase {
    /// Successor on the success path
    pub fn next(self) -> Option<SynthesisPhase> {
        use SynthesisPhase::*;
        match self {
            Uninitialized => Some(ClassifyingEnvironment),
            ClassifyingEnvironment => Some(NamingResources),
            NamingResources => Some(BuildingRoutes),
            BuildingRoutes => Some(ComputingDeploymentPolicies),
            ComputingDeploymentPolicies => Some(ComposingTopology),
            ComposingTopology => Some(Done),
            Done | Failed => None,
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, SynthesisPhase::Done | SynthesisPhase::Failed)
    }
}

/// Tracks the current phase and every phase entered so far
#[derive(Debug, Clone)]
pub struct PhaseTracker {
    current: SynthesisPhase,
    trail: Vec<SynthesisPhase>,
    failed_in: Option<SynthesisPhase>,
}

impl PhaseTracker {
    pub fn new() -> Self {
        Self {
            current: SynthesisPhase::Uninitialized,
            trail: vec![SynthesisPhase::Uninitialized],
            failed_in: None,
        }
    }

    pub fn current(&self) -> SynthesisPhase {
        self.current
    }

    pub fn trail(&self) -> &[SynthesisPhase] {
        &self.trail
    }

    /// Phase that was active when synthesis failed
    pub fn failed_in(&self) -> Option<SynthesisPhase> {
        self.failed_in
    }

    /// Move to `to`, which must be the direct successor of the current phase
    pub fn advance_to(&mut self, to: SynthesisPhase) -> Result<()> {
        if self.current.next() != Some(to) {
            return Err(ComposerError::IllegalTransition {
                from: self.current,
                to,
            });
        }

        debug!(from = ?self.current, to = ?to, "Synthesis phase");
        self.current = to;
        self.trail.push(to);
        Ok(())
    }

    pub fn fail(&mut self) {
        if self.current.is_terminal() {
            return;
        }
        self.failed_in = Some(self.current);
        self.current = SynthesisPhase::Failed;
        self.trail.push(SynthesisPhase::Failed);
    }
}

impl Default for PhaseTracker {
    fn default() -> Self {
        Self::new()
    }
}
