//! Composer error types

use crate::phase::SynthesisPhase;
use thiserror::Error;
use topo_policy::PolicyError;
use topo_types::{DescriptorError, RouteKey};

/// Synthesis errors
///
/// None of these are retried: synthesis is pure, so the same input always
/// yields the same error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComposerError {
    #[error(transparent)]
    Descriptor(#[from] DescriptorError),

    #[error(transparent)]
    Policy(#[from] PolicyError),

    #[error("Duplicate route binding {key}: claimed by {existing} and {conflicting}")]
    DuplicateRouteBinding {
        key: RouteKey,
        existing: String,
        conflicting: String,
    },

    #[error("Duplicate resource name {name}: claimed by {existing} and {conflicting}")]
    DuplicateResourceName {
        name: String,
        existing: String,
        conflicting: String,
    },

    #[error("Duplicate logical id {0}")]
    DuplicateLogicalId(String),

    #[error("Resource {resource} depends on unknown resource {dependency}")]
    DanglingDependency {
        resource: String,
        dependency: String,
    },

    #[error("Illegal synthesis transition from {from:?} to {to:?}")]
    IllegalTransition {
        from: SynthesisPhase,
        to: SynthesisPhase,
    },
}

impl ComposerError {
    /// True when a required environment input was absent
    pub fn is_missing_configuration(&self) -> bool {
        matches!(
            self,
            ComposerError::Descriptor(DescriptorError::MissingConfiguration { .. })
        )
    }
}

/// Result type for composer operations
pub type Result<T> = std::result::Result<T, ComposerError>;
