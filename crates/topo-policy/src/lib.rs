//! # Topology Policy
//!
//! Pure decision logic that turns a stage name into everything the composer
//! needs to know about an environment.
//!
//! ## Overview
//!
//! Stage-string comparisons happen in exactly one place, the
//! [`Classifier`]. Its [`EnvironmentFlags`](topo_types::EnvironmentFlags) are
//! then threaded explicitly through:
//!
//! - [`NamingPolicy`]: deterministic `{service}-{stage}-{logical}` names
//! - [`policy_for`]: rollout strategy, log retention and alarm threshold per unit
//! - [`enabled_features`]: the predicate table of conditional resources
//! - [`domain_host`]: the custom domain host for continuous-delivery stages
//!
//! ## Example
//!
//! ```rust
//! use topo_policy::{classify, enabled_features, ConditionalFeature};
//!
//! let flags = classify("dev");
//! let features = enabled_features(flags);
//!
//! assert!(features.contains(&ConditionalFeature::BackupPlan));
//! assert!(!features.contains(&ConditionalFeature::AlarmSubscription));
//! ```

#![deny(unsafe_code)]
#![cfg_attr(feature = "strict-docs", warn(missing_docs))]
#![cfg_attr(not(feature = "strict-docs"), allow(missing_docs))]

pub mod classifier;
pub mod deployment;
pub mod domain;
pub mod error;
pub mod features;
pub mod naming;

// Re-exports
pub use classifier::{
    classify, Classifier, StageMode, CONTINUOUS_DELIVERY_STAGES, PRODUCTION_STAGE,
};
pub use deployment::{log_retention, policy_for};
pub use domain::{domain_host, DEFAULT_BASE_DOMAIN};
pub use error::{PolicyError, Result};
pub use features::{enabled_features, ConditionalFeature, FeatureCondition, FEATURE_TABLE};
pub use naming::{name, NamingPolicy};
