//! Topology Composer
//!
//! Synthesizes the complete resource graph of the user service for one
//! environment: alarm topic, users table, REST API with authorizer, one
//! function per compute unit with alias, alarm and deployment group, and the
//! stage-conditional backup plan, alarm subscription and domain mapping.
//!
//! ## Architectural Boundaries
//!
//! - `topo-policy` owns: every decision derived from the stage
//! - `topo-composer` owns: phase ordering, name claiming, route table, assembly
//! - The provisioning backend owns: applying the emitted descriptors
//!
//! ## Key Principle
//!
//! Synthesis is pure. The same descriptor always yields the same topology,
//! byte for byte, and a failed pass emits nothing.
//!
//! ## Usage
//!
//! ```rust
//! use topo_composer::TopologyComposer;
//! use topo_types::EnvironmentDescriptor;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let descriptor = EnvironmentDescriptor::builder()
//!     .account("123456789012")
//!     .region("eu-west-1")
//!     .service("cf-user")
//!     .stage("dev")
//!     .authorizer("arn:aws:lambda:eu-west-1:123456789012:function:auth0")
//!     .notification_endpoint("aws_alarm@classifind.app")
//!     .country_code("GB")
//!     .build()?;
//!
//! let topology = TopologyComposer::new(descriptor).synthesize()?;
//! assert!(topology.contains("BackupPlan"));
//! assert!(!topology.contains("SnsTopicSubscription"));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![deny(unsafe_code)]
#![cfg_attr(feature = "strict-docs", warn(missing_docs))]
#![cfg_attr(not(feature = "strict-docs"), allow(missing_docs))]

pub mod assembly;
pub mod catalog;
pub mod composer;
pub mod diff;
pub mod error;
pub mod phase;
pub mod plan;
pub mod registry;
pub mod routes;

// Re-exports
pub use assembly::ids;
pub use catalog::{user_compute_units, USERS_PATH, USER_PATH};
pub use composer::{ComposerSettings, SynthesisRun, TopologyComposer};
pub use diff::{diff, TopologyDiff};
pub use error::{ComposerError, Result};
pub use phase::{PhaseTracker, SynthesisPhase};
pub use plan::{NamePlan, UnitNames};
pub use registry::NameRegistry;
pub use routes::{build_routes, resource_paths};
