//! Stage classification
//!
//! Maps a stage name to [`EnvironmentFlags`]. Only exact, case-sensitive
//! matches against a fixed allow-list count.

use crate::error::{PolicyError, Result};
use serde::{Deserialize, Serialize};
use topo_types::EnvironmentFlags;
use tracing::{debug, warn};

/// Stages managed by the promotion pipeline
pub const CONTINUOUS_DELIVERY_STAGES: [&str; 4] = ["rd", "dev", "staging", "prod"];

/// The single production stage
pub const PRODUCTION_STAGE: &str = "prod";

/// Handling of stage names outside the allow-list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StageMode {
    /// Unknown stages are treated as local stages
    #[default]
    Permissive,

    /// Unknown stages fail classification
    Strict,
}

/// Classify a stage, treating unknown names as local stages
pub fn classify(stage: &str) -> EnvironmentFlags {
    if stage == PRODUCTION_STAGE {
        EnvironmentFlags::production()
    } else if Classifier::is_recognized(stage) {
        EnvironmentFlags::continuous_delivery()
    } else {
        EnvironmentFlags::local()
    }
}

/// Stage classifier with a configurable unknown-stage mode
#[derive(Debug, Clone, Copy, Default)]
pub struct Classifier {
    mode: StageMode,
}

impl Classifier {
    pub fn new(mode: StageMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> StageMode {
        self.mode
    }

    pub fn is_recognized(stage: &str) -> bool {
        CONTINUOUS_DELIVERY_STAGES.iter().any(|s| *s == stage)
    }

    pub fn classify(&self, stage: &str) -> Result<EnvironmentFlags> {
        if !Self::is_recognized(stage) {
            match self.mode {
                StageMode::Strict => {
                    return Err(PolicyError::UnrecognizedStage(stage.to_string()));
                }
                StageMode::Permissive => {
                    warn!(stage = %stage, "Unrecognized stage, treating as local");
                }
            }
        }

        let flags = classify(stage);
        debug!(
            stage = %stage,
            production_like = flags.is_production_like(),
            continuous_delivery = flags.is_continuous_delivery_stage(),
            "Stage classified"
        );
        Ok(flags)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_known_stages() {
        assert_eq!(classify("prod"), EnvironmentFlags::production());
        assert_eq!(classify("staging"), EnvironmentFlags::continuous_delivery());
        assert_eq!(classify("dev"), EnvironmentFlags::continuous_delivery());
        assert_eq!(classify("rd"), EnvironmentFlags::continuous_delivery());
    }

    #[test]
    fn test_unknown_stages_are_local() {
        assert_eq!(classify(""), EnvironmentFlags::local());
        assert_eq!(classify("local"), EnvironmentFlags::local());
        assert_eq!(classify("PROD"), EnvironmentFlags::local());
        assert_eq!(classify(" prod"), EnvironmentFlags::local());
    }

    #[test]
    fn test_strict_mode_rejects_unknown() {
        let strict = Classifier::new(StageMode::Strict);
        assert_eq!(
            strict.classify("local").unwrap_err(),
            PolicyError::UnrecognizedStage("local".into())
        );
        assert_eq!(strict.classify("prod").unwrap(), EnvironmentFlags::production());
    }

    #[test]
    fn test_permissive_mode_is_default() {
        let classifier = Classifier::default();
        assert_eq!(classifier.mode(), StageMode::Permissive);
        assert_eq!(classifier.classify("feature-x").unwrap(), EnvironmentFlags::local());
    }

    proptest! {
        #[test]
        fn prop_unlisted_stages_are_local(stage in "[a-zA-Z0-9_-]{0,12}") {
            prop_assume!(!Classifier::is_recognized(&stage));
            prop_assert_eq!(classify(&stage), EnvironmentFlags::local());
        }

        #[test]
        fn prop_production_implies_continuous_delivery(stage in "[a-z]{0,8}") {
            let flags = classify(&stage);
            prop_assert!(!flags.is_production_like() || flags.is_continuous_delivery_stage());
        }
    }
}
