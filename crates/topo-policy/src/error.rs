//! Policy error types

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolicyError {
    #[error("Unrecognized stage: {0:?}")]
    UnrecognizedStage(String),
}

/// Result type for policy operations
pub type Result<T> = std::result::Result<T, PolicyError>;
