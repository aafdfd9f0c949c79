//! Error types for scenario data.

use thiserror::Error;

/// Errors that can occur while looking up or walking scenario data.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScenarioError {
    /// A step sequence has no steps.
    #[error("step sequence '{name}' has no steps")]
    EmptySequence {
        /// Sequence name.
        name: String,
    },

    /// No profile with this identifier.
    #[error("unknown bank profile: {0}")]
    UnknownProfile(String),
}

/// A specialized Result type for scenario operations.
pub type ScenarioResult<T> = Result<T, ScenarioError>;
