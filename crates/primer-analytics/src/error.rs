//! Error types for the analytics crate.
//!
//! Evaluation functions are total; errors only arise while building an
//! analytics object from caller-supplied tables or parameters.

use primer_math::MathError;
use thiserror::Error;

/// Unified error type for all analytics operations.
#[derive(Debug, Error)]
pub enum AnalyticsError {
    /// Invalid input parameters
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Error from the math layer
    #[error("math error: {0}")]
    Math(#[from] MathError),
}

/// A specialized Result type for analytics operations.
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;

impl AnalyticsError {
    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}
