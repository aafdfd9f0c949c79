//! CLI error types.

use std::path::PathBuf;

use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// An explicitly requested config file does not exist.
    #[error("Config file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    /// An argument is outside the range a command accepts.
    #[error("Invalid {name}: {value}. {hint}")]
    InvalidArgument {
        /// Argument name.
        name: &'static str,
        /// Value given.
        value: String,
        /// What would be accepted.
        hint: &'static str,
    },

    /// Configuration failed validation.
    #[error("Configuration is invalid ({0} problem(s))")]
    InvalidConfig(usize),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
