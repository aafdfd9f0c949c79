//! Primer Configuration Layer
//!
//! This crate loads the tunable illustrative constants of the Primer library
//! from TOML: PD bounds and anchors, frontier parameters, VaR grid and
//! defaults, and the base interest rate.
//!
//! # Features
//!
//! - **Defaults**: Every field defaults to the library's built-in value
//! - **Validation**: All rule violations are collected, not just the first
//! - **Builders**: Turn a configuration into analytics objects
//!
//! # Example
//!
//! ```rust
//! use primer_config::{PrimerConfig, Validate};
//!
//! let config = PrimerConfig::from_toml_str(
//!     r#"
//!     [credit]
//!     pd_cap = 30.0
//!     "#,
//! )
//! .unwrap();
//!
//! assert!(config.is_valid());
//! let curve = config.default_curve().unwrap();
//! assert_eq!(curve.probability_of_default(300.0), 30.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod error;
mod primer;

pub use error::{ConfigError, ConfigResult, Validate, ValidationError};
pub use primer::{CreditConfig, FrontierConfig, PrimerConfig, RatesConfig, VarConfig};

/// File name looked for in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "primer.toml";
