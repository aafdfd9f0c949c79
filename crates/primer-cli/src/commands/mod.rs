//! CLI command implementations.

pub mod bond;
pub mod camels;
pub mod config;
pub mod equity;
pub mod frontier;
pub mod gap;
pub mod pd;
pub mod profiles;
pub mod scenario;
pub mod var;

// Re-export submodules for convenience
pub use bond::BondArgs;
pub use camels::CamelsArgs;
pub use config::ConfigArgs;
pub use equity::EquityArgs;
pub use frontier::FrontierArgs;
pub use gap::GapArgs;
pub use pd::PdArgs;
pub use scenario::ScenarioArgs;
pub use var::VarArgs;

use crate::error::{CliError, CliResult};

/// Validates a rate in percent; the discount factor `1 + r/100` must stay positive.
pub fn validate_rate(name: &'static str, rate: f64) -> CliResult<f64> {
    if !(rate > -100.0 && rate.is_finite()) {
        return Err(CliError::InvalidArgument {
            name,
            value: rate.to_string(),
            hint: "Rates are in percent and must be above -100.",
        });
    }
    Ok(rate)
}

/// Validates a percentage in `[0, 100]`.
pub fn validate_percent(name: &'static str, value: f64) -> CliResult<f64> {
    if !(0.0..=100.0).contains(&value) {
        return Err(CliError::InvalidArgument {
            name,
            value: value.to_string(),
            hint: "Must be between 0 and 100.",
        });
    }
    Ok(value)
}

/// Validates a non-negative, finite amount.
pub fn validate_non_negative(name: &'static str, value: f64) -> CliResult<f64> {
    if !(value >= 0.0 && value.is_finite()) {
        return Err(CliError::InvalidArgument {
            name,
            value: value.to_string(),
            hint: "Must be zero or positive.",
        });
    }
    Ok(value)
}
