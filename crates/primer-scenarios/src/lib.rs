//! # Primer Scenarios
//!
//! Immutable teaching data behind the Primer diagrams, and the navigation
//! used to walk through it.
//!
//! - **Profiles**: Money-center, regional and community bank balance sheets
//! - **CAMELS**: Component ratings per profile
//! - **Shocks**: Named parallel rate shocks applied to a profile
//! - **Liquidity**: Six-step liquidity-crisis narrative
//! - **Supervision**: Four-step supervisory process
//! - **Sequence**: Clamped step navigation and tick-driven playback
//!
//! All tables are `static` and read-only. A "step" is an index into one of
//! them; moving between steps never touches the data.
//!
//! ## Example
//!
//! ```rust
//! use primer_scenarios::prelude::*;
//!
//! let mut stepper = Stepper::from_sequence(liquidity_crisis());
//! stepper.last();
//! stepper.next();
//! assert!(stepper.is_last());
//!
//! let profile = find_profile("money-center").unwrap();
//! assert!(profile.duration_gap().gap > 12.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod camels;
mod error;
pub mod liquidity;
pub mod profiles;
pub mod sequence;
pub mod shocks;
pub mod supervision;

pub use error::{ScenarioError, ScenarioResult};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::camels::{average_rating, composite_rating, CamelsComponent, CamelsRating};
    pub use crate::error::{ScenarioError, ScenarioResult};
    pub use crate::liquidity::{liquidity_crisis, LiquiditySnapshot, StressLevel};
    pub use crate::profiles::{find_profile, profiles, BankProfile, CapitalRatios};
    pub use crate::sequence::{Playback, StepSequence, Stepper};
    pub use crate::shocks::{RateShock, STANDARD_SHOCKS};
    pub use crate::supervision::{supervisory_process, SupervisoryStep};
}
