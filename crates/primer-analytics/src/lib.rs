//! # Primer Analytics
//!
//! Closed-form banking analytics behind the Primer teaching diagrams.
//!
//! This crate provides:
//! - **Credit**: Credit score to probability of default, expected loss, score bands
//! - **Rates**: Duration/convexity price sensitivity, equity impact of a rate move
//! - **Frontier**: Square-root risk/return curve
//! - **VaR**: Normal and fat-tailed tail curves, threshold lookup, parametric VaR
//! - **ALM**: Weighted duration, duration gap, leverage-adjusted gap
//!
//! Every function is pure: inputs in, numbers out. The formulas are
//! pedagogical approximations and are kept that way on purpose; they are not
//! production pricing or risk models.
//!
//! ## Units
//!
//! Rates, probabilities, weights and price changes are expressed in percent
//! (`4.0` means 4%). Durations are in years.
//!
//! ## Usage
//!
//! ```rust
//! use primer_analytics::prelude::*;
//!
//! let curve = DefaultCurve::standard();
//! assert_eq!(curve.probability_of_default(700.0), 5.0);
//!
//! let move_up = price_change(7.0, 4.0, 6.0);
//! assert!(move_up.price_change < -12.0 && move_up.price_change > -13.0);
//!
//! let frontier = RiskReturnFrontier::default();
//! assert_eq!(frontier.expected_return(0.0), 4.5);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;

pub use error::{AnalyticsError, AnalyticsResult};

pub mod alm;
pub mod credit;
pub mod frontier;
pub mod rates;
pub mod var;

/// Prelude module for convenient imports.
///
/// ```rust
/// use primer_analytics::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{AnalyticsError, AnalyticsResult};

    // Credit
    pub use crate::credit::{
        expected_loss, CreditBand, DefaultCurve, PdBounds, ScoreAnchor, DEFAULT_SCORE_ANCHORS,
    };

    // Rates
    pub use crate::rates::{
        approximate_convexity, equity_impact, modified_duration, price_change, BalanceSheetLeg,
        EquityImpact, PriceSensitivity,
    };

    // Frontier
    pub use crate::frontier::{FrontierPoint, RiskReturnFrontier};

    // VaR
    pub use crate::var::{
        parametric_var, ConfidenceLevel, DistributionMode, GridSpec, TailCurve, VarEstimate,
    };

    // ALM
    pub use crate::alm::{
        duration_gap, leverage_adjusted_gap, weighted_duration, Duration, DurationBucket,
        DurationGap,
    };
}
