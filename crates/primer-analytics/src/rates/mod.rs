//! Interest-rate sensitivity.
//!
//! A duration-plus-convexity approximation of how a fixed-income position
//! reprices when rates move, and the resulting hit to bank equity when the
//! same approximation is run on both sides of the balance sheet.
//!
//! ## Formula
//!
//! ```text
//! D_mod = D / (1 + r/100)
//! C     = D × (D + 1) / (2 × (1 + r/100)²)
//! ΔP/P  ≈ -D_mod × Δy + ½ × C × Δy²        (Δy in decimal)
//! ```
//!
//! The result is illustrative and unbounded: extreme synthetic inputs can
//! produce moves beyond ±100%.

mod equity;
mod sensitivity;

pub use equity::{equity_impact, BalanceSheetLeg, EquityImpact};
pub use sensitivity::{approximate_convexity, modified_duration, price_change, PriceSensitivity};
