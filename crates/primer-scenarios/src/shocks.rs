//! Named parallel rate shocks.

use serde::Serialize;
use std::fmt;

use primer_analytics::rates::{equity_impact, EquityImpact};

use crate::profiles::BankProfile;

/// A parallel shift of the yield curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RateShock {
    /// Display name.
    pub name: &'static str,
    /// Size of the move in basis points; negative means rates fall.
    pub basis_points: i32,
}

impl RateShock {
    /// Creates a shock.
    pub const fn new(name: &'static str, basis_points: i32) -> Self {
        Self { name, basis_points }
    }

    /// Size of the move in percentage points.
    pub fn percentage_points(&self) -> f64 {
        f64::from(self.basis_points) / 100.0
    }

    /// Reprices both sides of a profile's balance sheet from its base rate.
    pub fn apply(&self, profile: &BankProfile) -> EquityImpact {
        self.apply_from(profile, profile.base_rate)
    }

    /// Reprices both sides of a profile's balance sheet from `current_rate`.
    pub fn apply_from(&self, profile: &BankProfile, current_rate: f64) -> EquityImpact {
        let new_rate = current_rate + self.percentage_points();
        tracing::debug!(
            profile = profile.id,
            shock = self.name,
            current_rate,
            new_rate,
            "applying rate shock"
        );
        equity_impact(
            profile.asset_leg(),
            profile.liability_leg(),
            current_rate,
            new_rate,
        )
    }
}

impl fmt::Display for RateShock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:+} bp)", self.name, self.basis_points)
    }
}

/// Shocks shown in the interest-rate risk diagram.
pub const STANDARD_SHOCKS: [RateShock; 5] = [
    RateShock::new("Rates +100bp", 100),
    RateShock::new("Rates +200bp", 200),
    RateShock::new("Rates +300bp", 300),
    RateShock::new("Rates -100bp", -100),
    RateShock::new("Rates -200bp", -200),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profiles::find_profile;

    #[test]
    fn test_rising_rates_hurt_long_gap_bank() {
        let profile = find_profile("money-center").unwrap();
        for shock in STANDARD_SHOCKS.iter().filter(|s| s.basis_points > 0) {
            let impact = shock.apply(profile);
            assert!(impact.equity_change < 0.0, "{shock}");
        }
    }

    #[test]
    fn test_falling_rates_help_long_gap_bank() {
        let profile = find_profile("money-center").unwrap();
        let impact = STANDARD_SHOCKS[3].apply(profile);
        assert!(impact.equity_change > 0.0);
    }

    #[test]
    fn test_bigger_shock_bigger_loss() {
        let profile = find_profile("regional").unwrap();
        let losses: Vec<f64> = STANDARD_SHOCKS[..3]
            .iter()
            .map(|s| s.apply(profile).equity_change)
            .collect();
        assert!(losses[0] > losses[1] && losses[1] > losses[2]);
    }

    #[test]
    fn test_display() {
        assert_eq!(STANDARD_SHOCKS[0].to_string(), "Rates +100bp (+100 bp)");
        assert_eq!(STANDARD_SHOCKS[4].percentage_points(), -2.0);
    }
}
