//! Six-step liquidity-crisis narrative.
//!
//! Figures are in billions of dollars for a single illustrative bank.

use serde::Serialize;
use std::fmt;

use crate::sequence::StepSequence;

/// How stressed funding is at a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum StressLevel {
    /// Normal operations.
    Calm,
    /// Early warning signs.
    Elevated,
    /// Deposits leaving quickly.
    Severe,
    /// Survival depends on outside support.
    Critical,
}

impl StressLevel {
    /// Lower-case label.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Calm => "calm",
            Self::Elevated => "elevated",
            Self::Severe => "severe",
            Self::Critical => "critical",
        }
    }
}

impl fmt::Display for StressLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The bank's funding position at one step of the narrative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LiquiditySnapshot {
    /// Short heading.
    pub title: &'static str,
    /// What happens at this step.
    pub narrative: &'static str,
    /// Deposits ($bn).
    pub deposits: f64,
    /// Cash and readily saleable securities ($bn).
    pub liquid_assets: f64,
    /// Borrowing from the central bank ($bn).
    pub central_bank_borrowing: f64,
    /// Funding stress.
    pub stress: StressLevel,
}

impl LiquiditySnapshot {
    /// Liquid assets as a percentage of deposits; zero when there are no deposits.
    pub fn liquidity_ratio(&self) -> f64 {
        if self.deposits <= 0.0 {
            return 0.0;
        }
        self.liquid_assets / self.deposits * 100.0
    }
}

static LIQUIDITY_CRISIS: [LiquiditySnapshot; 6] = [
    LiquiditySnapshot {
        title: "Normal operations",
        narrative: "Deposits are stable and the bank holds a comfortable liquidity buffer.",
        deposits: 100.0,
        liquid_assets: 20.0,
        central_bank_borrowing: 0.0,
        stress: StressLevel::Calm,
    },
    LiquiditySnapshot {
        title: "Rumors spread",
        narrative: "News of securities losses circulates and large depositors start asking questions.",
        deposits: 95.0,
        liquid_assets: 15.0,
        central_bank_borrowing: 0.0,
        stress: StressLevel::Elevated,
    },
    LiquiditySnapshot {
        title: "Withdrawals accelerate",
        narrative: "Uninsured depositors move funds out; the bank pays them from its buffer.",
        deposits: 80.0,
        liquid_assets: 5.0,
        central_bank_borrowing: 0.0,
        stress: StressLevel::Severe,
    },
    LiquiditySnapshot {
        title: "Fire sale",
        narrative: "The buffer is gone, so the bank sells long-dated securities at a loss.",
        deposits: 65.0,
        liquid_assets: 2.0,
        central_bank_borrowing: 0.0,
        stress: StressLevel::Critical,
    },
    LiquiditySnapshot {
        title: "Central bank steps in",
        narrative: "The lender of last resort lends against collateral to stop the run.",
        deposits: 62.0,
        liquid_assets: 12.0,
        central_bank_borrowing: 15.0,
        stress: StressLevel::Severe,
    },
    LiquiditySnapshot {
        title: "Stabilization",
        narrative: "Withdrawals slow, confidence returns and emergency borrowing is repaid over time.",
        deposits: 70.0,
        liquid_assets: 14.0,
        central_bank_borrowing: 8.0,
        stress: StressLevel::Elevated,
    },
];

/// The liquidity-crisis steps.
#[must_use]
pub fn liquidity_crisis() -> StepSequence<'static, LiquiditySnapshot> {
    StepSequence::new("liquidity-crisis", &LIQUIDITY_CRISIS)
        .expect("liquidity-crisis table should always be non-empty")
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_six_steps() {
        let seq = liquidity_crisis();
        assert_eq!(seq.len(), 6);
        assert_eq!(seq.get(0).stress, StressLevel::Calm);
        assert_eq!(seq.get(5).title, "Stabilization");
    }

    #[test]
    fn test_liquidity_ratio() {
        let seq = liquidity_crisis();
        assert_relative_eq!(seq.get(0).liquidity_ratio(), 20.0);
        assert_relative_eq!(seq.get(2).liquidity_ratio(), 6.25);
    }

    #[test]
    fn test_peak_stress_before_support() {
        let seq = liquidity_crisis();
        let peak = seq
            .steps()
            .iter()
            .position(|s| s.stress == StressLevel::Critical)
            .unwrap();
        let support = seq
            .steps()
            .iter()
            .position(|s| s.central_bank_borrowing > 0.0)
            .unwrap();
        assert!(peak < support);
    }

    #[test]
    fn test_zero_deposits() {
        let snapshot = LiquiditySnapshot {
            deposits: 0.0,
            ..*liquidity_crisis().get(0)
        };
        assert_eq!(snapshot.liquidity_ratio(), 0.0);
    }

    #[test]
    fn test_stress_ordering() {
        assert!(StressLevel::Calm < StressLevel::Critical);
        assert_eq!(StressLevel::Severe.to_string(), "severe");
    }

    #[test]
    fn test_json_names() {
        let json = serde_json::to_string(&StressLevel::Critical).unwrap();
        assert_eq!(json, "\"critical\"");

        let snapshot = serde_json::to_value(liquidity_crisis().get(0)).unwrap();
        assert_eq!(snapshot["title"], "Normal operations");
        assert_eq!(snapshot["stress"], "calm");
    }
}
