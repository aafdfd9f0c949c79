//! Illustrative bank profiles.
//!
//! Balance sheet totals are in billions of dollars. Bucket weights are
//! percentages of their side of the balance sheet.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use primer_analytics::alm::{duration_gap, DurationBucket, DurationGap};
use primer_analytics::rates::BalanceSheetLeg;

use crate::camels::{CamelsComponent, CamelsRating};
use crate::error::{ScenarioError, ScenarioResult};

/// Regulatory capital ratios, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CapitalRatios {
    /// Common equity tier 1 to risk-weighted assets.
    pub cet1: f64,
    /// Tier 1 capital to risk-weighted assets.
    pub tier1: f64,
    /// Total capital to risk-weighted assets.
    pub total_capital: f64,
    /// Tier 1 capital to average total assets.
    pub leverage: f64,
}

impl CapitalRatios {
    /// Minimums for the "well capitalized" category: CET1, Tier 1, total, leverage.
    pub const WELL_CAPITALIZED: CapitalRatios = CapitalRatios {
        cet1: 6.5,
        tier1: 8.0,
        total_capital: 10.0,
        leverage: 5.0,
    };

    /// True when every ratio meets the well-capitalized minimum.
    pub fn is_well_capitalized(&self) -> bool {
        let min = Self::WELL_CAPITALIZED;
        self.cet1 >= min.cet1
            && self.tier1 >= min.tier1
            && self.total_capital >= min.total_capital
            && self.leverage >= min.leverage
    }
}

/// A bank's balance sheet, duration profile, capital and CAMELS ratings.
#[derive(Debug, Clone, Serialize)]
pub struct BankProfile {
    /// Identifier used for lookup.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// One-line description.
    pub description: &'static str,
    /// Total assets ($bn).
    pub total_assets: Decimal,
    /// Total liabilities ($bn).
    pub total_liabilities: Decimal,
    /// Prevailing rate the balance sheet is priced at (percent).
    pub base_rate: f64,
    /// Asset composition.
    pub assets: &'static [DurationBucket],
    /// Liability composition.
    pub liabilities: &'static [DurationBucket],
    /// Capital ratios.
    pub capital: CapitalRatios,
    /// CAMELS component ratings.
    pub camels: &'static [CamelsRating],
}

impl BankProfile {
    /// Equity ($bn).
    pub fn equity(&self) -> Decimal {
        self.total_assets - self.total_liabilities
    }

    /// Equity as a percentage of assets.
    pub fn equity_ratio(&self) -> Decimal {
        if self.total_assets.is_zero() {
            return Decimal::ZERO;
        }
        self.equity() / self.total_assets * dec!(100)
    }

    /// Weighted asset and liability durations and their gap.
    pub fn duration_gap(&self) -> DurationGap {
        duration_gap(self.assets, self.liabilities)
    }

    /// Assets as a repricing leg.
    pub fn asset_leg(&self) -> BalanceSheetLeg {
        let gap = self.duration_gap();
        BalanceSheetLeg::new(to_f64(self.total_assets), gap.asset_duration.years())
    }

    /// Liabilities as a repricing leg.
    pub fn liability_leg(&self) -> BalanceSheetLeg {
        let gap = self.duration_gap();
        BalanceSheetLeg::new(to_f64(self.total_liabilities), gap.liability_duration.years())
    }
}

fn to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or(0.0)
}

static MONEY_CENTER_ASSETS: [DurationBucket; 4] = [
    DurationBucket::new("Residential mortgages", 35.0, 25.0),
    DurationBucket::new("Commercial loans", 25.0, 6.0),
    DurationBucket::new("Investment securities", 15.0, 5.0),
    DurationBucket::new("Consumer loans", 25.0, 7.0),
];

static MONEY_CENTER_LIABILITIES: [DurationBucket; 4] = [
    DurationBucket::new("Demand deposits", 25.0, 0.003),
    DurationBucket::new("Savings deposits", 30.0, 0.1),
    DurationBucket::new("Time deposits", 25.0, 0.5),
    DurationBucket::new("Short-term borrowing", 20.0, 0.08),
];

static MONEY_CENTER_CAMELS: [CamelsRating; 6] = [
    CamelsRating::new(CamelsComponent::Capital, 2, "Buffers above minimums, large trading book"),
    CamelsRating::new(CamelsComponent::AssetQuality, 2, "Diversified loans, some CRE pressure"),
    CamelsRating::new(CamelsComponent::Management, 1, "Mature risk framework"),
    CamelsRating::new(CamelsComponent::Earnings, 2, "Stable fee income"),
    CamelsRating::new(CamelsComponent::Liquidity, 2, "Deep wholesale funding access"),
    CamelsRating::new(CamelsComponent::Sensitivity, 3, "Long mortgage book against short funding"),
];

static REGIONAL_ASSETS: [DurationBucket; 4] = [
    DurationBucket::new("Residential mortgages", 30.0, 8.0),
    DurationBucket::new("Commercial real estate", 25.0, 5.0),
    DurationBucket::new("C&I loans", 20.0, 2.0),
    DurationBucket::new("Investment securities", 25.0, 4.5),
];

static REGIONAL_LIABILITIES: [DurationBucket; 4] = [
    DurationBucket::new("Demand deposits", 30.0, 0.003),
    DurationBucket::new("Savings deposits", 35.0, 0.1),
    DurationBucket::new("Time deposits", 25.0, 0.75),
    DurationBucket::new("FHLB advances", 10.0, 1.5),
];

static REGIONAL_CAMELS: [CamelsRating; 6] = [
    CamelsRating::new(CamelsComponent::Capital, 2, "Adequate for current growth"),
    CamelsRating::new(CamelsComponent::AssetQuality, 3, "CRE concentration above peer"),
    CamelsRating::new(CamelsComponent::Management, 2, "Controls keeping pace with growth"),
    CamelsRating::new(CamelsComponent::Earnings, 2, "Net interest margin narrowing"),
    CamelsRating::new(CamelsComponent::Liquidity, 3, "Reliant on uninsured deposits"),
    CamelsRating::new(CamelsComponent::Sensitivity, 3, "Unrealized losses in securities"),
];

static COMMUNITY_ASSETS: [DurationBucket; 4] = [
    DurationBucket::new("Residential mortgages", 45.0, 12.0),
    DurationBucket::new("Agricultural loans", 20.0, 3.0),
    DurationBucket::new("Small business loans", 20.0, 2.5),
    DurationBucket::new("Investment securities", 15.0, 4.0),
];

static COMMUNITY_LIABILITIES: [DurationBucket; 3] = [
    DurationBucket::new("Demand deposits", 35.0, 0.003),
    DurationBucket::new("Savings deposits", 35.0, 0.1),
    DurationBucket::new("Time deposits", 30.0, 1.0),
];

static COMMUNITY_CAMELS: [CamelsRating; 6] = [
    CamelsRating::new(CamelsComponent::Capital, 1, "High retained earnings"),
    CamelsRating::new(CamelsComponent::AssetQuality, 2, "Local concentration, low losses"),
    CamelsRating::new(CamelsComponent::Management, 2, "Small team, key-person risk"),
    CamelsRating::new(CamelsComponent::Earnings, 2, "Steady but thin"),
    CamelsRating::new(CamelsComponent::Liquidity, 1, "Sticky core deposits"),
    CamelsRating::new(CamelsComponent::Sensitivity, 3, "Fixed-rate mortgages held to maturity"),
];

static PROFILES: [BankProfile; 3] = [
    BankProfile {
        id: "money-center",
        name: "Money-Center Bank",
        description: "Global bank with a long mortgage book funded by short-term deposits",
        total_assets: dec!(2500),
        total_liabilities: dec!(2275),
        base_rate: 4.0,
        assets: &MONEY_CENTER_ASSETS,
        liabilities: &MONEY_CENTER_LIABILITIES,
        capital: CapitalRatios {
            cet1: 12.5,
            tier1: 14.0,
            total_capital: 16.5,
            leverage: 6.8,
        },
        camels: &MONEY_CENTER_CAMELS,
    },
    BankProfile {
        id: "regional",
        name: "Regional Bank",
        description: "Mid-sized lender concentrated in commercial real estate",
        total_assets: dec!(150),
        total_liabilities: dec!(136.5),
        base_rate: 4.0,
        assets: &REGIONAL_ASSETS,
        liabilities: &REGIONAL_LIABILITIES,
        capital: CapitalRatios {
            cet1: 10.2,
            tier1: 11.0,
            total_capital: 12.8,
            leverage: 8.1,
        },
        camels: &REGIONAL_CAMELS,
    },
    BankProfile {
        id: "community",
        name: "Community Bank",
        description: "Small local lender funded by core deposits",
        total_assets: dec!(1.2),
        total_liabilities: dec!(1.074),
        base_rate: 4.0,
        assets: &COMMUNITY_ASSETS,
        liabilities: &COMMUNITY_LIABILITIES,
        capital: CapitalRatios {
            cet1: 14.1,
            tier1: 14.1,
            total_capital: 15.3,
            leverage: 10.5,
        },
        camels: &COMMUNITY_CAMELS,
    },
];

/// All profiles.
pub fn profiles() -> &'static [BankProfile] {
    &PROFILES
}

/// Looks up a profile by identifier (case-insensitive).
pub fn find_profile(id: &str) -> ScenarioResult<&'static BankProfile> {
    PROFILES
        .iter()
        .find(|p| p.id.eq_ignore_ascii_case(id))
        .ok_or_else(|| ScenarioError::UnknownProfile(id.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_money_center_gap() {
        let profile = find_profile("money-center").unwrap();
        let gap = profile.duration_gap();

        assert_relative_eq!(gap.asset_duration.years(), 12.75, epsilon = 1e-12);
        assert_relative_eq!(gap.liability_duration.years(), 0.17175, epsilon = 1e-12);
        assert_relative_eq!(gap.gap, 12.57825, epsilon = 1e-12);
    }

    #[test]
    fn test_weights_sum_to_100() {
        for profile in profiles() {
            for side in [profile.assets, profile.liabilities] {
                let total: f64 = side.iter().map(|b| b.weight).sum();
                assert_relative_eq!(total, 100.0, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn test_equity() {
        let profile = find_profile("money-center").unwrap();
        assert_eq!(profile.equity(), dec!(225));
        assert_eq!(profile.equity_ratio(), dec!(9));
    }

    #[test]
    fn test_every_profile_rates_all_components() {
        for profile in profiles() {
            let components: Vec<_> = profile.camels.iter().map(|r| r.component).collect();
            assert_eq!(components, CamelsComponent::ALL.to_vec());
            assert!(profile.camels.iter().all(|r| (1..=5).contains(&r.rating)));
        }
    }

    #[test]
    fn test_capital() {
        for profile in profiles() {
            assert!(profile.capital.is_well_capitalized(), "{}", profile.id);
        }
        let thin = CapitalRatios {
            cet1: 7.0,
            tier1: 8.5,
            total_capital: 10.5,
            leverage: 4.0,
        };
        assert!(!thin.is_well_capitalized());
    }

    #[test]
    fn test_lookup() {
        assert_eq!(find_profile("Regional").unwrap().id, "regional");
        assert_eq!(
            find_profile("credit-union").unwrap_err(),
            ScenarioError::UnknownProfile("credit-union".to_string())
        );
    }

    #[test]
    fn test_legs() {
        let profile = find_profile("community").unwrap();
        let assets = profile.asset_leg();
        assert_relative_eq!(assets.value, 1.2, epsilon = 1e-12);
        // 0.45×12 + 0.20×3 + 0.20×2.5 + 0.15×4
        assert_relative_eq!(assets.duration, 7.1, epsilon = 1e-12);
    }
}
