//! Equity impact of a parallel rate move.

use serde::{Deserialize, Serialize};

use super::sensitivity::price_change;

/// One side of the balance sheet: a value and its duration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BalanceSheetLeg {
    /// Market value (any consistent unit).
    pub value: f64,
    /// Duration in years.
    pub duration: f64,
}

impl BalanceSheetLeg {
    /// Creates a leg.
    #[must_use]
    pub fn new(value: f64, duration: f64) -> Self {
        Self { value, duration }
    }
}

/// Repricing of assets, liabilities and equity after a rate move.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EquityImpact {
    /// Asset price change (percent).
    pub asset_change_pct: f64,
    /// Liability price change (percent).
    pub liability_change_pct: f64,
    /// Assets after the move.
    pub assets_after: f64,
    /// Liabilities after the move.
    pub liabilities_after: f64,
    /// Equity before the move (assets minus liabilities).
    pub equity_before: f64,
    /// Equity after the move.
    pub equity_after: f64,
    /// Equity after minus equity before.
    pub equity_change: f64,
    /// Equity change relative to starting equity (percent); zero when starting equity is zero.
    pub equity_change_pct: f64,
}

impl EquityImpact {
    /// True when the move leaves equity at or below zero.
    #[must_use]
    pub fn is_insolvent(&self) -> bool {
        self.equity_after <= 0.0
    }
}

/// Runs the duration/convexity estimate on both legs and derives equity.
///
/// ```text
/// E' = A × (1 + ΔA%/100) - L × (1 + ΔL%/100)
/// ```
#[must_use]
pub fn equity_impact(
    assets: BalanceSheetLeg,
    liabilities: BalanceSheetLeg,
    current_rate: f64,
    new_rate: f64,
) -> EquityImpact {
    let asset_change_pct = price_change(assets.duration, current_rate, new_rate).price_change;
    let liability_change_pct =
        price_change(liabilities.duration, current_rate, new_rate).price_change;

    let assets_after = assets.value * (1.0 + asset_change_pct / 100.0);
    let liabilities_after = liabilities.value * (1.0 + liability_change_pct / 100.0);

    let equity_before = assets.value - liabilities.value;
    let equity_after = assets_after - liabilities_after;
    let equity_change = equity_after - equity_before;
    let equity_change_pct = if equity_before.abs() > 1e-12 {
        equity_change / equity_before.abs() * 100.0
    } else {
        0.0
    };

    tracing::debug!(
        current_rate,
        new_rate,
        equity_before,
        equity_after,
        "computed equity impact"
    );

    EquityImpact {
        asset_change_pct,
        liability_change_pct,
        assets_after,
        liabilities_after,
        equity_before,
        equity_after,
        equity_change,
        equity_change_pct,
    }
}
