//! Asset-liability management: weighted duration and duration gap.
//!
//! ## Formula
//!
//! ```text
//! D       = Σ (w_i / 100) × D_i
//! gap     = D_A - D_L
//! gap_adj = D_A - (L / A) × D_L
//! ΔE      ≈ -gap_adj × A × Δy / (1 + y)
//! ```
//!
//! Bucket weights are percentages and are expected to sum to about 100. They
//! are not checked; a composition that does not add up is the caller's
//! concern.

use serde::{Deserialize, Serialize};

/// Duration value (in years)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Duration(f64);

impl Duration {
    /// Create a new Duration value
    #[must_use]
    pub const fn new(years: f64) -> Self {
        Self(years)
    }

    /// Get the duration in years
    #[must_use]
    pub fn years(&self) -> f64 {
        self.0
    }
}

impl std::fmt::Display for Duration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.4} years", self.0)
    }
}

impl From<f64> for Duration {
    fn from(f: f64) -> Self {
        Self(f)
    }
}

/// A slice of a balance sheet with its share and duration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DurationBucket {
    /// Display label.
    pub label: &'static str,
    /// Share of the side, in percent.
    pub weight: f64,
    /// Duration in years.
    pub duration: f64,
}

impl DurationBucket {
    /// Creates a bucket.
    #[must_use]
    pub const fn new(label: &'static str, weight: f64, duration: f64) -> Self {
        Self {
            label,
            weight,
            duration,
        }
    }

    /// This bucket's contribution to the weighted duration.
    #[must_use]
    pub fn contribution(&self) -> f64 {
        self.weight / 100.0 * self.duration
    }
}

/// Weighted average duration of a composition.
#[must_use]
pub fn weighted_duration(buckets: &[DurationBucket]) -> Duration {
    Duration(buckets.iter().map(DurationBucket::contribution).sum())
}

/// Asset duration, liability duration and their difference.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DurationGap {
    /// Weighted asset duration.
    pub asset_duration: Duration,
    /// Weighted liability duration.
    pub liability_duration: Duration,
    /// Asset duration minus liability duration (years).
    pub gap: f64,
}

impl DurationGap {
    /// Builds a gap from the two side durations.
    #[must_use]
    pub fn from_durations(asset_duration: Duration, liability_duration: Duration) -> Self {
        Self {
            asset_duration,
            liability_duration,
            gap: asset_duration.years() - liability_duration.years(),
        }
    }

    /// Gap with liabilities scaled by leverage, `D_A - (L/A) × D_L`.
    #[must_use]
    pub fn leverage_adjusted(&self, asset_value: f64, liability_value: f64) -> f64 {
        leverage_adjusted_gap(
            self.asset_duration,
            self.liability_duration,
            asset_value,
            liability_value,
        )
    }

    /// Approximate change in equity value for a parallel move of
    /// `rate_change` percentage points from `rate` percent.
    #[must_use]
    pub fn equity_sensitivity(
        &self,
        asset_value: f64,
        liability_value: f64,
        rate_change: f64,
        rate: f64,
    ) -> f64 {
        let adjusted = self.leverage_adjusted(asset_value, liability_value);
        -adjusted * asset_value * (rate_change / 100.0) / (1.0 + rate / 100.0)
    }
}

/// Duration gap between an asset composition and a liability composition.
#[must_use]
pub fn duration_gap(assets: &[DurationBucket], liabilities: &[DurationBucket]) -> DurationGap {
    DurationGap::from_durations(weighted_duration(assets), weighted_duration(liabilities))
}

/// Leverage-adjusted duration gap. Zero assets leave the liability term out.
#[must_use]
pub fn leverage_adjusted_gap(
    asset_duration: Duration,
    liability_duration: Duration,
    asset_value: f64,
    liability_value: f64,
) -> f64 {
    let leverage = if asset_value.abs() > 1e-12 {
        liability_value / asset_value
    } else {
        0.0
    };
    asset_duration.years() - leverage * liability_duration.years()
}
