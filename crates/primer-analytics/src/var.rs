//! Value at Risk (VaR) visualization support.
//!
//! A VaR picture is a density curve with the left tail shaded beyond a
//! threshold. Thresholds come from a fixed lookup table, one column for the
//! normal curve and one for the fat-tailed curve. They are not inverse CDFs:
//! the fat-tailed figures are rounded teaching values and are kept as is.
//!
//! | Confidence | Normal | Fat-tailed |
//! |------------|--------|------------|
//! | 95%        | 1.645  | 1.8        |
//! | 99%        | 2.326  | 2.8        |
//! | 99.9%      | 3.09   | 4.0        |

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use primer_math::distribution::{sample_density, tail_mass, DEFAULT_GRID};
pub use primer_math::distribution::{DistributionMode, GridSpec};

use crate::error::{AnalyticsError, AnalyticsResult};

/// Supported confidence levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ConfidenceLevel {
    /// 95%.
    #[default]
    #[serde(rename = "95")]
    P95,
    /// 99%.
    #[serde(rename = "99")]
    P99,
    /// 99.9%.
    #[serde(rename = "99.9")]
    P999,
}

impl ConfidenceLevel {
    /// All levels, lowest first.
    pub const ALL: [ConfidenceLevel; 3] = [Self::P95, Self::P99, Self::P999];

    /// Confidence as a percentage.
    #[must_use]
    pub fn percent(self) -> f64 {
        match self {
            Self::P95 => 95.0,
            Self::P99 => 99.0,
            Self::P999 => 99.9,
        }
    }

    /// Threshold, in standard deviations, for the given distribution mode.
    #[must_use]
    pub fn threshold(self, mode: DistributionMode) -> f64 {
        match (self, mode) {
            (Self::P95, DistributionMode::Normal) => 1.645,
            (Self::P95, DistributionMode::FatTailed) => 1.8,
            (Self::P99, DistributionMode::Normal) => 2.326,
            (Self::P99, DistributionMode::FatTailed) => 2.8,
            (Self::P999, DistributionMode::Normal) => 3.09,
            (Self::P999, DistributionMode::FatTailed) => 4.0,
        }
    }
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.percent())
    }
}

impl FromStr for ConfidenceLevel {
    type Err = AnalyticsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().trim_end_matches('%') {
            "95" | "0.95" => Ok(Self::P95),
            "99" | "0.99" => Ok(Self::P99),
            "99.9" | "0.999" => Ok(Self::P999),
            other => Err(AnalyticsError::invalid_input(format!(
                "unsupported confidence level: {other} (use 95, 99 or 99.9)"
            ))),
        }
    }
}

/// A sampled density curve with its VaR threshold.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TailCurve {
    /// Distribution shape.
    pub mode: DistributionMode,
    /// Confidence level.
    pub confidence: ConfidenceLevel,
    /// Threshold in standard deviations (positive).
    pub threshold: f64,
    /// `(x, density)` samples, 100 points on [-4, 4] unless another grid is given.
    pub points: Vec<(f64, f64)>,
}

impl TailCurve {
    /// Samples the curve on the default grid.
    #[must_use]
    pub fn new(mode: DistributionMode, confidence: ConfidenceLevel) -> Self {
        Self::with_grid(mode, confidence, DEFAULT_GRID)
    }

    /// Samples the curve on a custom grid.
    #[must_use]
    pub fn with_grid(mode: DistributionMode, confidence: ConfidenceLevel, grid: GridSpec) -> Self {
        Self {
            mode,
            confidence,
            threshold: confidence.threshold(mode),
            points: sample_density(mode, grid),
        }
    }

    /// The shaded loss tail: samples with `x <= -threshold`.
    pub fn tail_region(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        let cut = -self.threshold;
        self.points.iter().copied().filter(move |(x, _)| *x <= cut)
    }

    /// Probability mass of the shaded tail, by trapezoid rule on the samples.
    #[must_use]
    pub fn shaded_mass(&self) -> f64 {
        tail_mass(&self.points, -self.threshold)
    }
}

/// A parametric VaR figure.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VarEstimate {
    /// Loss not expected to be exceeded at the confidence level.
    pub var: f64,
    /// Threshold used (standard deviations).
    pub threshold: f64,
    /// Distribution shape.
    pub mode: DistributionMode,
    /// Confidence level.
    pub confidence: ConfidenceLevel,
}

impl fmt::Display for VarEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "VaR({}, {}): {:.2}",
            self.confidence, self.mode, self.var
        )
    }
}

/// Parametric VaR: value × volatility × threshold.
///
/// `volatility` is the standard deviation of returns over the horizon, in percent.
///
/// # Errors
///
/// Returns an error for negative volatility.
pub fn parametric_var(
    portfolio_value: f64,
    volatility: f64,
    mode: DistributionMode,
    confidence: ConfidenceLevel,
) -> AnalyticsResult<VarEstimate> {
    if volatility < 0.0 {
        return Err(AnalyticsError::invalid_input(
            "volatility cannot be negative",
        ));
    }

    let threshold = confidence.threshold(mode);
    Ok(VarEstimate {
        var: portfolio_value * (volatility / 100.0) * threshold,
        threshold,
        mode,
        confidence,
    })
}
