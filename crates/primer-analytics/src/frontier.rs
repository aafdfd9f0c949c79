//! Risk/return frontier.
//!
//! A concave curve that rises with the square root of risk:
//!
//! ```text
//! E[R] = r_f + a × √risk,   risk ∈ [0, 100]
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{AnalyticsError, AnalyticsResult};

/// Upper end of the risk scale.
pub const MAX_RISK: f64 = 100.0;

/// A sampled point on the frontier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrontierPoint {
    /// Risk level on the 0..=100 scale.
    pub risk: f64,
    /// Expected return (percent).
    pub expected_return: f64,
}

/// Square-root risk/return frontier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskReturnFrontier {
    /// Return at zero risk (percent).
    pub risk_free_rate: f64,
    /// Scale of the square-root term.
    pub slope: f64,
}

impl RiskReturnFrontier {
    /// Creates a frontier.
    ///
    /// # Errors
    ///
    /// Returns an error unless the slope is positive and both parameters are finite.
    pub fn new(risk_free_rate: f64, slope: f64) -> AnalyticsResult<Self> {
        if !risk_free_rate.is_finite() || !slope.is_finite() || slope <= 0.0 {
            return Err(AnalyticsError::invalid_input(format!(
                "frontier needs a finite risk-free rate and a positive slope, got ({risk_free_rate}, {slope})"
            )));
        }
        Ok(Self {
            risk_free_rate,
            slope,
        })
    }

    /// Expected return (percent) at the given risk level.
    #[must_use]
    pub fn expected_return(&self, risk: f64) -> f64 {
        self.risk_free_rate + self.slope * risk.sqrt()
    }

    /// Risk premium over the risk-free rate at the given risk level.
    #[must_use]
    pub fn risk_premium(&self, risk: f64) -> f64 {
        self.expected_return(risk) - self.risk_free_rate
    }

    /// Samples the frontier at `points` evenly spaced risk levels over `[0, 100]`.
    #[must_use]
    pub fn sample(&self, points: usize) -> Vec<FrontierPoint> {
        match points {
            0 => Vec::new(),
            1 => vec![self.point(0.0)],
            n => (0..n)
                .map(|i| self.point(MAX_RISK * i as f64 / (n - 1) as f64))
                .collect(),
        }
    }

    fn point(&self, risk: f64) -> FrontierPoint {
        FrontierPoint {
            risk,
            expected_return: self.expected_return(risk),
        }
    }
}

impl Default for RiskReturnFrontier {
    fn default() -> Self {
        Self {
            risk_free_rate: 4.5,
            slope: 0.9,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_zero_risk_is_risk_free() {
        let frontier = RiskReturnFrontier::default();
        assert_eq!(frontier.expected_return(0.0), 4.5);
        assert_eq!(frontier.risk_premium(0.0), 0.0);
    }

    #[test]
    fn test_risk_45() {
        let frontier = RiskReturnFrontier::default();
        assert_relative_eq!(frontier.expected_return(45.0), 10.537383539, epsilon = 1e-9);
    }

    #[test]
    fn test_strictly_increasing_and_concave() {
        let frontier = RiskReturnFrontier::default();
        let points = frontier.sample(101);
        assert_eq!(points.len(), 101);
        assert_eq!(points[100].risk, 100.0);

        let gains: Vec<f64> = points
            .windows(2)
            .map(|w| w[1].expected_return - w[0].expected_return)
            .collect();
        assert!(gains.iter().all(|g| *g > 0.0));
        assert!(gains.windows(2).all(|g| g[1] < g[0]));
    }

    #[test]
    fn test_validation() {
        assert!(RiskReturnFrontier::new(4.5, 0.0).is_err());
        assert!(RiskReturnFrontier::new(f64::NAN, 0.9).is_err());
        assert!(RiskReturnFrontier::new(3.0, 1.2).is_ok());
    }

    #[test]
    fn test_sample_edge_counts() {
        let frontier = RiskReturnFrontier::default();
        assert!(frontier.sample(0).is_empty());
        assert_eq!(frontier.sample(1)[0].risk, 0.0);
    }
}
