//! Credit analytics: probability of default from a credit score.
//!
//! The default curve is a piecewise-linear read of a score/PD anchor table.
//! Scores outside the table follow the nearest edge segment, and the result
//! is clamped into `[floor, cap]`.
//!
//! ## Formula
//!
//! ```text
//! PD(S) = clamp(pd_i + (S - s_i) × (pd_{i+1} - pd_i) / (s_{i+1} - s_i), floor, cap)
//! EL    = PD × LGD × EAD
//! ```

mod band;

pub use band::CreditBand;

use primer_math::interpolation::{Interpolator, LinearInterpolator};
use serde::{Deserialize, Serialize};

use crate::error::{AnalyticsError, AnalyticsResult};

/// A single point of the score/PD table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreAnchor {
    /// Credit score.
    pub score: f64,
    /// Probability of default at that score (percent).
    pub pd: f64,
}

impl ScoreAnchor {
    /// Creates a new anchor.
    #[must_use]
    pub const fn new(score: f64, pd: f64) -> Self {
        Self { score, pd }
    }
}

/// Standard score/PD table. PD falls as the score improves.
pub const DEFAULT_SCORE_ANCHORS: [ScoreAnchor; 10] = [
    ScoreAnchor::new(300.0, 45.0),
    ScoreAnchor::new(500.0, 25.0),
    ScoreAnchor::new(580.0, 15.0),
    ScoreAnchor::new(620.0, 10.0),
    ScoreAnchor::new(670.0, 7.0),
    ScoreAnchor::new(700.0, 5.0),
    ScoreAnchor::new(740.0, 3.0),
    ScoreAnchor::new(780.0, 1.5),
    ScoreAnchor::new(800.0, 1.0),
    ScoreAnchor::new(850.0, 0.5),
];

/// Lower and upper bounds applied to every PD (percent).
///
/// Always satisfies `0 <= floor <= cap <= 100`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawPdBounds", into = "RawPdBounds")]
pub struct PdBounds {
    floor: f64,
    cap: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct RawPdBounds {
    floor: f64,
    cap: f64,
}

impl TryFrom<RawPdBounds> for PdBounds {
    type Error = AnalyticsError;

    fn try_from(raw: RawPdBounds) -> AnalyticsResult<Self> {
        Self::new(raw.floor, raw.cap)
    }
}

impl From<PdBounds> for RawPdBounds {
    fn from(bounds: PdBounds) -> Self {
        Self {
            floor: bounds.floor,
            cap: bounds.cap,
        }
    }
}

impl PdBounds {
    /// Creates bounds, checking `0 <= floor <= cap <= 100`.
    ///
    /// # Errors
    ///
    /// Returns an error if either bound is outside 0..=100 or the floor is
    /// above the cap.
    pub fn new(floor: f64, cap: f64) -> AnalyticsResult<Self> {
        if !(0.0..=100.0).contains(&floor) || !(0.0..=100.0).contains(&cap) || floor > cap {
            return Err(AnalyticsError::invalid_input(format!(
                "PD bounds must satisfy 0 <= floor <= cap <= 100, got [{floor}, {cap}]"
            )));
        }
        Ok(Self { floor, cap })
    }

    /// Minimum PD.
    #[must_use]
    pub fn floor(&self) -> f64 {
        self.floor
    }

    /// Maximum PD.
    #[must_use]
    pub fn cap(&self) -> f64 {
        self.cap
    }

    /// Clamps a PD into the bounds.
    #[must_use]
    pub fn clamp(&self, pd: f64) -> f64 {
        pd.max(self.floor).min(self.cap)
    }
}

impl Default for PdBounds {
    fn default() -> Self {
        Self {
            floor: 0.5,
            cap: 50.0,
        }
    }
}

/// Credit score to probability-of-default curve.
#[derive(Debug, Clone)]
pub struct DefaultCurve {
    anchors: Vec<ScoreAnchor>,
    interpolator: LinearInterpolator,
    bounds: PdBounds,
}

impl DefaultCurve {
    /// Builds a curve from an anchor table.
    ///
    /// Anchors are sorted by score; repeated scores are allowed.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than two anchors are given or any value is
    /// not finite.
    pub fn new(anchors: &[ScoreAnchor]) -> AnalyticsResult<Self> {
        let mut anchors = anchors.to_vec();
        anchors.sort_by(|a, b| a.score.total_cmp(&b.score));

        let scores = anchors.iter().map(|a| a.score).collect();
        let pds = anchors.iter().map(|a| a.pd).collect();
        let interpolator = LinearInterpolator::new(scores, pds)?.with_extrapolation();

        Ok(Self {
            anchors,
            interpolator,
            bounds: PdBounds::default(),
        })
    }

    /// The curve built on [`DEFAULT_SCORE_ANCHORS`] with default bounds.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(&DEFAULT_SCORE_ANCHORS).expect("standard anchor table should always be valid")
    }

    /// Replaces the PD bounds.
    #[must_use]
    pub fn with_bounds(mut self, bounds: PdBounds) -> Self {
        self.bounds = bounds;
        self
    }

    /// The anchor table, sorted by score.
    pub fn anchors(&self) -> &[ScoreAnchor] {
        &self.anchors
    }

    /// The PD bounds in force.
    pub fn bounds(&self) -> PdBounds {
        self.bounds
    }

    /// Probability of default (percent) at the given score.
    pub fn probability_of_default(&self, score: f64) -> f64 {
        // Extrapolation is enabled, so the only failure mode is a NaN query.
        let raw = self.interpolator.interpolate(score).unwrap_or(self.bounds.cap);
        let pd = if raw.is_nan() { self.bounds.cap } else { raw };
        self.bounds.clamp(pd)
    }
}

impl Default for DefaultCurve {
    fn default() -> Self {
        Self::standard()
    }
}

/// Expected loss in the exposure's units: PD × LGD × EAD.
///
/// `pd` and `lgd` are percentages.
#[must_use]
pub fn expected_loss(pd: f64, lgd: f64, exposure: f64) -> f64 {
    (pd / 100.0) * (lgd / 100.0) * exposure
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_anchor_points_exact() {
        let curve = DefaultCurve::standard();
        for anchor in DEFAULT_SCORE_ANCHORS {
            assert_eq!(curve.probability_of_default(anchor.score), anchor.pd);
        }
        assert_eq!(curve.probability_of_default(700.0), 5.0);
    }

    #[test]
    fn test_between_anchors() {
        let curve = DefaultCurve::standard();
        // Halfway between (670, 7) and (700, 5).
        assert_relative_eq!(curve.probability_of_default(685.0), 6.0, epsilon = 1e-12);
    }

    #[test]
    fn test_out_of_table_clamped() {
        let curve = DefaultCurve::standard();
        assert_eq!(curve.probability_of_default(250.0), 50.0);
        assert_eq!(curve.probability_of_default(100.0), 50.0);
        assert_eq!(curve.probability_of_default(900.0), 0.5);
        assert_eq!(curve.probability_of_default(f64::NAN), 50.0);
    }

    #[test]
    fn test_left_edge_segment_before_clamp() {
        // Slope of the first segment is -0.1 per point: 280 reads 47.
        let curve = DefaultCurve::standard();
        assert_relative_eq!(curve.probability_of_default(280.0), 47.0, epsilon = 1e-12);
    }

    #[test]
    fn test_custom_bounds() {
        let curve = DefaultCurve::standard().with_bounds(PdBounds::new(2.0, 20.0).unwrap());
        assert_eq!(curve.probability_of_default(300.0), 20.0);
        assert_eq!(curve.probability_of_default(800.0), 2.0);
        assert_eq!(curve.probability_of_default(700.0), 5.0);
    }

    #[test]
    fn test_invalid_bounds() {
        assert!(PdBounds::new(10.0, 5.0).is_err());
        assert!(PdBounds::new(-1.0, 5.0).is_err());
        assert!(PdBounds::new(0.0, 101.0).is_err());
    }

    #[test]
    fn test_deserialized_bounds_are_checked() {
        let bounds: PdBounds = serde_json::from_str(r#"{"floor": 1.0, "cap": 30.0}"#).unwrap();
        assert_eq!(bounds.floor(), 1.0);
        assert_eq!(bounds.cap(), 30.0);

        assert!(serde_json::from_str::<PdBounds>(r#"{"floor": 10.0, "cap": 5.0}"#).is_err());
        assert!(serde_json::from_str::<PdBounds>(r#"{"floor": -1.0, "cap": 5.0}"#).is_err());
    }

    #[test]
    fn test_equal_floor_and_cap() {
        let curve = DefaultCurve::standard().with_bounds(PdBounds::new(5.0, 5.0).unwrap());
        for score in [300.0, 650.0, 700.0, 850.0, f64::INFINITY] {
            assert_eq!(curve.probability_of_default(score), 5.0);
        }
    }

    #[test]
    fn test_unsorted_anchors_are_sorted() {
        let anchors = [
            ScoreAnchor::new(800.0, 1.0),
            ScoreAnchor::new(600.0, 10.0),
            ScoreAnchor::new(700.0, 5.0),
        ];
        let curve = DefaultCurve::new(&anchors).unwrap();
        assert_eq!(curve.anchors()[0].score, 600.0);
        assert_relative_eq!(curve.probability_of_default(650.0), 7.5, epsilon = 1e-12);
    }

    #[test]
    fn test_duplicate_scores() {
        let anchors = [
            ScoreAnchor::new(600.0, 12.0),
            ScoreAnchor::new(650.0, 9.0),
            ScoreAnchor::new(650.0, 6.0),
            ScoreAnchor::new(700.0, 5.0),
        ];
        let curve = DefaultCurve::new(&anchors).unwrap();
        assert!(curve.probability_of_default(650.0).is_finite());
        assert_relative_eq!(curve.probability_of_default(675.0), 5.5, epsilon = 1e-12);
    }

    #[test]
    fn test_too_few_anchors() {
        assert!(DefaultCurve::new(&[ScoreAnchor::new(700.0, 5.0)]).is_err());
        assert!(DefaultCurve::new(&[]).is_err());
    }

    #[test]
    fn test_expected_loss() {
        // 5% PD, 40% LGD on 1,000,000 exposure.
        assert_relative_eq!(expected_loss(5.0, 40.0, 1_000_000.0), 20_000.0, epsilon = 1e-6);
        assert_eq!(expected_loss(0.0, 40.0, 1_000_000.0), 0.0);
    }
}
