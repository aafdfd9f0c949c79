//! Grid sampling for density curves.

use serde::{Deserialize, Serialize};

use super::DistributionMode;
use crate::error::{MathError, MathResult};

/// An evenly spaced, inclusive sampling grid.
///
/// Always holds at least two points over finite, increasing bounds. Use
/// [`GridSpec::new`] or deserialize; both validate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawGrid", into = "RawGrid")]
pub struct GridSpec {
    start: f64,
    end: f64,
    points: usize,
}

/// Unvalidated wire form of [`GridSpec`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct RawGrid {
    start: f64,
    end: f64,
    points: usize,
}

impl TryFrom<RawGrid> for GridSpec {
    type Error = MathError;

    fn try_from(raw: RawGrid) -> MathResult<Self> {
        Self::new(raw.start, raw.end, raw.points)
    }
}

impl From<GridSpec> for RawGrid {
    fn from(grid: GridSpec) -> Self {
        Self {
            start: grid.start,
            end: grid.end,
            points: grid.points,
        }
    }
}

/// 100 points from -4σ to +4σ.
pub const DEFAULT_GRID: GridSpec = GridSpec {
    start: -4.0,
    end: 4.0,
    points: 100,
};

impl GridSpec {
    /// Creates a grid specification.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than 2 points are requested or the bounds are
    /// not finite and strictly increasing.
    pub fn new(start: f64, end: f64, points: usize) -> MathResult<Self> {
        if points < 2 {
            return Err(MathError::insufficient_data(2, points));
        }
        if !start.is_finite() || !end.is_finite() || start >= end {
            return Err(MathError::invalid_input(format!(
                "grid bounds must be finite with start < end: [{start}, {end}]"
            )));
        }
        Ok(Self { start, end, points })
    }

    /// First sample.
    #[must_use]
    pub fn start(&self) -> f64 {
        self.start
    }

    /// Last sample.
    #[must_use]
    pub fn end(&self) -> f64 {
        self.end
    }

    /// Number of samples, including both ends.
    #[must_use]
    pub fn points(&self) -> usize {
        self.points
    }

    /// Distance between neighbouring samples.
    #[must_use]
    pub fn step(&self) -> f64 {
        (self.end - self.start) / (self.points - 1) as f64
    }
}

impl Default for GridSpec {
    fn default() -> Self {
        DEFAULT_GRID
    }
}

/// Returns the grid's sample positions.
pub fn sample_grid(grid: GridSpec) -> Vec<f64> {
    let step = grid.step();
    (0..grid.points)
        .map(|i| {
            if i + 1 == grid.points {
                grid.end
            } else {
                grid.start + step * i as f64
            }
        })
        .collect()
}

/// Samples a density over the grid as `(x, density)` pairs.
pub fn sample_density(mode: DistributionMode, grid: GridSpec) -> Vec<(f64, f64)> {
    sample_grid(grid)
        .into_iter()
        .map(|x| (x, mode.density(x)))
        .collect()
}

/// Trapezoid area under the sampled points with `x <= threshold`.
///
/// The points must be sorted by x. A threshold that falls between two
/// samples closes the area at the last sample left of it.
pub fn tail_mass(points: &[(f64, f64)], threshold: f64) -> f64 {
    points
        .windows(2)
        .take_while(|w| w[1].0 <= threshold)
        .map(|w| {
            let (x0, y0) = w[0];
            let (x1, y1) = w[1];
            0.5 * (y0 + y1) * (x1 - x0)
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_grid_endpoints() {
        let xs = sample_grid(DEFAULT_GRID);
        assert_eq!(xs.len(), 100);
        assert_eq!(xs[0], -4.0);
        assert_eq!(xs[99], 4.0);
        assert!(xs.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn test_grid_validation() {
        assert!(GridSpec::new(-1.0, 1.0, 1).is_err());
        assert!(GridSpec::new(1.0, -1.0, 10).is_err());
        assert!(GridSpec::new(f64::NEG_INFINITY, 1.0, 10).is_err());
        assert!(GridSpec::new(-1.0, 1.0, 2).is_ok());
    }

    #[test]
    fn test_deserialize_validates() {
        let grid: GridSpec =
            serde_json::from_str(r#"{"start": -2.0, "end": 2.0, "points": 5}"#).unwrap();
        assert_eq!(grid.points(), 5);
        assert_relative_eq!(grid.step(), 1.0);

        assert!(serde_json::from_str::<GridSpec>(r#"{"start": -4.0, "end": 4.0, "points": 0}"#).is_err());
        assert!(serde_json::from_str::<GridSpec>(r#"{"start": 4.0, "end": -4.0, "points": 10}"#).is_err());
    }

    #[test]
    fn test_serialize_keeps_field_names() {
        let json = serde_json::to_value(DEFAULT_GRID).unwrap();
        assert_eq!(json["points"], 100);
        assert_eq!(json["start"], -4.0);
    }

    #[test]
    fn test_sampled_curve_symmetric() {
        for mode in DistributionMode::ALL {
            let curve = sample_density(mode, DEFAULT_GRID);
            for (i, (x, y)) in curve.iter().enumerate() {
                let (mx, my) = curve[curve.len() - 1 - i];
                assert_relative_eq!(*x, -mx, epsilon = 1e-12);
                assert_relative_eq!(*y, my, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_total_mass_near_one() {
        let grid = GridSpec::new(-8.0, 8.0, 2001).unwrap();
        let normal = sample_density(DistributionMode::Normal, grid);
        assert_relative_eq!(tail_mass(&normal, 8.0), 1.0, epsilon = 1e-4);
    }

    #[test]
    fn test_tail_mass_left_of_threshold() {
        let grid = GridSpec::new(-8.0, 8.0, 4001).unwrap();
        let normal = sample_density(DistributionMode::Normal, grid);
        let fat = sample_density(DistributionMode::FatTailed, grid);

        // P(Z <= -1.645) is about 5%.
        assert_relative_eq!(tail_mass(&normal, -1.645), 0.05, epsilon = 2e-3);
        // Fat tails put more weight beyond the same cut.
        assert!(tail_mass(&fat, -2.326) > tail_mass(&normal, -2.326));
        assert_eq!(tail_mass(&normal, -9.0), 0.0);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn prop_tail_mass_monotone(a in -5.0f64..5.0, b in -5.0f64..5.0) {
                let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
                for mode in DistributionMode::ALL {
                    let curve = sample_density(mode, DEFAULT_GRID);
                    let low = tail_mass(&curve, lo);
                    let high = tail_mass(&curve, hi);
                    prop_assert!(low >= 0.0);
                    prop_assert!(low <= high + 1e-12);
                    prop_assert!(high <= 1.0);
                }
            }

            #[test]
            fn prop_grid_is_evenly_spaced(start in -10.0f64..0.0, width in 0.5f64..20.0, points in 2usize..500) {
                let grid = GridSpec::new(start, start + width, points).unwrap();
                let xs = sample_grid(grid);
                prop_assert_eq!(xs.len(), points);
                prop_assert_eq!(xs[0], grid.start());
                for w in xs.windows(2) {
                    prop_assert!((w[1] - w[0] - grid.step()).abs() < 1e-9);
                }
            }
        }
    }
}
