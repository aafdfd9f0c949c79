//! Probability densities for tail-risk plots.
//!
//! Two shapes are offered: the standard normal and a fat-tailed Student-t
//! with three degrees of freedom. Both are standardized (centered at zero)
//! and are meant to be sampled on a fixed grid for plotting.
//!
//! ## Formulas
//!
//! ```text
//! normal(x)    = exp(-x²/2) / √(2π)
//! fat_tail(x)  = K × (1 + x²/3)^-2,   K = 2 / (π√3)
//! ```

mod grid;

pub use grid::{sample_density, sample_grid, tail_mass, GridSpec, DEFAULT_GRID};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::MathError;

/// 1 / √(2π).
pub const NORMAL_NORMALIZER: f64 = 0.3989422804014327;

/// Degrees of freedom of the fat-tailed density.
pub const FAT_TAIL_DEGREES_OF_FREEDOM: f64 = 3.0;

/// Normalizing constant of the fat-tailed density, 2 / (π√3).
pub const FAT_TAIL_NORMALIZER: f64 = 0.3675525969478614;

/// Shape of the return distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DistributionMode {
    /// Standard Gaussian.
    #[default]
    Normal,
    /// Student-t with three degrees of freedom.
    FatTailed,
}

impl DistributionMode {
    /// All modes, in display order.
    pub const ALL: [DistributionMode; 2] = [DistributionMode::Normal, DistributionMode::FatTailed];

    /// Probability density at the standardized value `x`.
    pub fn density(self, x: f64) -> f64 {
        match self {
            Self::Normal => NORMAL_NORMALIZER * (-0.5 * x * x).exp(),
            Self::FatTailed => {
                let base = 1.0 + x * x / FAT_TAIL_DEGREES_OF_FREEDOM;
                FAT_TAIL_NORMALIZER / (base * base)
            }
        }
    }

    /// Short machine-readable name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::FatTailed => "fat-tailed",
        }
    }
}

impl fmt::Display for DistributionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DistributionMode {
    type Err = MathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "normal" | "gaussian" => Ok(Self::Normal),
            "fat-tailed" | "fat_tailed" | "fat" | "student-t" => Ok(Self::FatTailed),
            other => Err(MathError::invalid_input(format!(
                "unknown distribution mode: {other}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use statrs::distribution::{Continuous, Normal, StudentsT};

    #[test]
    fn test_normal_matches_reference() {
        let reference = Normal::new(0.0, 1.0).unwrap();
        for x in [-3.5, -1.0, 0.0, 0.25, 1.645, 2.326] {
            assert_relative_eq!(
                DistributionMode::Normal.density(x),
                reference.pdf(x),
                epsilon = 1e-12
            );
        }
    }

    #[test]
    fn test_fat_tail_matches_student_t() {
        let reference = StudentsT::new(0.0, 1.0, 3.0).unwrap();
        for x in [-4.0, -1.8, 0.0, 1.0, 2.8] {
            assert_relative_eq!(
                DistributionMode::FatTailed.density(x),
                reference.pdf(x),
                epsilon = 1e-10
            );
        }
    }

    #[test]
    fn test_peak_at_zero() {
        for mode in DistributionMode::ALL {
            let peak = mode.density(0.0);
            for x in [-2.0, -0.5, -0.01, 0.01, 0.5, 2.0] {
                assert!(mode.density(x) < peak, "{mode} density at {x} exceeds peak");
            }
        }
        assert_relative_eq!(DistributionMode::Normal.density(0.0), NORMAL_NORMALIZER);
        assert_relative_eq!(DistributionMode::FatTailed.density(0.0), FAT_TAIL_NORMALIZER);
    }

    #[test]
    fn test_fat_tail_heavier_in_tails() {
        for x in [3.0, 4.0, 5.0] {
            assert!(DistributionMode::FatTailed.density(x) > DistributionMode::Normal.density(x));
        }
    }

    #[test]
    fn test_parse_mode() {
        assert_eq!("normal".parse::<DistributionMode>().unwrap(), DistributionMode::Normal);
        assert_eq!(
            "Fat-Tailed".parse::<DistributionMode>().unwrap(),
            DistributionMode::FatTailed
        );
        assert!("cauchy".parse::<DistributionMode>().is_err());
    }
}
