//! Credit score bands.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Consumer credit score band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CreditBand {
    /// Below 580.
    Poor,
    /// 580 to 669.
    Fair,
    /// 670 to 739.
    Good,
    /// 740 to 799.
    VeryGood,
    /// 800 and above.
    Exceptional,
}

impl CreditBand {
    /// Classifies a score.
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        match score {
            s if s >= 800.0 => Self::Exceptional,
            s if s >= 740.0 => Self::VeryGood,
            s if s >= 670.0 => Self::Good,
            s if s >= 580.0 => Self::Fair,
            _ => Self::Poor,
        }
    }

    /// Human-readable label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Poor => "Poor",
            Self::Fair => "Fair",
            Self::Good => "Good",
            Self::VeryGood => "Very Good",
            Self::Exceptional => "Exceptional",
        }
    }
}

impl fmt::Display for CreditBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_boundaries() {
        assert_eq!(CreditBand::from_score(579.9), CreditBand::Poor);
        assert_eq!(CreditBand::from_score(580.0), CreditBand::Fair);
        assert_eq!(CreditBand::from_score(670.0), CreditBand::Good);
        assert_eq!(CreditBand::from_score(740.0), CreditBand::VeryGood);
        assert_eq!(CreditBand::from_score(850.0), CreditBand::Exceptional);
        assert!(CreditBand::Exceptional > CreditBand::Poor);
    }
}
