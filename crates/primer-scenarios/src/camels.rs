//! CAMELS supervisory ratings.
//!
//! Each component is rated 1 (strongest) to 5 (weakest). The composite shown
//! in the diagrams is the rounded mean of the components; real supervisors
//! weigh components with judgment, so treat it as illustrative.

use serde::Serialize;
use std::fmt;

/// The six CAMELS components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CamelsComponent {
    /// Capital adequacy.
    Capital,
    /// Asset quality.
    AssetQuality,
    /// Management.
    Management,
    /// Earnings.
    Earnings,
    /// Liquidity.
    Liquidity,
    /// Sensitivity to market risk.
    Sensitivity,
}

impl CamelsComponent {
    /// Components in C-A-M-E-L-S order.
    pub const ALL: [CamelsComponent; 6] = [
        Self::Capital,
        Self::AssetQuality,
        Self::Management,
        Self::Earnings,
        Self::Liquidity,
        Self::Sensitivity,
    ];

    /// The component's letter.
    pub fn letter(self) -> char {
        match self {
            Self::Capital => 'C',
            Self::AssetQuality => 'A',
            Self::Management => 'M',
            Self::Earnings => 'E',
            Self::Liquidity => 'L',
            Self::Sensitivity => 'S',
        }
    }

    /// Full name.
    pub fn label(self) -> &'static str {
        match self {
            Self::Capital => "Capital Adequacy",
            Self::AssetQuality => "Asset Quality",
            Self::Management => "Management",
            Self::Earnings => "Earnings",
            Self::Liquidity => "Liquidity",
            Self::Sensitivity => "Sensitivity to Market Risk",
        }
    }

    /// What examiners look at.
    pub fn focus(self) -> &'static str {
        match self {
            Self::Capital => "Capital levels relative to risk, growth and dividend plans",
            Self::AssetQuality => "Loan performance, concentrations and reserve coverage",
            Self::Management => "Board oversight, risk controls and compliance",
            Self::Earnings => "Level, trend and quality of profits",
            Self::Liquidity => "Funding sources and ability to meet outflows",
            Self::Sensitivity => "Exposure of earnings and capital to rate moves",
        }
    }
}

impl fmt::Display for CamelsComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A rating for one component.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CamelsRating {
    /// Component rated.
    pub component: CamelsComponent,
    /// 1 (strong) to 5 (unsatisfactory).
    pub rating: u8,
    /// Examiner's one-line note.
    pub note: &'static str,
}

impl CamelsRating {
    /// Creates a rating.
    pub const fn new(component: CamelsComponent, rating: u8, note: &'static str) -> Self {
        Self {
            component,
            rating,
            note,
        }
    }

    /// Word for the rating.
    pub fn descriptor(&self) -> &'static str {
        rating_descriptor(self.rating)
    }
}

/// Word for a 1-5 rating.
pub fn rating_descriptor(rating: u8) -> &'static str {
    match rating {
        0 | 1 => "Strong",
        2 => "Satisfactory",
        3 => "Fair",
        4 => "Marginal",
        _ => "Unsatisfactory",
    }
}

/// Arithmetic mean of the component ratings; `None` when there are none.
pub fn average_rating(ratings: &[CamelsRating]) -> Option<f64> {
    if ratings.is_empty() {
        return None;
    }
    let total: u32 = ratings.iter().map(|r| u32::from(r.rating)).sum();
    Some(f64::from(total) / ratings.len() as f64)
}

/// Composite rating: the mean rounded to the nearest whole rating, within 1..=5.
pub fn composite_rating(ratings: &[CamelsRating]) -> Option<u8> {
    // Mean of u8 ratings lies within 0..=255, so the cast cannot truncate.
    average_rating(ratings).map(|mean| mean.round().clamp(1.0, 5.0) as u8)
}
