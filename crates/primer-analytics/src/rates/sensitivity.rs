//! Duration/convexity price sensitivity.

use serde::{Deserialize, Serialize};

/// Breakdown of an estimated price change. All changes are in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceSensitivity {
    /// Modified duration (years).
    pub modified_duration: f64,
    /// Approximate convexity.
    pub convexity: f64,
    /// New rate minus current rate, in percentage points.
    pub rate_change: f64,
    /// First-order (duration) contribution.
    pub duration_effect: f64,
    /// Second-order (convexity) contribution.
    pub convexity_effect: f64,
    /// Total estimated price change.
    pub price_change: f64,
}

/// Modified duration from a duration and the current rate (percent).
#[must_use]
pub fn modified_duration(duration: f64, current_rate: f64) -> f64 {
    duration / (1.0 + current_rate / 100.0)
}

/// Convexity approximated from duration and the current rate (percent).
#[must_use]
pub fn approximate_convexity(duration: f64, current_rate: f64) -> f64 {
    let discount = 1.0 + current_rate / 100.0;
    duration * (duration + 1.0) / (2.0 * discount * discount)
}

/// Estimates the percentage price change when rates move from `current_rate`
/// to `new_rate` (both percent) for a position of the given duration.
#[must_use]
pub fn price_change(duration: f64, current_rate: f64, new_rate: f64) -> PriceSensitivity {
    let modified = modified_duration(duration, current_rate);
    let convexity = approximate_convexity(duration, current_rate);

    let rate_change = new_rate - current_rate;
    let dy = rate_change / 100.0;

    let duration_effect = -modified * dy * 100.0;
    let convexity_effect = 0.5 * convexity * dy * dy * 100.0;

    PriceSensitivity {
        modified_duration: modified,
        convexity,
        rate_change,
        duration_effect,
        convexity_effect,
        price_change: duration_effect + convexity_effect,
    }
}
