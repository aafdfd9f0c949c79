//! Linear interpolation.

use crate::error::{MathError, MathResult};
use crate::interpolation::Interpolator;

/// Linear interpolation between data points.
///
/// Connects consecutive anchors with straight lines. Anchors may share an x
/// value, producing a zero-width segment; such segments evaluate to their left
/// endpoint instead of dividing by zero.
///
/// # Example
///
/// ```rust
/// use primer_math::interpolation::{Interpolator, LinearInterpolator};
///
/// let xs = vec![600.0, 700.0, 800.0];
/// let ys = vec![12.0, 5.0, 1.0];
///
/// let interp = LinearInterpolator::new(xs, ys).unwrap();
/// let y = interp.interpolate(650.0).unwrap();
/// assert!((y - 8.5).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct LinearInterpolator {
    xs: Vec<f64>,
    ys: Vec<f64>,
    allow_extrapolation: bool,
}

impl LinearInterpolator {
    /// Creates a new linear interpolator.
    ///
    /// # Arguments
    ///
    /// * `xs` - X coordinates (sorted in non-decreasing order)
    /// * `ys` - Y coordinates
    ///
    /// # Errors
    ///
    /// Returns an error if there are fewer than 2 points, if lengths differ,
    /// or if any coordinate is not finite.
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> MathResult<Self> {
        if xs.len() < 2 {
            return Err(MathError::insufficient_data(2, xs.len()));
        }
        if xs.len() != ys.len() {
            return Err(MathError::invalid_input(format!(
                "xs and ys must have same length: {} vs {}",
                xs.len(),
                ys.len()
            )));
        }
        if xs.iter().chain(ys.iter()).any(|v| !v.is_finite()) {
            return Err(MathError::invalid_input("coordinates must be finite"));
        }
        if xs.windows(2).any(|w| w[1] < w[0]) {
            return Err(MathError::invalid_input(
                "x values must be non-decreasing",
            ));
        }

        tracing::debug!(points = xs.len(), "built linear interpolator");

        Ok(Self {
            xs,
            ys,
            allow_extrapolation: false,
        })
    }

    /// Enables extrapolation beyond the data range along the edge segments.
    #[must_use]
    pub fn with_extrapolation(mut self) -> Self {
        self.allow_extrapolation = true;
        self
    }

    /// Returns the anchor points as `(x, y)` pairs.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.xs.iter().copied().zip(self.ys.iter().copied())
    }

    /// Finds the index i such that xs[i] <= x <= xs[i+1], clamped to the edge segments.
    fn find_segment(&self, x: f64) -> usize {
        let last_segment = self.xs.len() - 2;
        // First index whose x is strictly greater than the query.
        let upper = self.xs.partition_point(|probe| *probe <= x);
        upper.saturating_sub(1).min(last_segment)
    }

    fn check_bounds(&self, x: f64) -> MathResult<()> {
        if !self.allow_extrapolation && !self.in_range(x) {
            return Err(MathError::ExtrapolationNotAllowed {
                x,
                min: self.min_x(),
                max: self.max_x(),
            });
        }
        Ok(())
    }
}

impl Interpolator for LinearInterpolator {
    fn interpolate(&self, x: f64) -> MathResult<f64> {
        self.check_bounds(x)?;

        // Exact anchor hits return the stored value untouched.
        if let Some(i) = self.xs.iter().rposition(|probe| *probe == x) {
            return Ok(self.ys[i]);
        }

        let i = self.find_segment(x);

        let x0 = self.xs[i];
        let x1 = self.xs[i + 1];
        let y0 = self.ys[i];
        let y1 = self.ys[i + 1];

        let width = x1 - x0;
        if width == 0.0 {
            return Ok(y0);
        }

        let t = (x - x0) / width;
        Ok(y0 + t * (y1 - y0))
    }

    fn derivative(&self, x: f64) -> MathResult<f64> {
        self.check_bounds(x)?;

        let i = self.find_segment(x);
        let width = self.xs[i + 1] - self.xs[i];
        if width == 0.0 {
            return Ok(0.0);
        }

        Ok((self.ys[i + 1] - self.ys[i]) / width)
    }

    fn allows_extrapolation(&self) -> bool {
        self.allow_extrapolation
    }

    fn min_x(&self) -> f64 {
        self.xs[0]
    }

    fn max_x(&self) -> f64 {
        self.xs[self.xs.len() - 1]
    }
}
