//! # Primer Math
//!
//! Mathematical utilities for the Primer banking analytics library.
//!
//! This crate provides:
//!
//! - **Interpolation**: Piecewise-linear interpolation over anchor tables
//! - **Distributions**: Normal and fat-tailed densities, grid sampling, tail mass
//!
//! ## Design Philosophy
//!
//! - **Illustrative First**: Formulas mirror what a teaching diagram shows
//! - **Total Functions**: Evaluation never fails once inputs are constructed
//! - **Explicit Edges**: Zero-width segments and out-of-range queries are handled

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::float_cmp)]

pub mod distribution;
pub mod error;
pub mod interpolation;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::distribution::{
        sample_density, sample_grid, tail_mass, DistributionMode, GridSpec, DEFAULT_GRID,
        FAT_TAIL_DEGREES_OF_FREEDOM, FAT_TAIL_NORMALIZER, NORMAL_NORMALIZER,
    };
    pub use crate::error::{MathError, MathResult};
    pub use crate::interpolation::{Interpolator, LinearInterpolator};
}

pub use error::{MathError, MathResult};
