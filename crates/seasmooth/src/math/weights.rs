//! Weight functions for local regression.
//!
//! ## Purpose
//!
//! This module converts distances and residuals into per-neighbour weights:
//! the tricube kernel for distance from the target point and the bisquare
//! function for robust downweighting of large residuals.
//!
//! ## Design notes
//!
//! * **Square-root weights**: Both functions return the square root of the
//!   conventional weight. The fitter scales design rows by these values, which
//!   reproduces weighted least squares through ordinary least squares.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Tricube**: `(1 - d^3)^1.5` on distances normalised to `[0, 1]`.
//! * **Bisquare**: `|1 - u^2|` for `|u| < 1`, with `u = r / (6 s)`.
//! * **Flat fallback**: A tricube vector that is numerically zero everywhere
//!   is replaced by ones.
//!
//! ## Invariants
//!
//! * All weights are in [0, 1].
//! * Tricube weights are non-increasing in distance.
//! * Missing residuals receive zero robust weight.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::scaling::median_abs;

// ============================================================================
// Constants
// ============================================================================

/// Tuning constant applied to the median absolute residual (Cleveland, 1979).
pub const BISQUARE_TUNING: f64 = 6.0;

/// Multiple of machine epsilon bounding the residual scale away from zero.
pub const SCALE_FLOOR_EPS_MULTIPLE: f64 = 1e8;

// ============================================================================
// Tricube
// ============================================================================

/// Compute square-root tricube weights for a vector of distances.
///
/// # Formula
///
/// d_max = max(d)
/// u = d / d_max          (u = d when d_max == 0)
/// w = (1 - u^3)^(3/2)
///
/// If every `w` is below `sqrt(eps)` the whole vector is replaced by ones.
pub fn tricube_weights<T: Float>(distances: &[T]) -> Vec<T> {
    let max_d = distances
        .iter()
        .copied()
        .fold(T::zero(), |acc, d| if d > acc { d } else { acc });

    let exponent = T::from(1.5).unwrap_or_else(T::one);
    let mut weights: Vec<T> = distances
        .iter()
        .map(|&d| {
            let u = if max_d > T::zero() { d / max_d } else { d };
            let base = T::one() - u * u * u;
            // Guards against tiny negative bases from rounding
            base.max(T::zero()).powf(exponent)
        })
        .collect();

    let seps = T::epsilon().sqrt();
    if !weights.is_empty() && weights.iter().all(|&w| w < seps) {
        weights.iter_mut().for_each(|w| *w = T::one());
    }

    weights
}

// ============================================================================
// Bisquare
// ============================================================================

/// Compute square-root bisquare robustness weights for a residual vector.
///
/// # Formula
///
/// s = max(1e8 * eps, median(|r|))   over non-missing r
/// u = r / (6 s)
/// w = |1 - u^2|   if |u| < 1
/// w = 0           otherwise, or when r is missing
pub fn bisquare_weights<T: Float>(residuals: &[T]) -> Vec<T> {
    let mut scratch = Vec::with_capacity(residuals.len());
    let median = match median_abs(residuals, &mut scratch) {
        Some(m) => m,
        None => return vec![T::zero(); residuals.len()],
    };

    let floor = T::from(SCALE_FLOOR_EPS_MULTIPLE).unwrap_or_else(T::one) * T::epsilon();
    let scale = floor.max(median);
    let cutoff = T::from(BISQUARE_TUNING).unwrap_or_else(T::one) * scale;

    residuals
        .iter()
        .map(|&r| bisquare(r / cutoff))
        .collect()
}

/// Square-root bisquare function on a scaled residual.
#[inline]
pub fn bisquare<T: Float>(u: T) -> T {
    if u.is_nan() || u.abs() >= T::one() {
        T::zero()
    } else {
        (T::one() - u * u).abs()
    }
}
