//! Regression Logic
//!
//! ## Purpose
//!
//! This module provides the local weighted least-squares fit evaluated at a
//! single target point, including:
//! - The polynomial degree selector (LOWESS linear, LOESS quadratic).
//! - The row-scaled design matrix and its SVD solve.
//! - A per-point context that gathers neighbours, centres x, and fits.
//!
//! ## Design notes
//!
//! * **Centring**: x is shifted so the target sits at 0; the fitted value is
//!   then the intercept.
//! * **Row scaling**: Rows and targets are multiplied by square-root weights,
//!   turning WLS into an ordinary least-squares problem.
//! * **Square systems**: A zero row is appended when rows equal columns, so
//!   the solve is always a least-squares solve.
//! * **Precision**: The solve runs in `f64` through nalgebra's SVD, which
//!   yields the minimum-norm solution on rank-deficient systems.

// External dependencies
use nalgebra::{DMatrix, DVector, SVD};
use num_traits::Float;

// Internal dependencies
use crate::math::weights::tricube_weights;
use crate::primitives::errors::SmoothError;

// ============================================================================
// Polynomial Degree
// ============================================================================

/// Degree of the local polynomial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Degree {
    /// Local linear fit, columns `[1, x]` (LOWESS).
    #[default]
    Linear,

    /// Local quadratic fit, columns `[1, x, x^2]` (LOESS).
    Quadratic,
}

impl Degree {
    /// Number of polynomial coefficients.
    #[inline]
    pub const fn n_coeffs(self) -> usize {
        match self {
            Degree::Linear => 2,
            Degree::Quadratic => 3,
        }
    }
}

// ============================================================================
// Local Fit
// ============================================================================

/// Solve the row-weighted local least-squares problem and return the fitted
/// value at the centre (`x = 0`).
///
/// Returns `None` when the SVD does not converge or the intercept is not
/// finite.
pub fn fit_local<T: Float>(centered_x: &[T], y: &[T], weights: &[T], degree: Degree) -> Option<T> {
    let n = centered_x.len();
    let cols = degree.n_coeffs();
    if n == 0 {
        return None;
    }

    // Square systems get an extra zero row to force a least-squares solve
    let rows = if n == cols { n + 1 } else { n };

    let xs: Vec<f64> = centered_x.iter().map(|v| v.to_f64().unwrap_or(f64::NAN)).collect();
    let ws: Vec<f64> = weights.iter().map(|v| v.to_f64().unwrap_or(f64::NAN)).collect();

    let design = DMatrix::from_fn(rows, cols, |r, c| {
        if r >= n {
            return 0.0;
        }
        let xi = xs[r];
        let term = match c {
            0 => 1.0,
            1 => xi,
            _ => xi * xi,
        };
        ws[r] * term
    });
    let target = DVector::from_fn(rows, |r, _| {
        if r >= n {
            0.0
        } else {
            ws[r] * y[r].to_f64().unwrap_or(f64::NAN)
        }
    });

    let svd = SVD::try_new(design, true, true, f64::EPSILON, 0)?;

    // Relative cutoff for negligible singular values
    let max_sv = svd.singular_values.max();
    let tol = max_sv * f64::EPSILON * rows.max(cols) as f64;

    let coeffs = svd.solve(&target, tol).ok()?;
    let intercept = coeffs[0];
    if !intercept.is_finite() {
        return None;
    }

    T::from(intercept)
}

// ============================================================================
// Regression Context
// ============================================================================

/// Context containing all data needed to fit a single point.
pub struct RegressionContext<'a, T: Float> {
    /// Sorted x-values.
    pub x: &'a [T],

    /// Sorted y-values.
    pub y: &'a [T],

    /// Index of the point to fit.
    pub idx: usize,

    /// Ascending neighbour indices taking part in the fit.
    pub neighbors: &'a [usize],

    /// Robustness weights for the whole series (`None` on pass 0).
    pub robustness_weights: Option<&'a [T]>,

    /// Polynomial degree.
    pub degree: Degree,
}

impl<'a, T: Float> RegressionContext<'a, T> {
    /// Perform the local fit using the context configuration.
    ///
    /// This centres x on the target, computes tricube weights from the
    /// distances, multiplies in robustness weights when present, and solves.
    pub fn fit(&self) -> Result<T, SmoothError> {
        let x_current = self.x[self.idx];

        let centered: Vec<T> = self.neighbors.iter().map(|&j| self.x[j] - x_current).collect();
        let distances: Vec<T> = centered.iter().map(|d| d.abs()).collect();
        let local_y: Vec<T> = self.neighbors.iter().map(|&j| self.y[j]).collect();

        let mut weights = tricube_weights(&distances);
        if let Some(robust) = self.robustness_weights {
            for (w, &j) in weights.iter_mut().zip(self.neighbors.iter()) {
                *w = *w * robust[j];
            }
        }

        fit_local(&centered, &local_y, &weights, self.degree)
            .ok_or(SmoothError::DegenerateFit { index: self.idx })
    }
}
