//! Output types for smoothing operations.
//!
//! ## Purpose
//!
//! This module defines `Decomposition`, the split of an input series into a
//! smooth trend and the residual left over, in the caller's original order.
//!
//! ## Design notes
//!
//! * **Caller order**: Every vector is indexed like the input arrays.
//! * **Missing values**: Trend entries may be NaN; residuals inherit NaN.
//! * **Ergonomics**: Implements `Display` for a human-readable table.
//!
//! ## Invariants
//!
//! * All vectors have the same length as the input data.
//! * `residuals[i] == y[i] - trend[i]`.
//!
//! ## Non-goals
//!
//! * This module does not perform calculations beyond the residual.

// External dependencies
use core::fmt::{Display, Formatter, Result};
use num_traits::Float;
use std::path::{Path, PathBuf};

// Internal dependencies
use crate::engine::method::Method;
use crate::io::write_export;
use crate::primitives::errors::SmoothError;

// ============================================================================
// Result Structure
// ============================================================================

/// Trend/residual decomposition of a series.
#[derive(Debug, Clone, PartialEq)]
pub struct Decomposition<T> {
    /// Input x-values, caller order.
    pub x: Vec<T>,

    /// Input y-values, caller order.
    pub y: Vec<T>,

    /// Smoothed trend.
    pub trend: Vec<T>,

    /// Residuals `y - trend`.
    pub residuals: Vec<T>,

    /// Robustness weights of the last robust pass, caller order.
    pub robustness_weights: Option<Vec<T>>,

    /// Absolute span (neighbour rank) used by the fit.
    pub span_used: usize,

    /// Method used by the fit.
    pub method: Method,

    /// Number of fitting passes performed.
    pub passes: usize,
}

impl<T: Float> Decomposition<T> {
    /// Assemble a decomposition from inputs and trend, computing residuals.
    pub fn new(x: &[T], y: &[T], trend: Vec<T>, span_used: usize, method: Method) -> Self {
        let residuals = y.iter().zip(trend.iter()).map(|(&yi, &ti)| yi - ti).collect();
        Self {
            x: x.to_vec(),
            y: y.to_vec(),
            trend,
            residuals,
            robustness_weights: None,
            span_used,
            method,
            passes: 0,
        }
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Whether the decomposition holds no samples.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Number of trend entries left unfitted (NaN).
    pub fn unfitted_count(&self) -> usize {
        self.trend.iter().filter(|t| t.is_nan()).count()
    }
}

impl<T: Float + Display> Decomposition<T> {
    /// Write `x y residual` rows to `path`, adding a `.txt` suffix if absent.
    ///
    /// Returns the path actually written.
    pub fn export<P: AsRef<Path>>(&self, path: P) -> core::result::Result<PathBuf, SmoothError> {
        write_export(path, &self.x, &self.y, &self.residuals)
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display> Display for Decomposition<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Data points: {}", self.len())?;
        writeln!(f, "  Method:      {}", self.method)?;
        writeln!(f, "  Span:        {}", self.span_used)?;
        writeln!(f, "  Passes:      {}", self.passes)?;

        let unfitted = self.unfitted_count();
        if unfitted > 0 {
            writeln!(f, "  Unfitted:    {}", unfitted)?;
        }

        writeln!(f)?;
        writeln!(f, "Decomposition:")?;
        writeln!(
            f,
            "  {:>10} {:>12} {:>12} {:>12}",
            "X", "Y", "Trend", "Residual"
        )?;
        writeln!(f, "  {}", "-".repeat(49))?;

        for i in 0..self.len() {
            writeln!(
                f,
                "  {:>10.2} {:>12.5} {:>12.5} {:>12.5}",
                self.x[i], self.y[i], self.trend[i], self.residuals[i]
            )?;
        }

        Ok(())
    }
}
