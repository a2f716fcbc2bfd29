//! Execution engine for robust local regression.
//!
//! ## Purpose
//!
//! This module runs the smoothing passes over a sorted series: one
//! non-robust pass that also caches each point's neighbourhood bounds,
//! followed (for robust methods) by a fixed number of reweighted passes.
//!
//! ## Design notes
//!
//! * **Pass barrier**: Every fit in a pass reads only the previous pass's
//!   output, so points within a pass are independent. Passes are sequential.
//! * **Coincident x**: A point whose x equals its predecessor's copies the
//!   predecessor's result (and cached bounds) instead of refitting. Copies
//!   are applied in index order after the fits of the pass.
//! * **Partial failure**: A point with no usable neighbours becomes NaN and
//!   the pass continues. A failed solve aborts the call.
//! * **Parallelism**: With the `parallel` feature, fits within a pass run on
//!   the rayon pool.
//! * **Fixed pass count**: There is no convergence test.
//!
//! ## Invariants
//!
//! * Input x-values are sorted, NaN last.
//! * Output has the same length as the input.
//! * Exactly `1 + iterations` passes run when robust, otherwise 1.
//!
//! ## Non-goals
//!
//! * This module does not validate parameters (handled by `validator`).
//! * This module does not sort input data (handled by `api`).

// Feature-gated imports
#[cfg(feature = "parallel")]
use rayon::prelude::*;

// External dependencies
use num_traits::Float;
use tracing::{debug, trace};

// Internal dependencies
use crate::algorithms::neighbors::find_neighbors;
use crate::algorithms::regression::{Degree, RegressionContext};
use crate::algorithms::robustness::{resolve_neighbors, robustness_weights};
use crate::primitives::errors::SmoothError;
use crate::primitives::neighborhood::Neighborhood;
use crate::primitives::sorting::ValidityMask;

// ============================================================================
// Configuration
// ============================================================================

/// Default number of robust passes after the initial fit.
pub const DEFAULT_ITERATIONS: usize = 5;

/// Resolved configuration for one smoothing run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothConfig {
    /// Neighbour rank `k` (absolute span, before clamping to `n`).
    pub span: usize,

    /// Local polynomial degree.
    pub degree: Degree,

    /// Whether robust passes run after the initial fit.
    pub robust: bool,

    /// Number of robust passes.
    pub iterations: usize,

    /// Fit points of a pass in parallel (requires the `parallel` feature).
    pub parallel: bool,
}

impl Default for SmoothConfig {
    fn default() -> Self {
        Self {
            span: 5,
            degree: Degree::Linear,
            robust: false,
            iterations: DEFAULT_ITERATIONS,
            parallel: false,
        }
    }
}

/// Output from a smoothing run, in sorted order.
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutorOutput<T> {
    /// Smoothed values.
    pub smoothed: Vec<T>,

    /// Number of passes performed.
    pub passes: usize,

    /// Robustness weights used by the last robust pass.
    pub robustness_weights: Option<Vec<T>>,
}

// ============================================================================
// Per-point Outcome
// ============================================================================

// Result of visiting one point during a pass.
#[derive(Debug, Clone, Copy)]
enum PointOutcome<T> {
    // Fitted value, plus bounds to cache on the initial pass.
    Fitted(T, Option<Neighborhood>),

    // No usable neighbours or missing x.
    Missing,

    // Same x as the predecessor; copy its result.
    Coincident,
}

// ============================================================================
// Executor
// ============================================================================

/// Runs the initial and robust passes over a sorted series.
#[derive(Debug, Clone, Default)]
pub struct SmoothExecutor {
    config: SmoothConfig,
}

impl SmoothExecutor {
    /// Create an executor from a resolved configuration.
    pub fn new(config: SmoothConfig) -> Self {
        Self { config }
    }

    /// Smooth a sorted series.
    pub fn run<T>(
        &self,
        x: &[T],
        y: &[T],
        valid: &ValidityMask,
    ) -> Result<ExecutorOutput<T>, SmoothError>
    where
        T: Float + Send + Sync,
    {
        let n = x.len();
        let window = self.config.span.min(n);

        // A one-point window leaves the data unchanged, except where x is missing
        if window <= 1 {
            let smoothed = x
                .iter()
                .zip(y.iter())
                .map(|(&xi, &yi)| if xi.is_nan() { T::nan() } else { yi })
                .collect();
            return Ok(ExecutorOutput {
                smoothed,
                passes: 0,
                robustness_weights: None,
            });
        }

        let (mut smoothed, bounds) = self.initial_pass(x, y, valid, window)?;
        trace!(n, window, "initial pass complete");

        if !self.config.robust {
            return Ok(ExecutorOutput {
                smoothed,
                passes: 1,
                robustness_weights: None,
            });
        }

        let mut last_weights = None;
        for iter in 0..self.config.iterations {
            let weights = robustness_weights(y, &smoothed);
            smoothed = self.robust_pass(x, y, valid, window, &smoothed, &bounds, &weights)?;
            trace!(iteration = iter + 1, "robust pass complete");
            last_weights = Some(weights);
        }

        Ok(ExecutorOutput {
            smoothed,
            passes: 1 + self.config.iterations,
            robustness_weights: last_weights,
        })
    }

    // ========================================================================
    // Passes
    // ========================================================================

    /// Non-robust pass; also returns the neighbourhood bounds of every point.
    pub fn initial_pass<T>(
        &self,
        x: &[T],
        y: &[T],
        valid: &ValidityMask,
        window: usize,
    ) -> Result<(Vec<T>, Vec<Option<Neighborhood>>), SmoothError>
    where
        T: Float + Send + Sync,
    {
        let degree = self.config.degree;

        let outcomes = map_points(x.len(), self.config.parallel, |i| {
            if x[i].is_nan() {
                return Ok(PointOutcome::Missing);
            }
            if i > 0 && x[i] == x[i - 1] {
                return Ok(PointOutcome::Coincident);
            }

            let neighbors = find_neighbors(window, i, x, valid);
            if neighbors.is_empty() {
                debug!(index = i, "no valid neighbours; leaving point unfitted");
                return Ok(PointOutcome::Missing);
            }

            let context = RegressionContext {
                x,
                y,
                idx: i,
                neighbors: &neighbors,
                robustness_weights: None,
                degree,
            };
            let value = context.fit()?;
            Ok(PointOutcome::Fitted(value, Neighborhood::from_indices(&neighbors)))
        })?;

        let n = outcomes.len();
        let mut smoothed = vec![T::nan(); n];
        let mut bounds: Vec<Option<Neighborhood>> = vec![None; n];
        for (i, outcome) in outcomes.into_iter().enumerate() {
            match outcome {
                PointOutcome::Fitted(value, nb) => {
                    smoothed[i] = value;
                    bounds[i] = nb;
                }
                PointOutcome::Missing => {}
                PointOutcome::Coincident => {
                    smoothed[i] = smoothed[i - 1];
                    bounds[i] = bounds[i - 1];
                }
            }
        }

        Ok((smoothed, bounds))
    }

    /// Robust pass refitting every point with the given robustness weights.
    #[allow(clippy::too_many_arguments)]
    pub fn robust_pass<T>(
        &self,
        x: &[T],
        y: &[T],
        valid: &ValidityMask,
        window: usize,
        previous: &[T],
        bounds: &[Option<Neighborhood>],
        weights: &[T],
    ) -> Result<Vec<T>, SmoothError>
    where
        T: Float + Send + Sync,
    {
        let degree = self.config.degree;
        let positive = valid.restrict_positive(weights);

        let outcomes = map_points(x.len(), self.config.parallel, |i| {
            if i > 0 && x[i] == x[i - 1] {
                return Ok(PointOutcome::Coincident);
            }
            if previous[i].is_nan() {
                return Ok(PointOutcome::Missing);
            }
            let cached = match bounds[i] {
                Some(nb) => nb,
                None => return Ok(PointOutcome::Missing),
            };

            let resolved = resolve_neighbors(cached, window, i, x, valid, &positive, weights);
            if resolved.recomputed {
                debug!(index = i, "zero robustness weight in cached neighbourhood; searching again");
            }
            if resolved.indices.is_empty() {
                debug!(index = i, "no positively weighted neighbours; leaving point unfitted");
                return Ok(PointOutcome::Missing);
            }

            let context = RegressionContext {
                x,
                y,
                idx: i,
                neighbors: &resolved.indices,
                robustness_weights: Some(weights),
                degree,
            };
            Ok(PointOutcome::Fitted(context.fit()?, None))
        })?;

        let mut smoothed = vec![T::nan(); outcomes.len()];
        for (i, outcome) in outcomes.into_iter().enumerate() {
            match outcome {
                PointOutcome::Fitted(value, _) => smoothed[i] = value,
                PointOutcome::Missing => {}
                PointOutcome::Coincident => smoothed[i] = smoothed[i - 1],
            }
        }

        Ok(smoothed)
    }
}

// ============================================================================
// Point Mapping
// ============================================================================

// Visit every point of a pass, in parallel when requested.
#[cfg(feature = "parallel")]
fn map_points<T, F>(n: usize, parallel: bool, visit: F) -> Result<Vec<PointOutcome<T>>, SmoothError>
where
    T: Send,
    F: Fn(usize) -> Result<PointOutcome<T>, SmoothError> + Send + Sync,
{
    if parallel {
        (0..n).into_par_iter().map(visit).collect()
    } else {
        (0..n).map(visit).collect()
    }
}

// Visit every point of a pass sequentially.
#[cfg(not(feature = "parallel"))]
fn map_points<T, F>(n: usize, _parallel: bool, visit: F) -> Result<Vec<PointOutcome<T>>, SmoothError>
where
    F: Fn(usize) -> Result<PointOutcome<T>, SmoothError>,
{
    (0..n).map(visit).collect()
}
