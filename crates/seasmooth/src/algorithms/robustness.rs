//! Robustness weight computation for outlier downweighting.
//!
//! ## Purpose
//!
//! This module implements the reweighting step between passes of robust
//! smoothing. After a pass, residuals against the observed values are turned
//! into bisquare weights, and each point's neighbour set for the next pass is
//! resolved from its cached bounds.
//!
//! ## Design notes
//!
//! * **Scale**: Residuals are scaled by six times the median absolute residual.
//! * **Missing values**: A missing observation or a missing fit gives a
//!   missing residual and therefore zero weight.
//! * **Cache reuse**: Cached bounds are reused as-is unless a candidate inside
//!   them was rejected (zero weight); then a fresh search runs over the
//!   positively weighted samples only.
//!
//! ## Invariants
//!
//! * Robustness weights are in [0, 1].
//! * A recomputed neighbour set contains only positively weighted samples.
//!
//! ## Non-goals
//!
//! * This module does not perform the regression itself.
//! * This module does not decide the number of robust passes.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::neighbors::find_neighbors;
use crate::math::weights::bisquare_weights;
use crate::primitives::neighborhood::Neighborhood;
use crate::primitives::sorting::ValidityMask;

// ============================================================================
// Residuals and Weights
// ============================================================================

/// Residuals `y - fitted`, NaN wherever either side is missing.
pub fn residuals<T: Float>(y: &[T], fitted: &[T]) -> Vec<T> {
    y.iter().zip(fitted.iter()).map(|(&yi, &ci)| yi - ci).collect()
}

/// Robustness weights for the next pass from the previous pass's fit.
pub fn robustness_weights<T: Float>(y: &[T], fitted: &[T]) -> Vec<T> {
    bisquare_weights(&residuals(y, fitted))
}

// ============================================================================
// Neighbour Resolution
// ============================================================================

/// Neighbour set chosen for a robust refit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RobustNeighbors {
    /// Ascending neighbour indices.
    pub indices: Vec<usize>,

    /// Whether the cached bounds were discarded and a fresh search ran.
    pub recomputed: bool,
}

/// Resolve the neighbours of point `idx` for a robust pass.
///
/// Candidates are the valid samples inside `cached`. If any candidate has a
/// robustness weight of zero, the cache is discarded and the search reruns on
/// `positive`, the mask of samples with strictly positive weight.
pub fn resolve_neighbors<T: Float>(
    cached: Neighborhood,
    window: usize,
    idx: usize,
    x: &[T],
    valid: &ValidityMask,
    positive: &ValidityMask,
    weights: &[T],
) -> RobustNeighbors {
    let candidates = cached.collect_where(|j| valid.get(j));

    if candidates.iter().any(|&j| weights[j] <= T::zero()) {
        return RobustNeighbors {
            indices: find_neighbors(window, idx, x, positive),
            recomputed: true,
        };
    }

    RobustNeighbors {
        indices: candidates,
        recomputed: false,
    }
}
