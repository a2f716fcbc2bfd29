//! Nearest-neighbour search for local fits.
//!
//! ## Purpose
//!
//! This module selects the neighbours that take part in the local fit at a
//! point: the valid samples whose distance to the point is no larger than the
//! distance of the k-th nearest valid sample.
//!
//! ## Design notes
//!
//! * **Tie-inclusive**: Every valid sample at exactly the cutoff distance is
//!   kept, so the result may hold more than `k + 1` indices when coordinates
//!   cluster.
//! * **Mask-driven**: The caller decides which samples are eligible; robust
//!   passes pass a mask restricted to positive robustness weights.
//! * **Order**: Returned indices are ascending.
//!
//! ## Invariants
//!
//! * Every returned index is valid under the mask.
//! * When the mask holds at most `k` samples, all of them are returned.
//!
//! ## Non-goals
//!
//! * This module does not assume x is sorted and does not slide windows.

// External dependencies
use core::cmp::Ordering::Equal;
use num_traits::Float;

// Internal dependencies
use crate::primitives::sorting::ValidityMask;

/// Find the neighbours of `x[center]` among the samples valid under `mask`.
///
/// `k` is a 0-based rank: the cutoff is the distance of the `(k + 1)`-th
/// nearest valid sample.
pub fn find_neighbors<T: Float>(
    k: usize,
    center: usize,
    x: &[T],
    mask: &ValidityMask,
) -> Vec<usize> {
    let flags = mask.as_slice();

    // If we have k points or fewer, return them all
    if mask.count() <= k {
        return (0..x.len()).filter(|&j| flags[j]).collect();
    }

    let x_center = x[center];
    let mut distances: Vec<T> = (0..x.len())
        .filter(|&j| flags[j])
        .map(|j| (x[j] - x_center).abs())
        .collect();

    // Distance to the k-th closest valid point
    distances.select_nth_unstable_by(k, |a, b| a.partial_cmp(b).unwrap_or(Equal));
    let dk = distances[k];

    (0..x.len())
        .filter(|&j| flags[j] && (x[j] - x_center).abs() <= dk)
        .collect()
}
