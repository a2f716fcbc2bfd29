//! Sorting and validity utilities for input series.
//!
//! ## Purpose
//!
//! This module normalises a caller-supplied series to non-decreasing `x`,
//! records the permutation needed to map results back to caller order, and
//! builds the validity mask used by every neighbour search.
//!
//! ## Design notes
//!
//! * **Stability**: Uses a stable sort so equal x-values keep their relative order.
//! * **Missing values**: NaN x-values sort after every finite value.
//! * **Owned permutation**: The forward permutation and its inverse are kept as
//!   two separate index arrays; nothing is aliased or mutated in place.
//!
//! ## Key concepts
//!
//! ### Sort-Process-Unsort Pattern
//! 1. **Sort**: Only when x is unsorted or NaN x-values are not all trailing.
//! 2. **Process**: The smoother operates on the sorted sequence.
//! 3. **Unsort**: Results are mapped back through the inverse permutation in O(n).
//!
//! ## Invariants
//!
//! * `order[rank[i]] == i` and `rank[order[s]] == s` for every index.
//! * Non-NaN sorted x-values are non-decreasing.
//! * NaN x-values keep their relative input order at the end.
//!
//! ## Non-goals
//!
//! * This module does not validate lengths or parameters.

// External dependencies
use core::cmp::Ordering;
use num_traits::Float;

// ============================================================================
// Data Structures
// ============================================================================

/// Input series reordered by x, with both directions of the permutation.
#[derive(Debug, Clone, PartialEq)]
pub struct SortedSeries<T> {
    /// Sorted x-coordinates (NaN values last).
    pub x: Vec<T>,

    /// Y-values reordered to match `x`.
    pub y: Vec<T>,

    /// `order[sorted_pos] = original_pos`.
    pub order: Vec<usize>,

    /// `rank[original_pos] = sorted_pos`.
    pub rank: Vec<usize>,
}

impl<T: Float> SortedSeries<T> {
    /// Sort `x`/`y` by x-coordinate when needed.
    ///
    /// The identity permutation is used when x is already non-decreasing and
    /// any NaN x-values are trailing.
    pub fn new(x: &[T], y: &[T]) -> Self {
        let n = x.len();

        if !needs_sort(x) {
            let identity: Vec<usize> = (0..n).collect();
            return Self {
                x: x.to_vec(),
                y: y.to_vec(),
                order: identity.clone(),
                rank: identity,
            };
        }

        let mut order: Vec<usize> = (0..n).collect();
        order.sort_by(|&a, &b| compare_nan_last(x[a], x[b]));

        let mut rank = vec![0usize; n];
        for (sorted_pos, &orig) in order.iter().enumerate() {
            rank[orig] = sorted_pos;
        }

        Self {
            x: order.iter().map(|&i| x[i]).collect(),
            y: order.iter().map(|&i| y[i]).collect(),
            order,
            rank,
        }
    }

    /// Map values in sorted order back to caller order.
    pub fn restore(&self, sorted_values: &[T]) -> Vec<T> {
        self.rank.iter().map(|&s| sorted_values[s]).collect()
    }
}

// ============================================================================
// Validity Mask
// ============================================================================

/// Per-index flag marking samples usable as fitting neighbours.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidityMask {
    flags: Vec<bool>,
    count: usize,
}

impl ValidityMask {
    /// Mark samples where both `x` and `y` are present.
    pub fn from_series<T: Float>(x: &[T], y: &[T]) -> Self {
        Self::from_flags(
            x.iter()
                .zip(y.iter())
                .map(|(xi, yi)| !xi.is_nan() && !yi.is_nan())
                .collect(),
        )
    }

    /// Wrap precomputed flags.
    pub fn from_flags(flags: Vec<bool>) -> Self {
        let count = flags.iter().filter(|&&f| f).count();
        Self { flags, count }
    }

    /// Restrict this mask to samples with a strictly positive weight.
    pub fn restrict_positive<T: Float>(&self, weights: &[T]) -> Self {
        Self::from_flags(
            self.flags
                .iter()
                .zip(weights.iter())
                .map(|(&f, &w)| f && w > T::zero())
                .collect(),
        )
    }

    /// Whether index `i` is valid.
    #[inline]
    pub fn get(&self, i: usize) -> bool {
        self.flags[i]
    }

    /// Number of valid samples.
    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Raw flags.
    #[inline]
    pub fn as_slice(&self) -> &[bool] {
        &self.flags
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Whether x needs sorting: a decrease between consecutive finite values, or
/// a NaN followed by a non-NaN value.
pub fn needs_sort<T: Float>(x: &[T]) -> bool {
    x.windows(2).any(|w| (w[0].is_nan() && !w[1].is_nan()) || w[1] < w[0])
}

/// Total order on floats with NaN after every number and NaNs equal.
#[inline]
fn compare_nan_last<T: Float>(a: T, b: T) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
    }
}
