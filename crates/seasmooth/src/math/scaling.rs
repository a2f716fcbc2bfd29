//! Robust scale estimation for residuals.
//!
//! The robust passes scale residuals by the median absolute residual, taken
//! over the residuals that are not missing.

// External dependencies
use core::cmp::Ordering::Equal;
use num_traits::Float;

/// Median of `|v|` over the non-NaN entries of `vals`.
///
/// Returns `None` when every entry is NaN. `scratch` is overwritten.
pub fn median_abs<T: Float>(vals: &[T], scratch: &mut Vec<T>) -> Option<T> {
    scratch.clear();
    scratch.extend(vals.iter().filter(|v| !v.is_nan()).map(|v| v.abs()));

    if scratch.is_empty() {
        return None;
    }

    Some(median_inplace(scratch))
}

/// Compute the median in-place using Quickselect.
///
/// Even lengths average the two middle values; an empty slice yields zero.
#[inline]
pub fn median_inplace<T: Float>(vals: &mut [T]) -> T {
    let n = vals.len();
    if n == 0 {
        return T::zero();
    }

    let mid = n / 2;
    vals.select_nth_unstable_by(mid, |a, b| a.partial_cmp(b).unwrap_or(Equal));
    let upper = vals[mid];

    if n % 2 == 1 {
        return upper;
    }

    // Even length: average with the largest value of the lower half
    let lower = vals[..mid]
        .iter()
        .copied()
        .fold(T::neg_infinity(), |acc, v| if v > acc { v } else { acc });

    (lower + upper) / (T::one() + T::one())
}
