//! Cached neighbourhood bounds.
//!
//! Pass 0 records, for each point, the inclusive index range that held its
//! nearest neighbours. Robust passes reuse that range instead of searching
//! again.

// Inclusive index bounds `[left, right]` of a point's fitting neighbours.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Neighborhood {
    // Left boundary index (inclusive).
    pub left: usize,

    // Right boundary index (inclusive).
    pub right: usize,
}

impl Neighborhood {
    // Bounds spanning an ascending, non-empty index set.
    #[inline]
    pub fn from_indices(indices: &[usize]) -> Option<Self> {
        let left = *indices.first()?;
        let right = *indices.last()?;
        debug_assert!(left <= right, "from_indices: indices must be ascending");
        Some(Self { left, right })
    }

    // Indices inside the bounds that pass `keep`.
    #[inline]
    pub fn collect_where<F>(&self, keep: F) -> Vec<usize>
    where
        F: Fn(usize) -> bool,
    {
        (self.left..=self.right).filter(|&j| keep(j)).collect()
    }
}
