//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the data structures shared by the rest of the crate:
//! the sorted series with its permutation, the validity mask, cached
//! neighbourhood bounds, and the error type. It has zero internal
//! dependencies within the crate.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Sorting, permutation and validity mask.
pub mod sorting;

/// Cached neighbourhood bounds.
pub mod neighborhood;

/// Shared error types.
pub mod errors;
