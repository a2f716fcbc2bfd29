//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer implements the per-point building blocks of local regression:
//! - Nearest-neighbour search with tie-inclusive cutoff
//! - Weighted least-squares local fitting (linear and quadratic)
//! - Robustness weight updates between passes
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Nearest-neighbour search.
pub mod neighbors;

/// Local regression fitting.
pub mod regression;

/// Robustness weight updates.
pub mod robustness;
