//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure mathematical functions used by the smoother:
//! - Distance-based (tricube) and residual-based (bisquare) weights
//! - Robust scale estimation (median of absolute values)
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
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Tricube and bisquare weight functions.
pub mod weights;

/// Median-based scale estimation.
pub mod scaling;
