//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer orchestrates smoothing: it validates parameters, maps method
//! names to fitting settings, runs the initial and robust passes, and shapes
//! the output.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Pass orchestration.
pub mod executor;

/// Method selection.
pub mod method;

/// Validation utilities.
pub mod validator;

/// Output types.
pub mod output;
