//! # seasmooth: LOWESS/LOESS trend extraction for sampled signals
//!
//! Local weighted regression smoothing with optional robust reweighting,
//! used to split a noisy sampled signal (a tide-gauge sea-level record, a
//! sensor trace) into a smooth trend and the residual around it.
//!
//! ## What it does
//!
//! At every sample a low-degree polynomial is fitted to the nearest
//! neighbours, weighted by the tricube kernel on distance. `lowess` fits a
//! line, `loess` a parabola. The robust variants `rlowess`/`rloess` then run
//! five more passes that downweight samples with large residuals using
//! bisquare weights, so isolated spikes barely move the trend.
//!
//! ## Quick Start
//!
//! ```rust
//! let t = vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
//! let level = vec![1.0, 1.2, 0.9, 9.0, 1.1, 1.0, 1.2];
//!
//! // Robust local linear fit over 4 neighbours
//! let trend = seasmooth::smooth(&t, &level, 4.0, "rlowess")?;
//! assert_eq!(trend.len(), t.len());
//! # Ok::<(), seasmooth::prelude::SmoothError>(())
//! ```
//!
//! ### Builder and decomposition
//!
//! ```rust
//! use seasmooth::prelude::*;
//!
//! let x: Vec<f64> = (0..20).map(|i| i as f64).collect();
//! let y: Vec<f64> = x.iter().map(|v| (v * 0.3).sin()).collect();
//!
//! let model = Smoother::new()
//!     .span(0.4)          // 40% of the valid points per local fit
//!     .method(RLoess)     // robust local quadratic
//!     .iterations(5)      // robust passes after the initial fit
//!     .build()?;
//!
//! let result = model.fit(&x, &y)?;
//! assert_eq!(result.residuals.len(), 20);
//! println!("{}", result);
//! # Ok::<(), SmoothError>(())
//! ```
//!
//! ## Missing values
//!
//! NaN in `y` marks a missing observation: it never takes part in a fit but
//! still receives a trend value interpolated from its neighbours. NaN in `x`
//! removes the sample entirely and its trend is NaN.
//!
//! ## Errors
//!
//! Length mismatches, infinite inputs, non-positive spans and unknown method
//! names are returned as [`SmoothError`](prelude::SmoothError) before any
//! fitting starts. A point without usable neighbours yields NaN without aborting.
//!
//! ## References
//!
//! - Cleveland, W. S. (1979). "Robust Locally Weighted Regression and Smoothing Scatterplots"

// Layer 1: Primitives - data structures and basic utilities.
mod primitives;

// Layer 2: Math - pure mathematical functions.
mod math;

// Layer 3: Algorithms - neighbour search, local fits, robustness.
mod algorithms;

// Layer 4: Engine - orchestration and execution control.
mod engine;

// Layer 5: High-level API.
mod api;

// Column file helpers.
pub mod io;

pub use api::smooth;

// Standard prelude.
pub mod prelude {
    pub use crate::api::{
        Decomposition, Degree, Method,
        Method::{Loess, Lowess, RLoess, RLowess},
        LocalSmoother, SmoothError, SmootherBuilder as Smoother, smooth,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
