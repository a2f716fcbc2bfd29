//! High-level API for trend extraction.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry points: the one-call
//! [`smooth`] function and a fluent builder for configuring span, method,
//! robust pass count and execution options.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with documented defaults for every parameter.
//! * **Validated**: Parameters are validated when `.build()` is called; input
//!   arrays are validated on every fit.
//! * **Order-preserving**: Data is sorted internally and results are returned
//!   in the caller's order.
//! * **Type-Safe**: Generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Span**: An absolute neighbour count (`span >= 1`) or a fraction of the
//!   valid points (`0 < span < 1`, rounded up).
//! * **Span fallback**: A fractional span that rounds to zero falls back to
//!   `default_span` and logs a warning.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`SmootherBuilder`] via `Smoother::new()` (prelude alias).
//! 2. Chain configuration methods (`.span()`, `.method()`, ...).
//! 3. Call `.build()` and then `.fit(&x, &y)` or `.smooth(&x, &y)`.

// External dependencies
use num_traits::Float;
use tracing::warn;

// Internal dependencies
use crate::engine::executor::{DEFAULT_ITERATIONS, SmoothConfig, SmoothExecutor};
use crate::engine::validator::Validator;
use crate::primitives::sorting::{SortedSeries, ValidityMask};

// Publicly re-exported types
pub use crate::algorithms::regression::Degree;
pub use crate::engine::method::Method;
pub use crate::engine::output::Decomposition;
pub use crate::primitives::errors::SmoothError;

/// Span used when a fractional span rounds to zero points.
pub const DEFAULT_SPAN: usize = 5;

// ============================================================================
// One-call Entry Point
// ============================================================================

/// Smooth `y` against `x` with the named method.
///
/// `method` is one of `lowess`, `loess`, `rlowess`, `rloess`. The returned
/// series has the same length and order as the input.
///
/// ```rust
/// let x = vec![1.0, 2.0, 3.0, 4.0, 5.0];
/// let y = vec![2.0, 4.0, 6.0, 8.0, 10.0];
/// let s = seasmooth::smooth(&x, &y, 3.0, "lowess")?;
/// assert_eq!(s.len(), 5);
/// # Ok::<(), seasmooth::prelude::SmoothError>(())
/// ```
pub fn smooth<T>(x: &[T], y: &[T], span: T, method: &str) -> Result<Vec<T>, SmoothError>
where
    T: Float + Send + Sync,
{
    Validator::validate_inputs(x, y)?;

    SmootherBuilder::new()
        .span(span)
        .method_name(method)
        .build()?
        .smooth(x, y)
}

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring a smoother.
#[derive(Debug, Clone)]
pub struct SmootherBuilder<T> {
    /// Absolute span or fraction of valid points (default: 5).
    pub span: Option<T>,

    /// Smoothing method (default: `Method::Lowess`).
    pub method: Option<Method>,

    /// Robust passes after the initial fit (default: 5).
    pub iterations: Option<usize>,

    /// Span used when a fractional span rounds to zero (default: 5).
    pub default_span: Option<usize>,

    /// Fit points of a pass in parallel (default: false).
    pub parallel: Option<bool>,

    /// Error raised while configuring, reported by `build()`.
    deferred_error: Option<SmoothError>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for SmootherBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> SmootherBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            span: None,
            method: None,
            iterations: None,
            default_span: None,
            parallel: None,
            deferred_error: None,
            duplicate_param: None,
        }
    }

    /// Set the span: a neighbour count, or a fraction in (0, 1).
    pub fn span(mut self, span: T) -> Self {
        if self.span.is_some() {
            self.duplicate_param = Some("span");
        }
        self.span = Some(span);
        self
    }

    /// Set the smoothing method.
    pub fn method(mut self, method: Method) -> Self {
        if self.method.is_some() {
            self.duplicate_param = Some("method");
        }
        self.method = Some(method);
        self
    }

    /// Set the smoothing method by name (`lowess`, `loess`, `rlowess`, `rloess`).
    pub fn method_name(self, name: &str) -> Self {
        match name.parse::<Method>() {
            Ok(method) => self.method(method),
            Err(err) => {
                let mut builder = self;
                if builder.deferred_error.is_none() {
                    builder.deferred_error = Some(err);
                }
                builder
            }
        }
    }

    /// Set the number of robust passes (ignored for non-robust methods).
    pub fn iterations(mut self, iterations: usize) -> Self {
        if self.iterations.is_some() {
            self.duplicate_param = Some("iterations");
        }
        self.iterations = Some(iterations);
        self
    }

    /// Set the span used when a fractional span rounds to zero points.
    pub fn default_span(mut self, span: usize) -> Self {
        if self.default_span.is_some() {
            self.duplicate_param = Some("default_span");
        }
        self.default_span = Some(span);
        self
    }

    /// Fit points in parallel (effective with the `parallel` feature).
    pub fn parallel(mut self, parallel: bool) -> Self {
        if self.parallel.is_some() {
            self.duplicate_param = Some("parallel");
        }
        self.parallel = Some(parallel);
        self
    }

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Validate the configuration and build the smoother.
    pub fn build(self) -> Result<LocalSmoother<T>, SmoothError> {
        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let span = self
            .span
            .unwrap_or_else(|| T::from(DEFAULT_SPAN).unwrap_or_else(T::one));
        Validator::validate_span(span)?;

        let iterations = self.iterations.unwrap_or(DEFAULT_ITERATIONS);
        Validator::validate_iterations(iterations)?;

        // Unknown method names are reported after the numeric parameters
        if let Some(err) = self.deferred_error {
            return Err(err);
        }

        Ok(LocalSmoother {
            span,
            method: self.method.unwrap_or_default(),
            iterations,
            default_span: self.default_span.unwrap_or(DEFAULT_SPAN),
            parallel: self.parallel.unwrap_or(false),
        })
    }
}

// ============================================================================
// Smoother
// ============================================================================

/// Configured smoother, produced by [`SmootherBuilder::build`].
#[derive(Debug, Clone, PartialEq)]
pub struct LocalSmoother<T> {
    span: T,
    method: Method,
    iterations: usize,
    default_span: usize,
    parallel: bool,
}

impl<T: Float + Send + Sync> LocalSmoother<T> {
    /// Smooth `y` against `x`, returning the trend in caller order.
    pub fn smooth(&self, x: &[T], y: &[T]) -> Result<Vec<T>, SmoothError> {
        Ok(self.fit(x, y)?.trend)
    }

    /// Decompose `y` into trend and residual.
    pub fn fit(&self, x: &[T], y: &[T]) -> Result<Decomposition<T>, SmoothError> {
        Validator::validate_inputs(x, y)?;

        let sorted = SortedSeries::new(x, y);
        let valid = ValidityMask::from_series(&sorted.x, &sorted.y);
        let span = self.resolve_span(valid.count());

        let config = SmoothConfig {
            span,
            degree: self.method.degree(),
            robust: self.method.is_robust(),
            iterations: self.iterations,
            parallel: self.parallel,
        };
        let output = SmoothExecutor::new(config).run(&sorted.x, &sorted.y, &valid)?;

        let trend = sorted.restore(&output.smoothed);
        let mut result = Decomposition::new(x, y, trend, span, self.method);
        result.passes = output.passes;
        result.robustness_weights = output.robustness_weights.map(|w| sorted.restore(&w));

        Ok(result)
    }

    /// Absolute span for a series with `valid_count` usable points.
    pub fn resolve_span(&self, valid_count: usize) -> usize {
        let span = if self.span < T::one() {
            let count = T::from(valid_count).unwrap_or_else(T::zero);
            (self.span * count).ceil()
        } else {
            self.span.floor()
        };

        let resolved = span.to_usize().unwrap_or(usize::MAX);
        if resolved == 0 {
            warn!(
                span = self.span.to_f64().unwrap_or(f64::NAN),
                valid_count,
                fallback = self.default_span,
                "span rounds to zero points; using default span"
            );
            return self.default_span;
        }

        resolved
    }

    /// Configured method.
    pub fn method(&self) -> Method {
        self.method
    }

    /// Configured robust pass count.
    pub fn iterations(&self) -> usize {
        self.iterations
    }
}
