//! Input validation for smoothing configuration and data.
//!
//! ## Purpose
//!
//! This module checks caller-supplied parameters before any work is done:
//! input lengths and finiteness, the span, the robust pass count, and
//! duplicate builder parameters.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Missing values allowed**: NaN in `x` or `y` is data, not an error;
//!   infinities are rejected.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective constraints.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not sort, transform, or filter input data.
//! * This module does not resolve fractional spans.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::SmoothError;

/// Maximum supported number of robust passes.
pub const MAX_ITERATIONS: usize = 1000;

/// Validation utility for smoothing configuration and input data.
pub struct Validator;

impl Validator {
    /// Validate that `x` and `y` have matching lengths and hold no infinities.
    pub fn validate_inputs<T: Float>(x: &[T], y: &[T]) -> Result<(), SmoothError> {
        if x.len() != y.len() {
            return Err(SmoothError::MismatchedInputs {
                x_len: x.len(),
                y_len: y.len(),
            });
        }

        // NaN is missing data; only infinities are rejected
        for (i, (&xi, &yi)) in x.iter().zip(y.iter()).enumerate() {
            if xi.is_infinite() {
                return Err(invalid_value("x", i, xi));
            }
            if yi.is_infinite() {
                return Err(invalid_value("y", i, yi));
            }
        }

        Ok(())
    }

    /// Validate the span: finite and strictly positive.
    pub fn validate_span<T: Float>(span: T) -> Result<(), SmoothError> {
        if !span.is_finite() || span <= T::zero() {
            return Err(SmoothError::InvalidSpan(span.to_f64().unwrap_or(f64::NAN)));
        }
        Ok(())
    }

    /// Validate the number of robust passes.
    pub fn validate_iterations(iterations: usize) -> Result<(), SmoothError> {
        if iterations > MAX_ITERATIONS {
            return Err(SmoothError::InvalidIterations(iterations));
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(duplicate_param: Option<&'static str>) -> Result<(), SmoothError> {
        if let Some(param) = duplicate_param {
            return Err(SmoothError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}

fn invalid_value<T: Float>(axis: &'static str, index: usize, value: T) -> SmoothError {
    SmoothError::InvalidNumericValue {
        axis,
        index,
        value: value.to_f64().unwrap_or(f64::NAN),
    }
}
