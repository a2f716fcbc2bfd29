//! Error types for smoothing operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur while smoothing a
//! series, covering parameter validation, numerical failure of a local fit,
//! and the column I/O helpers.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the offending values (lengths, span, name).
//! * **Typed**: Parameter failures abort the call and are returned to the
//!   caller; nothing is printed and ignored.
//! * **Comparable**: `Clone + PartialEq` so tests can match on exact variants.
//!
//! ## Key concepts
//!
//! 1. **Input validation**: Mismatched `x`/`y` lengths, infinite values.
//! 2. **Parameter validation**: Span, iteration count, method name.
//! 3. **Numerical failure**: A local least-squares solve that cannot produce
//!    a finite coefficient.
//! 4. **I/O**: Reading and writing whitespace-delimited columns.
//!
//! ## Non-goals
//!
//! * Per-point empty neighbourhoods are not errors; they yield NaN.
//! * This module does not perform the validation logic itself.

// External dependencies
use std::error::Error;
use std::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for smoothing operations.
#[derive(Debug, Clone, PartialEq)]
pub enum SmoothError {
    /// `x` and `y` arrays must have the same number of elements.
    MismatchedInputs {
        /// Number of elements in the `x` array.
        x_len: usize,
        /// Number of elements in the `y` array.
        y_len: usize,
    },

    /// An input value is infinite. NaN marks missing data and is accepted.
    InvalidNumericValue {
        /// Which input array holds the value (`"x"` or `"y"`).
        axis: &'static str,
        /// Caller-order index of the value.
        index: usize,
        /// The offending value.
        value: f64,
    },

    /// Span must be finite and strictly positive.
    InvalidSpan(f64),

    /// The requested smoothing method is unknown or not implemented.
    UnsupportedMethod(String),

    /// The local least-squares problem could not be solved.
    DegenerateFit {
        /// Sorted index of the point whose fit failed.
        index: usize,
    },

    /// Robust pass count is above the supported maximum.
    InvalidIterations(usize),

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },

    /// Reading or writing a column file failed.
    Io(String),

    /// A row of a column file could not be parsed.
    Parse {
        /// One-based line number of the offending row.
        line: usize,
        /// Description of the problem.
        message: String,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for SmoothError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::MismatchedInputs { x_len, y_len } => {
                write!(f, "Length mismatch: x has {x_len} points, y has {y_len}")
            }
            Self::InvalidNumericValue { axis, index, value } => {
                write!(f, "Invalid numeric value: {axis}[{index}]={value}")
            }
            Self::InvalidSpan(span) => {
                write!(f, "Invalid span: {span} (must be > 0 and finite)")
            }
            Self::UnsupportedMethod(name) => write!(
                f,
                "Unsupported method: '{name}' (expected lowess, loess, rlowess or rloess)"
            ),
            Self::DegenerateFit { index } => {
                write!(f, "Local fit at sorted index {index} could not be solved")
            }
            Self::InvalidIterations(iter) => {
                write!(f, "Invalid iterations: {iter} (must be in [0, 1000])")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
            Self::Io(msg) => write!(f, "I/O error: {msg}"),
            Self::Parse { line, message } => write!(f, "Parse error on line {line}: {message}"),
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

impl Error for SmoothError {}

impl From<std::io::Error> for SmoothError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}
