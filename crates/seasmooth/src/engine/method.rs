//! Smoothing method selection.
//!
//! Method names follow the conventional `smooth` vocabulary: `lowess` and
//! `loess` pick the local polynomial degree, and a leading `r` requests
//! robust reweighting.

// External dependencies
use core::fmt::{Display, Formatter, Result as FmtResult};
use core::str::FromStr;

// Internal dependencies
use crate::algorithms::regression::Degree;
use crate::primitives::errors::SmoothError;

/// Local regression smoothing method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Method {
    /// Local linear fit.
    #[default]
    Lowess,

    /// Local quadratic fit.
    Loess,

    /// Local linear fit with robust reweighting.
    RLowess,

    /// Local quadratic fit with robust reweighting.
    RLoess,
}

impl Method {
    /// Local polynomial degree.
    pub const fn degree(self) -> Degree {
        match self {
            Method::Lowess | Method::RLowess => Degree::Linear,
            Method::Loess | Method::RLoess => Degree::Quadratic,
        }
    }

    /// Whether robust passes follow the initial fit.
    pub const fn is_robust(self) -> bool {
        matches!(self, Method::RLowess | Method::RLoess)
    }

    /// Canonical method name.
    pub const fn name(self) -> &'static str {
        match self {
            Method::Lowess => "lowess",
            Method::Loess => "loess",
            Method::RLowess => "rlowess",
            Method::RLoess => "rloess",
        }
    }
}

impl FromStr for Method {
    type Err = SmoothError;

    /// Parse a method name; a leading `r` marks the robust variant.
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let (robust, base) = match name.strip_prefix('r') {
            Some(rest) => (true, rest),
            None => (false, name),
        };

        match (base, robust) {
            ("lowess", false) => Ok(Method::Lowess),
            ("loess", false) => Ok(Method::Loess),
            ("lowess", true) => Ok(Method::RLowess),
            ("loess", true) => Ok(Method::RLoess),
            _ => Err(SmoothError::UnsupportedMethod(name.to_string())),
        }
    }
}

impl Display for Method {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.name())
    }
}
