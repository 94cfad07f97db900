//! Error types for root-finding.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from root-finder argument validation.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SearchError {
    /// Bracket is not an ordered pair of finite values with `low < high`.
    InvalidBracket { low: f64, high: f64 },
    /// Tolerance is not a strictly positive finite number.
    InvalidTolerance(f64),
}

impl Display for SearchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidBracket { low, high } => {
                write!(f, "invalid bracket [{low}, {high}]: need finite low < high")
            }
            Self::InvalidTolerance(tol) => {
                write!(f, "invalid tolerance {tol}: must be positive and finite")
            }
        }
    }
}

impl Error for SearchError {}
