//! Error types for ephemeris queries.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors reported by an [`Ephemeris`](crate::Ephemeris) implementation.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum EphemerisError {
    /// No catalog entry matches the requested star name.
    UnknownStar(String),
    /// Epoch outside the engine's supported span.
    EpochOutOfRange { jd: f64, min_jd: f64, max_jd: f64 },
    /// Epoch is NaN or infinite.
    NonFiniteEpoch,
    /// Sidereal mode parameters are unusable.
    InvalidMode(&'static str),
    /// Engine configuration is unusable.
    InvalidConfig(&'static str),
}

impl Display for EphemerisError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownStar(name) => write!(f, "unknown star: {name}"),
            Self::EpochOutOfRange { jd, min_jd, max_jd } => {
                write!(f, "epoch JD {jd} outside supported range [{min_jd}, {max_jd}]")
            }
            Self::NonFiniteEpoch => write!(f, "non-finite epoch"),
            Self::InvalidMode(msg) => write!(f, "invalid sidereal mode: {msg}"),
            Self::InvalidConfig(msg) => write!(f, "invalid engine config: {msg}"),
        }
    }
}

impl Error for EphemerisError {}
