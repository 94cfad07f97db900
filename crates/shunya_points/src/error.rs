//! Error types for zero-point searches.

use std::error::Error;
use std::fmt::{Display, Formatter};

use shunya_ephem::EphemerisError;
use shunya_search::SearchError;
use shunya_time::TimeError;

/// Errors from zero-point and star-fixing searches.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum PointsError {
    /// Invalid bracket or tolerance.
    Search(SearchError),
    /// The ephemeris engine rejected a query.
    Ephemeris(EphemerisError),
    /// The converged Julian day could not be turned into a calendar date.
    Time(TimeError),
    /// Target longitude is NaN or infinite.
    InvalidTarget(f64),
}

impl Display for PointsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Search(e) => write!(f, "search error: {e}"),
            Self::Ephemeris(e) => write!(f, "ephemeris error: {e}"),
            Self::Time(e) => write!(f, "time error: {e}"),
            Self::InvalidTarget(v) => write!(f, "invalid target longitude: {v}"),
        }
    }
}

impl Error for PointsError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Search(e) => Some(e),
            Self::Ephemeris(e) => Some(e),
            Self::Time(e) => Some(e),
            Self::InvalidTarget(_) => None,
        }
    }
}

impl From<SearchError> for PointsError {
    fn from(e: SearchError) -> Self {
        Self::Search(e)
    }
}

impl From<EphemerisError> for PointsError {
    fn from(e: EphemerisError) -> Self {
        Self::Ephemeris(e)
    }
}

impl From<TimeError> for PointsError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}
