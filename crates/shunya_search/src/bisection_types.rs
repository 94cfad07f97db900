//! Configuration and result types for the periodic root-finder.

use crate::error::SearchError;

/// Default convergence width in days (~8.6 ms).
pub const DEFAULT_TOLERANCE_DAYS: f64 = 1e-7;

/// Fine convergence width in days (~43 µs), close to the f64 spacing of
/// Julian days in the historical range.
pub const FINE_TOLERANCE_DAYS: f64 = 5e-10;

/// Search interval over the time coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket {
    low: f64,
    high: f64,
}

impl Bracket {
    /// Build a bracket; both ends must be finite with `low < high`.
    pub fn new(low: f64, high: f64) -> Result<Self, SearchError> {
        if !low.is_finite() || !high.is_finite() || low >= high {
            return Err(SearchError::InvalidBracket { low, high });
        }
        Ok(Self { low, high })
    }

    pub fn low(&self) -> f64 {
        self.low
    }

    pub fn high(&self) -> f64 {
        self.high
    }

    pub fn width(&self) -> f64 {
        self.high - self.low
    }

    pub fn contains(&self, t: f64) -> bool {
        (self.low..=self.high).contains(&t)
    }
}

/// Root-finder configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchConfig {
    /// Bracket width at which the search stops, in time units (days).
    pub tolerance_days: f64,
    /// Return immediately when the midpoint evaluates to exactly zero.
    /// An exact zero at the right endpoint never short-circuits and drags
    /// the search toward `low`.
    pub stop_on_exact_zero: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::new(DEFAULT_TOLERANCE_DAYS)
    }
}

impl SearchConfig {
    pub fn new(tolerance_days: f64) -> Self {
        Self {
            tolerance_days,
            stop_on_exact_zero: true,
        }
    }

    /// Configuration with [`FINE_TOLERANCE_DAYS`].
    pub fn fine() -> Self {
        Self::new(FINE_TOLERANCE_DAYS)
    }

    /// Run every iteration to the tolerance bound, even past exact zeros.
    pub fn without_zero_shortcut(mut self) -> Self {
        self.stop_on_exact_zero = false;
        self
    }

    pub fn validate(&self) -> Result<(), SearchError> {
        if !self.tolerance_days.is_finite() || self.tolerance_days <= 0.0 {
            return Err(SearchError::InvalidTolerance(self.tolerance_days));
        }
        Ok(())
    }
}

/// Outcome of a converged search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Convergence {
    /// Midpoint of the final bracket (or the exact zero, if one was hit).
    pub jd: f64,
    /// Final left edge.
    pub left: f64,
    /// Final right edge.
    pub right: f64,
    /// Loop iterations performed.
    pub iterations: u32,
    /// Target-function evaluations performed.
    pub evaluations: u32,
    /// Whether the search stopped on an exact zero.
    pub exact_zero: bool,
}

impl Convergence {
    pub fn width(&self) -> f64 {
        self.right - self.left
    }
}

/// One bisection step, reported to observers before the bracket update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    /// 1-based iteration counter.
    pub iteration: u32,
    pub left: f64,
    pub right: f64,
    pub mid: f64,
    pub mid_value: f64,
    pub right_value: f64,
}
