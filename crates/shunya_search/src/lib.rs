//! Periodic root-finding for wrapped angle functions.
//!
//! This crate provides:
//! - Angle normalization to `[0, 360)` and `[-180, 180)`, plus DMS helpers
//! - A bisection root-finder for time → signed-angle functions that may
//!   cross the ±180° wrap inside the search bracket
//!
//! It has no dependencies and holds no state: every search is a pure
//! function of its target function, bracket and configuration.

pub mod angle;
pub mod bisection;
pub mod bisection_types;
pub mod error;

pub use angle::{Dms, deg_to_dms, dms_to_deg, normalize_360, normalize_signed, signed_dms};
pub use bisection::{find_root, iteration_bound, try_find_root, try_find_root_observed};
pub use bisection_types::{
    Bracket, Convergence, DEFAULT_TOLERANCE_DAYS, FINE_TOLERANCE_DAYS, SearchConfig, Step,
};
pub use error::SearchError;
