//! Error types for profiler configuration.

use std::error::Error;
use std::fmt::{Display, Formatter};

use tetra_orbit::Body;

/// Errors from profiler configuration.
///
/// Computation itself is infallible: date/time validation happens at the
/// `CalendarDate`/`ClockTime` constructors (`TimeError`) and element
/// validation at `BodyCatalog::new` (`OrbitError`), before a profiler
/// ever runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ProfileError {
    /// A configured body weight is zero; weights must be positive so
    /// every body contributes to the profile sum.
    InvalidWeight(Body),
}

impl Display for ProfileError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidWeight(b) => write!(f, "weight for {} must be positive", b.name()),
        }
    }
}

impl Error for ProfileError {}
