//! Error types for orbital-element configuration.

use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::Body;

/// Errors from catalog construction.
#[derive(Debug, Clone, Copy, PartialEq)]
#[non_exhaustive]
pub enum OrbitError {
    /// Configured eccentricity is outside 0 <= e < 1, so the Kepler
    /// solver's square-root term would not be real. Caught eagerly at
    /// catalog construction, never at computation time.
    InvalidElements { body: Body, eccentricity: f64 },
}

impl Display for OrbitError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidElements { body, eccentricity } => write!(
                f,
                "invalid elements for {}: eccentricity {eccentricity} outside 0..1",
                body.name()
            ),
        }
    }
}

impl Error for OrbitError {}
