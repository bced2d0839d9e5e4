//! Per-body Keplerian orbital elements and the built-in catalog.
//!
//! Low-precision J2000 mean elements for the three tracked bodies. The
//! engine is deliberately not a general ephemeris: the catalog is a fixed,
//! small table chosen for determinism, not for professional accuracy.

use crate::error::OrbitError;
use crate::{ALL_BODIES, Body};

/// Simplified Keplerian orbital elements, valid at `epoch_jd`.
///
/// Immutable configuration, defined once at process start.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalElements {
    /// Reference Julian Day for which the remaining elements hold.
    pub epoch_jd: f64,
    /// Rate of change of mean longitude, degrees per day.
    pub mean_motion_deg_per_day: f64,
    /// Mean longitude at the epoch, degrees.
    pub mean_longitude_deg: f64,
    /// Orbital eccentricity, 0 <= e < 1.
    pub eccentricity: f64,
    /// Argument of perihelion, degrees.
    pub perihelion_deg: f64,
    /// Semi-major axis in AU. Descriptive only; the longitude
    /// computation never reads it.
    pub semi_major_axis_au: f64,
}

impl OrbitalElements {
    /// Check the eccentricity bound required by the Kepler solver.
    pub fn validate(&self, body: Body) -> Result<(), OrbitError> {
        if !(0.0..1.0).contains(&self.eccentricity) {
            return Err(OrbitError::InvalidElements {
                body,
                eccentricity: self.eccentricity,
            });
        }
        Ok(())
    }
}

/// Sun (geocentric apparent orbit), J2000 mean elements.
pub const SUN_ELEMENTS: OrbitalElements = OrbitalElements {
    epoch_jd: tetra_time::J2000_JD,
    mean_motion_deg_per_day: 0.985_647_36,
    mean_longitude_deg: 280.459,
    eccentricity: 0.0167,
    perihelion_deg: 102.937,
    semi_major_axis_au: 1.0,
};

/// Moon (geocentric), J2000 mean elements.
pub const MOON_ELEMENTS: OrbitalElements = OrbitalElements {
    epoch_jd: tetra_time::J2000_JD,
    mean_motion_deg_per_day: 13.176_396,
    mean_longitude_deg: 218.316,
    eccentricity: 0.0549,
    perihelion_deg: 318.15,
    semi_major_axis_au: 0.002_57,
};

/// Mercury (heliocentric), J2000 mean elements.
pub const MERCURY_ELEMENTS: OrbitalElements = OrbitalElements {
    epoch_jd: tetra_time::J2000_JD,
    mean_motion_deg_per_day: 4.092_334_4,
    mean_longitude_deg: 252.251,
    eccentricity: 0.2056,
    perihelion_deg: 77.456,
    semi_major_axis_au: 0.387_10,
};

/// Read-only per-body element table.
///
/// Every tracked body has an entry; lookups are total over the closed
/// [`Body`] enum, so a missing body is unrepresentable rather than a
/// runtime error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyCatalog {
    elements: [OrbitalElements; 3],
}

impl BodyCatalog {
    /// The built-in catalog of J2000 low-precision elements.
    pub const fn standard() -> Self {
        Self {
            elements: [SUN_ELEMENTS, MOON_ELEMENTS, MERCURY_ELEMENTS],
        }
    }

    /// Build a catalog from custom elements, validating eagerly.
    ///
    /// Fails fast with [`OrbitError::InvalidElements`] if any body's
    /// eccentricity is outside 0 <= e < 1.
    pub fn new(
        sun: OrbitalElements,
        moon: OrbitalElements,
        mercury: OrbitalElements,
    ) -> Result<Self, OrbitError> {
        let catalog = Self {
            elements: [sun, moon, mercury],
        };
        for body in ALL_BODIES {
            catalog.elements_of(body).validate(body)?;
        }
        Ok(catalog)
    }

    /// Elements for a tracked body.
    pub fn elements_of(&self, body: Body) -> &OrbitalElements {
        &self.elements[body.index() as usize]
    }
}

impl Default for BodyCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
