//! Simplified Keplerian position engine for the tracked bodies.
//!
//! This crate provides:
//! - The closed [`Body`] set (Sun, Moon, Mercury)
//! - Per-body [`OrbitalElements`] and the built-in [`BodyCatalog`]
//! - Propagation of elements to an ecliptic longitude in [0, 360)
//!
//! Everything is pure and side-effect-free; the catalog is immutable
//! configuration built once at startup, so concurrent queries need no
//! locking.

pub mod elements;
pub mod error;
pub mod kepler;

pub use elements::{BodyCatalog, MERCURY_ELEMENTS, MOON_ELEMENTS, OrbitalElements, SUN_ELEMENTS};
pub use error::OrbitError;
pub use kepler::{
    KEPLER_ITERATIONS, eccentric_anomaly_rad, ecliptic_longitude, mean_anomaly_deg, normalize_deg,
    true_anomaly_rad,
};

/// The tracked bodies.
///
/// A closed, fixed set: the profiler weighs exactly these three. Keeping
/// the set closed makes an unknown-body lookup unrepresentable in the
/// core; the condition only exists at the string boundary
/// ([`Body::from_name`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Body {
    Sun,
    Moon,
    Mercury,
}

/// All tracked bodies in evaluation order.
pub const ALL_BODIES: [Body; 3] = [Body::Sun, Body::Moon, Body::Mercury];

impl Body {
    /// Lowercase identifier of the body.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "sun",
            Self::Moon => "moon",
            Self::Mercury => "mercury",
        }
    }

    /// 0-based index into [`ALL_BODIES`].
    pub const fn index(self) -> u8 {
        match self {
            Self::Sun => 0,
            Self::Moon => 1,
            Self::Mercury => 2,
        }
    }

    /// Parse a body identifier. Returns None outside the fixed set.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "sun" => Some(Self::Sun),
            "moon" => Some(Self::Moon),
            "mercury" => Some(Self::Mercury),
            _ => None,
        }
    }
}

impl BodyCatalog {
    /// Ecliptic longitude of a body at a Julian Day, degrees in [0, 360).
    pub fn longitude(&self, body: Body, jd: f64) -> f64 {
        ecliptic_longitude(self.elements_of(body), jd)
    }
}
