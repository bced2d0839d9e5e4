//! Elemental affinity profiles from birth dates.
//!
//! This crate maps each tracked body's ecliptic longitude to a zodiac
//! sign, each sign to one of the four classical elements, and sums the
//! per-body weights into a four-component [`ElementalProfile`]. A caller
//! comparing two subjects computes two profiles and diffs or overlays
//! them; rendering belongs to the caller.
//!
//! # Quick start
//!
//! ```
//! use tetra_profile::compute_profile;
//! use tetra_time::CalendarDate;
//!
//! let date = CalendarDate::new(2000, 1, 1)?;
//! let profile = compute_profile(date, None); // noon default
//! assert_eq!(profile.total(), 13);
//! # Ok::<(), tetra_time::TimeError>(())
//! ```

pub mod error;
pub mod profile;
pub mod sign;
pub mod weights;

pub use error::ProfileError;
pub use profile::{ElementalProfile, Profiler};
pub use sign::{ALL_SIGNS, ELEMENT_CYCLE, Element, SignInfo, ZodiacSign, sign_from_longitude};
pub use weights::{ElementWeights, STANDARD_WEIGHTS};

// Re-export the types callers need to drive the profiler.
pub use tetra_orbit::{ALL_BODIES, Body, BodyCatalog, OrbitalElements};
pub use tetra_time::{CalendarDate, ClockTime};

/// Compute an elemental profile with the built-in catalog and standard
/// weights. The single entry point for callers that don't need custom
/// configuration; `time = None` defaults to noon.
pub fn compute_profile(date: CalendarDate, time: Option<ClockTime>) -> ElementalProfile {
    Profiler::standard().compute(date, time.unwrap_or(ClockTime::NOON))
}
