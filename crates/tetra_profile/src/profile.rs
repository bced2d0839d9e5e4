//! Weighted four-element profile computation.

use tetra_orbit::{ALL_BODIES, BodyCatalog};
use tetra_time::{CalendarDate, ClockTime, calendar_to_jd};

use crate::sign::{Element, sign_from_longitude};
use crate::weights::ElementWeights;

/// A four-component elemental affinity profile.
///
/// Each field holds the summed weights of the bodies whose sign falls in
/// that element's group. Created fresh per computation; immutable once
/// returned. The component sum always equals the sum of all body weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ElementalProfile {
    pub fire: u32,
    pub earth: u32,
    pub air: u32,
    pub water: u32,
}

impl ElementalProfile {
    /// Component for one element.
    pub const fn of(&self, element: Element) -> u32 {
        match element {
            Element::Fire => self.fire,
            Element::Earth => self.earth,
            Element::Air => self.air,
            Element::Water => self.water,
        }
    }

    /// Sum of the four components.
    pub const fn total(&self) -> u32 {
        self.fire + self.earth + self.air + self.water
    }

    /// Largest single component, the shared chart-scale bound when two
    /// profiles are displayed together.
    pub fn max_component(&self) -> u32 {
        self.fire.max(self.earth).max(self.air).max(self.water)
    }

    fn add(&mut self, element: Element, weight: u32) {
        match element {
            Element::Fire => self.fire += weight,
            Element::Earth => self.earth += weight,
            Element::Air => self.air += weight,
            Element::Water => self.water += weight,
        }
    }
}

/// Computes elemental profiles from birth dates.
///
/// Holds the immutable catalog and weights; build once at startup and
/// share freely (computation is pure, so concurrent calls need no
/// locking).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Profiler {
    catalog: BodyCatalog,
    weights: ElementWeights,
}

impl Profiler {
    /// Profiler over the built-in catalog and standard weights.
    pub const fn standard() -> Self {
        Self {
            catalog: BodyCatalog::standard(),
            weights: ElementWeights::standard(),
        }
    }

    /// Profiler over custom configuration. Both arguments were validated
    /// by their own constructors, so this cannot fail.
    pub const fn new(catalog: BodyCatalog, weights: ElementWeights) -> Self {
        Self { catalog, weights }
    }

    pub const fn catalog(&self) -> &BodyCatalog {
        &self.catalog
    }

    pub const fn weights(&self) -> &ElementWeights {
        &self.weights
    }

    /// Compute the elemental profile for a birth date and time.
    ///
    /// For each tracked body: ecliptic longitude at the date's Julian Day,
    /// sign from the longitude, element from the sign's cyclic-by-4 rule,
    /// then the body's weight accumulates into that element. Every body
    /// contributes, so `total()` equals `weights().total()`.
    pub fn compute(&self, date: CalendarDate, time: ClockTime) -> ElementalProfile {
        let jd = calendar_to_jd(date, time);
        let mut profile = ElementalProfile::default();
        for body in ALL_BODIES {
            let lon = self.catalog.longitude(body, jd);
            let sign = sign_from_longitude(lon).sign;
            profile.add(sign.element(), self.weights.of(body));
        }
        profile
    }
}

impl Default for Profiler {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> CalendarDate {
        CalendarDate::new(y, m, d).unwrap()
    }

    #[test]
    fn profile_total_equals_weight_total() {
        let profiler = Profiler::standard();
        for (y, m, d) in [(2000, 1, 1), (1969, 7, 20), (1900, 12, 31), (2024, 2, 29)] {
            let p = profiler.compute(date(y, m, d), ClockTime::NOON);
            assert_eq!(p.total(), 13, "at {y}-{m}-{d}");
        }
    }

    #[test]
    fn profile_deterministic() {
        let profiler = Profiler::standard();
        let a = profiler.compute(date(1985, 6, 15), ClockTime::new(4, 30).unwrap());
        let b = profiler.compute(date(1985, 6, 15), ClockTime::new(4, 30).unwrap());
        assert_eq!(a, b);
    }

    #[test]
    fn custom_weights_change_total() {
        let weights = ElementWeights::new([1, 1, 1]).unwrap();
        let profiler = Profiler::new(BodyCatalog::standard(), weights);
        let p = profiler.compute(date(2000, 1, 1), ClockTime::NOON);
        assert_eq!(p.total(), 3);
    }

    #[test]
    fn accessor_matches_fields() {
        let p = ElementalProfile {
            fire: 5,
            earth: 3,
            air: 0,
            water: 5,
        };
        assert_eq!(p.of(Element::Fire), 5);
        assert_eq!(p.of(Element::Earth), 3);
        assert_eq!(p.of(Element::Air), 0);
        assert_eq!(p.of(Element::Water), 5);
        assert_eq!(p.total(), 13);
        assert_eq!(p.max_component(), 5);
    }

    #[test]
    fn empty_profile_is_zero() {
        let p = ElementalProfile::default();
        assert_eq!(p.total(), 0);
        assert_eq!(p.max_component(), 0);
    }
}
