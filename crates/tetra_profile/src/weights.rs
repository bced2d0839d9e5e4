//! Per-body contribution weights.
//!
//! Each tracked body contributes its weight to the element its sign falls
//! in. The standard weighting is Sun = 5, Moon = 5, Mercury = 3 (luminaries
//! dominate, Mercury moderates).

use tetra_orbit::{ALL_BODIES, Body};

use crate::error::ProfileError;

/// Standard per-body weights, in [`ALL_BODIES`] order.
pub const STANDARD_WEIGHTS: [u32; 3] = [5, 5, 3];

/// Positive integer weight per tracked body.
///
/// Immutable configuration. Weights must be positive: a zero weight would
/// silently drop a body from the profile sum, breaking the invariant that
/// the four components add up to the total of all body weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementWeights {
    weights: [u32; 3],
}

impl ElementWeights {
    /// The standard weighting (Sun = 5, Moon = 5, Mercury = 3).
    pub const fn standard() -> Self {
        Self {
            weights: STANDARD_WEIGHTS,
        }
    }

    /// Build custom weights in [`ALL_BODIES`] order, rejecting zeros.
    pub fn new(weights: [u32; 3]) -> Result<Self, ProfileError> {
        for body in ALL_BODIES {
            if weights[body.index() as usize] == 0 {
                return Err(ProfileError::InvalidWeight(body));
            }
        }
        Ok(Self { weights })
    }

    /// Weight of a tracked body.
    pub const fn of(&self, body: Body) -> u32 {
        self.weights[body.index() as usize]
    }

    /// Sum of all body weights; every computed profile totals this.
    pub fn total(&self) -> u32 {
        self.weights.iter().sum()
    }
}

impl Default for ElementWeights {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_values() {
        let w = ElementWeights::standard();
        assert_eq!(w.of(Body::Sun), 5);
        assert_eq!(w.of(Body::Moon), 5);
        assert_eq!(w.of(Body::Mercury), 3);
    }

    #[test]
    fn standard_total_is_13() {
        assert_eq!(ElementWeights::standard().total(), 13);
    }

    #[test]
    fn custom_weights() {
        let w = ElementWeights::new([1, 2, 3]).unwrap();
        assert_eq!(w.of(Body::Sun), 1);
        assert_eq!(w.of(Body::Moon), 2);
        assert_eq!(w.of(Body::Mercury), 3);
        assert_eq!(w.total(), 6);
    }

    #[test]
    fn zero_weight_rejected() {
        assert_eq!(
            ElementWeights::new([5, 0, 3]),
            Err(ProfileError::InvalidWeight(Body::Moon))
        );
    }
}
