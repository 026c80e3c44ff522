//! Uniform random source for spawn sampling.
//!
//! A [`RandomSource`] is created once per simulation and handed to the
//! [`Emitter`](crate::Emitter) that owns it. Production code seeds it from
//! system entropy; tests seed it with a fixed value so spawn sequences are
//! repeatable.
//!
//! ```ignore
//! let mut rng = RandomSource::seeded(7);
//! let speed = rng.range(80.0, 100.0);
//! ```

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Uniform float generator over closed intervals.
#[derive(Debug, Clone)]
pub struct RandomSource {
    rng: SmallRng,
}

impl RandomSource {
    /// Create a source seeded from system entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: SmallRng::from_entropy(),
        }
    }

    /// Create a source with a fixed seed (repeatable sequences).
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Random f32 in `[0, 1]`, both ends inclusive.
    #[inline]
    pub fn unit(&mut self) -> f32 {
        self.rng.gen_range(0.0..=1.0)
    }

    /// Random f32 in `[min, max]`.
    ///
    /// The bounds may be given in either order; `min == max` returns `min`
    /// exactly. Non-finite bounds propagate into the result rather than
    /// panicking.
    #[inline]
    pub fn range(&mut self, min: f32, max: f32) -> f32 {
        if min == max {
            return min;
        }
        min + self.unit() * (max - min)
    }

    /// Random f32 in `[center - half_width, center + half_width]`.
    #[inline]
    pub fn around(&mut self, center: f32, half_width: f32) -> f32 {
        self.range(center - half_width, center + half_width)
    }
}

impl Default for RandomSource {
    fn default() -> Self {
        Self::from_entropy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_bounds() {
        let mut rng = RandomSource::seeded(1);
        for _ in 0..1000 {
            let v = rng.range(-3.0, 5.0);
            assert!((-3.0..=5.0).contains(&v));
        }
    }

    #[test]
    fn test_reversed_bounds() {
        let mut rng = RandomSource::seeded(2);
        for _ in 0..1000 {
            let v = rng.range(10.0, 2.0);
            assert!((2.0..=10.0).contains(&v));
        }
    }

    #[test]
    fn test_degenerate_range_is_exact() {
        let mut rng = RandomSource::seeded(3);
        assert_eq!(rng.range(100.0, 100.0), 100.0);
        assert_eq!(rng.around(90.0, 0.0), 90.0);
    }

    #[test]
    fn test_seeded_is_repeatable() {
        let mut a = RandomSource::seeded(42);
        let mut b = RandomSource::seeded(42);
        for _ in 0..16 {
            assert_eq!(a.unit(), b.unit());
        }
    }
}
