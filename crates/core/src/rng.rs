//! RNG module - small deterministic generator for secrets and particles
//!
//! A linear congruential generator is plenty for a guessing game and keeps every
//! round reproducible from its seed, which the tests rely on.
//!
//! [`SimpleRng::next_between`] uses rejection sampling so each secret in
//! `1..=100` is drawn with equal probability (plain `% 100` would favour the
//! low values slightly).

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Unbiased: draws falling in the incomplete final bucket are rejected.
    pub fn next_range(&mut self, max: u32) -> u32 {
        if max <= 1 {
            return 0;
        }
        let zone = u32::MAX - (u32::MAX % max);
        loop {
            // The high bits of an LCG are far better distributed than the low ones.
            let v = self.next_u32().rotate_left(16);
            if v < zone {
                return v % max;
            }
        }
    }

    /// Generate random value in range [lo, hi] (inclusive)
    pub fn next_between(&mut self, lo: u32, hi: u32) -> u32 {
        debug_assert!(lo <= hi);
        lo + self.next_range(hi - lo + 1)
    }

    /// Generate a float in [0, 1)
    pub fn next_f32(&mut self) -> f32 {
        // 24 bits fit the f32 mantissa exactly.
        (self.next_u32() >> 8) as f32 / (1u32 << 24) as f32
    }

    /// Generate a float in [lo, hi)
    pub fn range_f32(&mut self, lo: f32, hi: f32) -> f32 {
        lo + self.next_f32() * (hi - lo)
    }

    /// Current generator state (reseeding with it resumes the same sequence)
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        // Same seed should produce same sequence
        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);

        let v1 = rng1.next_u32();
        let v2 = rng2.next_u32();
        assert_ne!(v1, v2);
    }

    #[test]
    fn test_zero_seed_is_usable() {
        let mut rng = SimpleRng::new(0);
        assert_ne!(rng.next_u32(), 0);
    }

    #[test]
    fn test_next_between_stays_inclusive() {
        let mut rng = SimpleRng::new(7);
        let mut seen_lo = false;
        let mut seen_hi = false;
        for _ in 0..20_000 {
            let v = rng.next_between(1, 100);
            assert!((1..=100).contains(&v));
            seen_lo |= v == 1;
            seen_hi |= v == 100;
        }
        assert!(seen_lo && seen_hi, "both bounds should be reachable");
    }

    #[test]
    fn test_next_between_covers_every_value() {
        let mut rng = SimpleRng::new(99);
        let mut counts = [0u32; 100];
        for _ in 0..100_000 {
            counts[(rng.next_between(1, 100) - 1) as usize] += 1;
        }
        // Expected ~1000 each; a broken generator would leave gaps or spikes.
        for (i, &c) in counts.iter().enumerate() {
            assert!((700..1300).contains(&c), "value {} drawn {} times", i + 1, c);
        }
    }

    #[test]
    fn test_range_f32_bounds() {
        let mut rng = SimpleRng::new(3);
        for _ in 0..10_000 {
            let v = rng.range_f32(-6.0, 6.0);
            assert!((-6.0..6.0).contains(&v));
        }
    }

    #[test]
    fn test_next_range_degenerate() {
        let mut rng = SimpleRng::new(3);
        assert_eq!(rng.next_range(0), 0);
        assert_eq!(rng.next_range(1), 0);
    }
}
