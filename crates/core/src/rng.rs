//! RNG module - deterministic random numbers for tile spawning.
//!
//! The engine owns its generator so tests can inject a fixed seed and
//! replay identical spawn sequences. No global RNG state anywhere.

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
    /// Multiply-shift reduction keeps the draw on the generator's high
    /// bits; the low bits of an LCG cycle with tiny periods and would
    /// skew small-range draws.
    pub fn next_range(&mut self, max: u32) -> u32 {
        (((self.next_u32() as u64) * (max as u64)) >> 32) as u32
    }

    /// Get the current RNG state (exported in snapshots)
    pub fn seed(&self) -> u32 {
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

        // Different seeds should eventually diverge
        assert_ne!(rng1.next_u32(), rng2.next_u32());
    }

    #[test]
    fn test_rng_zero_seed_is_remapped() {
        let mut zeroed = SimpleRng::new(0);
        let mut one = SimpleRng::new(1);
        assert_eq!(zeroed.next_u32(), one.next_u32());
    }

    #[test]
    fn test_next_range_bounds() {
        let mut rng = SimpleRng::new(7);
        for _ in 0..1000 {
            assert!(rng.next_range(10) < 10);
        }
    }

    #[test]
    fn test_next_range_covers_all_outcomes() {
        let mut rng = SimpleRng::new(3);
        let mut seen = [false; 10];
        for _ in 0..1000 {
            seen[rng.next_range(10) as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_interleaved_draws_still_vary() {
        // Spawning makes two draws per tile (position, then value); the
        // second draw must not get stuck on one residue class.
        let mut rng = SimpleRng::new(5);
        let mut seen = [false; 10];
        for _ in 0..2000 {
            let _pos = rng.next_range(16);
            seen[rng.next_range(10) as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }
}
