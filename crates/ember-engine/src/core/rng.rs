//! Seedable pseudo-random number generator (xorshift64).
//! Deterministic, fast, no-std compatible.
//!
//! All randomness in the engine (launch colors, burst patterns, emission
//! angles, spawn rolls) flows through an explicitly passed `Rng`, so a fixed
//! seed reproduces an entire show tick-for-tick.

/// Seedable pseudo-random number generator (xorshift64).
#[derive(Debug, Clone)]
pub struct Rng {
    state: u64,
}

impl Rng {
    pub fn new(seed: u64) -> Self {
        Rng {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    /// Generate a random integer in [0, upper_bound).
    pub fn next_int(&mut self, upper_bound: u32) -> u32 {
        (self.next_u64() % upper_bound as u64) as u32
    }

    /// Generate a random float in [0, 1) with 24 bits of precision.
    pub fn next_f32(&mut self) -> f32 {
        (self.next_u64() >> 40) as f32 / (1u64 << 24) as f32
    }

    /// Generate a random float in [min, max).
    pub fn range_f32(&mut self, min: f32, max: f32) -> f32 {
        min + self.next_f32() * (max - min)
    }

    /// Generate a random integer in [min, max], inclusive on both ends.
    pub fn range_int(&mut self, min: u32, max: u32) -> u32 {
        min + self.next_int(max - min + 1)
    }

    /// Roll a per-tick probability. `probability` <= 0 never fires,
    /// >= 1 always fires.
    pub fn chance(&mut self, probability: f32) -> bool {
        if probability <= 0.0 {
            return false;
        }
        if probability >= 1.0 {
            return true;
        }
        self.next_f32() < probability
    }
}
