pub mod rand_util;

/// A deterministic random number source that can be "replayed" from its initial seed.
///
/// Reconstruction of generated encounter fields must be reproducible, so every source records
/// the seed it started from.
pub trait RandomSource: Send + Sync {
    /// Returns the initial seed the source was created with.
    ///
    /// The initial seed can be used to replay the generated sequence.
    fn initial_seed(&self) -> u32;

    /// Returns the next value in the sequence.
    fn next(&mut self) -> u16;
}

/// The 32-bit linear congruential generator used by the classic handheld games.
///
/// Each step multiplies by `0x41C64E6D` and adds `0x6073`, both wrapping; the output is the
/// upper half of the new seed.
pub struct ClassicLcrng {
    initial_seed: u32,
    seed: u32,
}

impl ClassicLcrng {
    /// Creates a new generator.
    ///
    /// If two generators are created with the same seed, their output is exactly the same.
    #[cfg(feature = "std")]
    pub fn new(seed: Option<u32>) -> Self {
        let seed = seed.unwrap_or_else(Self::generate_seed);
        Self::from_seed(seed)
    }

    /// Creates a new generator from an explicit seed.
    pub fn from_seed(seed: u32) -> Self {
        Self {
            initial_seed: seed,
            seed,
        }
    }

    #[cfg(feature = "std")]
    fn generate_seed() -> u32 {
        use rand::Rng;
        let mut rng = rand::rng();
        rng.random()
    }

    fn next_seed(seed: u32) -> u32 {
        const A: u32 = 0x41C64E6D;
        const C: u32 = 0x6073;
        seed.wrapping_mul(A).wrapping_add(C)
    }
}

impl RandomSource for ClassicLcrng {
    fn initial_seed(&self) -> u32 {
        self.initial_seed
    }

    fn next(&mut self) -> u16 {
        self.seed = Self::next_seed(self.seed);
        // The low half is highly predictable; only the upper 16 bits are published.
        (self.seed >> 16) as u16
    }
}
