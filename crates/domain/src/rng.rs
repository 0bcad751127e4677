//! Deterministic pseudo-random generator for routine construction.
//!
//! The contract is reproducibility, not randomness quality: the same seed
//! always produces the same sequence, so a generated routine can be
//! reconstructed and tested bit for bit. The recurrence is the classic
//! `s' = (s * 1103515245 + 12345) mod 2^31` linear congruential generator,
//! computed over `u64` state.

const MULTIPLIER: u64 = 1_103_515_245;
const INCREMENT: u64 = 12_345;
const MODULUS_MASK: u64 = 0x7fff_ffff;

#[derive(Debug, Clone)]
pub struct Lcg {
    state: u64,
}

impl Lcg {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    pub fn next_value(&mut self) -> u64 {
        self.state = (self
            .state
            .wrapping_mul(MULTIPLIER)
            .wrapping_add(INCREMENT))
            & MODULUS_MASK;
        self.state
    }

    /// Draws a value in `min..=max`. `min` and `max` may be equal.
    pub fn in_range(&mut self, min: u32, max: u32) -> u32 {
        debug_assert!(min <= max);
        let span = u64::from(max - min + 1);
        #[allow(clippy::cast_possible_truncation)]
        let offset = (self.next_value() % span) as u32;
        min + offset
    }

    /// Fisher-Yates shuffle driven by successive generator outputs.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            #[allow(clippy::cast_possible_truncation)]
            let j = (self.next_value() % (i as u64 + 1)) as usize;
            items.swap(i, j);
        }
    }
}
