//! Random sources for configuration generation and procedural decoration.
//!
//! Generation is non-deterministic by default: [`Xorshift64::from_entropy`]
//! seeds from the OS via a v4 UUID. Anything that needs repeatability (tests,
//! per-logo decoration in the renderers) seeds explicitly instead, through
//! [`Xorshift64::new`] or [`Xorshift64::from_label`].

use serde::{Deserialize, Serialize};

/// Source of uniformly distributed values.
///
/// The generator only ever asks for `f64`s in [0, 1); everything else is
/// derived from that, so any implementation that gets `next_f64` right is a
/// valid drop-in (seeded, recorded, or entropy-backed).
pub trait RandomSource {
    /// Returns a uniformly distributed f64 in [0, 1).
    fn next_f64(&mut self) -> f64;

    /// Returns a uniformly distributed f64 in [min, max).
    fn next_range(&mut self, min: f64, max: f64) -> f64 {
        min + self.next_f64() * (max - min)
    }

    /// Returns a uniformly distributed usize in [0, max). `max` must be non-zero.
    fn next_index(&mut self, max: usize) -> usize {
        ((self.next_f64() * max as f64) as usize).min(max.saturating_sub(1))
    }

    /// Returns a uniformly distributed integer in [min, max] (inclusive).
    fn next_int_inclusive(&mut self, min: i64, max: i64) -> i64 {
        let span = (max - min + 1).max(1) as usize;
        min + self.next_index(span) as i64
    }
}

/// Xorshift64 PRNG. Same seed always produces the same sequence.
///
/// Uses the standard shift parameters (13, 7, 17). Seed of 0 is replaced
/// with a non-zero fallback to avoid the all-zeros fixed point.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Xorshift64 {
    state: u64,
}

impl Xorshift64 {
    const FALLBACK_SEED: u64 = 0x5EED_DEAD_BEEF_CAFE;

    /// Creates a new PRNG with the given seed (0 maps to a fixed fallback).
    pub fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { Self::FALLBACK_SEED } else { seed },
        }
    }

    /// Creates a PRNG seeded from OS entropy.
    pub fn from_entropy() -> Self {
        let (hi, lo) = uuid::Uuid::new_v4().as_u64_pair();
        Self::new(hi ^ lo.rotate_left(17))
    }

    /// Creates a PRNG seeded by the FNV-1a hash of `label`.
    ///
    /// Renderers use this with a configuration id so procedural decoration
    /// is stable for a given logo.
    pub fn from_label(label: &str) -> Self {
        const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
        const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;
        let hash = label
            .bytes()
            .fold(FNV_OFFSET, |h, b| (h ^ u64::from(b)).wrapping_mul(FNV_PRIME));
        Self::new(hash)
    }

    /// Advances the state and returns the next 64-bit value.
    pub fn next_u64(&mut self) -> u64 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        self.state
    }
}

impl RandomSource for Xorshift64 {
    /// Upper 53 bits of `next_u64()` over 2^53, for full mantissa precision.
    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }
}
