//! Reel value sources

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::symbols::REEL_COUNT;

/// Frame used to pad scripted spins. Never all-equal.
pub const MISMATCH_FRAME: [u8; REEL_COUNT] = [0, 1, 2, 0, 1];

/// Source of reel values
pub trait ReelRandomizer: Send {
    /// Draw one value in `0..symbol_count`
    fn draw(&mut self, symbol_count: u8) -> u8;
}

/// Uniform randomizer backed by `StdRng`
#[derive(Debug, Clone)]
pub struct StdRandomizer {
    rng: StdRng,
}

impl StdRandomizer {
    /// Seed from the operating system
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible sequence for a given seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for StdRandomizer {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl ReelRandomizer for StdRandomizer {
    fn draw(&mut self, symbol_count: u8) -> u8 {
        if symbol_count <= 1 {
            return 0;
        }
        self.rng.random_range(0..symbol_count)
    }
}

/// Replays fixed frames, cycling when exhausted
///
/// Each frame is one tick's worth of reel values. Values are reduced
/// modulo the symbol count, so every draw stays in range.
#[derive(Debug, Clone)]
pub struct ScriptedRandomizer {
    values: Vec<u8>,
    cursor: usize,
}

impl ScriptedRandomizer {
    /// Replay `frames` in order
    pub fn new(frames: Vec<[u8; REEL_COUNT]>) -> Self {
        Self {
            values: frames.into_iter().flatten().collect(),
            cursor: 0,
        }
    }

    /// Show `frame` on every tick
    pub fn repeating(frame: [u8; REEL_COUNT]) -> Self {
        Self::new(vec![frame])
    }

    /// One spin of `ticks` ticks whose last tick lands on `last`
    ///
    /// Earlier ticks show [`MISMATCH_FRAME`]. The script repeats for
    /// every following spin of the same length.
    pub fn ending_with(ticks: u32, last: [u8; REEL_COUNT]) -> Self {
        let mut frames = vec![MISMATCH_FRAME; ticks.saturating_sub(1) as usize];
        frames.push(last);
        Self::new(frames)
    }

    /// Number of values drawn so far
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl ReelRandomizer for ScriptedRandomizer {
    fn draw(&mut self, symbol_count: u8) -> u8 {
        if self.values.is_empty() || symbol_count == 0 {
            return 0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value % symbol_count
    }
}
