//! Reel values, try counter and outcome

use crate::outcome::Outcome;
use crate::randomizer::ReelRandomizer;
use crate::symbols::{REEL_COUNT, SYMBOL_COUNT, Symbol, symbols_for};

/// Starting grid of a fresh game
pub const DEFAULT_REELS: [u8; REEL_COUNT] = [0, 1, 2, 1, 0];

/// Mutable game state owned by the spin controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReelState {
    reels: [u8; REEL_COUNT],
    tries_used: u32,
    max_tries: u32,
    outcome: Outcome,
}

impl ReelState {
    /// Create a state with the given grid and try budget
    pub fn new(reels: [u8; REEL_COUNT], max_tries: u32) -> Result<Self, ReelStateError> {
        if let Some((reel, &value)) = reels.iter().enumerate().find(|(_, v)| **v >= SYMBOL_COUNT) {
            return Err(ReelStateError::SymbolOutOfRange { reel, value });
        }

        Ok(Self {
            reels,
            tries_used: 0,
            max_tries,
            outcome: Outcome::None,
        })
    }

    /// Overwrite every reel with an independent draw in `0..symbol_count`
    pub fn randomize_all<R: ReelRandomizer + ?Sized>(&mut self, randomizer: &mut R, symbol_count: u8) {
        for reel in self.reels.iter_mut() {
            *reel = randomizer.draw(symbol_count);
        }
    }

    /// True iff every reel shows the first reel's symbol
    pub fn all_equal(&self) -> bool {
        let first = self.reels[0];
        self.reels.iter().all(|&r| r == first)
    }

    /// Count one more try. Not clamped, the caller checks the limit.
    pub fn increment_tries(&mut self) {
        self.tries_used += 1;
    }

    pub fn reset_tries(&mut self) {
        self.tries_used = 0;
    }

    pub fn reels(&self) -> [u8; REEL_COUNT] {
        self.reels
    }

    pub fn symbols(&self) -> Vec<Symbol> {
        symbols_for(&self.reels)
    }

    pub fn tries_used(&self) -> u32 {
        self.tries_used
    }

    pub fn max_tries(&self) -> u32 {
        self.max_tries
    }

    /// `max(0, max_tries - tries_used)`
    pub fn remaining_tries(&self) -> u32 {
        self.max_tries.saturating_sub(self.tries_used)
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub(crate) fn set_outcome(&mut self, outcome: Outcome) {
        self.outcome = outcome;
    }

    #[cfg(test)]
    pub(crate) fn set_reels(&mut self, reels: [u8; REEL_COUNT]) {
        self.reels = reels;
    }
}

impl Default for ReelState {
    fn default() -> Self {
        Self {
            reels: DEFAULT_REELS,
            tries_used: 0,
            max_tries: crate::config::DEFAULT_MAX_TRIES,
            outcome: Outcome::None,
        }
    }
}

/// Reel state construction errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReelStateError {
    #[error("Reel {reel} holds symbol {value}, expected 0..{max}", max = SYMBOL_COUNT)]
    SymbolOutOfRange { reel: usize, value: u8 },
}
