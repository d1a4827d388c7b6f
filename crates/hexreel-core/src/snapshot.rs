//! Read-only state snapshots for renderers

use serde::{Deserialize, Serialize};

use crate::outcome::Outcome;
use crate::reel_state::ReelState;
use crate::symbols::{REEL_COUNT, Symbol, symbols_for};

/// Game state at one instant of a spin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Reel values in grid order
    pub reels: [u8; REEL_COUNT],
    /// `max(0, max_tries - tries_used)`
    pub remaining_tries: u32,
    /// Always `None` while shuffling
    pub outcome: Outcome,
    /// True for intermediate ticks and while a spin is armed
    pub is_shuffling: bool,
    /// Spin sequence number, 0 before the first spin
    pub spin: u64,
    /// Tick within the spin (1-based), 0 before the first tick
    pub tick: u32,
}

impl Snapshot {
    pub(crate) fn capture(state: &ReelState, is_shuffling: bool, spin: u64, tick: u32) -> Self {
        Self {
            reels: state.reels(),
            remaining_tries: state.remaining_tries(),
            outcome: state.outcome(),
            is_shuffling,
            spin,
            tick,
        }
    }

    /// The settled snapshot that closes a spin
    pub fn is_terminal(&self) -> bool {
        self.spin > 0 && !self.is_shuffling
    }

    pub fn symbols(&self) -> Vec<Symbol> {
        symbols_for(&self.reels)
    }
}
