//! In-session statistics

use serde::{Deserialize, Serialize};

use crate::outcome::Outcome;

/// Counters for the running session. Never persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStats {
    pub total_spins: u64,
    pub wins: u64,
    pub losses: u64,
    /// Spins that settled with `Outcome::None`
    pub continues: u64,
}

impl SessionStats {
    pub fn record(&mut self, outcome: Outcome) {
        self.total_spins += 1;
        match outcome {
            Outcome::Win => self.wins += 1,
            Outcome::Lose => self.losses += 1,
            Outcome::None => self.continues += 1,
        }
    }

    /// Wins per settled game (win or lose), in percent
    pub fn win_rate(&self) -> f64 {
        let games = self.wins + self.losses;
        if games > 0 {
            (self.wins as f64 / games as f64) * 100.0
        } else {
            0.0
        }
    }
}
