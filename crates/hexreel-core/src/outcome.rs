//! Spin outcome classification

use serde::{Deserialize, Serialize};

/// Result of a completed spin
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// No result yet, or the spin continues the current try budget
    #[default]
    None,
    /// All reels matched
    Win,
    /// Try budget exhausted without a match
    Lose,
}

impl Outcome {
    /// Win or Lose. Both reset the try counter.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::None)
    }

    /// Alert title shown for this outcome
    pub fn title(self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Win => Some("NICE"),
            Self::Lose => Some("OOPS"),
        }
    }

    /// Alert body shown for this outcome
    pub fn message(self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Win => Some("You got it!"),
            Self::Lose => Some("Opsie opsie! TRY AGAIN:("),
        }
    }
}
