//! Symbol definitions and grid layout

use serde::{Deserialize, Serialize};

/// Number of reels on the hexagonal grid
pub const REEL_COUNT: usize = 5;

/// Number of distinct symbols a reel can show
pub const SYMBOL_COUNT: u8 = 3;

/// Grid rows, top to bottom, as reel indices (2 / 1 / 2 hexagons)
pub const GRID_ROWS: [&[usize]; 3] = [&[0, 1], &[2], &[3, 4]];

/// A reel symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Symbol {
    Eating = 0,
    Happy = 1,
    Love = 2,
}

impl Symbol {
    /// All symbols in index order
    pub const ALL: [Symbol; SYMBOL_COUNT as usize] = [Symbol::Eating, Symbol::Happy, Symbol::Love];

    /// Symbol for a reel value, `None` when out of range
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    /// Reel value of this symbol
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Asset name used by renderers
    pub fn name(self) -> &'static str {
        match self {
            Self::Eating => "eating",
            Self::Happy => "happy",
            Self::Love => "love",
        }
    }

    /// Parse an asset name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.name() == name)
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Map reel values to symbols. Out-of-range values are skipped.
pub fn symbols_for(reels: &[u8]) -> Vec<Symbol> {
    reels.iter().filter_map(|&r| Symbol::from_index(r)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_index_roundtrip() {
        for symbol in Symbol::ALL {
            assert_eq!(Symbol::from_index(symbol.index()), Some(symbol));
        }
        assert_eq!(Symbol::from_index(SYMBOL_COUNT), None);
    }

    #[test]
    fn test_symbol_names() {
        assert_eq!(Symbol::Eating.name(), "eating");
        assert_eq!(Symbol::from_name("love"), Some(Symbol::Love));
        assert_eq!(Symbol::from_name("sad"), None);
    }

    #[test]
    fn test_grid_covers_every_reel_once() {
        let mut seen: Vec<usize> = GRID_ROWS.iter().flat_map(|row| row.iter().copied()).collect();
        seen.sort_unstable();
        assert_eq!(seen, (0..REEL_COUNT).collect::<Vec<_>>());
    }
}
