//! # hexreel-core: Spin engine for the HexReel slot game
//!
//! Five reels on a hexagonal grid, three symbols, a bounded try budget.
//! A spin shuffles every reel on a fixed cadence for a fixed number of
//! ticks, then settles into exactly one outcome evaluation.
//!
//! ## Architecture
//!
//! ```text
//! SpinController
//!     │
//!     ├── GameConfig (max tries, ShuffleTiming, initial reels, seed)
//!     ├── ReelState (reels, tries used, outcome)
//!     ├── ReelRandomizer (seeded StdRng or scripted frames)
//!     └── SessionStats
//!           │
//!           v
//!     broadcast::Sender<Snapshot> → renderer
//! ```
//!
//! Rendering is not part of this crate. Collaborators subscribe to
//! [`Snapshot`]s and draw whatever they like.

pub mod config;
pub mod controller;
pub mod outcome;
pub mod randomizer;
pub mod reel_state;
pub mod snapshot;
pub mod stats;
pub mod symbols;
pub mod timing;

pub use config::*;
pub use controller::*;
pub use outcome::*;
pub use randomizer::*;
pub use reel_state::*;
pub use snapshot::*;
pub use stats::*;
pub use symbols::*;
pub use timing::*;
