//! Spin controller: timed shuffle loop and outcome evaluation
//!
//! One accepted spin is one Tokio task:
//!
//! ```text
//! Idle ──spin()──> Shuffling (max_shuffles ticks) ──> Evaluating ──> Idle
//! ```
//!
//! All game state sits behind a single lock. The terminal snapshot is
//! published under that lock together with clearing the shuffling flag,
//! so a subscriber that reacts to it by spinning again is always accepted.

use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

use crate::config::{ConfigError, GameConfig};
use crate::outcome::Outcome;
use crate::randomizer::{ReelRandomizer, StdRandomizer};
use crate::reel_state::ReelState;
use crate::snapshot::Snapshot;
use crate::stats::SessionStats;
use crate::symbols::SYMBOL_COUNT;
use crate::timing::ShuffleTiming;

/// Default snapshot channel capacity (a spin emits max_shuffles + 1)
pub const DEFAULT_CHANNEL_CAPACITY: usize = 256;

struct Shared {
    state: ReelState,
    randomizer: Box<dyn ReelRandomizer>,
    shuffling: bool,
    spin_count: u64,
    stats: SessionStats,
    latest: Snapshot,
}

/// Drives spins and publishes snapshots
pub struct SpinController {
    config: GameConfig,
    shared: Arc<Mutex<Shared>>,
    snapshot_tx: broadcast::Sender<Snapshot>,
}

impl SpinController {
    /// Controller with a randomizer chosen from `config.seed`
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        Self::builder().config(config).build()
    }

    pub fn builder() -> SpinControllerBuilder {
        SpinControllerBuilder::default()
    }

    /// Start a spin
    ///
    /// Returns immediately. Fails with [`SpinError::AlreadyShuffling`]
    /// while a spin is running, leaving every counter and the outcome
    /// untouched. Must be called from within a Tokio runtime.
    pub fn spin(&self) -> Result<SpinHandle, SpinError> {
        let runtime = tokio::runtime::Handle::try_current().map_err(|_| SpinError::NoRuntime)?;

        let spin = {
            let mut guard = self.shared.lock();
            let shared = &mut *guard;
            if shared.shuffling {
                log::debug!("[Spin] Rejected: spin {} still shuffling", shared.spin_count);
                return Err(SpinError::AlreadyShuffling);
            }

            shared.shuffling = true;
            shared.spin_count += 1;
            shared.state.set_outcome(Outcome::None);
            shared.latest = Snapshot::capture(&shared.state, true, shared.spin_count, 0);
            shared.spin_count
        };

        log::debug!(
            "[Spin] Spin {} accepted: {} ticks every {}ms",
            spin,
            self.config.timing.max_shuffles,
            self.config.timing.shuffle_interval_ms
        );

        let release = ShuffleRelease {
            shared: Arc::clone(&self.shared),
            spin,
            armed: true,
        };
        let task = runtime.spawn(run_spin(
            Arc::clone(&self.shared),
            release,
            Instant::now(),
            self.snapshot_tx.clone(),
            self.config.timing.clone(),
            spin,
        ));

        Ok(SpinHandle { spin, task })
    }

    /// Receive every snapshot emitted from now on
    pub fn subscribe(&self) -> broadcast::Receiver<Snapshot> {
        self.snapshot_tx.subscribe()
    }

    /// Latest snapshot, never a partial reel update
    pub fn snapshot(&self) -> Snapshot {
        self.shared.lock().latest
    }

    pub fn is_shuffling(&self) -> bool {
        self.shared.lock().shuffling
    }

    pub fn tries_used(&self) -> u32 {
        self.shared.lock().state.tries_used()
    }

    pub fn stats(&self) -> SessionStats {
        self.shared.lock().stats
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}

/// Builder for [`SpinController`]
pub struct SpinControllerBuilder {
    config: GameConfig,
    randomizer: Option<Box<dyn ReelRandomizer>>,
    channel_capacity: usize,
}

impl Default for SpinControllerBuilder {
    fn default() -> Self {
        Self {
            config: GameConfig::default(),
            randomizer: None,
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
        }
    }
}

impl SpinControllerBuilder {
    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    /// Use a specific reel source (overrides the seed)
    pub fn randomizer(mut self, randomizer: impl ReelRandomizer + 'static) -> Self {
        self.randomizer = Some(Box::new(randomizer));
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    pub fn channel_capacity(mut self, capacity: usize) -> Self {
        self.channel_capacity = capacity.max(1);
        self
    }

    pub fn build(self) -> Result<SpinController, ConfigError> {
        self.config.validate()?;
        let state = self.config.initial_state()?;

        let randomizer = match (self.randomizer, self.config.seed) {
            (Some(randomizer), _) => randomizer,
            (None, Some(seed)) => Box::new(StdRandomizer::seeded(seed)),
            (None, None) => Box::new(StdRandomizer::from_entropy()),
        };

        let (snapshot_tx, _) = broadcast::channel(self.channel_capacity);

        Ok(SpinController {
            shared: Arc::new(Mutex::new(Shared {
                latest: Snapshot::capture(&state, false, 0, 0),
                state,
                randomizer,
                shuffling: false,
                spin_count: 0,
                stats: SessionStats::default(),
            })),
            config: self.config,
            snapshot_tx,
        })
    }
}

/// A running spin
#[derive(Debug)]
pub struct SpinHandle {
    spin: u64,
    task: JoinHandle<Snapshot>,
}

impl SpinHandle {
    /// Spin sequence number
    pub fn spin(&self) -> u64 {
        self.spin
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Wait for the terminal snapshot. Dropping the handle instead lets the spin finish unobserved.
    pub async fn finished(self) -> Result<Snapshot, SpinError> {
        self.task
            .await
            .map_err(|e| SpinError::TaskFailed(e.to_string()))
    }
}

/// Spin request errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SpinError {
    #[error("Spin already in progress")]
    AlreadyShuffling,

    #[error("No Tokio runtime to drive the spin")]
    NoRuntime,

    #[error("Spin task failed: {0}")]
    TaskFailed(String),
}

/// Returns the controller to idle if the spin task is dropped before settling
///
/// Owned by the spawned future from the moment it is created, so it also
/// fires when the runtime shuts down before the task is first polled.
struct ShuffleRelease {
    shared: Arc<Mutex<Shared>>,
    spin: u64,
    armed: bool,
}

impl Drop for ShuffleRelease {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }

        let mut guard = self.shared.lock();
        let s = &mut *guard;
        let tick = s.latest.tick;
        s.shuffling = false;
        s.latest = Snapshot::capture(&s.state, false, self.spin, tick);
        log::warn!("[Spin] Spin {} ended at tick {} before settling", self.spin, tick);
    }
}

async fn run_spin(
    shared: Arc<Mutex<Shared>>,
    mut release: ShuffleRelease,
    armed_at: Instant,
    snapshot_tx: broadcast::Sender<Snapshot>,
    timing: ShuffleTiming,
    spin: u64,
) -> Snapshot {
    let start = armed_at + timing.lead_in() + timing.interval();
    let mut ticker = time::interval_at(start, timing.interval());
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    for tick in 1..=timing.max_shuffles {
        ticker.tick().await;

        let snapshot = {
            let mut guard = shared.lock();
            let s = &mut *guard;
            s.state.randomize_all(s.randomizer.as_mut(), SYMBOL_COUNT);
            s.latest = Snapshot::capture(&s.state, true, spin, tick);
            s.latest
        };

        log::trace!("[Spin] Spin {} tick {}: {:?}", spin, tick, snapshot.reels);
        // No subscribers is fine
        let _ = snapshot_tx.send(snapshot);
    }

    let terminal = {
        let mut guard = shared.lock();
        let s = &mut *guard;
        let outcome = settle(&mut s.state);
        s.stats.record(outcome);
        s.shuffling = false;
        s.latest = Snapshot::capture(&s.state, false, spin, timing.max_shuffles);
        let _ = snapshot_tx.send(s.latest);
        s.latest
    };
    release.armed = false;

    match terminal.outcome {
        Outcome::None => log::debug!(
            "[Spin] Spin {} settled {:?}, {} tries left",
            spin,
            terminal.reels,
            terminal.remaining_tries
        ),
        outcome => log::info!("[Spin] Spin {} settled {:?}: {:?}", spin, terminal.reels, outcome),
    }

    terminal
}

/// The single evaluation that closes a spin
fn settle(state: &mut ReelState) -> Outcome {
    state.increment_tries();

    let outcome = if state.all_equal() {
        Outcome::Win
    } else if state.tries_used() >= state.max_tries() {
        Outcome::Lose
    } else {
        Outcome::None
    };

    if outcome.is_terminal() {
        state.reset_tries();
    }
    state.set_outcome(outcome);
    outcome
}
