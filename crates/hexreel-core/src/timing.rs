//! Shuffle timing profiles

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Named shuffle timing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimingProfile {
    /// 20 ticks every 100 ms, first tick one interval after the spin
    #[default]
    Standard,
    /// Standard cadence behind a 300 ms lead-in (trigger fade-out)
    Classic,
    /// Short, fast shuffle
    Turbo,
    /// Hand-tuned values
    Custom,
}

impl TimingProfile {
    /// Parse a profile name as used on the command line
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "standard" => Some(Self::Standard),
            "classic" => Some(Self::Classic),
            "turbo" => Some(Self::Turbo),
            "custom" => Some(Self::Custom),
            _ => None,
        }
    }
}

/// Tick count and cadence of one spin
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShuffleTiming {
    pub profile: TimingProfile,

    /// Ticks per spin
    #[serde(alias = "maxShuffles")]
    pub max_shuffles: u32,

    /// Gap between ticks (ms)
    #[serde(alias = "shuffleIntervalMs")]
    pub shuffle_interval_ms: u64,

    /// Delay before the first tick's interval starts (ms)
    #[serde(alias = "leadInMs")]
    pub lead_in_ms: u64,
}

impl ShuffleTiming {
    pub fn standard() -> Self {
        Self {
            profile: TimingProfile::Standard,
            max_shuffles: 20,
            shuffle_interval_ms: 100,
            lead_in_ms: 0,
        }
    }

    pub fn classic() -> Self {
        Self {
            profile: TimingProfile::Classic,
            max_shuffles: 20,
            shuffle_interval_ms: 100,
            lead_in_ms: 300,
        }
    }

    pub fn turbo() -> Self {
        Self {
            profile: TimingProfile::Turbo,
            max_shuffles: 10,
            shuffle_interval_ms: 50,
            lead_in_ms: 0,
        }
    }

    /// Get timing for profile. `Custom` starts from standard values.
    pub fn from_profile(profile: TimingProfile) -> Self {
        match profile {
            TimingProfile::Standard => Self::standard(),
            TimingProfile::Classic => Self::classic(),
            TimingProfile::Turbo => Self::turbo(),
            TimingProfile::Custom => Self {
                profile: TimingProfile::Custom,
                ..Self::standard()
            },
        }
    }

    /// Scale interval and lead-in by factor (< 1.0 = faster). Never below 1 ms per tick.
    pub fn scaled(&self, factor: f64) -> Self {
        let scale = |ms: u64| (ms as f64 * factor.max(0.0)).round() as u64;
        Self {
            profile: TimingProfile::Custom,
            max_shuffles: self.max_shuffles,
            shuffle_interval_ms: scale(self.shuffle_interval_ms).max(1),
            lead_in_ms: scale(self.lead_in_ms),
        }
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.shuffle_interval_ms)
    }

    pub fn lead_in(&self) -> Duration {
        Duration::from_millis(self.lead_in_ms)
    }

    /// Offset of tick `tick` (1-based) from the spin request
    pub fn tick_offset(&self, tick: u32) -> Duration {
        self.lead_in() + self.interval() * tick
    }

    /// Time from the spin request to the terminal snapshot
    pub fn total_duration(&self) -> Duration {
        self.tick_offset(self.max_shuffles)
    }
}

impl Default for ShuffleTiming {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timing_profiles() {
        let standard = ShuffleTiming::standard();
        let classic = ShuffleTiming::classic();
        let turbo = ShuffleTiming::turbo();

        assert_eq!(standard.max_shuffles, 20);
        assert_eq!(standard.shuffle_interval_ms, 100);

        // Classic only adds the lead-in
        assert_eq!(classic.max_shuffles, standard.max_shuffles);
        assert!(classic.lead_in_ms > standard.lead_in_ms);

        assert!(turbo.total_duration() < standard.total_duration());
    }

    #[test]
    fn test_tick_offsets() {
        let timing = ShuffleTiming::classic();
        assert_eq!(timing.tick_offset(1), Duration::from_millis(400));
        assert_eq!(timing.total_duration(), Duration::from_millis(2300));
        assert_eq!(ShuffleTiming::standard().total_duration(), Duration::from_secs(2));
    }

    #[test]
    fn test_scaled() {
        let fast = ShuffleTiming::standard().scaled(0.5);
        assert_eq!(fast.profile, TimingProfile::Custom);
        assert_eq!(fast.shuffle_interval_ms, 50);

        let floor = ShuffleTiming::standard().scaled(0.0);
        assert_eq!(floor.shuffle_interval_ms, 1);
    }

    #[test]
    fn test_profile_names() {
        assert_eq!(TimingProfile::from_name("Turbo"), Some(TimingProfile::Turbo));
        assert_eq!(TimingProfile::from_name("warp"), None);
        assert_eq!(ShuffleTiming::from_profile(TimingProfile::Custom).max_shuffles, 20);
    }
}
