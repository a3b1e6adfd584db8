//! Round configuration.
//!
//! Hosts configure a round at startup by providing a `RoundConfig`:
//! the identity set to deal, the countdown, the match reward, and the
//! two timer periods. The engine never hardcodes these values.

use std::time::Duration;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cards::Identity;

/// Number of identities in the standard ten-pair layout.
pub const STANDARD_PAIRS: u16 = 10;

/// Errors detected when validating a `RoundConfig`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("identity set must not be empty")]
    NoIdentities,
    #[error("identity {0} appears more than once")]
    DuplicateIdentity(Identity),
    #[error("countdown must be at least one second")]
    ZeroCountdown,
    #[error("tick interval must be non-zero")]
    ZeroTickInterval,
}

/// Complete round configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundConfig {
    /// The N distinct identities; the deck holds each twice.
    pub identities: Vec<Identity>,

    /// Starting time-remaining, in seconds.
    pub countdown_secs: u32,

    /// Points awarded per matched pair.
    pub match_reward: u32,

    /// How long a mismatched pair stays face up before flipping back.
    pub mismatch_delay: Duration,

    /// Countdown period. Each tick removes one second of time-remaining.
    pub tick_interval: Duration,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            identities: (0..STANDARD_PAIRS).map(Identity::new).collect(),
            countdown_secs: 90,
            match_reward: 20,
            mismatch_delay: Duration::from_secs(1),
            tick_interval: Duration::from_secs(1),
        }
    }
}

impl RoundConfig {
    /// Create a config for the given identity set with default timings.
    pub fn new(identities: impl IntoIterator<Item = Identity>) -> Self {
        Self {
            identities: identities.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Create a config with `pairs` identities numbered from zero.
    #[must_use]
    pub fn with_pairs(pairs: u16) -> Self {
        Self::new((0..pairs).map(Identity::new))
    }

    /// Set the starting countdown.
    #[must_use]
    pub fn with_countdown(mut self, secs: u32) -> Self {
        self.countdown_secs = secs;
        self
    }

    /// Set the points awarded per match.
    #[must_use]
    pub fn with_match_reward(mut self, reward: u32) -> Self {
        self.match_reward = reward;
        self
    }

    /// Set the mismatch flip-back delay.
    #[must_use]
    pub fn with_mismatch_delay(mut self, delay: Duration) -> Self {
        self.mismatch_delay = delay;
        self
    }

    /// Set the countdown period.
    #[must_use]
    pub fn with_tick_interval(mut self, interval: Duration) -> Self {
        self.tick_interval = interval;
        self
    }

    /// Number of pairs dealt per round.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.identities.len()
    }

    /// Number of cards dealt per round.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.identities.len() * 2
    }

    /// Check the config is playable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.identities.is_empty() {
            return Err(ConfigError::NoIdentities);
        }

        let mut seen = FxHashSet::default();
        for &identity in &self.identities {
            if !seen.insert(identity) {
                return Err(ConfigError::DuplicateIdentity(identity));
            }
        }

        if self.countdown_secs == 0 {
            return Err(ConfigError::ZeroCountdown);
        }
        if self.tick_interval.is_zero() {
            return Err(ConfigError::ZeroTickInterval);
        }
        Ok(())
    }
}
