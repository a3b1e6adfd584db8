//! Headless play loop.
//!
//! Drives a `Game` with a `MemoryAgent`, spending a fixed slice of virtual
//! time before every pick, until the round ends or the step cap is hit.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::memory::MemoryAgent;
use crate::round::{Game, Outcome, Selection};

/// Configuration for the play loop.
#[derive(Clone, Debug)]
pub struct PlayConfig {
    /// Virtual time the agent spends before each pick.
    pub think_time: Duration,

    /// Maximum loop iterations (prevents endless play with zero think time).
    pub max_steps: usize,
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            think_time: Duration::from_millis(500),
            max_steps: 100_000,
        }
    }
}

impl PlayConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set think time per pick.
    #[must_use]
    pub fn with_think_time(mut self, think_time: Duration) -> Self {
        self.think_time = think_time;
        self
    }

    /// Set the step cap.
    #[must_use]
    pub fn with_max_steps(mut self, max: usize) -> Self {
        self.max_steps = max;
        self
    }
}

/// Summary of one played round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundReport {
    /// `None` if the step cap was reached first.
    pub outcome: Option<Outcome>,
    pub score: u32,
    pub time_remaining: u32,
    pub picks: usize,
    pub matches: usize,
    pub mismatches: usize,
}

/// Play the active round to completion.
///
/// Starts the round if it is idle. The agent observes the table after
/// each accepted pick.
pub fn play_round(game: &mut Game, agent: &mut MemoryAgent, config: &PlayConfig) -> RoundReport {
    game.start();

    let mut picks = 0;
    let mut matches = 0;
    let mut mismatches = 0;

    for _ in 0..config.max_steps {
        if game.round().is_ended() {
            break;
        }

        game.advance(config.think_time);
        if game.round().is_ended() {
            break;
        }

        let Some(index) = agent.choose(game.round()) else {
            continue;
        };

        match game.select(index) {
            Selection::Ignored(_) => continue,
            Selection::First { .. } => {}
            Selection::Matched { .. } => matches += 1,
            Selection::Mismatched { .. } => mismatches += 1,
        }
        picks += 1;
        agent.observe(game.round());
    }

    let round = game.round();
    let report = RoundReport {
        outcome: round.outcome(),
        score: round.score(),
        time_remaining: round.time_remaining(),
        picks,
        matches,
        mismatches,
    };
    debug!(?report, "round played");
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameRng, RoundConfig};

    #[test]
    fn test_perfect_memory_wins() {
        let mut game = Game::new(RoundConfig::default(), 42).unwrap();
        let mut agent = MemoryAgent::new(1.0, GameRng::new(7));
        let config = PlayConfig::new().with_think_time(Duration::from_millis(250));

        let report = play_round(&mut game, &mut agent, &config);

        assert_eq!(report.outcome, Some(Outcome::Win));
        assert_eq!(report.matches, 10);
        assert_eq!(report.score, 200);
        assert!(report.time_remaining > 0);
        assert_eq!(report.picks, 2 * (report.matches + report.mismatches));
    }

    #[test]
    fn test_step_cap() {
        let mut game = Game::new(RoundConfig::default(), 42).unwrap();
        let mut agent = MemoryAgent::new(0.0, GameRng::new(7));
        let config = PlayConfig::new().with_think_time(Duration::ZERO).with_max_steps(50);

        let report = play_round(&mut game, &mut agent, &config);

        // No virtual time passes, so a mismatch never flips back
        assert_eq!(report.outcome, None);
        assert_eq!(report.time_remaining, 90);
    }
}
