//! Game session: one active round plus its timers and observers.
//!
//! `Game` is the host-facing entry point. It validates the config, deals
//! with its own seeded RNG, drives the countdown and mismatch flip-back on
//! a virtual clock, and publishes every state change to the event bus.
//!
//! Timer handles live on the active `Round`. Reset and teardown cancel
//! them before any new state is created, so a flip-back scheduled for a
//! superseded round can never touch its successor.

use std::time::Duration;

use tracing::{debug, info, trace, warn};

use super::snapshot::Snapshot;
use super::state::{Round, Selection};
use crate::core::{ConfigError, GameRng, RoundConfig};
use crate::deck::build_deck;
use crate::events::{EventBus, RoundEvent, SubscriptionId};
use crate::timers::{Scheduler, TaskId};

/// Scheduled work.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Timer {
    Tick,
    Conceal,
}

/// A memory game session.
///
/// ## Example
///
/// ```
/// use std::time::Duration;
/// use rust_pairs::core::RoundConfig;
/// use rust_pairs::round::Game;
///
/// let mut game = Game::new(RoundConfig::default(), 42).unwrap();
/// game.start();
/// game.advance(Duration::from_secs(5));
/// assert_eq!(game.round().time_remaining(), 85);
/// ```
#[derive(Debug)]
pub struct Game {
    config: RoundConfig,
    rng: GameRng,
    scheduler: Scheduler<Timer>,
    round: Round,
    bus: EventBus,
    rounds_dealt: u64,
}

impl Game {
    /// Validate `config` and deal an idle round.
    pub fn new(config: RoundConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut rng = GameRng::new(seed);
        let round = Round::new(build_deck(&config.identities, &mut rng), config.countdown_secs);
        debug!(seed, pairs = config.pair_count(), "game created");

        Ok(Self {
            config,
            rng,
            scheduler: Scheduler::new(),
            round,
            bus: EventBus::new(),
            rounds_dealt: 1,
        })
    }

    // === Observation ===

    #[must_use]
    pub fn config(&self) -> &RoundConfig {
        &self.config
    }

    /// The active round.
    #[must_use]
    pub fn round(&self) -> &Round {
        &self.round
    }

    /// Virtual time since the game was created.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.scheduler.now()
    }

    /// Rounds dealt so far, including the active one.
    #[must_use]
    pub fn rounds_dealt(&self) -> u64 {
        self.rounds_dealt
    }

    /// Number of timers still scheduled.
    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.scheduler.len()
    }

    /// Capture the observable state.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.round, self.bus.revision())
    }

    /// Revision counter; changes whenever state changes.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.bus.revision()
    }

    /// Register a callback invoked for every event.
    pub fn subscribe(&mut self, subscriber: impl FnMut(&RoundEvent) + 'static) -> SubscriptionId {
        self.bus.subscribe(subscriber)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.bus.unsubscribe(id)
    }

    /// Take events published since the last drain.
    pub fn drain_events(&mut self) -> Vec<RoundEvent> {
        self.bus.drain()
    }

    /// Independent RNG stream derived from the game seed.
    pub fn fork_rng(&mut self) -> GameRng {
        self.rng.fork()
    }

    // === Input ===

    /// Start the countdown of an idle round. Returns false otherwise.
    pub fn start(&mut self) -> bool {
        if !self.round.begin() {
            return false;
        }
        self.start_countdown();
        true
    }

    /// Pick the card at `index`.
    pub fn select(&mut self, index: usize) -> Selection {
        let selection = self.round.select(index, self.config.match_reward);

        match selection {
            Selection::Ignored(reason) => {
                trace!(index, ?reason, "selection ignored");
            }
            Selection::First { index } => {
                debug!(index, "first card revealed");
                self.bus.publish(RoundEvent::Revealed { index });
            }
            Selection::Matched { first, second } => {
                let score = self.round.score();
                debug!(first, second, score, "pair matched");
                self.bus.publish(RoundEvent::Revealed { index: second });
                self.bus.publish(RoundEvent::Matched { first, second, score });
                self.finish_if_complete();
            }
            Selection::Mismatched { first, second } => {
                debug!(first, second, "pair mismatched");
                self.bus.publish(RoundEvent::Revealed { index: second });
                self.bus.publish(RoundEvent::Mismatched { first, second });
                let task = self.scheduler.schedule_once(self.config.mismatch_delay, Timer::Conceal);
                self.round.conceal_task = Some(task);
            }
        }

        selection
    }

    /// Let `elapsed` of virtual time pass, firing due timers in order.
    pub fn advance(&mut self, elapsed: Duration) {
        let until = self.scheduler.now().saturating_add(elapsed);
        while let Some((task, timer)) = self.scheduler.pop_due(until) {
            match timer {
                Timer::Tick => self.on_tick(),
                Timer::Conceal => self.on_conceal(task),
            }
        }
        self.scheduler.advance_to(until);
    }

    /// Discard the active round and start a fresh one.
    ///
    /// Works from any phase. Outstanding timers are cancelled first.
    pub fn reset(&mut self) {
        self.cancel_round_timers();

        let deck = build_deck(&self.config.identities, &mut self.rng);
        self.round = Round::new(deck, self.config.countdown_secs);
        self.rounds_dealt += 1;
        self.round.begin();
        info!(round = self.rounds_dealt, "round reset");
        self.start_countdown();
    }

    /// Cancel every outstanding timer (host unmount).
    pub fn teardown(&mut self) {
        self.cancel_round_timers();
        debug!("game torn down");
    }

    // === Internals ===

    fn start_countdown(&mut self) {
        let task = self.scheduler.schedule_every(self.config.tick_interval, Timer::Tick);
        self.round.tick_task = Some(task);
        info!(
            countdown = self.round.time_remaining(),
            pairs = self.round.pair_count(),
            "round started"
        );
        self.bus.publish(RoundEvent::Started);
    }

    fn cancel_round_timers(&mut self) {
        for task in [self.round.tick_task.take(), self.round.conceal_task.take()]
            .into_iter()
            .flatten()
        {
            self.scheduler.cancel(task);
        }
    }

    fn on_tick(&mut self) {
        if let Some(remaining) = self.round.tick() {
            trace!(remaining, "tick");
            self.bus.publish(RoundEvent::Ticked { remaining });
            self.finish_if_complete();
        }
    }

    fn on_conceal(&mut self, task: TaskId) {
        if self.round.conceal_task != Some(task) {
            warn!(%task, "flip-back for a superseded selection");
            return;
        }
        self.round.conceal_task = None;

        if let Some((first, second)) = self.round.conceal() {
            debug!(first, second, "mismatch concealed");
            self.bus.publish(RoundEvent::Concealed { first, second });
        }
    }

    fn finish_if_complete(&mut self) {
        let Some(outcome) = self.round.check_completion() else {
            return;
        };

        if let Some(task) = self.round.tick_task.take() {
            self.scheduler.cancel(task);
        }
        info!(
            ?outcome,
            score = self.round.score(),
            remaining = self.round.time_remaining(),
            "round ended"
        );
        self.bus.publish(RoundEvent::Ended { outcome });
    }
}
