//! Round state machine.
//!
//! `Round` holds the dealt cards, pending selection, score, countdown and
//! lifecycle phase. Its methods are pure state transitions; scheduling the
//! countdown and the mismatch flip-back is the job of [`super::Game`],
//! which stores the resulting timer handles back on the round.
//!
//! ## Lifecycle
//!
//! ```text
//! Idle --start--> Playing --(all matched | time out)--> Ended
//!                   ^                                     |
//!                   +---------------reset-----------------+
//! ```

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::Card;
use crate::timers::TaskId;

/// How a finished round ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Every pair was matched.
    Win,
    /// Time ran out first.
    Lose,
}

/// Round lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Dealt but the countdown has not started.
    Idle,
    Playing,
    /// Terminal until reset.
    Ended(Outcome),
}

/// Why a selection was ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rejection {
    /// Round is idle or ended.
    NotPlaying,
    OutOfRange,
    AlreadyRevealed,
    AlreadyMatched,
    /// Two cards are already pending.
    SelectionFull,
}

/// Result of [`Round::select`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Selection {
    /// No state changed.
    Ignored(Rejection),
    /// First card of a pair turned face up.
    First { index: usize },
    /// Second card matched the first; both are now matched.
    Matched { first: usize, second: usize },
    /// Second card differs; both stay face up until concealed.
    Mismatched { first: usize, second: usize },
}

/// Pending selection never exceeds two indices.
pub type Pending = SmallVec<[usize; 2]>;

/// One play-through from deal to game over.
#[derive(Clone, Debug)]
pub struct Round {
    cards: Vector<Card>,
    pending: Pending,
    score: u32,
    time_remaining: u32,
    matched_pairs: usize,
    phase: Phase,

    // Outstanding timer handles owned by this round.
    pub(crate) tick_task: Option<TaskId>,
    pub(crate) conceal_task: Option<TaskId>,
}

impl Round {
    /// Create an idle round over a dealt deck.
    ///
    /// The deck is used in the given order; callers normally deal it with
    /// [`crate::deck::build_deck`].
    #[must_use]
    pub fn new(deck: impl IntoIterator<Item = Card>, countdown_secs: u32) -> Self {
        Self {
            cards: deck.into_iter().collect(),
            pending: Pending::new(),
            score: 0,
            time_remaining: countdown_secs,
            matched_pairs: 0,
            phase: Phase::Idle,
            tick_task: None,
            conceal_task: None,
        }
    }

    // === Observation ===

    /// Cards in deal order.
    #[must_use]
    pub fn cards(&self) -> &Vector<Card> {
        &self.cards
    }

    /// Card at `index`, if in range.
    #[must_use]
    pub fn card(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// Indices currently face up awaiting comparison.
    #[must_use]
    pub fn pending(&self) -> &[usize] {
        &self.pending
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Seconds left on the countdown.
    #[must_use]
    pub fn time_remaining(&self) -> u32 {
        self.time_remaining
    }

    #[must_use]
    pub fn matched_pairs(&self) -> usize {
        self.matched_pairs
    }

    /// Number of pairs in the deck.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.cards.len() / 2
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.phase == Phase::Playing
    }

    #[must_use]
    pub fn is_ended(&self) -> bool {
        matches!(self.phase, Phase::Ended(_))
    }

    /// Outcome once ended.
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        match self.phase {
            Phase::Ended(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// Is a mismatched pair waiting to flip back?
    #[must_use]
    pub fn awaiting_conceal(&self) -> bool {
        self.pending.len() == 2
    }

    /// Indices a player may legally select right now.
    #[must_use]
    pub fn selectable(&self) -> Vec<usize> {
        if !self.is_playing() || self.awaiting_conceal() {
            return Vec::new();
        }
        self.cards
            .iter()
            .enumerate()
            .filter(|(_, card)| card.is_selectable())
            .map(|(i, _)| i)
            .collect()
    }

    // === Transitions ===

    /// Idle to Playing. Returns false if the round was not idle.
    pub fn begin(&mut self) -> bool {
        if self.phase != Phase::Idle {
            return false;
        }
        self.phase = Phase::Playing;
        true
    }

    /// Pick a card.
    ///
    /// Ignored unless playing, in range, face down, unmatched, and fewer
    /// than two cards are pending. A match is scored and cleared
    /// immediately; a mismatch stays pending until [`Round::conceal`].
    pub fn select(&mut self, index: usize, reward: u32) -> Selection {
        if let Err(reason) = self.check_selectable(index) {
            return Selection::Ignored(reason);
        }

        self.reveal(index);
        self.pending.push(index);

        let (first, second) = match self.pending.as_slice() {
            [first, second] => (*first, *second),
            _ => return Selection::First { index },
        };

        if self.cards[first].pairs_with(&self.cards[second]) {
            self.set_matched(first);
            self.set_matched(second);
            self.matched_pairs += 1;
            self.score = self.score.saturating_add(reward);
            self.pending.clear();
            Selection::Matched { first, second }
        } else {
            Selection::Mismatched { first, second }
        }
    }

    fn check_selectable(&self, index: usize) -> Result<(), Rejection> {
        if !self.is_playing() {
            return Err(Rejection::NotPlaying);
        }
        let card = self.cards.get(index).ok_or(Rejection::OutOfRange)?;
        if card.matched {
            return Err(Rejection::AlreadyMatched);
        }
        if card.revealed {
            return Err(Rejection::AlreadyRevealed);
        }
        if self.pending.len() >= 2 {
            return Err(Rejection::SelectionFull);
        }
        Ok(())
    }

    fn reveal(&mut self, index: usize) {
        if let Some(card) = self.cards.get_mut(index) {
            card.revealed = true;
        }
    }

    fn set_matched(&mut self, index: usize) {
        if let Some(card) = self.cards.get_mut(index) {
            card.matched = true;
        }
    }

    /// Turn a pending mismatched pair back face down and clear the selection.
    ///
    /// Returns the concealed pair, or `None` if no mismatch was pending.
    pub fn conceal(&mut self) -> Option<(usize, usize)> {
        let (first, second) = match self.pending.as_slice() {
            [first, second] => (*first, *second),
            _ => return None,
        };
        for index in [first, second] {
            if let Some(card) = self.cards.get_mut(index) {
                card.revealed = false;
            }
        }
        self.pending.clear();
        Some((first, second))
    }

    /// Remove one second from the countdown. Ignored unless playing.
    ///
    /// Returns the new time-remaining when it changed.
    pub fn tick(&mut self) -> Option<u32> {
        if !self.is_playing() || self.time_remaining == 0 {
            return None;
        }
        self.time_remaining -= 1;
        Some(self.time_remaining)
    }

    /// Would the round end now, and how?
    ///
    /// Every card matched wins, even if the countdown hit zero at the same
    /// moment; otherwise a zero countdown loses. A card without a partner in
    /// the deck can never match, so such a deck can only be lost.
    #[must_use]
    pub fn completion(&self) -> Option<Outcome> {
        if self.cards.iter().all(|card| card.matched) {
            Some(Outcome::Win)
        } else if self.time_remaining == 0 {
            Some(Outcome::Lose)
        } else {
            None
        }
    }

    /// Move to `Ended` if playing and a completion condition holds.
    ///
    /// Returns the outcome only on the transition itself, so a round ends
    /// exactly once.
    pub fn check_completion(&mut self) -> Option<Outcome> {
        if !self.is_playing() {
            return None;
        }
        let outcome = self.completion()?;
        self.phase = Phase::Ended(outcome);
        Some(outcome)
    }
}
