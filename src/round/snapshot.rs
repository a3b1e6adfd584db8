//! Observable state frames for a presentation layer.
//!
//! A `Snapshot` carries exactly what a host renders: countdown, score,
//! per-card flags, and the end state. Face-down cards do not expose their
//! identity. Frames encode to bytes with bincode for hosts that receive
//! state across a boundary (worker, wasm, IPC).

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::state::{Outcome, Round};
use crate::cards::Identity;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot codec error: {0}")]
    Codec(#[from] bincode::Error),
}

/// What a host may show for one card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardView {
    pub revealed: bool,
    pub matched: bool,
    /// `Some` only while the card is face up.
    pub identity: Option<Identity>,
}

/// Point-in-time view of a round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Event bus revision the frame was taken at.
    pub revision: u64,
    pub time_remaining: u32,
    pub score: u32,
    pub cards: Vec<CardView>,
    pub ended: bool,
    pub outcome: Option<Outcome>,
}

impl Snapshot {
    /// Capture a round.
    #[must_use]
    pub fn capture(round: &Round, revision: u64) -> Self {
        let cards = round
            .cards()
            .iter()
            .map(|card| CardView {
                revealed: card.revealed,
                matched: card.matched,
                identity: card.is_face_up().then(|| card.identity()),
            })
            .collect();

        Self {
            revision,
            time_remaining: round.time_remaining(),
            score: round.score(),
            cards,
            ended: round.is_ended(),
            outcome: round.outcome(),
        }
    }

    /// Encode as a bincode frame.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a bincode frame.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        Ok(bincode::deserialize(bytes)?)
    }
}
