//! Round state machine and the game session that drives it.
//!
//! - `Round`: cards, pending selection, score, countdown, phase
//! - `Game`: owns the active round, its timers, the RNG and the event bus
//! - `Snapshot`: observable frame for a presentation layer
//!
//! Rounds are driven entirely by `Game::select`, `Game::advance` and
//! `Game::reset`; nothing happens between calls.

pub mod game;
pub mod snapshot;
pub mod state;

pub use game::Game;
pub use snapshot::{CardView, Snapshot, SnapshotError};
pub use state::{Outcome, Pending, Phase, Rejection, Round, Selection};
