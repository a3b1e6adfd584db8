//! # rust-pairs
//!
//! A memory-matching ("pairs") card game engine.
//!
//! A grid of face-down cards is revealed two at a time. Matching pairs stay
//! face up and score; mismatches flip back after a short delay. A countdown
//! ends the round unless every pair is matched first.
//!
//! ## Design Principles
//!
//! 1. **Presentation-Agnostic**: No rendering, asset loading or audio.
//!    Hosts forward input and observe events, revisions and snapshots.
//!
//! 2. **Deterministic**: Dealing uses a seeded ChaCha8 RNG and all timers run
//!    on a virtual clock the host advances, so every timing contract is
//!    exactly reproducible.
//!
//! 3. **Owned Timers**: The countdown and mismatch flip-back are cancellable
//!    handles owned by the active round; reset cancels them before dealing.
//!
//! ## Modules
//!
//! - `core`: RNG and round configuration
//! - `cards`: Identities, dealt cards, identity registry
//! - `deck`: Shuffle-and-deal
//! - `timers`: Virtual-time scheduler with cancellable handles
//! - `round`: Round state machine, game session, snapshots
//! - `events`: Round events, audio cues, event bus
//! - `assets`: Asset collaborator catalog
//! - `agent`: Simulated players for headless play

pub mod agent;
pub mod assets;
pub mod cards;
pub mod core;
pub mod deck;
pub mod events;
pub mod round;
pub mod timers;

// Re-export commonly used types
pub use crate::core::{ConfigError, GameRng, RoundConfig};

pub use crate::cards::{Card, Identity, IdentityDef, IdentityRegistry};

pub use crate::deck::build_deck;

pub use crate::timers::{Scheduler, TaskId};

pub use crate::round::{
    CardView, Game, Outcome, Phase, Rejection, Round, Selection, Snapshot, SnapshotError,
};

pub use crate::events::{Cue, EventBus, RoundEvent, SubscriptionId};

pub use crate::assets::AssetCatalog;

pub use crate::agent::{play_round, MemoryAgent, PlayConfig, RoundReport};
