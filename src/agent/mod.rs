//! Simulated players for headless play and end-to-end testing.
//!
//! - `MemoryAgent`: Remembers face-up cards with configurable recall
//! - `play_round`: Drives a `Game` with an agent on virtual time

pub mod memory;
pub mod play;

pub use memory::MemoryAgent;
pub use play::{play_round, PlayConfig, RoundReport};
