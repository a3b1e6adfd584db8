//! Core engine types: RNG and round configuration.
//!
//! These are the building blocks every other module depends on.
//! Hosts tune a round via `RoundConfig` rather than modifying the engine.

pub mod config;
pub mod rng;

pub use config::{ConfigError, RoundConfig, STANDARD_PAIRS};
pub use rng::GameRng;
