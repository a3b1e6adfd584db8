//! Deck builder: doubles the identity set and shuffles it.

pub mod builder;

pub use builder::{build_deck, fisher_yates};
