//! Round events, audio cues, and the event bus.
//!
//! ## Key Types
//!
//! - `RoundEvent`: Each observable state change of a round
//! - `Cue`: The sound a host plays for an event
//! - `EventBus`: Subscriber callbacks, a polled queue, and a revision counter

pub mod bus;
pub mod event;

pub use bus::{EventBus, Subscriber, SubscriptionId};
pub use event::{Cue, RoundEvent};
