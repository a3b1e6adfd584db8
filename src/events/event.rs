//! Round events and the audio cues they map to.
//!
//! Every observable state change is published as a `RoundEvent`.
//! Hosts that play sounds map events to a `Cue` via [`RoundEvent::cue`].

use serde::{Deserialize, Serialize};

use crate::round::Outcome;

/// Something that happened to the active round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundEvent {
    /// A fresh round began playing.
    Started,

    /// A card was turned face up by a selection.
    Revealed { index: usize },

    /// Two selected cards matched. `score` is the new total.
    Matched { first: usize, second: usize, score: u32 },

    /// Two selected cards differ; they flip back after the mismatch delay.
    Mismatched { first: usize, second: usize },

    /// A mismatched pair was turned back face down.
    Concealed { first: usize, second: usize },

    /// The countdown advanced.
    Ticked { remaining: u32 },

    /// The round finished.
    Ended { outcome: Outcome },
}

/// Audio cue a presentation layer plays for an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cue {
    RoundStart,
    Flip,
    Match,
    Win,
    GameOver,
}

impl Cue {
    /// All cues, in a stable order.
    pub const ALL: [Cue; 5] = [Cue::RoundStart, Cue::Flip, Cue::Match, Cue::Win, Cue::GameOver];
}

impl RoundEvent {
    /// The cue to play for this event, if any.
    #[must_use]
    pub fn cue(&self) -> Option<Cue> {
        match self {
            RoundEvent::Started => Some(Cue::RoundStart),
            RoundEvent::Revealed { .. } => Some(Cue::Flip),
            RoundEvent::Matched { .. } => Some(Cue::Match),
            RoundEvent::Ended { outcome: Outcome::Win } => Some(Cue::Win),
            RoundEvent::Ended { outcome: Outcome::Lose } => Some(Cue::GameOver),
            RoundEvent::Mismatched { .. } | RoundEvent::Concealed { .. } | RoundEvent::Ticked { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cue_mapping() {
        assert_eq!(RoundEvent::Started.cue(), Some(Cue::RoundStart));
        assert_eq!(RoundEvent::Revealed { index: 3 }.cue(), Some(Cue::Flip));
        assert_eq!(
            RoundEvent::Matched { first: 0, second: 1, score: 20 }.cue(),
            Some(Cue::Match)
        );
        assert_eq!(RoundEvent::Ended { outcome: Outcome::Win }.cue(), Some(Cue::Win));
        assert_eq!(RoundEvent::Ended { outcome: Outcome::Lose }.cue(), Some(Cue::GameOver));
    }

    #[test]
    fn test_silent_events() {
        assert_eq!(RoundEvent::Mismatched { first: 0, second: 1 }.cue(), None);
        assert_eq!(RoundEvent::Concealed { first: 0, second: 1 }.cue(), None);
        assert_eq!(RoundEvent::Ticked { remaining: 10 }.cue(), None);
    }

    #[test]
    fn test_event_serde() {
        let event = RoundEvent::Matched { first: 2, second: 7, score: 40 };
        let json = serde_json::to_string(&event).unwrap();
        let deserialized: RoundEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, deserialized);
    }
}
