//! Card - runtime state of one dealt card.
//!
//! A `Card` lives for exactly one round. Its identity never changes;
//! `revealed` and `matched` flip in place as the round progresses.
//! A matched card stays revealed.

use serde::{Deserialize, Serialize};

use super::identity::Identity;

/// A dealt card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    identity: Identity,

    /// Currently face up.
    pub revealed: bool,

    /// Part of a resolved pair.
    pub matched: bool,
}

impl Card {
    /// Create a face-down, unmatched card.
    #[must_use]
    pub const fn new(identity: Identity) -> Self {
        Self {
            identity,
            revealed: false,
            matched: false,
        }
    }

    /// The card's identity.
    #[must_use]
    pub const fn identity(&self) -> Identity {
        self.identity
    }

    /// Can this card be picked? Face-down and unmatched.
    #[must_use]
    pub const fn is_selectable(&self) -> bool {
        !self.revealed && !self.matched
    }

    /// Should the face be shown?
    #[must_use]
    pub const fn is_face_up(&self) -> bool {
        self.revealed || self.matched
    }

    /// Does this card pair with `other`?
    #[must_use]
    pub fn pairs_with(&self, other: &Card) -> bool {
        self.identity == other.identity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_card_is_face_down() {
        let card = Card::new(Identity::new(2));
        assert_eq!(card.identity(), Identity::new(2));
        assert!(!card.revealed);
        assert!(!card.matched);
        assert!(card.is_selectable());
        assert!(!card.is_face_up());
    }

    #[test]
    fn test_revealed_and_matched_not_selectable() {
        let mut card = Card::new(Identity::new(0));
        card.revealed = true;
        assert!(!card.is_selectable());
        assert!(card.is_face_up());

        let mut card = Card::new(Identity::new(0));
        card.matched = true;
        assert!(!card.is_selectable());
        assert!(card.is_face_up());
    }

    #[test]
    fn test_pairs_with() {
        let a = Card::new(Identity::new(1));
        let b = Card::new(Identity::new(1));
        let c = Card::new(Identity::new(2));
        assert!(a.pairs_with(&b));
        assert!(!a.pairs_with(&c));
    }
}
