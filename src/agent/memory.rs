//! Memory agent - a simulated player with imperfect recall.

use rustc_hash::FxHashMap;

use crate::cards::Identity;
use crate::core::GameRng;
use crate::round::Round;

/// Player that remembers cards it has seen face up.
///
/// Each time a card is observed face up, the agent retains its identity
/// with probability `recall`. It never reads a face-down card.
#[derive(Clone, Debug)]
pub struct MemoryAgent {
    recall: f64,
    rng: GameRng,
    seen: FxHashMap<usize, Identity>,
}

impl MemoryAgent {
    /// Create an agent. `recall` is clamped to `[0, 1]`.
    #[must_use]
    pub fn new(recall: f64, rng: GameRng) -> Self {
        Self {
            recall: recall.clamp(0.0, 1.0),
            rng,
            seen: FxHashMap::default(),
        }
    }

    #[must_use]
    pub fn recall(&self) -> f64 {
        self.recall
    }

    /// Identity remembered for a position.
    #[must_use]
    pub fn remembers(&self, index: usize) -> Option<Identity> {
        self.seen.get(&index).copied()
    }

    /// Forget everything (new deal).
    pub fn forget(&mut self) {
        self.seen.clear();
    }

    /// Look at the table after a move.
    pub fn observe(&mut self, round: &Round) {
        for (index, card) in round.cards().iter().enumerate() {
            if card.matched {
                self.seen.remove(&index);
            } else if card.revealed && !self.seen.contains_key(&index) && self.rng.gen_bool(self.recall) {
                self.seen.insert(index, card.identity());
            }
        }
    }

    /// Choose the next card to pick, or `None` if nothing is selectable.
    ///
    /// With one card pending, completes it from memory when possible.
    /// Otherwise opens a remembered pair, then explores unseen cards,
    /// then falls back to any legal card.
    pub fn choose(&mut self, round: &Round) -> Option<usize> {
        let legal = round.selectable();
        if legal.is_empty() {
            return None;
        }

        let open = round
            .pending()
            .first()
            .and_then(|&i| round.card(i))
            .filter(|card| card.is_face_up())
            .map(|card| card.identity());

        let choice = match open {
            Some(identity) => self.find_remembered(&legal, identity),
            None => self.known_pair(&legal),
        };

        choice.or_else(|| {
            let unseen: Vec<usize> = legal.iter().copied().filter(|i| !self.seen.contains_key(i)).collect();
            let pool = if unseen.is_empty() { &legal } else { &unseen };
            self.rng.choose(pool).copied()
        })
    }

    fn find_remembered(&self, legal: &[usize], identity: Identity) -> Option<usize> {
        legal
            .iter()
            .copied()
            .find(|i| self.seen.get(i) == Some(&identity))
    }

    fn known_pair(&self, legal: &[usize]) -> Option<usize> {
        let mut by_identity: FxHashMap<Identity, usize> = FxHashMap::default();
        for &index in legal {
            if let Some(&identity) = self.seen.get(&index) {
                if by_identity.insert(identity, index).is_some() {
                    return Some(index);
                }
            }
        }
        None
    }
}
