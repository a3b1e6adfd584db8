//! Shuffle-and-deal.

use tracing::trace;

use crate::cards::{Card, Identity};
use crate::core::GameRng;

/// Uniform in-place permutation (Fisher-Yates).
///
/// Walks from the last index down to 1, swapping each element with a
/// uniformly chosen element in `[0, i]`. Every permutation is equally
/// likely given a uniform source.
pub fn fisher_yates<T>(items: &mut [T], rng: &mut GameRng) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range_usize(0..i + 1);
        items.swap(i, j);
    }
}

/// Build a face-down deck holding every identity exactly twice, shuffled.
///
/// An empty identity set deals an empty deck.
///
/// ```
/// use rust_pairs::cards::Identity;
/// use rust_pairs::core::GameRng;
/// use rust_pairs::deck::build_deck;
///
/// let identities = [Identity::new(0), Identity::new(1), Identity::new(2)];
/// let deck = build_deck(&identities, &mut GameRng::new(7));
/// assert_eq!(deck.len(), 6);
/// assert!(deck.iter().all(|c| !c.revealed && !c.matched));
/// ```
#[must_use]
pub fn build_deck(identities: &[Identity], rng: &mut GameRng) -> Vec<Card> {
    let mut deck: Vec<Card> = identities
        .iter()
        .chain(identities.iter())
        .copied()
        .map(Card::new)
        .collect();

    fisher_yates(&mut deck, rng);
    trace!(cards = deck.len(), "dealt deck");
    deck
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashMap;

    fn identities(n: u16) -> Vec<Identity> {
        (0..n).map(Identity::new).collect()
    }

    #[test]
    fn test_each_identity_twice() {
        let mut rng = GameRng::new(42);
        let deck = build_deck(&identities(10), &mut rng);
        assert_eq!(deck.len(), 20);

        let mut counts: FxHashMap<Identity, usize> = FxHashMap::default();
        for card in &deck {
            *counts.entry(card.identity()).or_insert(0) += 1;
        }
        assert_eq!(counts.len(), 10);
        assert!(counts.values().all(|&c| c == 2));
    }

    #[test]
    fn test_empty_identity_set() {
        let mut rng = GameRng::new(1);
        assert!(build_deck(&[], &mut rng).is_empty());
    }

    #[test]
    fn test_same_seed_same_deal() {
        let deck1 = build_deck(&identities(8), &mut GameRng::new(99));
        let deck2 = build_deck(&identities(8), &mut GameRng::new(99));
        assert_eq!(deck1, deck2);
    }

    #[test]
    fn test_order_varies_across_deals() {
        let mut rng = GameRng::new(5);
        let first = build_deck(&identities(10), &mut rng);
        let distinct = (0..20)
            .map(|_| build_deck(&identities(10), &mut rng))
            .filter(|deck| *deck != first)
            .count();
        // 20!/2^10 arrangements; a repeat is astronomically unlikely
        assert_eq!(distinct, 20);
    }

    #[test]
    fn test_fisher_yates_is_uniform() {
        let mut rng = GameRng::new(2024);
        let mut counts: FxHashMap<[u8; 3], usize> = FxHashMap::default();
        let trials = 6000;

        for _ in 0..trials {
            let mut items = [0u8, 1, 2];
            fisher_yates(&mut items, &mut rng);
            *counts.entry(items).or_insert(0) += 1;
        }

        assert_eq!(counts.len(), 6, "all 3! permutations should appear");
        for (perm, &count) in &counts {
            assert!(
                (800..=1200).contains(&count),
                "permutation {perm:?} seen {count} times out of {trials}"
            );
        }
    }

    #[test]
    fn test_fisher_yates_single_element() {
        let mut rng = GameRng::new(3);
        let mut items = [42];
        fisher_yates(&mut items, &mut rng);
        assert_eq!(items, [42]);

        let mut empty: [u8; 0] = [];
        fisher_yates(&mut empty, &mut rng);
    }
}
