//! Deck builder property tests.
//!
//! These tests verify the deal for arbitrary identity sets:
//! - Every identity appears exactly twice
//! - Every card starts face down and unmatched
//! - Deal order varies across deals

use proptest::prelude::*;
use rustc_hash::FxHashMap;

use rust_pairs::cards::Identity;
use rust_pairs::core::GameRng;
use rust_pairs::deck::{build_deck, fisher_yates};

proptest! {
    #[test]
    fn deck_holds_each_identity_twice(pairs in 0u16..64, seed in any::<u64>()) {
        let identities: Vec<Identity> = (0..pairs).map(Identity::new).collect();
        let deck = build_deck(&identities, &mut GameRng::new(seed));

        prop_assert_eq!(deck.len(), 2 * identities.len());

        let mut counts: FxHashMap<Identity, usize> = FxHashMap::default();
        for card in &deck {
            prop_assert!(!card.revealed);
            prop_assert!(!card.matched);
            *counts.entry(card.identity()).or_insert(0) += 1;
        }
        prop_assert_eq!(counts.len(), identities.len());
        prop_assert!(counts.values().all(|&c| c == 2));
    }

    #[test]
    fn fisher_yates_is_a_permutation(items in proptest::collection::vec(any::<u32>(), 0..128), seed in any::<u64>()) {
        let mut items = items;
        let mut expected = items.clone();
        fisher_yates(&mut items, &mut GameRng::new(seed));

        items.sort_unstable();
        expected.sort_unstable();
        prop_assert_eq!(items, expected);
    }

    #[test]
    fn deal_depends_only_on_seed(pairs in 1u16..32, seed in any::<u64>()) {
        let identities: Vec<Identity> = (0..pairs).map(Identity::new).collect();
        let a = build_deck(&identities, &mut GameRng::new(seed));
        let b = build_deck(&identities, &mut GameRng::new(seed));
        prop_assert_eq!(a, b);
    }
}

/// Statistical check: the first position is not biased toward any identity.
#[test]
fn test_first_position_is_unbiased() {
    let identities: Vec<Identity> = (0..4).map(Identity::new).collect();
    let mut rng = GameRng::new(31337);
    let mut first: FxHashMap<Identity, usize> = FxHashMap::default();
    let deals = 8000;

    for _ in 0..deals {
        let deck = build_deck(&identities, &mut rng);
        *first.entry(deck[0].identity()).or_insert(0) += 1;
    }

    // Expected 2000 each; allow a wide margin
    assert_eq!(first.len(), 4);
    for (identity, &count) in &first {
        assert!(
            (1700..=2300).contains(&count),
            "{identity} led {count} of {deals} deals"
        );
    }
}

/// Consecutive deals from one stream differ.
#[test]
fn test_order_not_fixed_across_deals() {
    let identities: Vec<Identity> = (0..10).map(Identity::new).collect();
    let mut rng = GameRng::new(1);

    let deals: Vec<_> = (0..10).map(|_| build_deck(&identities, &mut rng)).collect();
    let distinct = deals
        .iter()
        .enumerate()
        .filter(|(i, deck)| deals[..*i].iter().all(|earlier| earlier != *deck))
        .count();

    assert_eq!(distinct, deals.len());
}
