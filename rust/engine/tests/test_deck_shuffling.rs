use std::collections::HashSet;

use axiomind_holdem::cards::{full_deck, Card};
use axiomind_holdem::deck::Deck;
use axiomind_holdem::errors::GameError;

#[test]
fn shuffled_deck_has_52_unique_cards() {
    let mut deck = Deck::shuffled();
    let cards = deck.deal(52).expect("should have 52 cards");
    let set: HashSet<Card> = cards.iter().copied().collect();
    assert_eq!(set.len(), 52);
    assert_eq!(deck.remaining(), 0);
}

#[test]
fn shuffle_is_deterministic_with_same_seed() {
    let mut d1 = Deck::from_seed(12345);
    let mut d2 = Deck::from_seed(12345);
    assert_eq!(d1.deal(10).unwrap(), d2.deal(10).unwrap());
}

#[test]
fn shuffle_differs_with_different_seed() {
    let mut d1 = Deck::from_seed(1);
    let mut d2 = Deck::from_seed(2);
    assert_ne!(
        d1.deal(10).unwrap(),
        d2.deal(10).unwrap(),
        "different seeds should produce different orders (high probability)"
    );
}

#[test]
fn seeded_shuffle_is_a_permutation_of_the_full_deck() {
    let mut deck = Deck::from_seed(777);
    let mut dealt = deck.deal(52).unwrap();
    let mut reference = full_deck();
    dealt.sort();
    reference.sort();
    assert_eq!(dealt, reference);
}

#[test]
fn deal_consumes_from_the_front_and_never_reuses() {
    let mut deck = Deck::parse("Ah Kd 7c 2s").unwrap();
    let first = deck.deal(3).unwrap();
    let names: Vec<String> = first.iter().map(Card::to_string).collect();
    assert_eq!(names, vec!["Ah", "Kd", "7c"]);
    assert_eq!(deck.remaining(), 1);

    let err = deck.deal(2).unwrap_err();
    assert_eq!(
        err,
        GameError::DeckExhausted {
            requested: 2,
            remaining: 1,
        }
    );
    assert_eq!(deck.deal(1).unwrap()[0].to_string(), "2s");
}

#[test]
fn invalid_card_codes_are_rejected() {
    for bad in ["1h", "Ax", "A", "Ahh", "ah"] {
        assert!(
            matches!(bad.parse::<Card>(), Err(GameError::InvalidCard(_))),
            "{bad} should not parse"
        );
    }
    assert!(Deck::parse("Ah Zz").is_err());
}

#[test]
fn cards_serialize_as_two_character_codes() {
    let card: Card = "Td".parse().unwrap();
    assert_eq!(serde_json::to_string(&card).unwrap(), "\"Td\"");
    let back: Card = serde_json::from_str("\"Qs\"").unwrap();
    assert_eq!(back.to_string(), "Qs");
}
