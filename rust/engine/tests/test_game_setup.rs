mod common;

use axiomind_holdem::config::GameConfig;
use axiomind_holdem::deck::Deck;
use axiomind_holdem::engine::Hand;
use axiomind_holdem::errors::GameError;
use axiomind_holdem::player::{PlayerId, Seat};

use common::seats;

#[test]
fn single_seat_is_a_fatal_error() {
    let mut table = seats(&[("solo", 100)]);
    let err = Hand::new(&mut table, GameConfig::default(), Deck::from_seed(1))
        .err()
        .unwrap();
    assert_eq!(err, GameError::TooFewSeats { seats: 1 });
    assert!(err.is_fatal());
}

#[test]
fn table_must_fit_in_the_deck() {
    let mut table: Vec<Seat> = (0..24).map(|i| Seat::new(format!("p{i}"), 100)).collect();
    let err = Hand::new(&mut table, GameConfig::default(), Deck::from_seed(1))
        .err()
        .unwrap();
    assert_eq!(err, GameError::TooManySeats { seats: 24 });

    table.truncate(23);
    assert!(Hand::new(&mut table, GameConfig::default(), Deck::from_seed(1)).is_ok());
}

#[test]
fn duplicate_players_and_empty_stacks_are_rejected() {
    let mut dup = seats(&[("a", 100), ("a", 100)]);
    assert_eq!(
        Hand::new(&mut dup, GameConfig::default(), Deck::from_seed(1)).err(),
        Some(GameError::DuplicatePlayer(PlayerId::from("a")))
    );

    let mut broke = seats(&[("a", 100), ("b", 0)]);
    assert_eq!(
        Hand::new(&mut broke, GameConfig::default(), Deck::from_seed(1)).err(),
        Some(GameError::EmptyStack(PlayerId::from("b")))
    );
}

#[test]
fn invalid_config_is_rejected_before_dealing() {
    let mut table = seats(&[("a", 100), ("b", 100)]);
    let err = Hand::new(&mut table, GameConfig::new(0, 0), Deck::from_seed(1))
        .err()
        .unwrap();
    assert!(matches!(err, GameError::InvalidConfig(_)));
}

#[test]
fn config_loads_from_toml_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("stakes.toml");
    std::fs::write(
        &path,
        "small_blind = 25\nbig_blind = 50\nantes = 5\ntime_limit_ms = 15000\n",
    )
    .unwrap();
    let cfg = GameConfig::load(&path).unwrap();
    assert_eq!(
        cfg,
        GameConfig {
            small_blind: 25,
            big_blind: 50,
            antes: 5,
            time_limit_ms: 15_000,
        }
    );
    assert!(GameConfig::load(dir.path().join("missing.toml")).is_err());
}

#[test]
fn seats_are_visible_during_the_hand() {
    let mut table = seats(&[("a", 100), ("b", 100)]);
    let mut hand = Hand::new(&mut table, GameConfig::new(5, 10), Deck::from_seed(3)).unwrap();
    hand.start().unwrap();
    assert_eq!(hand.get_seat_by_player_id("a").unwrap().stack, 95);
    assert_eq!(hand.seats()[1].stack, 90);
    assert_eq!(hand.total_chips(), 200);
}
