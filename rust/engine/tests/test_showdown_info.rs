mod common;

use std::cell::Cell;

use axiomind_holdem::cards::{Card, HoleCards};
use axiomind_holdem::config::GameConfig;
use axiomind_holdem::engine::Hand;
use axiomind_holdem::errors::{EvaluationError, GameError};
use axiomind_holdem::evaluator::{EvaluatedWinner, HandEvaluator, StandardEvaluator};
use axiomind_holdem::player::PlayerAction::{Bet, Fold};
use axiomind_holdem::player::PlayerId;
use axiomind_holdem::showdown::Payout;

use common::{deck, everyone_ties, seats, NeverEvaluate};

const FOUR_HANDED_DECK: &str = "2c 3c 4d 5d 6h 7h 8s 9s Tc Jd Qh Ks 2h";

fn check_all(hand: &mut Hand<'_>, players: &[&str]) {
    for p in players {
        hand.act(p, Bet(0)).unwrap();
    }
}

#[test]
fn last_player_standing_wins_without_evaluation() {
    let mut table = seats(&[("a", 500), ("b", 500), ("c", 500)]);
    let mut payouts: Vec<Payout> = Vec::new();
    {
        let mut hand = Hand::new(&mut table, GameConfig::new(5, 10), deck(FOUR_HANDED_DECK))
            .unwrap()
            .with_evaluator(NeverEvaluate)
            .with_observer(&mut payouts);
        hand.start().unwrap();
        hand.act("a", Bet(30)).unwrap();
        hand.act("b", Fold).unwrap();
        hand.act("c", Fold).unwrap();
        assert!(hand.is_complete());
        assert_eq!(hand.state().community_cards.len(), 5);
    }
    assert_eq!(payouts.len(), 1);
    assert_eq!(payouts[0].player_ids, vec![PlayerId::from("a")]);
    assert!(payouts[0].winning_cards.is_empty());
    assert_eq!(payouts[0].amount(), 45);
    assert_eq!(table[0].stack, 515);
}

#[test]
fn odd_chips_go_to_first_winner_in_seat_order() {
    // b folds its 2 chip blind, three players split 101
    let mut table = seats(&[("a", 1_000), ("b", 1_000), ("c", 1_000), ("d", 1_000)]);
    let mut payouts: Vec<Payout> = Vec::new();
    {
        let mut hand = Hand::new(&mut table, GameConfig::new(2, 33), deck(FOUR_HANDED_DECK))
            .unwrap()
            .with_evaluator(everyone_ties)
            .with_observer(&mut payouts);
        hand.start().unwrap();
        hand.act("d", Bet(33)).unwrap();
        hand.act("a", Bet(33)).unwrap();
        hand.act("b", Fold).unwrap();
        hand.act("c", Bet(0)).unwrap();
        for _ in 0..3 {
            check_all(&mut hand, &["a", "c", "d"]);
        }
        assert!(hand.is_complete());
    }
    assert_eq!(payouts.len(), 1);
    assert_eq!(
        payouts[0].player_ids,
        vec![PlayerId::from("a"), PlayerId::from("c"), PlayerId::from("d")]
    );
    assert_eq!(payouts[0].shares, vec![35, 33, 33]);
    assert_eq!(table[0].stack, 1_002);
    assert_eq!(table[1].stack, 998);
    assert_eq!(table[2].stack, 1_000);
    assert_eq!(table[3].stack, 1_000);
}

#[test]
fn winning_cards_are_sorted_and_deduplicated() {
    fn shared_board_wins(
        hands: &[HoleCards],
        board: &[Card],
    ) -> Result<Vec<EvaluatedWinner>, EvaluationError> {
        Ok((0..hands.len())
            .map(|hand_index| EvaluatedWinner {
                hand_index,
                cards: board.iter().rev().copied().collect(),
            })
            .collect())
    }

    let mut table = seats(&[("a", 100), ("b", 100)]);
    let mut payouts: Vec<Payout> = Vec::new();
    {
        let mut hand = Hand::new(&mut table, GameConfig::new(5, 10), deck(FOUR_HANDED_DECK))
            .unwrap()
            .with_evaluator(shared_board_wins)
            .with_observer(&mut payouts);
        hand.start().unwrap();
        hand.act("a", Bet(95)).unwrap();
        hand.act("b", Bet(90)).unwrap();
    }
    let cards = &payouts[0].winning_cards;
    assert_eq!(cards.len(), 5);
    assert!(cards.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(payouts[0].shares, vec![100, 100]);
}

#[test]
fn evaluator_failure_propagates_and_keeps_chips_in_pots() {
    fn unavailable(
        _hands: &[HoleCards],
        _board: &[Card],
    ) -> Result<Vec<EvaluatedWinner>, EvaluationError> {
        Err(EvaluationError::Service("offline".into()))
    }

    let mut table = seats(&[("a", 100), ("b", 100)]);
    let mut hand = Hand::new(&mut table, GameConfig::new(5, 10), deck(FOUR_HANDED_DECK))
        .unwrap()
        .with_evaluator(unavailable);
    hand.start().unwrap();
    hand.act("a", Bet(95)).unwrap();
    let err = hand.act("b", Bet(90)).unwrap_err();
    assert_eq!(
        err,
        GameError::Evaluation(EvaluationError::Service("offline".into()))
    );
    assert!(!hand.is_complete());
    assert_eq!(hand.state().pots[0].amount, 200);
    assert_eq!(hand.total_chips(), 200);
}

#[test]
fn evaluator_naming_unknown_hand_is_rejected() {
    fn out_of_range(
        hands: &[HoleCards],
        _board: &[Card],
    ) -> Result<Vec<EvaluatedWinner>, EvaluationError> {
        Ok(vec![EvaluatedWinner {
            hand_index: hands.len(),
            cards: vec![],
        }])
    }

    let mut table = seats(&[("a", 100), ("b", 100)]);
    let mut hand = Hand::new(&mut table, GameConfig::new(5, 10), deck(FOUR_HANDED_DECK))
        .unwrap()
        .with_evaluator(out_of_range);
    hand.start().unwrap();
    hand.act("a", Bet(95)).unwrap();
    let err = hand.act("b", Bet(90)).unwrap_err();
    assert_eq!(
        err,
        GameError::InvalidEvaluation {
            index: 2,
            submitted: 2,
        }
    );
}

/// Evaluates the first pot normally, then reports the service as down.
#[derive(Default)]
struct FailsAfterFirstPot {
    calls: Cell<u32>,
}

impl HandEvaluator for FailsAfterFirstPot {
    fn winners(
        &self,
        hands: &[HoleCards],
        board: &[Card],
    ) -> Result<Vec<EvaluatedWinner>, EvaluationError> {
        self.calls.set(self.calls.get() + 1);
        if self.calls.get() > 1 {
            return Err(EvaluationError::Service("timeout".into()));
        }
        StandardEvaluator.winners(hands, board)
    }
}

#[test]
fn pots_paid_before_an_evaluator_failure_stay_in_the_history() {
    let mut table = seats(&[("a", 100), ("b", 50), ("c", 25)]);
    let mut observed: Vec<Payout> = Vec::new();
    {
        let mut hand = Hand::new(
            &mut table,
            GameConfig::new(5, 10),
            deck("2c 3d Kc Kd Ac Ad Ah 7s 8h 9c Js"),
        )
        .unwrap()
        .with_evaluator(FailsAfterFirstPot::default())
        .with_observer(&mut observed);
        hand.start().unwrap();
        hand.act("a", Bet(100)).unwrap();
        hand.act("b", Bet(45)).unwrap();
        let err = hand.act("c", Bet(15)).unwrap_err();
        assert!(matches!(err, GameError::Evaluation(_)));
        assert!(!hand.is_complete());

        assert_eq!(hand.payouts().len(), 1);
        assert_eq!(hand.payouts()[0].player_ids, vec![PlayerId::from("c")]);
        assert_eq!(hand.record("h-1").payouts, hand.payouts());
        assert_eq!(hand.pots().len(), 2);
        assert_eq!(hand.total_chips(), hand.chips_at_start());
    }
    assert_eq!(observed.len(), 1);
    assert_eq!(table[2].stack, 75);
}
