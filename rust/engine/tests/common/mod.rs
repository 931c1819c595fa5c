#![allow(dead_code)]

use std::time::Duration;

use axiomind_holdem::cards::{Card, HoleCards};
use axiomind_holdem::deck::Deck;
use axiomind_holdem::errors::EvaluationError;
use axiomind_holdem::evaluator::{EvaluatedWinner, HandEvaluator};
use axiomind_holdem::pacing::Pacer;
use axiomind_holdem::player::{Chips, Seat};

pub fn seats(players: &[(&str, Chips)]) -> Vec<Seat> {
    players.iter().map(|&(id, stack)| Seat::new(id, stack)).collect()
}

/// Fixed deck: hole cards go to seats in order, two at a time, then the board.
pub fn deck(codes: &str) -> Deck {
    Deck::parse(codes).expect("valid card codes")
}

/// Every submitted hand wins, reported in reverse order.
pub fn everyone_ties(
    hands: &[HoleCards],
    _board: &[Card],
) -> Result<Vec<EvaluatedWinner>, EvaluationError> {
    Ok((0..hands.len())
        .rev()
        .map(|hand_index| EvaluatedWinner {
            hand_index,
            cards: vec![],
        })
        .collect())
}

pub struct NeverEvaluate;

impl HandEvaluator for NeverEvaluate {
    fn winners(
        &self,
        _hands: &[HoleCards],
        _board: &[Card],
    ) -> Result<Vec<EvaluatedWinner>, EvaluationError> {
        panic!("evaluator must not be consulted");
    }
}

#[derive(Default)]
pub struct RecordingPacer(pub Vec<Duration>);

impl Pacer for RecordingPacer {
    fn pause(&mut self, duration: Duration) {
        self.0.push(duration);
    }
}
