//! Showdown hand comparison.
//!
//! The hand engine only talks to the [`HandEvaluator`] trait; any service
//! that can pick winners among two-card hands on a shared board can be
//! plugged in. [`StandardEvaluator`] is the in-process default.

use std::cmp::Ordering;

use crate::cards::{Card, HoleCards};
use crate::errors::EvaluationError;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd)]
pub enum Category {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct HandStrength {
    pub category: Category,
    // kickers: ordered high -> low for tiebreaks
    pub kickers: [u8; 5],
}

pub fn compare_hands(a: &HandStrength, b: &HandStrength) -> Ordering {
    match a.category.cmp(&b.category) {
        Ordering::Equal => a.kickers.cmp(&b.kickers),
        ord => ord,
    }
}

/// One winning hand as reported by an evaluator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluatedWinner {
    /// Index into the `hands` slice passed to [`HandEvaluator::winners`]
    pub hand_index: usize,
    /// The cards forming the winning hand
    pub cards: Vec<Card>,
}

/// Picks the best hand(s) among players sharing a board.
///
/// Ties are reported as multiple winners. The engine re-orders winners by
/// seat, so the order returned here does not affect payouts.
pub trait HandEvaluator {
    fn winners(
        &self,
        hands: &[HoleCards],
        board: &[Card],
    ) -> Result<Vec<EvaluatedWinner>, EvaluationError>;
}

impl<F> HandEvaluator for F
where
    F: Fn(&[HoleCards], &[Card]) -> Result<Vec<EvaluatedWinner>, EvaluationError>,
{
    fn winners(
        &self,
        hands: &[HoleCards],
        board: &[Card],
    ) -> Result<Vec<EvaluatedWinner>, EvaluationError> {
        self(hands, board)
    }
}

/// Best-five-of-seven evaluator ranking by category then kickers.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardEvaluator;

impl HandEvaluator for StandardEvaluator {
    fn winners(
        &self,
        hands: &[HoleCards],
        board: &[Card],
    ) -> Result<Vec<EvaluatedWinner>, EvaluationError> {
        if hands.is_empty() {
            return Err(EvaluationError::NoHands);
        }
        let mut best: Vec<([Card; 5], HandStrength)> = Vec::with_capacity(hands.len());
        for hole in hands {
            let mut cards = Vec::with_capacity(board.len() + 2);
            cards.extend_from_slice(hole);
            cards.extend_from_slice(board);
            let found = best_five(&cards).ok_or(EvaluationError::NotEnoughCards {
                count: cards.len(),
            })?;
            best.push(found);
        }

        let top = best
            .iter()
            .map(|(_, s)| s)
            .max_by(|a, b| compare_hands(a, b))
            .cloned()
            .ok_or(EvaluationError::NoHands)?;

        Ok(best
            .into_iter()
            .enumerate()
            .filter(|(_, (_, s))| compare_hands(s, &top).is_eq())
            .map(|(hand_index, (five, _))| EvaluatedWinner {
                hand_index,
                cards: five.to_vec(),
            })
            .collect())
    }
}

/// Best five-card hand out of `cards`, `None` with fewer than five.
pub fn best_five(cards: &[Card]) -> Option<([Card; 5], HandStrength)> {
    let n = cards.len();
    let mut best: Option<([Card; 5], HandStrength)> = None;
    for a in 0..n {
        for b in a + 1..n {
            for c in b + 1..n {
                for d in c + 1..n {
                    for e in d + 1..n {
                        let five = [cards[a], cards[b], cards[c], cards[d], cards[e]];
                        let strength = evaluate_five(&five);
                        let better = match &best {
                            Some((_, s)) => compare_hands(&strength, s).is_gt(),
                            None => true,
                        };
                        if better {
                            best = Some((five, strength));
                        }
                    }
                }
            }
        }
    }
    best
}

pub fn evaluate_five(cards: &[Card; 5]) -> HandStrength {
    let mut rank_counts = [0u8; 15]; // 2..14 used
    for c in cards {
        rank_counts[c.rank as usize] += 1;
    }
    let flush = cards.iter().all(|c| c.suit == cards[0].suit);

    // (count, rank) high -> low, so groups come before singles
    let mut groups: Vec<(u8, u8)> = (2..=14u8)
        .filter(|&r| rank_counts[r as usize] > 0)
        .map(|r| (rank_counts[r as usize], r))
        .collect();
    groups.sort_unstable_by(|a, b| b.cmp(a));

    let mut kickers = [0u8; 5];
    for (slot, &(_, r)) in kickers.iter_mut().zip(groups.iter()) {
        *slot = r;
    }

    let straight_high = if groups.len() == 5 {
        detect_straight_high(&rank_counts)
    } else {
        None
    };

    let category = match (straight_high, flush, groups[0].0, groups.get(1).map(|g| g.0)) {
        (Some(_), true, _, _) => Category::StraightFlush,
        (_, _, 4, _) => Category::FourOfAKind,
        (_, _, 3, Some(2)) => Category::FullHouse,
        (_, true, _, _) => Category::Flush,
        (Some(_), false, _, _) => Category::Straight,
        (_, _, 3, _) => Category::ThreeOfAKind,
        (_, _, 2, Some(2)) => Category::TwoPair,
        (_, _, 2, _) => Category::OnePair,
        _ => Category::HighCard,
    };

    if let Some(high) = straight_high {
        if matches!(category, Category::StraightFlush | Category::Straight) {
            kickers = [high, 0, 0, 0, 0];
        }
    }

    HandStrength { category, kickers }
}

fn detect_straight_high(rank_counts: &[u8; 15]) -> Option<u8> {
    let present = |r: u8| rank_counts[r as usize] > 0;
    for high in (6..=14u8).rev() {
        if (high - 4..=high).all(present) {
            return Some(high);
        }
    }
    // wheel: A-2-3-4-5 plays as five-high
    if present(14) && (2..=5).all(present) {
        return Some(5);
    }
    None
}
