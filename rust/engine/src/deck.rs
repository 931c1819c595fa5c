use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, parse_cards, Card};
use crate::errors::GameError;

/// Ordered cards remaining for a single hand.
///
/// Cards are consumed from the front and never returned; there is no
/// reshuffle once dealing has begun.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
    position: usize,
}

impl Deck {
    /// A fresh 52-card deck shuffled with thread-local entropy.
    pub fn shuffled() -> Self {
        let mut cards = full_deck();
        cards.shuffle(&mut rand::rng());
        Self::from_cards(cards)
    }

    /// A fresh 52-card deck shuffled with a seeded ChaCha20 RNG; the same
    /// seed always yields the same order.
    pub fn from_seed(seed: u64) -> Self {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let mut cards = full_deck();
        cards.shuffle(&mut rng);
        Self::from_cards(cards)
    }

    /// Uses `cards` as-is, front first.
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards, position: 0 }
    }

    /// Builds a fixed deck from whitespace separated codes, e.g. `"Ah Kd 7c"`.
    pub fn parse(s: &str) -> Result<Self, GameError> {
        Ok(Self::from_cards(parse_cards(s)?))
    }

    /// Removes and returns the first `n` cards.
    pub fn deal(&mut self, n: usize) -> Result<Vec<Card>, GameError> {
        let remaining = self.remaining();
        if n > remaining {
            return Err(GameError::DeckExhausted {
                requested: n,
                remaining,
            });
        }
        let dealt = self.cards[self.position..self.position + n].to_vec();
        self.position += n;
        Ok(dealt)
    }

    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.position)
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::shuffled()
    }
}
