use std::collections::BTreeMap;

use crate::errors::GameError;
use crate::player::{Chips, Seat};

/// Current-round contributions, keyed by seat index, plus the minimum raise.
///
/// The ledger never owns stacks: every mutation goes through the borrowed
/// seat slice so chips move between `Seat::stack` and the ledger one-for-one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BetLedger {
    bets: BTreeMap<usize, Chips>,
    min_raise: Chips,
}

impl BetLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bets(&self) -> &BTreeMap<usize, Chips> {
        &self.bets
    }

    pub fn bet_of(&self, seat: usize) -> Chips {
        self.bets.get(&seat).copied().unwrap_or(0)
    }

    pub fn total(&self) -> Chips {
        self.bets.values().sum()
    }

    pub fn min_raise(&self) -> Chips {
        self.min_raise
    }

    pub fn set_min_raise(&mut self, min_raise: Chips) {
        self.min_raise = min_raise;
    }

    /// Highest current-round bet, 0 if nobody has bet.
    pub fn max_bet(&self) -> Chips {
        self.bets.values().copied().max().unwrap_or(0)
    }

    /// Highest current-round bet among players with nothing left behind.
    pub fn max_call_in(&self, seats: &[Seat]) -> Option<Chips> {
        self.bets
            .iter()
            .filter(|(&seat, _)| seats.get(seat).is_some_and(Seat::is_all_in))
            .map(|(_, &bet)| bet)
            .max()
    }

    /// Whether putting `amount` more chips in is legal for `seat`.
    ///
    /// With `T` the resulting round total, the bet is legal when it is the
    /// whole remaining stack, when `T` matches the all-in ceiling or the
    /// current bet, or when `T` is at least a full raise above the current bet.
    ///
    /// ```
    /// use axiomind_holdem::player::Seat;
    /// use axiomind_holdem::rules::BetLedger;
    ///
    /// let mut seats = vec![Seat::new("a", 100), Seat::new("b", 100), Seat::new("c", 100)];
    /// let mut ledger = BetLedger::new();
    /// ledger.set_min_raise(10);
    /// ledger.place_bet(&mut seats, 0, 10).unwrap();
    /// ledger.place_bet(&mut seats, 1, 20).unwrap();
    /// assert_eq!(ledger.min_raise(), 10);
    /// assert!(!ledger.is_valid_bet(&seats, 2, 25));
    /// assert!(ledger.is_valid_bet(&seats, 2, 30));
    /// ```
    pub fn is_valid_bet(&self, seats: &[Seat], seat: usize, amount: Chips) -> bool {
        let Some(stack) = seats.get(seat).map(|s| s.stack) else {
            return false;
        };
        if amount > stack {
            return false;
        }
        if amount == stack {
            return true;
        }
        let total = self.bet_of(seat) + amount;
        let max_bet = self.max_bet();
        self.max_call_in(seats) == Some(total)
            || total == max_bet
            || total >= max_bet + self.min_raise
    }

    /// Moves `amount` from the seat's stack into its round total without any
    /// legality check. Used directly for forced posts.
    pub fn record_bet(
        &mut self,
        seats: &mut [Seat],
        seat: usize,
        amount: Chips,
    ) -> Result<(), GameError> {
        let s = &mut seats[seat];
        if amount > s.stack {
            return Err(GameError::InsufficientChips {
                player: s.player_id.clone(),
                amount,
                stack: s.stack,
            });
        }
        s.stack -= amount;
        *self.bets.entry(seat).or_insert(0) += amount;
        Ok(())
    }

    /// Validates and commits a voluntary bet, updating the minimum raise when
    /// the bet is a full raise.
    pub fn place_bet(
        &mut self,
        seats: &mut [Seat],
        seat: usize,
        amount: Chips,
    ) -> Result<(), GameError> {
        if !self.is_valid_bet(seats, seat, amount) {
            return Err(GameError::InvalidBet {
                player: seats[seat].player_id.clone(),
                amount,
            });
        }
        let max_bet = self.max_bet();
        let total = self.bet_of(seat) + amount;
        self.record_bet(seats, seat, amount)?;
        if total >= max_bet + self.min_raise {
            self.min_raise = total - max_bet;
        }
        Ok(())
    }

    /// Hands every current-round contribution to the caller and clears the
    /// ledger. The minimum raise is left untouched.
    pub fn take_bets(&mut self) -> BTreeMap<usize, Chips> {
        std::mem::take(&mut self.bets)
    }
}
