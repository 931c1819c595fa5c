use serde::{Deserialize, Serialize};

use crate::cards::{Card, HoleCards};
use crate::errors::GameError;
use crate::evaluator::HandEvaluator;
use crate::pacing::{Pacer, PAYOUT_DELAY};
use crate::player::{Chips, PlayerId, Seat};
use crate::pot::{Pot, PotId, PotManager};

/// Emitted once per pot as it is awarded, before stacks are credited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payout {
    pub pot_id: PotId,
    /// Winners in seat order
    pub player_ids: Vec<PlayerId>,
    /// Chips credited to each winner, aligned with `player_ids`
    pub shares: Vec<Chips>,
    /// Sorted, deduplicated cards forming the winning hands; empty when the
    /// pot was won uncontested
    pub winning_cards: Vec<Card>,
}

impl Payout {
    pub fn amount(&self) -> Chips {
        self.shares.iter().sum()
    }
}

/// Receives payout events, e.g. to animate chips before balances change.
pub trait PayoutObserver {
    fn on_payout(&mut self, payout: &Payout);
}

impl<O: PayoutObserver + ?Sized> PayoutObserver for &mut O {
    fn on_payout(&mut self, payout: &Payout) {
        (**self).on_payout(payout)
    }
}

impl PayoutObserver for Vec<Payout> {
    fn on_payout(&mut self, payout: &Payout) {
        self.push(payout.clone());
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl PayoutObserver for NoopObserver {
    fn on_payout(&mut self, _payout: &Payout) {}
}

/// Everything showdown reads or mutates, borrowed from the hand.
pub(crate) struct Showdown<'s> {
    pub seats: &'s mut [Seat],
    pub hole_cards: &'s [Option<HoleCards>],
    pub board: &'s [Card],
    pub evaluator: &'s dyn HandEvaluator,
    pub pacer: &'s mut dyn Pacer,
    pub observer: &'s mut dyn PayoutObserver,
}

impl Showdown<'_> {
    /// Awards every pot, front first, appending each payout to `payouts` as
    /// soon as it is credited. A pot stays in `pots` until its winners are
    /// known, so a failing evaluator leaves unpaid chips accounted for.
    pub fn settle(
        &mut self,
        pots: &mut PotManager,
        payouts: &mut Vec<Payout>,
    ) -> Result<(), GameError> {
        let holders: Vec<usize> = (0..self.hole_cards.len())
            .filter(|&seat| self.hole_cards[seat].is_some())
            .collect();

        while let Some(pot) = pots.pots().first().cloned() {
            let winners = match holders.as_slice() {
                [only] => Some((vec![*only], Vec::new())),
                _ => self.contested_winners(&pot, &holders)?,
            };
            pots.take_first();
            let Some((winners, winning_cards)) = winners else {
                tracing::warn!(
                    pot = %pot.id,
                    amount = pot.amount,
                    "no eligible player left; pot skipped"
                );
                continue;
            };
            payouts.push(self.award(&pot, winners, winning_cards));
            self.pacer.pause(PAYOUT_DELAY);
        }
        Ok(())
    }

    fn contested_winners(
        &self,
        pot: &Pot,
        holders: &[usize],
    ) -> Result<Option<(Vec<usize>, Vec<Card>)>, GameError> {
        let contenders: Vec<usize> = holders
            .iter()
            .copied()
            .filter(|seat| pot.eligible.contains(seat))
            .collect();
        if contenders.is_empty() {
            return Ok(None);
        }
        let hands: Vec<HoleCards> = contenders
            .iter()
            .filter_map(|&seat| self.hole_cards[seat])
            .collect();

        let evaluated = self.evaluator.winners(&hands, self.board)?;
        let mut winners = Vec::with_capacity(evaluated.len());
        let mut cards = Vec::new();
        for w in evaluated {
            let seat = contenders
                .get(w.hand_index)
                .copied()
                .ok_or(GameError::InvalidEvaluation {
                    index: w.hand_index,
                    submitted: contenders.len(),
                })?;
            winners.push(seat);
            cards.extend(w.cards);
        }
        if winners.is_empty() {
            return Err(GameError::InvalidEvaluation {
                index: 0,
                submitted: 0,
            });
        }
        // seat order decides who takes the odd chips
        winners.sort_unstable();
        winners.dedup();
        cards.sort();
        cards.dedup();
        Ok(Some((winners, cards)))
    }

    fn award(&mut self, pot: &Pot, winners: Vec<usize>, winning_cards: Vec<Card>) -> Payout {
        let shares = split_pot(pot.amount, winners.len());
        let payout = Payout {
            pot_id: pot.id,
            player_ids: winners
                .iter()
                .map(|&seat| self.seats[seat].player_id.clone())
                .collect(),
            shares: shares.clone(),
            winning_cards,
        };
        self.observer.on_payout(&payout);

        for (&seat, share) in winners.iter().zip(shares) {
            self.seats[seat].stack += share;
        }
        tracing::info!(
            pot = %pot.id,
            amount = pot.amount,
            winners = ?payout.player_ids,
            "pot awarded"
        );
        payout
    }
}

/// Integer split with the whole remainder going to the first winner.
///
/// ```
/// use axiomind_holdem::showdown::split_pot;
///
/// assert_eq!(split_pot(101, 3), vec![35, 33, 33]);
/// assert_eq!(split_pot(100, 2), vec![50, 50]);
/// ```
pub fn split_pot(amount: Chips, winners: usize) -> Vec<Chips> {
    if winners == 0 {
        return Vec::new();
    }
    let n = winners as Chips;
    let share = amount / n;
    let mut shares = vec![share; winners];
    shares[0] += amount % n;
    shares
}
