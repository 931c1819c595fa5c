use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::player::Chips;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PotId(pub u32);

impl fmt::Display for PotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pot-{}", self.0)
    }
}

/// Chips at stake together with the seats that may win them.
///
/// `eligible` holds seat indices. It only shrinks (on fold) and `amount`
/// only grows until the pot is paid out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pot {
    pub id: PotId,
    pub amount: Chips,
    pub eligible: BTreeSet<usize>,
}

/// The pots of one hand, main pot first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PotManager {
    pots: Vec<Pot>,
    next_id: u32,
}

impl PotManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pots(&self) -> &[Pot] {
        &self.pots
    }

    pub fn total(&self) -> Chips {
        self.pots.iter().map(|p| p.amount).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.pots.is_empty()
    }

    /// Folds current-round contributions into pots.
    ///
    /// Contributions are peeled off in ascending layers: each layer takes the
    /// smallest outstanding amount from every remaining contributor, and is
    /// winnable by those contributors still holding cards. A layer whose
    /// eligible set matches an existing pot is merged into it. A layer that
    /// nobody can win is dead money for the pot below it.
    ///
    /// ```
    /// use std::collections::BTreeMap;
    /// use axiomind_holdem::pot::PotManager;
    ///
    /// let mut pots = PotManager::new();
    /// pots.absorb(BTreeMap::from([(0, 100), (1, 50), (2, 25)]), |_| true);
    /// let amounts: Vec<u64> = pots.pots().iter().map(|p| p.amount).collect();
    /// assert_eq!(amounts, vec![75, 50, 25]);
    /// ```
    pub fn absorb<F>(&mut self, bets: BTreeMap<usize, Chips>, holds_cards: F)
    where
        F: Fn(usize) -> bool,
    {
        let mut remaining: Vec<(usize, Chips)> =
            bets.into_iter().filter(|&(_, amount)| amount > 0).collect();
        remaining.sort_by_key(|&(seat, amount)| (amount, seat));

        while let Some(&(_, level)) = remaining.first() {
            let eligible: BTreeSet<usize> = remaining
                .iter()
                .map(|&(seat, _)| seat)
                .filter(|&seat| holds_cards(seat))
                .collect();
            let amount = level * remaining.len() as Chips;
            self.add_layer(eligible, amount);

            for entry in remaining.iter_mut() {
                entry.1 -= level;
            }
            remaining.retain(|&(_, amount)| amount > 0);
        }
        self.merge_dead_pots();
    }

    fn add_layer(&mut self, eligible: BTreeSet<usize>, amount: Chips) {
        if let Some(pot) = self.pots.iter_mut().find(|p| p.eligible == eligible) {
            pot.amount += amount;
            return;
        }
        self.next_id += 1;
        self.pots.push(Pot {
            id: PotId(self.next_id),
            amount,
            eligible,
        });
    }

    /// Drops a folded seat from every pot it could have won.
    pub fn remove_player(&mut self, seat: usize) {
        for pot in self.pots.iter_mut() {
            pot.eligible.remove(&seat);
        }
        self.merge_dead_pots();
    }

    /// Moves the chips of every pot without eligible seats into the closest
    /// earlier pot that still has some, or the closest later one. Leaves the
    /// pots alone when no seat is eligible anywhere.
    fn merge_dead_pots(&mut self) {
        let mut i = 0;
        while i < self.pots.len() {
            if !self.pots[i].eligible.is_empty() {
                i += 1;
                continue;
            }
            let live = |p: &Pot| !p.eligible.is_empty();
            let target = match self.pots[..i].iter().rposition(live) {
                Some(j) => j,
                None => match self.pots[i + 1..].iter().position(live) {
                    Some(j) => i + j,
                    None => return,
                },
            };
            let dead = self.pots.remove(i);
            self.pots[target].amount += dead.amount;
        }
    }

    /// Removes the oldest pot once it has been paid out.
    pub fn take_first(&mut self) -> Option<Pot> {
        if self.pots.is_empty() {
            None
        } else {
            Some(self.pots.remove(0))
        }
    }
}
