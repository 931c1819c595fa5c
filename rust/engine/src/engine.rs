use std::collections::{BTreeMap, HashSet};

use serde::Serialize;

use crate::cards::{Card, HoleCards};
use crate::config::GameConfig;
use crate::deck::Deck;
use crate::errors::GameError;
use crate::evaluator::{HandEvaluator, StandardEvaluator};
use crate::game::Street;
use crate::logger::{ActionRecord, HandRecord, RecordedAction};
use crate::pacing::{NoPacing, Pacer, DEAL_DELAY, SHOWDOWN_DELAY};
use crate::player::{Chips, PlayerAction, PlayerId, Seat};
use crate::pot::{Pot, PotId, PotManager};
use crate::rules::BetLedger;
use crate::showdown::{NoopObserver, Payout, PayoutObserver, Showdown};

/// Pot as exposed in snapshots; eligibility stays internal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PotSummary {
    pub id: PotId,
    pub amount: Chips,
}

/// Immutable view of a hand, see [`Hand::state`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HandState {
    pub street: Option<Street>,
    /// Board in deal order
    pub community_cards: Vec<Card>,
    /// Players still holding cards
    pub hole_cards: BTreeMap<PlayerId, HoleCards>,
    pub pots: Vec<PotSummary>,
    /// Current-round contributions only
    pub bets: BTreeMap<PlayerId, Chips>,
    pub min_raise: Chips,
    /// Players who may act next, in seat order
    pub to_act: Vec<PlayerId>,
}

/// One hand of no-limit Texas Hold'em.
///
/// The hand borrows the caller's seats and moves chips in place. It is driven
/// entirely by [`Hand::start`] and [`Hand::act`]; every street transition,
/// including running the board out when no more betting is possible, happens
/// inside those calls.
///
/// The first seat is the dealer. Heads-up the dealer posts the small blind;
/// with three or more seats the second and third seats post the blinds.
///
/// # Examples
///
/// ```
/// use axiomind_holdem::config::GameConfig;
/// use axiomind_holdem::deck::Deck;
/// use axiomind_holdem::engine::Hand;
/// use axiomind_holdem::player::{PlayerAction, Seat};
///
/// let mut seats = vec![Seat::new("alice", 1_000), Seat::new("bob", 1_000)];
/// {
///     let mut hand = Hand::new(&mut seats, GameConfig::new(5, 10), Deck::from_seed(7)).unwrap();
///     hand.start().unwrap();
///     hand.act("alice", PlayerAction::Fold).unwrap();
///     assert!(hand.is_complete());
/// }
/// assert_eq!(seats[0].stack, 995);
/// assert_eq!(seats[1].stack, 1_005);
/// ```
pub struct Hand<'a> {
    seats: &'a mut [Seat],
    config: GameConfig,
    deck: Deck,
    evaluator: Box<dyn HandEvaluator + 'a>,
    pacer: Box<dyn Pacer + 'a>,
    observer: Box<dyn PayoutObserver + 'a>,

    street: Option<Street>,
    complete: bool,
    community: Vec<Card>,
    hole_cards: Vec<Option<HoleCards>>,
    folded: Vec<bool>,
    acted: Vec<bool>,
    ledger: BetLedger,
    pots: PotManager,
    queue: Vec<usize>,

    starting_seats: Vec<Seat>,
    total_chips: Chips,
    actions: Vec<ActionRecord>,
    payouts: Vec<Payout>,
}

impl<'a> Hand<'a> {
    /// Seats must hold at least two distinct players with chips, and few
    /// enough that everyone's hole cards plus a full board fit in `deck`.
    pub fn new(seats: &'a mut [Seat], config: GameConfig, deck: Deck) -> Result<Self, GameError> {
        config.validate()?;
        if seats.len() < 2 {
            return Err(GameError::TooFewSeats { seats: seats.len() });
        }
        if seats.len() * 2 + 5 > deck.remaining() {
            return Err(GameError::TooManySeats { seats: seats.len() });
        }
        let mut seen = HashSet::new();
        for seat in seats.iter() {
            if !seen.insert(&seat.player_id) {
                return Err(GameError::DuplicatePlayer(seat.player_id.clone()));
            }
            if seat.stack == 0 {
                return Err(GameError::EmptyStack(seat.player_id.clone()));
            }
        }

        let n = seats.len();
        let starting_seats = seats.to_vec();
        let total_chips = seats.iter().map(|s| s.stack).sum();
        Ok(Self {
            seats,
            config,
            deck,
            evaluator: Box::new(StandardEvaluator),
            pacer: Box::new(NoPacing),
            observer: Box::new(NoopObserver),
            street: None,
            complete: false,
            community: Vec::with_capacity(5),
            hole_cards: vec![None; n],
            folded: vec![false; n],
            acted: vec![false; n],
            ledger: BetLedger::new(),
            pots: PotManager::new(),
            queue: Vec::new(),
            starting_seats,
            total_chips,
            actions: Vec::new(),
            payouts: Vec::new(),
        })
    }

    pub fn with_evaluator(mut self, evaluator: impl HandEvaluator + 'a) -> Self {
        self.evaluator = Box::new(evaluator);
        self
    }

    pub fn with_pacer(mut self, pacer: impl Pacer + 'a) -> Self {
        self.pacer = Box::new(pacer);
        self
    }

    pub fn with_observer(mut self, observer: impl PayoutObserver + 'a) -> Self {
        self.observer = Box::new(observer);
        self
    }

    /// Posts blinds and antes, deals hole cards and opens preflop betting.
    pub fn start(&mut self) -> Result<(), GameError> {
        if self.street.is_some() {
            return Err(GameError::HandAlreadyStarted);
        }
        tracing::info!(
            seats = self.seats.len(),
            small_blind = self.config.small_blind,
            big_blind = self.config.big_blind,
            "hand started"
        );
        self.run_from(Street::Preflop)
    }

    /// Applies `action` for `player_id`, advancing streets when the betting
    /// round closes.
    ///
    /// Fails with [`GameError::IllegalTurn`] if the player is not in the
    /// action queue and [`GameError::InvalidBet`] if the amount is not legal;
    /// neither changes any state.
    pub fn act(&mut self, player_id: &str, action: PlayerAction) -> Result<(), GameError> {
        let street = match self.street {
            None => return Err(GameError::NoHandInProgress),
            Some(_) if self.complete => return Err(GameError::HandAlreadyComplete),
            Some(street) => street,
        };
        let seat = self
            .seat_index(player_id)
            .filter(|seat| self.queue.contains(seat))
            .ok_or_else(|| GameError::IllegalTurn {
                player: PlayerId::from(player_id),
            })?;

        let recorded = match action {
            PlayerAction::Fold => {
                self.hole_cards[seat] = None;
                self.folded[seat] = true;
                self.pots.remove_player(seat);
                RecordedAction::Fold
            }
            PlayerAction::Bet(amount) => {
                self.ledger.place_bet(self.seats, seat, amount)?;
                RecordedAction::Bet(amount)
            }
        };
        tracing::debug!(
            player = player_id,
            street = %street,
            action = ?recorded,
            "action accepted"
        );
        self.log_action(seat, street, recorded);
        self.acted[seat] = true;

        self.rebuild_queue();
        if self.queue.is_empty() {
            if let Some(next) = street.next() {
                return self.run_from(next);
            }
        }
        Ok(())
    }

    /// Whether `player_id` may put `amount` more chips in right now.
    pub fn is_valid_bet(&self, player_id: &str, amount: Chips) -> bool {
        self.seat_index(player_id)
            .is_some_and(|seat| self.ledger.is_valid_bet(&*self.seats, seat, amount))
    }

    pub fn get_seat_by_player_id(&self, player_id: &str) -> Option<&Seat> {
        self.seat_index(player_id).map(|seat| &self.seats[seat])
    }

    pub fn state(&self) -> HandState {
        let id = |seat: usize| self.seats[seat].player_id.clone();
        HandState {
            street: self.street,
            community_cards: self.community.clone(),
            hole_cards: self
                .hole_cards
                .iter()
                .enumerate()
                .filter_map(|(seat, cards)| cards.map(|c| (id(seat), c)))
                .collect(),
            pots: self
                .pots
                .pots()
                .iter()
                .map(|p| PotSummary {
                    id: p.id,
                    amount: p.amount,
                })
                .collect(),
            bets: self
                .ledger
                .bets()
                .iter()
                .map(|(&seat, &amount)| (id(seat), amount))
                .collect(),
            min_raise: self.ledger.min_raise(),
            to_act: self.queue.iter().map(|&seat| id(seat)).collect(),
        }
    }

    pub fn street(&self) -> Option<Street> {
        self.street
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub fn seats(&self) -> &[Seat] {
        &*self.seats
    }

    /// Open pots with their eligible seat indices.
    pub fn pots(&self) -> &[Pot] {
        self.pots.pots()
    }

    pub fn payouts(&self) -> &[Payout] {
        &self.payouts
    }

    /// Chips on the table right now: stacks, open bets and pots. Always equal
    /// to the sum of starting stacks.
    pub fn total_chips(&self) -> Chips {
        self.seats.iter().map(|s| s.stack).sum::<Chips>() + self.ledger.total() + self.pots.total()
    }

    pub fn chips_at_start(&self) -> Chips {
        self.total_chips
    }

    /// History of the hand so far, suitable for [`crate::logger::HandLogger`].
    pub fn record(&self, hand_id: impl Into<String>) -> HandRecord {
        HandRecord {
            hand_id: hand_id.into(),
            config: self.config.clone(),
            seats: self.starting_seats.clone(),
            actions: self.actions.clone(),
            board: self.community.clone(),
            payouts: self.payouts.clone(),
            ts: None,
            meta: None,
        }
    }

    fn seat_index(&self, player_id: &str) -> Option<usize> {
        self.seats
            .iter()
            .position(|s| s.player_id.as_str() == player_id)
    }

    /// Enters `first` and keeps stepping through streets until a betting
    /// round needs a decision or the hand is over.
    fn run_from(&mut self, first: Street) -> Result<(), GameError> {
        let mut street = first;
        loop {
            self.enter(street)?;
            if street == Street::Showdown {
                return self.showdown();
            }
            if !self.queue.is_empty() {
                return Ok(());
            }
            tracing::debug!(street = %street, "no decisions pending, advancing");
            let Some(next) = street.next() else {
                return Ok(());
            };
            street = next;
        }
    }

    fn enter(&mut self, street: Street) -> Result<(), GameError> {
        self.street = Some(street);
        if street != Street::Preflop {
            self.absorb_bets();
        }
        self.acted.fill(false);
        self.ledger.set_min_raise(0);
        self.queue.clear();

        match street {
            Street::Preflop => self.deal_preflop()?,
            Street::Flop | Street::Turn | Street::River => {
                let cards = self.deck.deal(street.cards_dealt())?;
                self.community.extend(cards);
            }
            Street::Showdown => {}
        }
        tracing::info!(
            street = %street,
            board = ?self.community.iter().map(Card::to_string).collect::<Vec<_>>(),
            pots = self.pots.total(),
            "street entered"
        );

        if street.is_betting_round() {
            self.rebuild_queue();
        }
        Ok(())
    }

    fn deal_preflop(&mut self) -> Result<(), GameError> {
        let (sb, bb) = if self.seats.len() == 2 { (0, 1) } else { (1, 2) };
        self.post(sb, self.config.small_blind, RecordedAction::SmallBlind)?;
        self.post(bb, self.config.big_blind, RecordedAction::BigBlind)?;

        for seat in 0..self.seats.len() {
            let cards = self.deck.deal(2)?;
            self.hole_cards[seat] = Some([cards[0], cards[1]]);
        }
        self.ledger.set_min_raise(self.config.big_blind);

        if self.config.antes > 0 {
            for seat in (0..self.seats.len()).filter(|&s| s != sb && s != bb) {
                self.post(seat, self.config.antes, RecordedAction::Ante)?;
            }
        }
        self.pacer.pause(DEAL_DELAY);
        Ok(())
    }

    /// Forced post, capped at the poster's stack.
    fn post(
        &mut self,
        seat: usize,
        amount: Chips,
        kind: fn(Chips) -> RecordedAction,
    ) -> Result<(), GameError> {
        let amount = amount.min(self.seats[seat].stack);
        self.ledger.record_bet(self.seats, seat, amount)?;
        let recorded = kind(amount);
        tracing::debug!(player = %self.seats[seat].player_id, action = ?recorded, "forced post");
        self.log_action(seat, Street::Preflop, recorded);
        Ok(())
    }

    fn absorb_bets(&mut self) {
        let bets = self.ledger.take_bets();
        if bets.is_empty() {
            return;
        }
        let hole_cards = &self.hole_cards;
        self.pots.absorb(bets, |seat| hole_cards[seat].is_some());
        tracing::info!(pots = self.pots.pots().len(), total = self.pots.total(), "bets collected");
    }

    /// Unfolded players with chips who still owe a decision: anyone who has
    /// not acted this round, or whose bet trails the current bet. When fewer
    /// than two such players have chips, only those facing a bet remain.
    /// Once a single player holds cards nobody is left to act.
    fn rebuild_queue(&mut self) {
        if self.folded.iter().filter(|&&folded| !folded).count() < 2 {
            self.queue.clear();
            return;
        }
        let max_bet = self.ledger.max_bet();
        let live: Vec<usize> = (0..self.seats.len())
            .filter(|&seat| !self.folded[seat] && self.seats[seat].stack > 0)
            .collect();
        let contested = live.len() >= 2;
        self.queue = live
            .into_iter()
            .filter(|&seat| {
                let owes = self.ledger.bet_of(seat) < max_bet;
                owes || (contested && !self.acted[seat])
            })
            .collect();
    }

    fn showdown(&mut self) -> Result<(), GameError> {
        self.pacer.pause(SHOWDOWN_DELAY);
        Showdown {
            seats: &mut *self.seats,
            hole_cards: &self.hole_cards,
            board: &self.community,
            evaluator: &*self.evaluator,
            pacer: &mut *self.pacer,
            observer: &mut *self.observer,
        }
        .settle(&mut self.pots, &mut self.payouts)?;
        self.pacer.pause(SHOWDOWN_DELAY);
        self.complete = true;
        tracing::info!(payouts = self.payouts.len(), "hand complete");
        Ok(())
    }

    fn log_action(&mut self, seat: usize, street: Street, action: RecordedAction) {
        self.actions.push(ActionRecord {
            player_id: self.seats[seat].player_id.clone(),
            street,
            action,
        });
    }
}
