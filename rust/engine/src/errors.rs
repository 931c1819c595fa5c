use thiserror::Error;

use crate::player::{Chips, PlayerId};

/// Failure reported by a [`crate::evaluator::HandEvaluator`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EvaluationError {
    #[error("Not enough cards to evaluate: {count}")]
    NotEnoughCards { count: usize },
    #[error("No hands submitted for evaluation")]
    NoHands,
    #[error("Evaluation service failed: {0}")]
    Service(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Player {player} is not allowed to act now")]
    IllegalTurn { player: PlayerId },
    #[error("Invalid bet amount: {amount} from player {player}")]
    InvalidBet { player: PlayerId, amount: Chips },
    #[error("No hand in progress")]
    NoHandInProgress,
    #[error("Hand already started")]
    HandAlreadyStarted,
    #[error("Hand already complete")]
    HandAlreadyComplete,
    #[error("Invalid card code: {0:?}")]
    InvalidCard(String),

    #[error("At least 2 seats required, got {seats}")]
    TooFewSeats { seats: usize },
    #[error("Deck cannot serve {seats} seats")]
    TooManySeats { seats: usize },
    #[error("Player {0} is seated twice")]
    DuplicatePlayer(PlayerId),
    #[error("Player {0} has an empty stack")]
    EmptyStack(PlayerId),
    #[error("Insufficient chips for player {player}: needs {amount}, has {stack}")]
    InsufficientChips {
        player: PlayerId,
        amount: Chips,
        stack: Chips,
    },
    #[error("Deck exhausted: requested {requested}, remaining {remaining}")]
    DeckExhausted { requested: usize, remaining: usize },
    #[error("Invalid game config: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Evaluation(#[from] EvaluationError),
    #[error("Evaluator returned unknown hand index {index} ({submitted} submitted)")]
    InvalidEvaluation { index: usize, submitted: usize },
}

impl GameError {
    /// True for invariant violations: the caller broke a precondition and
    /// the hand cannot continue meaningfully.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            GameError::TooFewSeats { .. }
                | GameError::TooManySeats { .. }
                | GameError::DuplicatePlayer(_)
                | GameError::EmptyStack(_)
                | GameError::InsufficientChips { .. }
                | GameError::DeckExhausted { .. }
                | GameError::InvalidConfig(_)
        )
    }
}
