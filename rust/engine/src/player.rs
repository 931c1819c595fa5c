use std::fmt;

use serde::{Deserialize, Serialize};

/// Chip amounts. Unsigned, so a negative bet cannot be expressed.
pub type Chips = u64;

/// Identifier assigned to a participant by the table layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(String);

impl PlayerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PlayerId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for PlayerId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// One participant at the table.
///
/// Seats are owned by the caller; a hand borrows them for its lifetime and
/// mutates `stack` in place, so betting and payouts are visible once the
/// borrow ends (or through [`crate::engine::Hand::seats`] meanwhile).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seat {
    pub player_id: PlayerId,
    pub stack: Chips,
}

impl Seat {
    pub fn new(player_id: impl Into<PlayerId>, stack: Chips) -> Self {
        Self {
            player_id: player_id.into(),
            stack,
        }
    }

    pub fn is_all_in(&self) -> bool {
        self.stack == 0
    }
}

/// A decision submitted by the player whose turn it is.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerAction {
    /// Fold and forfeit the hand
    Fold,
    /// Put `amount` additional chips in (not the new total); zero is a check
    Bet(Chips),
}
