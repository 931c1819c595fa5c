use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::GameError;
use crate::player::Chips;

/// Stakes for a single hand. Immutable once the hand is created.
///
/// ```
/// use axiomind_holdem::config::GameConfig;
///
/// let cfg = GameConfig::from_toml_str("small_blind = 5\nbig_blind = 10\n").unwrap();
/// assert_eq!(cfg.big_blind, 10);
/// assert_eq!(cfg.antes, 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub small_blind: Chips,
    pub big_blind: Chips,
    #[serde(default)]
    pub antes: Chips,
    /// Per-decision time budget for an external turn clock. Not enforced here.
    #[serde(default = "default_time_limit_ms")]
    pub time_limit_ms: u64,
}

fn default_time_limit_ms() -> u64 {
    30_000
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            small_blind: 50,
            big_blind: 100,
            antes: 0,
            time_limit_ms: default_time_limit_ms(),
        }
    }
}

impl GameConfig {
    pub fn new(small_blind: Chips, big_blind: Chips) -> Self {
        Self {
            small_blind,
            big_blind,
            ..Self::default()
        }
    }

    pub fn with_antes(mut self, antes: Chips) -> Self {
        self.antes = antes;
        self
    }

    pub fn validate(&self) -> Result<(), GameError> {
        if self.big_blind == 0 {
            return Err(GameError::InvalidConfig("big_blind must be positive".into()));
        }
        if self.small_blind > self.big_blind {
            return Err(GameError::InvalidConfig(format!(
                "small_blind {} exceeds big_blind {}",
                self.small_blind, self.big_blind
            )));
        }
        Ok(())
    }

    pub fn from_toml_str(s: &str) -> Result<Self, GameError> {
        let cfg: GameConfig =
            toml::from_str(s).map_err(|e| GameError::InvalidConfig(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, GameError> {
        let s = fs::read_to_string(path.as_ref()).map_err(|e| {
            GameError::InvalidConfig(format!("{}: {}", path.as_ref().display(), e))
        })?;
        Self::from_toml_str(&s)
    }
}
