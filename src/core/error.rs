//! Battle error taxonomy.
//!
//! Rejected intents never change state. The driver gets a `BattleError`
//! back and can match on it or read its stable `status()` code.

use thiserror::Error;

use super::state::Phase;
use crate::cards::CardId;

/// Status code reported for an accepted intent.
pub const STATUS_SUCCESS: &str = "success";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BattleError {
    #[error("card index {index} is out of range for a hand of {hand_len}")]
    InvalidCardIndex { index: usize, hand_len: usize },

    #[error("card costs {cost} mana but only {available} is available")]
    InsufficientMana { cost: i64, available: i64 },

    #[error("{intent} is not allowed during {phase}")]
    IllegalPhase { intent: &'static str, phase: Phase },

    #[error("unknown card {0}")]
    UnknownCard(CardId),

    #[error("card {0} is registered twice")]
    DuplicateCard(CardId),

    #[error("replay record is unusable: {0}")]
    Replay(String),
}

impl BattleError {
    /// Stable status code for drivers.
    #[must_use]
    pub fn status(&self) -> &'static str {
        match self {
            BattleError::InvalidCardIndex { .. } => "invalid_card_index",
            BattleError::InsufficientMana { .. } => "not_enough_mana",
            BattleError::IllegalPhase { .. } => "illegal_phase",
            BattleError::UnknownCard(_) => "unknown_card",
            BattleError::DuplicateCard(_) => "duplicate_card",
            BattleError::Replay(_) => "replay_error",
        }
    }

    /// Whether this is a rejected player intent rather than a setup failure.
    #[must_use]
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            BattleError::InvalidCardIndex { .. }
                | BattleError::InsufficientMana { .. }
                | BattleError::IllegalPhase { .. }
        )
    }
}

impl From<bincode::Error> for BattleError {
    fn from(err: bincode::Error) -> Self {
        BattleError::Replay(err.to_string())
    }
}
