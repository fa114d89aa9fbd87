//! Driver intents and their history records.
//!
//! An `Intent` is the complete input surface of a battle: the driver can
//! only start the battle, play a hand card, end its turn, or let the enemy
//! act. Accepted intents are recorded so a battle can be replayed exactly.

use serde::{Deserialize, Serialize};

/// A request from the driver to the battle engine.
///
/// ```
/// use cardclash::core::Intent;
///
/// let intent = Intent::PlayCard(2);
/// assert_eq!(intent.name(), "play_card");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Intent {
    /// Shuffle in and begin the first player turn.
    StartBattle,
    /// Play the player's hand card at this index.
    PlayCard(usize),
    /// Discard the player's hand and pass to the enemy.
    EndPlayerTurn,
    /// Run the enemy's whole turn.
    ExecuteEnemyTurn,
}

impl Intent {
    /// Stable name used in logs and errors.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Intent::StartBattle => "start_battle",
            Intent::PlayCard(_) => "play_card",
            Intent::EndPlayerTurn => "end_player_turn",
            Intent::ExecuteEnemyTurn => "execute_enemy_turn",
        }
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Intent::PlayCard(index) => write!(f, "play_card({})", index),
            other => f.write_str(other.name()),
        }
    }
}

/// An accepted intent with its position in the battle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntentRecord {
    /// The intent accepted.
    pub intent: Intent,

    /// Turn number when it was accepted.
    pub turn: u32,

    /// Position among all accepted intents (starting at 0).
    pub sequence: u32,
}
