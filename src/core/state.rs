//! Battle progression and observable state.
//!
//! ## Phase
//!
//! `NotStarted -> PlayerTurn -> (EnemyTurn <-> PlayerTurn) -> Over`
//!
//! ## ActionLog
//!
//! Fixed-capacity FIFO of human-readable lines, oldest evicted first.
//!
//! ## BattleSnapshot
//!
//! Everything a presentation layer needs to draw the battle, as plain data.
//! Uses `im::Vector` for the log so snapshots clone in O(1).

use im::Vector;
use serde::{Deserialize, Serialize};

use super::combatant::CombatantView;
use super::side::{Side, Sides};

/// Where the battle is in its turn cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    NotStarted,
    PlayerTurn,
    EnemyTurn,
    Over,
}

impl Phase {
    /// Side allowed to play cards in this phase, if any.
    #[must_use]
    pub const fn acting_side(self) -> Option<Side> {
        match self {
            Phase::PlayerTurn => Some(Side::Player),
            Phase::EnemyTurn => Some(Side::Enemy),
            Phase::NotStarted | Phase::Over => None,
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::NotStarted => "not_started",
            Phase::PlayerTurn => "player_turn",
            Phase::EnemyTurn => "enemy_turn",
            Phase::Over => "over",
        };
        f.write_str(name)
    }
}

/// How a finished battle ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleResult {
    /// Side left standing.
    pub winner: Side,
    /// Turn on which the battle ended.
    pub turn: u32,
}

impl BattleResult {
    /// Side that was defeated.
    #[must_use]
    pub fn loser(&self) -> Side {
        self.winner.opponent()
    }
}

/// Bounded log of human-readable battle lines.
///
/// ```
/// use cardclash::core::ActionLog;
///
/// let mut log = ActionLog::new(2);
/// log.push("a");
/// log.push("b");
/// log.push("c");
/// assert_eq!(log.iter().collect::<Vec<_>>(), vec!["b", "c"]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionLog {
    capacity: usize,
    lines: Vector<String>,
}

impl ActionLog {
    /// Create an empty log holding at most `capacity` lines.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            lines: Vector::new(),
        }
    }

    /// Append a line, evicting the oldest lines beyond capacity.
    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push_back(line.into());
        while self.lines.len() > self.capacity {
            self.lines.pop_front();
        }
    }

    /// Lines from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    /// Most recent line.
    #[must_use]
    pub fn last(&self) -> Option<&str> {
        self.lines.last().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The log lines as a cheaply cloned vector.
    #[must_use]
    pub fn lines(&self) -> Vector<String> {
        self.lines.clone()
    }
}

/// Read-only picture of a battle for presentation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleSnapshot {
    pub phase: Phase,
    pub turn: u32,
    pub combatants: Sides<CombatantView>,
    pub log: Vector<String>,
    pub result: Option<BattleResult>,
}

impl BattleSnapshot {
    /// Whether the battle is still in progress.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.phase != Phase::Over
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acting_side() {
        assert_eq!(Phase::PlayerTurn.acting_side(), Some(Side::Player));
        assert_eq!(Phase::EnemyTurn.acting_side(), Some(Side::Enemy));
        assert_eq!(Phase::Over.acting_side(), None);
        assert_eq!(Phase::NotStarted.acting_side(), None);
    }

    #[test]
    fn test_log_evicts_oldest() {
        let mut log = ActionLog::new(3);
        for i in 0..5 {
            log.push(format!("line {}", i));
        }

        assert_eq!(log.len(), 3);
        assert_eq!(log.iter().next(), Some("line 2"));
        assert_eq!(log.last(), Some("line 4"));
    }

    #[test]
    fn test_zero_capacity_log() {
        let mut log = ActionLog::new(0);
        log.push("dropped");
        assert!(log.is_empty());
    }

    #[test]
    fn test_result_loser() {
        let result = BattleResult { winner: Side::Player, turn: 3 };
        assert_eq!(result.loser(), Side::Enemy);
    }
}
