//! Battle replay records.
//!
//! A battle is fully determined by its configuration and the intents the
//! driver issued, so a `BattleRecord` stores only those. Replaying applies
//! the intents to a fresh battle and reproduces every shuffle, enemy choice
//! and log line.
//!
//! Records are a replay log for finished or ongoing battles, not a save
//! format: they cannot resume without re-running every intent.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::battle::Battle;
use crate::cards::CardCatalog;
use crate::core::{BattleConfig, BattleError, CombatantConfig, Intent, Side};

/// Everything needed to rebuild a battle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleRecord {
    pub config: BattleConfig,
    pub player: CombatantConfig,
    pub enemy: CombatantConfig,
    /// Accepted intents in order.
    pub intents: Vec<Intent>,
}

impl BattleRecord {
    /// Rebuild the battle and re-apply every intent.
    ///
    /// Fails if the decks do not match the catalog or an intent is rejected,
    /// which means the record came from a different catalog or was edited.
    pub fn replay(&self, catalog: Arc<CardCatalog>) -> Result<Battle, BattleError> {
        let mut battle = Battle::new(
            catalog,
            self.config.clone(),
            self.player.clone(),
            self.enemy.clone(),
        )?;

        for (i, intent) in self.intents.iter().enumerate() {
            battle.apply(*intent).map_err(|err| {
                BattleError::Replay(format!("intent {} ({}) was rejected: {}", i, intent, err))
            })?;
        }

        debug!(intents = self.intents.len(), "battle replayed");
        Ok(battle)
    }

    /// Encode with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>, BattleError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode from bincode.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, BattleError> {
        Ok(bincode::deserialize(bytes)?)
    }
}

impl Battle {
    /// Capture this battle's setup and accepted intents.
    #[must_use]
    pub fn record(&self) -> BattleRecord {
        BattleRecord {
            config: self.config().clone(),
            player: self.setup(Side::Player).clone(),
            enemy: self.setup(Side::Enemy).clone(),
            intents: self.history().iter().map(|r| r.intent).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::battle::BattleBuilder;
    use crate::cards::starter;

    #[test]
    fn test_record_captures_intents() {
        let mut battle = BattleBuilder::new().seed(4).build().unwrap();
        battle.start_battle().unwrap();
        battle.end_player_turn().unwrap();

        let record = battle.record();
        assert_eq!(record.intents, vec![Intent::StartBattle, Intent::EndPlayerTurn]);
        assert_eq!(record.config.seed, 4);
        assert_eq!(record.player.name, "Knight");
    }

    #[test]
    fn test_replay_rejects_bad_intents() {
        let record = BattleRecord {
            config: BattleConfig::new(1),
            player: starter::knight(),
            enemy: starter::automaton(),
            intents: vec![Intent::EndPlayerTurn],
        };

        let err = record.replay(Arc::new(starter::catalog())).unwrap_err();
        assert_eq!(err.status(), "replay_error");
    }

    #[test]
    fn test_garbage_bytes_fail() {
        let err = BattleRecord::from_bytes(&[0xff, 0x01]).unwrap_err();
        assert!(matches!(err, BattleError::Replay(_)));
    }
}
