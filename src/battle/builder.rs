//! Ergonomic battle construction.

use std::sync::Arc;

use super::engine::Battle;
use crate::cards::{starter, CardCatalog};
use crate::core::{BattleConfig, BattleError, CombatantConfig};
use crate::policy::{EnemyPolicy, PolicyKind};

/// Builder for a `Battle`.
///
/// Defaults to the starter catalog with the Knight against the Automaton.
///
/// ```
/// use cardclash::battle::BattleBuilder;
///
/// let mut battle = BattleBuilder::new().seed(7).draw_per_turn(4).build().unwrap();
/// battle.start_battle().unwrap();
/// assert_eq!(battle.player().hand().len(), 4);
/// ```
#[derive(Debug)]
pub struct BattleBuilder {
    catalog: Option<Arc<CardCatalog>>,
    config: BattleConfig,
    player: CombatantConfig,
    enemy: CombatantConfig,
    policy: Option<Box<dyn EnemyPolicy>>,
}

impl Default for BattleBuilder {
    fn default() -> Self {
        Self {
            catalog: None,
            config: BattleConfig::default(),
            player: starter::knight(),
            enemy: starter::automaton(),
            policy: None,
        }
    }
}

impl BattleBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn catalog(mut self, catalog: Arc<CardCatalog>) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Replace every engine setting at once.
    pub fn config(mut self, config: BattleConfig) -> Self {
        self.config = config;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    pub fn draw_per_turn(mut self, count: usize) -> Self {
        self.config.draw_per_turn = count;
        self
    }

    pub fn log_capacity(mut self, capacity: usize) -> Self {
        self.config.action_log_capacity = capacity;
        self
    }

    pub fn enemy_policy(mut self, kind: PolicyKind) -> Self {
        self.config.enemy_policy = kind;
        self
    }

    /// Use a policy that `PolicyKind` cannot describe.
    pub fn custom_policy(mut self, policy: Box<dyn EnemyPolicy>) -> Self {
        self.policy = Some(policy);
        self
    }

    pub fn player(mut self, config: CombatantConfig) -> Self {
        self.player = config;
        self
    }

    pub fn enemy(mut self, config: CombatantConfig) -> Self {
        self.enemy = config;
        self
    }

    /// Build the battle. It still needs `start_battle`.
    pub fn build(self) -> Result<Battle, BattleError> {
        let catalog = self
            .catalog
            .unwrap_or_else(|| Arc::new(starter::catalog()));
        let battle = Battle::new(catalog, self.config, self.player, self.enemy)?;

        Ok(match self.policy {
            Some(policy) => battle.with_policy(policy),
            None => battle,
        })
    }
}
