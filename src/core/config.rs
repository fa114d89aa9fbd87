//! Battle configuration types.
//!
//! Drivers configure a battle at construction by providing:
//! - `CombatantConfig`: Name, starting stats and deck list per side
//! - `BattleConfig`: Seed, draw size, log capacity and enemy policy
//!
//! `PresentationSettings` is separate plain data for whatever renders the
//! battle. The engine never reads it.

use serde::{Deserialize, Serialize};

use crate::cards::CardId;
use crate::policy::PolicyKind;

/// Cards drawn at the start of each turn unless configured otherwise.
pub const DEFAULT_DRAW_PER_TURN: usize = 5;

/// Lines kept in the action log unless configured otherwise.
pub const DEFAULT_LOG_CAPACITY: usize = 10;

/// Starting state for one combatant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatantConfig {
    /// Display name.
    pub name: String,

    /// Starting and maximum hit points.
    pub max_hp: i64,

    /// Mana refilled at the start of each turn.
    pub max_mana: i64,

    /// Deck list. Duplicates are separate copies.
    #[serde(default)]
    pub deck: Vec<CardId>,
}

impl CombatantConfig {
    /// Create a configuration with an empty deck.
    pub fn new(name: impl Into<String>, max_hp: i64, max_mana: i64) -> Self {
        Self {
            name: name.into(),
            max_hp,
            max_mana,
            deck: Vec::new(),
        }
    }

    /// Replace the deck list.
    #[must_use]
    pub fn with_deck(mut self, deck: Vec<CardId>) -> Self {
        self.deck = deck;
        self
    }

    /// Add `count` copies of a card.
    #[must_use]
    pub fn with_cards(mut self, card: CardId, count: usize) -> Self {
        self.deck.extend(std::iter::repeat(card).take(count));
        self
    }
}

/// Engine-wide settings for one battle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleConfig {
    /// Root seed for every random stream in the battle.
    pub seed: u64,

    /// Cards drawn at the start of each turn.
    #[serde(default = "default_draw_per_turn")]
    pub draw_per_turn: usize,

    /// Maximum lines kept in the action log (oldest evicted first).
    #[serde(default = "default_log_capacity")]
    pub action_log_capacity: usize,

    /// Strategy the enemy uses to pick cards.
    #[serde(default)]
    pub enemy_policy: PolicyKind,
}

fn default_draw_per_turn() -> usize {
    DEFAULT_DRAW_PER_TURN
}

fn default_log_capacity() -> usize {
    DEFAULT_LOG_CAPACITY
}

impl BattleConfig {
    /// Default settings with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            draw_per_turn: DEFAULT_DRAW_PER_TURN,
            action_log_capacity: DEFAULT_LOG_CAPACITY,
            enemy_policy: PolicyKind::default(),
        }
    }

    #[must_use]
    pub fn with_draw_per_turn(mut self, count: usize) -> Self {
        self.draw_per_turn = count;
        self
    }

    #[must_use]
    pub fn with_log_capacity(mut self, capacity: usize) -> Self {
        self.action_log_capacity = capacity;
        self
    }

    #[must_use]
    pub fn with_policy(mut self, policy: PolicyKind) -> Self {
        self.enemy_policy = policy;
        self
    }
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self::new(0)
    }
}

/// Display preferences for a presentation layer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PresentationSettings {
    pub show_enemy_hand: bool,
    pub enable_colors: bool,
    pub enable_menu_animations: bool,
    pub animation_speed_multiplier: f64,
    pub color_theme: String,
}

impl Default for PresentationSettings {
    fn default() -> Self {
        Self {
            show_enemy_hand: true,
            enable_colors: true,
            enable_menu_animations: true,
            animation_speed_multiplier: 1.0,
            color_theme: "default".to_string(),
        }
    }
}
