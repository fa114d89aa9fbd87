//! Built-in starter card set.
//!
//! A small catalog and two decks so drivers, tests and benchmarks can run a
//! battle without an external card loader.

use super::definition::{Card, CardId};
use super::registry::CardCatalog;
use crate::core::CombatantConfig;
use crate::effects::Effect;

pub const STRIKE: CardId = CardId::new(1);
pub const DEFEND: CardId = CardId::new(2);
pub const BASH: CardId = CardId::new(3);
pub const HEAL: CardId = CardId::new(4);
pub const FOCUS: CardId = CardId::new(5);
pub const MEDITATE: CardId = CardId::new(6);
pub const FIREBALL: CardId = CardId::new(7);
pub const DRAIN: CardId = CardId::new(8);

/// Every starter card definition.
#[must_use]
pub fn cards() -> Vec<Card> {
    vec![
        Card::new(STRIKE, "Strike", 1)
            .with_description("Deal 6 damage.")
            .with_effect(Effect::damage(6)),
        Card::new(DEFEND, "Defend", 1)
            .with_description("Gain 5 block.")
            .with_effect(Effect::defend(5)),
        Card::new(BASH, "Bash", 2)
            .with_description("Deal 8 damage. Gain 3 block.")
            .with_effects([Effect::damage(8), Effect::defend(3)]),
        Card::new(HEAL, "Heal", 1)
            .with_description("Restore 5 HP.")
            .with_effect(Effect::heal(5)),
        Card::new(FOCUS, "Focus", 0)
            .with_description("Gain 1 mana.")
            .with_effect(Effect::add_mana(1)),
        Card::new(MEDITATE, "Meditate", 1)
            .with_description("Gain 1 max mana.")
            .with_effect(Effect::add_max_mana(1)),
        Card::new(FIREBALL, "Fireball", 3)
            .with_description("Deal 14 damage.")
            .with_effect(Effect::damage(14)),
        Card::new(DRAIN, "Drain", 2)
            .with_description("Deal 4 damage. Restore 4 HP. Opponent loses 1 mana.")
            .with_effects([
                Effect::damage(4),
                Effect::heal(4),
                Effect::add_mana(-1).on_opponent(),
            ]),
    ]
}

/// Catalog holding every starter card.
#[must_use]
pub fn catalog() -> CardCatalog {
    CardCatalog::from_cards(cards()).expect("starter card ids are distinct")
}

/// Starter player: 40 hp, 3 mana, a 12-card mixed deck.
#[must_use]
pub fn knight() -> CombatantConfig {
    CombatantConfig::new("Knight", 40, 3)
        .with_cards(STRIKE, 4)
        .with_cards(DEFEND, 4)
        .with_cards(BASH, 2)
        .with_cards(HEAL, 1)
        .with_cards(FOCUS, 1)
}

/// Starter enemy: 30 hp, 3 mana, a 10-card aggressive deck.
#[must_use]
pub fn automaton() -> CombatantConfig {
    CombatantConfig::new("Automaton", 30, 3)
        .with_cards(STRIKE, 5)
        .with_cards(DEFEND, 2)
        .with_cards(FIREBALL, 1)
        .with_cards(DRAIN, 2)
}
