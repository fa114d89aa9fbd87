//! Card definitions - immutable card data.
//!
//! A `Card` is the shared, read-only description of a card: its cost and
//! the ordered effects it applies when played. Combatant piles hold only
//! `CardId`s; the catalog resolves them back to definitions.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::effects::Effect;

/// Identifier for a card definition.
///
/// Two copies of "Strike" in a deck share the same `CardId`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Static card definition.
///
/// Effects apply left to right; order is part of the card's meaning.
///
/// ## Example
///
/// ```
/// use cardclash::cards::{Card, CardId};
/// use cardclash::effects::Effect;
///
/// let strike = Card::new(CardId::new(1), "Strike", 1)
///     .with_description("Deal 6 damage.")
///     .with_effect(Effect::damage(6));
///
/// assert_eq!(strike.cost, 1);
/// assert_eq!(strike.effects.len(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Unique identifier for this definition.
    pub id: CardId,

    /// Display name.
    pub name: String,

    /// Rules text for display.
    #[serde(default)]
    pub description: String,

    /// Mana cost.
    pub cost: u32,

    /// Ordered effect list.
    pub effects: SmallVec<[Effect; 2]>,
}

impl Card {
    /// Create a card with no effects.
    #[must_use]
    pub fn new(id: CardId, name: impl Into<String>, cost: u32) -> Self {
        Self {
            id,
            name: name.into(),
            description: String::new(),
            cost,
            effects: SmallVec::new(),
        }
    }

    /// Set the description (builder pattern).
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Append an effect (builder pattern).
    #[must_use]
    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }

    /// Append several effects in order.
    #[must_use]
    pub fn with_effects(mut self, effects: impl IntoIterator<Item = Effect>) -> Self {
        self.effects.extend(effects);
        self
    }

    /// Mana cost as a signed resource amount.
    #[must_use]
    pub fn cost_amount(&self) -> i64 {
        i64::from(self.cost)
    }

    /// Check whether any effect deals damage.
    #[must_use]
    pub fn deals_damage(&self) -> bool {
        self.effects.iter().any(Effect::is_damage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::{EffectKind, Target};

    #[test]
    fn test_card_id() {
        let id = CardId::new(42);
        assert_eq!(id.raw(), 42);
        assert_eq!(format!("{}", id), "Card(42)");
    }

    #[test]
    fn test_card_builder_keeps_effect_order() {
        let card = Card::new(CardId::new(1), "Bash", 2)
            .with_description("Deal 8 damage. Gain 3 block.")
            .with_effects([Effect::damage(8), Effect::defend(3)]);

        assert_eq!(card.name, "Bash");
        assert_eq!(card.cost_amount(), 2);
        assert_eq!(card.effects[0].kind, EffectKind::Damage(8));
        assert_eq!(card.effects[0].target, Target::Opponent);
        assert_eq!(card.effects[1].kind, EffectKind::Defend(3));
        assert_eq!(card.effects[1].target, Target::Caster);
        assert!(card.deals_damage());
    }

    #[test]
    fn test_card_serialization() {
        let card = Card::new(CardId::new(3), "Heal", 1).with_effect(Effect::heal(4));

        let json = serde_json::to_string(&card).unwrap();
        let deserialized: Card = serde_json::from_str(&json).unwrap();

        assert_eq!(card, deserialized);
    }
}
