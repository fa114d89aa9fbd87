//! Effect definitions.
//!
//! An effect is one atomic thing a card does: deal damage, add defend,
//! heal, or change mana. The set is closed; every kind maps to exactly one
//! `Combatant` primitive.

use serde::{Deserialize, Serialize};

use super::targeting::Target;

/// What an effect does and by how much.
///
/// Amounts are signed so mana effects can drain. Damage, defend and heal
/// treat negative amounts as zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectKind {
    /// Damage absorbed by defend first, remainder to hp.
    Damage(i64),
    /// Add to the defend buffer.
    Defend(i64),
    /// Restore hp up to max.
    Heal(i64),
    /// Change current mana within `[0, max_mana]`.
    AddMana(i64),
    /// Change max mana, never below zero.
    AddMaxMana(i64),
}

impl EffectKind {
    /// Requested amount.
    #[must_use]
    pub const fn amount(self) -> i64 {
        match self {
            EffectKind::Damage(a)
            | EffectKind::Defend(a)
            | EffectKind::Heal(a)
            | EffectKind::AddMana(a)
            | EffectKind::AddMaxMana(a) => a,
        }
    }

    /// Target used when a card does not say otherwise.
    #[must_use]
    pub const fn default_target(self) -> Target {
        match self {
            EffectKind::Damage(_) => Target::Opponent,
            _ => Target::Caster,
        }
    }
}

/// An effect plus who it applies to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Effect {
    pub kind: EffectKind,
    pub target: Target,
}

impl Effect {
    /// Create an effect with its kind's default target.
    #[must_use]
    pub const fn new(kind: EffectKind) -> Self {
        Self {
            kind,
            target: kind.default_target(),
        }
    }

    /// Create a damage effect aimed at the opponent.
    #[must_use]
    pub const fn damage(amount: i64) -> Self {
        Self::new(EffectKind::Damage(amount))
    }

    /// Create a defend effect on the caster.
    #[must_use]
    pub const fn defend(amount: i64) -> Self {
        Self::new(EffectKind::Defend(amount))
    }

    /// Create a heal effect on the caster.
    #[must_use]
    pub const fn heal(amount: i64) -> Self {
        Self::new(EffectKind::Heal(amount))
    }

    /// Create a mana change on the caster.
    #[must_use]
    pub const fn add_mana(amount: i64) -> Self {
        Self::new(EffectKind::AddMana(amount))
    }

    /// Create a max mana change on the caster.
    #[must_use]
    pub const fn add_max_mana(amount: i64) -> Self {
        Self::new(EffectKind::AddMaxMana(amount))
    }

    /// Retarget at the opponent.
    #[must_use]
    pub const fn on_opponent(mut self) -> Self {
        self.target = Target::Opponent;
        self
    }

    /// Retarget at the caster.
    #[must_use]
    pub const fn on_caster(mut self) -> Self {
        self.target = Target::Caster;
        self
    }

    /// Whether this effect deals damage.
    #[must_use]
    pub fn is_damage(&self) -> bool {
        matches!(self.kind, EffectKind::Damage(_))
    }
}
