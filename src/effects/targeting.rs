//! Effect targeting.
//!
//! Cards name their targets relative to whoever plays them. The same card
//! in the enemy's deck hits the player, and vice versa.

use serde::{Deserialize, Serialize};

use crate::core::Side;

/// Who an effect applies to, relative to the caster.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Target {
    /// The combatant playing the card.
    #[serde(rename = "self")]
    Caster,
    /// The other combatant.
    #[serde(rename = "opponent")]
    Opponent,
}

impl Target {
    /// Resolve to an absolute side for a given caster.
    ///
    /// ```
    /// use cardclash::core::Side;
    /// use cardclash::effects::Target;
    ///
    /// assert_eq!(Target::Opponent.resolve(Side::Enemy), Side::Player);
    /// assert_eq!(Target::Caster.resolve(Side::Enemy), Side::Enemy);
    /// ```
    #[must_use]
    pub const fn resolve(self, caster: Side) -> Side {
        match self {
            Target::Caster => caster,
            Target::Opponent => caster.opponent(),
        }
    }
}
