//! Effect resolution - applying a card's effects to combatants.
//!
//! The resolver walks a card's effect list in order, picks the target for
//! each one, calls the matching `Combatant` primitive and records one
//! event per effect. It knows nothing about turns, costs or display.

use super::effect::{Effect, EffectKind};
use super::event::{BattleEvent, EventList, EventOutcome};
use crate::cards::Card;
use crate::core::{Combatant, Side, Sides};

/// The two combatants seen from the caster's side.
pub struct ResolverContext<'a> {
    caster_side: Side,
    caster: &'a mut Combatant,
    opponent: &'a mut Combatant,
}

impl<'a> ResolverContext<'a> {
    /// Create a context from explicit combatants.
    pub fn new(caster_side: Side, caster: &'a mut Combatant, opponent: &'a mut Combatant) -> Self {
        Self {
            caster_side,
            caster,
            opponent,
        }
    }

    /// Create a context from both sides of a battle.
    pub fn from_sides(combatants: &'a mut Sides<Combatant>, caster_side: Side) -> Self {
        let (caster, opponent) = combatants.split_mut(caster_side);
        Self::new(caster_side, caster, opponent)
    }

    /// Side playing the card.
    #[must_use]
    pub fn caster_side(&self) -> Side {
        self.caster_side
    }

    fn target_mut(&mut self, side: Side) -> &mut Combatant {
        if side == self.caster_side {
            &mut *self.caster
        } else {
            &mut *self.opponent
        }
    }
}

/// Applies effects to combatants.
pub struct EffectResolver;

impl EffectResolver {
    /// Resolve every effect on a card, in order.
    pub fn resolve(card: &Card, context: &mut ResolverContext<'_>) -> EventList {
        card.effects
            .iter()
            .map(|effect| Self::resolve_single(card, effect, context))
            .collect()
    }

    /// Resolve one effect.
    pub fn resolve_single(
        card: &Card,
        effect: &Effect,
        context: &mut ResolverContext<'_>,
    ) -> BattleEvent {
        let caster = context.caster_side();
        let target = effect.target.resolve(caster);
        let combatant = context.target_mut(target);

        let outcome: EventOutcome = match effect.kind {
            EffectKind::Damage(amount) => combatant.take_damage(amount).into(),
            EffectKind::Defend(amount) => EventOutcome::Value(combatant.add_defend(amount)),
            EffectKind::Heal(amount) => EventOutcome::Value(combatant.add_hp(amount)),
            EffectKind::AddMana(amount) => EventOutcome::Value(combatant.add_mana(amount)),
            EffectKind::AddMaxMana(amount) => EventOutcome::Value(combatant.add_max_mana(amount)),
        };

        BattleEvent {
            card: card.id,
            caster,
            kind: effect.kind.into(),
            target,
            outcome,
        }
    }
}
