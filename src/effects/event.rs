//! Battle events.
//!
//! Every resolved effect produces exactly one `BattleEvent`. Events carry
//! what happened, to whom, and the actual result after clamping. They feed
//! the action log and presentation; the engine never reads them back to
//! make decisions.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::effect::EffectKind;
use crate::cards::CardId;
use crate::core::{DamageReport, Side};

/// Events from one card play. Most cards have one or two effects.
pub type EventList = SmallVec<[BattleEvent; 4]>;

/// Effect kind without its amount.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Damage,
    Defend,
    Heal,
    AddMana,
    AddMaxMana,
}

impl From<EffectKind> for EventKind {
    fn from(kind: EffectKind) -> Self {
        match kind {
            EffectKind::Damage(_) => EventKind::Damage,
            EffectKind::Defend(_) => EventKind::Defend,
            EffectKind::Heal(_) => EventKind::Heal,
            EffectKind::AddMana(_) => EventKind::AddMana,
            EffectKind::AddMaxMana(_) => EventKind::AddMaxMana,
        }
    }
}

/// What an effect actually did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventOutcome {
    /// Damage split between defend and hp.
    Damage { dealt: i64, blocked: i64 },
    /// Applied change for every other kind (after clamping).
    Value(i64),
}

impl From<DamageReport> for EventOutcome {
    fn from(report: DamageReport) -> Self {
        EventOutcome::Damage {
            dealt: report.dealt,
            blocked: report.blocked,
        }
    }
}

/// One resolved effect.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleEvent {
    /// Card whose effect this was.
    pub card: CardId,
    /// Side that played the card.
    pub caster: Side,
    /// Effect kind.
    pub kind: EventKind,
    /// Side the effect applied to.
    pub target: Side,
    /// Result after clamping.
    pub outcome: EventOutcome,
}

impl BattleEvent {
    /// Applied value, or damage dealt for damage events.
    #[must_use]
    pub fn value(&self) -> i64 {
        match self.outcome {
            EventOutcome::Damage { dealt, .. } => dealt,
            EventOutcome::Value(v) => v,
        }
    }

    /// Human-readable line for the action log.
    #[must_use]
    pub fn describe(&self, caster_name: &str, target_name: &str) -> String {
        match (self.kind, self.outcome) {
            (EventKind::Damage, EventOutcome::Damage { dealt, blocked }) if blocked > 0 => format!(
                "{} deals {} damage to {} ({} blocked)",
                caster_name, dealt, target_name, blocked
            ),
            (EventKind::Damage, EventOutcome::Damage { dealt, .. }) => {
                format!("{} deals {} damage to {}", caster_name, dealt, target_name)
            }
            (EventKind::Defend, _) => format!("{} gains {} defend", target_name, self.value()),
            (EventKind::Heal, _) => format!("{} heals {} HP", target_name, self.value()),
            (EventKind::AddMana, _) if self.value() < 0 => {
                format!("{} loses {} mana", target_name, -self.value())
            }
            (EventKind::AddMana, _) => format!("{} gains {} mana", target_name, self.value()),
            (EventKind::AddMaxMana, _) => {
                format!("{}'s max mana changes by {:+}", target_name, self.value())
            }
            (EventKind::Damage, EventOutcome::Value(v)) => {
                format!("{} deals {} damage to {}", caster_name, v, target_name)
            }
        }
    }
}
