//! Effect system for card plays.
//!
//! - `Effect`: One targeted atomic change (damage, defend, heal, mana)
//! - `Target`: Caster or opponent, relative to who plays the card
//! - `EffectResolver`: Applies a card's effects in order
//! - `BattleEvent`: Structured record of one resolved effect
//!
//! ## Design Philosophy
//!
//! Resolution is a pure pipeline from card to events. It never checks
//! costs, phases or defeat; the battle engine does that around it.

mod effect;
mod event;
mod resolver;
mod targeting;

pub use effect::{Effect, EffectKind};
pub use event::{BattleEvent, EventKind, EventList, EventOutcome};
pub use resolver::{EffectResolver, ResolverContext};
pub use targeting::Target;
