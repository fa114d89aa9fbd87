//! # cardclash
//!
//! A deterministic turn-based card battle engine: a player and an enemy
//! alternate turns, spend mana on cards from their own decks, and resolve
//! ordered effects against themselves or each other.
//!
//! ## Design Principles
//!
//! 1. **Intents In, Events Out**: Drivers issue one intent at a time and get
//!    back ordered events. Nothing else mutates a battle.
//!
//! 2. **Atomic Intents**: A rejected intent changes nothing. An accepted card
//!    play always resolves every effect.
//!
//! 3. **Seeded Everything**: Every shuffle and enemy choice comes from a
//!    named stream derived from one seed, so battles replay exactly.
//!
//! ## Architecture
//!
//! - **Shared Catalog**: Card definitions are immutable and shared behind an
//!   `Arc`. Decks hold only `CardId`s.
//!
//! - **Persistent Data Structures**: The action log and intent history use
//!   `im-rs`, so snapshots clone cheaply.
//!
//! ## Modules
//!
//! - `core`: Sides, combatants, state, intents, RNG, configuration, errors
//! - `zones`: Deck, hand and discard piles
//! - `cards`: Card definitions, catalog and starter set
//! - `effects`: Effects, targeting, resolution and events
//! - `battle`: The turn state machine and its builder
//! - `policy`: Enemy decision policies
//! - `replay`: Replay records

pub mod core;
pub mod zones;
pub mod cards;
pub mod effects;
pub mod battle;
pub mod policy;
pub mod replay;

// Re-export commonly used types
pub use crate::core::{
    Side, Sides,
    BattleRng, RngState,
    BattleConfig, CombatantConfig, PresentationSettings,
    Combatant, CombatantView, DamageReport,
    Intent, IntentRecord,
    ActionLog, BattleResult, BattleSnapshot, Phase,
    BattleError, STATUS_SUCCESS,
};

pub use crate::zones::{Pile, Piles};

pub use crate::cards::{Card, CardCatalog, CardId};

pub use crate::effects::{
    Effect, EffectKind, Target,
    BattleEvent, EventKind, EventOutcome,
    EffectResolver, ResolverContext,
};

pub use crate::battle::{Battle, BattleBuilder, EnemyTurnOutcome, IntentOutcome, PlayOutcome};

pub use crate::policy::{EnemyPolicy, GreedyPolicy, PolicyKind, PolicyView, RandomPolicy};

pub use crate::replay::BattleRecord;
