//! Core battle types: sides, combatants, state, intents, RNG, configuration.
//!
//! Everything here is independent of how cards are chosen or displayed.
//! The battle engine composes these pieces; drivers mostly see them
//! through snapshots and errors.

pub mod action;
pub mod combatant;
pub mod config;
pub mod error;
pub mod rng;
pub mod side;
pub mod state;

pub use action::{Intent, IntentRecord};
pub use combatant::{Combatant, CombatantView, DamageReport};
pub use config::{BattleConfig, CombatantConfig, PresentationSettings};
pub use error::{BattleError, STATUS_SUCCESS};
pub use rng::{BattleRng, RngState};
pub use side::{Side, Sides};
pub use state::{ActionLog, BattleResult, BattleSnapshot, Phase};
