//! Card piles for a combatant.
//!
//! ## Key Types
//!
//! - `Piles`: Deck, hand and discard pile with draw/discard/reshuffle
//! - `Pile`: Names one of the three piles
//! - `DrawReport`: How many cards a draw moved and whether it reshuffled

pub mod piles;

pub use piles::{DrawReport, Pile, Piles};
