//! Card system: definitions, catalog, and the starter set.
//!
//! ## Key Types
//!
//! - `CardId`: Identifier for card definitions
//! - `Card`: Immutable cost and ordered effect list
//! - `CardCatalog`: Definition lookup shared across battles
//!
//! Cards never carry per-battle state. A deck is a list of `CardId`s and
//! the catalog is the only place definitions live.

pub mod definition;
pub mod registry;
pub mod starter;

pub use definition::{Card, CardId};
pub use registry::CardCatalog;
