//! Card catalog for definition lookup.
//!
//! The catalog is supplied at battle construction by whatever loads card
//! data. Battles hold it behind an `Arc`, so any number of concurrent
//! battles can share one catalog without copying definitions.

use rustc_hash::FxHashMap;

use super::definition::{Card, CardId};
use crate::core::BattleError;

/// Catalog of card definitions keyed by `CardId`.
///
/// ## Example
///
/// ```
/// use cardclash::cards::{Card, CardCatalog, CardId};
/// use cardclash::effects::Effect;
///
/// let mut catalog = CardCatalog::new();
/// catalog
///     .register(Card::new(CardId::new(1), "Strike", 1).with_effect(Effect::damage(6)))
///     .unwrap();
///
/// assert_eq!(catalog.get(CardId::new(1)).unwrap().name, "Strike");
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    cards: FxHashMap<CardId, Card>,
}

impl CardCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from definitions, rejecting duplicate ids.
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Result<Self, BattleError> {
        let mut catalog = Self::new();
        for card in cards {
            catalog.register(card)?;
        }
        Ok(catalog)
    }

    /// Register a card definition.
    pub fn register(&mut self, card: Card) -> Result<(), BattleError> {
        if self.cards.contains_key(&card.id) {
            return Err(BattleError::DuplicateCard(card.id));
        }
        self.cards.insert(card.id, card);
        Ok(())
    }

    /// Get a card definition by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.get(&id)
    }

    /// Get a card definition, reporting unknown ids as an error.
    pub fn lookup(&self, id: CardId) -> Result<&Card, BattleError> {
        self.get(id).ok_or(BattleError::UnknownCard(id))
    }

    /// Check if a card ID is registered.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.cards.contains_key(&id)
    }

    /// Verify that every id in a deck list is registered.
    pub fn validate_deck(&self, deck: &[CardId]) -> Result<(), BattleError> {
        match deck.iter().find(|id| !self.contains(**id)) {
            Some(&missing) => Err(BattleError::UnknownCard(missing)),
            None => Ok(()),
        }
    }

    /// Number of registered definitions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all definitions (unordered).
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.values()
    }

    /// Find definitions matching a predicate.
    pub fn find<F>(&self, predicate: F) -> impl Iterator<Item = &Card>
    where
        F: Fn(&Card) -> bool,
    {
        self.cards.values().filter(move |c| predicate(c))
    }
}
