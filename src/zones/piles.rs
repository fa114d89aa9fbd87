//! Deck, hand and discard pile for one combatant.
//!
//! `Piles` owns every card a combatant has. Cards only ever move between
//! the three piles, so `total()` is fixed for the life of the combatant.
//!
//! The deck is a stack: index 0 is the bottom, the last element is the top.

use serde::{Deserialize, Serialize};

use crate::cards::CardId;
use crate::core::rng::BattleRng;

/// Which pile a card sits in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pile {
    Deck,
    Hand,
    Discard,
}

/// Outcome of a draw.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DrawReport {
    /// Cards moved into the hand.
    pub drawn: usize,
    /// The discard pile was shuffled back into the deck.
    pub reshuffled: bool,
}

/// A combatant's three card piles.
///
/// ```
/// use cardclash::cards::CardId;
/// use cardclash::core::BattleRng;
/// use cardclash::zones::Piles;
///
/// let mut piles = Piles::new(vec![CardId::new(1), CardId::new(2)]);
/// let mut rng = BattleRng::new(0);
///
/// let report = piles.draw(5, &mut rng);
/// assert_eq!(report.drawn, 2);
/// assert_eq!(piles.hand(), &[CardId::new(2), CardId::new(1)]);
/// assert_eq!(piles.total(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piles {
    deck: Vec<CardId>,
    hand: Vec<CardId>,
    discard: Vec<CardId>,
}

impl Piles {
    /// Create with every card in the deck, last element on top.
    #[must_use]
    pub fn new(deck: Vec<CardId>) -> Self {
        Self {
            deck,
            hand: Vec::new(),
            discard: Vec::new(),
        }
    }

    /// Cards in the deck, bottom first.
    #[must_use]
    pub fn deck(&self) -> &[CardId] {
        &self.deck
    }

    /// Cards in hand, in play-selection order.
    #[must_use]
    pub fn hand(&self) -> &[CardId] {
        &self.hand
    }

    /// Cards in the discard pile.
    #[must_use]
    pub fn discard(&self) -> &[CardId] {
        &self.discard
    }

    /// Number of cards in a pile.
    #[must_use]
    pub fn len(&self, pile: Pile) -> usize {
        match pile {
            Pile::Deck => self.deck.len(),
            Pile::Hand => self.hand.len(),
            Pile::Discard => self.discard.len(),
        }
    }

    /// Cards across all three piles.
    #[must_use]
    pub fn total(&self) -> usize {
        self.deck.len() + self.hand.len() + self.discard.len()
    }

    /// Shuffle the deck in place.
    pub fn shuffle_deck(&mut self, rng: &mut BattleRng) {
        rng.shuffle(&mut self.deck);
    }

    /// Move the whole discard pile into the deck and shuffle it.
    ///
    /// Returns false when there was nothing to move.
    pub fn reshuffle(&mut self, rng: &mut BattleRng) -> bool {
        if self.discard.is_empty() {
            return false;
        }
        self.deck.append(&mut self.discard);
        rng.shuffle(&mut self.deck);
        true
    }

    /// Draw up to `count` cards from the top of the deck.
    ///
    /// An empty deck is refilled from the discard pile mid-draw. When both
    /// are empty the draw stops early.
    pub fn draw(&mut self, count: usize, rng: &mut BattleRng) -> DrawReport {
        let mut report = DrawReport::default();

        for _ in 0..count {
            if self.deck.is_empty() {
                if !self.reshuffle(rng) {
                    break;
                }
                report.reshuffled = true;
            }
            if let Some(card) = self.deck.pop() {
                self.hand.push(card);
                report.drawn += 1;
            }
        }

        report
    }

    /// Move the hand card at `index` to the discard pile.
    pub fn discard_at(&mut self, index: usize) -> Option<CardId> {
        if index >= self.hand.len() {
            return None;
        }
        let card = self.hand.remove(index);
        self.discard.push(card);
        Some(card)
    }

    /// Move the whole hand to the discard pile.
    pub fn discard_hand(&mut self) -> usize {
        let count = self.hand.len();
        self.discard.append(&mut self.hand);
        count
    }
}
