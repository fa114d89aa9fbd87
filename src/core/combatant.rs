//! Combatant state and its mutation primitives.
//!
//! A `Combatant` is either side of a battle: hit points, mana, a defend
//! buffer, and three card piles. Every rule that touches a single
//! combatant lives here; cross-combatant logic lives in the resolver and
//! the battle engine.
//!
//! ## Clamping
//!
//! - `mana` stays within `[0, max_mana]`
//! - `hp` never exceeds `max_hp` but may drop below zero; defeat is `hp <= 0`
//! - `defend` is never negative and resets to zero when its owner's turn starts

use serde::{Deserialize, Serialize};

use super::config::CombatantConfig;
use super::rng::BattleRng;
use crate::cards::CardId;
use crate::zones::{Pile, Piles};

/// How incoming damage split between the defend buffer and hit points.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamageReport {
    /// Damage that reached hit points.
    pub dealt: i64,
    /// Damage absorbed by defend.
    pub blocked: i64,
}

/// One side of a battle.
#[derive(Clone, Debug)]
pub struct Combatant {
    name: String,
    max_hp: i64,
    hp: i64,
    max_mana: i64,
    mana: i64,
    defend: i64,
    piles: Piles,
    /// Stream used for every shuffle of this combatant's deck.
    rng: BattleRng,
}

impl Combatant {
    /// Create a combatant at full hp and zero mana with a shuffled deck.
    ///
    /// `max_hp` is raised to at least 1 and `max_mana` to at least 0.
    #[must_use]
    pub fn new(config: &CombatantConfig, mut rng: BattleRng) -> Self {
        let mut piles = Piles::new(config.deck.clone());
        piles.shuffle_deck(&mut rng);

        let max_hp = config.max_hp.max(1);
        Self {
            name: config.name.clone(),
            max_hp,
            hp: max_hp,
            max_mana: config.max_mana.max(0),
            mana: 0,
            defend: 0,
            piles,
            rng,
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn hp(&self) -> i64 {
        self.hp
    }

    #[must_use]
    pub fn max_hp(&self) -> i64 {
        self.max_hp
    }

    #[must_use]
    pub fn mana(&self) -> i64 {
        self.mana
    }

    #[must_use]
    pub fn max_mana(&self) -> i64 {
        self.max_mana
    }

    #[must_use]
    pub fn defend(&self) -> i64 {
        self.defend
    }

    /// Cards in hand.
    #[must_use]
    pub fn hand(&self) -> &[CardId] {
        self.piles.hand()
    }

    /// Cards in the draw pile, bottom first.
    #[must_use]
    pub fn deck(&self) -> &[CardId] {
        self.piles.deck()
    }

    /// Cards in the discard pile.
    #[must_use]
    pub fn discard_pile(&self) -> &[CardId] {
        self.piles.discard()
    }

    /// All three piles.
    #[must_use]
    pub fn piles(&self) -> &Piles {
        &self.piles
    }

    /// Cards owned across deck, hand and discard.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.piles.total()
    }

    /// Whether this combatant has been defeated.
    #[must_use]
    pub fn is_defeated(&self) -> bool {
        self.hp <= 0
    }

    // === Turn Lifecycle ===

    /// Draw up to `count` cards, reshuffling the discard pile if needed.
    ///
    /// Returns whether a reshuffle happened.
    pub fn draw(&mut self, count: usize) -> bool {
        self.piles.draw(count, &mut self.rng).reshuffled
    }

    /// Refill mana, drop defend, then draw.
    ///
    /// Returns whether the draw reshuffled.
    pub fn start_turn(&mut self, draw_amount: usize) -> bool {
        self.mana = self.max_mana;
        self.defend = 0;
        self.draw(draw_amount)
    }

    /// Discard the whole hand.
    pub fn end_turn(&mut self) {
        self.piles.discard_hand();
    }

    /// Move the hand card at `index` to the discard pile.
    ///
    /// Returns `None` and changes nothing when the index is out of range.
    pub fn discard_card(&mut self, index: usize) -> Option<CardId> {
        self.piles.discard_at(index)
    }

    // === Resources ===

    /// Apply damage, absorbing it with defend first.
    ///
    /// Negative amounts are treated as zero.
    pub fn take_damage(&mut self, amount: i64) -> DamageReport {
        let amount = amount.max(0);
        let blocked = self.defend.min(amount);
        let dealt = amount - blocked;

        self.defend -= blocked;
        self.hp = self.hp.saturating_sub(dealt);

        DamageReport { dealt, blocked }
    }

    /// Add to the defend buffer. Returns the amount added.
    pub fn add_defend(&mut self, amount: i64) -> i64 {
        let amount = amount.max(0);
        self.defend = self.defend.saturating_add(amount);
        amount
    }

    /// Change current mana, clamped to `[0, max_mana]`.
    ///
    /// Returns the actual change.
    pub fn add_mana(&mut self, amount: i64) -> i64 {
        let before = self.mana;
        self.mana = self.mana.saturating_add(amount).clamp(0, self.max_mana);
        self.mana - before
    }

    /// Change max mana, never below zero. Current mana is left alone.
    ///
    /// Returns the actual change.
    pub fn add_max_mana(&mut self, amount: i64) -> i64 {
        let before = self.max_mana;
        self.max_mana = self.max_mana.saturating_add(amount).max(0);
        self.max_mana - before
    }

    /// Heal, capped at `max_hp`. Returns the hp actually gained.
    pub fn add_hp(&mut self, amount: i64) -> i64 {
        let before = self.hp;
        self.hp = self.max_hp.min(self.hp.saturating_add(amount.max(0)));
        self.hp.saturating_sub(before).max(0)
    }

    /// Set hp directly, capped at `max_hp`.
    pub fn set_hp(&mut self, value: i64) {
        self.hp = self.max_hp.min(value);
    }

    /// Pay a card's cost. Returns false and changes nothing if unaffordable.
    pub fn spend_mana(&mut self, cost: i64) -> bool {
        if cost < 0 || cost > self.mana {
            return false;
        }
        self.mana -= cost;
        true
    }

    /// Plain-data view for presentation.
    #[must_use]
    pub fn view(&self) -> CombatantView {
        CombatantView {
            name: self.name.clone(),
            hp: self.hp,
            max_hp: self.max_hp,
            mana: self.mana,
            max_mana: self.max_mana,
            defend: self.defend,
            hand: self.piles.hand().to_vec(),
            deck_size: self.piles.len(Pile::Deck),
            discard_size: self.piles.len(Pile::Discard),
        }
    }
}

/// Read-only combatant data handed to presentation layers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatantView {
    pub name: String,
    pub hp: i64,
    pub max_hp: i64,
    pub mana: i64,
    pub max_mana: i64,
    pub defend: i64,
    pub hand: Vec<CardId>,
    pub deck_size: usize,
    pub discard_size: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn combatant(hp: i64, mana: i64, deck: &[u32]) -> Combatant {
        let config = CombatantConfig::new("Tester", hp, mana)
            .with_deck(deck.iter().copied().map(CardId::new).collect());
        Combatant::new(&config, BattleRng::new(7))
    }

    #[test]
    fn test_new_combatant() {
        let c = combatant(30, 3, &[1, 2, 3]);

        assert_eq!(c.name(), "Tester");
        assert_eq!(c.hp(), 30);
        assert_eq!(c.max_hp(), 30);
        assert_eq!(c.mana(), 0);
        assert_eq!(c.max_mana(), 3);
        assert_eq!(c.defend(), 0);
        assert_eq!(c.deck().len(), 3);
        assert!(c.hand().is_empty());
        assert!(c.discard_pile().is_empty());
    }

    #[test]
    fn test_take_damage_absorbs_with_defend() {
        let mut c = combatant(10, 3, &[]);
        c.add_defend(3);

        let report = c.take_damage(5);

        assert_eq!(report, DamageReport { dealt: 2, blocked: 3 });
        assert_eq!(c.defend(), 0);
        assert_eq!(c.hp(), 8);
    }

    #[test]
    fn test_take_damage_fully_blocked() {
        let mut c = combatant(10, 3, &[]);
        c.add_defend(8);

        let report = c.take_damage(5);

        assert_eq!(report, DamageReport { dealt: 0, blocked: 5 });
        assert_eq!(c.defend(), 3);
        assert_eq!(c.hp(), 10);
    }

    #[test]
    fn test_hp_may_go_negative() {
        let mut c = combatant(4, 3, &[]);
        c.take_damage(10);
        assert_eq!(c.hp(), -6);
        assert!(c.is_defeated());
    }

    #[test]
    fn test_negative_damage_is_ignored() {
        let mut c = combatant(10, 3, &[]);
        assert_eq!(c.take_damage(-4), DamageReport::default());
        assert_eq!(c.hp(), 10);
    }

    #[test]
    fn test_add_mana_clamps() {
        let mut c = combatant(10, 3, &[]);

        assert_eq!(c.add_mana(5), 3);
        assert_eq!(c.mana(), 3);

        assert_eq!(c.add_mana(-10), -3);
        assert_eq!(c.mana(), 0);
    }

    #[test]
    fn test_add_max_mana_floors_at_zero() {
        let mut c = combatant(10, 3, &[]);
        c.add_mana(3);

        assert_eq!(c.add_max_mana(2), 2);
        assert_eq!(c.max_mana(), 5);
        assert_eq!(c.mana(), 3);

        assert_eq!(c.add_max_mana(-9), -5);
        assert_eq!(c.max_mana(), 0);
    }

    #[test]
    fn test_add_hp_caps_at_max() {
        let mut c = combatant(20, 3, &[]);
        c.take_damage(3);

        assert_eq!(c.add_hp(10), 3);
        assert_eq!(c.hp(), 20);
        assert_eq!(c.add_hp(5), 0);
    }

    #[test]
    fn test_set_hp_caps_at_max() {
        let mut c = combatant(20, 3, &[]);
        c.set_hp(50);
        assert_eq!(c.hp(), 20);
        c.set_hp(-2);
        assert_eq!(c.hp(), -2);
    }

    #[test]
    fn test_start_turn_resets_mana_and_defend() {
        let mut c = combatant(20, 3, &[1, 2, 3, 4, 5, 6]);
        c.add_defend(7);

        let reshuffled = c.start_turn(5);

        assert!(!reshuffled);
        assert_eq!(c.mana(), 3);
        assert_eq!(c.defend(), 0);
        assert_eq!(c.hand().len(), 5);
        assert_eq!(c.deck().len(), 1);
    }

    #[test]
    fn test_end_turn_discards_hand() {
        let mut c = combatant(20, 3, &[1, 2, 3]);
        c.start_turn(2);
        c.end_turn();

        assert!(c.hand().is_empty());
        assert_eq!(c.discard_pile().len(), 2);
        assert_eq!(c.total_cards(), 3);
    }

    #[test]
    fn test_second_turn_reshuffles() {
        let mut c = combatant(20, 3, &[1, 2, 3, 4]);
        c.start_turn(3);
        c.end_turn();

        assert!(c.start_turn(3));
        assert_eq!(c.hand().len(), 3);
        assert_eq!(c.total_cards(), 4);
    }

    #[test]
    fn test_discard_card_out_of_range() {
        let mut c = combatant(20, 3, &[1, 2]);
        c.draw(2);

        assert_eq!(c.discard_card(2), None);
        assert_eq!(c.hand().len(), 2);
        assert!(c.discard_card(0).is_some());
        assert_eq!(c.hand().len(), 1);
        assert_eq!(c.discard_pile().len(), 1);
    }

    #[test]
    fn test_config_limits_are_raised() {
        let c = Combatant::new(&CombatantConfig::new("Husk", 0, -2), BattleRng::new(1));

        assert_eq!(c.max_hp(), 1);
        assert_eq!(c.hp(), 1);
        assert_eq!(c.max_mana(), 0);
        assert!(!c.is_defeated());
    }

    #[test]
    fn test_extreme_amounts_saturate() {
        let mut c = combatant(30, 3, &[]);
        c.add_mana(3);

        assert_eq!(c.add_mana(i64::MAX), 0);
        assert_eq!(c.mana(), 3);
        assert_eq!(c.add_mana(i64::MIN), -3);
        assert_eq!(c.mana(), 0);

        assert_eq!(c.add_max_mana(i64::MAX), i64::MAX - 3);
        assert_eq!(c.max_mana(), i64::MAX);
        c.add_max_mana(i64::MAX);
        assert_eq!(c.max_mana(), i64::MAX);

        c.add_defend(i64::MAX);
        c.add_defend(i64::MAX);
        assert_eq!(c.defend(), i64::MAX);
        assert_eq!(c.take_damage(i64::MAX).blocked, i64::MAX);
        assert_eq!(c.defend(), 0);

        c.take_damage(i64::MAX);
        c.take_damage(i64::MAX);
        assert_eq!(c.hp(), i64::MIN);
        assert!(c.is_defeated());

        assert_eq!(c.add_hp(i64::MAX), i64::MAX);
        assert_eq!(c.hp(), -1);
        assert_eq!(c.add_hp(i64::MAX), 31);
        assert_eq!(c.hp(), 30);
    }

    #[test]
    fn test_spend_mana() {
        let mut c = combatant(20, 3, &[]);
        c.add_mana(3);

        assert!(!c.spend_mana(4));
        assert_eq!(c.mana(), 3);
        assert!(c.spend_mana(2));
        assert_eq!(c.mana(), 1);
    }

    #[test]
    fn test_view() {
        let mut c = combatant(20, 3, &[1, 2, 3]);
        c.start_turn(2);

        let view = c.view();
        assert_eq!(view.hand.len(), 2);
        assert_eq!(view.deck_size, 1);
        assert_eq!(view.discard_size, 0);
        assert_eq!(view.mana, 3);
    }
}
