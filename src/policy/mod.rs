//! Enemy decision policies.
//!
//! The engine asks a policy for one hand index at a time and plays it before
//! asking again, so indices always refer to the current hand. A policy that
//! returns `None` ends the enemy's plays for the turn.
//!
//! - `GreedyPolicy`: Most expensive affordable card first (default)
//! - `RandomPolicy`: Uniform choice among affordable cards
//!
//! Policies never see the player's hand or deck.

use serde::{Deserialize, Serialize};

use crate::cards::{CardCatalog, CardId};
use crate::core::BattleRng;

/// What a policy may look at when choosing a card.
#[derive(Clone, Copy, Debug)]
pub struct PolicyView<'a> {
    /// Enemy hand, in order.
    pub hand: &'a [CardId],
    /// Enemy's current mana.
    pub mana: i64,
    /// Definitions for cost lookups.
    pub catalog: &'a CardCatalog,
}

impl<'a> PolicyView<'a> {
    pub fn new(hand: &'a [CardId], mana: i64, catalog: &'a CardCatalog) -> Self {
        Self { hand, mana, catalog }
    }

    /// Cost of the hand card at `index`, if it exists and is known.
    #[must_use]
    pub fn cost_at(&self, index: usize) -> Option<i64> {
        let id = self.hand.get(index)?;
        self.catalog.get(*id).map(|card| card.cost_amount())
    }

    /// Hand indices the enemy can pay for right now.
    #[must_use]
    pub fn affordable(&self) -> Vec<usize> {
        (0..self.hand.len())
            .filter(|&i| self.cost_at(i).is_some_and(|cost| cost <= self.mana))
            .collect()
    }
}

/// Chooses which card the enemy plays next.
pub trait EnemyPolicy: Send + Sync + std::fmt::Debug {
    /// Pick a hand index to play, or `None` to stop.
    ///
    /// Must only return indices of affordable cards.
    fn choose_card(&mut self, view: &PolicyView<'_>, rng: &mut BattleRng) -> Option<usize>;

    /// Short name for logs.
    fn name(&self) -> &'static str;
}

/// Plays the most expensive affordable card, lowest index on ties.
///
/// Uses no randomness.
#[derive(Clone, Debug, Default)]
pub struct GreedyPolicy;

impl EnemyPolicy for GreedyPolicy {
    fn choose_card(&mut self, view: &PolicyView<'_>, _rng: &mut BattleRng) -> Option<usize> {
        view.affordable()
            .into_iter()
            .filter_map(|i| view.cost_at(i).map(|cost| (i, cost)))
            // max_by_key keeps the last maximum, so reverse to prefer low indices.
            .rev()
            .max_by_key(|&(_, cost)| cost)
            .map(|(i, _)| i)
    }

    fn name(&self) -> &'static str {
        "greedy"
    }
}

/// Plays a uniformly random affordable card.
#[derive(Clone, Debug, Default)]
pub struct RandomPolicy;

impl EnemyPolicy for RandomPolicy {
    fn choose_card(&mut self, view: &PolicyView<'_>, rng: &mut BattleRng) -> Option<usize> {
        let affordable = view.affordable();
        rng.choose(&affordable).copied()
    }

    fn name(&self) -> &'static str {
        "random"
    }
}

/// Serializable policy selector for `BattleConfig`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyKind {
    #[default]
    Greedy,
    Random,
}

impl PolicyKind {
    /// Instantiate the policy.
    #[must_use]
    pub fn build(self) -> Box<dyn EnemyPolicy> {
        match self {
            PolicyKind::Greedy => Box::new(GreedyPolicy),
            PolicyKind::Random => Box::new(RandomPolicy),
        }
    }
}

/// Indices a policy would play from `hand` with `mana`, ignoring effects.
///
/// Simulates the hand shrinking and cost deduction between choices. Cards
/// that change mana are not accounted for, so the engine may play more.
pub fn preview_turn(
    policy: &mut dyn EnemyPolicy,
    hand: &[CardId],
    mana: i64,
    catalog: &CardCatalog,
    rng: &mut BattleRng,
) -> Vec<usize> {
    let mut hand = hand.to_vec();
    let mut mana = mana;
    let mut plays = Vec::new();

    loop {
        let view = PolicyView::new(&hand, mana, catalog);
        let Some(index) = policy.choose_card(&view, rng) else {
            break;
        };
        let Some(cost) = view.cost_at(index) else {
            break;
        };
        if cost > mana {
            break;
        }
        mana -= cost;
        hand.remove(index);
        plays.push(index);
    }

    plays
}
