//! Battle sides and per-side storage.
//!
//! ## Side
//!
//! A battle always has exactly two combatants: the player and the enemy.
//!
//! ## Sides
//!
//! Per-side data with total indexing by `Side`, so there is no missing-player
//! case to handle anywhere in the engine.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two combatants in a battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Player,
    Enemy,
}

impl Side {
    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Side::Player => Side::Enemy,
            Side::Enemy => Side::Player,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Player => f.write_str("player"),
            Side::Enemy => f.write_str("enemy"),
        }
    }
}

/// Data stored once per side.
///
/// ## Example
///
/// ```
/// use cardclash::core::{Side, Sides};
///
/// let mut hp = Sides::new(30, 20);
/// hp[Side::Enemy] -= 5;
/// assert_eq!(hp[Side::Enemy], 15);
///
/// let (player, enemy) = hp.split_mut(Side::Player);
/// *player += *enemy;
/// assert_eq!(hp[Side::Player], 45);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Sides<T> {
    pub player: T,
    pub enemy: T,
}

impl<T> Sides<T> {
    /// Create from explicit values.
    pub const fn new(player: T, enemy: T) -> Self {
        Self { player, enemy }
    }

    /// Create with a factory per side.
    pub fn from_fn(mut factory: impl FnMut(Side) -> T) -> Self {
        Self {
            player: factory(Side::Player),
            enemy: factory(Side::Enemy),
        }
    }

    /// Get a side's data.
    #[must_use]
    pub fn get(&self, side: Side) -> &T {
        match side {
            Side::Player => &self.player,
            Side::Enemy => &self.enemy,
        }
    }

    /// Get a side's data mutably.
    pub fn get_mut(&mut self, side: Side) -> &mut T {
        match side {
            Side::Player => &mut self.player,
            Side::Enemy => &mut self.enemy,
        }
    }

    /// Borrow `side` and its opponent mutably at once, in that order.
    pub fn split_mut(&mut self, side: Side) -> (&mut T, &mut T) {
        match side {
            Side::Player => (&mut self.player, &mut self.enemy),
            Side::Enemy => (&mut self.enemy, &mut self.player),
        }
    }

    /// Map both sides.
    pub fn map<U>(&self, mut f: impl FnMut(Side, &T) -> U) -> Sides<U> {
        Sides {
            player: f(Side::Player, &self.player),
            enemy: f(Side::Enemy, &self.enemy),
        }
    }

    /// Iterate over (Side, &T) pairs, player first.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        [(Side::Player, &self.player), (Side::Enemy, &self.enemy)].into_iter()
    }
}

impl<T> Index<Side> for Sides<T> {
    type Output = T;

    fn index(&self, side: Side) -> &Self::Output {
        self.get(side)
    }
}

impl<T> IndexMut<Side> for Sides<T> {
    fn index_mut(&mut self, side: Side) -> &mut Self::Output {
        self.get_mut(side)
    }
}
