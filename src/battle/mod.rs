//! Battle orchestration.
//!
//! - `Battle`: Turn state machine over two combatants
//! - `BattleBuilder`: Construction with starter defaults
//!
//! ## Turn Flow
//!
//! ```text
//! start_battle -> [player turn: play_card*] -> end_player_turn
//!              -> execute_enemy_turn -> [player turn] -> ...
//! ```
//!
//! Each step is one driver intent. The engine never advances on its own.

mod builder;
mod engine;

pub use builder::BattleBuilder;
pub use engine::{Battle, EnemyTurnOutcome, IntentOutcome, PlayOutcome};
