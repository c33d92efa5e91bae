//! The live entity set: scrolling obstacles, coins, score gates, and the
//! player record.

pub mod mover;
pub mod player;
pub mod types;

pub use player::Player;
pub use types::{Entity, EntityId, EntityKind, Side, World};
