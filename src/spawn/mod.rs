//! Obstacle, score-gate, and coin spawning on a fixed interval.

pub mod logic;
pub mod types;

pub use logic::{tick_spawner, SpawnBatch};
pub use types::SpawnScheduler;
