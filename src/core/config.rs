//! Session configuration records.
//!
//! All tunables live here with defaults sourced from [`core::constants`](super::constants),
//! so hosts can deserialize a config document or tweak individual fields.

use super::constants::*;
use serde::{Deserialize, Serialize};

/// What a solid contact (obstacle, ground, any untagged solid) does.
///
/// Both behaviors shipped in different builds of the game; the choice is
/// an explicit configuration value rather than a merged behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollisionPolicy {
    /// A solid contact ends the session immediately.
    Fatal,
    /// Solid contacts increment the collision counter while play
    /// continues; sessions end when the countdown timer expires.
    Tally,
}

/// Top-level session configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Points awarded per score gate traversed.
    pub score_per_gate: u32,
    /// Counter increment per coin collected.
    pub coin_value: u32,
    pub collision_policy: CollisionPolicy,
    /// Countdown length in seconds. `None` disables timer mode.
    pub game_time: Option<f64>,
    /// Seconds of Active play before contact handling arms.
    pub warmup_secs: f64,
    pub spawn: SpawnConfig,
    pub player: PlayerConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            score_per_gate: DEFAULT_SCORE_PER_GATE,
            coin_value: DEFAULT_COIN_VALUE,
            collision_policy: CollisionPolicy::Fatal,
            game_time: None,
            warmup_secs: DEFAULT_WARMUP_SECS,
            spawn: SpawnConfig::default(),
            player: PlayerConfig::default(),
        }
    }
}

impl GameConfig {
    /// Timed variant: collisions tally up and the session runs until the
    /// countdown expires.
    pub fn timed(seconds: f64) -> Self {
        Self {
            collision_policy: CollisionPolicy::Tally,
            game_time: Some(seconds),
            ..Default::default()
        }
    }
}

/// Obstacle/coin spawning tunables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpawnConfig {
    /// Seconds between obstacle spawns.
    pub interval: f64,
    /// Vertical sampling range for obstacle placement.
    pub min_y: f64,
    pub max_y: f64,
    /// Horizontal position where entities appear.
    pub spawn_x: f64,
    /// Leftward scroll speed in units per second.
    pub scroll_speed: f64,
    /// Entities crossing this x coordinate are despawned.
    pub left_bound: f64,
    /// A coin accompanies every Nth obstacle.
    pub spawns_per_coin: u32,
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            interval: DEFAULT_SPAWN_INTERVAL,
            min_y: DEFAULT_MIN_SPAWN_Y,
            max_y: DEFAULT_MAX_SPAWN_Y,
            spawn_x: DEFAULT_SPAWN_X,
            scroll_speed: DEFAULT_SCROLL_SPEED,
            left_bound: DEFAULT_LEFT_BOUND,
            spawns_per_coin: DEFAULT_SPAWNS_PER_COIN,
        }
    }
}

/// Player placement and steering tunables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Fixed horizontal position; only the vertical axis is steerable.
    pub x: f64,
    pub start_y: f64,
    pub min_y: f64,
    pub max_y: f64,
    /// Vertical steering speed in units per second.
    pub move_speed: f64,
    /// Whether steering clamps to `[min_y, max_y]`.
    pub clamp: bool,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            x: DEFAULT_PLAYER_X,
            start_y: DEFAULT_PLAYER_START_Y,
            min_y: DEFAULT_PLAYER_MIN_Y,
            max_y: DEFAULT_PLAYER_MAX_Y,
            move_speed: DEFAULT_PLAYER_MOVE_SPEED,
            clamp: true,
        }
    }
}
