//! Skydrift - engine-independent core of a side-scrolling arcade game.
//!
//! The host (a game engine, a terminal frontend, a test harness) owns
//! rendering, overlap detection, audio mixing, and input devices. This
//! crate owns the authoritative session state: spawning, scrolling,
//! contact routing, the lifecycle state machine, and profile persistence.

pub mod build_info;
pub mod collision;
pub mod core;
pub mod profile;
pub mod simulator;
pub mod sinks;
pub mod spawn;
pub mod utils;
pub mod world;

pub use crate::core::config::{CollisionPolicy, GameConfig, PlayerConfig, SpawnConfig};
pub use crate::core::constants::TICK_INTERVAL_MS;
pub use crate::core::game_state::{GameState, Phase};
pub use crate::core::session::GameSession;
pub use crate::core::tick::{TickEvent, TickResult};
pub use crate::profile::PlayerProfile;
pub use crate::world::{Entity, EntityId, EntityKind, Player, Side, World};
