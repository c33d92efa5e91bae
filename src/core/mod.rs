//! Core session logic: configuration, lifecycle state machine, per-tick
//! orchestration, and the session command surface.

pub mod config;
pub mod constants;
pub mod game_state;
pub mod session;
pub mod tick;
