//! Headless balance simulator.
//!
//! Runs complete sessions under an autopilot steering policy, with the
//! simulator itself standing in for the host engine: it detects
//! overlaps between the player and the course and feeds the resulting
//! contacts back into the session, exactly as a physics collaborator
//! would. Used to sanity-check spawn pacing, scoring rates, and
//! collision-policy tuning without a frontend.

mod config;
mod report;
mod runner;

pub use config::SimConfig;
pub use report::{EndReason, RunStats, SimReport};
pub use runner::run_simulation;
