//! Simulation configuration.

use crate::core::config::GameConfig;
use crate::core::constants::TICK_INTERVAL_MS;

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of sessions to simulate.
    pub runs: u32,

    /// Random seed for reproducibility (None = entropy).
    pub seed: Option<u64>,

    /// Tick cap per session, a backstop for configs that never end.
    pub max_ticks_per_run: u64,

    /// Milliseconds of simulated time per tick.
    pub tick_ms: u64,

    /// The session configuration under test.
    pub game: GameConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            runs: 200,
            seed: None,
            max_ticks_per_run: 100_000,
            tick_ms: TICK_INTERVAL_MS,
            game: GameConfig::timed(60.0),
        }
    }
}
