//! Authoritative session counters and the lifecycle state machine.
//!
//! Counters mutate only while the phase is [`Phase::Active`]; every
//! operation called in the wrong phase is a no-op rather than an error.

use super::config::GameConfig;

/// Lifecycle phase of a session.
///
/// Transitions are one-directional except `Active ⇄ Paused`:
/// `NotStarted → Active → Ended`, with `start()` valid again from `Ended`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    NotStarted,
    Active,
    Paused,
    Ended,
}

/// Score, coin, and collision counters plus the phase machine.
#[derive(Debug, Clone)]
pub struct GameState {
    pub score: u32,
    pub coins: u32,
    pub collisions: u32,
    /// Countdown remaining in seconds. `None` when timer mode is off.
    pub remaining_time: Option<f64>,
    phase: Phase,
    final_score: Option<u32>,

    score_per_gate: u32,
    coin_value: u32,
    game_time: Option<f64>,
}

impl GameState {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            score: 0,
            coins: 0,
            collisions: 0,
            remaining_time: config.game_time,
            phase: Phase::NotStarted,
            final_score: None,
            score_per_gate: config.score_per_gate,
            coin_value: config.coin_value,
            game_time: config.game_time,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_active(&self) -> bool {
        self.phase == Phase::Active
    }

    pub fn is_paused(&self) -> bool {
        self.phase == Phase::Paused
    }

    /// True once a session has been started, including paused and ended ones.
    pub fn is_started(&self) -> bool {
        self.phase != Phase::NotStarted
    }

    /// Final score computed by [`end`](Self::end), `None` while running.
    pub fn final_score(&self) -> Option<u32> {
        self.final_score
    }

    /// Begin a session. Valid from `NotStarted` or `Ended`; resets all
    /// counters and the countdown. Returns false elsewhere.
    pub fn start(&mut self) -> bool {
        match self.phase {
            Phase::NotStarted | Phase::Ended => {
                self.score = 0;
                self.coins = 0;
                self.collisions = 0;
                self.remaining_time = self.game_time;
                self.final_score = None;
                self.phase = Phase::Active;
                true
            }
            _ => false,
        }
    }

    /// Valid only from `Active`.
    pub fn pause(&mut self) -> bool {
        if self.phase == Phase::Active {
            self.phase = Phase::Paused;
            true
        } else {
            false
        }
    }

    /// Valid only from `Paused`.
    pub fn resume(&mut self) -> bool {
        if self.phase == Phase::Paused {
            self.phase = Phase::Active;
            true
        } else {
            false
        }
    }

    /// Award the configured per-gate points.
    pub fn add_score(&mut self) -> bool {
        self.add_score_by(self.score_per_gate)
    }

    /// Award an explicit number of points.
    pub fn add_score_by(&mut self, points: u32) -> bool {
        if self.phase != Phase::Active {
            return false;
        }
        self.score += points;
        true
    }

    pub fn collect_coin(&mut self) -> bool {
        if self.phase != Phase::Active {
            return false;
        }
        self.coins += self.coin_value;
        true
    }

    pub fn add_collision(&mut self) -> bool {
        if self.phase != Phase::Active {
            return false;
        }
        self.collisions += 1;
        true
    }

    /// Decrement the countdown while Active. Returns true when the timer
    /// just reached zero; the caller is expected to end the session.
    pub fn tick_timer(&mut self, dt: f64) -> bool {
        if self.phase != Phase::Active {
            return false;
        }
        match self.remaining_time {
            Some(remaining) => {
                let next = (remaining - dt).max(0.0);
                self.remaining_time = Some(next);
                remaining > 0.0 && next <= 0.0
            }
            None => false,
        }
    }

    /// End the session. Valid from any phase except `Ended`; computes the
    /// final score (score + coins) exactly once. Returns the final score
    /// on the transition, `None` if already ended.
    pub fn end(&mut self) -> Option<u32> {
        if self.phase == Phase::Ended {
            return None;
        }
        self.phase = Phase::Ended;
        let total = self.score + self.coins;
        self.final_score = Some(total);
        Some(total)
    }
}
