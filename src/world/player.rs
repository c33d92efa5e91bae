//! The player record: clamped vertical steering and the contact warm-up
//! gate.
//!
//! Horizontal and depth axes are fixed by the host; only the vertical
//! axis responds to input.

use crate::core::config::PlayerConfig;

#[derive(Debug, Clone)]
pub struct Player {
    pub x: f64,
    pub y: f64,
    min_y: f64,
    max_y: f64,
    move_speed: f64,
    clamp: bool,
    /// Contact handling stays off until the warm-up elapses, so entity
    /// initialization can't produce spurious triggers.
    warmup_remaining: f64,
}

impl Player {
    pub fn new(config: &PlayerConfig, warmup_secs: f64) -> Self {
        let mut player = Self {
            x: config.x,
            y: config.start_y,
            min_y: config.min_y,
            max_y: config.max_y,
            move_speed: config.move_speed,
            clamp: config.clamp,
            warmup_remaining: warmup_secs,
        };
        if player.clamp {
            player.y = player.y.clamp(player.min_y, player.max_y);
        }
        player
    }

    /// Steer vertically by a normalized input in [-1, 1] over `dt`
    /// seconds. Out-of-range input is clamped.
    pub fn steer(&mut self, input: f64, dt: f64) {
        let input = input.clamp(-1.0, 1.0);
        self.y += input * self.move_speed * dt;
        if self.clamp {
            self.y = self.y.clamp(self.min_y, self.max_y);
        }
    }

    /// Place the player directly at a target height (absolute-tracking
    /// hosts drive this instead of [`steer`](Self::steer)).
    pub fn set_y(&mut self, target_y: f64) {
        self.y = if self.clamp {
            target_y.clamp(self.min_y, self.max_y)
        } else {
            target_y
        };
    }

    /// Count down the warm-up window. Returns true on the tick the gate
    /// opens.
    pub fn tick_warmup(&mut self, dt: f64) -> bool {
        if self.warmup_remaining <= 0.0 {
            return false;
        }
        self.warmup_remaining -= dt;
        self.warmup_remaining <= 0.0
    }

    /// Whether contacts are currently handled.
    pub fn is_armed(&self) -> bool {
        self.warmup_remaining <= 0.0
    }
}
