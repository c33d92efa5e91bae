//! The per-tick orchestration function and its event vocabulary.
//!
//! One tick is one discrete simulation step: the host delivers the
//! elapsed time plus whatever overlap contacts its physics detected, and
//! [`game_tick`] runs warm-up, contact routing, the countdown, spawning,
//! and scrolling in that order. Nothing here touches I/O or the UI; the
//! returned [`TickEvent`]s are the only channel to the presentation
//! layer.

use super::config::GameConfig;
use super::game_state::GameState;
use crate::collision::{route_contacts, Contact};
use crate::spawn::{tick_spawner, SpawnScheduler};
use crate::world::{mover, Player, Side, World};
use rand::Rng;

/// A single event produced by a game tick or a session command.
///
/// The presentation layer maps these to HUD text updates and audio cues.
/// Game logic never calls a sink directly.
#[derive(Debug, Clone, PartialEq)]
pub enum TickEvent {
    /// A fresh session became Active. HUD counters should show zeros.
    SessionStarted,
    /// The score counter changed.
    ScoreChanged { score: u32 },
    /// A coin was collected.
    CoinCollected { coins: u32 },
    /// A solid contact was recorded without ending the session.
    CollisionRecorded { collisions: u32 },
    /// The warm-up window elapsed; contacts are now handled.
    CollisionArmed,
    /// Countdown changed (timer mode only).
    TimerUpdated { remaining: f64 },
    /// An obstacle (and its paired score gate) was placed.
    ObstacleSpawned { side: Side, y: f64 },
    /// A periodic coin was placed.
    CoinSpawned { y: f64 },
    /// The session ended. Emitted exactly once per session.
    GameOver {
        score: u32,
        coins: u32,
        final_score: u32,
    },
}

/// Everything that happened during one tick.
#[derive(Debug, Clone, Default)]
pub struct TickResult {
    pub events: Vec<TickEvent>,
    /// Entities destroyed after crossing the left boundary this tick.
    pub despawned: u32,
}

impl TickResult {
    pub fn ended(&self) -> bool {
        self.events
            .iter()
            .any(|e| matches!(e, TickEvent::GameOver { .. }))
    }
}

/// Process a single simulation tick.
///
/// Runs only while the session is Active; paused, ended, and not-yet
/// started sessions are frozen and return an empty result. Contacts are
/// routed in detection order before the world advances, matching the
/// host physics having detected them for this tick.
#[allow(clippy::too_many_arguments)]
pub fn game_tick<R: Rng>(
    state: &mut GameState,
    world: &mut World,
    player: &mut Player,
    scheduler: &mut SpawnScheduler,
    config: &GameConfig,
    dt: f64,
    contacts: &[Contact],
    rng: &mut R,
) -> TickResult {
    let mut result = TickResult::default();
    if !state.is_active() {
        return result;
    }

    if player.tick_warmup(dt) {
        result.events.push(TickEvent::CollisionArmed);
    }

    result
        .events
        .extend(route_contacts(contacts, world, player, state, config));
    if !state.is_active() {
        // A fatal contact ended the session mid-tick.
        scheduler.stop();
        return result;
    }

    if state.tick_timer(dt) {
        if let Some(final_score) = state.end() {
            scheduler.stop();
            result.events.push(TickEvent::GameOver {
                score: state.score,
                coins: state.coins,
                final_score,
            });
        }
        return result;
    }
    if let Some(remaining) = state.remaining_time {
        result.events.push(TickEvent::TimerUpdated { remaining });
    }

    if let Some(batch) = tick_spawner(scheduler, world, &config.spawn, dt, rng) {
        result.events.push(TickEvent::ObstacleSpawned {
            side: batch.side,
            y: batch.obstacle_y,
        });
        if let Some(y) = batch.coin_y {
            result.events.push(TickEvent::CoinSpawned { y });
        }
    }

    let despawned = mover::scroll(
        world,
        config.spawn.scroll_speed,
        dt,
        config.spawn.left_bound,
    );
    result.despawned = despawned.len() as u32;

    result
}
