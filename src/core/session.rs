//! The session command surface consumed by UI collaborators.
//!
//! [`GameSession`] owns the state machine, the world, the scheduler, and
//! the player profile, and exposes the commands a frontend's buttons
//! drive: start, pause, resume, restart, quit. A restart is the
//! scene-reload equivalent: full world and state reset followed by a
//! fresh start.

use super::config::GameConfig;
use super::game_state::GameState;
use super::tick::{game_tick, TickEvent, TickResult};
use crate::collision::Contact;
use crate::profile::{persistence::save_profile, PlayerProfile};
use crate::spawn::SpawnScheduler;
use crate::world::{Player, World};
use log::warn;
use rand::Rng;

/// One play session plus the lifetime profile it feeds into.
#[derive(Debug, Clone)]
pub struct GameSession {
    pub state: GameState,
    pub world: World,
    pub player: Player,
    pub scheduler: SpawnScheduler,
    pub config: GameConfig,
    pub profile: PlayerProfile,
    /// Save the profile to disk when a session ends. Off by default so
    /// headless hosts (tests, the simulator) never touch the filesystem.
    pub autosave: bool,
    /// Active play time this session, in seconds.
    session_time: f64,
    /// Guards the profile fold so an ended session is recorded once.
    recorded: bool,
}

impl GameSession {
    /// Fresh session with a blank profile and no autosave.
    pub fn new(config: GameConfig) -> Self {
        Self::with_profile(config, PlayerProfile::default())
    }

    /// Session feeding an existing (typically loaded) profile.
    pub fn with_profile(config: GameConfig, profile: PlayerProfile) -> Self {
        let state = GameState::new(&config);
        let player = Player::new(&config.player, config.warmup_secs);
        Self {
            state,
            world: World::new(),
            player,
            scheduler: SpawnScheduler::new(),
            config,
            profile,
            autosave: false,
            session_time: 0.0,
            recorded: false,
        }
    }

    /// Start playing. Valid from NotStarted or Ended; resets the world,
    /// the player, and the scheduler alongside the counters.
    pub fn start(&mut self) -> Vec<TickEvent> {
        if !self.state.start() {
            return Vec::new();
        }
        self.world = World::new();
        self.player = Player::new(&self.config.player, self.config.warmup_secs);
        self.scheduler.reset();
        self.scheduler.start();
        self.session_time = 0.0;
        self.recorded = false;
        vec![TickEvent::SessionStarted]
    }

    /// Freeze all tick-driven updates. No-op unless Active.
    pub fn pause(&mut self) -> bool {
        if self.state.pause() {
            self.scheduler.stop();
            true
        } else {
            false
        }
    }

    /// No-op unless Paused.
    pub fn resume(&mut self) -> bool {
        if self.state.resume() {
            self.scheduler.start();
            true
        } else {
            false
        }
    }

    /// Scene-reload equivalent: discard the running session outright and
    /// begin a new one. An ended session has already been recorded; an
    /// abandoned Active one is not.
    pub fn restart(&mut self) -> Vec<TickEvent> {
        self.state = GameState::new(&self.config);
        self.start()
    }

    /// End the session (if running) and record it.
    pub fn quit(&mut self) -> Vec<TickEvent> {
        let mut events = Vec::new();
        if let Some(final_score) = self.state.end() {
            events.push(TickEvent::GameOver {
                score: self.state.score,
                coins: self.state.coins,
                final_score,
            });
        }
        self.scheduler.stop();
        self.record_session();
        events
    }

    /// Advance one tick with the host-reported contacts.
    pub fn tick<R: Rng>(&mut self, dt: f64, contacts: &[Contact], rng: &mut R) -> TickResult {
        let was_active = self.state.is_active();
        let result = game_tick(
            &mut self.state,
            &mut self.world,
            &mut self.player,
            &mut self.scheduler,
            &self.config,
            dt,
            contacts,
            rng,
        );
        if was_active {
            self.session_time += dt;
        }
        if result.ended() {
            self.record_session();
        }
        result
    }

    // ── Query accessors for UI collaborators ───────────────────────────

    pub fn score(&self) -> u32 {
        self.state.score
    }

    pub fn coins(&self) -> u32 {
        self.state.coins
    }

    pub fn collisions(&self) -> u32 {
        self.state.collisions
    }

    pub fn remaining_time(&self) -> Option<f64> {
        self.state.remaining_time
    }

    pub fn is_active(&self) -> bool {
        self.state.is_active()
    }

    pub fn is_paused(&self) -> bool {
        self.state.is_paused()
    }

    pub fn is_started(&self) -> bool {
        self.state.is_started()
    }

    pub fn session_time(&self) -> f64 {
        self.session_time
    }

    /// Fold the finished session into the lifetime profile and save it
    /// best-effort. Failures are logged; play state is unaffected.
    fn record_session(&mut self) {
        if self.recorded {
            return;
        }
        self.recorded = true;
        self.profile.record_session(
            self.state.score,
            self.state.coins,
            self.state.collisions,
            self.session_time,
            chrono::Utc::now().timestamp(),
        );
        if self.autosave {
            if let Err(e) = save_profile(&self.profile) {
                warn!("failed to save player profile: {}", e);
            }
        }
    }
}
