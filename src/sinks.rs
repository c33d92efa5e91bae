//! Collaborator interfaces the core pushes side effects into.
//!
//! Hosts hand the bridge whatever they have; an absent sink is
//! tolerated — the side effect is skipped and a diagnostic logged, and
//! play continues.

use crate::core::tick::TickEvent;
use log::debug;

/// Text bindings a frontend exposes for the in-game HUD.
pub trait HudSink {
    fn set_score(&mut self, text: &str);
    fn set_coins(&mut self, text: &str);
    fn set_collisions(&mut self, text: &str);
    fn set_timer(&mut self, text: &str);
    /// Show the game-over panel with its three summary lines.
    fn show_game_over(&mut self, score_line: &str, coin_line: &str, total_line: &str);
}

/// One-shot sound cues the core can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    Coin,
    Death,
}

/// Audio playback a frontend exposes.
pub trait AudioSink {
    fn play(&mut self, cue: SoundCue);
    /// Background music stops when the session ends.
    fn stop_music(&mut self);
}

/// Apply a batch of tick events to whatever sinks are attached.
pub fn apply_events(
    events: &[TickEvent],
    mut hud: Option<&mut dyn HudSink>,
    mut audio: Option<&mut dyn AudioSink>,
) {
    for event in events {
        match event {
            TickEvent::SessionStarted => {
                if let Some(h) = hud.as_mut() {
                    h.set_score("Score: 0");
                    h.set_coins("Coins: 0");
                    h.set_collisions("Collisions: 0");
                } else {
                    debug!("no HUD sink attached, skipping counter reset");
                }
            }
            TickEvent::ScoreChanged { score } => {
                if let Some(h) = hud.as_mut() {
                    h.set_score(&format!("Score: {}", score));
                } else {
                    debug!("no HUD sink attached, skipping score update");
                }
            }
            TickEvent::CoinCollected { coins } => {
                if let Some(h) = hud.as_mut() {
                    h.set_coins(&format!("Coins: {}", coins));
                } else {
                    debug!("no HUD sink attached, skipping coin update");
                }
                if let Some(a) = audio.as_mut() {
                    a.play(SoundCue::Coin);
                } else {
                    debug!("no audio sink attached, skipping coin cue");
                }
            }
            TickEvent::CollisionRecorded { collisions } => {
                if let Some(h) = hud.as_mut() {
                    h.set_collisions(&format!("Collisions: {}", collisions));
                } else {
                    debug!("no HUD sink attached, skipping collision update");
                }
            }
            TickEvent::TimerUpdated { remaining } => {
                if let Some(h) = hud.as_mut() {
                    h.set_timer(&format!("Time: {:.0}", remaining.ceil()));
                } else {
                    debug!("no HUD sink attached, skipping timer update");
                }
            }
            TickEvent::GameOver {
                score,
                coins,
                final_score,
            } => {
                if let Some(h) = hud.as_mut() {
                    h.show_game_over(
                        &format!("Score: {}", score),
                        &format!("Coins: {}", coins),
                        &format!("Total: {}", final_score),
                    );
                } else {
                    debug!("no HUD sink attached, skipping game-over panel");
                }
                if let Some(a) = audio.as_mut() {
                    a.play(SoundCue::Death);
                    a.stop_music();
                } else {
                    debug!("no audio sink attached, skipping death cue");
                }
            }
            // World bookkeeping; nothing for a frontend to show.
            TickEvent::CollisionArmed
            | TickEvent::ObstacleSpawned { .. }
            | TickEvent::CoinSpawned { .. } => {}
        }
    }
}
