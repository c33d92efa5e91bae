//! Session runner: autopilot steering plus a stand-in overlap probe.

use super::config::SimConfig;
use super::report::{EndReason, RunStats, SimReport};
use crate::collision::Contact;
use crate::core::session::GameSession;
use crate::world::{EntityId, EntityKind, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::HashSet;

// Host-side overlap geometry. These mirror the collider extents a real
// frontend would configure; the core itself is geometry-agnostic.
const OBSTACLE_HALF_WIDTH: f64 = 0.6;
const OBSTACLE_HALF_HEIGHT: f64 = 1.5;
const COIN_RADIUS: f64 = 0.5;
const ZONE_HALF_WIDTH: f64 = 0.3;
const ZONE_HALF_HEIGHT: f64 = 1.5;

/// Run the configured number of sessions and aggregate the results.
pub fn run_simulation(config: &SimConfig) -> SimReport {
    let mut runs = Vec::with_capacity(config.runs as usize);
    for run_idx in 0..config.runs {
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed + run_idx as u64),
            None => ChaCha8Rng::from_entropy(),
        };
        runs.push(simulate_single_run(config, &mut rng));
    }
    SimReport::from_runs(runs, config.max_ticks_per_run)
}

fn simulate_single_run(config: &SimConfig, rng: &mut ChaCha8Rng) -> RunStats {
    let mut session = GameSession::new(config.game.clone());
    session.start();

    let dt = config.tick_ms as f64 / 1000.0;
    // Entities currently overlapping the player; contacts are reported
    // once on entry, like a physics engine's contact-begin callbacks.
    let mut in_contact: HashSet<EntityId> = HashSet::new();
    let mut ticks: u64 = 0;
    let mut end = EndReason::MaxTicks;

    while ticks < config.max_ticks_per_run {
        steer_toward_gap(&mut session, dt);

        let contacts = probe_contacts(&session.world, session.player.x, session.player.y);
        let fresh: Vec<Contact> = contacts
            .iter()
            .filter(|(id, _)| !in_contact.contains(id))
            .map(|(_, c)| *c)
            .collect();
        in_contact = contacts.iter().map(|(id, _)| *id).collect();

        let result = session.tick(dt, &fresh, rng);
        ticks += 1;

        if result.ended() {
            end = if session.remaining_time() == Some(0.0) {
                EndReason::TimerExpired
            } else {
                EndReason::Collision
            };
            break;
        }
    }
    if session.is_active() {
        session.quit();
    }

    RunStats {
        score: session.score(),
        coins: session.coins(),
        collisions: session.collisions(),
        survived_secs: session.session_time(),
        ticks,
        end,
    }
}

/// Steer toward the nearest upcoming score gate; gates mark the
/// traversable gap. With nothing ahead, drift back to the corridor
/// middle.
fn steer_toward_gap(session: &mut GameSession, dt: f64) {
    let player_x = session.player.x;
    let target_y = session
        .world
        .entities()
        .iter()
        .filter(|e| e.kind == EntityKind::ScoreZone && !e.spent && e.x >= player_x)
        .min_by(|a, b| a.x.total_cmp(&b.x))
        .map(|zone| zone.y)
        .unwrap_or((session.config.player.min_y + session.config.player.max_y) / 2.0);

    let delta = target_y - session.player.y;
    // Ease off near the target to avoid oscillating across it.
    let input = (delta / 0.5).clamp(-1.0, 1.0);
    session.player.steer(input, dt);
}

/// Stand-in for the host's overlap detection.
fn probe_contacts(world: &World, px: f64, py: f64) -> Vec<(EntityId, Contact)> {
    let mut contacts = Vec::new();
    for entity in world.entities() {
        let dx = (entity.x - px).abs();
        let dy = (entity.y - py).abs();
        let hit = match entity.kind {
            EntityKind::Obstacle(_) => dx <= OBSTACLE_HALF_WIDTH && dy <= OBSTACLE_HALF_HEIGHT,
            EntityKind::Coin => dx * dx + dy * dy <= COIN_RADIUS * COIN_RADIUS,
            EntityKind::ScoreZone => dx <= ZONE_HALF_WIDTH && dy <= ZONE_HALF_HEIGHT,
        };
        if hit {
            contacts.push((entity.id, Contact::trigger(entity.id)));
        }
    }
    contacts
}
