//! Routes host-reported overlap contacts into session state changes.
//!
//! The host physics reports player contacts once per contact begin. Each
//! report names a target (a spawned entity, or the ground plane) and
//! whether the overlap was a trigger volume or a solid body. Routing
//! priority is Coin > ScoreZone > solid; coins and gates are one-shot
//! via the entity `spent` latch, so duplicate reports cannot double
//! count.

use crate::core::config::{CollisionPolicy, GameConfig};
use crate::core::game_state::GameState;
use crate::core::tick::TickEvent;
use crate::world::{EntityId, EntityKind, Player, World};
use log::debug;

/// How the host detected the overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactKind {
    /// Trigger-volume overlap (coins, score gates, trigger obstacles).
    Trigger,
    /// Solid-body contact (obstacles, ground, anything untagged).
    Solid,
}

/// What the player touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactTarget {
    Entity(EntityId),
    /// The ground plane or any other solid the world does not track.
    Ground,
}

/// One overlap report from the host physics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contact {
    pub target: ContactTarget,
    pub kind: ContactKind,
}

impl Contact {
    pub fn trigger(id: EntityId) -> Self {
        Self {
            target: ContactTarget::Entity(id),
            kind: ContactKind::Trigger,
        }
    }

    pub fn solid(id: EntityId) -> Self {
        Self {
            target: ContactTarget::Entity(id),
            kind: ContactKind::Solid,
        }
    }

    pub fn solid_ground() -> Self {
        Self {
            target: ContactTarget::Ground,
            kind: ContactKind::Solid,
        }
    }
}

/// Route a tick's contacts in detection order.
///
/// Contacts are dropped while the player warm-up gate is closed. A fatal
/// solid contact ends the session; any contacts after it in the same
/// tick fall through the phase guards as no-ops.
pub fn route_contacts(
    contacts: &[Contact],
    world: &mut World,
    player: &Player,
    state: &mut GameState,
    config: &GameConfig,
) -> Vec<TickEvent> {
    let mut events = Vec::new();

    for contact in contacts {
        if !player.is_armed() {
            debug!("contact ignored during warm-up: {:?}", contact);
            continue;
        }

        match contact.target {
            ContactTarget::Ground => {
                solid_hit(state, config, &mut events);
            }
            ContactTarget::Entity(id) => match world.get(id).map(|e| (e.kind, e.spent)) {
                Some((EntityKind::Coin, false)) => {
                    // Latch before removal so a duplicate report in the
                    // same batch cannot collect twice.
                    if let Some(coin) = world.get_mut(id) {
                        coin.spent = true;
                    }
                    if state.collect_coin() {
                        events.push(TickEvent::CoinCollected { coins: state.coins });
                    }
                    world.remove(id);
                }
                Some((EntityKind::ScoreZone, false)) => {
                    if let Some(zone) = world.get_mut(id) {
                        zone.spent = true;
                    }
                    if state.add_score() {
                        events.push(TickEvent::ScoreChanged { score: state.score });
                    }
                }
                Some((EntityKind::Coin, true)) | Some((EntityKind::ScoreZone, true)) => {
                    debug!("repeat contact with spent entity {:?}", id);
                }
                Some((EntityKind::Obstacle(_), _)) => {
                    solid_hit(state, config, &mut events);
                }
                None => {
                    // Despawned before the report arrived. A solid report
                    // still counts: the player hit something real.
                    if contact.kind == ContactKind::Solid {
                        solid_hit(state, config, &mut events);
                    } else {
                        debug!("trigger contact with unknown entity {:?}", id);
                    }
                }
            },
        }
    }

    events
}

fn solid_hit(state: &mut GameState, config: &GameConfig, events: &mut Vec<TickEvent>) {
    match config.collision_policy {
        CollisionPolicy::Fatal => {
            if let Some(final_score) = state.end() {
                events.push(TickEvent::GameOver {
                    score: state.score,
                    coins: state.coins,
                    final_score,
                });
            }
        }
        CollisionPolicy::Tally => {
            if state.add_collision() {
                events.push(TickEvent::CollisionRecorded {
                    collisions: state.collisions,
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::PlayerConfig;

    fn setup(policy: CollisionPolicy) -> (GameConfig, GameState, World, Player) {
        let config = GameConfig {
            collision_policy: policy,
            warmup_secs: 0.0,
            ..Default::default()
        };
        let mut state = GameState::new(&config);
        state.start();
        let player = Player::new(&PlayerConfig::default(), 0.0);
        (config, state, World::new(), player)
    }

    #[test]
    fn test_coin_collected_once_despite_duplicate_reports() {
        let (config, mut state, mut world, player) = setup(CollisionPolicy::Fatal);
        let coin = world.spawn(EntityKind::Coin, 0.0, 0.0);

        let contacts = [Contact::trigger(coin), Contact::trigger(coin)];
        let events = route_contacts(&contacts, &mut world, &player, &mut state, &config);

        assert_eq!(state.coins, 1);
        assert_eq!(
            events
                .iter()
                .filter(|e| matches!(e, TickEvent::CoinCollected { .. }))
                .count(),
            1
        );
        assert!(world.get(coin).is_none(), "coin is destroyed on pickup");
    }

    #[test]
    fn test_score_zone_fires_at_most_once() {
        let (config, mut state, mut world, player) = setup(CollisionPolicy::Fatal);
        let zone = world.spawn(EntityKind::ScoreZone, 0.0, 0.0);

        for _ in 0..5 {
            route_contacts(
                &[Contact::trigger(zone)],
                &mut world,
                &player,
                &mut state,
                &config,
            );
        }

        assert_eq!(state.score, 1);
        assert!(world.get(zone).is_some(), "gates persist after firing");
        assert!(world.get(zone).unwrap().spent);
    }

    #[test]
    fn test_fatal_obstacle_ends_session() {
        let (config, mut state, mut world, player) = setup(CollisionPolicy::Fatal);
        let pipe = world.spawn(EntityKind::Obstacle(crate::world::Side::Top), 0.0, 0.0);

        let events = route_contacts(
            &[Contact::trigger(pipe)],
            &mut world,
            &player,
            &mut state,
            &config,
        );

        assert!(!state.is_active());
        assert!(matches!(events[0], TickEvent::GameOver { .. }));
    }

    #[test]
    fn test_tally_policy_counts_and_continues() {
        let (config, mut state, mut world, player) = setup(CollisionPolicy::Tally);
        let pipe = world.spawn(EntityKind::Obstacle(crate::world::Side::Bottom), 0.0, 0.0);

        let events = route_contacts(
            &[Contact::solid(pipe), Contact::solid_ground()],
            &mut world,
            &player,
            &mut state,
            &config,
        );

        assert!(state.is_active());
        assert_eq!(state.collisions, 2);
        assert_eq!(events.len(), 2);
    }

    #[test]
    fn test_ground_contact_is_fatal_under_fatal_policy() {
        let (config, mut state, mut world, player) = setup(CollisionPolicy::Fatal);
        let events = route_contacts(
            &[Contact::solid_ground()],
            &mut world,
            &player,
            &mut state,
            &config,
        );
        assert!(!state.is_active());
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn test_contacts_dropped_while_warming_up() {
        let config = GameConfig::default(); // 0.5s warm-up
        let mut state = GameState::new(&config);
        state.start();
        let player = Player::new(&PlayerConfig::default(), config.warmup_secs);
        let mut world = World::new();
        let coin = world.spawn(EntityKind::Coin, 0.0, 0.0);

        let events = route_contacts(
            &[Contact::trigger(coin), Contact::solid_ground()],
            &mut world,
            &player,
            &mut state,
            &config,
        );

        assert!(events.is_empty());
        assert!(state.is_active());
        assert_eq!(state.coins, 0);
        assert!(world.get(coin).is_some());
    }

    #[test]
    fn test_coin_beats_fatal_in_detection_order() {
        // A coin pickup reported before a fatal hit in the same tick
        // still lands; everything after the fatal hit is a no-op.
        let (config, mut state, mut world, player) = setup(CollisionPolicy::Fatal);
        let coin = world.spawn(EntityKind::Coin, 0.0, 0.0);
        let late_coin = world.spawn(EntityKind::Coin, 0.0, 1.0);

        let events = route_contacts(
            &[
                Contact::trigger(coin),
                Contact::solid_ground(),
                Contact::trigger(late_coin),
            ],
            &mut world,
            &player,
            &mut state,
            &config,
        );

        assert_eq!(state.coins, 1);
        assert_eq!(state.final_score(), Some(1));
        // Coin + game over; the post-mortem coin contact was a no-op.
        assert_eq!(events.len(), 2);
    }

    #[test]
    fn test_unknown_trigger_ignored_unknown_solid_counts() {
        let (config, mut state, mut world, player) = setup(CollisionPolicy::Tally);
        let ghost = EntityId(999);

        let events = route_contacts(
            &[Contact::trigger(ghost)],
            &mut world,
            &player,
            &mut state,
            &config,
        );
        assert!(events.is_empty());

        let events = route_contacts(
            &[Contact::solid(ghost)],
            &mut world,
            &player,
            &mut state,
            &config,
        );
        assert_eq!(state.collisions, 1);
        assert_eq!(events.len(), 1);
    }
}
