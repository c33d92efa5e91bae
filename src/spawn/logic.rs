//! Spawn placement logic.
//!
//! Each spawn places one obstacle, one score gate inside the traversal
//! gap, and, on every Nth spawn, one coin on the obstacle's side of the
//! corridor.

use super::types::SpawnScheduler;
use crate::core::config::SpawnConfig;
use crate::core::constants::{COIN_VERTICAL_BIAS, GAP_OFFSET_FRACTION, SCORE_ZONE_OFFSET};
use crate::world::{EntityId, EntityKind, Side, World};
use rand::Rng;

/// Everything placed by a single spawn.
#[derive(Debug, Clone)]
pub struct SpawnBatch {
    pub obstacle: EntityId,
    pub side: Side,
    pub obstacle_y: f64,
    pub score_zone: EntityId,
    pub coin: Option<EntityId>,
    pub coin_y: Option<f64>,
}

/// Advance the interval timer and spawn once it fills. Returns what was
/// placed, or `None` when no spawn was due (or the scheduler is stopped).
pub fn tick_spawner<R: Rng>(
    scheduler: &mut SpawnScheduler,
    world: &mut World,
    config: &SpawnConfig,
    dt: f64,
    rng: &mut R,
) -> Option<SpawnBatch> {
    if !scheduler.is_running() {
        return None;
    }

    scheduler.accumulator += dt;
    if scheduler.accumulator < config.interval {
        return None;
    }
    scheduler.accumulator = 0.0;

    Some(spawn_batch(scheduler, world, config, rng))
}

/// Place one obstacle, its paired score gate, and a periodic coin.
fn spawn_batch<R: Rng>(
    scheduler: &mut SpawnScheduler,
    world: &mut World,
    config: &SpawnConfig,
    rng: &mut R,
) -> SpawnBatch {
    let sample = rng.gen_range(config.min_y..config.max_y);
    let range = config.max_y - config.min_y;

    let side = scheduler.next_side;
    // Push the obstacle away from the sampled height so the gap around
    // the sample stays navigable.
    let obstacle_y = match side {
        Side::Bottom => sample - range * GAP_OFFSET_FRACTION,
        Side::Top => sample + range * GAP_OFFSET_FRACTION,
    };
    let obstacle = world.spawn(EntityKind::Obstacle(side), config.spawn_x, obstacle_y);

    // The score gate sits in the gap the player traverses.
    let zone_y = match side {
        Side::Bottom => obstacle_y + SCORE_ZONE_OFFSET,
        Side::Top => obstacle_y - SCORE_ZONE_OFFSET,
    };
    let score_zone = world.spawn(EntityKind::ScoreZone, config.spawn_x, zone_y);

    scheduler.spawned += 1;

    // Every Nth obstacle brings a coin, placed midway between the sample
    // and the obstacle height biased toward the gap.
    let (coin, coin_y) = if config.spawns_per_coin > 0
        && scheduler.spawned % config.spawns_per_coin == 0
    {
        let y = match side {
            Side::Bottom => (sample + obstacle_y + COIN_VERTICAL_BIAS) / 2.0,
            Side::Top => (sample + obstacle_y - COIN_VERTICAL_BIAS) / 2.0,
        };
        (Some(world.spawn(EntityKind::Coin, config.spawn_x, y)), Some(y))
    } else {
        (None, None)
    };

    scheduler.next_side = side.flipped();

    SpawnBatch {
        obstacle,
        side,
        obstacle_y,
        score_zone,
        coin,
        coin_y,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn test_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(42)
    }

    fn running_scheduler() -> SpawnScheduler {
        let mut sched = SpawnScheduler::new();
        sched.start();
        sched
    }

    #[test]
    fn test_stopped_scheduler_never_spawns() {
        let mut sched = SpawnScheduler::new();
        let mut world = World::new();
        let config = SpawnConfig::default();
        let mut rng = test_rng();
        for _ in 0..100 {
            assert!(tick_spawner(&mut sched, &mut world, &config, 1.0, &mut rng).is_none());
        }
        assert!(world.is_empty());
    }

    #[test]
    fn test_spawn_fires_when_interval_fills() {
        let mut sched = running_scheduler();
        let mut world = World::new();
        let config = SpawnConfig::default();
        let mut rng = test_rng();

        assert!(tick_spawner(&mut sched, &mut world, &config, 1.0, &mut rng).is_none());
        let batch = tick_spawner(&mut sched, &mut world, &config, 1.0, &mut rng);
        assert!(batch.is_some());
        // Accumulator resets after a spawn.
        assert!((sched.accumulator - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_sides_strictly_alternate() {
        let mut sched = running_scheduler();
        let mut world = World::new();
        let config = SpawnConfig::default();
        let mut rng = test_rng();

        let mut sides = Vec::new();
        for _ in 0..8 {
            let batch = tick_spawner(&mut sched, &mut world, &config, config.interval, &mut rng)
                .expect("a full interval must spawn");
            sides.push(batch.side);
        }
        for pair in sides.windows(2) {
            assert_ne!(pair[0], pair[1], "consecutive spawns must alternate sides");
        }
        assert_eq!(sides[0], Side::Bottom);
    }

    #[test]
    fn test_coin_every_third_spawn() {
        let mut sched = running_scheduler();
        let mut world = World::new();
        let config = SpawnConfig::default();
        let mut rng = test_rng();

        for n in 1..=9u32 {
            let batch = tick_spawner(&mut sched, &mut world, &config, config.interval, &mut rng)
                .unwrap();
            if n % 3 == 0 {
                assert!(batch.coin.is_some(), "spawn #{n} should carry a coin");
            } else {
                assert!(batch.coin.is_none(), "spawn #{n} should not carry a coin");
            }
        }
    }

    #[test]
    fn test_obstacle_offset_stays_off_the_sample() {
        let config = SpawnConfig::default();
        let range = config.max_y - config.min_y;
        let mut sched = running_scheduler();
        let mut world = World::new();
        let mut rng = test_rng();

        for _ in 0..20 {
            let batch = tick_spawner(&mut sched, &mut world, &config, config.interval, &mut rng)
                .unwrap();
            // Recover the sample from the stored offset.
            let sample = match batch.side {
                Side::Bottom => batch.obstacle_y + range * GAP_OFFSET_FRACTION,
                Side::Top => batch.obstacle_y - range * GAP_OFFSET_FRACTION,
            };
            assert!(sample >= config.min_y && sample <= config.max_y);
        }
    }

    #[test]
    fn test_score_zone_sits_inside_the_gap() {
        let mut sched = running_scheduler();
        let mut world = World::new();
        let config = SpawnConfig::default();
        let mut rng = test_rng();

        for _ in 0..10 {
            let batch = tick_spawner(&mut sched, &mut world, &config, config.interval, &mut rng)
                .unwrap();
            let zone = world.get(batch.score_zone).unwrap();
            match batch.side {
                Side::Bottom => {
                    assert!((zone.y - (batch.obstacle_y + SCORE_ZONE_OFFSET)).abs() < 1e-9)
                }
                Side::Top => {
                    assert!((zone.y - (batch.obstacle_y - SCORE_ZONE_OFFSET)).abs() < 1e-9)
                }
            }
            assert!((zone.x - config.spawn_x).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn test_coin_placed_at_biased_midpoint() {
        let config = SpawnConfig {
            spawns_per_coin: 1,
            ..Default::default()
        };
        let range = config.max_y - config.min_y;
        let mut sched = running_scheduler();
        let mut world = World::new();
        let mut rng = test_rng();

        for _ in 0..6 {
            let batch = tick_spawner(&mut sched, &mut world, &config, config.interval, &mut rng)
                .unwrap();
            let coin_y = batch.coin_y.expect("every spawn carries a coin");
            let sample = match batch.side {
                Side::Bottom => batch.obstacle_y + range * GAP_OFFSET_FRACTION,
                Side::Top => batch.obstacle_y - range * GAP_OFFSET_FRACTION,
            };
            let expected = match batch.side {
                Side::Bottom => (sample + batch.obstacle_y + COIN_VERTICAL_BIAS) / 2.0,
                Side::Top => (sample + batch.obstacle_y - COIN_VERTICAL_BIAS) / 2.0,
            };
            assert!((coin_y - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn test_spawn_count_tracks_batches() {
        let mut sched = running_scheduler();
        let mut world = World::new();
        let config = SpawnConfig::default();
        let mut rng = test_rng();

        for _ in 0..5 {
            tick_spawner(&mut sched, &mut world, &config, config.interval, &mut rng);
        }
        assert_eq!(sched.spawned, 5);
        // Obstacle + zone per spawn, coin on spawn #3.
        assert_eq!(world.len(), 5 * 2 + 1);
    }
}
