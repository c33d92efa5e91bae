// Game timing constants
pub const TICK_INTERVAL_MS: u64 = 16;

// Spawning constants
pub const DEFAULT_SPAWN_INTERVAL: f64 = 2.0;
pub const DEFAULT_MIN_SPAWN_Y: f64 = 2.0;
pub const DEFAULT_MAX_SPAWN_Y: f64 = 5.0;
pub const DEFAULT_SPAWN_X: f64 = 10.0;
pub const DEFAULT_SCROLL_SPEED: f64 = 2.0;
pub const DEFAULT_LEFT_BOUND: f64 = -10.0;
pub const DEFAULT_SPAWNS_PER_COIN: u32 = 3;

// Obstacles are pushed away from the sampled height by this fraction of
// the [min_y, max_y] range, downward for bottom pieces and upward for
// top pieces, so the traversal gap never closes.
pub const GAP_OFFSET_FRACTION: f64 = 0.4;

// Score gates sit this far inside the gap from the obstacle edge.
pub const SCORE_ZONE_OFFSET: f64 = 2.0;

// Coins are placed at the midpoint of the sampled height and the
// obstacle height shifted by this bias toward the gap.
pub const COIN_VERTICAL_BIAS: f64 = 4.0;

// Scoring constants
pub const DEFAULT_SCORE_PER_GATE: u32 = 1;
pub const DEFAULT_COIN_VALUE: u32 = 1;

// Player constants
pub const DEFAULT_PLAYER_X: f64 = -5.0;
pub const DEFAULT_PLAYER_START_Y: f64 = 2.0;
pub const DEFAULT_PLAYER_MIN_Y: f64 = -5.0;
pub const DEFAULT_PLAYER_MAX_Y: f64 = 5.0;
pub const DEFAULT_PLAYER_MOVE_SPEED: f64 = 5.0;

// Contact handling stays disabled for this long after a session starts.
pub const DEFAULT_WARMUP_SECS: f64 = 0.5;
