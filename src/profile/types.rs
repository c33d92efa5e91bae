//! The flat player record written to disk.

use serde::{Deserialize, Serialize};

/// Lifetime totals and last-session snapshot, stored as a single JSON
/// document. Missing fields deserialize to zero so older files keep
/// loading.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerProfile {
    #[serde(default)]
    pub total_score: u64,
    #[serde(default)]
    pub total_coins: u64,
    #[serde(default)]
    pub total_collisions: u64,
    /// Longest session survival time in seconds.
    #[serde(default)]
    pub best_time: f64,
    /// Unix timestamp of the last recorded session.
    #[serde(default)]
    pub last_played: i64,

    #[serde(default)]
    pub session_score: u32,
    #[serde(default)]
    pub session_coins: u32,
    #[serde(default)]
    pub session_collisions: u32,
    #[serde(default)]
    pub session_time: f64,
}

impl PlayerProfile {
    /// Fold a finished session into the lifetime totals.
    pub fn record_session(
        &mut self,
        score: u32,
        coins: u32,
        collisions: u32,
        time_secs: f64,
        now: i64,
    ) {
        self.session_score = score;
        self.session_coins = coins;
        self.session_collisions = collisions;
        self.session_time = time_secs;

        self.total_score += u64::from(score);
        self.total_coins += u64::from(coins);
        self.total_collisions += u64::from(collisions);
        if time_secs > self.best_time {
            self.best_time = time_secs;
        }
        self.last_played = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile_is_zeroed() {
        let profile = PlayerProfile::default();
        assert_eq!(profile.total_score, 0);
        assert_eq!(profile.best_time, 0.0);
        assert_eq!(profile.last_played, 0);
    }

    #[test]
    fn test_record_session_accumulates_totals() {
        let mut profile = PlayerProfile::default();
        profile.record_session(5, 2, 1, 42.0, 1_700_000_000);
        profile.record_session(3, 0, 4, 10.0, 1_700_000_100);

        assert_eq!(profile.total_score, 8);
        assert_eq!(profile.total_coins, 2);
        assert_eq!(profile.total_collisions, 5);
        assert_eq!(profile.session_score, 3);
        assert_eq!(profile.session_time, 10.0);
        assert_eq!(profile.last_played, 1_700_000_100);
    }

    #[test]
    fn test_best_time_only_raised() {
        let mut profile = PlayerProfile::default();
        profile.record_session(0, 0, 0, 30.0, 1);
        assert_eq!(profile.best_time, 30.0);
        profile.record_session(0, 0, 0, 12.0, 2);
        assert_eq!(profile.best_time, 30.0);
        profile.record_session(0, 0, 0, 31.5, 3);
        assert_eq!(profile.best_time, 31.5);
    }

    #[test]
    fn test_partial_document_loads_with_defaults() {
        let profile: PlayerProfile =
            serde_json::from_str(r#"{"total_score": 12, "best_time": 9.5}"#).unwrap();
        assert_eq!(profile.total_score, 12);
        assert_eq!(profile.best_time, 9.5);
        assert_eq!(profile.total_coins, 0);
        assert_eq!(profile.session_score, 0);
    }
}
