//! Simulation report generation.

use serde::Serialize;

/// Why a simulated session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EndReason {
    /// A fatal solid contact.
    Collision,
    /// The countdown ran out.
    TimerExpired,
    /// The tick backstop fired before the session ended on its own.
    MaxTicks,
}

/// Outcome of one simulated session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunStats {
    pub score: u32,
    pub coins: u32,
    pub collisions: u32,
    pub survived_secs: f64,
    pub ticks: u64,
    pub end: EndReason,
}

/// Aggregated results from multiple simulation runs.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub num_runs: u32,
    pub ended_by_collision: u32,
    pub ended_by_timer: u32,
    pub hit_tick_cap: u32,

    pub avg_score: f64,
    pub avg_coins: f64,
    pub avg_collisions: f64,
    pub avg_survival_secs: f64,
    pub best_score: u32,
    pub best_survival_secs: f64,

    /// Individual run stats for detailed analysis.
    pub runs: Vec<RunStats>,
}

impl SimReport {
    pub fn from_runs(runs: Vec<RunStats>, _max_ticks: u64) -> Self {
        let num_runs = runs.len() as u32;
        let n = num_runs.max(1) as f64;

        let ended_by_collision = runs.iter().filter(|r| r.end == EndReason::Collision).count();
        let ended_by_timer = runs
            .iter()
            .filter(|r| r.end == EndReason::TimerExpired)
            .count();
        let hit_tick_cap = runs.iter().filter(|r| r.end == EndReason::MaxTicks).count();

        Self {
            num_runs,
            ended_by_collision: ended_by_collision as u32,
            ended_by_timer: ended_by_timer as u32,
            hit_tick_cap: hit_tick_cap as u32,
            avg_score: runs.iter().map(|r| r.score as f64).sum::<f64>() / n,
            avg_coins: runs.iter().map(|r| r.coins as f64).sum::<f64>() / n,
            avg_collisions: runs.iter().map(|r| r.collisions as f64).sum::<f64>() / n,
            avg_survival_secs: runs.iter().map(|r| r.survived_secs).sum::<f64>() / n,
            best_score: runs.iter().map(|r| r.score).max().unwrap_or(0),
            best_survival_secs: runs
                .iter()
                .map(|r| r.survived_secs)
                .fold(0.0, f64::max),
            runs,
        }
    }

    /// Human-readable summary.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        out.push_str("═══════════════ SIMULATION REPORT ═══════════════\n");
        out.push_str(&format!("Runs:               {}\n", self.num_runs));
        out.push_str(&format!(
            "Ended by collision: {}\n",
            self.ended_by_collision
        ));
        out.push_str(&format!("Ended by timer:     {}\n", self.ended_by_timer));
        out.push_str(&format!("Hit tick cap:       {}\n", self.hit_tick_cap));
        out.push('\n');
        out.push_str(&format!("Avg score:          {:.2}\n", self.avg_score));
        out.push_str(&format!("Avg coins:          {:.2}\n", self.avg_coins));
        out.push_str(&format!("Avg collisions:     {:.2}\n", self.avg_collisions));
        out.push_str(&format!(
            "Avg survival:       {:.1}s\n",
            self.avg_survival_secs
        ));
        out.push_str(&format!("Best score:         {}\n", self.best_score));
        out.push_str(&format!(
            "Best survival:      {:.1}s\n",
            self.best_survival_secs
        ));
        out
    }

    /// Full report as JSON, including per-run stats.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(score: u32, coins: u32, secs: f64, end: EndReason) -> RunStats {
        RunStats {
            score,
            coins,
            collisions: 0,
            survived_secs: secs,
            ticks: (secs * 60.0) as u64,
            end,
        }
    }

    #[test]
    fn test_report_aggregates() {
        let report = SimReport::from_runs(
            vec![
                run(10, 3, 60.0, EndReason::TimerExpired),
                run(4, 1, 22.5, EndReason::Collision),
            ],
            100_000,
        );
        assert_eq!(report.num_runs, 2);
        assert_eq!(report.ended_by_timer, 1);
        assert_eq!(report.ended_by_collision, 1);
        assert!((report.avg_score - 7.0).abs() < f64::EPSILON);
        assert_eq!(report.best_score, 10);
        assert!((report.best_survival_secs - 60.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_report_does_not_divide_by_zero() {
        let report = SimReport::from_runs(Vec::new(), 1);
        assert_eq!(report.num_runs, 0);
        assert_eq!(report.avg_score, 0.0);
    }

    #[test]
    fn test_text_and_json_render() {
        let report = SimReport::from_runs(vec![run(1, 0, 5.0, EndReason::Collision)], 10);
        assert!(report.to_text().contains("Avg score"));
        assert!(report.to_json().contains("\"score\": 1"));
    }
}
