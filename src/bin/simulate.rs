//! Balance simulator CLI.
//!
//! Runs headless sessions under autopilot to analyze pacing and tuning.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                       # 200 timed runs
//!   cargo run --bin simulate -- -n 50 --time 30    # 50 runs, 30s timer
//!   cargo run --bin simulate -- --fatal --seed 42  # sudden-death policy
//!   cargo run --bin simulate -- --json             # also write a JSON report

use skydrift::core::config::{CollisionPolicy, GameConfig};
use skydrift::simulator::{run_simulation, SimConfig};
use std::env;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let config = parse_args(&args);

    println!(
        "skydrift balance simulator ({} {})",
        skydrift::build_info::BUILD_COMMIT,
        skydrift::build_info::BUILD_DATE
    );
    println!();
    println!("Configuration:");
    println!("  Runs:       {}", config.runs);
    println!("  Policy:     {:?}", config.game.collision_policy);
    match config.game.game_time {
        Some(secs) => println!("  Timer:      {}s", secs),
        None => println!("  Timer:      off"),
    }
    if let Some(seed) = config.seed {
        println!("  Seed:       {}", seed);
    }
    println!();

    let report = run_simulation(&config);
    println!("{}", report.to_text());

    if args.iter().any(|a| a == "--json") {
        let filename = format!(
            "sim_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        match std::fs::write(&filename, report.to_json()) {
            Ok(()) => println!("JSON report saved to: {}", filename),
            Err(e) => eprintln!("Failed to write JSON report: {}", e),
        }
    }
}

fn parse_args(args: &[String]) -> SimConfig {
    let mut config = SimConfig::default();
    let mut game = GameConfig::timed(60.0);

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--runs" => {
                if i + 1 < args.len() {
                    config.runs = args[i + 1].parse().unwrap_or(config.runs);
                    i += 1;
                }
            }
            "--seed" => {
                if i + 1 < args.len() {
                    config.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "--ticks" => {
                if i + 1 < args.len() {
                    config.max_ticks_per_run =
                        args[i + 1].parse().unwrap_or(config.max_ticks_per_run);
                    i += 1;
                }
            }
            "--time" => {
                if i + 1 < args.len() {
                    game.game_time = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "--fatal" => {
                game.collision_policy = CollisionPolicy::Fatal;
            }
            "--json" => {}
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {other}");
                print_help();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    config.game = game;
    config
}

fn print_help() {
    println!("Usage: simulate [OPTIONS]");
    println!();
    println!("Options:");
    println!("  -n, --runs <N>    Number of sessions to simulate (default 200)");
    println!("  --seed <N>        Seed for reproducible runs");
    println!("  --ticks <N>       Tick cap per session (default 100000)");
    println!("  --time <SECS>     Countdown length (default 60)");
    println!("  --fatal           Sudden-death collisions instead of tally");
    println!("  --json            Also write the full report as JSON");
}
