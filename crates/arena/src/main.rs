//! Arena CLI
//!
//! Run matches between agents on the tokens game.

use std::env;
use std::path::Path;
use std::time::Duration;

use arena::{MatchConfig, MatchReport, MatchRunner};
use game_core::{Agent, EngineConfig};
use log::info;
use minimax_engine::MinimaxEngine;
use random_engine::RandomAgent;
use tokens_game::{TokensEvaluator, TokensState};

fn print_usage() {
    println!("Tokens Arena");
    println!();
    println!("Usage:");
    println!("  arena match <agent1> <agent2> [--games N] [--depth D] [--movetime MS]");
    println!("              [--config PATH] [--save PATH]");
    println!();
    println!("Agents:");
    println!("  minimax       - Iterative-deepening alpha-beta");
    println!("  random        - Uniform random baseline");
    println!();
    println!("Options:");
    println!("  --games N     - Games to play (default 10)");
    println!("  --depth D     - Depth limit in plies (default 6)");
    println!("  --movetime MS - Budget per move in milliseconds (default 100;");
    println!("                  0 lets scheduled agents use their own allocation)");
    println!("  --config PATH - TOML engine config for minimax agents");
    println!("  --save PATH   - Write the match report as JSON");
    println!();
    println!("Examples:");
    println!("  arena match minimax random --games 20 --depth 6");
    println!("  arena match minimax minimax --movetime 250");
}

fn create_agent(spec: &str, config: &EngineConfig) -> Box<dyn Agent<TokensState>> {
    match spec.to_lowercase().as_str() {
        "minimax" | "alphabeta" => Box::new(MinimaxEngine::with_config(
            TokensEvaluator,
            config.clone(),
        )),
        "random" => Box::new(RandomAgent::new()),
        _ => {
            eprintln!("Unknown agent: {}, using random", spec);
            Box::new(RandomAgent::new())
        }
    }
}

fn run_match(args: &[String]) {
    if args.len() < 2 {
        eprintln!("Error: match requires two agent specifications");
        print_usage();
        return;
    }

    let agent1_spec = &args[0];
    let agent2_spec = &args[1];

    // Parse optional arguments
    let mut num_games: u32 = 10;
    let mut max_depth: u8 = 6;
    let mut move_time_ms: u64 = 100;
    let mut engine_config = EngineConfig::default();
    let mut save_path: Option<String> = None;

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--games" | "-g" => {
                if i + 1 < args.len() {
                    num_games = args[i + 1].parse().unwrap_or(10);
                    i += 1;
                }
            }
            "--depth" | "-d" => {
                if i + 1 < args.len() {
                    max_depth = args[i + 1].parse().unwrap_or(6);
                    i += 1;
                }
            }
            "--movetime" | "-t" => {
                if i + 1 < args.len() {
                    move_time_ms = args[i + 1].parse().unwrap_or(100);
                    i += 1;
                }
            }
            "--config" | "-c" => {
                if i + 1 < args.len() {
                    match EngineConfig::load(Path::new(&args[i + 1])) {
                        Ok(config) => engine_config = config,
                        Err(e) => eprintln!("Warning: {}; using default config", e),
                    }
                    i += 1;
                }
            }
            "--save" | "-s" => {
                if i + 1 < args.len() {
                    save_path = Some(args[i + 1].clone());
                    i += 1;
                }
            }
            _ => {}
        }
        i += 1;
    }

    println!("=== Match: {} vs {} ===", agent1_spec, agent2_spec);
    println!(
        "Games: {}, depth: {}, movetime: {} ms",
        num_games, max_depth, move_time_ms
    );
    println!();

    let mut agent1 = create_agent(agent1_spec, &engine_config);
    let mut agent2 = create_agent(agent2_spec, &engine_config);

    let config = MatchConfig {
        num_games,
        max_depth,
        time_per_move: if move_time_ms == 0 {
            None
        } else {
            Some(Duration::from_millis(move_time_ms))
        },
        verbose: true,
        ..Default::default()
    };

    let runner = MatchRunner::new(config);
    let result = runner.run_match(agent1.as_mut(), agent2.as_mut());

    let report = MatchReport {
        first: agent1_spec.to_string(),
        second: agent2_spec.to_string(),
        games: num_games,
        max_depth,
        result,
    };
    println!();
    report.print_report();

    if let Some(path) = save_path {
        match report.save(Path::new(&path)) {
            Ok(()) => info!("report written to {}", path),
            Err(e) => eprintln!("Warning: failed to save report: {}", e),
        }
    }
}

fn main() {
    simple_logger::init_with_level(log::Level::Info).unwrap();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    match args[1].as_str() {
        "match" => run_match(&args[2..]),
        "help" | "--help" | "-h" => print_usage(),
        _ => {
            eprintln!("Unknown command: {}", args[1]);
            print_usage();
        }
    }
}
