//! Self-play game generation CLI.
//!
//! Plays games between the engine and an opponent and writes the game
//! records as JSONL.
//!
//! Usage:
//!   cargo run --release --bin selfplay -- [OPTIONS]
//!
//! Options:
//!   --games N        Number of games to play (default: 10)
//!   --size N         Board side length (default: 7)
//!   --depth N        Search cutoff depth (default: 2)
//!   --opponent KIND  `random` or `engine` (default: random)
//!   --threads N      Number of parallel threads (default: 4)
//!   --seed N         Random seed, 0 for entropy (default: 0)
//!   --output FILE    Output file path (default: stdout)
//!   --quiet          Suppress progress and summary output

use std::env;
use std::fs::File;
use std::io::{self, BufWriter};
use std::process;
use std::str::FromStr;
use std::time::Instant;

use toaster::selfplay::{self, SelfPlayConfig};

/// Parses the value following a flag, exiting with usage on failure.
fn flag_value<T: FromStr>(args: &[String], i: usize, flag: &str) -> T {
    match args.get(i).map(|v| v.parse::<T>()) {
        Some(Ok(v)) => v,
        _ => {
            eprintln!("invalid or missing value for {}", flag);
            print_usage();
            process::exit(1);
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    let mut config = SelfPlayConfig::default();
    let mut output_path: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--games" => {
                i += 1;
                config.num_games = flag_value(&args, i, "--games");
            }
            "--size" => {
                i += 1;
                config.board_size = flag_value(&args, i, "--size");
            }
            "--depth" => {
                i += 1;
                config.depth = flag_value(&args, i, "--depth");
            }
            "--opponent" => {
                i += 1;
                config.opponent = flag_value(&args, i, "--opponent");
            }
            "--threads" => {
                i += 1;
                config.threads = flag_value(&args, i, "--threads");
            }
            "--seed" => {
                i += 1;
                config.seed = flag_value(&args, i, "--seed");
            }
            "--output" => {
                i += 1;
                output_path = Some(flag_value(&args, i, "--output"));
            }
            "--quiet" => {
                config.quiet = true;
            }
            "--help" | "-h" => {
                print_usage();
                return;
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                print_usage();
                process::exit(1);
            }
        }
        i += 1;
    }

    if config.board_size < 2 {
        eprintln!("--size must be at least 2");
        process::exit(1);
    }

    if !config.quiet {
        log::info!(
            "self-play: {} games, {}x{} board, depth {}, opponent {:?}, {} threads",
            config.num_games,
            config.board_size,
            config.board_size,
            config.depth,
            config.opponent,
            config.threads
        );
    }

    let start = Instant::now();
    let games = selfplay::run_self_play(&config);
    let elapsed = start.elapsed();

    if !config.quiet {
        log::info!(
            "completed {} games in {:.1}s",
            games.len(),
            elapsed.as_secs_f64()
        );
        let stderr = io::stderr();
        if let Err(e) = selfplay::print_summary(&games, &mut stderr.lock()) {
            log::error!("failed to write summary: {}", e);
        }
    }

    let written = match &output_path {
        Some(path) => File::create(path)
            .and_then(|file| selfplay::write_jsonl(&games, &mut BufWriter::new(file))),
        None => {
            let stdout = io::stdout();
            let mut writer = BufWriter::new(stdout.lock());
            selfplay::write_jsonl(&games, &mut writer)
        }
    };

    match written {
        Ok(()) => {
            if let (Some(path), false) = (&output_path, config.quiet) {
                log::info!("wrote {} games to {}", games.len(), path);
            }
        }
        Err(e) => {
            log::error!("failed to write output: {}", e);
            process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!("Usage: selfplay [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --games N        Number of games to play (default: 10)");
    eprintln!("  --size N         Board side length (default: 7)");
    eprintln!("  --depth N        Search cutoff depth (default: 2)");
    eprintln!("  --opponent KIND  random or engine (default: random)");
    eprintln!("  --threads N      Number of parallel threads (default: 4)");
    eprintln!("  --seed N         Random seed, 0 for entropy (default: 0)");
    eprintln!("  --output FILE    Output file path (default: stdout)");
    eprintln!("  --quiet          Suppress progress and summary output");
    eprintln!("  --help           Show this help");
}
