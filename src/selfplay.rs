//! Self-play game generation.
//!
//! Plays complete games from the standard opening between the engine and an
//! opponent (the engine itself, or a random mover), recording every action.
//! Games run on a rayon pool when more than one thread is configured, and
//! records are written as JSONL.

use std::io::{self, Write};
use std::str::FromStr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::board::{Action, Board, Side};
use crate::movegen::{apply_action, legal_actions, Move};
use crate::protocol::encode_board;
use crate::search::{Searcher, DEFAULT_CUTOFF_DEPTH};

/// Who the engine plays against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Opponent {
    /// The engine plays both sides.
    Engine,
    /// A uniformly random legal mover.
    Random,
}

impl FromStr for Opponent {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "engine" => Ok(Opponent::Engine),
            "random" => Ok(Opponent::Random),
            other => Err(format!("unknown opponent '{}'", other)),
        }
    }
}

/// Configuration for self-play game generation.
#[derive(Debug, Clone)]
pub struct SelfPlayConfig {
    /// Number of games to play.
    pub num_games: usize,
    /// Board side length.
    pub board_size: usize,
    /// Search cutoff depth for the engine.
    pub depth: u32,
    pub opponent: Opponent,
    /// Number of parallel threads for concurrent games.
    pub threads: usize,
    /// Random seed (0 = use entropy).
    pub seed: u64,
    /// Suppress per-game progress output.
    pub quiet: bool,
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        SelfPlayConfig {
            num_games: 10,
            board_size: 7,
            depth: DEFAULT_CUTOFF_DEPTH,
            opponent: Opponent::Random,
            threads: 4,
            seed: 0,
            quiet: false,
        }
    }
}

/// A complete self-play game record.
#[derive(Debug, Clone, Serialize)]
pub struct GameRecord {
    /// Sequential game ID.
    pub game_id: usize,
    pub board_size: usize,
    pub opponent: Opponent,
    /// The side the engine played. Against itself the engine plays both;
    /// this is then reported as Max.
    pub engine_side: Side,
    /// Every ply in order, as `srcX:srcY:dstX:dstY:` or `pass`.
    pub moves: Vec<String>,
    /// Final position, one encoded row per entry.
    pub final_board: Vec<String>,
    pub max_tiles: usize,
    pub min_tiles: usize,
    /// The side with more tiles at the end, if any.
    pub winner: Option<Side>,
}

impl GameRecord {
    pub fn plies(&self) -> usize {
        self.moves.len()
    }
}

/// Picks the engine's action for `side`. The engine always searches as Max,
/// so Min positions are presented with the colours swapped.
fn engine_action(board: &Board, side: Side, ply: i64, depth: u32) -> Option<Action> {
    let view = match side {
        Side::Max => board.clone(),
        Side::Min => board.swapped(),
    };
    let mut searcher = Searcher::new(depth, ply);
    searcher.search(&Move::root(view)).best.and_then(|m| m.action())
}

fn random_action(board: &Board, side: Side, rng: &mut SmallRng) -> Option<Action> {
    let legal = legal_actions(board, side);
    if legal.is_empty() {
        return None;
    }
    Some(legal[rng.gen_range(0..legal.len())])
}

/// Plays one game to completion.
///
/// The game ends when the position is terminal for the current ply, or
/// when both sides pass in a row.
pub fn play_game(config: &SelfPlayConfig, game_id: usize, rng: &mut SmallRng) -> GameRecord {
    let engine_side = match config.opponent {
        Opponent::Engine => Side::Max,
        Opponent::Random if game_id % 2 == 1 => Side::Min,
        Opponent::Random => Side::Max,
    };

    let mut board = Board::opening(config.board_size);
    let mut side = Side::Max;
    let mut ply = 0i64;
    let mut passes = 0;
    let mut moves = Vec::new();

    while !board.is_terminal(ply) && passes < 2 {
        let engine_to_move = config.opponent == Opponent::Engine || side == engine_side;
        let action = if engine_to_move {
            engine_action(&board, side, ply, config.depth)
        } else {
            random_action(&board, side, rng)
        };

        match action {
            Some(a) => {
                board = apply_action(&board, a, side);
                moves.push(a.to_string());
                passes = 0;
            }
            None => {
                moves.push("pass".to_string());
                passes += 1;
            }
        }
        side = side.opponent();
        ply += 1;
    }

    let counts = board.counts();
    GameRecord {
        game_id,
        board_size: config.board_size,
        opponent: config.opponent,
        engine_side,
        moves,
        final_board: encode_board(&board),
        max_tiles: counts.max,
        min_tiles: counts.min,
        winner: board.leader(),
    }
}

fn outcome_label(game: &GameRecord) -> String {
    match game.winner {
        Some(w) => format!("{} wins", w.name()),
        None => "draw".to_string(),
    }
}

fn seeded_rng(seed: u64, offset: usize) -> SmallRng {
    if seed != 0 {
        SmallRng::seed_from_u64(seed.wrapping_add(offset as u64))
    } else {
        SmallRng::from_entropy()
    }
}

/// Plays game `game_id` with its own seeded rng and logs the result.
/// `finished` yields the progress number once the game is done.
fn play_and_report(
    config: &SelfPlayConfig,
    game_id: usize,
    finished: impl FnOnce() -> usize,
) -> GameRecord {
    let mut rng = seeded_rng(config.seed, game_id);
    let started = Instant::now();
    let game = play_game(config, game_id, &mut rng);
    if !config.quiet {
        log::info!(
            "game {}/{}: {} after {} plies ({:.1}s)",
            finished(),
            config.num_games,
            outcome_label(&game),
            game.plies(),
            started.elapsed().as_secs_f64(),
        );
    }
    game
}

/// Runs self-play generation, producing multiple game records.
///
/// When `config.threads > 1`, games are played concurrently using rayon.
pub fn run_self_play(config: &SelfPlayConfig) -> Vec<GameRecord> {
    let mut games = Vec::with_capacity(config.num_games);
    run_self_play_with_callback(config, |game| {
        games.push(game);
    });
    games.sort_by_key(|g| g.game_id);
    games
}

/// Runs self-play generation, calling `on_game` with each completed game.
pub fn run_self_play_with_callback<F>(config: &SelfPlayConfig, on_game: F)
where
    F: FnMut(GameRecord) + Send,
{
    if config.threads > 1 {
        run_self_play_parallel(config, on_game);
    } else {
        run_self_play_sequential(config, on_game);
    }
}

fn run_self_play_sequential<F>(config: &SelfPlayConfig, mut on_game: F)
where
    F: FnMut(GameRecord),
{
    for i in 0..config.num_games {
        on_game(play_and_report(config, i, || i + 1));
    }
}

/// Plays games concurrently on a dedicated rayon pool and hands them to
/// `on_game` on the calling thread as they finish.
fn run_self_play_parallel<F>(config: &SelfPlayConfig, mut on_game: F)
where
    F: FnMut(GameRecord) + Send,
{
    use rayon::prelude::*;
    use std::sync::mpsc;

    let (tx, rx) = mpsc::channel::<GameRecord>();

    let pool = match rayon::ThreadPoolBuilder::new()
        .num_threads(config.threads)
        .build()
    {
        Ok(pool) => pool,
        Err(e) => {
            log::warn!("falling back to sequential self-play: {}", e);
            return run_self_play_sequential(config, on_game);
        }
    };

    let shared = config.clone();
    let worker = std::thread::spawn(move || {
        let completed = AtomicUsize::new(0);
        pool.install(|| {
            (0..shared.num_games).into_par_iter().for_each_with(tx, |tx, i| {
                let game = play_and_report(&shared, i, || {
                    completed.fetch_add(1, Ordering::Relaxed) + 1
                });
                // The receiver only goes away if the caller stopped listening.
                let _ = tx.send(game);
            });
        });
    });

    for game in rx {
        on_game(game);
    }

    if worker.join().is_err() {
        log::error!("self-play worker thread panicked");
    }
}

/// Writes game records as JSONL (one JSON object per line).
pub fn write_jsonl<W: Write>(games: &[GameRecord], out: &mut W) -> io::Result<()> {
    for game in games {
        serde_json::to_writer(&mut *out, game)?;
        writeln!(out)?;
    }
    out.flush()
}

/// Tally of engine results across games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub wins: usize,
    pub losses: usize,
    pub draws: usize,
    pub total_plies: usize,
}

/// Counts engine wins, losses and draws. Engine-vs-engine games count from
/// Max's point of view.
pub fn summarize(games: &[GameRecord]) -> Summary {
    let mut summary = Summary::default();
    for game in games {
        match game.winner {
            Some(w) if w == game.engine_side => summary.wins += 1,
            Some(_) => summary.losses += 1,
            None => summary.draws += 1,
        }
        summary.total_plies += game.plies();
    }
    summary
}

/// Writes a human-readable summary.
pub fn print_summary<W: Write>(games: &[GameRecord], out: &mut W) -> io::Result<()> {
    let s = summarize(games);
    let n = games.len().max(1);
    writeln!(out, "=== Self-play summary ({} games) ===", games.len())?;
    writeln!(
        out,
        "engine: {} wins, {} losses, {} draws ({:.1}% wins)",
        s.wins,
        s.losses,
        s.draws,
        s.wins as f64 * 100.0 / n as f64
    )?;
    writeln!(out, "average length: {:.1} plies", s.total_plies as f64 / n as f64)
}
