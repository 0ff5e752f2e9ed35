//! Engine state management.
//!
//! Holds the engine configuration and answers the two protocol commands:
//! `identify` with the agent name, `move` with the action chosen by
//! alpha-beta search or `pass` when no legal move exists.

use std::env;
use std::io::{self, Write};

use crate::board::{Action, MOVE_LIMIT};
use crate::movegen::Move;
use crate::protocol::request::{read_move_request, MoveRequest};
use crate::search::{Searcher, DEFAULT_CUTOFF_DEPTH};

/// Name reported in response to `identify`.
pub const AGENT_NAME: &str = "Frakking Toaster";

/// Environment variable overriding the search cutoff depth.
pub const DEPTH_ENV: &str = "TOASTER_DEPTH";

/// Engine settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub name: String,
    /// Plies searched below the root.
    pub cutoff_depth: u32,
    /// Move index at which the game is over.
    pub move_limit: i64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            name: AGENT_NAME.to_string(),
            cutoff_depth: DEFAULT_CUTOFF_DEPTH,
            move_limit: MOVE_LIMIT,
        }
    }
}

impl EngineConfig {
    /// Default settings with the cutoff depth taken from `TOASTER_DEPTH`
    /// when it holds a valid number.
    pub fn from_env() -> Self {
        EngineConfig::with_depth_override(env::var(DEPTH_ENV).ok().as_deref())
    }

    /// Default settings, with the cutoff depth replaced by `raw` if it parses.
    pub fn with_depth_override(raw: Option<&str>) -> Self {
        let mut config = EngineConfig::default();
        if let Some(raw) = raw {
            match raw.trim().parse::<u32>() {
                Ok(depth) => config.cutoff_depth = depth,
                Err(_) => log::warn!("ignoring invalid {}: '{}'", DEPTH_ENV, raw),
            }
        }
        config
    }
}

/// Answers protocol commands.
pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Self {
        Engine { config }
    }

    /// Handles `identify`: writes the agent name.
    pub fn handle_identify<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self.config.name)?;
        out.flush()
    }

    /// Handles `move`: reads the request from `lines` and writes the chosen
    /// action or `pass`. A malformed request is logged and produces no
    /// output at all.
    pub fn handle_move<I, W>(&self, lines: &mut I, out: &mut W) -> io::Result<()>
    where
        I: Iterator<Item = io::Result<String>>,
        W: Write,
    {
        let request = match read_move_request(lines) {
            Ok(r) => r,
            Err(e) => {
                log::warn!("move: {}", e);
                return Ok(());
            }
        };

        match self.choose_move(&request) {
            Some(action) => writeln!(out, "{}", action)?,
            None => writeln!(out, "pass")?,
        }
        out.flush()
    }

    /// Runs the search for Max from the request's position.
    pub fn choose_move(&self, request: &MoveRequest) -> Option<Action> {
        let root = Move::root(request.board.clone());
        let mut searcher = Searcher::new(self.config.cutoff_depth, request.move_index)
            .with_move_limit(self.config.move_limit);
        let result = searcher.search(&root);
        match &result.best {
            Some(best) => log::debug!("final decision (score {}):\n{}", result.score, best.board()),
            None => log::debug!("no legal move at index {}", request.move_index),
        }
        result.best.and_then(|m| m.action())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Side;
    use crate::movegen::legal_actions;
    use crate::protocol::decode_board;

    fn run_move(input: &[&str]) -> String {
        run_move_with(EngineConfig::default(), input)
    }

    fn run_move_with(config: EngineConfig, input: &[&str]) -> String {
        let engine = Engine::new(config);
        let mut lines = input.iter().map(|s| Ok::<String, io::Error>(s.to_string()));
        let mut output = Vec::new();
        engine.handle_move(&mut lines, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.name, "Frakking Toaster");
        assert_eq!(config.cutoff_depth, 2);
        assert_eq!(config.move_limit, 100);
    }

    #[test]
    fn depth_override_applies_valid_values() {
        assert_eq!(EngineConfig::with_depth_override(Some("3")).cutoff_depth, 3);
        assert_eq!(EngineConfig::with_depth_override(Some(" 0 ")).cutoff_depth, 0);
        assert_eq!(EngineConfig::with_depth_override(None), EngineConfig::default());
    }

    #[test]
    fn depth_override_ignores_invalid_values() {
        assert_eq!(EngineConfig::with_depth_override(Some("deep")).cutoff_depth, 2);
        assert_eq!(EngineConfig::with_depth_override(Some("-1")).cutoff_depth, 2);
    }

    #[test]
    fn depth_zero_passes() {
        let config = EngineConfig::with_depth_override(Some("0"));
        let output = run_move_with(config, &["0", "3", "1:0:0:", "0:0:0:", "0:0:2:"]);
        assert_eq!(output, "pass\n");
    }

    #[test]
    fn configured_move_limit_ends_the_game() {
        let config = EngineConfig {
            move_limit: 20,
            ..EngineConfig::default()
        };
        let input = ["20", "3", "1:0:0:", "0:0:0:", "0:0:2:"];
        assert_eq!(run_move_with(config.clone(), &input), "pass\n");

        let config = EngineConfig {
            move_limit: 150,
            ..EngineConfig::default()
        };
        let input = ["120", "3", "1:0:0:", "0:0:0:", "0:0:2:"];
        assert_ne!(run_move_with(config, &input), "pass\n");
    }

    #[test]
    fn negative_move_index_still_plays() {
        let output = run_move(&["-1", "3", "1:0:0:", "0:0:0:", "0:0:2:"]);
        assert!(output.trim().ends_with(':'), "expected a move, got {:?}", output);
    }

    #[test]
    fn identify_writes_name() {
        let engine = Engine::new(EngineConfig::default());
        let mut output = Vec::new();
        engine.handle_identify(&mut output).unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), "Frakking Toaster\n");
    }

    #[test]
    fn move_on_small_board_is_legal() {
        let output = run_move(&["0", "3", "1:0:0:", "0:0:0:", "0:0:2:"]);
        assert_ne!(output.trim(), "pass");
        let line = output.trim();
        assert!(line.ends_with(':'), "missing trailing colon: {}", line);

        let coords: Vec<i32> = line
            .trim_end_matches(':')
            .split(':')
            .map(|t| t.parse().unwrap())
            .collect();
        assert_eq!(coords.len(), 4);
        let board = decode_board(3, "1:0:0:0:0:0:0:0:2:").unwrap();
        let action = Action::new(coords[0], coords[1], coords[2], coords[3]);
        assert!(legal_actions(&board, Side::Max).contains(&action));
    }

    #[test]
    fn move_without_options_passes() {
        let output = run_move(&["4", "3", "1:2:0:", "2:2:0:", "2:0:2:"]);
        assert_eq!(output, "pass\n");
    }

    #[test]
    fn move_at_limit_passes() {
        let output = run_move(&["100", "3", "1:0:0:", "0:0:0:", "0:0:2:"]);
        assert_eq!(output, "pass\n");
    }

    #[test]
    fn malformed_move_writes_nothing() {
        assert!(run_move(&["0", "3", "1:0:0:", "0:0:0:", "0:0:"]).is_empty());
        assert!(run_move(&["zero", "3"]).is_empty());
        assert!(run_move(&["0", "2", "1:0:", "0:7:"]).is_empty());
        assert!(run_move(&[]).is_empty());
    }

    #[test]
    fn choose_move_takes_the_capture() {
        let engine = Engine::new(EngineConfig::default());
        let request = MoveRequest {
            move_index: 10,
            board: decode_board(3, "1:0:0:0:0:2:0:2:2:").unwrap(),
        };
        assert_eq!(engine.choose_move(&request), Some(Action::new(0, 0, 1, 1)));
    }
}
