//! `move` request reading.

use std::io;

use super::codec::decode_board;
use crate::board::Board;

/// Errors that can occur while reading a `move` request.
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    #[error("input ended before the {0}")]
    MissingLine(&'static str),

    #[error("invalid {field}: '{value}'")]
    InvalidInteger { field: &'static str, value: String },

    #[error("board size must be at least 1")]
    EmptyBoard,

    #[error("expected {expected} tiles, got {got}")]
    WrongTokenCount { expected: usize, got: usize },

    #[error("invalid tile value: '{0}'")]
    InvalidTile(String),
}

/// A fully parsed `move` request.
#[derive(Debug, Clone)]
pub struct MoveRequest {
    /// The game ply this decision is for. Any integer is accepted; only
    /// values at or past the move limit end the game.
    pub move_index: i64,
    pub board: Board,
}

/// Reads the next line, treating read errors as end of input.
fn next_line<I>(lines: &mut I, what: &'static str) -> Result<String, ProtocolError>
where
    I: Iterator<Item = io::Result<String>>,
{
    match lines.next() {
        Some(Ok(line)) => Ok(line),
        Some(Err(e)) => {
            log::debug!("read error while waiting for the {}: {}", what, e);
            Err(ProtocolError::MissingLine(what))
        }
        None => Err(ProtocolError::MissingLine(what)),
    }
}

fn parse_int<T: std::str::FromStr>(line: &str, field: &'static str) -> Result<T, ProtocolError> {
    let trimmed = line.trim();
    trimmed.parse().map_err(|_| ProtocolError::InvalidInteger {
        field,
        value: trimmed.to_string(),
    })
}

/// Reads the body of a `move` command: the move index, the board size `N`,
/// then `N` board lines which are concatenated and decoded together.
pub fn read_move_request<I>(lines: &mut I) -> Result<MoveRequest, ProtocolError>
where
    I: Iterator<Item = io::Result<String>>,
{
    let move_index: i64 = parse_int(&next_line(lines, "move index")?, "move index")?;
    let size: usize = parse_int(&next_line(lines, "board size")?, "board size")?;
    if size == 0 {
        return Err(ProtocolError::EmptyBoard);
    }

    let mut text = String::new();
    for _ in 0..size {
        text.push_str(next_line(lines, "board rows")?.trim());
    }

    let board = decode_board(size, &text)?;
    Ok(MoveRequest { move_index, board })
}
