//! Board text encoding.
//!
//! The board travels as `size * size` tile codes (0 empty, 1 Max, 2 Min)
//! separated by `:`, row by row. Empty tokens between separators are
//! ignored, so a trailing `:` on each row is fine.

use super::request::ProtocolError;
use crate::board::{Board, Tile};

/// Decodes the concatenated board text for a board of side `size`.
pub fn decode_board(size: usize, text: &str) -> Result<Board, ProtocolError> {
    let tokens: Vec<&str> = text.split(':').filter(|t| !t.is_empty()).collect();
    let expected = size.checked_mul(size).unwrap_or(usize::MAX);
    if tokens.len() != expected {
        return Err(ProtocolError::WrongTokenCount {
            expected,
            got: tokens.len(),
        });
    }

    let tiles = tokens
        .iter()
        .map(|tok| {
            tok.parse::<i64>()
                .ok()
                .and_then(Tile::from_code)
                .ok_or_else(|| ProtocolError::InvalidTile(tok.to_string()))
        })
        .collect::<Result<Vec<Tile>, ProtocolError>>()?;

    Board::from_tiles(size, tiles).ok_or(ProtocolError::WrongTokenCount {
        expected,
        got: tokens.len(),
    })
}

/// Encodes a board as one line per row, each tile followed by `:`.
pub fn encode_board(board: &Board) -> Vec<String> {
    board
        .tiles()
        .chunks(board.size().max(1))
        .map(|row| row.iter().map(|t| format!("{}:", t.code())).collect())
        .collect()
}
