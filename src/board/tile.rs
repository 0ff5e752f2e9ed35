//! Tile states and sides.
//!
//! A tile is either empty or owned by one of the two sides. `Max` is the
//! side the agent plays; `Min` is its opponent.

use serde::Serialize;

/// The state of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tile {
    Empty,
    Max,
    Min,
}

impl Tile {
    /// Returns the integer code used in the wire encoding.
    pub const fn code(self) -> u8 {
        match self {
            Tile::Empty => 0,
            Tile::Max => 1,
            Tile::Min => 2,
        }
    }

    /// Parses a tile from its wire code. Anything outside 0..=2 is rejected.
    pub fn from_code(code: i64) -> Option<Tile> {
        match code {
            0 => Some(Tile::Empty),
            1 => Some(Tile::Max),
            2 => Some(Tile::Min),
            _ => None,
        }
    }

    /// Returns the owning side, or `None` for an empty tile.
    pub const fn side(self) -> Option<Side> {
        match self {
            Tile::Empty => None,
            Tile::Max => Some(Side::Max),
            Tile::Min => Some(Side::Min),
        }
    }

    /// Exchanges Max and Min; Empty stays Empty.
    pub const fn swapped(self) -> Tile {
        match self {
            Tile::Empty => Tile::Empty,
            Tile::Max => Tile::Min,
            Tile::Min => Tile::Max,
        }
    }
}

/// One of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Max,
    Min,
}

impl Side {
    /// The tile this side places.
    pub const fn tile(self) -> Tile {
        match self {
            Side::Max => Tile::Max,
            Side::Min => Tile::Min,
        }
    }

    pub const fn opponent(self) -> Side {
        match self {
            Side::Max => Side::Min,
            Side::Min => Side::Max,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Side::Max => "max",
            Side::Min => "min",
        }
    }
}
