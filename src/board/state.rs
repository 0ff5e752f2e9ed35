//! Board representation.
//!
//! A square grid of tiles with side length fixed at construction. The board
//! keeps running counts of empty, Max and Min tiles so terminality checks
//! never have to rescan the grid.

use std::fmt;

use super::tile::{Side, Tile};

/// Number of plies after which a game is over regardless of position.
pub const MOVE_LIMIT: i64 = 100;

/// Tile counts for a board. `empty + max + min` always equals `size * size`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Counts {
    pub empty: usize,
    pub max: usize,
    pub min: usize,
}

impl Counts {
    fn slot(&mut self, tile: Tile) -> &mut usize {
        match tile {
            Tile::Empty => &mut self.empty,
            Tile::Max => &mut self.max,
            Tile::Min => &mut self.min,
        }
    }
}

/// A square game board.
///
/// Cells are stored row-major (`y * size + x`), which is also the order the
/// wire encoding lists them in. Cloning produces an independent deep copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Tile>,
    counts: Counts,
}

impl Board {
    /// Creates an all-empty board of the given side length.
    pub fn new(size: usize) -> Self {
        Board {
            size,
            cells: vec![Tile::Empty; size * size],
            counts: Counts {
                empty: size * size,
                max: 0,
                min: 0,
            },
        }
    }

    /// Builds a board from row-major tiles. Returns `None` if the number of
    /// tiles is not `size * size`.
    pub fn from_tiles(size: usize, tiles: Vec<Tile>) -> Option<Self> {
        if tiles.len() != size * size {
            return None;
        }
        let mut counts = Counts::default();
        for &t in &tiles {
            *counts.slot(t) += 1;
        }
        Some(Board {
            size,
            cells: tiles,
            counts,
        })
    }

    /// Creates the standard opening: Max on the top-left and bottom-right
    /// corners, Min on the other two.
    pub fn opening(size: usize) -> Self {
        let mut board = Board::new(size);
        if size == 0 {
            return board;
        }
        let last = size as i32 - 1;
        board.put(0, 0, Tile::Max);
        board.put(last, last, Tile::Max);
        board.put(last, 0, Tile::Min);
        board.put(0, last, Tile::Min);
        board
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn counts(&self) -> Counts {
        self.counts
    }

    /// Returns true if `(x, y)` lies on the board.
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.size && (y as usize) < self.size
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> usize {
        y as usize * self.size + x as usize
    }

    /// Returns the tile at `(x, y)`, or `None` if the position is off the board.
    pub fn get(&self, x: i32, y: i32) -> Option<Tile> {
        if !self.in_bounds(x, y) {
            return None;
        }
        Some(self.cells[self.index(x, y)])
    }

    /// Writes `tile` at `(x, y)` and updates the counts.
    /// Returns false (and changes nothing) if the position is off the board.
    pub fn put(&mut self, x: i32, y: i32, tile: Tile) -> bool {
        if !self.in_bounds(x, y) {
            return false;
        }
        let idx = self.index(x, y);
        let prev = self.cells[idx];
        *self.counts.slot(prev) -= 1;
        *self.counts.slot(tile) += 1;
        self.cells[idx] = tile;
        true
    }

    /// Iterates over all cells as `(x, y, tile)`, row by row.
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32, Tile)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &t)| ((i % size) as i32, (i / size) as i32, t))
    }

    /// Row-major tile slice.
    pub fn tiles(&self) -> &[Tile] {
        &self.cells
    }

    /// A board is terminal once the game has reached the move limit, the
    /// grid is full, or either side has been wiped out.
    pub fn is_terminal(&self, move_index: i64) -> bool {
        self.is_terminal_at(move_index, MOVE_LIMIT)
    }

    /// Like [`Board::is_terminal`] with an explicit game length cap.
    pub fn is_terminal_at(&self, move_index: i64, move_limit: i64) -> bool {
        move_index >= move_limit
            || self.counts.empty == 0
            || self.counts.max == 0
            || self.counts.min == 0
    }

    /// Returns a copy with every Max tile turned into Min and vice versa.
    pub fn swapped(&self) -> Board {
        Board {
            size: self.size,
            cells: self.cells.iter().map(|t| t.swapped()).collect(),
            counts: Counts {
                empty: self.counts.empty,
                max: self.counts.min,
                min: self.counts.max,
            },
        }
    }

    /// The side with more tiles, or `None` on a tie.
    pub fn leader(&self) -> Option<Side> {
        use std::cmp::Ordering;
        match self.counts.max.cmp(&self.counts.min) {
            Ordering::Greater => Some(Side::Max),
            Ordering::Less => Some(Side::Min),
            Ordering::Equal => None,
        }
    }
}

/// Pretty-prints the grid followed by the tile counts.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.size.max(1)) {
            for t in row {
                write!(f, "{} ", t.code())?;
            }
            writeln!(f)?;
        }
        writeln!(f)?;
        writeln!(f, "Empty tiles: {}", self.counts.empty)?;
        writeln!(f, "Max tiles: {}", self.counts.max)?;
        write!(f, "Min tiles: {}", self.counts.min)
    }
}
