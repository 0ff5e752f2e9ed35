//! Heuristic position evaluation.
//!
//! Each occupied tile is worth its positional weight plus a grouping bonus.
//! Corners are the hardest cells to attack, edges the next hardest, so they
//! carry more weight. The grouping bonus rewards pieces that sit next to
//! friendly pieces, which makes them harder to infect en masse.

use crate::board::{Board, Tile, NEIGHBORS};

/// Positional weight of `(x, y)` on a board of side `size`: 1 plus the
/// number of borders the cell touches (corner 3, edge 2, interior 1).
pub fn position_weight(size: usize, x: i32, y: i32) -> i32 {
    let last = size as i32 - 1;
    let on_x_border = x == 0 || x == last;
    let on_y_border = y == 0 || y == last;
    1 + on_x_border as i32 + on_y_border as i32
}

/// Number of 8-neighbours of `(x, y)` held by the same side as `(x, y)`.
/// Empty and off-board cells score 0.
pub fn group_score(board: &Board, x: i32, y: i32) -> i32 {
    let tile = match board.get(x, y) {
        Some(t) if t.side().is_some() => t,
        _ => return 0,
    };
    NEIGHBORS
        .iter()
        .filter(|&&(dx, dy)| board.get(x + dx, y + dy) == Some(tile))
        .count() as i32
}

/// Static evaluation of a board. Max tiles add their weight and grouping
/// score; Min tiles subtract theirs.
pub fn evaluate(board: &Board) -> i32 {
    let size = board.size();
    let mut score = 0i32;
    for (x, y, tile) in board.cells() {
        match tile {
            Tile::Empty => {}
            Tile::Max => score += position_weight(size, x, y) + group_score(board, x, y),
            Tile::Min => score -= position_weight(size, x, y) + group_score(board, x, y),
        }
    }
    score
}
