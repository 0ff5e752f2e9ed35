//! Applying an action to a board.

use crate::board::{Action, Board, Side, Tile, NEIGHBORS};

/// Returns the board that results from `side` playing `action` on `board`.
///
/// The destination takes the mover's tile. A jump vacates the source; a
/// slide leaves it occupied. Every opponent tile in the destination's
/// 8-neighbourhood is then converted to the mover.
///
/// The action is assumed legal (source owned by `side`, destination empty).
pub fn apply_action(board: &Board, action: Action, side: Side) -> Board {
    let mut result = board.clone();
    let own = side.tile();
    let foe = side.opponent().tile();

    result.put(action.dst_x, action.dst_y, own);
    if action.is_jump() {
        result.put(action.src_x, action.src_y, Tile::Empty);
    }

    for &(dx, dy) in NEIGHBORS.iter() {
        let (x, y) = (action.dst_x + dx, action.dst_y + dy);
        if result.get(x, y) == Some(foe) {
            result.put(x, y, own);
        }
    }

    result
}
