//! Legal move generation.
//!
//! Enumerates every slide and jump available to a side, applies each one to
//! a copy of the board (including infection of neighbouring opponent tiles),
//! and yields the resulting moves best-first.

pub mod apply;
pub mod ordering;

use crate::board::{Action, Board, Side, Tile, MOVE_VECTORS};
use crate::eval::evaluate;

pub use apply::apply_action;
pub use ordering::{MoveOrdering, Successors};

/// An action together with the board it produces and that board's score.
///
/// The score is computed once at construction and never recomputed. The
/// root of a search carries no action: it stands for the position before
/// any move was chosen.
#[derive(Debug, Clone)]
pub struct Move {
    action: Option<Action>,
    board: Board,
    score: i32,
}

impl Move {
    pub fn new(action: Option<Action>, board: Board) -> Self {
        let score = evaluate(&board);
        Move { action, board, score }
    }

    /// Wraps a position as the root pseudo-move of a search.
    pub fn root(board: Board) -> Self {
        Move::new(None, board)
    }

    pub fn action(&self) -> Option<Action> {
        self.action
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn score(&self) -> i32 {
        self.score
    }
}

/// Lists every legal action for `side`, in generation order: sources are
/// scanned column by column, and each source tries the move vectors in
/// table order. Only in-bounds, empty destinations are legal.
pub fn legal_actions(board: &Board, side: Side) -> Vec<Action> {
    let size = board.size() as i32;
    let own = side.tile();
    let mut actions = Vec::new();

    for x in 0..size {
        for y in 0..size {
            if board.get(x, y) != Some(own) {
                continue;
            }
            for &(dx, dy) in MOVE_VECTORS.iter() {
                let (nx, ny) = (x + dx, y + dy);
                if board.get(nx, ny) == Some(Tile::Empty) {
                    actions.push(Action::new(x, y, nx, ny));
                }
            }
        }
    }

    actions
}

/// Generates all moves for `side`, ordered best-first for that side:
/// highest score first for Max, lowest first for Min.
pub fn successors(board: &Board, side: Side) -> Successors {
    successors_ordered(board, side, MoveOrdering::for_side(side))
}

/// Generates all moves for `side` and yields them according to `ordering`.
pub fn successors_ordered(board: &Board, side: Side, ordering: MoveOrdering) -> Successors {
    let actions = legal_actions(board, side);
    let mut out = Successors::with_capacity(ordering, actions.len());
    for action in actions {
        let result = apply_action(board, action, side);
        out.push(Move::new(Some(action), result));
    }
    out
}

impl Board {
    /// Static evaluation of this board.
    pub fn evaluate(&self) -> i32 {
        evaluate(self)
    }

    /// All moves available to `side`, best-first for that side.
    pub fn successors(&self, side: Side) -> Successors {
        successors(self, side)
    }
}
