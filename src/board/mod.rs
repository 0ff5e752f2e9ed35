//! Board representation and game-state types.
//!
//! Contains the tile and side types, actions with the fixed move-vector
//! tables, and the board grid itself.

pub mod action;
pub mod state;
pub mod tile;

pub use action::{Action, MOVE_VECTORS, NEIGHBORS};
pub use state::{Board, Counts, MOVE_LIMIT};
pub use tile::{Side, Tile};
