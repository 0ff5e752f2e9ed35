//! Position evaluation.
//!
//! Scores a board from Max's perspective: positive values favour Max,
//! negative values favour Min.

pub(crate) mod heuristic;

pub use heuristic::{evaluate, group_score, position_weight};
