//! Search and planning.
//!
//! Depth-limited minimax with alpha-beta pruning over best-first ordered
//! successors.

pub mod alpha_beta;

pub use alpha_beta::{Outcome, SearchResult, SearchStats, Searcher, DEFAULT_CUTOFF_DEPTH};
