//! Infection game agent library.
//!
//! Exposes the board representation, evaluation, move generation, search,
//! protocol and self-play modules for use by integration tests and the
//! binaries.

pub mod board;
pub mod engine;
pub mod eval;
pub mod movegen;
pub mod protocol;
pub mod search;
pub mod selfplay;
