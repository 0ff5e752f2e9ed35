//! Best-first ordering of generated moves.
//!
//! Moves are kept in a binary heap keyed by their cached score. Visiting
//! stronger moves first lets alpha-beta prune more; the order never changes
//! the search result.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use super::Move;
use crate::board::Side;

/// Which end of the score range to yield first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOrdering {
    /// Highest score first (the maximizer's preference).
    MaxFirst,
    /// Lowest score first (the minimizer's preference).
    MinFirst,
}

impl MoveOrdering {
    pub const fn for_side(side: Side) -> MoveOrdering {
        match side {
            Side::Max => MoveOrdering::MaxFirst,
            Side::Min => MoveOrdering::MinFirst,
        }
    }

    fn key(self, score: i32) -> i64 {
        match self {
            MoveOrdering::MaxFirst => score as i64,
            MoveOrdering::MinFirst => -(score as i64),
        }
    }
}

/// Heap entry. Equal keys fall back to insertion order, earliest first.
#[derive(Debug)]
struct Ranked {
    key: i64,
    seq: usize,
    mv: Move,
}

impl Ord for Ranked {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key
            .cmp(&other.key)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Ranked {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Ranked {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Ranked {}

/// A priority queue of moves. Iterating drains it in priority order.
#[derive(Debug)]
pub struct Successors {
    ordering: MoveOrdering,
    heap: BinaryHeap<Ranked>,
    next_seq: usize,
}

impl Successors {
    pub fn new(ordering: MoveOrdering) -> Self {
        Successors::with_capacity(ordering, 0)
    }

    pub fn with_capacity(ordering: MoveOrdering, capacity: usize) -> Self {
        Successors {
            ordering,
            heap: BinaryHeap::with_capacity(capacity),
            next_seq: 0,
        }
    }

    pub fn push(&mut self, mv: Move) {
        let key = self.ordering.key(mv.score());
        self.heap.push(Ranked {
            key,
            seq: self.next_seq,
            mv,
        });
        self.next_seq += 1;
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl Iterator for Successors {
    type Item = Move;

    fn next(&mut self) -> Option<Move> {
        self.heap.pop().map(|r| r.mv)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.heap.len(), Some(self.heap.len()))
    }
}

impl ExactSizeIterator for Successors {}
