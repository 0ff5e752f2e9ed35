//! Alpha-beta minimax search.
//!
//! Max and Min alternate plies. A node is a leaf once the cutoff depth is
//! reached or its board is terminal, and is then valued by the score cached
//! in its `Move`. Successors are visited best-first, so the strongest
//! candidate tends to come first and tighten the bounds early.
//!
//! Ties keep the first successor reaching the best value: comparisons are
//! strict, and successors are already yielded in score order.

use crate::board::{Side, MOVE_LIMIT};
use crate::movegen::{successors, Move};

/// Number of plies searched below the root.
pub const DEFAULT_CUTOFF_DEPTH: u32 = 2;

/// Counters gathered during one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes visited, root included.
    pub nodes: u64,
    /// Nodes valued by their static evaluation.
    pub leaves: u64,
    /// Times a node stopped exploring successors because of a bound.
    pub cutoffs: u64,
}

/// The value of a node and the successor that achieves it.
///
/// `best` is `None` for leaves and for nodes where the side to move has no
/// legal move; such nodes are valued by their own static evaluation.
#[derive(Debug, Clone)]
pub struct Outcome {
    pub score: i32,
    pub best: Option<Move>,
}

/// Result of a root search.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The chosen move, or `None` when the side to move must pass.
    pub best: Option<Move>,
    pub score: i32,
    pub stats: SearchStats,
}

/// Alpha-beta searcher for one decision.
///
/// The move index is the game ply the decision is for. It stays fixed for
/// the whole search and, with the move limit, feeds the terminal test of
/// every node.
pub struct Searcher {
    cutoff: u32,
    move_index: i64,
    move_limit: i64,
    stats: SearchStats,
}

impl Searcher {
    pub fn new(cutoff: u32, move_index: i64) -> Self {
        Searcher {
            cutoff,
            move_index,
            move_limit: MOVE_LIMIT,
            stats: SearchStats::default(),
        }
    }

    /// Replaces the game length cap used by the terminal test.
    pub fn with_move_limit(mut self, move_limit: i64) -> Self {
        self.move_limit = move_limit;
        self
    }

    /// Picks the best move for Max from `root`.
    pub fn search(&mut self, root: &Move) -> SearchResult {
        self.search_for(root, Side::Max)
    }

    /// Picks the best move for `side` from `root`, with the full bound range.
    pub fn search_for(&mut self, root: &Move, side: Side) -> SearchResult {
        self.stats = SearchStats::default();
        let outcome = match side {
            Side::Max => self.maximize(root, i32::MIN, i32::MAX, 0),
            Side::Min => self.minimize(root, i32::MIN, i32::MAX, 0),
        };
        log::debug!(
            "search side {} depth {} nodes {} leaves {} cutoffs {} score {}",
            side.name(),
            self.cutoff,
            self.stats.nodes,
            self.stats.leaves,
            self.stats.cutoffs,
            outcome.score
        );
        SearchResult {
            best: outcome.best,
            score: outcome.score,
            stats: self.stats,
        }
    }

    fn is_leaf(&self, node: &Move, depth: u32) -> bool {
        depth >= self.cutoff
            || node.board().is_terminal_at(self.move_index, self.move_limit)
    }

    /// Best outcome for Max at `node`. Returns as soon as the value reaches
    /// `beta`, since Min would never allow this line.
    pub fn maximize(&mut self, node: &Move, mut alpha: i32, beta: i32, depth: u32) -> Outcome {
        self.stats.nodes += 1;
        if self.is_leaf(node, depth) {
            self.stats.leaves += 1;
            return Outcome {
                score: node.score(),
                best: None,
            };
        }

        let mut v = i32::MIN;
        let mut best: Option<Move> = None;

        for child in successors(node.board(), Side::Max) {
            let value = self.minimize(&child, alpha, beta, depth + 1).score;
            if value > v || best.is_none() {
                v = value;
                best = Some(child);
            }
            if v >= beta {
                self.stats.cutoffs += 1;
                return Outcome { score: v, best };
            }
            alpha = alpha.max(v);
        }

        match best {
            Some(_) => Outcome { score: v, best },
            None => {
                self.stats.leaves += 1;
                Outcome {
                    score: node.score(),
                    best: None,
                }
            }
        }
    }

    /// Best outcome for Min at `node`. Returns as soon as the value drops to
    /// `alpha`, since Max would never allow this line.
    pub fn minimize(&mut self, node: &Move, alpha: i32, mut beta: i32, depth: u32) -> Outcome {
        self.stats.nodes += 1;
        if self.is_leaf(node, depth) {
            self.stats.leaves += 1;
            return Outcome {
                score: node.score(),
                best: None,
            };
        }

        let mut v = i32::MAX;
        let mut best: Option<Move> = None;

        for child in successors(node.board(), Side::Min) {
            let value = self.maximize(&child, alpha, beta, depth + 1).score;
            if value < v || best.is_none() {
                v = value;
                best = Some(child);
            }
            if v <= alpha {
                self.stats.cutoffs += 1;
                return Outcome { score: v, best };
            }
            beta = beta.min(v);
        }

        match best {
            Some(_) => Outcome { score: v, best },
            None => {
                self.stats.leaves += 1;
                Outcome {
                    score: node.score(),
                    best: None,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Action, Board, Tile};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    /// Plain minimax with the same leaf rules and tie-breaking, no pruning.
    fn minimax(node: &Move, side: Side, depth: u32, cutoff: u32, nodes: &mut u64) -> (i32, Option<Action>) {
        *nodes += 1;
        if depth >= cutoff || node.board().is_terminal(0) {
            return (node.score(), None);
        }
        let mut best: Option<(i32, Option<Action>)> = None;
        for child in successors(node.board(), side) {
            let (value, _) = minimax(&child, side.opponent(), depth + 1, cutoff, nodes);
            let better = match (best, side) {
                (None, _) => true,
                (Some((v, _)), Side::Max) => value > v,
                (Some((v, _)), Side::Min) => value < v,
            };
            if better {
                best = Some((value, child.action()));
            }
        }
        best.unwrap_or((node.score(), None))
    }

    fn random_board(rng: &mut StdRng, size: usize) -> Board {
        loop {
            let tiles = (0..size * size)
                .map(|_| match rng.gen_range(0..10) {
                    0..=4 => Tile::Empty,
                    5..=7 => Tile::Max,
                    _ => Tile::Min,
                })
                .collect();
            let board = Board::from_tiles(size, tiles).unwrap();
            if !board.is_terminal(0) {
                return board;
            }
        }
    }

    fn check_against_minimax(size: usize, cutoff: u32, seed: u64, rounds: usize) {
        let mut rng = StdRng::seed_from_u64(seed);
        for _ in 0..rounds {
            let board = random_board(&mut rng, size);
            let root = Move::root(board.clone());
            for side in [Side::Max, Side::Min] {
                let mut full_nodes = 0;
                let (score, action) = minimax(&root, side, 0, cutoff, &mut full_nodes);
                let mut searcher = Searcher::new(cutoff, 0);
                let result = searcher.search_for(&root, side);
                assert_eq!(result.score, score, "score mismatch on\n{}", board);
                assert_eq!(
                    result.best.as_ref().and_then(|m| m.action()),
                    action,
                    "move mismatch on\n{}",
                    board
                );
                assert!(result.stats.nodes <= full_nodes);
            }
        }
    }

    #[test]
    fn alpha_beta_matches_minimax_on_3x3() {
        check_against_minimax(3, DEFAULT_CUTOFF_DEPTH, 1, 200);
    }

    #[test]
    fn alpha_beta_matches_minimax_on_4x4() {
        check_against_minimax(4, DEFAULT_CUTOFF_DEPTH, 2, 100);
    }

    #[test]
    fn alpha_beta_matches_minimax_deeper() {
        check_against_minimax(3, 3, 3, 60);
        check_against_minimax(4, 3, 4, 15);
    }

    #[test]
    fn pruning_skips_nodes_on_open_board() {
        let mut board = Board::new(7);
        board.put(0, 0, Tile::Max);
        board.put(6, 6, Tile::Max);
        board.put(6, 0, Tile::Min);
        board.put(0, 6, Tile::Min);
        board.put(3, 3, Tile::Min);
        let root = Move::root(board);
        let mut full_nodes = 0;
        let (score, _) = minimax(&root, Side::Max, 0, DEFAULT_CUTOFF_DEPTH, &mut full_nodes);
        let mut searcher = Searcher::new(DEFAULT_CUTOFF_DEPTH, 0);
        let result = searcher.search(&root);
        assert_eq!(result.score, score);
        assert!(result.stats.cutoffs > 0);
        assert!(result.stats.nodes < full_nodes);
    }

    #[test]
    fn depth_zero_returns_root_value() {
        let mut board = Board::new(3);
        board.put(0, 0, Tile::Max);
        board.put(2, 2, Tile::Min);
        let root = Move::root(board);
        let result = Searcher::new(0, 0).search(&root);
        assert!(result.best.is_none());
        assert_eq!(result.score, root.score());
    }

    #[test]
    fn depth_one_takes_highest_scoring_move() {
        let mut board = Board::new(5);
        board.put(1, 1, Tile::Max);
        board.put(2, 3, Tile::Min);
        board.put(3, 3, Tile::Min);
        let root = Move::root(board.clone());
        let result = Searcher::new(1, 0).search(&root);
        let best = result.best.unwrap();
        let top = board.successors(Side::Max).next().unwrap();
        assert_eq!(best.action(), top.action());
        assert_eq!(result.score, top.score());
    }

    #[test]
    fn no_legal_move_yields_none() {
        // Max at (0,0) is boxed in: every reachable cell is taken.
        let mut board = Board::new(3);
        board.put(0, 0, Tile::Max);
        for (x, y) in [(1, 0), (0, 1), (1, 1), (0, 2), (2, 2)] {
            board.put(x, y, Tile::Min);
        }
        assert!(!board.is_terminal(0));
        let result = Searcher::new(DEFAULT_CUTOFF_DEPTH, 0).search(&Move::root(board.clone()));
        assert!(result.best.is_none());
        assert_eq!(result.score, board.evaluate());
    }

    #[test]
    fn terminal_root_yields_none() {
        let mut board = Board::new(3);
        board.put(0, 0, Tile::Max);
        board.put(2, 2, Tile::Min);
        let result = Searcher::new(DEFAULT_CUTOFF_DEPTH, 100).search(&Move::root(board));
        assert!(result.best.is_none());
        assert_eq!(result.stats.nodes, 1);
    }

    #[test]
    fn custom_move_limit_ends_search() {
        let mut board = Board::new(3);
        board.put(0, 0, Tile::Max);
        board.put(2, 2, Tile::Min);
        let root = Move::root(board);

        let capped = Searcher::new(DEFAULT_CUTOFF_DEPTH, 30)
            .with_move_limit(30)
            .search(&root);
        assert!(capped.best.is_none());
        assert_eq!(capped.stats.nodes, 1);

        let open = Searcher::new(DEFAULT_CUTOFF_DEPTH, 100)
            .with_move_limit(200)
            .search(&root);
        assert!(open.best.is_some());
    }

    #[test]
    fn capture_all_is_preferred() {
        // Sliding to (1,1) infects every Min tile and ends the game.
        let mut board = Board::new(3);
        board.put(0, 0, Tile::Max);
        board.put(2, 1, Tile::Min);
        board.put(1, 2, Tile::Min);
        board.put(2, 2, Tile::Min);
        let result = Searcher::new(DEFAULT_CUTOFF_DEPTH, 0).search(&Move::root(board));
        let best = result.best.unwrap();
        assert_eq!(best.action(), Some(Action::new(0, 0, 1, 1)));
        assert_eq!(best.board().counts().min, 0);
    }
}
