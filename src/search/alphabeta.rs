//! Minimax search with optional alpha-beta pruning
//!
//! This module implements the core search algorithm for the Gomoku AI.
//! It uses the negamax formulation: every layer maximizes the score from
//! the point of view of the side to move, which is the same as alternating
//! maximizing and minimizing layers from the root side's view.
//!
//! # Features
//!
//! - Plain minimax or alpha-beta pruning, choosing the same move
//! - Move generation with proximity filtering and static ordering
//! - Exact make/unmake on a private copy of the board
//! - Optional time or node budget with iterative deepening
//! - Optional parallel root split over rayon, one board copy per task
//!
//! # Example
//!
//! ```
//! use gomoku::board::{Board, Pos, Stone};
//! use gomoku::search::{SearchConfig, Searcher};
//!
//! let mut board = Board::new();
//! board.place_stone(Pos::new(7, 7), Stone::Black).unwrap();
//!
//! let searcher = Searcher::new(SearchConfig::with_depth(2));
//! let result = searcher.choose_move(&board, Stone::White).unwrap();
//! println!("White plays {}", result.best_move.pos);
//! ```

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::{Duration, Instant};

use log::{debug, info, warn};
use rayon::prelude::*;

use crate::board::{Board, Move, Pos, Stone};
use crate::error::{GomokuError, Result};
use crate::eval::{evaluate, PatternScore};
use crate::rules::{check_winner, has_five_in_row};

use super::movegen::ordered_moves;
use super::SearchConfig;

/// Score of a five made on the previous ply, before the ply adjustment
const WIN_SCORE: i32 = PatternScore::FIVE;

/// Infinity score for alpha-beta bounds
const INF: i32 = PatternScore::FIVE + 1_000;

/// Search statistics for diagnostics and tuning
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes visited, root children included
    pub nodes: u64,
    /// Positions scored by the evaluator at the depth cutoff
    pub leaf_evaluations: u64,
    /// Alpha-beta cutoffs (always 0 for plain minimax)
    pub cutoffs: u64,
}

impl SearchStats {
    fn merge(&mut self, other: &SearchStats) {
        self.nodes += other.nodes;
        self.leaf_evaluations += other.leaf_evaluations;
        self.cutoffs += other.cutoffs;
    }
}

/// Search result containing the chosen move and associated statistics
#[derive(Debug, Clone)]
pub struct SearchResult {
    pub best_move: Move,
    /// Backed-up score of the chosen move for the side to move
    pub score: i32,
    /// Deepest fully completed depth
    pub depth: i8,
    pub stats: SearchStats,
    pub elapsed: Duration,
}

impl SearchResult {
    /// Total nodes searched
    #[inline]
    pub fn nodes(&self) -> u64 {
        self.stats.nodes
    }

    /// True when the score proves a forced win for the side to move
    pub fn is_winning(&self) -> bool {
        self.score > PatternScore::MAX_HEURISTIC
    }

    /// True when the score proves a forced loss for the side to move
    pub fn is_losing(&self) -> bool {
        self.score < -PatternScore::MAX_HEURISTIC
    }
}

// =============================================================================
// Budget: stop signal shared by all workers
// =============================================================================

/// Time and node budget shared between search workers.
struct Budget {
    deadline: Option<Instant>,
    node_budget: Option<u64>,
    nodes: AtomicU64,
    /// Global stop signal, set once any limit is exceeded
    stopped: AtomicBool,
}

impl Budget {
    fn unlimited() -> Self {
        Self {
            deadline: None,
            node_budget: None,
            nodes: AtomicU64::new(0),
            stopped: AtomicBool::new(false),
        }
    }

    fn new(config: &SearchConfig, start: Instant) -> Self {
        Self {
            deadline: config.time_limit.map(|limit| start + limit),
            node_budget: config.node_budget,
            nodes: AtomicU64::new(0),
            stopped: AtomicBool::new(false),
        }
    }

    /// Count one node. Returns true when the search must unwind.
    #[inline]
    fn tick(&self) -> bool {
        if self.stopped.load(Ordering::Relaxed) {
            return true;
        }
        let nodes = self.nodes.fetch_add(1, Ordering::Relaxed) + 1;
        let over_nodes = self.node_budget.is_some_and(|limit| nodes > limit);
        // Clock reads are cheap but not free; check every 256 nodes
        let over_time = nodes & 255 == 0 && self.deadline.is_some_and(|d| Instant::now() >= d);
        if over_nodes || over_time {
            self.stopped.store(true, Ordering::Relaxed);
            return true;
        }
        false
    }

    #[inline]
    fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::Relaxed)
    }
}

// =============================================================================
// Worker: per-thread search state
// =============================================================================

struct Worker<'a> {
    config: &'a SearchConfig,
    budget: &'a Budget,
    stats: SearchStats,
}

impl<'a> Worker<'a> {
    fn new(config: &'a SearchConfig, budget: &'a Budget) -> Self {
        Self {
            config,
            budget,
            stats: SearchStats::default(),
        }
    }

    /// Recursive negamax. Returns the score for `stone`, the side to move.
    ///
    /// Every stone placed on `board` is removed before returning, also when
    /// the budget runs out. A score computed after the stop signal is
    /// meaningless and callers discard it.
    fn negamax(
        &mut self,
        board: &mut Board,
        stone: Stone,
        depth: i8,
        ply: i8,
        mut alpha: i32,
        beta: i32,
        last_move: Option<Move>,
    ) -> i32 {
        self.stats.nodes += 1;
        if self.budget.tick() {
            return 0;
        }

        // Terminal: the previous move completed five
        if let Some(last) = last_move {
            if has_five_in_row(board, last.pos, last.stone) {
                return -(WIN_SCORE - i32::from(ply));
            }
        }
        if board.is_full() {
            return 0;
        }
        if depth <= 0 {
            self.stats.leaf_evaluations += 1;
            return evaluate(board, stone);
        }

        let moves = ordered_moves(board, stone, self.config.neighborhood_radius);
        let mut best_score = -INF;

        for pos in moves {
            board.put(pos, stone);
            let score = -self.negamax(
                board,
                stone.opponent(),
                depth - 1,
                ply + 1,
                -beta,
                -alpha,
                Some(Move::new(pos, stone)),
            );
            board.take(pos);

            if self.budget.is_stopped() {
                return 0;
            }

            if score > best_score {
                best_score = score;
            }
            if self.config.use_alpha_beta {
                alpha = alpha.max(score);
                if alpha >= beta {
                    self.stats.cutoffs += 1;
                    break;
                }
            }
        }

        best_score
    }

    /// Search one root move to `depth` plies total, full window below it.
    fn search_root_move(&mut self, board: &mut Board, stone: Stone, pos: Pos, depth: i8, alpha: i32) -> i32 {
        board.put(pos, stone);
        let score = -self.negamax(
            board,
            stone.opponent(),
            depth - 1,
            1,
            -INF,
            -alpha,
            Some(Move::new(pos, stone)),
        );
        board.take(pos);
        score
    }

    /// Sequential root. Ties keep the earliest move in `moves`.
    ///
    /// The root window is `(alpha, +INF)` and a move replaces the best only
    /// when strictly better, so alpha-beta returns exactly the move plain
    /// minimax would. Returns `None` if the budget ran out.
    fn search_root(&mut self, board: &mut Board, stone: Stone, depth: i8, moves: &[Pos]) -> Option<(Pos, i32)> {
        let mut alpha = -INF;
        let mut best: Option<(Pos, i32)> = None;

        for &pos in moves {
            let score = self.search_root_move(board, stone, pos, depth, alpha);
            if self.budget.is_stopped() {
                return None;
            }
            debug!("depth {depth}: {stone} {pos} scores {score}");

            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((pos, score));
            }
            if self.config.use_alpha_beta {
                alpha = alpha.max(score);
            }
        }
        best
    }
}

// =============================================================================
// Searcher: public API
// =============================================================================

/// Move-search engine.
///
/// Holds only configuration; each call works on its own copy of the board,
/// so one searcher can serve any number of games.
#[derive(Debug, Clone, Default)]
pub struct Searcher {
    config: SearchConfig,
}

impl Searcher {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Choose the move for `stone` on `board`.
    ///
    /// # Errors
    ///
    /// - `InvalidDepth` if the configured depth is below 1
    /// - `NoLegalMoves` if the board is full
    /// - `GameOver` if a five already exists on the board
    pub fn choose_move(&self, board: &Board, stone: Stone) -> Result<SearchResult> {
        self.config.validate()?;
        if board.is_full() {
            return Err(GomokuError::NoLegalMoves);
        }
        if let Some(winner) = check_winner(board) {
            return Err(GomokuError::GameOver(winner));
        }

        let start = Instant::now();
        let moves = ordered_moves(board, stone, self.config.neighborhood_radius);
        let mut stats = SearchStats::default();

        let (pos, score, depth) = if self.config.is_budgeted() {
            self.iterative_deepening(board, stone, &moves, start, &mut stats)
        } else {
            let budget = Budget::unlimited();
            // Unlimited budgets never stop, so a result always comes back
            let (pos, score) = self
                .search_depth(board, stone, self.config.depth_limit, &moves, &budget, &mut stats)
                .unwrap_or((moves[0], 0));
            (pos, score, self.config.depth_limit)
        };

        let result = SearchResult {
            best_move: Move::new(pos, stone),
            score,
            depth,
            stats,
            elapsed: start.elapsed(),
        };
        info!(
            "{} chose {} (score {}, depth {}, {} nodes, {} cutoffs, {:?})",
            stone,
            pos,
            score,
            depth,
            result.stats.nodes,
            result.stats.cutoffs,
            result.elapsed
        );
        Ok(result)
    }

    /// Deepen one ply at a time until the depth limit or the budget.
    /// Depth 1 always completes so there is always a move to return.
    fn iterative_deepening(
        &self,
        board: &Board,
        stone: Stone,
        moves: &[Pos],
        start: Instant,
        stats: &mut SearchStats,
    ) -> (Pos, i32, i8) {
        let first = Budget::unlimited();
        let (mut best_pos, mut best_score) = self
            .search_depth(board, stone, 1, moves, &first, stats)
            .unwrap_or((moves[0], 0));
        let mut completed = 1i8;

        let budget = Budget::new(&self.config, start);
        for depth in 2..=self.config.depth_limit {
            match self.search_depth(board, stone, depth, moves, &budget, stats) {
                Some((pos, score)) => {
                    debug!("completed depth {depth}: {pos} scores {score}");
                    best_pos = pos;
                    best_score = score;
                    completed = depth;
                }
                None => {
                    warn!(
                        "search budget exhausted during depth {depth}, using depth {completed} result"
                    );
                    break;
                }
            }
            // A forced win or loss will not change with more depth
            if best_score.abs() > PatternScore::MAX_HEURISTIC {
                break;
            }
        }
        (best_pos, best_score, completed)
    }

    /// One fixed-depth search over the root moves
    fn search_depth(
        &self,
        board: &Board,
        stone: Stone,
        depth: i8,
        moves: &[Pos],
        budget: &Budget,
        stats: &mut SearchStats,
    ) -> Option<(Pos, i32)> {
        if self.config.parallel && moves.len() > 1 {
            return self.search_depth_parallel(board, stone, depth, moves, budget, stats);
        }
        let mut work_board = board.clone();
        let mut worker = Worker::new(&self.config, budget);
        let best = worker.search_root(&mut work_board, stone, depth, moves);
        stats.merge(&worker.stats);
        debug_assert_eq!(&work_board, board, "search left stones on the board");
        best
    }

    /// Parallel root: every task clones the board and searches one root move
    /// with a full window. Results come back in `moves` order and are reduced
    /// with the same strict comparison as the sequential root.
    fn search_depth_parallel(
        &self,
        board: &Board,
        stone: Stone,
        depth: i8,
        moves: &[Pos],
        budget: &Budget,
        stats: &mut SearchStats,
    ) -> Option<(Pos, i32)> {
        let results: Vec<(Pos, i32, SearchStats)> = moves
            .par_iter()
            .map(|&pos| {
                let mut work_board = board.clone();
                let mut worker = Worker::new(&self.config, budget);
                let score = worker.search_root_move(&mut work_board, stone, pos, depth, -INF);
                (pos, score, worker.stats)
            })
            .collect();

        for (_, _, worker_stats) in &results {
            stats.merge(worker_stats);
        }
        if budget.is_stopped() {
            return None;
        }

        let mut best: Option<(Pos, i32)> = None;
        for (pos, score, _) in results {
            debug!("depth {depth}: {stone} {pos} scores {score}");
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((pos, score));
            }
        }
        best
    }
}

/// Choose a move with default options at the given depth
pub fn choose_move(board: &Board, stone: Stone, depth_limit: i8) -> Result<SearchResult> {
    Searcher::new(SearchConfig::with_depth(depth_limit)).choose_move(board, stone)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::movegen::ordered_moves;

    fn board_with(black: &[(u8, u8)], white: &[(u8, u8)]) -> Board {
        let mut board = Board::new();
        for &(r, c) in black {
            board.place_stone(Pos::new(r, c), Stone::Black).unwrap();
        }
        for &(r, c) in white {
            board.place_stone(Pos::new(r, c), Stone::White).unwrap();
        }
        board
    }

    #[test]
    fn test_search_empty_board() {
        let result = choose_move(&Board::new(), Stone::Black, 2).unwrap();
        assert_eq!(result.best_move, Move::new(Pos::new(7, 7), Stone::Black));
    }

    #[test]
    fn test_search_finds_winning_move() {
        let board = board_with(&[(9, 0), (9, 1), (9, 2), (9, 3)], &[(3, 3), (4, 4), (5, 5)]);
        let result = choose_move(&board, Stone::Black, 1).unwrap();
        assert_eq!(result.best_move.pos, Pos::new(9, 4));
    }

    #[test]
    fn test_search_blocks_opponent_win() {
        let board = board_with(&[(10, 0), (2, 2)], &[(9, 0), (9, 1), (9, 2), (9, 3)]);
        let result = choose_move(&board, Stone::Black, 2).unwrap();
        assert_eq!(result.best_move.pos, Pos::new(9, 4));
    }

    #[test]
    fn test_winning_score_prefers_fast_win() {
        let board = board_with(&[(7, 3), (7, 4), (7, 5), (7, 6)], &[(7, 2), (0, 0), (0, 14)]);
        let result = choose_move(&board, Stone::Black, 3).unwrap();
        assert_eq!(result.best_move.pos, Pos::new(7, 7));
        assert_eq!(result.score, WIN_SCORE - 1);
        assert!(result.is_winning());
    }

    #[test]
    fn test_losing_score_detected() {
        // White has two separate fours; Black can block only one
        let board = board_with(
            &[(7, 2), (1, 10), (0, 14)],
            &[(7, 3), (7, 4), (7, 5), (7, 6), (2, 10), (3, 10), (4, 10), (5, 10)],
        );
        let result = choose_move(&board, Stone::Black, 2).unwrap();
        assert!(result.is_losing(), "score {} should be a loss", result.score);
    }

    #[test]
    fn test_alpha_beta_prunes() {
        let board = board_with(&[(7, 7), (8, 8)], &[(7, 8), (6, 6)]);
        let plain = Searcher::new(SearchConfig::with_depth(3).alpha_beta(false))
            .choose_move(&board, Stone::Black)
            .unwrap();
        let pruned = Searcher::new(SearchConfig::with_depth(3))
            .choose_move(&board, Stone::Black)
            .unwrap();
        assert_eq!(plain.best_move, pruned.best_move);
        assert_eq!(plain.score, pruned.score);
        assert_eq!(plain.stats.cutoffs, 0);
        assert!(pruned.stats.cutoffs > 0);
        assert!(pruned.nodes() < plain.nodes());
    }

    #[test]
    fn test_tie_break_takes_first_in_order() {
        // A lone center stone: the position is symmetric, so many replies
        // share the best depth-1 score
        let board = board_with(&[(7, 7)], &[]);
        let result = choose_move(&board, Stone::White, 1).unwrap();

        let moves = ordered_moves(&board, Stone::White, 2);
        let scores: Vec<i32> = moves
            .iter()
            .map(|&pos| {
                let mut child = board.clone();
                child.place_stone(pos, Stone::White).unwrap();
                -evaluate(&child, Stone::Black)
            })
            .collect();
        let best = *scores.iter().max().unwrap();
        let ties = scores.iter().filter(|&&s| s == best).count();
        assert!(ties > 1, "position should have tied moves");
        let first_best = moves[scores.iter().position(|&s| s == best).unwrap()];
        assert_eq!(result.best_move.pos, first_best);
        assert_eq!(result.score, best);
    }

    #[test]
    fn test_negamax_restores_board() {
        let mut board = board_with(&[(7, 7), (7, 8), (9, 9)], &[(8, 8), (6, 6)]);
        let original = board.clone();
        let config = SearchConfig::with_depth(3);
        let budget = Budget::unlimited();
        let mut worker = Worker::new(&config, &budget);
        let _ = worker.negamax(&mut board, Stone::White, 3, 0, -INF, INF, None);
        assert_eq!(board, original);
    }

    #[test]
    fn test_node_budget_stops_early() {
        let board = board_with(&[(7, 7), (7, 8), (8, 7)], &[(6, 6), (8, 8), (6, 8)]);
        let config = SearchConfig::with_depth(6).node_budget(2_000);
        let result = Searcher::new(config).choose_move(&board, Stone::Black).unwrap();
        assert!(result.depth >= 1);
        assert!(result.depth < 6);
        assert!(board.is_empty(result.best_move.pos));
    }

    #[test]
    fn test_time_limit_returns_move() {
        let board = board_with(&[(7, 7), (7, 8)], &[(6, 6), (8, 8)]);
        let config = SearchConfig::with_depth(10).time_limit(Duration::from_millis(50));
        let result = Searcher::new(config).choose_move(&board, Stone::White).unwrap();
        assert!(result.depth >= 1);
        assert!(board.is_empty(result.best_move.pos));
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let board = board_with(&[(7, 7), (7, 8), (9, 6)], &[(8, 8), (6, 6), (8, 7)]);
        for use_alpha_beta in [true, false] {
            let base = SearchConfig::with_depth(2).alpha_beta(use_alpha_beta);
            let sequential = Searcher::new(base.clone()).choose_move(&board, Stone::Black).unwrap();
            let parallel = Searcher::new(base.parallel(true)).choose_move(&board, Stone::Black).unwrap();
            assert_eq!(sequential.best_move, parallel.best_move);
            assert_eq!(sequential.score, parallel.score);
        }
    }

    #[test]
    fn test_invalid_depth() {
        assert_eq!(
            choose_move(&Board::new(), Stone::Black, 0).unwrap_err(),
            GomokuError::InvalidDepth(0)
        );
    }

    #[test]
    fn test_search_after_game_over() {
        let board = board_with(&[(0, 0), (0, 1), (0, 2), (0, 3), (0, 4)], &[(5, 5), (6, 6)]);
        assert_eq!(
            choose_move(&board, Stone::White, 2).unwrap_err(),
            GomokuError::GameOver(Stone::Black)
        );
    }
}
