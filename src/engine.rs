//! Main AI Engine integrating the search components
//!
//! The engine answers two questions for a game driver:
//!
//! 1. **Which move?** An immediate five is played at once; everything else
//!    goes through minimax (with or without alpha-beta pruning).
//! 2. **Who won?** The verdict after a placement, from the placed cell.
//!
//! # Example
//!
//! ```
//! use gomoku::{AIEngine, Board, Pos, SearchConfig, Stone};
//!
//! let engine = AIEngine::new(SearchConfig::with_depth(2)).unwrap();
//! let mut board = Board::new();
//! board.place_stone(Pos::new(7, 7), Stone::Black).unwrap();
//!
//! let result = engine.get_move(&board, Stone::White).unwrap();
//! println!("Best move: {}", result.best_move);
//! println!("Search type: {:?}", result.search_type);
//! println!("Time: {}ms", result.time_ms);
//! ```

use std::time::{Duration, Instant};

use log::info;

use crate::board::{Board, Move, Pos, Stone};
use crate::error::{GomokuError, Result};
use crate::eval::PatternScore;
use crate::rules::{check_winner, has_five_in_row, status_after_move, GameStatus};
use crate::search::{ordered_moves, SearchConfig, SearchResult, Searcher};

/// Which part of the engine produced the move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// Completes five in a row right now
    ImmediateWin,
    /// Minimax with alpha-beta pruning
    AlphaBeta,
    /// Plain minimax
    Minimax,
}

/// Result of a move search with detailed statistics
#[derive(Debug, Clone)]
pub struct MoveResult {
    pub best_move: Move,
    /// Score of the move for the side that plays it
    pub score: i32,
    pub search_type: SearchType,
    /// Wall time, whole milliseconds (see `elapsed` for the exact value)
    pub time_ms: u64,
    pub elapsed: Duration,
    pub nodes: u64,
    /// Depth completed (0 for an immediate win)
    pub depth: i8,
}

impl MoveResult {
    #[inline]
    fn immediate_win(best_move: Move, elapsed: Duration) -> Self {
        Self {
            best_move,
            score: PatternScore::FIVE,
            search_type: SearchType::ImmediateWin,
            time_ms: elapsed.as_millis() as u64,
            elapsed,
            nodes: 1,
            depth: 0,
        }
    }

    #[inline]
    fn from_search(result: SearchResult, search_type: SearchType) -> Self {
        Self {
            best_move: result.best_move,
            score: result.score,
            search_type,
            time_ms: result.elapsed.as_millis() as u64,
            elapsed: result.elapsed,
            nodes: result.stats.nodes,
            depth: result.depth,
        }
    }
}

/// Main AI Engine for Gomoku.
///
/// Holds a validated search configuration. The board is never stored: every
/// call takes the caller's board by reference and searches a private copy.
#[derive(Debug, Clone)]
pub struct AIEngine {
    searcher: Searcher,
}

impl AIEngine {
    /// Create an engine, rejecting a depth below 1.
    pub fn new(config: SearchConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            searcher: Searcher::new(config),
        })
    }

    pub fn with_depth(depth_limit: i8) -> Result<Self> {
        Self::new(SearchConfig::with_depth(depth_limit))
    }

    pub fn config(&self) -> &SearchConfig {
        self.searcher.config()
    }

    /// Pick a move for `stone`.
    ///
    /// # Errors
    ///
    /// Same as [`Searcher::choose_move`]: `NoLegalMoves` on a full board and
    /// `GameOver` once a five exists.
    pub fn get_move(&self, board: &Board, stone: Stone) -> Result<MoveResult> {
        let start = Instant::now();

        if board.is_full() {
            return Err(GomokuError::NoLegalMoves);
        }
        if let Some(winner) = check_winner(board) {
            return Err(GomokuError::GameOver(winner));
        }

        if let Some(pos) = self.find_immediate_win(board, stone) {
            let result = MoveResult::immediate_win(Move::new(pos, stone), start.elapsed());
            info!("{stone} completes five at {pos}");
            return Ok(result);
        }

        let search_type = if self.config().use_alpha_beta {
            SearchType::AlphaBeta
        } else {
            SearchType::Minimax
        };
        let result = self.searcher.choose_move(board, stone)?;
        Ok(MoveResult::from_search(result, search_type))
    }

    /// Status of the game right after `last_move` was placed on `board`
    pub fn verdict(&self, board: &Board, last_move: Move) -> GameStatus {
        status_after_move(board, last_move.pos, last_move.stone)
    }

    /// First cell in move order that completes five for `stone`
    fn find_immediate_win(&self, board: &Board, stone: Stone) -> Option<Pos> {
        let mut work_board = board.clone();
        ordered_moves(board, stone, self.config().neighborhood_radius)
            .into_iter()
            .find(|&pos| {
                work_board.put(pos, stone);
                let wins = has_five_in_row(&work_board, pos, stone);
                work_board.take(pos);
                wins
            })
    }
}

impl Default for AIEngine {
    fn default() -> Self {
        Self {
            searcher: Searcher::new(SearchConfig::default()),
        }
    }
}
