//! Gomoku AI engine: five in a row on a 15x15 board
//!
//! Rules:
//! - 15x15 board, Black and White alternate
//! - Five or more in a row (horizontal, vertical, either diagonal) wins
//! - A full board with no five is a draw
//!
//! # Architecture
//!
//! - [`board`]: Board representation with bitboards
//! - [`rules`]: Line scanning, win detection, game status
//! - [`eval`]: Position evaluation from run patterns
//! - [`search`]: Minimax with optional alpha-beta pruning
//! - [`engine`]: AI facade (immediate wins, search, verdicts)
//! - [`game`]: Turn order and status machine for a driver
//! - [`selfplay`]: Engine against a random player
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{AIEngine, Board, Pos, Stone};
//!
//! let mut board = Board::new();
//! let engine = AIEngine::with_depth(2).unwrap();
//!
//! board.place_stone(Pos::new(7, 7), Stone::Black).unwrap();
//!
//! let result = engine.get_move(&board, Stone::White).unwrap();
//! board.place_stone(result.best_move.pos, Stone::White).unwrap();
//! println!("AI plays at {}", result.best_move.pos);
//! ```
//!
//! # Search
//!
//! 1. Immediate winning move (instant)
//! 2. Minimax over candidate cells near existing stones, alpha-beta
//!    pruning on by default
//!
//! Pruning never changes the chosen move or its score; it only visits
//! fewer nodes.

pub mod board;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub mod rules;
pub mod search;
pub mod selfplay;

// Re-export commonly used types for convenience
pub use board::{Board, Move, Pos, Stone, BOARD_SIZE};
pub use engine::{AIEngine, MoveResult, SearchType};
pub use error::{GomokuError, InvalidMoveReason, Result};
pub use eval::evaluate;
pub use game::Game;
pub use rules::{check_winner, game_status, has_five_in_row, GameStatus};
pub use search::{choose_move, SearchConfig, SearchResult, Searcher};
