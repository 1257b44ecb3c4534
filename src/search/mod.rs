//! Search module for Gomoku AI
//!
//! Contains:
//! - Search configuration (depth, pruning, neighborhood, budgets)
//! - Candidate move generation and ordering
//! - Minimax / alpha-beta search with optional iterative deepening

pub mod alphabeta;
pub mod config;
pub mod movegen;

pub use alphabeta::{choose_move, SearchResult, SearchStats, Searcher};
pub use config::SearchConfig;
pub use movegen::{candidate_moves, ordered_moves, score_move};
