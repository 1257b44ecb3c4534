//! Position evaluation
//!
//! - [`patterns`]: run weights
//! - [`heuristic`]: whole-board evaluation for one side

pub mod heuristic;
pub mod patterns;

pub use heuristic::evaluate;
pub use patterns::{run_score, split_score, PatternScore};
