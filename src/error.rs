//! Error types for the Gomoku engine

use std::fmt;

use thiserror::Error;

use crate::board::{Pos, Stone, BOARD_SIZE};

/// Why a placement or removal was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidMoveReason {
    /// Coordinates fall outside the grid
    OutOfRange,
    /// Target cell already holds a stone
    Occupied,
    /// Removal requested on a cell that holds nothing
    AlreadyEmpty,
    /// The game has already reached a terminal state
    GameOver,
}

impl fmt::Display for InvalidMoveReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            InvalidMoveReason::OutOfRange => "coordinates outside the board",
            InvalidMoveReason::Occupied => "cell is already occupied",
            InvalidMoveReason::AlreadyEmpty => "cell is already empty",
            InvalidMoveReason::GameOver => "game is already over",
        };
        f.write_str(text)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GomokuError {
    #[error("invalid move at ({}, {}): {reason}", .pos.row, .pos.col)]
    InvalidMove { pos: Pos, reason: InvalidMoveReason },
    #[error("coordinate ({row}, {col}) is outside the {size}x{size} board", size = BOARD_SIZE)]
    OutOfRange { row: usize, col: usize },
    #[error("no legal moves left, the board is full")]
    NoLegalMoves,
    #[error("search depth must be at least 1, got {0}")]
    InvalidDepth(i8),
    #[error("game is already decided, {0:?} has five in a row")]
    GameOver(Stone),
    #[error("cannot parse board, line {line}: {msg}")]
    ParseBoard { line: usize, msg: String },
}

pub type Result<T> = std::result::Result<T, GomokuError>;
