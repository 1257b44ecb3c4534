//! Game status state machine
//!
//! `InProgress` moves to `BlackWins`/`WhiteWins` when a placement completes
//! five, or to `Draw` when the board fills without one. The other three
//! states are terminal.

use std::fmt;

use crate::board::{Board, Pos, Stone};

use super::win::{check_winner, has_five_in_row};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    InProgress,
    BlackWins,
    WhiteWins,
    Draw,
}

impl GameStatus {
    pub fn win_for(stone: Stone) -> Self {
        match stone {
            Stone::Black => GameStatus::BlackWins,
            Stone::White => GameStatus::WhiteWins,
        }
    }

    #[inline]
    pub fn is_terminal(self) -> bool {
        self != GameStatus::InProgress
    }

    pub fn winner(self) -> Option<Stone> {
        match self {
            GameStatus::BlackWins => Some(Stone::Black),
            GameStatus::WhiteWins => Some(Stone::White),
            GameStatus::InProgress | GameStatus::Draw => None,
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            GameStatus::InProgress => "in progress",
            GameStatus::BlackWins => "Black wins",
            GameStatus::WhiteWins => "White wins",
            GameStatus::Draw => "draw",
        };
        f.write_str(text)
    }
}

/// Status right after `stone` was placed at `last_move`
pub fn status_after_move(board: &Board, last_move: Pos, stone: Stone) -> GameStatus {
    if has_five_in_row(board, last_move, stone) {
        GameStatus::win_for(stone)
    } else if board.is_full() {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}

/// Status of an arbitrary position, scanning the whole board
pub fn game_status(board: &Board) -> GameStatus {
    match check_winner(board) {
        Some(stone) => GameStatus::win_for(stone),
        None if board.is_full() => GameStatus::Draw,
        None => GameStatus::InProgress,
    }
}
