//! Game state for a driver (CLI, GUI, test harness)
//!
//! `Game` exclusively owns its board. Placements go through [`Game::play`],
//! which checks turn order and advances the status machine in
//! [`GameStatus`]; once a terminal status is reached further moves are
//! rejected.

use log::debug;

use crate::board::{Board, Move, Pos, Stone};
use crate::engine::{AIEngine, MoveResult};
use crate::error::{GomokuError, InvalidMoveReason, Result};
use crate::rules::{game_status, status_after_move, GameStatus};

#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    to_move: Stone,
    status: GameStatus,
    history: Vec<Move>,
}

impl Game {
    /// New game, Black moves first
    pub fn new() -> Self {
        Self::with_first(Stone::Black)
    }

    pub fn with_first(first: Stone) -> Self {
        Self {
            board: Board::new(),
            to_move: first,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Resume from a loaded position. The status is recomputed from the
    /// whole board since the last move is unknown.
    pub fn from_board(board: Board, to_move: Stone) -> Self {
        let status = game_status(&board);
        Self {
            board,
            to_move,
            status,
            history: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn to_move(&self) -> Stone {
        self.to_move
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn history(&self) -> &[Move] {
        &self.history
    }

    pub fn last_move(&self) -> Option<Move> {
        self.history.last().copied()
    }

    /// Place a stone for the side to move and return the new status.
    pub fn play(&mut self, pos: Pos) -> Result<GameStatus> {
        if self.status.is_terminal() {
            return Err(GomokuError::InvalidMove {
                pos,
                reason: InvalidMoveReason::GameOver,
            });
        }

        let stone = self.to_move;
        self.board.place_stone(pos, stone)?;
        self.history.push(Move::new(pos, stone));
        self.status = status_after_move(&self.board, pos, stone);
        self.to_move = stone.opponent();

        debug!("{stone} played {pos}, status {}", self.status);
        Ok(self.status)
    }

    /// Let the engine choose and play the move for the side to move.
    pub fn play_ai(&mut self, engine: &AIEngine) -> Result<MoveResult> {
        if self.status.is_terminal() {
            return Err(GomokuError::InvalidMove {
                pos: self.last_move().map_or(Pos::center(), |m| m.pos),
                reason: InvalidMoveReason::GameOver,
            });
        }
        let result = engine.get_move(&self.board, self.to_move)?;
        self.play(result.best_move.pos)?;
        Ok(result)
    }

    /// Take back the last move played through this game.
    pub fn undo(&mut self) -> Option<Move> {
        let last = self.history.pop()?;
        // History only records stones this game placed, so removal succeeds
        self.board.take(last.pos);
        self.to_move = last.stone;
        self.status = game_status(&self.board);
        Some(last)
    }

    /// Start over on an empty board
    pub fn reset(&mut self, first: Stone) {
        self.board.clear();
        self.history.clear();
        self.to_move = first;
        self.status = GameStatus::InProgress;
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
