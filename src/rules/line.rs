//! Line scanning: runs of same-colored stones through a cell
//!
//! A run is the maximal contiguous sequence of one color along a direction.
//! Each end is open when the next cell is on the board and empty, blocked
//! when it is off the board or holds the other color.

use crate::board::{Board, Pos, Stone};
use crate::error::{GomokuError, Result};

/// Length needed to win
pub const WIN_LENGTH: u8 = 5;

/// The four principal line directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Horizontal,
    Vertical,
    /// Top-left to bottom-right
    Diagonal,
    /// Top-right to bottom-left
    AntiDiagonal,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::Diagonal,
        Direction::AntiDiagonal,
    ];

    /// Unit step `(dr, dc)` toward the run's "after" end
    #[inline]
    pub const fn step(self) -> (i32, i32) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::Diagonal => (1, 1),
            Direction::AntiDiagonal => (1, -1),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunEnd {
    Open,
    Blocked,
}

/// A run through one cell along one direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    pub direction: Direction,
    pub length: u8,
    /// `[before, after]` relative to `direction.step()`
    pub ends: [RunEnd; 2],
    /// Cells available to grow into, counting the run itself (capped)
    pub room: u8,
}

impl Run {
    #[inline]
    pub fn open_ends(&self) -> u8 {
        self.ends.iter().filter(|&&end| end == RunEnd::Open).count() as u8
    }

    #[inline]
    pub fn is_five(&self) -> bool {
        self.length >= WIN_LENGTH
    }

    /// A run that can never become five: not enough room on the line
    #[inline]
    pub fn is_dead(&self) -> bool {
        !self.is_five() && self.room < WIN_LENGTH
    }
}

/// Scan the four runs through `pos` for `stone`.
///
/// The anchor cell is counted as `stone` whatever it holds, so the same
/// call answers both "how long is this run" for a placed stone and "what
/// would playing here make" for an empty cell.
pub fn scan_runs(board: &Board, pos: Pos, stone: Stone) -> Result<[Run; 4]> {
    if !pos.in_bounds() {
        return Err(GomokuError::OutOfRange {
            row: pos.row as usize,
            col: pos.col as usize,
        });
    }
    Ok(Direction::ALL.map(|direction| run_through(board, pos, stone, direction)))
}

/// Unchecked single-direction scan; `pos` must be on the board.
#[inline]
pub fn run_through(board: &Board, pos: Pos, stone: Stone, direction: Direction) -> Run {
    let (dr, dc) = direction.step();
    let (before_len, before_end) = extend(board, pos, stone, -dr, -dc);
    let (after_len, after_end) = extend(board, pos, stone, dr, dc);
    let length = 1 + before_len + after_len;

    let room = if length >= WIN_LENGTH {
        length
    } else {
        let needed = WIN_LENGTH - length;
        let free_before = before_end.map_or(0, |end| free_cells(board, end, stone, -dr, -dc, needed));
        let free_after = after_end.map_or(0, |end| free_cells(board, end, stone, dr, dc, needed));
        (length + free_before + free_after).min(WIN_LENGTH)
    };

    let end_state = |end: Option<Pos>| match end {
        Some(p) if board.is_empty(p) => RunEnd::Open,
        _ => RunEnd::Blocked,
    };

    Run {
        direction,
        length,
        ends: [end_state(before_end), end_state(after_end)],
        room,
    }
}

/// Count same-colored stones from `pos` (exclusive) along `(dr, dc)`.
/// Returns the count and the first cell past the run, if on the board.
#[inline]
fn extend(board: &Board, pos: Pos, stone: Stone, dr: i32, dc: i32) -> (u8, Option<Pos>) {
    let mut count = 0u8;
    let mut cursor = pos.offset(dr, dc, 1);
    while let Some(p) = cursor {
        if board.get(p) != Some(stone) {
            break;
        }
        count += 1;
        cursor = p.offset(dr, dc, 1);
    }
    (count, cursor)
}

/// Cells starting at `from` that `stone` could still occupy, up to `limit`
#[inline]
fn free_cells(board: &Board, from: Pos, stone: Stone, dr: i32, dc: i32, limit: u8) -> u8 {
    let mut count = 0u8;
    let mut cursor = Some(from);
    while let Some(p) = cursor {
        if count >= limit || board.get(p) == Some(stone.opponent()) {
            break;
        }
        count += 1;
        cursor = p.offset(dr, dc, 1);
    }
    count
}
