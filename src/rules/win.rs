//! Win condition checking
//!
//! Five or more stones in a row wins; overlines (six or more) count.

use crate::board::{Board, Pos, Stone};

use super::line::{run_through, Direction, WIN_LENGTH};

/// Fast five-in-a-row check through a specific cell.
///
/// Only the four lines through `pos` are examined, so call it with the most
/// recent placement. Returns false when `pos` does not hold `stone`.
#[inline]
pub fn has_five_in_row(board: &Board, pos: Pos, stone: Stone) -> bool {
    if !pos.in_bounds() || board.get(pos) != Some(stone) {
        return false;
    }
    Direction::ALL
        .iter()
        .any(|&direction| run_through(board, pos, stone, direction).is_five())
}

/// The cells of the winning line through `pos`, in line order
pub fn find_five_line(board: &Board, pos: Pos, stone: Stone) -> Option<Vec<Pos>> {
    if !has_five_in_row(board, pos, stone) {
        return None;
    }
    for direction in Direction::ALL {
        let (dr, dc) = direction.step();
        let mut start = pos;
        while let Some(prev) = start.offset(-dr, -dc, 1) {
            if board.get(prev) != Some(stone) {
                break;
            }
            start = prev;
        }

        let mut line = vec![start];
        while let Some(next) = line[line.len() - 1].offset(dr, dc, 1) {
            if board.get(next) != Some(stone) {
                break;
            }
            line.push(next);
        }

        if line.len() >= WIN_LENGTH as usize {
            return Some(line);
        }
    }
    None
}

/// Full-board scan for a five of either color.
///
/// Used when no last move is known (a loaded position). Black is checked
/// first; a legal game never has fives of both colors.
pub fn check_winner(board: &Board) -> Option<Stone> {
    [Stone::Black, Stone::White].into_iter().find(|&stone| {
        board
            .stones(stone)
            .positions()
            .any(|pos| has_five_in_row(board, pos, stone))
    })
}
