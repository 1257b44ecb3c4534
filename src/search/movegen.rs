//! Candidate move generation and ordering
//!
//! Scanning all 225 cells at every node is the naive baseline. Instead,
//! candidates are the empty cells within a small neighborhood of existing
//! stones, which is where every sensible Gomoku move lies.

use crate::board::{Board, Pos, Stone, BOARD_SIZE, TOTAL_CELLS};
use crate::eval::run_score;
use crate::rules::{run_through, Direction};

/// Empty cells near existing stones, in row-major order.
///
/// `radius == 0` returns every empty cell. On an empty board the only
/// candidate is the center.
pub fn candidate_moves(board: &Board, radius: u8) -> Vec<Pos> {
    if board.is_board_empty() {
        return vec![Pos::center()];
    }
    if radius == 0 {
        return board.empty_cells().collect();
    }

    let radius = i32::from(radius);
    let mut near = [false; TOTAL_CELLS];
    for stone_pos in board.occupied() {
        for dr in -radius..=radius {
            for dc in -radius..=radius {
                let r = i32::from(stone_pos.row) + dr;
                let c = i32::from(stone_pos.col) + dc;
                if Pos::is_valid(r, c) {
                    near[r as usize * BOARD_SIZE + c as usize] = true;
                }
            }
        }
    }

    let moves: Vec<Pos> = (0..TOTAL_CELLS)
        .filter(|&idx| near[idx])
        .map(Pos::from_index)
        .filter(|&pos| board.is_empty(pos))
        .collect();

    // Every non-full board has an empty cell next to some stone, so this
    // only triggers on a full board
    if moves.is_empty() {
        return board.empty_cells().collect();
    }
    moves
}

/// Static priority of playing `pos` for `stone`: what it builds for us plus
/// what it takes away from the opponent. Attack counts double so a winning
/// cell sorts ahead of a blocking one.
pub fn score_move(board: &Board, pos: Pos, stone: Stone) -> i32 {
    let opponent = stone.opponent();
    let mut attack = 0i32;
    let mut defense = 0i32;
    for direction in Direction::ALL {
        attack = attack.saturating_add(run_score(&run_through(board, pos, stone, direction)));
        defense = defense.saturating_add(run_score(&run_through(board, pos, opponent, direction)));
    }
    attack.saturating_mul(2).saturating_add(defense)
}

/// Candidates sorted by descending priority.
///
/// The sort is stable over row-major order, so equal priorities keep their
/// scan order and the result is fully deterministic.
pub fn ordered_moves(board: &Board, stone: Stone, radius: u8) -> Vec<Pos> {
    let mut scored: Vec<(Pos, i32)> = candidate_moves(board, radius)
        .into_iter()
        .map(|pos| (pos, score_move(board, pos, stone)))
        .collect();
    scored.sort_by(|a, b| b.1.cmp(&a.1));
    scored.into_iter().map(|(pos, _)| pos).collect()
}
