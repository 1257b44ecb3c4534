//! Heuristic evaluation function for Gomoku board positions
//!
//! Scores a board for one side based on:
//! - Win/loss detection (any five)
//! - Run scoring (open and blocked runs of each length)
//! - One-gap shapes (`OO_OO`, `O_OOO`, `_OO_O_`)
//! - Multi-threat combinations
//! - Positional bonuses (center control)

use crate::board::{Board, Pos, Stone, BOARD_SIZE};
use crate::rules::{run_through, Direction, Run};

use super::patterns::{run_score, split_score, PatternScore};

/// Maximum Manhattan distance from center on a 15x15 board
const MAX_CENTER_DIST: i32 = 14;

/// Weight per distance unit from center
const POSITION_WEIGHT: i32 = 1;

/// Evaluate the board from the perspective of the given color.
///
/// Returns a score where:
/// - Positive values indicate advantage for `stone`
/// - Negative values indicate disadvantage for `stone`
/// - `PatternScore::FIVE` when `stone` has five in a row
/// - `-PatternScore::FIVE` when the opponent has five in a row
///
/// Every other position lands strictly inside
/// `±PatternScore::MAX_HEURISTIC`. The function is a pure function of the
/// board: swapping the colors on the board and the side gives the same value.
#[must_use]
pub fn evaluate(board: &Board, stone: Stone) -> i32 {
    let opponent = stone.opponent();

    let mine = evaluate_side(board, stone);
    if mine.has_five {
        return PatternScore::FIVE;
    }
    let theirs = evaluate_side(board, opponent);
    if theirs.has_five {
        return -PatternScore::FIVE;
    }

    let pattern_score = mine.score - theirs.score;
    let position_score = evaluate_positions(board, stone) - evaluate_positions(board, opponent);

    (pattern_score + position_score).clamp(
        -(PatternScore::MAX_HEURISTIC - 1),
        PatternScore::MAX_HEURISTIC - 1,
    )
}

struct SideScore {
    score: i32,
    has_five: bool,
}

/// Sum run scores for one color.
///
/// Each run is counted exactly once, from its first stone along the
/// direction (no same-color stone in the negative direction). A run
/// followed by one empty cell and another run of the same color scores as
/// the stronger of itself and the joined shape.
///
/// Also detects threat combinations the opponent cannot block at once:
/// - Open four plus any other four or open three
/// - Two fours
/// - Four plus open three
/// - Two open threes
fn evaluate_side(board: &Board, stone: Stone) -> SideScore {
    let mut score = 0i32;
    let mut open_fours = 0i32;
    let mut closed_fours = 0i32;
    let mut open_threes = 0i32;

    for pos in board.stones(stone).positions() {
        for direction in Direction::ALL {
            if !is_run_start(board, pos, stone, direction) {
                continue;
            }
            let run = run_through(board, pos, stone, direction);
            if run.is_five() {
                return SideScore { score: PatternScore::FIVE, has_five: true };
            }

            let split = run_after_gap(board, pos, stone, &run).map_or(0, |second| split_score(&run, &second));
            let pattern_score = run_score(&run).max(split);
            score = score.saturating_add(pattern_score);

            // The far half of a split shape is already in its threat
            if split_before(board, pos, stone, &run) >= pattern_score {
                continue;
            }
            match pattern_score {
                PatternScore::OPEN_FOUR => open_fours += 1,
                PatternScore::CLOSED_FOUR => closed_fours += 1,
                PatternScore::OPEN_THREE => open_threes += 1,
                _ => {}
            }
        }
    }

    if open_fours >= 1 && (open_fours + closed_fours >= 2 || open_threes >= 1) {
        score = score.saturating_add(PatternScore::OPEN_FOUR);
    }
    if closed_fours >= 2 {
        score = score.saturating_add(PatternScore::OPEN_FOUR);
    }
    if closed_fours >= 1 && open_threes >= 1 {
        score = score.saturating_add(PatternScore::OPEN_FOUR);
    }
    if open_threes >= 2 {
        score = score.saturating_add(PatternScore::OPEN_FOUR);
    }

    SideScore { score, has_five: false }
}

#[inline]
fn is_run_start(board: &Board, pos: Pos, stone: Stone, direction: Direction) -> bool {
    let (dr, dc) = direction.step();
    pos.offset(-dr, -dc, 1)
        .map_or(true, |prev| board.get(prev) != Some(stone))
}

/// The run past a single empty cell after `run`, if one starts there.
/// `start` is the first stone of `run`.
#[inline]
fn run_after_gap(board: &Board, start: Pos, stone: Stone, run: &Run) -> Option<Run> {
    let (dr, dc) = run.direction.step();
    let gap = start.offset(dr, dc, i32::from(run.length))?;
    let next = gap.offset(dr, dc, 1)?;
    if board.is_empty(gap) && board.get(next) == Some(stone) {
        Some(run_through(board, next, stone, run.direction))
    } else {
        None
    }
}

/// Score of the split shape `run` closes as its second half, or 0.
#[inline]
fn split_before(board: &Board, start: Pos, stone: Stone, run: &Run) -> i32 {
    let (dr, dc) = run.direction.step();
    match (start.offset(-dr, -dc, 1), start.offset(-dr, -dc, 2)) {
        (Some(gap), Some(prev)) if board.is_empty(gap) && board.get(prev) == Some(stone) => {
            split_score(&run_through(board, prev, stone, run.direction), run)
        }
        _ => 0,
    }
}

/// Stones closer to the center have more lines through them.
fn evaluate_positions(board: &Board, stone: Stone) -> i32 {
    let center = (BOARD_SIZE / 2) as i32;
    board
        .stones(stone)
        .positions()
        .map(|pos| {
            let dist = (i32::from(pos.row) - center).abs() + (i32::from(pos.col) - center).abs();
            (MAX_CENTER_DIST - dist) * POSITION_WEIGHT
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place_all(board: &mut Board, stones: &[(u8, u8)], stone: Stone) {
        for &(r, c) in stones {
            board.place_stone(Pos::new(r, c), stone).unwrap();
        }
    }

    #[test]
    fn test_evaluate_empty_board() {
        let board = Board::new();
        assert_eq!(evaluate(&board, Stone::Black), 0);
        assert_eq!(evaluate(&board, Stone::White), 0);
    }

    #[test]
    fn test_evaluate_center_bonus() {
        let mut center = Board::new();
        place_all(&mut center, &[(7, 7)], Stone::Black);
        let mut corner = Board::new();
        place_all(&mut corner, &[(0, 0)], Stone::Black);

        let center_score = evaluate(&center, Stone::Black);
        let corner_score = evaluate(&corner, Stone::Black);
        assert!(center_score > 0);
        assert!(
            center_score > corner_score,
            "center ({center_score}) should beat corner ({corner_score})"
        );
    }

    #[test]
    fn test_five_is_won_and_lost() {
        let mut board = Board::new();
        place_all(&mut board, &[(9, 0), (9, 1), (9, 2), (9, 3), (9, 4)], Stone::Black);
        place_all(&mut board, &[(3, 3), (3, 4), (3, 5), (3, 6)], Stone::White);

        assert_eq!(evaluate(&board, Stone::Black), PatternScore::FIVE);
        assert_eq!(evaluate(&board, Stone::White), -PatternScore::FIVE);
    }

    #[test]
    fn test_non_terminal_below_five() {
        let mut board = Board::new();
        // Two open fours and an open three: as strong as a live position gets
        place_all(&mut board, &[(2, 2), (2, 3), (2, 4), (2, 5)], Stone::Black);
        place_all(&mut board, &[(6, 2), (6, 3), (6, 4), (6, 5)], Stone::Black);
        place_all(&mut board, &[(10, 2), (10, 3), (10, 4)], Stone::Black);

        let score = evaluate(&board, Stone::Black);
        assert!(score > PatternScore::OPEN_FOUR);
        assert!(score < PatternScore::MAX_HEURISTIC);
    }

    #[test]
    fn test_open_four_beats_closed_four() {
        let mut open = Board::new();
        place_all(&mut open, &[(7, 3), (7, 4), (7, 5), (7, 6)], Stone::Black);

        let mut closed = open.clone();
        place_all(&mut closed, &[(7, 2)], Stone::White);
        let mut open_with_far_white = open.clone();
        place_all(&mut open_with_far_white, &[(0, 14)], Stone::White);

        let open_score = evaluate(&open_with_far_white, Stone::Black);
        let closed_score = evaluate(&closed, Stone::Black);
        assert!(
            open_score > closed_score,
            "open four {open_score} should beat closed four {closed_score}"
        );
    }

    #[test]
    fn test_monotonic_open_run_growth() {
        // Extending an open horizontal run one stone at a time strictly
        // raises the score
        let mut board = Board::new();
        let mut previous = evaluate(&board, Stone::Black);
        for col in 5..10 {
            board.place_stone(Pos::new(7, col), Stone::Black).unwrap();
            let score = evaluate(&board, Stone::Black);
            assert!(
                score > previous,
                "run of {} scored {score}, not above {previous}",
                col - 4
            );
            previous = score;
        }
        assert_eq!(previous, PatternScore::FIVE);
    }

    #[test]
    fn test_monotonic_with_opponent_present() {
        let mut board = Board::new();
        place_all(&mut board, &[(3, 3), (3, 4), (11, 10), (12, 12)], Stone::White);
        let mut previous = evaluate(&board, Stone::Black);
        for row in 4..8 {
            board.place_stone(Pos::new(row, 8), Stone::Black).unwrap();
            let score = evaluate(&board, Stone::Black);
            assert!(score > previous);
            previous = score;
        }
    }

    #[test]
    fn test_color_swap_symmetry() {
        let mut board = Board::new();
        place_all(&mut board, &[(7, 7), (7, 8), (7, 9), (8, 8), (2, 13)], Stone::Black);
        place_all(&mut board, &[(6, 6), (5, 5), (9, 9), (14, 0)], Stone::White);

        let mirrored = board.mirror_colors();
        assert_eq!(evaluate(&board, Stone::Black), evaluate(&mirrored, Stone::White));
        assert_eq!(evaluate(&board, Stone::White), evaluate(&mirrored, Stone::Black));
    }

    #[test]
    fn test_negamax_antisymmetry() {
        let mut board = Board::new();
        place_all(&mut board, &[(9, 7), (9, 8), (9, 9)], Stone::Black);
        place_all(&mut board, &[(5, 5), (5, 6)], Stone::White);

        assert_eq!(evaluate(&board, Stone::Black), -evaluate(&board, Stone::White));
    }

    #[test]
    fn test_double_open_three_bonus() {
        let mut single = Board::new();
        place_all(&mut single, &[(7, 4), (7, 5), (7, 6)], Stone::Black);
        let mut double = single.clone();
        place_all(&mut double, &[(2, 10), (3, 10), (4, 10)], Stone::Black);

        let single_score = evaluate(&single, Stone::Black);
        let double_score = evaluate(&double, Stone::Black);
        assert!(double_score - single_score > PatternScore::OPEN_FOUR);
    }

    #[test]
    fn test_evaluate_perspective() {
        let mut ours = Board::new();
        place_all(&mut ours, &[(9, 1), (9, 2), (9, 3)], Stone::Black);
        let theirs = ours.mirror_colors();

        assert!(evaluate(&ours, Stone::Black) > 0);
        assert!(evaluate(&theirs, Stone::Black) < 0);
    }

    #[test]
    fn test_deterministic() {
        let mut board = Board::new();
        place_all(&mut board, &[(1, 1), (2, 2), (3, 4)], Stone::White);
        place_all(&mut board, &[(4, 4), (5, 5)], Stone::Black);
        let first = evaluate(&board, Stone::White);
        for _ in 0..3 {
            assert_eq!(evaluate(&board, Stone::White), first);
        }
    }

    #[test]
    fn test_split_four_outranks_open_three() {
        let mut open_three = Board::new();
        place_all(&mut open_three, &[(7, 4), (7, 5), (7, 6)], Stone::Black);
        place_all(&mut open_three, &[(0, 0)], Stone::White);
        let three_score = evaluate(&open_three, Stone::Black);

        for black in [[(7, 3), (7, 4), (7, 6), (7, 7)], [(7, 3), (7, 5), (7, 6), (7, 7)]] {
            let mut board = Board::new();
            place_all(&mut board, &black, Stone::Black);
            place_all(&mut board, &[(0, 0)], Stone::White);

            let score = evaluate(&board, Stone::Black);
            assert!(score >= PatternScore::CLOSED_FOUR, "{black:?} scored {score}");
            assert!(score > three_score, "{black:?} scored {score}, open three {three_score}");
        }
    }

    #[test]
    fn test_split_three_scores_like_three() {
        // _OO_O_
        let mut open = Board::new();
        place_all(&mut open, &[(7, 4), (7, 5), (7, 7)], Stone::Black);
        place_all(&mut open, &[(0, 0)], Stone::White);
        let open_score = evaluate(&open, Stone::Black);
        assert!(open_score >= PatternScore::OPEN_THREE, "open split three scored {open_score}");

        // XOO_O_
        let mut closed = Board::new();
        place_all(&mut closed, &[(7, 4), (7, 5), (7, 7)], Stone::Black);
        place_all(&mut closed, &[(7, 3)], Stone::White);
        let closed_score = evaluate(&closed, Stone::Black);
        assert!(closed_score >= PatternScore::CLOSED_THREE, "closed split three scored {closed_score}");
        assert!(closed_score < PatternScore::OPEN_THREE);
    }

    #[test]
    fn test_filling_gap_raises_score() {
        let mut board = Board::new();
        place_all(&mut board, &[(7, 4), (7, 5), (7, 7)], Stone::Black);
        place_all(&mut board, &[(2, 2)], Stone::White);
        let split = evaluate(&board, Stone::Black);

        board.place_stone(Pos::new(7, 6), Stone::Black).unwrap();
        let joined = evaluate(&board, Stone::Black);
        assert!(joined > split, "open four {joined} should beat split three {split}");
    }

    #[test]
    fn test_split_shapes_color_symmetric() {
        let mut board = Board::new();
        place_all(&mut board, &[(7, 3), (7, 4), (7, 6), (3, 3), (5, 5)], Stone::Black);
        place_all(&mut board, &[(10, 1), (10, 3), (10, 4), (10, 5), (7, 2)], Stone::White);

        let mirrored = board.mirror_colors();
        assert_eq!(evaluate(&board, Stone::Black), evaluate(&mirrored, Stone::White));
        assert_eq!(evaluate(&board, Stone::Black), -evaluate(&board, Stone::White));
    }
}
