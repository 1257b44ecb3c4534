//! Pattern scores for Gomoku evaluation
//!
//! Weights grow steeply with run length and an open end is always worth
//! more than a blocked one at the same length.

use crate::rules::{Run, RunEnd, WIN_LENGTH};

/// Pattern scores for evaluation
pub struct PatternScore;

impl PatternScore {
    /// Five in a row - decided game
    pub const FIVE: i32 = 10_000_000;

    /// Open four: _OOOO_ (cannot be stopped)
    pub const OPEN_FOUR: i32 = 100_000;
    /// Closed four: XOOOO_ or _OOOOX (one way to extend)
    pub const CLOSED_FOUR: i32 = 10_000;

    /// Open three: _OOO_ (becomes open four if not blocked)
    pub const OPEN_THREE: i32 = 5_000;
    /// Closed three: XOOO_ or _OOOX
    pub const CLOSED_THREE: i32 = 500;

    pub const OPEN_TWO: i32 = 200;
    pub const CLOSED_TWO: i32 = 20;

    pub const OPEN_ONE: i32 = 10;
    pub const CLOSED_ONE: i32 = 1;

    /// Bound for any non-terminal evaluation so a five always dominates
    pub const MAX_HEURISTIC: i32 = Self::FIVE / 2;
}

/// Score a single run.
///
/// Dead runs (not enough room on the line to ever reach five) and runs
/// blocked on both ends are worth nothing.
#[inline]
pub fn run_score(run: &Run) -> i32 {
    if run.is_five() {
        return PatternScore::FIVE;
    }
    if run.is_dead() {
        return 0;
    }
    match (run.length, run.open_ends()) {
        (4, 2) => PatternScore::OPEN_FOUR,
        (4, 1) => PatternScore::CLOSED_FOUR,
        (3, 2) => PatternScore::OPEN_THREE,
        (3, 1) => PatternScore::CLOSED_THREE,
        (2, 2) => PatternScore::OPEN_TWO,
        (2, 1) => PatternScore::CLOSED_TWO,
        (1, 2) => PatternScore::OPEN_ONE,
        (1, 1) => PatternScore::CLOSED_ONE,
        _ => 0,
    }
}

/// Score two runs on one line separated by a single empty cell
/// (`OO_OO`, `O_OOO`, `_OO_O_`). Filling the gap joins them.
///
/// Four or more stones around the gap are one move from five, the same
/// threat as a closed four. Three stones are a three whose strength
/// depends on the outer ends of the pair.
pub fn split_score(first: &Run, second: &Run) -> i32 {
    let stones = first.length + second.length;
    if stones + 1 >= WIN_LENGTH {
        return PatternScore::CLOSED_FOUR;
    }
    if stones < 3 || first.is_dead() {
        return 0;
    }
    match (first.ends[0], second.ends[1]) {
        (RunEnd::Open, RunEnd::Open) => PatternScore::OPEN_THREE,
        (RunEnd::Open, RunEnd::Blocked) | (RunEnd::Blocked, RunEnd::Open) => PatternScore::CLOSED_THREE,
        (RunEnd::Blocked, RunEnd::Blocked) => 0,
    }
}
