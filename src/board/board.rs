//! Board structure with checked placement

use std::fmt;
use std::str::FromStr;

use super::bitboard::Bitboard;
use super::{Pos, Stone, BOARD_SIZE, TOTAL_CELLS};
use crate::error::{GomokuError, InvalidMoveReason, Result};

/// Game board: one bitboard per color.
///
/// The set of occupied cells is exactly the set of moves played; a stone is
/// never overwritten, only removed and placed again. The bitboards are only
/// written through [`Board::place_stone`] and [`Board::remove_stone`];
/// [`Board::stones`] is the read path.
///
/// ```compile_fail
/// use gomoku::{Board, Pos};
///
/// let mut board = Board::new();
/// board.black.insert(Pos::new(7, 7));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    pub(crate) black: Bitboard,
    pub(crate) white: Bitboard,
}

impl Board {
    pub fn new() -> Self {
        Self {
            black: Bitboard::EMPTY,
            white: Bitboard::EMPTY,
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        BOARD_SIZE
    }

    /// Reset to an empty board for a new game
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Get stone at an in-range position
    #[inline]
    pub fn get(&self, pos: Pos) -> Option<Stone> {
        if self.black.contains(pos) {
            Some(Stone::Black)
        } else if self.white.contains(pos) {
            Some(Stone::White)
        } else {
            None
        }
    }

    /// Checked cell query for coordinates coming from outside the engine
    pub fn cell_at(&self, row: usize, col: usize) -> Result<Option<Stone>> {
        let pos = Pos::try_new(row, col)?;
        Ok(self.get(pos))
    }

    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        !(self.black | self.white).contains(pos)
    }

    /// Place a stone on an empty in-range cell
    pub fn place_stone(&mut self, pos: Pos, stone: Stone) -> Result<()> {
        if !pos.in_bounds() {
            return Err(GomokuError::InvalidMove {
                pos,
                reason: InvalidMoveReason::OutOfRange,
            });
        }
        if !self.is_empty(pos) {
            return Err(GomokuError::InvalidMove {
                pos,
                reason: InvalidMoveReason::Occupied,
            });
        }
        self.put(pos, stone);
        Ok(())
    }

    /// Remove a stone, returning what was there
    pub fn remove_stone(&mut self, pos: Pos) -> Result<Stone> {
        if !pos.in_bounds() {
            return Err(GomokuError::InvalidMove {
                pos,
                reason: InvalidMoveReason::OutOfRange,
            });
        }
        match self.get(pos) {
            Some(stone) => {
                self.take(pos);
                Ok(stone)
            }
            None => Err(GomokuError::InvalidMove {
                pos,
                reason: InvalidMoveReason::AlreadyEmpty,
            }),
        }
    }

    /// Unchecked placement for the search's make/unmake loop.
    /// Callers only pass empty cells taken from move generation.
    #[inline]
    pub(crate) fn put(&mut self, pos: Pos, stone: Stone) {
        debug_assert!(self.is_empty(pos), "put on occupied cell {pos}");
        match stone {
            Stone::Black => self.black.insert(pos),
            Stone::White => self.white.insert(pos),
        }
    }

    /// Unchecked removal, the inverse of `put`
    #[inline]
    pub(crate) fn take(&mut self, pos: Pos) {
        debug_assert!(!self.is_empty(pos), "take on empty cell {pos}");
        self.black.remove(pos);
        self.white.remove(pos);
    }

    /// Bitboard for a color
    #[inline]
    pub fn stones(&self, stone: Stone) -> &Bitboard {
        match stone {
            Stone::Black => &self.black,
            Stone::White => &self.white,
        }
    }

    /// All stones of both colors, row-major
    pub fn occupied(&self) -> impl Iterator<Item = Pos> {
        (self.black | self.white).positions()
    }

    /// Empty cells in row-major order
    pub fn empty_cells(&self) -> impl Iterator<Item = Pos> + '_ {
        (0..TOTAL_CELLS)
            .map(Pos::from_index)
            .filter(move |&pos| self.is_empty(pos))
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> u32 {
        self.black.len() + self.white.len()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.stone_count() as usize == TOTAL_CELLS
    }

    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.black.is_empty() && self.white.is_empty()
    }

    /// Same position with the colors swapped
    pub fn mirror_colors(&self) -> Board {
        Board {
            black: self.white,
            white: self.black,
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                if col > 0 {
                    f.write_str(" ")?;
                }
                let symbol = self
                    .get(Pos::new(row as u8, col as u8))
                    .map_or('.', Stone::symbol);
                write!(f, "{symbol}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = GomokuError;

    /// Parse 15 lines of `.`, `B` and `W`; whitespace between cells and
    /// blank lines are ignored.
    fn from_str(s: &str) -> Result<Self> {
        let mut board = Board::new();
        let mut row = 0usize;

        for (line_no, line) in s.lines().enumerate() {
            let cells: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
            if cells.is_empty() {
                continue;
            }
            if row >= BOARD_SIZE {
                return Err(GomokuError::ParseBoard {
                    line: line_no + 1,
                    msg: format!("more than {BOARD_SIZE} rows"),
                });
            }
            if cells.len() != BOARD_SIZE {
                return Err(GomokuError::ParseBoard {
                    line: line_no + 1,
                    msg: format!("expected {BOARD_SIZE} cells, found {}", cells.len()),
                });
            }
            for (col, cell) in cells.into_iter().enumerate() {
                let stone = match cell {
                    '.' => continue,
                    'B' | 'b' => Stone::Black,
                    'W' | 'w' => Stone::White,
                    other => {
                        return Err(GomokuError::ParseBoard {
                            line: line_no + 1,
                            msg: format!("unexpected cell '{other}'"),
                        })
                    }
                };
                board.put(Pos::new(row as u8, col as u8), stone);
            }
            row += 1;
        }

        if row != BOARD_SIZE {
            return Err(GomokuError::ParseBoard {
                line: s.lines().count(),
                msg: format!("expected {BOARD_SIZE} rows, found {row}"),
            });
        }
        Ok(board)
    }
}
