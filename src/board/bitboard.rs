//! One bit per cell, for fast occupancy queries

use std::ops::BitOr;

use super::{Pos, TOTAL_CELLS};

const WORDS: usize = TOTAL_CELLS.div_ceil(64);

/// Set of cells, e.g. all stones of one color.
/// Bit `i` of the set is cell `Pos::from_index(i)`; bits past the last cell stay zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bitboard {
    words: [u64; WORDS],
}

#[inline]
fn split(pos: Pos) -> (usize, u64) {
    let idx = pos.to_index();
    (idx >> 6, 1u64 << (idx & 63))
}

impl Bitboard {
    pub const EMPTY: Bitboard = Bitboard { words: [0; WORDS] };

    #[inline]
    pub fn insert(&mut self, pos: Pos) {
        let (word, mask) = split(pos);
        self.words[word] |= mask;
    }

    #[inline]
    pub fn remove(&mut self, pos: Pos) {
        let (word, mask) = split(pos);
        self.words[word] &= !mask;
    }

    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        let (word, mask) = split(pos);
        self.words[word] & mask != 0
    }

    #[inline]
    pub fn len(&self) -> u32 {
        self.words.iter().copied().map(u64::count_ones).sum()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        *self == Self::EMPTY
    }

    /// Cells in the set, row-major
    pub fn positions(&self) -> impl Iterator<Item = Pos> {
        self.words.into_iter().enumerate().flat_map(|(word, bits)| {
            let mut rest = bits;
            std::iter::from_fn(move || {
                if rest == 0 {
                    return None;
                }
                let bit = rest.trailing_zeros() as usize;
                rest &= rest - 1;
                Some(Pos::from_index(word * 64 + bit))
            })
        })
    }
}

impl BitOr for Bitboard {
    type Output = Bitboard;

    fn bitor(self, rhs: Bitboard) -> Bitboard {
        let mut words = self.words;
        for (w, r) in words.iter_mut().zip(rhs.words) {
            *w |= r;
        }
        Bitboard { words }
    }
}
