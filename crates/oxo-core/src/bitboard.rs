//! Bitboard representation for the 3x3 grid: one bit per cell.

use std::fmt;
use std::ops::{BitAnd, BitOr, Not};

use crate::cell::Cell;

/// A 9-bit mask over the grid where bit `i` is cell `i`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Bitboard(u16);

impl Bitboard {
    /// No cells set.
    pub const EMPTY: Bitboard = Bitboard(0);

    /// All 9 cells set.
    pub const FULL: Bitboard = Bitboard(0x1FF);

    /// Create a bitboard from a raw mask. Bits above the ninth are discarded.
    #[inline]
    pub const fn new(bits: u16) -> Bitboard {
        Bitboard(bits & Self::FULL.0)
    }

    /// Return the underlying mask.
    #[inline]
    pub const fn inner(self) -> u16 {
        self.0
    }

    /// Return `true` if no bits are set.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Return `true` if at least one bit is set.
    #[inline]
    pub const fn is_nonempty(self) -> bool {
        self.0 != 0
    }

    /// Count the number of set bits.
    #[inline]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    /// Return `true` if the given cell's bit is set.
    #[inline]
    pub const fn contains(self, cell: Cell) -> bool {
        (self.0 & (1u16 << cell.index())) != 0
    }

    /// Return `true` if every bit of `other` is also set in `self`.
    #[inline]
    pub const fn contains_all(self, other: Bitboard) -> bool {
        self.0 & other.0 == other.0
    }

    /// Return a new bitboard with the given cell set.
    #[inline]
    pub const fn with(self, cell: Cell) -> Bitboard {
        Bitboard(self.0 | (1u16 << cell.index()))
    }

    /// Return the lowest set cell, or `None` if empty.
    #[inline]
    pub const fn lsb(self) -> Option<Cell> {
        if self.0 == 0 {
            None
        } else {
            Some(Cell::from_index_unchecked(self.0.trailing_zeros() as u8))
        }
    }
}

impl BitAnd for Bitboard {
    type Output = Bitboard;

    #[inline]
    fn bitand(self, rhs: Bitboard) -> Bitboard {
        Bitboard(self.0 & rhs.0)
    }
}

impl BitOr for Bitboard {
    type Output = Bitboard;

    #[inline]
    fn bitor(self, rhs: Bitboard) -> Bitboard {
        Bitboard(self.0 | rhs.0)
    }
}

impl Not for Bitboard {
    type Output = Bitboard;

    /// Complement within the 9 grid bits.
    #[inline]
    fn not(self) -> Bitboard {
        Bitboard(!self.0 & Self::FULL.0)
    }
}

/// Iterates set cells in ascending index order.
impl Iterator for Bitboard {
    type Item = Cell;

    #[inline]
    fn next(&mut self) -> Option<Cell> {
        let cell = self.lsb()?;
        self.0 &= self.0 - 1;
        Some(cell)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.count() as usize;
        (n, Some(n))
    }
}

impl fmt::Debug for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bitboard({:#011b})", self.0)
    }
}
