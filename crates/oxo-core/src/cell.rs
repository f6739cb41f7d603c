//! Board cells, indexed 0..9 in row-major order.

use std::fmt;

use crate::bitboard::Bitboard;

/// A cell on the 3x3 grid. Index = row * 3 + col, so the top-left cell is 0
/// and the bottom-right cell is 8.
///
/// A `Cell` is also a move: placing a mark on it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell(u8);

impl Cell {
    /// Total number of cells.
    pub const COUNT: usize = 9;

    pub const TOP_LEFT: Cell = Cell(0);
    pub const TOP: Cell = Cell(1);
    pub const TOP_RIGHT: Cell = Cell(2);
    pub const LEFT: Cell = Cell(3);
    pub const CENTER: Cell = Cell(4);
    pub const RIGHT: Cell = Cell(5);
    pub const BOTTOM_LEFT: Cell = Cell(6);
    pub const BOTTOM: Cell = Cell(7);
    pub const BOTTOM_RIGHT: Cell = Cell(8);

    /// The four corners, top-left to bottom-right.
    pub const CORNERS: [Cell; 4] = [
        Cell::TOP_LEFT,
        Cell::TOP_RIGHT,
        Cell::BOTTOM_LEFT,
        Cell::BOTTOM_RIGHT,
    ];

    /// The four edge midpoints, top to bottom.
    pub const EDGES: [Cell; 4] = [Cell::TOP, Cell::LEFT, Cell::RIGHT, Cell::BOTTOM];

    /// Create a cell from a zero-based index, returning `None` if out of range.
    #[inline]
    pub const fn from_index(index: usize) -> Option<Cell> {
        if index < Self::COUNT {
            Some(Cell(index as u8))
        } else {
            None
        }
    }

    /// Create a cell from a row and column, each in `0..3`.
    #[inline]
    pub const fn from_row_col(row: usize, col: usize) -> Option<Cell> {
        if row < 3 && col < 3 {
            Some(Cell((row * 3 + col) as u8))
        } else {
            None
        }
    }

    /// Create a cell without bounds checking.
    #[inline]
    pub(crate) const fn from_index_unchecked(index: u8) -> Cell {
        debug_assert!(index < 9);
        Cell(index)
    }

    /// Return the zero-based index (0..8).
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Return the row (0 = top).
    #[inline]
    pub const fn row(self) -> usize {
        self.0 as usize / 3
    }

    /// Return the column (0 = left).
    #[inline]
    pub const fn col(self) -> usize {
        self.0 as usize % 3
    }

    /// Return a bitboard with only this cell set.
    #[inline]
    pub const fn bitboard(self) -> Bitboard {
        Bitboard::new(1u16 << self.0)
    }

    /// Iterate over all 9 cells in index order.
    pub fn all() -> impl Iterator<Item = Cell> {
        (0u8..9).map(Cell)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cell({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::Cell;

    #[test]
    fn from_index_bounds() {
        for i in 0..9 {
            assert_eq!(Cell::from_index(i).map(Cell::index), Some(i));
        }
        assert!(Cell::from_index(9).is_none());
        assert!(Cell::from_index(usize::MAX).is_none());
    }

    #[test]
    fn row_col_roundtrip() {
        for cell in Cell::all() {
            assert_eq!(Cell::from_row_col(cell.row(), cell.col()), Some(cell));
        }
        assert!(Cell::from_row_col(3, 0).is_none());
    }

    #[test]
    fn named_constants() {
        assert_eq!(Cell::CENTER.index(), 4);
        assert_eq!(Cell::BOTTOM_RIGHT.row(), 2);
        assert_eq!(Cell::BOTTOM_RIGHT.col(), 2);
        let corners: Vec<usize> = Cell::CORNERS.iter().map(|c| c.index()).collect();
        assert_eq!(corners, vec![0, 2, 6, 8]);
        let edges: Vec<usize> = Cell::EDGES.iter().map(|c| c.index()).collect();
        assert_eq!(edges, vec![1, 3, 5, 7]);
    }

    #[test]
    fn display_and_debug() {
        assert_eq!(format!("{}", Cell::TOP_RIGHT), "2");
        assert_eq!(format!("{:?}", Cell::CENTER), "Cell(4)");
    }
}
