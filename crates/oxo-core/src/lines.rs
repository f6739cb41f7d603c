//! The eight winning lines.

use std::fmt;

use crate::bitboard::Bitboard;
use crate::cell::Cell;

/// A row, column, or diagonal of three cells.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct WinLine {
    cells: [Cell; 3],
    mask: Bitboard,
}

impl WinLine {
    const fn new(a: u8, b: u8, c: u8) -> WinLine {
        WinLine {
            cells: [
                Cell::from_index_unchecked(a),
                Cell::from_index_unchecked(b),
                Cell::from_index_unchecked(c),
            ],
            mask: Bitboard::new((1 << a) | (1 << b) | (1 << c)),
        }
    }

    pub const TOP_ROW: WinLine = WinLine::new(0, 1, 2);
    pub const MIDDLE_ROW: WinLine = WinLine::new(3, 4, 5);
    pub const BOTTOM_ROW: WinLine = WinLine::new(6, 7, 8);
    pub const LEFT_COLUMN: WinLine = WinLine::new(0, 3, 6);
    pub const MIDDLE_COLUMN: WinLine = WinLine::new(1, 4, 7);
    pub const RIGHT_COLUMN: WinLine = WinLine::new(2, 5, 8);
    pub const MAIN_DIAGONAL: WinLine = WinLine::new(0, 4, 8);
    pub const ANTI_DIAGONAL: WinLine = WinLine::new(2, 4, 6);

    /// The three cells in ascending order.
    #[inline]
    pub const fn cells(self) -> [Cell; 3] {
        self.cells
    }

    /// The line as a bitboard.
    #[inline]
    pub const fn mask(self) -> Bitboard {
        self.mask
    }

    /// Return `true` if `marks` occupies all three cells.
    #[inline]
    pub const fn is_complete(self, marks: Bitboard) -> bool {
        marks.contains_all(self.mask)
    }
}

/// All winning lines in scan order: rows top to bottom, columns left to
/// right, then the main and anti diagonals. `Board::winner` reports the
/// first complete line in this order.
pub const WIN_LINES: [WinLine; 8] = [
    WinLine::TOP_ROW,
    WinLine::MIDDLE_ROW,
    WinLine::BOTTOM_ROW,
    WinLine::LEFT_COLUMN,
    WinLine::MIDDLE_COLUMN,
    WinLine::RIGHT_COLUMN,
    WinLine::MAIN_DIAGONAL,
    WinLine::ANTI_DIAGONAL,
];

impl fmt::Display for WinLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.cells;
        write!(f, "{a}-{b}-{c}")
    }
}

impl fmt::Debug for WinLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WinLine({self})")
    }
}

#[cfg(test)]
mod tests {
    use super::{WIN_LINES, WinLine};
    use crate::bitboard::Bitboard;
    use crate::cell::Cell;

    #[test]
    fn every_line_has_three_cells() {
        for line in WIN_LINES {
            assert_eq!(line.mask().count(), 3);
            let from_cells = line
                .cells()
                .iter()
                .fold(Bitboard::EMPTY, |bb, &c| bb.with(c));
            assert_eq!(from_cells, line.mask());
        }
    }

    #[test]
    fn lines_are_distinct() {
        for (i, a) in WIN_LINES.iter().enumerate() {
            for b in &WIN_LINES[i + 1..] {
                assert_ne!(a.mask(), b.mask());
            }
        }
    }

    #[test]
    fn center_is_on_four_lines() {
        let n = WIN_LINES
            .iter()
            .filter(|l| l.mask().contains(Cell::CENTER))
            .count();
        assert_eq!(n, 4);
    }

    #[test]
    fn completion() {
        let marks = Bitboard::new(0b000_010_111);
        assert!(WinLine::TOP_ROW.is_complete(marks));
        assert!(!WinLine::MIDDLE_COLUMN.is_complete(marks));
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", WinLine::ANTI_DIAGONAL), "2-4-6");
        assert_eq!(format!("{:?}", WinLine::TOP_ROW), "WinLine(0-1-2)");
    }
}
