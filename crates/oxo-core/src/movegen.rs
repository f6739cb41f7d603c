//! Legal move generation.

use crate::board::Board;
use crate::cell::Cell;

/// A fixed-capacity, stack-allocated list of moves. Never holds more than
/// the nine cells of the grid.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct MoveList {
    moves: [Cell; Cell::COUNT],
    len: u8,
}

impl MoveList {
    /// Create an empty move list.
    pub const fn new() -> MoveList {
        MoveList {
            moves: [Cell::TOP_LEFT; Cell::COUNT],
            len: 0,
        }
    }

    /// Push a move onto the list.
    #[inline]
    pub fn push(&mut self, mv: Cell) {
        debug_assert!((self.len as usize) < Cell::COUNT);
        self.moves[self.len as usize] = mv;
        self.len += 1;
    }

    /// Return the number of moves in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// Return `true` if the list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Return a slice of the moves.
    #[inline]
    pub fn as_slice(&self) -> &[Cell] {
        &self.moves[..self.len as usize]
    }

    /// Return `true` if `mv` is in the list.
    pub fn contains(&self, mv: Cell) -> bool {
        self.as_slice().contains(&mv)
    }
}

impl Default for MoveList {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MoveList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl std::ops::Index<usize> for MoveList {
    type Output = Cell;
    #[inline]
    fn index(&self, index: usize) -> &Cell {
        &self.as_slice()[index]
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Cell;
    type IntoIter = std::slice::Iter<'a, Cell>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl FromIterator<Cell> for MoveList {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        let mut list = MoveList::new();
        for mv in iter {
            list.push(mv);
        }
        list
    }
}

impl Board {
    /// Return every empty cell in ascending index order.
    ///
    /// A terminal board with empty cells still reports them; check
    /// [`is_terminal`](Board::is_terminal) first.
    pub fn legal_moves(&self) -> MoveList {
        self.vacant().collect()
    }
}
