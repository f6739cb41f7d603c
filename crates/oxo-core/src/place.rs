//! Move execution via copy-make.

use crate::board::Board;
use crate::cell::Cell;
use crate::error::MoveError;
use crate::player::Player;

impl Board {
    /// Place `player`'s mark on cell `index` and return the resulting board.
    /// Copy-make: `self` is not modified.
    ///
    /// Turn order is not enforced here; callers pass
    /// [`next_player`](Board::next_player) to keep the board reachable.
    ///
    /// # Errors
    ///
    /// [`MoveError::OutOfRange`] if `index > 8`, [`MoveError::Occupied`] if
    /// the cell already holds a mark.
    pub fn place(&self, index: usize, player: Player) -> Result<Board, MoveError> {
        let cell = Cell::from_index(index).ok_or(MoveError::OutOfRange { index })?;
        self.place_cell(cell, player)
    }

    /// Like [`place`](Self::place), for an already-validated [`Cell`].
    pub fn place_cell(&self, cell: Cell, player: Player) -> Result<Board, MoveError> {
        if self.occupied().contains(cell) {
            return Err(MoveError::Occupied { cell });
        }
        let mut b = *self;
        b.set(cell, player);
        Ok(b)
    }
}
