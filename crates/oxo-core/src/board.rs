//! The board: which cells each player has marked.

use std::fmt;

use crate::bitboard::Bitboard;
use crate::cell::Cell;
use crate::error::BoardError;
use crate::lines::{WIN_LINES, WinLine};
use crate::outcome::Outcome;
use crate::player::Player;

/// A complete position.
///
/// `Board` is a small `Copy` value; every move produces a new board and
/// leaves the original untouched. Whose turn it is follows from the mark
/// counts and is never stored.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    /// Marks for each player, indexed by [`Player::index()`].
    sides: [Bitboard; Player::COUNT],
}

impl Board {
    /// Return the board with all nine cells empty.
    pub const fn empty() -> Board {
        Board {
            sides: [Bitboard::EMPTY; Player::COUNT],
        }
    }

    /// Construct a board from raw marks. Used by notation parsing.
    pub(crate) const fn from_sides(x: Bitboard, o: Bitboard) -> Board {
        Board { sides: [x, o] }
    }

    /// Return the mark on the given cell, if any.
    #[inline]
    pub fn cell(&self, cell: Cell) -> Option<Player> {
        Player::ALL
            .into_iter()
            .find(|&p| self.sides[p.index()].contains(cell))
    }

    /// Return the marks for the given player.
    #[inline]
    pub fn side(&self, player: Player) -> Bitboard {
        self.sides[player.index()]
    }

    /// Return all marked cells.
    #[inline]
    pub fn occupied(&self) -> Bitboard {
        self.sides[0] | self.sides[1]
    }

    /// Return all empty cells.
    #[inline]
    pub fn vacant(&self) -> Bitboard {
        !self.occupied()
    }

    /// Number of marks the given player has made.
    #[inline]
    pub fn count(&self, player: Player) -> u32 {
        self.side(player).count()
    }

    /// Set a mark. The caller guarantees the cell is empty.
    #[inline]
    pub(crate) fn set(&mut self, cell: Cell, player: Player) {
        let i = player.index();
        self.sides[i] = self.sides[i].with(cell);
    }

    /// Return the player whose turn it is: X when both have made the same
    /// number of marks, otherwise O.
    ///
    /// Only meaningful for reachable boards (see [`validate`](Self::validate)).
    #[inline]
    pub fn next_player(&self) -> Player {
        if self.count(Player::X) == self.count(Player::O) {
            Player::X
        } else {
            Player::O
        }
    }

    /// Return the first line in [`WIN_LINES`] order that one player owns
    /// completely, along with that player.
    pub fn winning_line(&self) -> Option<(WinLine, Player)> {
        WIN_LINES.into_iter().find_map(|line| {
            Player::ALL
                .into_iter()
                .find(|&p| line.is_complete(self.side(p)))
                .map(|p| (line, p))
        })
    }

    /// Return the winner, if any player has three in a row.
    #[inline]
    pub fn winner(&self) -> Option<Player> {
        self.winning_line().map(|(_, p)| p)
    }

    /// Return `true` if no cell is empty.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.occupied() == Bitboard::FULL
    }

    /// Return `true` if the game has ended by a win or a full board.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.is_full()
    }

    /// Return the game state.
    pub fn outcome(&self) -> Outcome {
        match self.winner() {
            Some(p) => Outcome::Win(p),
            None if self.is_full() => Outcome::Draw,
            None => Outcome::InProgress,
        }
    }

    /// Check that the position can arise from alternating play starting
    /// with X and stopping at the first win.
    pub fn validate(&self) -> Result<(), BoardError> {
        let (x, o) = (self.side(Player::X), self.side(Player::O));
        if (x & o).is_nonempty() {
            return Err(BoardError::OverlappingMarks);
        }

        let (nx, no) = (x.count(), o.count());
        if nx != no && nx != no + 1 {
            return Err(BoardError::BadMarkCounts { x: nx, o: no });
        }

        let x_won = WIN_LINES.iter().any(|l| l.is_complete(x));
        let o_won = WIN_LINES.iter().any(|l| l.is_complete(o));
        match (x_won, o_won) {
            (true, true) => Err(BoardError::TwoWinners),
            // X moved last iff X has one more mark
            (true, false) if nx != no + 1 => Err(BoardError::MovedAfterWin),
            (false, true) if nx != no => Err(BoardError::MovedAfterWin),
            _ => Ok(()),
        }
    }

    /// Return a pretty-printable wrapper for this board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\"{}\")", self)
    }
}

/// Wrapper for printing a board as a 3x3 grid, with cell numbers shown in
/// empty cells.
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            if row > 0 {
                writeln!(f, "---+---+---")?;
            }
            for col in 0..3 {
                let cell = Cell::from_index_unchecked((row * 3 + col) as u8);
                let c = match self.0.cell(cell) {
                    Some(p) => p.symbol(),
                    None => char::from(b'0' + cell.index() as u8),
                };
                if col < 2 {
                    write!(f, " {c} |")?;
                } else {
                    write!(f, " {c}")?;
                }
            }
            if row < 2 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
