//! Error types for move application, board notation, and board validation.

use std::fmt;

use crate::cell::Cell;

/// An invalid move: the target is off the grid or already taken.
///
/// The board the move was attempted on is never modified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// The index is not in `0..=8`.
    #[error("move {index} is out of range (expected 0-8)")]
    OutOfRange {
        /// The rejected index.
        index: usize,
    },
    /// The target cell already holds a mark.
    #[error("cell {cell} is already occupied")]
    Occupied {
        /// The occupied cell.
        cell: Cell,
    },
}

/// Errors from reachability validation of a [`Board`](crate::board::Board).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// A cell is claimed by both players.
    #[error("X and O marks overlap")]
    OverlappingMarks,
    /// Mark counts cannot arise from alternating play starting with X.
    #[error("impossible mark counts: {x} X, {o} O")]
    BadMarkCounts {
        /// Number of X marks.
        x: u32,
        /// Number of O marks.
        o: u32,
    },
    /// Both players own a complete line.
    #[error("both players have three in a row")]
    TwoWinners,
    /// The winner was not the last player to move.
    #[error("play continued after the game was won")]
    MovedAfterWin,
}

/// Errors that occur when parsing board notation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The notation does not describe exactly 9 cells.
    WrongLength {
        /// Number of cells described.
        found: usize,
    },
    /// An unrecognized cell character.
    InvalidChar {
        /// The invalid character.
        character: char,
    },
    /// The described position fails validation.
    Unreachable {
        /// The underlying validation error.
        source: BoardError,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::WrongLength { found } => {
                write!(f, "expected 9 cells, found {found}")
            }
            ParseError::InvalidChar { character } => {
                write!(f, "invalid cell character: '{character}'")
            }
            ParseError::Unreachable { source } => {
                write!(f, "unreachable position: {source}")
            }
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseError::Unreachable { source } => Some(source),
            _ => None,
        }
    }
}

impl From<BoardError> for ParseError {
    fn from(source: BoardError) -> Self {
        ParseError::Unreachable { source }
    }
}
