//! The two sides of a game.

use std::fmt;
use std::ops::Not;

/// A player: X always moves first, O second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Player {
    X = 0,
    O = 1,
}

impl Player {
    /// Total number of players.
    pub const COUNT: usize = 2;

    /// Both players in index order.
    pub const ALL: [Player; 2] = [Player::X, Player::O];

    /// Return the index (0 for X, 1 for O).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Return the opponent.
    #[inline]
    pub const fn flip(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// The mark character used in board notation.
    #[inline]
    pub const fn symbol(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }

    /// Parse a mark character (case-insensitive).
    pub fn from_symbol(c: char) -> Option<Player> {
        match c.to_ascii_uppercase() {
            'X' => Some(Player::X),
            'O' => Some(Player::O),
            _ => None,
        }
    }
}

impl Not for Player {
    type Output = Player;

    #[inline]
    fn not(self) -> Player {
        self.flip()
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
