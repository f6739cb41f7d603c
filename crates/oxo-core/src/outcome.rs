//! Game state derived from a board.

use std::fmt;

use crate::player::Player;

/// The state of a game. `Win` and `Draw` are terminal: no further moves
/// are valid once reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    InProgress,
    Win(Player),
    Draw,
}

impl Outcome {
    /// Return `true` for `Win` and `Draw`.
    #[inline]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "in progress"),
            Outcome::Win(p) => write!(f, "{p} wins"),
            Outcome::Draw => write!(f, "draw"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Outcome;
    use crate::player::Player;

    #[test]
    fn terminal_states() {
        assert!(!Outcome::InProgress.is_terminal());
        assert!(Outcome::Win(Player::O).is_terminal());
        assert!(Outcome::Draw.is_terminal());
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Outcome::Win(Player::X)), "X wins");
        assert_eq!(format!("{}", Outcome::Draw), "draw");
    }
}
