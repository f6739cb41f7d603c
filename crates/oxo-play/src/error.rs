//! Errors raised while handling player commands.

use oxo_core::MoveError;
use oxo_engine::SearchError;

/// Errors that can occur during a play session.
///
/// Everything except [`PlayError::Io`] is reported to the player and the
/// session carries on.
#[derive(Debug, thiserror::Error)]
pub enum PlayError {
    /// The command word is not recognized.
    #[error("unknown command: {command} (type 'help' for a list)")]
    UnknownCommand {
        /// The unrecognized word.
        command: String,
    },

    /// A command that needs an argument was given none.
    #[error("'{command}' needs an argument")]
    MissingArgument {
        /// The command missing its argument.
        command: &'static str,
    },

    /// An argument could not be parsed.
    #[error("invalid argument for '{command}': {value}")]
    InvalidArgument {
        /// The command the argument belongs to.
        command: &'static str,
        /// The rejected argument.
        value: String,
    },

    /// The player tried to move while the engine is to move.
    #[error("it is not your turn")]
    NotYourTurn,

    /// A move or hint was requested after the round ended.
    #[error("the game is over; type 'new' to play again")]
    GameOver,

    /// The board rejected the move.
    #[error(transparent)]
    Move(#[from] MoveError),

    /// The engine could not produce a move.
    #[error(transparent)]
    Search(#[from] SearchError),

    /// Reading input or writing output failed.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}

impl PlayError {
    /// Return `true` if the session cannot continue after this error.
    pub fn is_fatal(&self) -> bool {
        matches!(self, PlayError::Io { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::PlayError;
    use oxo_core::{Cell, MoveError};

    #[test]
    fn move_error_is_transparent() {
        let err: PlayError = MoveError::Occupied { cell: Cell::CENTER }.into();
        assert_eq!(format!("{err}"), "cell 4 is already occupied");
        assert!(!err.is_fatal());
    }

    #[test]
    fn io_is_fatal() {
        let err: PlayError = std::io::Error::other("closed").into();
        assert!(err.is_fatal());
    }
}
