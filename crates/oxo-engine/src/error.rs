//! Search errors.

/// Errors returned by the search entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// The search produced no move because the board was already terminal.
    #[error("no move found: the game is already over")]
    NoMoveFound,
}
