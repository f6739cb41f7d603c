//! Search algorithms and move ordering.

pub mod minimax;
pub mod ordering;

use oxo_core::{Board, Cell, Player};
use tracing::{debug, trace};

use crate::error::SearchError;
use minimax::{INF, minimax};

/// Result of one minimax invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Selected move, or `None` if the searched board was terminal.
    pub best_move: Option<Cell>,
    /// Score from the searching player's point of view.
    pub score: i32,
    /// Leaves reached in the explored part of the tree.
    pub nodes: u64,
}

/// Run a full-window search for `ai` with `ai` to move.
pub fn analyse(board: &Board, ai: Player) -> SearchResult {
    let result = minimax(board, ai, ai, -INF, INF, 0);
    debug!(
        board = %board,
        %ai,
        best_move = ?result.best_move,
        score = result.score,
        nodes = result.nodes,
        "search complete"
    );
    result
}

/// Return the optimal move for `ai` on `board`.
///
/// # Errors
///
/// [`SearchError::NoMoveFound`] if `board` is already terminal.
pub fn best_move(board: &Board, ai: Player) -> Result<Cell, SearchError> {
    analyse(board, ai).best_move.ok_or(SearchError::NoMoveFound)
}

/// Play both sides with [`best_move`] until the game ends, returning the
/// moves made. Returns an empty list for a terminal board.
pub fn self_play(board: &Board) -> Vec<Cell> {
    let mut board = *board;
    let mut line = Vec::new();
    while !board.is_terminal() {
        let player = board.next_player();
        let Ok(mv) = best_move(&board, player) else {
            break;
        };
        let Ok(next) = board.place_cell(mv, player) else {
            break;
        };
        trace!(%player, %mv, "self-play move");
        line.push(mv);
        board = next;
    }
    line
}
