//! Perfect-play search for oxo.

pub mod error;
pub mod search;

pub use error::SearchError;
pub use search::minimax::{INF, WIN_SCORE, minimax, terminal_score};
pub use search::ordering::{MOVE_PRIORITY, ordered_moves};
pub use search::{SearchResult, analyse, best_move, self_play};
