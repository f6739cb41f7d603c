//! Minimax search with alpha-beta pruning.

use oxo_core::{Board, Cell, Player};

use crate::search::SearchResult;
use crate::search::ordering::ordered_moves;

/// Score bound below/above anything the search can return.
pub const INF: i32 = 1_000_000_000;

/// Base score for a win, reduced by the ply at which it happens.
pub const WIN_SCORE: i32 = 10;

/// Score a terminal position from `ai`'s point of view.
///
/// A draw is 0. A win scores `WIN_SCORE - depth` so faster wins rank
/// higher; a loss scores `depth - WIN_SCORE` so slower losses rank higher.
/// `depth` counts plies from the root of the current search.
///
/// Must only be called on terminal boards.
pub fn terminal_score(board: &Board, ai: Player, depth: u8) -> i32 {
    debug_assert!(board.is_terminal(), "terminal_score on a live board");
    match board.winner() {
        None => 0,
        Some(w) if w == ai => WIN_SCORE - depth as i32,
        Some(_) => depth as i32 - WIN_SCORE,
    }
}

/// Minimax with alpha-beta pruning, scored from `ai`'s point of view.
///
/// `ai` maximizes and its opponent minimizes. On a tie the earlier move
/// in [`ordered_moves`] order is kept. Returns the selected move (`None`
/// if `board` is terminal), its score, and the number of leaves reached in
/// the explored (unpruned) part of the tree.
pub fn minimax(
    board: &Board,
    ai: Player,
    to_move: Player,
    mut alpha: i32,
    mut beta: i32,
    depth: u8,
) -> SearchResult {
    if board.is_terminal() {
        return SearchResult {
            best_move: None,
            score: terminal_score(board, ai, depth),
            nodes: 1,
        };
    }

    let maximizing = to_move == ai;
    let mut best_score = if maximizing { -INF } else { INF };
    let mut best_move: Option<Cell> = None;
    let mut nodes = 0u64;

    for &mv in &ordered_moves(board) {
        // The cell comes from the vacant set, so placing cannot fail.
        let Ok(child) = board.place_cell(mv, to_move) else {
            continue;
        };
        let result = minimax(&child, ai, !to_move, alpha, beta, depth + 1);
        nodes += result.nodes;

        if maximizing {
            if result.score > best_score {
                best_score = result.score;
                best_move = Some(mv);
            }
            alpha = alpha.max(best_score);
        } else {
            if result.score < best_score {
                best_score = result.score;
                best_move = Some(mv);
            }
            beta = beta.min(best_score);
        }

        if alpha >= beta {
            break;
        }
    }

    SearchResult {
        best_move,
        score: best_score,
        nodes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(moves: &[usize]) -> Board {
        moves.iter().fold(Board::empty(), |b, &i| {
            b.place(i, b.next_player()).unwrap()
        })
    }

    fn full_window(board: &Board, ai: Player) -> SearchResult {
        minimax(board, ai, ai, -INF, INF, 0)
    }

    #[test]
    fn terminal_input_has_no_move() {
        let board = play(&[0, 3, 1, 4, 2]);
        let result = full_window(&board, Player::X);
        assert_eq!(result.best_move, None);
        assert_eq!(result.score, WIN_SCORE);
        assert_eq!(result.nodes, 1);
    }

    #[test]
    fn terminal_score_draw_is_zero() {
        let board: Board = "XOX/XOO/OXX".parse().unwrap();
        assert_eq!(terminal_score(&board, Player::X, 3), 0);
        assert_eq!(terminal_score(&board, Player::O, 3), 0);
    }

    #[test]
    fn terminal_score_prefers_fast_wins() {
        let board: Board = "XXX/OO./...".parse().unwrap();
        assert_eq!(terminal_score(&board, Player::X, 1), 9);
        assert!(terminal_score(&board, Player::X, 1) > terminal_score(&board, Player::X, 3));
    }

    #[test]
    fn terminal_score_prefers_slow_losses() {
        let board: Board = "XXX/OO./...".parse().unwrap();
        assert_eq!(terminal_score(&board, Player::O, 1), -9);
        assert!(terminal_score(&board, Player::O, 1) < terminal_score(&board, Player::O, 3));
    }

    #[test]
    fn takes_immediate_win() {
        // O at 0 and 1, X at 3; O completes the top row.
        let board = Board::empty()
            .place(0, Player::O)
            .and_then(|b| b.place(1, Player::O))
            .and_then(|b| b.place(3, Player::X))
            .unwrap();
        let result = full_window(&board, Player::O);
        assert_eq!(result.best_move, Some(Cell::TOP_RIGHT));
        assert_eq!(result.score, WIN_SCORE - 1);
    }

    #[test]
    fn blocks_immediate_loss() {
        let board = Board::empty()
            .place(0, Player::X)
            .and_then(|b| b.place(1, Player::X))
            .unwrap();
        let result = full_window(&board, Player::O);
        assert_eq!(result.best_move, Some(Cell::TOP_RIGHT));
    }

    #[test]
    fn single_legal_move() {
        // X to move with one cell left.
        let board = play(&[0, 1, 2, 4, 3, 5, 7, 6]);
        let result = full_window(&board, Player::X);
        assert_eq!(result.best_move, Some(Cell::BOTTOM_RIGHT));
        assert_eq!(result.nodes, 1);
    }

    #[test]
    fn empty_board_is_a_draw() {
        let result = full_window(&Board::empty(), Player::X);
        assert_eq!(result.score, 0);
        assert_eq!(result.best_move, Some(Cell::CENTER));
    }

    #[test]
    fn pruning_skips_part_of_the_tree() {
        let result = full_window(&Board::empty(), Player::X);
        assert!(result.nodes > 0);
        assert!(
            result.nodes < oxo_core::count_games(&Board::empty()),
            "alpha-beta visited {} leaves, no fewer than plain minimax",
            result.nodes
        );
    }

    #[test]
    fn minimizer_picks_lowest() {
        // X threatens 0-4-8 and it is X's turn; searching for O with X to
        // move, the minimizer must find the win at 8.
        let board = play(&[0, 1, 4, 2]);
        let result = minimax(&board, Player::O, Player::X, -INF, INF, 0);
        assert_eq!(result.best_move, Some(Cell::BOTTOM_RIGHT));
        assert_eq!(result.score, 1 - WIN_SCORE);
    }
}
