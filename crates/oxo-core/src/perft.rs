//! Game-tree enumeration for move generation and termination checks.

use crate::board::Board;
use crate::outcome::Outcome;
use crate::player::Player;

/// Count the leaves of the game tree from `board`, `depth` plies deep.
///
/// Terminal positions are leaves regardless of remaining depth; depth 0
/// returns 1 (the current position).
pub fn perft(board: &Board, depth: usize) -> u64 {
    if depth == 0 || board.is_terminal() {
        return 1;
    }

    let player = board.next_player();
    let mut nodes = 0u64;
    for mv in &board.legal_moves() {
        if let Ok(child) = board.place_cell(*mv, player) {
            nodes += perft(&child, depth - 1);
        }
    }
    nodes
}

/// Number of complete games reachable from `board`.
pub fn count_games(board: &Board) -> u64 {
    perft(board, board.vacant().count() as usize)
}

/// How every complete game from a position ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GameStats {
    pub x_wins: u64,
    pub o_wins: u64,
    pub draws: u64,
}

impl GameStats {
    /// Total number of games.
    pub fn total(&self) -> u64 {
        self.x_wins + self.o_wins + self.draws
    }
}

/// Tally the outcome of every complete game from `board`.
pub fn game_stats(board: &Board) -> GameStats {
    let mut stats = GameStats::default();
    tally(board, &mut stats);
    stats
}

fn tally(board: &Board, stats: &mut GameStats) {
    match board.outcome() {
        Outcome::Win(Player::X) => stats.x_wins += 1,
        Outcome::Win(Player::O) => stats.o_wins += 1,
        Outcome::Draw => stats.draws += 1,
        Outcome::InProgress => {
            let player = board.next_player();
            for mv in &board.legal_moves() {
                if let Ok(child) = board.place_cell(*mv, player) {
                    tally(&child, stats);
                }
            }
        }
    }
}
