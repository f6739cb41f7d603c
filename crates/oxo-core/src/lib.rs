//! Core tic-tac-toe types: board representation, move generation, and game rules.

mod bitboard;
mod board;
mod cell;
mod error;
mod lines;
mod movegen;
mod notation;
mod outcome;
mod perft;
mod place;
mod player;

pub use bitboard::Bitboard;
pub use board::{Board, PrettyBoard};
pub use cell::Cell;
pub use error::{BoardError, MoveError, ParseError};
pub use lines::{WIN_LINES, WinLine};
pub use movegen::MoveList;
pub use notation::EMPTY_NOTATION;
pub use outcome::Outcome;
pub use perft::{GameStats, count_games, game_stats, perft};
pub use player::Player;
