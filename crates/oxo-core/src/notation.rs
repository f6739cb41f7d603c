//! Board notation: nine row-major cells written as `X`, `O`, or `.`.
//!
//! Row separators (`/`) and whitespace are ignored when parsing, so
//! `"XO....X.."` and `"XO./.../X.."` describe the same position. `-` and
//! `_` are accepted as empty cells.

use std::fmt;
use std::str::FromStr;

use crate::bitboard::Bitboard;
use crate::board::Board;
use crate::cell::Cell;
use crate::error::ParseError;
use crate::player::Player;

/// Notation for the empty board.
pub const EMPTY_NOTATION: &str = ".........";

impl FromStr for Board {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Board, ParseError> {
        let mut sides = [Bitboard::EMPTY; Player::COUNT];
        let mut index = 0usize;

        for c in s.chars().filter(|c| *c != '/' && !c.is_whitespace()) {
            let mark = match c {
                '.' | '-' | '_' => None,
                _ => Some(Player::from_symbol(c).ok_or(ParseError::InvalidChar { character: c })?),
            };
            if let Some(p) = mark
                && let Some(cell) = Cell::from_index(index)
            {
                sides[p.index()] = sides[p.index()].with(cell);
            }
            index += 1;
        }

        if index != Cell::COUNT {
            return Err(ParseError::WrongLength { found: index });
        }

        let board = Board::from_sides(sides[0], sides[1]);
        board.validate()?;
        Ok(board)
    }
}

/// Writes the compact nine-character notation.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in Cell::all() {
            let c = self.cell(cell).map_or('.', Player::symbol);
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::EMPTY_NOTATION;
    use crate::board::Board;
    use crate::cell::Cell;
    use crate::error::{BoardError, ParseError};
    use crate::player::Player;

    #[test]
    fn empty_roundtrip() {
        let board: Board = EMPTY_NOTATION.parse().unwrap();
        assert_eq!(board, Board::empty());
        assert_eq!(board.to_string(), EMPTY_NOTATION);
    }

    #[test]
    fn separators_and_case() {
        let a: Board = "xo./.x./...".parse().unwrap();
        let b: Board = "XO- _X_ ---".parse().unwrap();
        assert_eq!(a, b);
        assert_eq!(a.cell(Cell::TOP_LEFT), Some(Player::X));
        assert_eq!(a.cell(Cell::TOP), Some(Player::O));
        assert_eq!(a.to_string(), "XO..X....");
    }

    #[test]
    fn matches_placements() {
        let placed = Board::empty()
            .place(0, Player::X)
            .and_then(|b| b.place(4, Player::O))
            .and_then(|b| b.place(8, Player::X))
            .unwrap();
        let parsed: Board = "X...O...X".parse().unwrap();
        assert_eq!(placed, parsed);
    }

    #[test]
    fn wrong_length() {
        assert_eq!(
            "XO".parse::<Board>(),
            Err(ParseError::WrongLength { found: 2 })
        );
        assert_eq!(
            "..........".parse::<Board>(),
            Err(ParseError::WrongLength { found: 10 })
        );
    }

    #[test]
    fn invalid_char() {
        assert_eq!(
            "XO.Z.....".parse::<Board>(),
            Err(ParseError::InvalidChar { character: 'Z' })
        );
    }

    #[test]
    fn unreachable_rejected() {
        assert_eq!(
            "OO.......".parse::<Board>(),
            Err(ParseError::Unreachable {
                source: BoardError::BadMarkCounts { x: 0, o: 2 }
            })
        );
    }
}
