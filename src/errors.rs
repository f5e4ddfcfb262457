//! Errors used throughout the rules engine.
//!
//! `ChessErrors` is the single error type returned by the commit path, square
//! parsing and FEN loading. Rule rejections (`IllegalMove`, `InvalidSquare`,
//! `GameAlreadyOver`) are recoverable: the state is left untouched and the
//! caller may try again. `MissingKing` signals a corrupted position and is
//! a bug in whatever built that position, not a user mistake.

use std::error::Error;
use std::fmt;

use crate::game_state::chess_types::{Color, GameStatus, Square};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChessErrors {
    /// The move breaks a rule: wrong owner, bad geometry, blocked path or
    /// self-check.
    IllegalMove { from: Square, to: Square },

    /// A coordinate string was malformed or off the board.
    InvalidSquare(String),

    /// A move was attempted after checkmate or stalemate.
    GameAlreadyOver(GameStatus),

    /// The position has no king for the given color.
    MissingKing(Color),

    /// A FEN string could not be turned into a position.
    InvalidFen(String),
}

impl ChessErrors {
    /// True for errors that indicate a broken invariant rather than a
    /// rejected request.
    #[inline]
    pub fn is_internal(&self) -> bool {
        matches!(self, ChessErrors::MissingKing(_))
    }
}

impl fmt::Display for ChessErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChessErrors::IllegalMove { from, to } => write!(f, "illegal move {from}{to}"),
            ChessErrors::InvalidSquare(text) => write!(f, "invalid square: {text}"),
            ChessErrors::GameAlreadyOver(status) => {
                write!(f, "game is already over ({status})")
            }
            ChessErrors::MissingKing(color) => write!(f, "no {color} king on the board"),
            ChessErrors::InvalidFen(msg) => write!(f, "invalid FEN: {msg}"),
        }
    }
}

impl Error for ChessErrors {}

#[cfg(test)]
mod tests {
    use super::ChessErrors;
    use crate::game_state::chess_types::{Color, GameStatus};

    #[test]
    fn display_names_the_move() {
        let err = ChessErrors::IllegalMove {
            from: "e2".parse().expect("e2 should parse"),
            to: "e5".parse().expect("e5 should parse"),
        };
        assert_eq!(err.to_string(), "illegal move e2e5");
        assert!(!err.is_internal());
    }

    #[test]
    fn missing_king_is_internal() {
        assert!(ChessErrors::MissingKing(Color::Black).is_internal());
        assert!(!ChessErrors::GameAlreadyOver(GameStatus::Checkmate).is_internal());
    }
}
