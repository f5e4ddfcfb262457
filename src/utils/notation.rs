//! Compact move notation for the history panel.
//!
//! Pawn moves show the destination, with the origin file and `x` for
//! captures (`exd5`). Other pieces show their letter, `x` for captures and
//! the destination (`Nf3`, `Qxd5`). There is no disambiguation and no
//! check or mate suffix.

use crate::game_state::chess_types::{Piece, PieceKind, Square};

/// `captured` is the occupant of the destination before the move; an
/// en-passant capture lands on an empty square and is written as a quiet
/// pawn move.
pub fn move_notation(piece: Piece, from: Square, to: Square, captured: Option<Piece>) -> String {
    let mut out = String::with_capacity(5);

    if piece.kind == PieceKind::Pawn {
        if captured.is_some() {
            out.push(from.file_char());
            out.push('x');
        }
    } else {
        out.push(piece.kind.letter());
        if captured.is_some() {
            out.push('x');
        }
    }

    out.push_str(&to.to_string());
    out
}
