//! Pawn geometry: pushes, the initial double step, diagonal captures and
//! en-passant landings.
//!
//! Pawns are the only piece whose move pattern differs from its attack
//! pattern, so both are exposed separately.

use crate::game_state::chess_types::{Board, Color, Square};
use crate::moves::sliding::deltas;

/// True if a pawn of `color` standing on `from` may move to `to` on `board`.
///
/// The destination's owner is not checked here beyond what pawn geometry
/// requires: pushes need an empty square, diagonals need an occupant or a
/// live en-passant target. Friendly-piece rejection happens upstream.
pub fn pawn_reaches(
    board: &Board,
    color: Color,
    from: Square,
    to: Square,
    en_passant_target: Option<Square>,
) -> bool {
    let (d_row, d_col) = deltas(from, to);
    let forward = color.forward();

    if d_col == 0 {
        if !board.is_empty(to) {
            return false;
        }
        if d_row == forward {
            return true;
        }
        if from.row() == color.pawn_start_row() && d_row == 2 * forward {
            return from
                .offset(forward, 0)
                .is_some_and(|skipped| board.is_empty(skipped));
        }
        return false;
    }

    if d_col.abs() == 1 && d_row == forward {
        if board.piece_at(to).is_some_and(|target| target.color != color) {
            return true;
        }
        return en_passant_target == Some(to);
    }

    false
}

/// Diagonal attack of a pawn, independent of what stands on `target`.
#[inline]
pub fn pawn_attacks(color: Color, from: Square, target: Square) -> bool {
    let (d_row, d_col) = deltas(from, target);
    d_row == color.forward() && d_col.abs() == 1
}

/// Candidate destinations for a pawn: one and two steps forward and both
/// forward diagonals. Legality is decided by the caller.
pub fn pawn_targets(color: Color, from: Square, out: &mut Vec<Square>) {
    let forward = color.forward();
    out.extend(from.offset(forward, 0));
    if from.row() == color.pawn_start_row() {
        out.extend(from.offset(2 * forward, 0));
    }
    out.extend(from.offset(forward, -1));
    out.extend(from.offset(forward, 1));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{Piece, PieceKind};

    fn sq(name: &str) -> Square {
        name.parse().expect("test square should parse")
    }

    #[test]
    fn white_pawn_pushes_one_or_two_from_start() {
        let board = Board::starting_position();
        assert!(pawn_reaches(&board, Color::White, sq("e2"), sq("e3"), None));
        assert!(pawn_reaches(&board, Color::White, sq("e2"), sq("e4"), None));
        assert!(!pawn_reaches(&board, Color::White, sq("e2"), sq("e5"), None));
        assert!(!pawn_reaches(&board, Color::White, sq("e2"), sq("e1"), None));
    }

    #[test]
    fn black_pawn_moves_down_the_board() {
        let board = Board::starting_position();
        assert!(pawn_reaches(&board, Color::Black, sq("d7"), sq("d5"), None));
        assert!(!pawn_reaches(&board, Color::Black, sq("d7"), sq("d8"), None));
    }

    #[test]
    fn double_step_needs_both_squares_empty() {
        let mut board = Board::starting_position();
        board.set(sq("e3"), Some(Piece::new(PieceKind::Knight, Color::Black)));
        assert!(!pawn_reaches(&board, Color::White, sq("e2"), sq("e4"), None));
        assert!(!pawn_reaches(&board, Color::White, sq("e2"), sq("e3"), None));
    }

    #[test]
    fn diagonal_needs_enemy_or_en_passant_target() {
        let mut board = Board::empty();
        board.set(sq("e5"), Some(Piece::new(PieceKind::Pawn, Color::White)));
        assert!(!pawn_reaches(&board, Color::White, sq("e5"), sq("d6"), None));
        assert!(pawn_reaches(&board, Color::White, sq("e5"), sq("d6"), Some(sq("d6"))));

        board.set(sq("f6"), Some(Piece::new(PieceKind::Bishop, Color::Black)));
        assert!(pawn_reaches(&board, Color::White, sq("e5"), sq("f6"), None));
    }

    #[test]
    fn pawn_attacks_ignore_occupancy() {
        assert!(pawn_attacks(Color::White, sq("e4"), sq("d5")));
        assert!(pawn_attacks(Color::Black, sq("e5"), sq("f4")));
        assert!(!pawn_attacks(Color::White, sq("e4"), sq("e5")));
    }
}
