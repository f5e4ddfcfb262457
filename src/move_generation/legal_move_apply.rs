//! The commit path: validate a move completely, then apply every side effect
//! in one go.
//!
//! Nothing touches the state until validation has passed, so a rejected move
//! is never partially visible.

use crate::errors::ChessErrors;
use crate::game_state::chess_rules::{KINGSIDE_ROOK_COL, QUEENSIDE_ROOK_COL};
use crate::game_state::chess_types::*;
use crate::game_state::move_record::move_number_for_ply;
use crate::move_generation::legal_move_checks::validate_move;
use crate::move_generation::legal_move_generator::derive_status;
use crate::utils::notation::move_notation;

/// Validate and commit `from -> to`, returning the appended record.
pub fn apply_move(
    game_state: &mut GameState,
    from: Square,
    to: Square,
) -> Result<MoveRecord, ChessErrors> {
    let moved = validate_move(game_state, from, to)?;
    Ok(commit_legal_move(game_state, from, to, moved))
}

/// What a committed move took off the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Relocation {
    /// Occupant of the destination square before the move.
    pub direct_capture: Option<Piece>,
    /// Piece removed by the move: the destination occupant, or the passed
    /// pawn of an en passant capture.
    pub captured: Option<Piece>,
}

/// Commit a move that has already passed `validate_move` on this exact state.
/// `moved` is the piece standing on `from`.
pub(crate) fn commit_legal_move(
    game_state: &mut GameState,
    from: Square,
    to: Square,
    moved: Piece,
) -> MoveRecord {
    let move_number = move_number_for_ply(game_state.move_history.len() + 1);
    let relocation = advance_position(game_state, from, to, moved);

    let record = MoveRecord {
        from,
        to,
        piece: moved,
        captured: relocation.captured,
        notation: move_notation(moved, from, to, relocation.direct_capture),
        move_number,
    };
    game_state.move_history.push(record.clone());
    record
}

/// Every board-level effect of a legal move: relocation, en passant removal,
/// en passant target, castling rights, turn and status. History is left
/// alone.
///
/// Search and perft call this on their own history-free copies after drawing
/// the move from the legal move list.
pub(crate) fn advance_position(
    game_state: &mut GameState,
    from: Square,
    to: Square,
    moved: Piece,
) -> Relocation {
    let en_passant_target = game_state.en_passant_target;
    let board = &mut game_state.board;

    let direct_capture = board.relocate(from, to);

    let mut captured = direct_capture;
    let en_passant = moved.kind == PieceKind::Pawn
        && direct_capture.is_none()
        && en_passant_target == Some(to);
    if en_passant {
        if let Some(passed) = to.offset(-moved.color.forward(), 0) {
            captured = board.take(passed);
        }
    }

    game_state.en_passant_target = double_step_skipped_square(moved, from, to);
    update_castling_rights(&mut game_state.castling_rights, moved, from);

    game_state.current_player = game_state.current_player.opposite();
    game_state.status = derive_status(game_state);

    Relocation { direct_capture, captured }
}

fn double_step_skipped_square(moved: Piece, from: Square, to: Square) -> Option<Square> {
    if moved.kind != PieceKind::Pawn {
        return None;
    }
    let d_row = to.row() as i8 - from.row() as i8;
    if d_row.abs() == 2 {
        from.offset(moved.color.forward(), 0)
    } else {
        None
    }
}

/// Revoke rights when a king moves, or when a rook leaves its corner.
///
/// Capturing a rook on its home corner leaves the owner's rights as they
/// were; castling is never generated, so nothing reads them during play.
fn update_castling_rights(rights: &mut CastlingRights, moved: Piece, from: Square) {
    match moved.kind {
        PieceKind::King => rights.revoke_all(moved.color),
        PieceKind::Rook if from.row() == moved.color.home_row() => match from.col() {
            QUEENSIDE_ROOK_COL => rights.revoke_queenside(moved.color),
            KINGSIDE_ROOK_COL => rights.revoke_kingside(moved.color),
            _ => {}
        },
        _ => {}
    }
}
