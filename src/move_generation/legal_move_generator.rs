//! Legal move enumeration and status derivation.
//!
//! Candidate destinations come from each piece's geometry; every candidate
//! is then put through the full rule check, so the output is exactly the set
//! of moves the commit path would accept.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::{check_move_rules, is_king_in_check};
use crate::moves::bishop_moves::bishop_targets;
use crate::moves::king_moves::king_targets;
use crate::moves::knight_moves::knight_targets;
use crate::moves::pawn_moves::pawn_targets;
use crate::moves::queen_moves::queen_targets;
use crate::moves::rook_moves::rook_targets;

/// A legal move as an origin/destination pair.
pub type LegalMove = (Square, Square);

fn candidate_targets(board: &Board, piece: Piece, from: Square, out: &mut Vec<Square>) {
    match piece.kind {
        PieceKind::Pawn => pawn_targets(piece.color, from, out),
        PieceKind::Knight => knight_targets(from, out),
        PieceKind::Bishop => bishop_targets(board, from, out),
        PieceKind::Rook => rook_targets(board, from, out),
        PieceKind::Queen => queen_targets(board, from, out),
        PieceKind::King => king_targets(from, out),
    }
}

fn push_legal_from(game_state: &GameState, from: Square, piece: Piece, out: &mut Vec<LegalMove>) {
    let mut targets = Vec::with_capacity(28);
    candidate_targets(game_state.board(), piece, from, &mut targets);
    targets.sort_unstable();

    for to in targets {
        if check_move_rules(game_state, from, to).is_ok() {
            out.push((from, to));
        }
    }
}

/// Legal destinations for the piece on `from`, in row-major order.
///
/// Empty when the square is empty, holds an opponent's piece, or the game
/// is over.
pub fn legal_destinations(game_state: &GameState, from: Square) -> Vec<Square> {
    if game_state.status().is_terminal() {
        return Vec::new();
    }
    let Some(piece) = game_state.board().piece_at(from) else {
        return Vec::new();
    };
    if piece.color != game_state.current_player() {
        return Vec::new();
    }

    let mut moves = Vec::new();
    push_legal_from(game_state, from, piece, &mut moves);
    moves.into_iter().map(|(_, to)| to).collect()
}

/// Every legal move of the side to move, ordered by origin then destination
/// (both row-major from a8).
pub fn legal_moves(game_state: &GameState) -> Vec<LegalMove> {
    let mut moves = Vec::with_capacity(48);
    if game_state.status().is_terminal() {
        return moves;
    }
    generate_into(game_state, &mut moves);
    moves
}

fn generate_into(game_state: &GameState, out: &mut Vec<LegalMove>) {
    let side = game_state.current_player();
    for (from, piece) in game_state.board().pieces_of(side) {
        push_legal_from(game_state, from, piece, out);
    }
}

/// True if the side to move has at least one legal move. Stops at the first
/// one found.
pub fn has_any_legal_move(game_state: &GameState) -> bool {
    let side = game_state.current_player();
    let mut scratch = Vec::with_capacity(28);

    for (from, piece) in game_state.board().pieces_of(side) {
        scratch.clear();
        candidate_targets(game_state.board(), piece, from, &mut scratch);
        if scratch
            .iter()
            .any(|to| check_move_rules(game_state, from, *to).is_ok())
        {
            return true;
        }
    }
    false
}

/// Status for the side to move, derived from scratch.
pub fn derive_status(game_state: &GameState) -> GameStatus {
    let side = game_state.current_player();
    let in_check = is_king_in_check(game_state.board(), side);

    match (has_any_legal_move(game_state), in_check) {
        (false, true) => GameStatus::Checkmate,
        (false, false) => GameStatus::Stalemate,
        (true, true) => GameStatus::Check,
        (true, false) => GameStatus::Playing,
    }
}
