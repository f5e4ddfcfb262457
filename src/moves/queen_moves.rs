use crate::game_state::chess_types::{Board, Square};
use crate::moves::bishop_moves::{bishop_reaches, bishop_targets};
use crate::moves::rook_moves::{rook_reaches, rook_targets};

#[inline]
pub fn queen_reaches(board: &Board, from: Square, to: Square) -> bool {
    rook_reaches(board, from, to) || bishop_reaches(board, from, to)
}

pub fn queen_targets(board: &Board, from: Square, out: &mut Vec<Square>) {
    rook_targets(board, from, out);
    bishop_targets(board, from, out);
}
