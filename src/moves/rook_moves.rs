use crate::game_state::chess_types::{Board, Square};
use crate::moves::sliding::{deltas, is_path_clear, ray_targets, ORTHOGONAL_STEPS};

#[inline]
pub fn rook_reaches(board: &Board, from: Square, to: Square) -> bool {
    let (d_row, d_col) = deltas(from, to);
    (d_row == 0) != (d_col == 0) && is_path_clear(board, from, to)
}

pub fn rook_targets(board: &Board, from: Square, out: &mut Vec<Square>) {
    ray_targets(board, from, &ORTHOGONAL_STEPS, out);
}
