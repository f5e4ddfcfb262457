use crate::game_state::chess_types::{Board, Square};
use crate::moves::sliding::{deltas, is_path_clear, ray_targets, DIAGONAL_STEPS};

#[inline]
pub fn bishop_reaches(board: &Board, from: Square, to: Square) -> bool {
    let (d_row, d_col) = deltas(from, to);
    d_row != 0 && d_row.abs() == d_col.abs() && is_path_clear(board, from, to)
}

pub fn bishop_targets(board: &Board, from: Square, out: &mut Vec<Square>) {
    ray_targets(board, from, &DIAGONAL_STEPS, out);
}
