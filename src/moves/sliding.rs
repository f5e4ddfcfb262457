//! Line-of-travel helpers shared by the sliding pieces.

use crate::game_state::chess_types::{Board, Square};

/// Unit steps along ranks and files.
pub const ORTHOGONAL_STEPS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
/// Unit steps along diagonals.
pub const DIAGONAL_STEPS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Row/column deltas from `from` to `to`.
#[inline]
pub fn deltas(from: Square, to: Square) -> (i8, i8) {
    (
        to.row() as i8 - from.row() as i8,
        to.col() as i8 - from.col() as i8,
    )
}

/// True when every square strictly between `from` and `to` is empty.
///
/// The two squares must share a rank, file or diagonal.
pub fn is_path_clear(board: &Board, from: Square, to: Square) -> bool {
    let (d_row, d_col) = deltas(from, to);
    let step = (d_row.signum(), d_col.signum());

    let mut current = from.offset(step.0, step.1);
    while let Some(sq) = current {
        if sq == to {
            return true;
        }
        if !board.is_empty(sq) {
            return false;
        }
        current = sq.offset(step.0, step.1);
    }

    // Walked off the board without meeting `to`: not on a shared line.
    false
}

/// Squares reachable along `steps` from `from`, stopping at (and including)
/// the first occupied square of each ray.
pub fn ray_targets(board: &Board, from: Square, steps: &[(i8, i8)], out: &mut Vec<Square>) {
    for &(d_row, d_col) in steps {
        let mut current = from.offset(d_row, d_col);
        while let Some(sq) = current {
            out.push(sq);
            if !board.is_empty(sq) {
                break;
            }
            current = sq.offset(d_row, d_col);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(name: &str) -> Square {
        name.parse().expect("test square should parse")
    }

    #[test]
    fn path_blocked_by_own_pawns_at_start() {
        let board = Board::starting_position();
        assert!(!is_path_clear(&board, sq("a1"), sq("a3")));
        assert!(is_path_clear(&board, sq("a2"), sq("a4")));
        assert!(is_path_clear(&board, sq("a3"), sq("h3")));
    }

    #[test]
    fn ray_includes_first_blocker() {
        let board = Board::starting_position();
        let mut out = Vec::new();
        ray_targets(&board, sq("d1"), &[(-1, 0)], &mut out);
        assert_eq!(out, vec![sq("d2")]);
    }
}
