use crate::game_state::chess_types::Square;
use crate::moves::sliding::deltas;

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// One step in any direction. Castling is never produced here.
#[inline]
pub fn king_reaches(from: Square, to: Square) -> bool {
    let (d_row, d_col) = deltas(from, to);
    from != to && d_row.abs() <= 1 && d_col.abs() <= 1
}

pub fn king_targets(from: Square, out: &mut Vec<Square>) {
    out.extend(
        KING_OFFSETS
            .iter()
            .filter_map(|&(d_row, d_col)| from.offset(d_row, d_col)),
    );
}

#[cfg(test)]
mod tests {
    use super::king_reaches;
    use crate::game_state::chess_types::Square;

    #[test]
    fn king_steps_one_square_only() {
        let e1: Square = "e1".parse().expect("e1 should parse");
        let g1: Square = "g1".parse().expect("g1 should parse");
        let f2: Square = "f2".parse().expect("f2 should parse");
        assert!(king_reaches(e1, f2));
        assert!(!king_reaches(e1, g1));
        assert!(!king_reaches(e1, e1));
    }
}
