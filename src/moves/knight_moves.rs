use crate::game_state::chess_types::Square;
use crate::moves::sliding::deltas;

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

#[inline]
pub fn knight_reaches(from: Square, to: Square) -> bool {
    let (d_row, d_col) = deltas(from, to);
    matches!((d_row.abs(), d_col.abs()), (1, 2) | (2, 1))
}

pub fn knight_targets(from: Square, out: &mut Vec<Square>) {
    out.extend(
        KNIGHT_OFFSETS
            .iter()
            .filter_map(|&(d_row, d_col)| from.offset(d_row, d_col)),
    );
}

#[cfg(test)]
mod tests {
    use super::{knight_reaches, knight_targets};
    use crate::game_state::chess_types::Square;

    #[test]
    fn knight_from_d4_has_eight_targets() {
        let d4: Square = "d4".parse().expect("d4 should parse");
        let mut out = Vec::new();
        knight_targets(d4, &mut out);
        assert_eq!(out.len(), 8);
        assert!(out.iter().all(|to| knight_reaches(d4, *to)));
    }

    #[test]
    fn knight_in_corner_has_two_targets() {
        let a1: Square = "a1".parse().expect("a1 should parse");
        let mut out = Vec::new();
        knight_targets(a1, &mut out);
        assert_eq!(out.len(), 2);
    }
}
