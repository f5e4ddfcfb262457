//! Square <-> coordinate conversions.
//!
//! A square name is a file letter 'a'-'h' followed by a rank digit '1'-'8'.
//! Rows count down from rank 8: `a8` is row 0 / column 0 and `h1` is row 7 /
//! column 7. Anything else is rejected before it can index the board.

use crate::game_state::chess_types::Square;

/// Convert a square name (for example: "e4") to a validated square.
#[inline]
pub fn algebraic_to_square(square: &str) -> Result<Square, String> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(format!("Invalid algebraic square: {square}"));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) {
        return Err(format!("Invalid algebraic file: {}", file as char));
    }
    if !(b'1'..=b'8').contains(&rank) {
        return Err(format!("Invalid algebraic rank: {}", rank as char));
    }

    let col = file - b'a';
    let row = b'8' - rank;
    Square::new(row, col).ok_or_else(|| format!("Invalid algebraic square: {square}"))
}

/// Convert a square to its name (for example: "e4").
#[inline]
pub fn square_to_algebraic(square: Square) -> String {
    square.to_string()
}

/// Convert `(row, col)` indices to a square name, rejecting indices off the
/// board.
pub fn row_col_to_algebraic(row: u8, col: u8) -> Result<String, String> {
    Square::new(row, col)
        .map(square_to_algebraic)
        .ok_or_else(|| format!("Square indices out of bounds: ({row}, {col})"))
}

/// Convert a square name to `(row, col)` indices.
pub fn algebraic_to_row_col(square: &str) -> Result<(u8, u8), String> {
    algebraic_to_square(square).map(|sq| (sq.row(), sq.col()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_squares_map_to_expected_indices() {
        assert_eq!(algebraic_to_row_col("a8").expect("a8 should parse"), (0, 0));
        assert_eq!(algebraic_to_row_col("h1").expect("h1 should parse"), (7, 7));
        assert_eq!(algebraic_to_row_col("e4").expect("e4 should parse"), (4, 4));
        assert_eq!(row_col_to_algebraic(6, 4).expect("(6,4) should convert"), "e2");
    }

    #[test]
    fn conversion_is_a_bijection_over_the_board() {
        let mut seen = std::collections::HashSet::new();
        for row in 0..8u8 {
            for col in 0..8u8 {
                let name = row_col_to_algebraic(row, col).expect("on-board indices convert");
                assert_eq!(algebraic_to_row_col(&name).expect("name parses back"), (row, col));
                assert!(seen.insert(name));
            }
        }
        assert_eq!(seen.len(), 64);
    }

    #[test]
    fn malformed_names_are_rejected() {
        for bad in ["", "e", "e0", "e9", "i1", "A1", "e44", "4e", " e4", "é4"] {
            assert!(algebraic_to_square(bad).is_err(), "{bad:?} should be rejected");
        }
        assert!(row_col_to_algebraic(8, 0).is_err());
        assert!(row_col_to_algebraic(0, 8).is_err());
    }
}
