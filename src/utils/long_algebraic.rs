//! Coordinate move text such as `e2e4`, used by the terminal front end and
//! the transcript reader.

use crate::game_state::chess_types::Square;
use crate::utils::algebraic::algebraic_to_square;

/// Split `e2e4` (or `e2-e4`) into its two squares.
pub fn long_algebraic_to_squares(text: &str) -> Result<(Square, Square), String> {
    let compact: String = text.chars().filter(|c| *c != '-').collect();
    if compact.len() != 4 || !compact.is_ascii() {
        return Err(format!("Invalid long algebraic move: {text}"));
    }

    let from = algebraic_to_square(&compact[0..2])?;
    let to = algebraic_to_square(&compact[2..4])?;
    Ok((from, to))
}

#[inline]
pub fn squares_to_long_algebraic(from: Square, to: Square) -> String {
    format!("{from}{to}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_with_and_without_dash() {
        let (from, to) = long_algebraic_to_squares("e2e4").expect("e2e4 should parse");
        assert_eq!(squares_to_long_algebraic(from, to), "e2e4");
        let (from, to) = long_algebraic_to_squares("g8-f6").expect("g8-f6 should parse");
        assert_eq!(squares_to_long_algebraic(from, to), "g8f6");
    }

    #[test]
    fn rejects_garbage() {
        for bad in ["", "e2", "e2e9", "e2e4q", "xxxx", "ée4"] {
            assert!(long_algebraic_to_squares(bad).is_err(), "{bad:?} should be rejected");
        }
    }
}
