use crate::game_state::chess_types::{Piece, Square};

/// One committed move. Records are appended in play order and never edited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRecord {
    pub from: Square,
    pub to: Square,
    pub piece: Piece,
    pub captured: Option<Piece>,
    pub notation: String,
    /// Full-move number, `ceil(ordinal / 2)` of this ply.
    pub move_number: u16,
}

/// Full-move number of the ply at 1-based position `ordinal` in the history.
#[inline]
pub const fn move_number_for_ply(ordinal: usize) -> u16 {
    ordinal.div_ceil(2) as u16
}
