//! Canonical chess-rule constants.
//!
//! Stores the standard starting placement used to initialize and reset a
//! game, and its Forsyth-Edwards Notation form.

use crate::game_state::chess_types::PieceKind;

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Back-rank layout from the a-file to the h-file.
pub const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Column of the queenside rook's home square.
pub const QUEENSIDE_ROOK_COL: u8 = 0;
/// Column of the kingside rook's home square.
pub const KINGSIDE_ROOK_COL: u8 = 7;
