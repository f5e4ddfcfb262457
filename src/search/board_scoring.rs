//! Static position evaluation.
//!
//! Search delegates leaf scoring to `BoardScorer`, so the heuristic can be
//! swapped without touching the search code. Scores are always from the
//! `perspective` color's point of view: positive is good for that side.

use crate::game_state::chess_types::*;

/// Score for a side that has been checkmated (negated for the winner).
pub const MATE_SCORE: i32 = 999_999;

/// Bonus for giving check, penalty for being in check.
pub const CHECK_BONUS: i32 = 50;

pub trait BoardScorer: Send + Sync {
    fn score(&self, game_state: &GameState, perspective: Color) -> i32;
}

/// Material only, no positional terms.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialScorer;

impl MaterialScorer {
    #[inline]
    pub const fn piece_value(piece: PieceKind) -> i32 {
        match piece {
            PieceKind::Pawn => 100,
            PieceKind::Knight => 320,
            PieceKind::Bishop => 330,
            PieceKind::Rook => 500,
            PieceKind::Queen => 900,
            PieceKind::King => 20000,
        }
    }
}

impl BoardScorer for MaterialScorer {
    fn score(&self, game_state: &GameState, perspective: Color) -> i32 {
        game_state
            .board()
            .pieces()
            .map(|(_, piece)| signed(piece.color, perspective, Self::piece_value(piece.kind)))
            .sum()
    }
}

// Tables are laid out as printed from white's side: row 0 is rank 8.
// Black pieces read the mirrored row.
#[rustfmt::skip]
const PAWN_TABLE: [[i32; 8]; 8] = [
    [  0,  0,  0,  0,  0,  0,  0,  0],
    [ 50, 50, 50, 50, 50, 50, 50, 50],
    [ 10, 10, 20, 30, 30, 20, 10, 10],
    [  5,  5, 10, 25, 25, 10,  5,  5],
    [  0,  0,  0, 20, 20,  0,  0,  0],
    [  5, -5,-10,  0,  0,-10, -5,  5],
    [  5, 10, 10,-20,-20, 10, 10,  5],
    [  0,  0,  0,  0,  0,  0,  0,  0],
];

#[rustfmt::skip]
const KNIGHT_TABLE: [[i32; 8]; 8] = [
    [-50,-40,-30,-30,-30,-30,-40,-50],
    [-40,-20,  0,  0,  0,  0,-20,-40],
    [-30,  0, 10, 15, 15, 10,  0,-30],
    [-30,  5, 15, 20, 20, 15,  5,-30],
    [-30,  0, 15, 20, 20, 15,  0,-30],
    [-30,  5, 10, 15, 15, 10,  5,-30],
    [-40,-20,  0,  5,  5,  0,-20,-40],
    [-50,-40,-30,-30,-30,-30,-40,-50],
];

#[rustfmt::skip]
const BISHOP_TABLE: [[i32; 8]; 8] = [
    [-20,-10,-10,-10,-10,-10,-10,-20],
    [-10,  0,  0,  0,  0,  0,  0,-10],
    [-10,  0,  5, 10, 10,  5,  0,-10],
    [-10,  5,  5, 10, 10,  5,  5,-10],
    [-10,  0, 10, 10, 10, 10,  0,-10],
    [-10, 10, 10, 10, 10, 10, 10,-10],
    [-10,  5,  0,  0,  0,  0,  5,-10],
    [-20,-10,-10,-10,-10,-10,-10,-20],
];

#[rustfmt::skip]
const ROOK_TABLE: [[i32; 8]; 8] = [
    [  0,  0,  0,  0,  0,  0,  0,  0],
    [  5, 10, 10, 10, 10, 10, 10,  5],
    [ -5,  0,  0,  0,  0,  0,  0, -5],
    [ -5,  0,  0,  0,  0,  0,  0, -5],
    [ -5,  0,  0,  0,  0,  0,  0, -5],
    [ -5,  0,  0,  0,  0,  0,  0, -5],
    [ -5,  0,  0,  0,  0,  0,  0, -5],
    [  0,  0,  0,  5,  5,  0,  0,  0],
];

#[rustfmt::skip]
const QUEEN_TABLE: [[i32; 8]; 8] = [
    [-20,-10,-10, -5, -5,-10,-10,-20],
    [-10,  0,  0,  0,  0,  0,  0,-10],
    [-10,  0,  5,  5,  5,  5,  0,-10],
    [ -5,  0,  5,  5,  5,  5,  0, -5],
    [  0,  0,  5,  5,  5,  5,  0, -5],
    [-10,  5,  5,  5,  5,  5,  0,-10],
    [-10,  0,  5,  0,  0,  0,  0,-10],
    [-20,-10,-10, -5, -5,-10,-10,-20],
];

#[rustfmt::skip]
const KING_TABLE: [[i32; 8]; 8] = [
    [-30,-40,-40,-50,-50,-40,-40,-30],
    [-30,-40,-40,-50,-50,-40,-40,-30],
    [-30,-40,-40,-50,-50,-40,-40,-30],
    [-30,-40,-40,-50,-50,-40,-40,-30],
    [-20,-30,-30,-40,-40,-30,-30,-20],
    [-10,-20,-20,-20,-20,-20,-20,-10],
    [ 20, 20,  0,  0,  0,  0, 20, 20],
    [ 20, 30, 10,  0,  0, 10, 30, 20],
];

/// Material plus piece-square tables, with a status term: a checkmate on
/// the board dominates everything, a check is worth a small bonus.
#[derive(Debug, Clone, Copy, Default)]
pub struct PieceSquareScorer;

impl PieceSquareScorer {
    #[inline]
    pub fn square_value(piece: Piece, square: Square) -> i32 {
        let table = match piece.kind {
            PieceKind::Pawn => &PAWN_TABLE,
            PieceKind::Knight => &KNIGHT_TABLE,
            PieceKind::Bishop => &BISHOP_TABLE,
            PieceKind::Rook => &ROOK_TABLE,
            PieceKind::Queen => &QUEEN_TABLE,
            PieceKind::King => &KING_TABLE,
        };
        let row = match piece.color {
            Color::White => square.row(),
            Color::Black => 7 - square.row(),
        };
        table[row as usize][square.col() as usize]
    }

    fn placement_score(game_state: &GameState, perspective: Color) -> i32 {
        game_state
            .board()
            .pieces()
            .map(|(square, piece)| {
                let value =
                    MaterialScorer::piece_value(piece.kind) + Self::square_value(piece, square);
                signed(piece.color, perspective, value)
            })
            .sum()
    }
}

impl BoardScorer for PieceSquareScorer {
    fn score(&self, game_state: &GameState, perspective: Color) -> i32 {
        let mut score = Self::placement_score(game_state, perspective);

        // The side to move is the one that is mated or checked.
        let victim_is_opponent = game_state.current_player() != perspective;
        match game_state.status() {
            GameStatus::Checkmate => {
                score += if victim_is_opponent { MATE_SCORE } else { -MATE_SCORE };
            }
            GameStatus::Check => {
                score += if victim_is_opponent { CHECK_BONUS } else { -CHECK_BONUS };
            }
            GameStatus::Playing | GameStatus::Stalemate => {}
        }

        score
    }
}

#[inline]
fn signed(owner: Color, perspective: Color, value: i32) -> i32 {
    if owner == perspective {
        value
    } else {
        -value
    }
}
