//! Mailbox board: an 8x8 grid of optional pieces.
//!
//! Row 0 is rank 8 and column 0 is the a-file. The grid is a plain `Copy`
//! array so scratch boards for self-check tests and search are cheap.

use crate::game_state::chess_rules::BACK_RANK;
use crate::game_state::chess_types::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Option<Piece>; 8]; 8],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    #[inline]
    pub const fn empty() -> Self {
        Self {
            cells: [[None; 8]; 8],
        }
    }

    /// Standard initial placement: black on rows 0-1, white on rows 6-7.
    pub fn starting_position() -> Self {
        let mut board = Self::empty();
        for (col, kind) in BACK_RANK.iter().enumerate() {
            board.cells[0][col] = Some(Piece::new(*kind, Color::Black));
            board.cells[1][col] = Some(Piece::new(PieceKind::Pawn, Color::Black));
            board.cells[6][col] = Some(Piece::new(PieceKind::Pawn, Color::White));
            board.cells[7][col] = Some(Piece::new(*kind, Color::White));
        }
        board
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.cells[square.row() as usize][square.col() as usize]
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.piece_at(square).is_none()
    }

    #[inline]
    pub fn set(&mut self, square: Square, piece: Option<Piece>) {
        self.cells[square.row() as usize][square.col() as usize] = piece;
    }

    #[inline]
    pub fn take(&mut self, square: Square) -> Option<Piece> {
        self.cells[square.row() as usize][square.col() as usize].take()
    }

    /// Move whatever stands on `from` to `to`, returning the piece that was
    /// on `to` before.
    #[inline]
    pub fn relocate(&mut self, from: Square, to: Square) -> Option<Piece> {
        let moving = self.take(from);
        let captured = self.piece_at(to);
        self.set(to, moving);
        captured
    }

    /// Occupied squares with their pieces, in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|piece| (sq, piece)))
    }

    /// Squares holding pieces of `color`, in row-major order.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color == color)
    }

    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces()
            .find(|(_, piece)| piece.kind == PieceKind::King && piece.color == color)
            .map(|(sq, _)| sq)
    }

    pub fn count(&self, kind: PieceKind, color: Color) -> usize {
        self.pieces()
            .filter(|(_, piece)| piece.kind == kind && piece.color == color)
            .count()
    }

    /// Rows of the grid, row 0 (rank 8) first.
    #[inline]
    pub fn rows(&self) -> &[[Option<Piece>; 8]; 8] {
        &self.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(name: &str) -> Square {
        name.parse().expect("test square should parse")
    }

    #[test]
    fn starting_position_has_thirty_two_pieces() {
        let board = Board::starting_position();
        assert_eq!(board.pieces().count(), 32);
        assert_eq!(board.count(PieceKind::Pawn, Color::White), 8);
        assert_eq!(board.count(PieceKind::King, Color::Black), 1);
        assert_eq!(
            board.piece_at(sq("e1")),
            Some(Piece::new(PieceKind::King, Color::White))
        );
        assert_eq!(
            board.piece_at(sq("d8")),
            Some(Piece::new(PieceKind::Queen, Color::Black))
        );
        assert_eq!(board.king_square(Color::White), Some(sq("e1")));
    }

    #[test]
    fn relocate_reports_the_replaced_piece() {
        let mut board = Board::starting_position();
        let captured = board.relocate(sq("d1"), sq("d7"));
        assert_eq!(captured, Some(Piece::new(PieceKind::Pawn, Color::Black)));
        assert!(board.is_empty(sq("d1")));
        assert_eq!(
            board.piece_at(sq("d7")),
            Some(Piece::new(PieceKind::Queen, Color::White))
        );
    }
}
