//! Canonical game state.
//!
//! `GameState` holds the board, side to move, move history, derived status,
//! en-passant target and castling rights. Fields are private to the crate:
//! the only way to change a state from outside is `apply_move` / `reset`, so
//! a state can never be observed half-updated. The type is a plain value;
//! review screens work on clones, and search works on history-free copies.

use crate::errors::ChessErrors;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::{self, Relocation};
use crate::move_generation::legal_move_checks::{is_king_in_check, is_legal};
use crate::move_generation::legal_move_generator::{
    derive_status, legal_destinations, legal_moves, LegalMove,
};
use crate::utils::algebraic::algebraic_to_square;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) current_player: Color,
    pub(crate) move_history: Vec<MoveRecord>,
    pub(crate) status: GameStatus,
    pub(crate) en_passant_target: Option<Square>,
    pub(crate) castling_rights: CastlingRights,
    /// Full-move number of the position the history starts from.
    pub(crate) starting_fullmove: u16,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

/// Pieces each color has lost, in capture order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapturedPieces {
    pub white: Vec<Piece>,
    pub black: Vec<Piece>,
}

impl GameState {
    /// Standard initial placement, white to move.
    pub fn new_game() -> Self {
        Self {
            board: Board::starting_position(),
            current_player: Color::White,
            move_history: Vec::new(),
            status: GameStatus::Playing,
            en_passant_target: None,
            castling_rights: CastlingRights::ALL,
            starting_fullmove: 1,
        }
    }

    #[inline]
    pub fn from_fen(fen: &str) -> Result<Self, ChessErrors> {
        parse_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    /// Build a position from raw parts, checking that it is playable and
    /// deriving its status.
    pub(crate) fn from_parts(
        board: Board,
        current_player: Color,
        en_passant_target: Option<Square>,
        castling_rights: CastlingRights,
    ) -> Result<Self, ChessErrors> {
        for color in [Color::White, Color::Black] {
            match board.count(PieceKind::King, color) {
                0 => return Err(ChessErrors::MissingKing(color)),
                1 => {}
                n => {
                    return Err(ChessErrors::InvalidFen(format!(
                        "{n} {color} kings on the board"
                    )))
                }
            }
        }
        if is_king_in_check(&board, current_player.opposite()) {
            return Err(ChessErrors::InvalidFen(format!(
                "{} is in check but it is {current_player}'s move",
                current_player.opposite()
            )));
        }

        let mut state = Self {
            board,
            current_player,
            move_history: Vec::new(),
            status: GameStatus::Playing,
            en_passant_target,
            castling_rights,
            starting_fullmove: 1,
        };
        state.status = derive_status(&state);
        Ok(state)
    }

    /// Set the full-move number of a freshly built position.
    pub(crate) fn with_fullmove_number(mut self, fullmove_number: u16) -> Self {
        self.starting_fullmove = fullmove_number.max(1);
        self
    }

    /// Copy of the position without its move history, for search.
    ///
    /// Search nodes are cloned once per explored move, so they must not
    /// carry the game's history along.
    pub(crate) fn search_copy(&self) -> Self {
        Self {
            board: self.board,
            current_player: self.current_player,
            move_history: Vec::new(),
            status: self.status,
            en_passant_target: self.en_passant_target,
            castling_rights: self.castling_rights,
            starting_fullmove: self.fullmove_number(),
        }
    }

    /// Back to the initial position with an empty history.
    pub fn reset(&mut self) {
        *self = Self::new_game();
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn current_player(&self) -> Color {
        self.current_player
    }

    #[inline]
    pub fn move_history(&self) -> &[MoveRecord] {
        &self.move_history
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Full-move number of the current position, as written in FEN: starts
    /// at the loaded position's number and goes up after each black move.
    pub fn fullmove_number(&self) -> u16 {
        let plies = self.move_history.len();
        let black_started = (plies % 2 == 0) == (self.current_player == Color::Black);
        let offset = usize::from(black_started);
        self.starting_fullmove.saturating_add(((plies + offset) / 2) as u16)
    }

    #[inline]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    #[inline]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[inline]
    pub fn is_king_in_check(&self, color: Color) -> bool {
        is_king_in_check(&self.board, color)
    }

    #[inline]
    pub fn is_legal(&self, from: Square, to: Square) -> bool {
        is_legal(self, from, to)
    }

    #[inline]
    pub fn legal_destinations(&self, from: Square) -> Vec<Square> {
        legal_destinations(self, from)
    }

    /// Destinations for a square given as text, e.g. `"e2"`. Malformed input
    /// yields no destinations.
    pub fn legal_destinations_for(&self, from: &str) -> Vec<Square> {
        match algebraic_to_square(from) {
            Ok(sq) => legal_destinations(self, sq),
            Err(_) => Vec::new(),
        }
    }

    #[inline]
    pub fn legal_moves(&self) -> Vec<LegalMove> {
        legal_moves(self)
    }

    /// Validate and commit a move. On error nothing has changed.
    #[inline]
    pub fn try_apply_move(&mut self, from: Square, to: Square) -> Result<MoveRecord, ChessErrors> {
        legal_move_apply::apply_move(self, from, to)
    }

    /// Commit a move given as square strings. Returns `false`, leaving the
    /// state untouched, for malformed squares and illegal moves alike.
    pub fn attempt_move(&mut self, from: &str, to: &str) -> bool {
        self.try_attempt_move(from, to).is_ok()
    }

    pub fn try_attempt_move(&mut self, from: &str, to: &str) -> Result<MoveRecord, ChessErrors> {
        let from = algebraic_to_square(from).map_err(ChessErrors::InvalidSquare)?;
        let to = algebraic_to_square(to).map_err(ChessErrors::InvalidSquare)?;
        self.try_apply_move(from, to)
    }

    /// Play a move already taken from `legal_moves()` of this state without
    /// recording it: no history entry and no notation. Search and perft use
    /// this on their own copies.
    pub(crate) fn advance_generated(&mut self, from: Square, to: Square) -> Option<Relocation> {
        let moved = self.board.piece_at(from)?;
        Some(legal_move_apply::advance_position(self, from, to, moved))
    }

    /// Pieces removed from the board so far, grouped by their color.
    pub fn captured_pieces(&self) -> CapturedPieces {
        let mut out = CapturedPieces::default();
        for piece in self.move_history.iter().filter_map(|record| record.captured) {
            match piece.color {
                Color::White => out.white.push(piece),
                Color::Black => out.black.push(piece),
            }
        }
        out
    }
}
