//! Legality predicates: attack detection, check detection and the full
//! per-move rule check (ownership, geometry, path, self-check).

use crate::errors::ChessErrors;
use crate::game_state::chess_types::*;
use crate::moves::bishop_moves::bishop_reaches;
use crate::moves::king_moves::king_reaches;
use crate::moves::knight_moves::knight_reaches;
use crate::moves::pawn_moves::{pawn_attacks, pawn_reaches};
use crate::moves::queen_moves::queen_reaches;
use crate::moves::rook_moves::rook_reaches;

#[inline]
pub fn king_square(board: &Board, color: Color) -> Option<Square> {
    board.king_square(color)
}

/// Movement geometry of `piece` from `from` to `to`, including path
/// clearance for sliders and the pawn's occupancy rules.
pub fn piece_reaches(
    board: &Board,
    piece: Piece,
    from: Square,
    to: Square,
    en_passant_target: Option<Square>,
) -> bool {
    match piece.kind {
        PieceKind::Pawn => pawn_reaches(board, piece.color, from, to, en_passant_target),
        PieceKind::Knight => knight_reaches(from, to),
        PieceKind::Bishop => bishop_reaches(board, from, to),
        PieceKind::Rook => rook_reaches(board, from, to),
        PieceKind::Queen => queen_reaches(board, from, to),
        PieceKind::King => king_reaches(from, to),
    }
}

/// Attack pattern of `piece`: the movement geometry, except that pawns
/// attack their two forward diagonals whatever stands there.
pub fn piece_attacks(board: &Board, piece: Piece, from: Square, target: Square) -> bool {
    match piece.kind {
        PieceKind::Pawn => pawn_attacks(piece.color, from, target),
        _ => piece_reaches(board, piece, from, target, None),
    }
}

pub fn is_square_attacked(board: &Board, square: Square, attacker_color: Color) -> bool {
    board
        .pieces_of(attacker_color)
        .any(|(from, piece)| from != square && piece_attacks(board, piece, from, square))
}

/// True if any opposing piece attacks `color`'s king.
///
/// Positions are built so both kings are always present; a board without a
/// king for `color` reports no check.
#[inline]
pub fn is_king_in_check(board: &Board, color: Color) -> bool {
    let Some(king_sq) = king_square(board, color) else {
        return false;
    };
    is_square_attacked(board, king_sq, color.opposite())
}

/// Apply the piece relocation of `from -> to` to a copy of `board`, including
/// removal of a pawn captured en passant. Returns the scratch board.
pub fn board_after_move(
    board: &Board,
    from: Square,
    to: Square,
    en_passant_target: Option<Square>,
) -> Board {
    let mut scratch = *board;
    let landed_on_empty = scratch.is_empty(to);
    let mover = scratch.piece_at(from);
    scratch.relocate(from, to);

    if let Some(piece) = mover {
        if piece.kind == PieceKind::Pawn && landed_on_empty && en_passant_target == Some(to) {
            if let Some(passed) = to.offset(-piece.color.forward(), 0) {
                scratch.set(passed, None);
            }
        }
    }
    scratch
}

/// Check every movement rule for `from -> to` in `game_state`, ignoring
/// whether the game has already ended. Returns the piece that would move.
pub fn check_move_rules(
    game_state: &GameState,
    from: Square,
    to: Square,
) -> Result<Piece, ChessErrors> {
    let illegal = ChessErrors::IllegalMove { from, to };
    let board = game_state.board();

    let Some(piece) = board.piece_at(from) else {
        return Err(illegal);
    };
    if piece.color != game_state.current_player() || from == to {
        return Err(illegal);
    }
    if let Some(target) = board.piece_at(to) {
        // Kings are never captured: a position where that is possible was
        // already lost on the previous move.
        if target.color == piece.color || target.kind == PieceKind::King {
            return Err(illegal);
        }
    }
    if !piece_reaches(board, piece, from, to, game_state.en_passant_target()) {
        return Err(illegal);
    }

    let scratch = board_after_move(board, from, to, game_state.en_passant_target());
    if scratch.king_square(piece.color).is_none() {
        return Err(ChessErrors::MissingKing(piece.color));
    }
    if is_king_in_check(&scratch, piece.color) {
        return Err(illegal);
    }

    Ok(piece)
}

/// Full legality check used by the commit path and the public query surface.
pub fn validate_move(
    game_state: &GameState,
    from: Square,
    to: Square,
) -> Result<Piece, ChessErrors> {
    if game_state.status().is_terminal() {
        return Err(ChessErrors::GameAlreadyOver(game_state.status()));
    }
    check_move_rules(game_state, from, to)
}

#[inline]
pub fn is_legal(game_state: &GameState, from: Square, to: Square) -> bool {
    validate_move(game_state, from, to).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::fen_parser::parse_fen;

    fn sq(name: &str) -> Square {
        name.parse().expect("test square should parse")
    }

    #[test]
    fn only_side_to_move_may_move() {
        let game = GameState::new_game();
        assert!(is_legal(&game, sq("e2"), sq("e4")));
        assert!(!is_legal(&game, sq("e7"), sq("e5")));
        assert!(!is_legal(&game, sq("e4"), sq("e5")));
    }

    #[test]
    fn friendly_destination_is_rejected() {
        let game = GameState::new_game();
        assert!(!is_legal(&game, sq("d1"), sq("d2")));
        assert!(!is_legal(&game, sq("b1"), sq("d2")));
    }

    #[test]
    fn sliders_cannot_jump() {
        let game = GameState::new_game();
        assert!(!is_legal(&game, sq("a1"), sq("a3")));
        assert!(!is_legal(&game, sq("c1"), sq("e3")));
        assert!(is_legal(&game, sq("g1"), sq("f3")));
    }

    #[test]
    fn pinned_piece_cannot_expose_king() {
        // White bishop on e2 is pinned by the rook on e8.
        let game = parse_fen("4r1k1/8/8/8/8/8/4B3/4K3 w - - 0 1").expect("FEN should parse");
        assert!(!is_legal(&game, sq("e2"), sq("d3")));
        assert!(is_legal(&game, sq("e1"), sq("d1")));
    }

    #[test]
    fn king_cannot_step_into_attack() {
        let game = parse_fen("4k3/8/8/8/8/8/3r4/4K3 w - - 0 1").expect("FEN should parse");
        assert!(!is_legal(&game, sq("e1"), sq("e2")));
        assert!(is_legal(&game, sq("e1"), sq("d2")));
        assert!(!is_legal(&game, sq("e1"), sq("d1")));
    }

    #[test]
    fn pawn_attacks_diagonally_even_onto_empty_squares() {
        let game = parse_fen("4k3/8/8/8/8/3p4/8/4K3 w - - 0 1").expect("FEN should parse");
        assert!(is_square_attacked(game.board(), sq("e2"), Color::Black));
        assert!(is_square_attacked(game.board(), sq("c2"), Color::Black));
        assert!(!is_square_attacked(game.board(), sq("d2"), Color::Black));
        assert!(!is_legal(&game, sq("e1"), sq("e2")));
    }

    #[test]
    fn en_passant_capture_that_exposes_king_is_rejected() {
        // b5xc6 en passant removes the c5 pawn and opens the fifth rank.
        let game = parse_fen("8/8/8/KPp4r/8/8/8/7k w - c6 0 1").expect("FEN should parse");
        assert!(!is_legal(&game, sq("b5"), sq("c6")));
        assert!(is_legal(&game, sq("b5"), sq("b6")));
    }

    #[test]
    fn check_detection_sees_through_empty_lines_only() {
        let open = parse_fen("4k3/8/8/8/8/8/8/R3K2r w - - 0 1").expect("FEN should parse");
        assert!(is_king_in_check(open.board(), Color::White));

        let blocked = parse_fen("4k3/8/8/8/8/8/8/R3KB1r w - - 0 1").expect("FEN should parse");
        assert!(!is_king_in_check(blocked.board(), Color::White));
    }
}
