//! FEN-to-GameState parser.
//!
//! Builds a position from a Forsyth-Edwards Notation string: placement, side
//! to move, castling rights and en-passant target. The halfmove and fullmove
//! counters may be omitted; when present they must be numbers. The halfmove
//! clock is ignored since no fifty-move rule is kept; the fullmove number
//! becomes the position's starting move number.

use crate::errors::ChessErrors;
use crate::game_state::chess_types::*;
use crate::utils::algebraic::algebraic_to_square;

pub fn parse_fen(fen: &str) -> Result<GameState, ChessErrors> {
    parse_fen_fields(fen).map_err(ChessErrors::InvalidFen)?
}

fn parse_fen_fields(fen: &str) -> Result<Result<GameState, ChessErrors>, String> {
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or("Missing board layout in FEN")?;
    let side_part = parts.next().ok_or("Missing side-to-move in FEN")?;
    let castling_part = parts.next().ok_or("Missing castling rights in FEN")?;
    let en_passant_part = parts.next().ok_or("Missing en-passant square in FEN")?;

    let mut counters = [0u16, 1u16];
    for (slot, counter) in counters.iter_mut().zip(parts.by_ref()) {
        *slot = counter
            .parse::<u16>()
            .map_err(|_| format!("Invalid move counter: {counter}"))?;
    }
    if parts.next().is_some() {
        return Err("FEN has extra trailing fields".to_owned());
    }

    let board = parse_board(board_part)?;
    let side_to_move = parse_side_to_move(side_part)?;
    let castling_rights = parse_castling_rights(castling_part)?;
    let en_passant_target = parse_en_passant_square(en_passant_part, side_to_move)?;

    let fullmove_number = counters[1].max(1);
    Ok(GameState::from_parts(board, side_to_move, en_passant_target, castling_rights)
        .map(|state| state.with_fullmove_number(fullmove_number)))
}

fn parse_board(board_part: &str) -> Result<Board, String> {
    let rows: Vec<&str> = board_part.split('/').collect();
    if rows.len() != 8 {
        return Err("Board layout must contain 8 ranks".to_owned());
    }

    let mut board = Board::empty();

    // FEN lists rank 8 first, which is row 0.
    for (row, rank_str) in rows.iter().enumerate() {
        let mut col = 0u8;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(format!("Invalid empty-square count '{ch}'"));
                }
                col += empty_count as u8;
                if col > 8 {
                    return Err("Board rank has too many files".to_owned());
                }
                continue;
            }

            let piece = Piece::from_fen_char(ch)
                .ok_or_else(|| format!("Invalid piece character '{ch}' in board layout"))?;
            let sq = Square::new(row as u8, col).ok_or("Board rank has too many files")?;
            board.set(sq, Some(piece));
            col += 1;
        }

        if col != 8 {
            return Err("Board rank does not sum to 8 files".to_owned());
        }
    }

    Ok(board)
}

fn parse_side_to_move(side_part: &str) -> Result<Color, String> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(format!("Invalid side-to-move field: {side_part}")),
    }
}

fn parse_castling_rights(castling_part: &str) -> Result<CastlingRights, String> {
    let mut rights = CastlingRights::NONE;
    if castling_part == "-" {
        return Ok(rights);
    }

    for ch in castling_part.chars() {
        match ch {
            'K' => rights.white_kingside = true,
            'Q' => rights.white_queenside = true,
            'k' => rights.black_kingside = true,
            'q' => rights.black_queenside = true,
            _ => return Err(format!("Invalid castling rights character: {ch}")),
        }
    }

    Ok(rights)
}

/// The target must sit on the square a pawn of the side that just moved
/// skipped: rank 6 when white is to move, rank 3 when black is.
fn parse_en_passant_square(
    en_passant_part: &str,
    side_to_move: Color,
) -> Result<Option<Square>, String> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    let sq = algebraic_to_square(en_passant_part)?;
    let mover = side_to_move.opposite();
    let skipped_row = mover.pawn_start_row() as i8 + mover.forward();
    if sq.row() as i8 != skipped_row {
        return Err(format!("En-passant square {sq} does not match side to move"));
    }
    Ok(Some(sq))
}
