use crate::game_state::chess_types::*;

/// Render `game_state` as FEN. The halfmove clock is always 0 since no clock
/// is kept; the fullmove number continues from the one the game was loaded
/// with.
pub fn generate_fen(game_state: &GameState) -> String {
    let board = generate_board_field(game_state.board());
    let side_to_move = match game_state.current_player() {
        Color::White => "w",
        Color::Black => "b",
    };
    let castling = generate_castling_field(game_state.castling_rights());
    let en_passant = game_state
        .en_passant_target()
        .map(|sq| sq.to_string())
        .unwrap_or_else(|| "-".to_owned());
    let fullmove_number = game_state.fullmove_number();

    format!("{board} {side_to_move} {castling} {en_passant} 0 {fullmove_number}")
}

fn generate_board_field(board: &Board) -> String {
    let mut out = String::new();

    for (row, cells) in board.rows().iter().enumerate() {
        let mut empty_count = 0u8;

        for cell in cells {
            match cell {
                Some(piece) => {
                    if empty_count > 0 {
                        out.push(char::from(b'0' + empty_count));
                        empty_count = 0;
                    }
                    out.push(piece.fen_char());
                }
                None => empty_count += 1,
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }
        if row < 7 {
            out.push('/');
        }
    }

    out
}

fn generate_castling_field(rights: CastlingRights) -> String {
    let mut out = String::new();
    if rights.white_kingside {
        out.push('K');
    }
    if rights.white_queenside {
        out.push('Q');
    }
    if rights.black_kingside {
        out.push('k');
    }
    if rights.black_queenside {
        out.push('q');
    }
    if out.is_empty() {
        out.push('-');
    }
    out
}
