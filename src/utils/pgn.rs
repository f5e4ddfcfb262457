//! PGN-style transcripts of a played game.
//!
//! Movetext uses coordinate moves (`e2e4`) so a transcript replays exactly
//! through the rules engine; the compact per-move notation from the history
//! is available separately through `format_move_list` for display.

use std::collections::BTreeMap;

use chrono::Local;

use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::chess_types::*;
use crate::utils::long_algebraic::{long_algebraic_to_squares, squares_to_long_algebraic};

#[derive(Debug, Clone)]
pub struct PgnGame {
    pub headers: BTreeMap<String, String>,
    pub initial_state: GameState,
    pub final_state: GameState,
    pub result: String,
}

/// Result token for the state's current status.
pub fn result_token(game_state: &GameState) -> &'static str {
    match game_state.status() {
        GameStatus::Checkmate => match game_state.current_player() {
            Color::White => "0-1",
            Color::Black => "1-0",
        },
        GameStatus::Stalemate => "1/2-1/2",
        GameStatus::Playing | GameStatus::Check => "*",
    }
}

/// Transcript of `game_state`'s history, starting from `initial_state`,
/// with the standard seven headers. `Date` is today's local date.
pub fn write_pgn(initial_state: &GameState, game_state: &GameState) -> String {
    let mut headers = BTreeMap::<String, String>::new();
    headers.insert("Event".to_owned(), "Rook Gambit Game".to_owned());
    headers.insert("Site".to_owned(), "Local".to_owned());
    headers.insert("Date".to_owned(), Local::now().format("%Y.%m.%d").to_string());
    headers.insert("Round".to_owned(), "-".to_owned());
    headers.insert("White".to_owned(), "White".to_owned());
    headers.insert("Black".to_owned(), "Black".to_owned());
    headers.insert("Result".to_owned(), result_token(game_state).to_owned());

    let initial_fen = initial_state.get_fen();
    if initial_fen != STARTING_POSITION_FEN {
        headers.insert("SetUp".to_owned(), "1".to_owned());
        headers.insert("FEN".to_owned(), initial_fen);
    }

    write_pgn_with_headers(
        game_state.move_history(),
        &headers,
        initial_state.current_player(),
        initial_state.fullmove_number(),
    )
}

/// `first_mover` and `first_fullmove` describe the position the history
/// starts from, so movetext numbers line up with its FEN.
pub fn write_pgn_with_headers(
    move_history: &[MoveRecord],
    headers: &BTreeMap<String, String>,
    first_mover: Color,
    first_fullmove: u16,
) -> String {
    let mut out = String::new();

    for (key, value) in headers {
        out.push_str(&format!("[{} \"{}\"]\n", key, escape_pgn_value(value)));
    }
    out.push('\n');

    // A game starting with black shifts every later white move one number up.
    let offset = usize::from(first_mover == Color::Black);
    let mut movetext_parts = Vec::<String>::with_capacity(move_history.len() + 1);
    for (ply, record) in move_history.iter().enumerate() {
        let lan = squares_to_long_algebraic(record.from, record.to);
        let number = usize::from(first_fullmove) + (ply + offset) / 2;
        let white_to_play = (ply + offset) % 2 == 0;
        if white_to_play {
            movetext_parts.push(format!("{number}. {lan}"));
        } else if ply == 0 {
            movetext_parts.push(format!("{number}... {lan}"));
        } else {
            movetext_parts.push(lan);
        }
    }

    let result = headers
        .get("Result")
        .map(|x| normalize_result(x))
        .unwrap_or("*");
    movetext_parts.push(result.to_owned());
    out.push_str(&movetext_parts.join(" "));
    out.push('\n');

    out
}

/// Numbered list of the recorded notations, e.g. `1. e4 e5 2. Nf3`.
pub fn format_move_list(move_history: &[MoveRecord]) -> String {
    let mut parts = Vec::with_capacity(move_history.len());
    let mut last_number = 0u16;
    for record in move_history {
        if record.move_number != last_number {
            parts.push(format!("{}. {}", record.move_number, record.notation));
            last_number = record.move_number;
        } else {
            parts.push(record.notation.clone());
        }
    }
    parts.join(" ")
}

/// Replay a transcript written by `write_pgn`.
pub fn read_pgn(pgn: &str) -> Result<PgnGame, String> {
    let mut headers = BTreeMap::<String, String>::new();
    let mut movetext_lines = Vec::<String>::new();

    for line in pgn.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if trimmed.starts_with('[') {
            let (k, v) = parse_header_line(trimmed)?;
            headers.insert(k, v);
        } else {
            movetext_lines.push(trimmed.to_owned());
        }
    }

    let initial_state = if headers.get("SetUp").map(|x| x.as_str()) == Some("1") {
        let fen = headers
            .get("FEN")
            .ok_or("PGN SetUp=1 is present but FEN header is missing")?;
        GameState::from_fen(fen).map_err(|e| e.to_string())?
    } else {
        GameState::new_game()
    };

    let mut state = initial_state.clone();
    let mut result = "*".to_owned();

    let movetext = strip_pgn_comments(&movetext_lines.join(" "));
    for token in movetext.split_whitespace() {
        if is_move_number_token(token) {
            continue;
        }
        if is_result_token(token) {
            result = token.to_owned();
            break;
        }

        let (from, to) = long_algebraic_to_squares(token)?;
        state
            .try_apply_move(from, to)
            .map_err(|e| format!("{token}: {e}"))?;
    }

    if let Some(header_result) = headers.get("Result") {
        result = normalize_result(header_result).to_owned();
    }

    Ok(PgnGame {
        headers,
        initial_state,
        final_state: state,
        result,
    })
}

fn parse_header_line(line: &str) -> Result<(String, String), String> {
    if !line.starts_with('[') || !line.ends_with(']') {
        return Err(format!("Invalid PGN header line: {line}"));
    }
    let inner = &line[1..line.len() - 1];
    let mut parts = inner.splitn(2, ' ');
    let key = parts
        .next()
        .ok_or_else(|| format!("Invalid PGN header key: {line}"))?
        .trim();
    let value_raw = parts
        .next()
        .ok_or_else(|| format!("Invalid PGN header value: {line}"))?
        .trim();

    if !value_raw.starts_with('"') || !value_raw.ends_with('"') || value_raw.len() < 2 {
        return Err(format!("Invalid quoted PGN header value: {line}"));
    }
    let value = value_raw[1..value_raw.len() - 1].replace("\\\"", "\"");
    Ok((key.to_owned(), value))
}

fn strip_pgn_comments(text: &str) -> String {
    let mut out = String::new();
    let mut brace_depth = 0usize;

    for ch in text.chars() {
        match ch {
            '{' => brace_depth = brace_depth.saturating_add(1),
            '}' => brace_depth = brace_depth.saturating_sub(1),
            _ if brace_depth == 0 => out.push(ch),
            _ => {}
        }
    }

    out
}

fn is_move_number_token(token: &str) -> bool {
    let digits = token.trim_end_matches('.');
    digits.len() < token.len() && !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
}

fn is_result_token(token: &str) -> bool {
    matches!(token, "1-0" | "0-1" | "1/2-1/2" | "*")
}

fn normalize_result(result: &str) -> &str {
    if is_result_token(result) {
        result
    } else {
        "*"
    }
}

fn escape_pgn_value(value: &str) -> String {
    value.replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn played(moves: &[(&str, &str)]) -> GameState {
        let mut game = GameState::new_game();
        for (from, to) in moves {
            assert!(game.attempt_move(from, to), "{from}{to} should be legal");
        }
        game
    }

    #[test]
    fn transcript_replays_to_the_same_state() {
        let game = played(&[("e2", "e4"), ("e7", "e5"), ("g1", "f3"), ("b8", "c6")]);
        let pgn = write_pgn(&GameState::new_game(), &game);
        assert!(pgn.contains("1. e2e4 e7e5 2. g1f3 b8c6 *"));
        assert!(pgn.contains("[Date \""));

        let parsed = read_pgn(&pgn).expect("PGN should parse");
        assert_eq!(parsed.final_state, game);
        assert_eq!(parsed.result, "*");
    }

    #[test]
    fn checkmate_result_names_the_winner() {
        let game = played(&[("f2", "f3"), ("e7", "e5"), ("g2", "g4"), ("d8", "h4")]);
        assert_eq!(result_token(&game), "0-1");
        let pgn = write_pgn(&GameState::new_game(), &game);
        assert!(pgn.trim_end().ends_with("0-1"));
    }

    #[test]
    fn custom_start_position_round_trips() {
        let initial =
            GameState::from_fen("4k3/8/8/8/8/8/4P3/4K3 b - - 0 1").expect("FEN should parse");
        let mut game = initial.clone();
        assert!(game.attempt_move("e8", "d7"));
        assert!(game.attempt_move("e2", "e4"));

        let pgn = write_pgn(&initial, &game);
        assert!(pgn.contains("[SetUp \"1\"]"));
        assert!(pgn.contains("1... e8d7 2. e2e4"));

        let parsed = read_pgn(&pgn).expect("PGN should parse");
        assert_eq!(parsed.initial_state, initial);
        assert_eq!(parsed.final_state, game);
    }

    #[test]
    fn movetext_continues_from_the_loaded_move_number() {
        let initial =
            GameState::from_fen("4k3/8/8/8/8/8/4P3/4K3 b - - 0 30").expect("FEN should parse");
        let mut game = initial.clone();
        for (from, to) in [("e8", "d7"), ("e2", "e4"), ("d7", "c6")] {
            assert!(game.attempt_move(from, to));
        }

        let pgn = write_pgn(&initial, &game);
        assert!(pgn.contains("[FEN \"4k3/8/8/8/8/8/4P3/4K3 b - - 0 30\"]"));
        assert!(pgn.contains("30... e8d7 31. e2e4 d7c6 *"));

        let parsed = read_pgn(&pgn).expect("PGN should parse");
        assert_eq!(parsed.final_state.fullmove_number(), 32);
        assert_eq!(parsed.final_state, game);
    }

    #[test]
    fn move_list_uses_recorded_notation() {
        let game = played(&[("e2", "e4"), ("d7", "d5"), ("e4", "d5"), ("g8", "f6")]);
        assert_eq!(format_move_list(game.move_history()), "1. e4 d5 2. exd5 Nf6");
    }

    #[test]
    fn illegal_movetext_is_reported() {
        let err = read_pgn("1. e2e5 *").expect_err("e2e5 is illegal");
        assert!(err.contains("e2e5"));
    }
}
