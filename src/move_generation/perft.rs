//! Perft: count the leaf nodes of the legal move tree to a fixed depth.
//!
//! Used to cross-check the generator against published node counts and as a
//! benchmark workload.

use std::thread;

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_generator::{legal_moves, LegalMove};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

pub fn perft(game_state: &GameState, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let root = game_state.search_copy();
    let mut total = PerftCounts::default();
    for mv in legal_moves(&root) {
        perft_recurse(&root, mv, depth, &mut total);
    }
    total
}

/// Same counts as `perft`, with one thread per root move.
pub fn perft_multi_threaded(game_state: &GameState, depth: u8) -> Result<PerftCounts, String> {
    if depth == 0 {
        return Ok(perft(game_state, depth));
    }

    let mut handles = Vec::new();
    for mv in legal_moves(game_state) {
        let root = game_state.search_copy();
        handles.push(thread::spawn(move || {
            let mut local = PerftCounts::default();
            perft_recurse(&root, mv, depth, &mut local);
            local
        }));
    }

    let mut total = PerftCounts::default();
    for handle in handles {
        let local = handle
            .join()
            .map_err(|_| "perft worker thread panicked".to_owned())?;
        total.merge(local);
    }
    Ok(total)
}

/// Play `mv` from `parent` and count below it; `depth` includes `mv` itself.
fn perft_recurse(parent: &GameState, mv: LegalMove, depth: u8, counts: &mut PerftCounts) {
    let (from, to) = mv;
    let is_en_passant = parent.en_passant_target() == Some(to)
        && parent.board().is_empty(to)
        && parent.board().piece_at(from).map(|p| p.kind) == Some(PieceKind::Pawn);

    let mut child = parent.clone();
    let Some(relocation) = child.advance_generated(from, to) else {
        return;
    };

    if depth == 1 {
        counts.nodes += 1;
        if relocation.captured.is_some() {
            counts.captures += 1;
        }
        if is_en_passant {
            counts.en_passant += 1;
        }
        match child.status() {
            GameStatus::Check => counts.checks += 1,
            GameStatus::Checkmate => {
                counts.checks += 1;
                counts.checkmates += 1;
            }
            GameStatus::Playing | GameStatus::Stalemate => {}
        }
        return;
    }

    for next in legal_moves(&child) {
        perft_recurse(&child, next, depth - 1, counts);
    }
}
