//! Head-to-head engine match harness for local testing.
//!
//! Runs two `Engine` implementations against each other on a `GameState`,
//! with an optional seeded random opening so a series does not replay the
//! same game.

use std::time::Instant;

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::engines::engine_trait::{Engine, GoParams};
use crate::game_state::chess_types::*;
use crate::utils::long_algebraic::squares_to_long_algebraic;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    WhiteWinCheckmate,
    BlackWinCheckmate,
    DrawStalemate,
    DrawMaxPlies,
}

#[derive(Debug, Clone)]
pub struct MatchConfig {
    pub max_plies: u16,
    pub opening_min_plies: u8,
    pub opening_max_plies: u8,
    pub go_params: GoParams,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_plies: 200,
            opening_min_plies: 2,
            opening_max_plies: 6,
            go_params: GoParams::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    pub final_state: GameState,
    pub opening_moves_lan: Vec<String>,
    pub played_moves_lan: Vec<String>,
    pub white_total_time_ns: u128,
    pub black_total_time_ns: u128,
}

#[derive(Debug, Clone)]
pub struct MatchSeriesConfig {
    pub games: u16,
    pub base_seed: u64,
    pub per_game: MatchConfig,
    pub verbose: bool,
}

impl Default for MatchSeriesConfig {
    fn default() -> Self {
        Self {
            games: 6,
            base_seed: 0,
            per_game: MatchConfig::default(),
            verbose: false,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MatchSeriesStats {
    pub games: u16,
    pub player1_wins: u16,
    pub player2_wins: u16,
    pub draws: u16,
    pub outcomes: Vec<MatchOutcome>,
}

impl MatchSeriesStats {
    pub fn report(&self) -> String {
        format!(
            "games={} player1_wins={} player2_wins={} draws={}",
            self.games, self.player1_wins, self.player2_wins, self.draws
        )
    }
}

/// Play one game, `engine_white` against `engine_black`, starting with a
/// random opening of `opening_min_plies..=opening_max_plies` plies drawn
/// from `seed`.
pub fn play_engine_match(
    engine_white: &mut dyn Engine,
    engine_black: &mut dyn Engine,
    seed: u64,
    config: &MatchConfig,
) -> Result<MatchResult, String> {
    engine_white.new_game();
    engine_black.new_game();

    let (mut state, opening_moves_lan) = apply_seeded_random_opening(
        &GameState::new_game(),
        seed,
        config.opening_min_plies,
        config.opening_max_plies,
    )?;

    let mut played_moves_lan = Vec::<String>::new();
    let mut white_total_time_ns = 0u128;
    let mut black_total_time_ns = 0u128;

    for _ in 0..config.max_plies {
        if let Some(outcome) = terminal_outcome(&state) {
            return Ok(MatchResult {
                outcome,
                final_state: state,
                opening_moves_lan,
                played_moves_lan,
                white_total_time_ns,
                black_total_time_ns,
            });
        }

        let mover = state.current_player();
        let started = Instant::now();
        let out = match mover {
            Color::White => engine_white.choose_move(&state, &config.go_params)?,
            Color::Black => engine_black.choose_move(&state, &config.go_params)?,
        };
        let elapsed_ns = started.elapsed().as_nanos();
        match mover {
            Color::White => white_total_time_ns += elapsed_ns,
            Color::Black => black_total_time_ns += elapsed_ns,
        }

        let (from, to) = out
            .best_move
            .ok_or_else(|| format!("{mover} engine returned no move in a live position"))?;
        state
            .try_apply_move(from, to)
            .map_err(|e| format!("{mover} engine returned an illegal move: {e}"))?;
        played_moves_lan.push(squares_to_long_algebraic(from, to));
    }

    Ok(MatchResult {
        outcome: terminal_outcome(&state).unwrap_or(MatchOutcome::DrawMaxPlies),
        final_state: state,
        opening_moves_lan,
        played_moves_lan,
        white_total_time_ns,
        black_total_time_ns,
    })
}

fn terminal_outcome(state: &GameState) -> Option<MatchOutcome> {
    match state.status() {
        GameStatus::Checkmate => Some(match state.current_player() {
            Color::White => MatchOutcome::BlackWinCheckmate,
            Color::Black => MatchOutcome::WhiteWinCheckmate,
        }),
        GameStatus::Stalemate => Some(MatchOutcome::DrawStalemate),
        GameStatus::Playing | GameStatus::Check => None,
    }
}

/// Play `config.games` games, alternating colors, and tally the results.
pub fn play_engine_match_series<F1, F2>(
    player1_factory: F1,
    player2_factory: F2,
    config: &MatchSeriesConfig,
) -> Result<MatchSeriesStats, String>
where
    F1: Fn() -> Box<dyn Engine>,
    F2: Fn() -> Box<dyn Engine>,
{
    let mut stats = MatchSeriesStats {
        games: config.games,
        ..MatchSeriesStats::default()
    };

    for i in 0..config.games {
        let player1_is_white = i % 2 == 0;
        let seed = config.base_seed.wrapping_add(u64::from(i / 2));
        let mut player1 = player1_factory();
        let mut player2 = player2_factory();

        let result = if player1_is_white {
            play_engine_match(player1.as_mut(), player2.as_mut(), seed, &config.per_game)?
        } else {
            play_engine_match(player2.as_mut(), player1.as_mut(), seed, &config.per_game)?
        };

        match (result.outcome, player1_is_white) {
            (MatchOutcome::WhiteWinCheckmate, true) | (MatchOutcome::BlackWinCheckmate, false) => {
                stats.player1_wins += 1
            }
            (MatchOutcome::WhiteWinCheckmate, false) | (MatchOutcome::BlackWinCheckmate, true) => {
                stats.player2_wins += 1
            }
            (MatchOutcome::DrawStalemate | MatchOutcome::DrawMaxPlies, _) => stats.draws += 1,
        }
        stats.outcomes.push(result.outcome);

        if config.verbose {
            println!(
                "[series] game {}/{} seed={} player1_white={} result={:?} plies={}",
                i + 1,
                config.games,
                seed,
                player1_is_white,
                result.outcome,
                result.final_state.move_history().len()
            );
        }
    }

    Ok(stats)
}

fn apply_seeded_random_opening(
    initial: &GameState,
    seed: u64,
    min_plies: u8,
    max_plies: u8,
) -> Result<(GameState, Vec<String>), String> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut state = initial.clone();
    let mut opening_moves_lan = Vec::<String>::new();

    let low = min_plies.min(max_plies);
    let high = max_plies.max(min_plies);
    let target_plies = rng.random_range(low..=high);

    for _ in 0..target_plies {
        let legal_moves = state.legal_moves();
        let Some(&(from, to)) = legal_moves.as_slice().choose(&mut rng) else {
            break;
        };
        state.try_apply_move(from, to).map_err(|e| e.to_string())?;
        opening_moves_lan.push(squares_to_long_algebraic(from, to));
    }

    Ok((state, opening_moves_lan))
}
