//! Standalone engine-vs-engine series runner.
//!
//! Run with:
//! `cargo run --release --bin engine_match_series`
//! `cargo run --release --bin engine_match_series -- --verbose`

use rook_gambit::engines::engine_minimax::{Difficulty, EngineConfig, MinimaxEngine};
use rook_gambit::engines::engine_trait::Engine;
use rook_gambit::utils::engine_match_harness::{
    play_engine_match_series, MatchConfig, MatchSeriesConfig,
};

fn main() -> Result<(), String> {
    let verbose = std::env::args().any(|a| a == "--verbose" || a == "-v");

    // Swap these to compare other difficulty pairings.
    let player1 = || {
        Box::new(MinimaxEngine::with_config(EngineConfig {
            difficulty: Difficulty::Hard,
            seed: 1,
        })) as Box<dyn Engine>
    };
    let player2 = || {
        Box::new(MinimaxEngine::with_config(EngineConfig {
            difficulty: Difficulty::Easy,
            seed: 2,
        })) as Box<dyn Engine>
    };

    let stats = play_engine_match_series(
        player1,
        player2,
        &MatchSeriesConfig {
            games: 6,
            base_seed: 1234,
            per_game: MatchConfig {
                max_plies: 160,
                ..MatchConfig::default()
            },
            verbose,
        },
    )?;

    println!("{}", stats.report());
    println!("outcomes: {:?}", stats.outcomes);
    Ok(())
}
