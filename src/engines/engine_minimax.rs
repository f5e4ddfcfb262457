//! Minimax opponent with selectable difficulty.
//!
//! Difficulty maps to search depth (easy 2, medium 3, hard 4). Easy also
//! visits moves in a shuffled order, drawn from an RNG seeded by
//! `EngineConfig::seed`, so its play varies between seeds but repeats for
//! the same one.

use std::fmt;
use std::str::FromStr;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::game_state::chess_types::GameState;
use crate::move_generation::legal_move_generator::LegalMove;
use crate::search::board_scoring::PieceSquareScorer;
use crate::search::minimax::{minimax_search, SearchConfig, SearchResult};
use crate::search::threading::{spawn_search, SearchHandle};
use crate::utils::long_algebraic::squares_to_long_algebraic;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    #[inline]
    pub const fn search_depth(self) -> u8 {
        match self {
            Difficulty::Easy => 2,
            Difficulty::Medium => 3,
            Difficulty::Hard => 4,
        }
    }

    #[inline]
    pub const fn shuffles_moves(self) -> bool {
        matches!(self, Difficulty::Easy)
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        f.write_str(name)
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!("unknown difficulty: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    pub difficulty: Difficulty,
    pub seed: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Medium,
            seed: 0x5EED_CAFE,
        }
    }
}

pub struct MinimaxEngine {
    config: EngineConfig,
    rng: StdRng,
}

impl MinimaxEngine {
    pub fn new(difficulty: Difficulty) -> Self {
        Self::with_config(EngineConfig {
            difficulty,
            ..EngineConfig::default()
        })
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            config,
            rng: StdRng::seed_from_u64(config.seed),
        }
    }

    #[inline]
    pub fn config(&self) -> EngineConfig {
        self.config
    }

    #[inline]
    pub fn difficulty(&self) -> Difficulty {
        self.config.difficulty
    }

    /// Takes effect from the next search.
    #[inline]
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.config.difficulty = difficulty;
    }

    pub fn set_seed(&mut self, seed: u64) {
        self.config.seed = seed;
        self.rng = StdRng::seed_from_u64(seed);
    }

    fn search_config(&self, depth_override: Option<u8>) -> SearchConfig {
        SearchConfig {
            max_depth: depth_override.unwrap_or(self.config.difficulty.search_depth()),
            shuffle: self.config.difficulty.shuffles_moves(),
        }
    }

    /// Full search result for the side to move. `game_state` is not modified.
    pub fn search(&mut self, game_state: &GameState, depth_override: Option<u8>) -> SearchResult {
        let config = self.search_config(depth_override);
        minimax_search(game_state, &PieceSquareScorer, config, &mut self.rng)
    }

    /// Best move for the side to move, or `None` when it has no legal move.
    pub fn best_move(&mut self, game_state: &GameState) -> Option<LegalMove> {
        self.search(game_state, None).best_move
    }

    /// Run the same search on a worker thread against a copy of the state.
    pub fn search_in_background(&mut self, game_state: &GameState) -> SearchHandle {
        let seed = self.rng.random::<u64>();
        spawn_search(game_state.clone(), self.search_config(None), seed)
    }
}

impl Default for MinimaxEngine {
    fn default() -> Self {
        Self::with_config(EngineConfig::default())
    }
}

impl Engine for MinimaxEngine {
    fn name(&self) -> &str {
        "Rook Gambit Minimax"
    }

    fn new_game(&mut self) {
        self.rng = StdRng::seed_from_u64(self.config.seed);
    }

    fn set_option(&mut self, name: &str, value: &str) -> Result<(), String> {
        match name.trim().to_ascii_lowercase().as_str() {
            "difficulty" => {
                self.set_difficulty(value.parse::<Difficulty>()?);
                Ok(())
            }
            "seed" => {
                let seed = value
                    .trim()
                    .parse::<u64>()
                    .map_err(|e| format!("invalid seed {value:?}: {e}"))?;
                self.set_seed(seed);
                Ok(())
            }
            _ => Err(format!("unknown option: {name}")),
        }
    }

    fn choose_move(
        &mut self,
        game_state: &GameState,
        params: &GoParams,
    ) -> Result<EngineOutput, String> {
        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info string minimax_engine difficulty {}",
            self.config.difficulty
        ));
        out.info_lines.push(format!(
            "info string minimax_engine legal_moves {}",
            game_state.legal_moves().len()
        ));

        let result = self.search(game_state, params.depth);
        out.info_lines.push(format!(
            "info depth {} nodes {} score {}",
            result.reached_depth, result.nodes, result.best_score
        ));

        if let Some((from, to)) = result.best_move {
            out.info_lines.push(format!(
                "info string minimax_engine bestmove {}",
                squares_to_long_algebraic(from, to)
            ));
        }
        out.best_move = result.best_move;
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::Square;

    fn sq(name: &str) -> Square {
        name.parse().expect("test square should parse")
    }

    #[test]
    fn difficulty_sets_depth() {
        assert_eq!(Difficulty::Easy.search_depth(), 2);
        assert_eq!(Difficulty::Medium.search_depth(), 3);
        assert_eq!(Difficulty::Hard.search_depth(), 4);
        assert_eq!("HARD".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert!("brutal".parse::<Difficulty>().is_err());
    }

    #[test]
    fn engine_takes_hanging_queen() {
        let game =
            GameState::from_fen("4k3/8/8/3q4/4P3/8/8/4K3 w - - 0 1").expect("FEN should parse");
        let mut engine = MinimaxEngine::new(Difficulty::Easy);
        assert_eq!(engine.best_move(&game), Some((sq("e4"), sq("d5"))));
    }

    #[test]
    fn medium_is_deterministic_across_engines() {
        let game = GameState::new_game();
        let first = MinimaxEngine::new(Difficulty::Medium).best_move(&game);
        let second = MinimaxEngine::new(Difficulty::Medium).best_move(&game);
        assert!(first.is_some());
        assert_eq!(first, second);
    }

    #[test]
    fn easy_repeats_for_the_same_seed() {
        let mut game = GameState::new_game();
        assert!(game.attempt_move("d2", "d4"));
        let config = EngineConfig {
            difficulty: Difficulty::Easy,
            seed: 99,
        };
        let mut first = MinimaxEngine::with_config(config);
        let mut second = MinimaxEngine::with_config(config);
        for _ in 0..3 {
            assert_eq!(first.best_move(&game), second.best_move(&game));
        }
    }

    #[test]
    fn engine_leaves_game_untouched_and_returns_none_when_mated() {
        let mut game = GameState::new_game();
        for (from, to) in [("f2", "f3"), ("e7", "e5"), ("g2", "g4"), ("d8", "h4")] {
            assert!(game.attempt_move(from, to));
        }
        let before = game.clone();
        let mut engine = MinimaxEngine::new(Difficulty::Hard);
        assert_eq!(engine.best_move(&game), None);
        assert_eq!(game, before);
    }

    #[test]
    fn options_update_configuration() {
        let mut engine = MinimaxEngine::default();
        engine.set_option("Difficulty", "easy").expect("difficulty should be accepted");
        assert_eq!(engine.difficulty(), Difficulty::Easy);
        engine.set_option("Seed", "1234").expect("seed should be accepted");
        assert_eq!(engine.config().seed, 1234);
        assert!(engine.set_option("Seed", "abc").is_err());
        assert!(engine.set_option("Hash", "16").is_err());
    }

    #[test]
    fn choose_move_reports_info_lines() {
        let game = GameState::new_game();
        let mut engine = MinimaxEngine::new(Difficulty::Easy);
        let out = engine
            .choose_move(&game, &GoParams { depth: Some(1) })
            .expect("engine should produce output");
        assert!(out.best_move.is_some());
        assert!(out
            .info_lines
            .iter()
            .any(|line| line == "info string minimax_engine legal_moves 20"));
        assert!(out.info_lines.iter().any(|line| line.starts_with("info depth 1 nodes 21")));
    }

    #[test]
    fn background_search_agrees_on_forced_capture() {
        let game =
            GameState::from_fen("4k3/8/8/3q4/4P3/8/8/4K3 w - - 0 1").expect("FEN should parse");
        let mut engine = MinimaxEngine::new(Difficulty::Medium);
        let result = engine
            .search_in_background(&game)
            .wait()
            .expect("worker should deliver a result");
        assert_eq!(result.best_move, Some((sq("e4"), sq("d5"))));
        assert_eq!(result.reached_depth, 3);
    }
}
