//! Depth-limited minimax with alpha-beta pruning.
//!
//! The searching side maximizes and the opponent minimizes; every leaf is
//! scored from the searching side's perspective. The search runs on a
//! history-free copy of the caller's state: each explored move is played on a
//! private clone of its parent with no record or notation, so a node costs
//! the same however long the game has been.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_generator::LegalMove;
use crate::search::board_scoring::{BoardScorer, MATE_SCORE};

#[derive(Debug, Clone, Copy)]
pub struct SearchConfig {
    pub max_depth: u8,
    /// Visit moves in a random order at every node.
    pub shuffle: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: 3,
            shuffle: false,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchResult {
    pub best_move: Option<LegalMove>,
    pub best_score: i32,
    pub reached_depth: u8,
    pub nodes: u64,
}

/// Search for the side to move in `game_state`.
///
/// `rng` is only drawn from when `config.shuffle` is set. With shuffling off
/// the result depends on the position alone.
pub fn minimax_search<S: BoardScorer>(
    game_state: &GameState,
    scorer: &S,
    config: SearchConfig,
    rng: &mut StdRng,
) -> SearchResult {
    let mut search = Minimax {
        scorer,
        perspective: game_state.current_player(),
        shuffle: config.shuffle,
        rng,
        nodes: 0,
    };

    let root = game_state.search_copy();
    let (best_move, best_score) =
        search.minimax(&root, config.max_depth, true, i32::MIN, i32::MAX);

    SearchResult {
        best_move,
        best_score,
        reached_depth: config.max_depth,
        nodes: search.nodes,
    }
}

struct Minimax<'a, S: BoardScorer> {
    scorer: &'a S,
    perspective: Color,
    shuffle: bool,
    rng: &'a mut StdRng,
    nodes: u64,
}

impl<S: BoardScorer> Minimax<'_, S> {
    fn minimax(
        &mut self,
        game_state: &GameState,
        depth: u8,
        maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
    ) -> (Option<LegalMove>, i32) {
        self.nodes += 1;

        if depth == 0 {
            return (None, self.scorer.score(game_state, self.perspective));
        }

        let mut moves = game_state.legal_moves();
        if moves.is_empty() {
            return (None, terminal_score(game_state, maximizing));
        }
        if self.shuffle {
            moves.shuffle(&mut *self.rng);
        }

        let mut best_move = None;
        let mut best_score = if maximizing { i32::MIN } else { i32::MAX };

        for (from, to) in moves {
            let mut child = game_state.clone();
            if child.advance_generated(from, to).is_none() {
                continue;
            }

            let (_, score) = self.minimax(&child, depth - 1, !maximizing, alpha, beta);

            if maximizing {
                if score > best_score {
                    best_score = score;
                    best_move = Some((from, to));
                }
                alpha = alpha.max(score);
            } else {
                if score < best_score {
                    best_score = score;
                    best_move = Some((from, to));
                }
                beta = beta.min(score);
            }

            if beta <= alpha {
                break;
            }
        }

        (best_move, best_score)
    }
}

/// Score of a node whose side to move has no legal moves. The side to move
/// is the maximizer exactly when `maximizing` is set.
fn terminal_score(game_state: &GameState, maximizing: bool) -> i32 {
    match game_state.status() {
        GameStatus::Checkmate if maximizing => -MATE_SCORE,
        GameStatus::Checkmate => MATE_SCORE,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use rand::{Rng, SeedableRng};

    use super::*;
    use crate::search::board_scoring::PieceSquareScorer;

    fn sq(name: &str) -> Square {
        name.parse().expect("test square should parse")
    }

    fn search(game: &GameState, max_depth: u8) -> SearchResult {
        let mut rng = StdRng::seed_from_u64(7);
        let config = SearchConfig {
            max_depth,
            shuffle: false,
        };
        minimax_search(game, &PieceSquareScorer, config, &mut rng)
    }

    /// Plain minimax without pruning, for cross-checking.
    fn full_width(game: &GameState, depth: u8, maximizing: bool, perspective: Color) -> i32 {
        if depth == 0 {
            return PieceSquareScorer.score(game, perspective);
        }
        let moves = game.legal_moves();
        if moves.is_empty() {
            return terminal_score(game, maximizing);
        }
        let scores = moves.into_iter().map(|(from, to)| {
            let mut child = game.clone();
            child
                .advance_generated(from, to)
                .expect("generated move should apply");
            full_width(&child, depth - 1, !maximizing, perspective)
        });
        if maximizing {
            scores.max().unwrap_or(i32::MIN)
        } else {
            scores.min().unwrap_or(i32::MAX)
        }
    }

    #[test]
    fn pawn_takes_hanging_queen() {
        let game =
            GameState::from_fen("4k3/8/8/3q4/4P3/8/8/4K3 w - - 0 1").expect("FEN should parse");
        let result = search(&game, 2);
        assert_eq!(result.best_move, Some((sq("e4"), sq("d5"))));
        assert!(result.best_score > 0);
        assert_eq!(result.reached_depth, 2);
    }

    #[test]
    fn search_leaves_the_state_untouched() {
        let mut game = GameState::new_game();
        for (from, to) in [("e2", "e4"), ("e7", "e5"), ("g1", "f3")] {
            assert!(game.attempt_move(from, to));
        }
        let before = game.clone();
        let _ = search(&game, 3);
        assert_eq!(game, before);
    }

    #[test]
    fn unshuffled_search_is_deterministic() {
        let game = GameState::new_game();
        let first = search(&game, 3);
        let second = search(&game, 3);
        assert_eq!(first, second);
        assert!(first.best_move.is_some());
    }

    #[test]
    fn shuffled_search_repeats_for_the_same_seed() {
        let game = GameState::new_game();
        let config = SearchConfig {
            max_depth: 2,
            shuffle: true,
        };
        let run = |seed: u64| {
            let mut rng = StdRng::seed_from_u64(seed);
            minimax_search(&game, &PieceSquareScorer, config, &mut rng)
        };
        assert_eq!(run(42), run(42));
        assert_eq!(run(42).best_score, search(&game, 2).best_score);
    }

    /// Scores every position the same, so every move ties.
    struct FlatScorer;

    impl BoardScorer for FlatScorer {
        fn score(&self, _game_state: &GameState, _perspective: Color) -> i32 {
            0
        }
    }

    fn flat_search(seed: u64, shuffle: bool) -> (SearchResult, StdRng) {
        let mut rng = StdRng::seed_from_u64(seed);
        let config = SearchConfig {
            max_depth: 1,
            shuffle,
        };
        let result = minimax_search(&GameState::new_game(), &FlatScorer, config, &mut rng);
        (result, rng)
    }

    #[test]
    fn ties_go_to_the_first_move_without_shuffling() {
        let first = GameState::new_game().legal_moves()[0];
        for seed in 0..8 {
            assert_eq!(flat_search(seed, false).0.best_move, Some(first));
        }
    }

    #[test]
    fn unshuffled_search_never_draws_from_the_rng() {
        for seed in [0, 7, 0x5EED_CAFE] {
            let (_, mut used) = flat_search(seed, false);
            let mut fresh = StdRng::seed_from_u64(seed);
            assert_eq!(used.random::<u64>(), fresh.random::<u64>());
        }
    }

    #[test]
    fn shuffling_spreads_ties_across_seeds() {
        let picks: BTreeSet<LegalMove> = (0..16)
            .filter_map(|seed| flat_search(seed, true).0.best_move)
            .collect();
        assert!(picks.len() > 1, "every seed picked {picks:?}");

        let (_, mut used) = flat_search(3, true);
        let mut fresh = StdRng::seed_from_u64(3);
        assert_ne!(used.random::<u64>(), fresh.random::<u64>());
    }

    #[test]
    fn long_history_does_not_change_the_search() {
        let mut game = GameState::new_game();
        let shuffle = [("g1", "f3"), ("g8", "f6"), ("f3", "g1"), ("f6", "g8")];
        for _ in 0..20 {
            for (from, to) in shuffle {
                assert!(game.attempt_move(from, to));
            }
        }
        assert_eq!(game.move_history().len(), 80);
        let fresh = GameState::new_game();
        assert_eq!(search(&game, 3), search(&fresh, 3));
    }

    #[test]
    fn pruning_matches_full_width_minimax() {
        let mut game = GameState::new_game();
        for (from, to) in [("e2", "e4"), ("d7", "d5")] {
            assert!(game.attempt_move(from, to));
        }
        let pruned = search(&game, 2);
        assert_eq!(pruned.best_score, full_width(&game, 2, true, Color::White));

        let sparse =
            GameState::from_fen("4k3/8/8/3q4/4P3/8/8/4K3 w - - 0 1").expect("FEN should parse");
        let pruned = search(&sparse, 3);
        assert_eq!(pruned.best_score, full_width(&sparse, 3, true, Color::White));
    }

    #[test]
    fn finds_mate_in_one() {
        let game =
            GameState::from_fen("7k/8/6K1/8/8/8/8/5Q2 w - - 0 1").expect("FEN should parse");
        for depth in [1, 2] {
            let result = search(&game, depth);
            let (from, to) = result.best_move.expect("a move should be found");
            let mut next = game.clone();
            next.try_apply_move(from, to).expect("best move should be legal");
            assert_eq!(
                next.status(),
                GameStatus::Checkmate,
                "depth {depth} picked {from}{to}"
            );
            assert!(result.best_score >= MATE_SCORE - 30_000);
        }
    }

    #[test]
    fn no_move_when_already_mated() {
        let mut game = GameState::new_game();
        for (from, to) in [("f2", "f3"), ("e7", "e5"), ("g2", "g4"), ("d8", "h4")] {
            assert!(game.attempt_move(from, to));
        }
        let result = search(&game, 3);
        assert_eq!(result.best_move, None);
        assert_eq!(result.best_score, -MATE_SCORE);
        assert_eq!(result.nodes, 1);
    }

    #[test]
    fn depth_zero_only_evaluates() {
        let game = GameState::new_game();
        let result = search(&game, 0);
        assert_eq!(result.best_move, None);
        assert_eq!(result.best_score, 0);
        assert_eq!(result.nodes, 1);
    }
}
