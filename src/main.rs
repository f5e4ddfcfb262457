//! Play a game against the minimax engine in the terminal.
//!
//! Run with:
//! `cargo run --release -- --difficulty hard`
//! `cargo run --release -- --black --seed 7`
//!
//! Enter moves as `e2e4`. Other commands: `moves`, `fen`, `pgn`,
//! `difficulty <easy|medium|hard>`, `new`, `quit`.

use std::io::{self, BufRead, Write};

use rook_gambit::engines::engine_minimax::{Difficulty, EngineConfig, MinimaxEngine};
use rook_gambit::engines::engine_trait::{Engine, GoParams};
use rook_gambit::game_state::chess_types::*;
use rook_gambit::utils::long_algebraic::{long_algebraic_to_squares, squares_to_long_algebraic};
use rook_gambit::utils::pgn::{format_move_list, result_token, write_pgn};
use rook_gambit::utils::render_game_state::render_game_state;

struct CliOptions {
    difficulty: Difficulty,
    seed: u64,
    human: Color,
}

fn parse_args() -> Result<CliOptions, String> {
    let mut options = CliOptions {
        difficulty: Difficulty::default(),
        seed: rand::random(),
        human: Color::White,
    };

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--difficulty" | "-d" => {
                let value = args.next().ok_or("--difficulty needs a value")?;
                options.difficulty = value.parse()?;
            }
            "--seed" => {
                let value = args.next().ok_or("--seed needs a value")?;
                options.seed = value
                    .parse::<u64>()
                    .map_err(|e| format!("invalid seed {value:?}: {e}"))?;
            }
            "--black" => options.human = Color::Black,
            other => return Err(format!("unknown argument: {other}")),
        }
    }
    Ok(options)
}

fn print_position(game: &GameState) {
    println!("{}", render_game_state(game));
    match game.status() {
        GameStatus::Playing => println!("{} to move", game.current_player()),
        GameStatus::Check => println!("{} to move, in check", game.current_player()),
        GameStatus::Checkmate | GameStatus::Stalemate => {
            println!("{} ({})", game.status(), result_token(game));
            println!("{}", format_move_list(game.move_history()));
            println!("type `new` to play again or `quit` to leave");
        }
    }
}

fn engine_reply(engine: &mut MinimaxEngine, game: &mut GameState) -> Result<(), String> {
    let out = engine.choose_move(game, &GoParams::default())?;
    for line in &out.info_lines {
        eprintln!("{line}");
    }

    let Some((from, to)) = out.best_move else {
        return Ok(());
    };
    let record = game.try_apply_move(from, to).map_err(|e| e.to_string())?;
    println!(
        "{} plays {} ({})",
        engine.name(),
        squares_to_long_algebraic(from, to),
        record.notation
    );
    Ok(())
}

fn main() -> Result<(), String> {
    let options = parse_args()?;
    let mut engine = MinimaxEngine::with_config(EngineConfig {
        difficulty: options.difficulty,
        seed: options.seed,
    });
    let mut game = GameState::new_game();

    println!(
        "{} ({} difficulty), you play {}",
        engine.name(),
        engine.difficulty(),
        options.human
    );

    if game.current_player() != options.human {
        engine_reply(&mut engine, &mut game)?;
    }
    print_position(&game);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line.map_err(|e| e.to_string())?;
        let mut words = line.split_whitespace();
        let Some(command) = words.next() else {
            continue;
        };

        match command {
            "quit" | "exit" => break,
            "new" => {
                game.reset();
                engine.new_game();
                if game.current_player() != options.human {
                    engine_reply(&mut engine, &mut game)?;
                }
                print_position(&game);
            }
            "moves" => {
                let moves: Vec<String> = game
                    .legal_moves()
                    .into_iter()
                    .map(|(from, to)| squares_to_long_algebraic(from, to))
                    .collect();
                println!("{}", moves.join(" "));
            }
            "fen" => println!("{}", game.get_fen()),
            "pgn" => print!("{}", write_pgn(&GameState::new_game(), &game)),
            "difficulty" => match words.next().map(str::parse::<Difficulty>) {
                Some(Ok(difficulty)) => {
                    engine.set_difficulty(difficulty);
                    println!("difficulty set to {difficulty}");
                }
                Some(Err(e)) => println!("{e}"),
                None => println!("difficulty is {}", engine.difficulty()),
            },
            text => {
                let (from, to) = match long_algebraic_to_squares(text) {
                    Ok(squares) => squares,
                    Err(e) => {
                        println!("{e}");
                        continue;
                    }
                };
                if let Err(e) = game.try_apply_move(from, to) {
                    println!("{e}");
                    continue;
                }
                if !game.status().is_terminal() {
                    engine_reply(&mut engine, &mut game)?;
                }
                print_position(&game);
            }
        }
    }

    Ok(())
}
