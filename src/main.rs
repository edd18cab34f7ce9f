use std::io::{self, BufRead, Write};

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use mailbox_chess::engines::engine_minimax::{MinimaxEngine, DEFAULT_DEPTH};
use mailbox_chess::engines::engine_trait::{Engine, SearchParams};
use mailbox_chess::game_state::chess_types::Team;
use mailbox_chess::game_state::game_state::GameState;
use mailbox_chess::move_generation::game_status::{game_status, GameStatus};
use mailbox_chess::move_generation::legal_move_apply::apply_move;
use mailbox_chess::move_generation::legal_move_generator::check_legality_and_fill_flags;
use mailbox_chess::search::board_scoring::MaterialScorer;
use mailbox_chess::utils::commands::{execute_command, CommandOutcome};
use mailbox_chess::utils::long_algebraic::{move_to_long_algebraic, parse_candidate_move};
use mailbox_chess::utils::render_game_state::{render_engine_move, render_game_state};

const RED: &str = "\u{1b}[31;1m";
const RESET: &str = "\u{1b}[0m";

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let mut engine = build_engine();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    print!("Play against the computer? [y/N]: ");
    io::stdout().flush()?;
    let against_ai = match lines.next() {
        Some(line) => matches!(line?.trim(), "y" | "Y" | "yes"),
        None => return Ok(()),
    };

    let mut game = GameState::initialize(against_ai);
    engine.new_game();
    let mut status = GameStatus::Continue;

    while status == GameStatus::Continue {
        println!("{}", render_game_state(&game));

        let mv = if game.against_ai && game.side_to_move == Team::Black {
            println!("Calculating next move...");
            let out = match engine.choose_move(&mut game, &SearchParams::default()) {
                Ok(out) => out,
                Err(err) => {
                    warn!(%err, "engine failed to choose a move");
                    break;
                }
            };
            for line in &out.info_lines {
                info!("{line}");
            }
            match (out.best_move, render_engine_move(&out)) {
                (Some(mv), Some(summary)) => {
                    println!("{summary}");
                    mv
                }
                _ => break,
            }
        } else {
            println!("Enter move instruction (like 'b2d2'):");
            let Some(line) = lines.next() else {
                return Ok(());
            };
            let line = line?;

            match execute_command(&mut game, &MaterialScorer, &line) {
                CommandOutcome::Exit => return Ok(()),
                CommandOutcome::Output(text) => {
                    println!("{text}");
                    continue;
                }
                CommandOutcome::NotACommand => {}
            }

            let mut candidate = match parse_candidate_move(&line) {
                Ok(candidate) => candidate,
                Err(err) => {
                    println!("{RED}--- Illegal instruction! ({err}) ---{RESET}");
                    continue;
                }
            };
            if !check_legality_and_fill_flags(&mut game, &mut candidate) {
                println!("{RED}--- Illegal instruction! ---{RESET}");
                continue;
            }
            candidate
        };

        apply_move(&mut game, mv);
        status = game_status(&mut game);
    }

    println!("{}", render_game_state(&game));
    match status {
        GameStatus::Win => {
            println!("Checkmate!");
            print!("Enter 'hist' to print the game's history, anything else to exit: ");
            io::stdout().flush()?;
            if let Some(line) = lines.next() {
                if line?.trim() == "hist" {
                    for mv in &game.history {
                        println!("{}", move_to_long_algebraic(*mv));
                    }
                }
            }
        }
        GameStatus::Draw => println!("Draw!"),
        GameStatus::Continue => {}
    }

    Ok(())
}

/// Engine configured from `MAILBOX_CHESS_DEPTH` and `MAILBOX_CHESS_SEED`.
fn build_engine() -> MinimaxEngine {
    let mut engine = MinimaxEngine::new(DEFAULT_DEPTH, None);
    for (var, option) in [("MAILBOX_CHESS_DEPTH", "Depth"), ("MAILBOX_CHESS_SEED", "Seed")] {
        if let Ok(value) = std::env::var(var) {
            if let Err(err) = engine.set_option(option, &value) {
                warn!(%err, var, "ignoring engine setting");
            }
        }
    }
    engine
}
