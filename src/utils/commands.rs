//! Terminal commands accepted in place of a move.

use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::undo_move;
use crate::move_generation::legal_move_generator::{FastMoveGenerator, LegalMoveGenerator};
use crate::move_generation::move_generator::{MoveGenerator, MoveScope};
use crate::move_generation::perft::verify_round_trip;
use crate::search::board_scoring::BoardScorer;
use crate::utils::algebraic::algebraic_to_square;
use crate::utils::long_algebraic::move_to_long_algebraic;

/// Remaining depth for the `full` self-test; four plies in total.
pub const FULL_TEST_DEPTH: u8 = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// Input is not a command; treat it as a move.
    NotACommand,
    Output(String),
    Exit,
}

pub fn execute_command<S: BoardScorer>(
    game_state: &mut GameState,
    scorer: &S,
    input: &str,
) -> CommandOutcome {
    let mut words = input.split_whitespace();
    let Some(command) = words.next() else {
        return CommandOutcome::NotACommand;
    };

    let text = match command {
        "undo" => undo_turn(game_state),
        "eval" => format!("Board score: {}.", scorer.score(game_state)),
        "list" => match (words.next(), words.next()) {
            (Some(square), None) => list_piece_moves(game_state, &LegalMoveGenerator, square),
            (Some(square), Some("fast")) => list_piece_moves(game_state, &FastMoveGenerator, square),
            _ => "Usage: list <square> [fast]".to_owned(),
        },
        "test" => match verify_round_trip(game_state, 0) {
            Ok(count) => format!("Undo restored all {count} moves."),
            Err(failure) => format!("Self-test failed: {failure}"),
        },
        "full" => match verify_round_trip(game_state, FULL_TEST_DEPTH) {
            Ok(count) => format!("Test passed successfully! ({count} moves verified)"),
            Err(failure) => format!("Self-test failed: {failure}"),
        },
        "flag" => castling_rights_report(game_state.castling_rights),
        "hist" => game_state
            .history
            .iter()
            .map(|mv| move_to_long_algebraic(*mv))
            .collect::<Vec<_>>()
            .join("\n"),
        "exit" => return CommandOutcome::Exit,
        _ => return CommandOutcome::NotACommand,
    };

    CommandOutcome::Output(text)
}

/// Take back one ply, or a full turn when playing the computer.
fn undo_turn(game_state: &mut GameState) -> String {
    let plies = if game_state.against_ai { 2 } else { 1 };
    if game_state.history.len() < plies {
        return "Nothing to undo.".to_owned();
    }

    let taken_back: Vec<String> = (0..plies)
        .filter_map(|_| undo_move(game_state))
        .map(move_to_long_algebraic)
        .collect();
    format!("Took back {}.", taken_back.join(", "))
}

/// Moves of one piece as `generator` produces them.
fn list_piece_moves(
    game_state: &mut GameState,
    generator: &dyn MoveGenerator,
    square_text: &str,
) -> String {
    let square = match algebraic_to_square(square_text) {
        Ok(square) => square,
        Err(err) => return format!("Invalid input! {err}"),
    };
    if game_state.piece_at(square).is_empty() {
        return "ERROR: No piece at the location asked.".to_owned();
    }

    let moves = generator.generate_moves(game_state, MoveScope::Piece(square));
    if moves.is_empty() {
        return format!("No legal moves from {square_text}.");
    }
    moves
        .into_iter()
        .map(move_to_long_algebraic)
        .collect::<Vec<_>>()
        .join("\n")
}

fn castling_rights_report(rights: CastlingRights) -> String {
    let names = [
        (CASTLE_WHITE_RIGHT, "CAN_WHITE_CASTLE_RIGHT"),
        (CASTLE_WHITE_LEFT, "CAN_WHITE_CASTLE_LEFT"),
        (CASTLE_BLACK_RIGHT, "CAN_BLACK_CASTLE_RIGHT"),
        (CASTLE_BLACK_LEFT, "CAN_BLACK_CASTLE_LEFT"),
    ];
    let held: Vec<&str> = names
        .iter()
        .filter(|(flag, _)| rights & flag != 0)
        .map(|(_, name)| *name)
        .collect();
    if held.is_empty() {
        "No castling rights.".to_owned()
    } else {
        held.join("\n")
    }
}
