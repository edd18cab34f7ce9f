//! Game-over detection for the side to move.

use std::ops::ControlFlow;

use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_checks::king_capturable;
use crate::move_generation::legal_move_generator::for_each_legal_move;
use crate::move_generation::move_generator::{CheckMode, MoveScope};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// The side to move has at least one legal move.
    Continue,
    /// Checkmate: the side to move lost, the other side wins.
    Win,
    /// Stalemate.
    Draw,
}

pub fn game_status(game_state: &mut GameState) -> GameStatus {
    let side = game_state.side_to_move;
    let has_moves = for_each_legal_move(
        game_state,
        MoveScope::Team(side),
        CheckMode::Full,
        |_, _| ControlFlow::Break(()),
    )
    .is_break();

    if has_moves {
        GameStatus::Continue
    } else if king_capturable(game_state, side.opposite()) {
        GameStatus::Win
    } else {
        GameStatus::Draw
    }
}
