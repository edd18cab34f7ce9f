//! Move enumeration vocabulary shared by the legality filter and its callers.

use std::ops::ControlFlow;

use crate::game_state::chess_types::{Square, Team};
use crate::game_state::game_state::GameState;
use crate::moves::move_descriptions::Move;

/// Whether generated candidates are checked for king safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckMode {
    /// Simulate each candidate and drop those leaving the mover's king
    /// capturable. Castling is only generated in this mode.
    Full,
    /// Pseudo-legal candidates only.
    Fast,
}

/// Which pieces to enumerate moves for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveScope {
    Piece(Square),
    Team(Team),
}

/// Visitor outcome: `Break` stops the enumeration.
pub type VisitFlow = ControlFlow<()>;

pub trait MoveGenerator: Send + Sync {
    fn generate_moves(&self, game_state: &mut GameState, scope: MoveScope) -> Vec<Move>;

    /// Moves for the side to move.
    fn generate_legal_moves(&self, game_state: &mut GameState) -> Vec<Move> {
        let side = game_state.side_to_move;
        self.generate_moves(game_state, MoveScope::Team(side))
    }
}
