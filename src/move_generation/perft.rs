//! Self-test tooling: perft node counts and the make/unmake round-trip check.
//!
//! Both walk the legal move tree in place with apply/undo, so they exercise
//! exactly the paths the search uses.

use std::fmt;
use std::ops::ControlFlow;

use crate::game_state::chess_types::{Board, CastlingRights};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::{apply_move, undo_move};
use crate::move_generation::legal_move_generator::{collect_legal_moves, for_each_legal_move};
use crate::move_generation::move_generator::{CheckMode, MoveScope};
use crate::moves::move_descriptions::Move;
use crate::utils::long_algebraic::move_to_long_algebraic;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
    }

    fn record_leaf(&mut self, mv: Move) {
        self.nodes += 1;
        if mv.is_capture() {
            self.captures += 1;
        }
        if mv.is_en_passant() {
            self.en_passant += 1;
        }
        if mv.is_castling() {
            self.castles += 1;
        }
        if mv.is_promotion() {
            self.promotions += 1;
        }
    }
}

/// Count legal move sequences of length `depth` from the current position.
pub fn perft(game_state: &mut GameState, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let side = game_state.side_to_move;
    let mut total = PerftCounts::default();
    for mv in collect_legal_moves(game_state, MoveScope::Team(side), CheckMode::Full) {
        if depth == 1 {
            total.record_leaf(mv);
            continue;
        }
        apply_move(game_state, mv);
        total.merge(perft(game_state, depth - 1));
        undo_move(game_state);
    }
    total
}

/// Which part of the position an undo failed to restore.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundTripMismatch {
    Board,
    CastlingRights {
        expected: CastlingRights,
        actual: CastlingRights,
    },
}

/// First move found whose undo did not restore the position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundTripFailure {
    pub mv: Move,
    /// Remaining depth below the failing move.
    pub depth: u8,
    pub mismatch: RoundTripMismatch,
    /// Board as it was before the move.
    pub expected_board: Board,
    /// Board as undo left it.
    pub actual_board: Board,
}

impl fmt::Display for RoundTripFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let notation = move_to_long_algebraic(self.mv);
        match self.mismatch {
            RoundTripMismatch::Board => {
                write!(f, "undo of {notation} at depth {} left a different board", self.depth)
            }
            RoundTripMismatch::CastlingRights { expected, actual } => write!(
                f,
                "undo of {notation} at depth {} left castling rights {actual:#06b}, expected {expected:#06b}",
                self.depth
            ),
        }
    }
}

impl std::error::Error for RoundTripFailure {}

/// Play every legal move down to `depth` further plies and check that each
/// undo restores the board and castling rights exactly.
///
/// Returns the number of moves verified. The position is restored even when a
/// failure is reported.
pub fn verify_round_trip(game_state: &mut GameState, depth: u8) -> Result<u64, RoundTripFailure> {
    let side = game_state.side_to_move;
    let mut verified = 0u64;
    let mut failure = None;

    let _ = for_each_legal_move(
        game_state,
        MoveScope::Team(side),
        CheckMode::Full,
        |game, mv| match verify_move(game, mv, depth) {
            Ok(count) => {
                verified += count;
                ControlFlow::Continue(())
            }
            Err(err) => {
                failure = Some(err);
                ControlFlow::Break(())
            }
        },
    );

    match failure {
        Some(err) => Err(err),
        None => Ok(verified),
    }
}

fn verify_move(game_state: &mut GameState, mv: Move, depth: u8) -> Result<u64, RoundTripFailure> {
    let (board_before, rights_before) = game_state.position_snapshot();

    apply_move(game_state, mv);
    let below = if depth > 0 {
        verify_round_trip(game_state, depth - 1)
    } else {
        Ok(0)
    };
    undo_move(game_state);
    let below = below?;

    let mismatch = if game_state.board != board_before {
        Some(RoundTripMismatch::Board)
    } else if game_state.castling_rights != rights_before {
        Some(RoundTripMismatch::CastlingRights {
            expected: rights_before,
            actual: game_state.castling_rights,
        })
    } else {
        None
    };

    match mismatch {
        None => Ok(below + 1),
        Some(mismatch) => {
            let actual_board = game_state.board;
            game_state.board = board_before;
            game_state.castling_rights = rights_before;
            Err(RoundTripFailure {
                mv,
                depth,
                mismatch,
                expected_board: board_before,
                actual_board,
            })
        }
    }
}
