//! Helpers shared by the per-piece generators.

use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::moves::move_descriptions::{Move, FLAG_EN_PASSANT, FLAG_FIRST_MOVE};
use crate::moves::sliding_moves::Ray;

/// Build a candidate from `from` to `to`, filling in the capture, first-move
/// and prior-castling-rights metadata from the current position.
#[inline]
pub fn build_move(game_state: &GameState, from: Square, to: Square, flags: u32) -> Move {
    let mover = game_state.piece_at(from);
    let target = game_state.piece_at(to);

    let captured = if !target.is_empty() {
        Some(target.kind)
    } else if flags & FLAG_EN_PASSANT != 0 {
        Some(PieceKind::Pawn)
    } else {
        None
    };

    let mut flags = flags;
    if matches!(mover.kind, PieceKind::King | PieceKind::Rook) {
        let own_rights = castle_right_flag(mover.team) | castle_left_flag(mover.team);
        if castling_rights_touched_by(from) & own_rights & game_state.castling_rights != 0 {
            flags |= FLAG_FIRST_MOVE;
        }
    }

    Move::new(from, to, captured, game_state.castling_rights, flags)
}

/// Push quiet moves along each direction until blocked, plus the capture of
/// the first enemy piece met.
pub fn push_ray_moves(
    game_state: &GameState,
    from: Square,
    directions: &[(i8, i8)],
    out: &mut Vec<Move>,
) {
    let team = game_state.piece_at(from).team;

    for &direction in directions {
        for to in Ray::new(from, direction) {
            let target = game_state.piece_at(to);
            if target.is_empty() {
                out.push(build_move(game_state, from, to, 0));
                continue;
            }
            if target.team != team {
                out.push(build_move(game_state, from, to, 0));
            }
            break;
        }
    }
}

/// Push a single step onto `to` when it is empty or holds an enemy piece.
#[inline]
pub fn push_step_move(game_state: &GameState, from: Square, to: Square, out: &mut Vec<Move>) {
    let team = game_state.piece_at(from).team;
    let target = game_state.piece_at(to);
    if target.is_empty() || target.team != team {
        out.push(build_move(game_state, from, to, 0));
    }
}
