//! King-safety queries.
//!
//! `king_capturable` is the legality oracle: it asks whether any pseudo-legal
//! reply of `attacker` would take the opposing king. `is_square_attacked` is a
//! direct mailbox scan used where no piece stands to be captured, such as the
//! empty squares a castling king crosses.

use std::ops::ControlFlow;

use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::for_each_legal_move;
use crate::move_generation::move_generator::{CheckMode, MoveScope};
use crate::moves::king_moves::king_targets;
use crate::moves::knight_moves::knight_targets;
use crate::moves::pawn_moves::pawn_capture_targets;
use crate::moves::sliding_moves::{Ray, BISHOP_DIRECTIONS, ROOK_DIRECTIONS};

/// True when some pseudo-legal move of `attacker` captures the other team's king.
pub fn king_capturable(game_state: &mut GameState, attacker: Team) -> bool {
    for_each_legal_move(
        game_state,
        MoveScope::Team(attacker),
        CheckMode::Fast,
        |_, reply| {
            if reply.captured_piece() == Some(PieceKind::King) {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        },
    )
    .is_break()
}

/// True when the side to move's king could be taken right now.
#[inline]
pub fn is_in_check(game_state: &mut GameState) -> bool {
    let attacker = game_state.side_to_move.opposite();
    king_capturable(game_state, attacker)
}

pub fn is_square_attacked(game_state: &GameState, square: Square, attacker: Team) -> bool {
    // A pawn of `attacker` hits `square` from the squares a defending pawn
    // standing on `square` would capture toward.
    if pawn_capture_targets(attacker.opposite(), square)
        .any(|from| game_state.piece_at(from).is(attacker, PieceKind::Pawn))
    {
        return true;
    }

    if knight_targets(square).any(|from| game_state.piece_at(from).is(attacker, PieceKind::Knight)) {
        return true;
    }

    if king_targets(square).any(|from| game_state.piece_at(from).is(attacker, PieceKind::King)) {
        return true;
    }

    slider_hits(game_state, square, attacker, &ROOK_DIRECTIONS, PieceKind::Rook)
        || slider_hits(game_state, square, attacker, &BISHOP_DIRECTIONS, PieceKind::Bishop)
}

fn slider_hits(
    game_state: &GameState,
    square: Square,
    attacker: Team,
    directions: &[(i8, i8)],
    kind: PieceKind,
) -> bool {
    directions.iter().any(|&direction| {
        Ray::new(square, direction)
            .map(|from| game_state.piece_at(from))
            .find(|piece| !piece.is_empty())
            .is_some_and(|piece| {
                piece.team == attacker && (piece.kind == kind || piece.kind == PieceKind::Queen)
            })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rook_attack_is_blocked_by_interposed_piece() {
        let game = GameState::from_fen("4k3/8/8/8/r3N2K/8/8/8 w - - 0 1").expect("FEN should parse");
        let e4 = 28u8;
        let g4 = 30u8;
        assert!(is_square_attacked(&game, e4, Team::Black));
        assert!(!is_square_attacked(&game, g4, Team::Black));
    }

    #[test]
    fn pawn_attacks_diagonally_forward_only() {
        let game = GameState::from_fen("4k3/8/8/3p4/8/8/8/4K3 w - - 0 1").expect("FEN should parse");
        let d5 = 35u8;
        assert!(is_square_attacked(&game, d5 - 9, Team::Black));
        assert!(is_square_attacked(&game, d5 - 7, Team::Black));
        assert!(!is_square_attacked(&game, d5 - 8, Team::Black));
        assert!(!is_square_attacked(&game, d5 + 7, Team::Black));
    }

    #[test]
    fn king_capturable_matches_attack_scan_on_king_square() {
        let mut game =
            GameState::from_fen("4k3/8/8/8/8/3n4/8/4K3 w - - 0 1").expect("FEN should parse");
        assert!(king_capturable(&mut game, Team::Black));
        assert!(is_in_check(&mut game));
        assert!(is_square_attacked(&game, 4, Team::Black));
        assert!(!king_capturable(&mut game, Team::White));
    }
}
