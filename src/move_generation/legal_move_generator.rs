//! Legality filter over the per-piece pseudo-legal generators.
//!
//! In `CheckMode::Full` every candidate is played on the board, the opponent's
//! pseudo-legal replies are scanned for a king capture, and the move is taken
//! back before the candidate is either dropped or handed to the visitor.

use std::ops::ControlFlow;

use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::{apply_move, undo_move};
use crate::move_generation::legal_move_checks::king_capturable;
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::move_generation::move_generator::{CheckMode, MoveGenerator, MoveScope, VisitFlow};
use crate::moves::move_descriptions::Move;

pub struct LegalMoveGenerator;
pub struct FastMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn generate_moves(&self, game_state: &mut GameState, scope: MoveScope) -> Vec<Move> {
        collect_legal_moves(game_state, scope, CheckMode::Full)
    }
}

impl MoveGenerator for FastMoveGenerator {
    fn generate_moves(&self, game_state: &mut GameState, scope: MoveScope) -> Vec<Move> {
        collect_legal_moves(game_state, scope, CheckMode::Fast)
    }
}

/// Pseudo-legal candidates for the piece on `from`; nothing for an empty square.
pub fn generate_pseudo_legal_moves(
    game_state: &GameState,
    from: Square,
    mode: CheckMode,
    out: &mut Vec<Move>,
) {
    match game_state.piece_at(from).kind {
        PieceKind::Pawn => generate_pawn_moves(game_state, from, out),
        PieceKind::Knight => generate_knight_moves(game_state, from, out),
        PieceKind::Bishop => generate_bishop_moves(game_state, from, out),
        PieceKind::Rook => generate_rook_moves(game_state, from, out),
        PieceKind::Queen => generate_queen_moves(game_state, from, out),
        PieceKind::King => generate_king_moves(game_state, from, mode, out),
        PieceKind::Empty => {}
    }
}

/// Feed every move in `scope` to `visitor` until it breaks.
///
/// The visitor receives the game back so it can play and take back the move
/// itself; it must leave the position as it found it. Returns `Break` when
/// the visitor stopped the enumeration early. An off-board square in a
/// piece scope yields nothing.
pub fn for_each_legal_move<F>(
    game_state: &mut GameState,
    scope: MoveScope,
    mode: CheckMode,
    mut visitor: F,
) -> VisitFlow
where
    F: FnMut(&mut GameState, Move) -> VisitFlow,
{
    match scope {
        MoveScope::Piece(square) if square > 63 => ControlFlow::Continue(()),
        MoveScope::Piece(square) => visit_piece_moves(game_state, square, mode, &mut visitor),
        MoveScope::Team(team) => {
            for square in 0..64u8 {
                if game_state.piece_at(square).is_of(team) {
                    visit_piece_moves(game_state, square, mode, &mut visitor)?;
                }
            }
            ControlFlow::Continue(())
        }
    }
}

fn visit_piece_moves<F>(
    game_state: &mut GameState,
    from: Square,
    mode: CheckMode,
    visitor: &mut F,
) -> VisitFlow
where
    F: FnMut(&mut GameState, Move) -> VisitFlow,
{
    let mut candidates = Vec::with_capacity(28);
    generate_pseudo_legal_moves(game_state, from, mode, &mut candidates);

    for mv in candidates {
        if mode == CheckMode::Full && !keeps_king_safe(game_state, mv) {
            continue;
        }
        visitor(game_state, mv)?;
    }

    ControlFlow::Continue(())
}

/// Play `mv`, look for a king capture among the replies, take it back.
pub fn keeps_king_safe(game_state: &mut GameState, mv: Move) -> bool {
    let mover = game_state.piece_at(mv.from).team;
    apply_move(game_state, mv);
    let exposed = king_capturable(game_state, mover.opposite());
    undo_move(game_state);
    !exposed
}

pub fn collect_legal_moves(game_state: &mut GameState, scope: MoveScope, mode: CheckMode) -> Vec<Move> {
    let mut moves = Vec::new();
    let _ = for_each_legal_move(game_state, scope, mode, |_, mv| {
        moves.push(mv);
        ControlFlow::Continue(())
    });
    moves
}

/// Validate a from/to stub for the side to move and, when legal, copy the
/// flags of the matching generated move into it.
pub fn check_legality_and_fill_flags(game_state: &mut GameState, stub: &mut Move) -> bool {
    if stub.from > 63 || stub.to > 63 {
        return false;
    }
    let side = game_state.side_to_move;
    if !game_state.piece_at(stub.from).is_of(side) {
        return false;
    }

    let target = *stub;
    let mut found = None;
    let flow = for_each_legal_move(
        game_state,
        MoveScope::Piece(target.from),
        CheckMode::Full,
        |_, mv| {
            if mv.same_squares(&target) {
                found = Some(mv);
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        },
    );

    match (flow, found) {
        (ControlFlow::Break(()), Some(mv)) => {
            *stub = mv;
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::move_generation::legal_move_checks::is_in_check;

    fn full(game: &mut GameState) -> Vec<Move> {
        let side = game.side_to_move;
        collect_legal_moves(game, MoveScope::Team(side), CheckMode::Full)
    }

    /// Independent filter: a fast candidate is legal when, after playing it,
    /// no fast reply takes the king.
    fn brute_force(game: &mut GameState) -> Vec<Move> {
        let side = game.side_to_move;
        let mut pseudo = collect_legal_moves(game, MoveScope::Team(side), CheckMode::Fast);
        // Castling never appears in fast mode; take it from the full list.
        pseudo.extend(full(game).into_iter().filter(|mv| mv.is_castling()));
        pseudo
            .into_iter()
            .filter(|&mv| {
                apply_move(game, mv);
                let king = game.king_square(side);
                let replies =
                    collect_legal_moves(game, MoveScope::Team(side.opposite()), CheckMode::Fast);
                undo_move(game);
                !replies.iter().any(|reply| Some(reply.to) == king && reply.is_capture())
            })
            .collect()
    }

    fn sorted(mut moves: Vec<Move>) -> Vec<Move> {
        moves.sort_by_key(|mv| (mv.from, mv.to));
        moves
    }

    #[test]
    fn starting_position_has_twenty_moves() {
        let mut game = GameState::new_game();
        assert_eq!(full(&mut game).len(), 20);
        assert_eq!(LegalMoveGenerator.generate_legal_moves(&mut game).len(), 20);
        assert_eq!(FastMoveGenerator.generate_legal_moves(&mut game).len(), 20);
    }

    #[test]
    fn no_full_move_leaves_king_capturable() {
        for fen in [
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
            "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
            "4k3/8/8/8/1b6/8/3P4/4K3 w - - 0 1",
        ] {
            let mut game = GameState::from_fen(fen).expect("FEN should parse");
            let side = game.side_to_move;
            for mv in full(&mut game) {
                apply_move(&mut game, mv);
                assert!(
                    !king_capturable(&mut game, side.opposite()),
                    "{mv:?} exposes the king in {fen}"
                );
                undo_move(&mut game);
            }
        }
    }

    #[test]
    fn full_check_matches_brute_force_filter() {
        for fen in [
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R b KQkq - 0 1",
            "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
            "4k3/8/8/8/1b6/8/3P4/4K3 w - - 0 1",
            "rnbqkbnr/ppp1pppp/8/3p4/4P3/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 2",
        ] {
            let mut game = GameState::from_fen(fen).expect("FEN should parse");
            let expected = sorted(brute_force(&mut game));
            let actual = sorted(full(&mut game));
            assert_eq!(actual, expected, "mismatch in {fen}");
        }
    }

    #[test]
    fn pinned_pawn_cannot_move() {
        let mut game =
            GameState::from_fen("4k3/8/8/8/1b6/8/3P4/4K3 w - - 0 1").expect("FEN should parse");
        let d2 = 11u8;
        assert!(collect_legal_moves(&mut game, MoveScope::Piece(d2), CheckMode::Full).is_empty());
        assert_eq!(
            collect_legal_moves(&mut game, MoveScope::Piece(d2), CheckMode::Fast).len(),
            2
        );
    }

    #[test]
    fn check_must_be_answered() {
        let mut game =
            GameState::from_fen("4k3/8/8/8/8/8/3q4/R3K3 w Q - 0 1").expect("FEN should parse");
        assert!(is_in_check(&mut game));
        let moves = full(&mut game);
        // Only the king may take the queen or step to f1; castling out of check is illegal.
        let mut targets: Vec<u8> = moves.iter().map(|mv| mv.to).collect();
        targets.sort_unstable();
        assert_eq!(targets, vec![5, 11]);
    }

    #[test]
    fn early_break_stops_enumeration() {
        let mut game = GameState::new_game();
        let mut seen = 0;
        let flow = for_each_legal_move(&mut game, MoveScope::Team(Team::White), CheckMode::Full, |_, _| {
            seen += 1;
            if seen == 3 {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        });
        assert!(flow.is_break());
        assert_eq!(seen, 3);
        assert_eq!(game, GameState::new_game());
    }

    #[test]
    fn stub_gets_flags_of_matching_move() {
        let mut game = GameState::new_game();
        let mut stub = Move::stub(12, 28);
        assert!(check_legality_and_fill_flags(&mut game, &mut stub));
        assert!(stub.is_double_pawn_push());

        let mut wrong_side = Move::stub(52, 36);
        assert!(!check_legality_and_fill_flags(&mut game, &mut wrong_side));
        assert_eq!(wrong_side.flags, 0);

        let mut illegal = Move::stub(12, 36);
        assert!(!check_legality_and_fill_flags(&mut game, &mut illegal));
        assert_eq!(game, GameState::new_game());
    }

    #[test]
    fn castling_never_offered_after_rook_returns_home() {
        let mut game =
            GameState::from_fen("4k3/8/8/8/8/8/8/4K2R w K - 0 1").expect("FEN should parse");
        for text in [(7u8, 15u8), (60, 59), (15, 7), (59, 60)] {
            let mut mv = Move::stub(text.0, text.1);
            assert!(check_legality_and_fill_flags(&mut game, &mut mv));
            apply_move(&mut game, mv);
        }
        assert_eq!(game.piece_at(7), Piece::new(Team::White, PieceKind::Rook));
        assert_eq!(game.castling_rights, 0);
        assert!(full(&mut game).iter().all(|mv| !mv.is_castling()));
    }

    #[test]
    fn castling_never_offered_after_king_returns_home() {
        let mut game =
            GameState::from_fen("4k3/8/8/8/8/8/8/R3K2R w KQ - 0 1").expect("FEN should parse");
        assert_eq!(full(&mut game).iter().filter(|mv| mv.is_castling()).count(), 2);

        for (from, to) in [(4u8, 12u8), (60, 59), (12, 4), (59, 60)] {
            let mut mv = Move::stub(from, to);
            assert!(check_legality_and_fill_flags(&mut game, &mut mv));
            apply_move(&mut game, mv);
        }
        assert_eq!(game.piece_at(4), Piece::new(Team::White, PieceKind::King));
        assert_eq!(game.castling_rights, 0);
        assert!(full(&mut game).iter().all(|mv| !mv.is_castling()));
    }

    #[test]
    fn off_board_piece_scope_yields_nothing() {
        let mut game = GameState::new_game();
        let flow = for_each_legal_move(&mut game, MoveScope::Piece(64), CheckMode::Full, |_, _| {
            ControlFlow::Break(())
        });
        assert!(flow.is_continue());
        assert!(collect_legal_moves(&mut game, MoveScope::Piece(200), CheckMode::Fast).is_empty());
        assert_eq!(game, GameState::new_game());
    }

    #[test]
    fn en_passant_window_closes_after_one_turn() {
        let mut game =
            GameState::from_fen("4k3/3p4/8/4P3/8/8/8/4K3 b - - 0 1").expect("FEN should parse");
        let e5 = 36u8;

        for (from, to) in [(51u8, 35u8)] {
            let mut mv = Move::stub(from, to);
            assert!(check_legality_and_fill_flags(&mut game, &mut mv));
            apply_move(&mut game, mv);
        }
        let now = collect_legal_moves(&mut game, MoveScope::Piece(e5), CheckMode::Full);
        assert!(now.iter().any(|mv| mv.is_en_passant() && mv.to == 43));

        // White declines; after a black reply the capture is gone.
        for (from, to) in [(4u8, 3u8), (60, 61)] {
            let mut mv = Move::stub(from, to);
            assert!(check_legality_and_fill_flags(&mut game, &mut mv));
            apply_move(&mut game, mv);
        }
        let later = collect_legal_moves(&mut game, MoveScope::Piece(e5), CheckMode::Full);
        assert!(later.iter().all(|mv| !mv.is_en_passant()));
    }

    #[test]
    fn en_passant_needs_adjacent_file() {
        let mut game =
            GameState::from_fen("4k3/2p5/8/4P3/8/8/8/4K3 b - - 0 1").expect("FEN should parse");
        let mut mv = Move::stub(50, 34);
        assert!(check_legality_and_fill_flags(&mut game, &mut mv));
        apply_move(&mut game, mv);
        let moves = collect_legal_moves(&mut game, MoveScope::Piece(36), CheckMode::Full);
        assert!(moves.iter().all(|mv| !mv.is_en_passant()));
    }
}
