//! In-place move executor.
//!
//! `apply_move` and `undo_move` are exact inverses: every special effect of a
//! move is reversed from the metadata the move itself carries.

use tracing::debug;

use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::moves::king_moves::castling_rook_squares;
use crate::moves::move_descriptions::Move;

/// Apply a legal move produced by the generator for the side to move.
pub fn apply_move(game_state: &mut GameState, mv: Move) {
    game_state.side_to_move = game_state.side_to_move.opposite();
    game_state.history.push(mv);

    let piece = game_state.piece_at(mv.from);
    game_state.board[mv.to as usize] = piece;
    game_state.board[mv.from as usize] = Piece::EMPTY;

    if mv.is_en_passant() {
        game_state.board[en_passant_victim_square(mv) as usize] = Piece::EMPTY;
    } else if mv.is_promotion() {
        game_state.board[mv.to as usize] = Piece::new(piece.team, PieceKind::Queen);
    }

    if mv.is_castling() {
        let (rook_from, rook_to) = castling_rook_squares(mv.to);
        game_state.board[rook_to as usize] = game_state.piece_at(rook_from);
        game_state.board[rook_from as usize] = Piece::EMPTY;
    }

    game_state.castling_rights &=
        !(castling_rights_touched_by(mv.from) | castling_rights_touched_by(mv.to));
}

/// Take back the most recent move. Returns `None` with nothing to undo.
pub fn undo_move(game_state: &mut GameState) -> Option<Move> {
    let Some(mv) = game_state.history.pop() else {
        debug!("undo requested on empty history");
        return None;
    };
    game_state.side_to_move = game_state.side_to_move.opposite();

    let piece = game_state.piece_at(mv.to);
    game_state.board[mv.from as usize] = if mv.is_promotion() {
        Piece::new(piece.team, PieceKind::Pawn)
    } else {
        piece
    };
    game_state.board[mv.to as usize] = Piece::EMPTY;

    if let Some(captured) = mv.captured_piece() {
        let square = if mv.is_en_passant() {
            en_passant_victim_square(mv)
        } else {
            mv.to
        };
        game_state.board[square as usize] = Piece::new(piece.team.opposite(), captured);
    }

    if mv.is_castling() {
        let (rook_from, rook_to) = castling_rook_squares(mv.to);
        game_state.board[rook_from as usize] = game_state.piece_at(rook_to);
        game_state.board[rook_to as usize] = Piece::EMPTY;
    }

    game_state.castling_rights = mv.prior_castling_rights();
    Some(mv)
}

/// The passed pawn sits beside the capturing pawn's source, on the
/// destination file.
#[inline]
fn en_passant_victim_square(mv: Move) -> Square {
    square_at(file_of(mv.to), rank_of(mv.from))
}

#[cfg(test)]
mod tests {
    use super::{apply_move, undo_move};
    use crate::game_state::chess_types::*;
    use crate::game_state::game_state::GameState;
    use crate::move_generation::legal_move_generator::check_legality_and_fill_flags;
    use crate::moves::move_descriptions::Move;
    use crate::utils::long_algebraic::parse_candidate_move;

    fn play(game: &mut GameState, text: &str) -> Move {
        let mut mv = parse_candidate_move(text).expect("move text should parse");
        assert!(
            check_legality_and_fill_flags(game, &mut mv),
            "{text} should be legal"
        );
        apply_move(game, mv);
        mv
    }

    #[test]
    fn undo_on_empty_history_is_noop() {
        let mut game = GameState::new_game();
        assert_eq!(undo_move(&mut game), None);
        assert_eq!(game, GameState::new_game());
    }

    #[test]
    fn castling_moves_rook_and_clears_rights() {
        let mut game =
            GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").expect("FEN should parse");
        let before = game.clone();

        play(&mut game, "e1g1");
        assert_eq!(game.piece_at(6), Piece::new(Team::White, PieceKind::King));
        assert_eq!(game.piece_at(5), Piece::new(Team::White, PieceKind::Rook));
        assert!(game.piece_at(7).is_empty());
        assert_eq!(game.castling_rights, CASTLE_BLACK_RIGHT | CASTLE_BLACK_LEFT);

        play(&mut game, "e8c8");
        assert_eq!(game.piece_at(58), Piece::new(Team::Black, PieceKind::King));
        assert_eq!(game.piece_at(59), Piece::new(Team::Black, PieceKind::Rook));
        assert_eq!(game.castling_rights, 0);

        undo_move(&mut game);
        undo_move(&mut game);
        assert_eq!(game, before);
    }

    #[test]
    fn promotion_makes_queen_and_undo_restores_pawn() {
        let mut game =
            GameState::from_fen("1r2k3/P7/8/8/8/8/8/4K3 w - - 0 1").expect("FEN should parse");
        let before = game.clone();

        let mv = play(&mut game, "a7b8");
        assert!(mv.is_promotion());
        assert_eq!(mv.captured_piece(), Some(PieceKind::Rook));
        assert_eq!(game.piece_at(57), Piece::new(Team::White, PieceKind::Queen));

        undo_move(&mut game);
        assert_eq!(game.piece_at(48), Piece::new(Team::White, PieceKind::Pawn));
        assert_eq!(game.piece_at(57), Piece::new(Team::Black, PieceKind::Rook));
        assert_eq!(game, before);
    }

    #[test]
    fn en_passant_removes_and_restores_passed_pawn() {
        let mut game =
            GameState::from_fen("4k3/3p4/8/4P3/8/8/8/4K3 b - - 0 1").expect("FEN should parse");
        play(&mut game, "d7d5");
        let before = game.clone();

        let mv = play(&mut game, "e5d6");
        assert!(mv.is_en_passant());
        assert!(game.piece_at(35).is_empty());
        assert_eq!(game.piece_at(43), Piece::new(Team::White, PieceKind::Pawn));

        undo_move(&mut game);
        assert_eq!(game, before);
        assert_eq!(game.piece_at(35), Piece::new(Team::Black, PieceKind::Pawn));
    }

    #[test]
    fn capturing_home_rook_clears_opponent_right() {
        let mut game =
            GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").expect("FEN should parse");
        play(&mut game, "a1a8");
        assert_eq!(game.castling_rights, CASTLE_WHITE_RIGHT | CASTLE_BLACK_RIGHT);
        undo_move(&mut game);
        assert_eq!(game.castling_rights, CASTLE_ALL);
    }
}
