use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_shared::build_move;
use crate::moves::move_descriptions::{
    Move, FLAG_DOUBLE_PAWN_PUSH, FLAG_EN_PASSANT, FLAG_PROMOTION,
};
use crate::moves::pawn_moves::{
    en_passant_rank, pawn_capture_targets, pawn_start_rank, promotion_rank,
};

pub fn generate_pawn_moves(game_state: &GameState, from: Square, out: &mut Vec<Move>) {
    let team = game_state.piece_at(from).team;
    let enemy = team.opposite();
    let forward = team.forward();

    let promotion_flag = |to: Square| {
        if rank_of(to) == promotion_rank(team) {
            FLAG_PROMOTION
        } else {
            0
        }
    };

    if let Some(one_step) = offset_square(from, 0, forward) {
        if game_state.piece_at(one_step).is_empty() {
            out.push(build_move(game_state, from, one_step, promotion_flag(one_step)));

            if rank_of(from) == pawn_start_rank(team) {
                if let Some(two_step) = offset_square(from, 0, 2 * forward) {
                    if game_state.piece_at(two_step).is_empty() {
                        out.push(build_move(game_state, from, two_step, FLAG_DOUBLE_PAWN_PUSH));
                    }
                }
            }
        }
    }

    for to in pawn_capture_targets(team, from) {
        if game_state.piece_at(to).is_of(enemy) {
            out.push(build_move(game_state, from, to, promotion_flag(to)));
        }
    }

    if let Some(to) = en_passant_target(game_state, from, team) {
        out.push(build_move(game_state, from, to, FLAG_EN_PASSANT));
    }
}

/// Landing square of an en-passant capture by the pawn on `from`, available
/// only right after an enemy double advance that ended beside it.
fn en_passant_target(game_state: &GameState, from: Square, team: Team) -> Option<Square> {
    let last = game_state.last_move()?;
    if !last.is_double_pawn_push() || rank_of(from) != en_passant_rank(team) {
        return None;
    }
    if rank_of(last.to) != rank_of(from) || file_of(last.to).abs_diff(file_of(from)) != 1 {
        return None;
    }
    if !game_state
        .piece_at(last.to)
        .is(team.opposite(), PieceKind::Pawn)
    {
        return None;
    }
    offset_square(last.to, 0, team.forward())
}

#[cfg(test)]
mod tests {
    use super::generate_pawn_moves;
    use crate::game_state::game_state::GameState;
    use crate::moves::move_descriptions::Move;

    fn pawn_moves(fen: &str, from: u8) -> Vec<Move> {
        let game = GameState::from_fen(fen).expect("FEN should parse");
        let mut out = Vec::new();
        generate_pawn_moves(&game, from, &mut out);
        out
    }

    #[test]
    fn start_rank_pawn_has_single_and_double_advance() {
        let moves = pawn_moves("4k3/8/8/8/8/8/4P3/4K3 w - - 0 1", 12);
        assert_eq!(moves.len(), 2);
        assert!(moves.iter().any(|mv| mv.to == 28 && mv.is_double_pawn_push()));
    }

    #[test]
    fn blocked_pawn_cannot_jump() {
        let moves = pawn_moves("4k3/8/8/8/8/4n3/4P3/4K3 w - - 0 1", 12);
        assert!(moves.is_empty());
    }

    #[test]
    fn pawn_captures_only_enemy_diagonals() {
        let moves = pawn_moves("4k3/8/8/8/8/3p1N2/4P3/4K3 w - - 0 1", 12);
        let mut targets: Vec<u8> = moves.iter().map(|mv| mv.to).collect();
        targets.sort_unstable();
        assert_eq!(targets, vec![19, 20, 28]);
        assert!(moves.iter().any(|mv| mv.to == 19 && mv.is_capture()));
    }

    #[test]
    fn promotion_flag_on_far_rank() {
        let moves = pawn_moves("1r2k3/P7/8/8/8/8/8/4K3 w - - 0 1", 48);
        assert_eq!(moves.len(), 2);
        assert!(moves.iter().all(|mv| mv.is_promotion()));
    }
}
