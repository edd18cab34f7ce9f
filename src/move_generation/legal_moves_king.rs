use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::move_generation::legal_move_shared::{build_move, push_step_move};
use crate::move_generation::move_generator::CheckMode;
use crate::moves::king_moves::{
    king_targets, CASTLE_LEFT_KING_FILE, CASTLE_RIGHT_KING_FILE, KING_START_FILE,
};
use crate::moves::move_descriptions::{Move, FLAG_CASTLING};

pub fn generate_king_moves(
    game_state: &GameState,
    from: Square,
    mode: CheckMode,
    out: &mut Vec<Move>,
) {
    for to in king_targets(from) {
        push_step_move(game_state, from, to, out);
    }

    if mode == CheckMode::Full {
        generate_castling_moves(game_state, from, out);
    }
}

fn generate_castling_moves(game_state: &GameState, king_from: Square, out: &mut Vec<Move>) {
    let team = game_state.piece_at(king_from).team;
    let rank = team.back_rank();
    if king_from != square_at(KING_START_FILE, rank) {
        return;
    }

    let rights = game_state.castling_rights;
    let can_right = rights & castle_right_flag(team) != 0;
    let can_left = rights & castle_left_flag(team) != 0;
    if !can_right && !can_left {
        return;
    }

    let enemy = team.opposite();
    // Cannot castle out of check.
    if is_square_attacked(game_state, king_from, enemy) {
        return;
    }

    let rook_home = |file: u8| game_state.piece_at(square_at(file, rank)).is(team, PieceKind::Rook);

    if can_right
        && rook_home(7)
        && files_empty(game_state, rank, &[5, 6])
        && files_safe(game_state, rank, &[5, 6], enemy)
    {
        let to = square_at(CASTLE_RIGHT_KING_FILE, rank);
        out.push(build_move(game_state, king_from, to, FLAG_CASTLING));
    }

    if can_left
        && rook_home(0)
        && files_empty(game_state, rank, &[1, 2, 3])
        && files_safe(game_state, rank, &[3, 2], enemy)
    {
        let to = square_at(CASTLE_LEFT_KING_FILE, rank);
        out.push(build_move(game_state, king_from, to, FLAG_CASTLING));
    }
}

fn files_empty(game_state: &GameState, rank: u8, files: &[u8]) -> bool {
    files
        .iter()
        .all(|&file| game_state.piece_at(square_at(file, rank)).is_empty())
}

fn files_safe(game_state: &GameState, rank: u8, files: &[u8], enemy: Team) -> bool {
    files
        .iter()
        .all(|&file| !is_square_attacked(game_state, square_at(file, rank), enemy))
}

#[cfg(test)]
mod tests {
    use super::generate_king_moves;
    use crate::game_state::game_state::GameState;
    use crate::move_generation::move_generator::CheckMode;
    use crate::moves::move_descriptions::Move;

    fn king_moves(fen: &str, from: u8, mode: CheckMode) -> Vec<Move> {
        let game = GameState::from_fen(fen).expect("FEN should parse");
        let mut out = Vec::new();
        generate_king_moves(&game, from, mode, &mut out);
        out
    }

    #[test]
    fn castling_only_in_full_mode() {
        let fen = "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1";
        let fast = king_moves(fen, 4, CheckMode::Fast);
        let full = king_moves(fen, 4, CheckMode::Full);
        assert!(fast.iter().all(|mv| !mv.is_castling()));
        assert_eq!(full.iter().filter(|mv| mv.is_castling()).count(), 2);
    }

    #[test]
    fn attacked_transit_square_blocks_castling() {
        // Black rook on f8 covers f1.
        let fen = "4kr2/8/8/8/8/8/8/R3K2R w KQ - 0 1";
        let full = king_moves(fen, 4, CheckMode::Full);
        let castles: Vec<u8> = full
            .iter()
            .filter(|mv| mv.is_castling())
            .map(|mv| mv.to)
            .collect();
        assert_eq!(castles, vec![2]);
    }

    #[test]
    fn attacked_b_file_does_not_block_left_castling() {
        let fen = "1r2k3/8/8/8/8/8/8/R3K3 w Q - 0 1";
        let full = king_moves(fen, 4, CheckMode::Full);
        assert!(full.iter().any(|mv| mv.is_castling() && mv.to == 2));
    }

    #[test]
    fn king_moves_carry_first_move_flag_while_rights_remain() {
        let full = king_moves("4k3/8/8/8/8/8/8/4K2R w K - 0 1", 4, CheckMode::Fast);
        assert!(full
            .iter()
            .all(|mv| mv.has(crate::moves::move_descriptions::FLAG_FIRST_MOVE)));
    }
}
