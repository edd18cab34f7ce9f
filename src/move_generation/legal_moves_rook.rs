use crate::game_state::chess_types::Square;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_shared::push_ray_moves;
use crate::moves::move_descriptions::Move;
use crate::moves::sliding_moves::ROOK_DIRECTIONS;

/// Rook moves; leaving a home corner is tagged as a first move by `build_move`.
pub fn generate_rook_moves(game_state: &GameState, from: Square, out: &mut Vec<Move>) {
    push_ray_moves(game_state, from, &ROOK_DIRECTIONS, out);
}
