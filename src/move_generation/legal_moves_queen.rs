use crate::game_state::chess_types::Square;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_shared::push_ray_moves;
use crate::moves::move_descriptions::Move;
use crate::moves::sliding_moves::QUEEN_DIRECTIONS;

pub fn generate_queen_moves(game_state: &GameState, from: Square, out: &mut Vec<Move>) {
    push_ray_moves(game_state, from, &QUEEN_DIRECTIONS, out);
}
