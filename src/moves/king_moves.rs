//! King step geometry and castling squares.

use crate::game_state::chess_types::{file_of, offset_square, rank_of, square_at, Square};

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

pub const KING_START_FILE: u8 = 4;
pub const CASTLE_RIGHT_KING_FILE: u8 = 6;
pub const CASTLE_LEFT_KING_FILE: u8 = 2;

#[inline]
pub fn king_targets(square: Square) -> impl Iterator<Item = Square> {
    KING_OFFSETS
        .into_iter()
        .filter_map(move |(file_step, rank_step)| offset_square(square, file_step, rank_step))
}

/// Rook source and destination for a castling king landing on `king_to`.
#[inline]
pub const fn castling_rook_squares(king_to: Square) -> (Square, Square) {
    let rank = rank_of(king_to);
    if file_of(king_to) == CASTLE_RIGHT_KING_FILE {
        (square_at(7, rank), square_at(5, rank))
    } else {
        (square_at(0, rank), square_at(3, rank))
    }
}
