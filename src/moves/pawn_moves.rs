//! Pawn geometry: ranks that matter and the diagonal capture squares.

use crate::game_state::chess_types::{offset_square, Square, Team};

/// Rank a pawn of `team` may double-advance from.
#[inline]
pub const fn pawn_start_rank(team: Team) -> u8 {
    match team {
        Team::White => 1,
        Team::Black => 6,
    }
}

/// Rank where a pawn of `team` promotes.
#[inline]
pub const fn promotion_rank(team: Team) -> u8 {
    match team {
        Team::White => 7,
        Team::Black => 0,
    }
}

/// Rank a pawn of `team` must stand on to capture en passant.
#[inline]
pub const fn en_passant_rank(team: Team) -> u8 {
    match team {
        Team::White => 4,
        Team::Black => 3,
    }
}

/// Diagonal squares a pawn of `team` on `square` attacks.
#[inline]
pub fn pawn_capture_targets(team: Team, square: Square) -> impl Iterator<Item = Square> {
    let forward = team.forward();
    [-1i8, 1i8]
        .into_iter()
        .filter_map(move |file_step| offset_square(square, file_step, forward))
}
