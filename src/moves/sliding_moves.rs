//! Ray geometry for rooks, bishops and queens.

use crate::game_state::chess_types::{offset_square, Square};

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(0, -1), (0, 1), (1, 0), (-1, 0)];
pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (1, 1), (1, -1), (-1, 1)];
pub const QUEEN_DIRECTIONS: [(i8, i8); 8] = [
    (-1, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, 0),
    (-1, 0),
];

/// Squares from `origin` (exclusive) to the board edge along one direction.
#[derive(Debug, Clone)]
pub struct Ray {
    current: Square,
    file_step: i8,
    rank_step: i8,
}

impl Ray {
    #[inline]
    pub fn new(origin: Square, (file_step, rank_step): (i8, i8)) -> Self {
        Self {
            current: origin,
            file_step,
            rank_step,
        }
    }
}

impl Iterator for Ray {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Square> {
        let next = offset_square(self.current, self.file_step, self.rank_step)?;
        self.current = next;
        Some(next)
    }
}
