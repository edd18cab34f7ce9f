//! Pluggable board evaluation.
//!
//! Search delegates static scoring to `BoardScorer` so alternate heuristics
//! can be swapped in without touching the search code.

use crate::game_state::chess_rules::{BOARD_CENTER, EARLY_GAME_PIECE_THRESHOLD};
use crate::game_state::{chess_types::*, game_state::GameState};

pub trait BoardScorer: Send + Sync {
    /// Signed score; positive favours White regardless of the side to move.
    fn score(&self, game_state: &GameState) -> i32;
}

/// Material count plus a small king placement term.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialScorer;

impl MaterialScorer {
    #[inline]
    pub const fn piece_value(piece: PieceKind) -> i32 {
        match piece {
            PieceKind::Pawn => 1,
            PieceKind::Knight => 3,
            PieceKind::Bishop => 3,
            PieceKind::Rook => 5,
            PieceKind::Queen => 9,
            PieceKind::King => 100,
            PieceKind::Empty => 0,
        }
    }

    /// Half the Manhattan distance from the centre. Early on the king is
    /// rewarded for staying away from it, later for walking towards it.
    #[inline]
    fn king_placement(square: Square, early_game: bool) -> i32 {
        let file = i32::from(file_of(square));
        let rank = i32::from(rank_of(square));
        let distance = ((file - BOARD_CENTER).abs() + (rank - BOARD_CENTER).abs()) / 2;
        if early_game {
            distance
        } else {
            -distance
        }
    }
}

impl BoardScorer for MaterialScorer {
    fn score(&self, game_state: &GameState) -> i32 {
        let early_game = game_state.piece_count() > EARLY_GAME_PIECE_THRESHOLD;

        let mut white_minus_black = 0i32;
        for (square, piece) in game_state.board.iter().enumerate() {
            if piece.is_empty() {
                continue;
            }

            let mut value = Self::piece_value(piece.kind);
            if piece.kind == PieceKind::King {
                value += Self::king_placement(square as Square, early_game);
            }

            match piece.team {
                Team::White => white_minus_black += value,
                Team::Black => white_minus_black -= value,
            }
        }

        white_minus_black
    }
}
