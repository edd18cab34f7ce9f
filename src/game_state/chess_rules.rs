//! Canonical chess-rule constants.
//!
//! Starting layout, material weights and the thresholds the evaluator and
//! search share.

use crate::game_state::chess_types::PieceKind;

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Back-rank order from the a-file to the h-file.
pub const BACK_RANK_LAYOUT: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// More pieces than this on the board counts as the early game.
pub const EARLY_GAME_PIECE_THRESHOLD: usize = 24;

/// File and rank the king-placement term measures distance from.
pub const BOARD_CENTER: i32 = 3;
