//! Terminal-oriented Unicode board renderer.

use crate::engines::engine_trait::EngineOutput;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::utils::long_algebraic::move_to_long_algebraic;

/// Render the board to a Unicode string for terminal output, followed by the
/// side to move and the last move played, if any.
///
/// Assumes square indexing where `0 == a1`, `7 == h1`, and `63 == h8`.
pub fn render_game_state(game_state: &GameState) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for rank in (0..8u8).rev() {
        out.push(char::from(b'1' + rank));
        out.push(' ');

        for file in 0..8u8 {
            out.push(piece_to_unicode(game_state.piece_at(square_at(file, rank))));
            if file < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(char::from(b'1' + rank));
        out.push('\n');
    }

    out.push_str("  a b c d e f g h\n");

    let side = match game_state.side_to_move {
        Team::White => "White",
        Team::Black => "Black",
    };
    out.push_str(&format!("{side} to move"));
    if let Some(last) = game_state.last_move() {
        out.push_str(&format!(", last move {}", move_to_long_algebraic(*last)));
    }

    out
}

/// The computer's move with the search diagnostics shown after it, or `None`
/// when the engine produced no move.
pub fn render_engine_move(output: &EngineOutput) -> Option<String> {
    let mv = output.best_move?;
    let mut out = format!(
        "Evaluated boards: {}\nComputer plays {}",
        output.boards_evaluated,
        move_to_long_algebraic(mv)
    );
    if let Some(score) = output.score {
        out.push_str(&format!("\nWith score: {score}"));
    }
    Some(out)
}

fn piece_to_unicode(piece: Piece) -> char {
    match (piece.team, piece.kind) {
        (_, PieceKind::Empty) => '·',
        (Team::White, PieceKind::Pawn) => '♙',
        (Team::White, PieceKind::Knight) => '♘',
        (Team::White, PieceKind::Bishop) => '♗',
        (Team::White, PieceKind::Rook) => '♖',
        (Team::White, PieceKind::Queen) => '♕',
        (Team::White, PieceKind::King) => '♔',
        (Team::Black, PieceKind::Pawn) => '♟',
        (Team::Black, PieceKind::Knight) => '♞',
        (Team::Black, PieceKind::Bishop) => '♝',
        (Team::Black, PieceKind::Rook) => '♜',
        (Team::Black, PieceKind::Queen) => '♛',
        (Team::Black, PieceKind::King) => '♚',
    }
}
