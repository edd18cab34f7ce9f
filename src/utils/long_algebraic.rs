//! Move text in the "b2d2" coordinate form.
//!
//! Parsing only produces a from/to stub; the legality filter decides whether
//! it is playable and fills in its flags.

use crate::game_state::chess_types::square_at;
use crate::moves::move_descriptions::Move;
use crate::utils::algebraic::{file_index, rank_index, square_to_algebraic, NotationError};

/// Parse two back-to-back coordinates, ignoring blanks, into a flagless move.
pub fn parse_candidate_move(text: &str) -> Result<Move, NotationError> {
    let mut coords = text.chars().filter(|c| !c.is_whitespace());

    let mut next_square = || -> Result<u8, NotationError> {
        let file = coords
            .next()
            .ok_or_else(|| NotationError::IncompleteMove(text.to_owned()))?;
        let rank = coords
            .next()
            .ok_or_else(|| NotationError::IncompleteMove(text.to_owned()))?;
        Ok(square_at(file_index(file)?, rank_index(rank)?))
    };

    let from = next_square()?;
    let to = next_square()?;
    if coords.next().is_some() {
        return Err(NotationError::TrailingInput(text.to_owned()));
    }
    Ok(Move::stub(from, to))
}

/// Source then destination, for example "g1f3". A stub holding an off-board
/// index falls back to the raw indices.
pub fn move_to_long_algebraic(mv: Move) -> String {
    match (square_to_algebraic(mv.from), square_to_algebraic(mv.to)) {
        (Ok(from), Ok(to)) => format!("{from}{to}"),
        _ => format!("#{}-#{}", mv.from, mv.to),
    }
}

#[cfg(test)]
mod tests {
    use super::{move_to_long_algebraic, parse_candidate_move};
    use crate::moves::move_descriptions::Move;
    use crate::utils::algebraic::NotationError;

    #[test]
    fn parses_compact_and_spaced_moves() {
        assert_eq!(parse_candidate_move("b2d2"), Ok(Move::stub(9, 11)));
        assert_eq!(parse_candidate_move(" e2 e4 "), Ok(Move::stub(12, 28)));
    }

    #[test]
    fn rejects_malformed_text() {
        assert_eq!(parse_candidate_move("z2e4"), Err(NotationError::InvalidFile('z')));
        assert_eq!(parse_candidate_move("e2e9"), Err(NotationError::InvalidRank('9')));
        assert!(matches!(
            parse_candidate_move("e2e"),
            Err(NotationError::IncompleteMove(_))
        ));
        assert!(matches!(
            parse_candidate_move("e2e4q"),
            Err(NotationError::TrailingInput(_))
        ));
    }

    #[test]
    fn formats_source_then_destination() {
        assert_eq!(move_to_long_algebraic(Move::stub(6, 21)), "g1f3");
        assert_eq!(move_to_long_algebraic(Move::stub(0, 63)), "a1h8");
    }

    #[test]
    fn off_board_stub_formats_raw_indices() {
        assert_eq!(move_to_long_algebraic(Move::stub(12, 64)), "#12-#64");
    }
}
