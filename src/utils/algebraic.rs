//! Square conversions for long algebraic coordinates and the notation error
//! shared by every text parser in the crate.

use thiserror::Error;

use crate::game_state::chess_types::{file_of, rank_of, square_at, Square};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotationError {
    #[error("invalid algebraic square: {0}")]
    InvalidSquare(String),
    #[error("invalid algebraic file: {0}")]
    InvalidFile(char),
    #[error("invalid algebraic rank: {0}")]
    InvalidRank(char),
    #[error("square index out of bounds: {0}")]
    SquareOutOfBounds(u8),
    #[error("incomplete move text: {0:?}")]
    IncompleteMove(String),
    #[error("unexpected trailing input in move text: {0:?}")]
    TrailingInput(String),
    #[error("invalid FEN: {0}")]
    InvalidFen(String),
}

/// Convert long algebraic notation (for example: "e4") to a square index.
#[inline]
pub fn algebraic_to_square(square: &str) -> Result<Square, NotationError> {
    let mut chars = square.chars();
    let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
        return Err(NotationError::InvalidSquare(square.to_owned()));
    };
    Ok(square_at(file_index(file)?, rank_index(rank)?))
}

/// Convert a square index (`0..=63`) to long algebraic notation (for example: "e4").
#[inline]
pub fn square_to_algebraic(square: Square) -> Result<String, NotationError> {
    if square > 63 {
        return Err(NotationError::SquareOutOfBounds(square));
    }

    let file_char = char::from(b'a' + file_of(square));
    let rank_char = char::from(b'1' + rank_of(square));
    Ok(format!("{file_char}{rank_char}"))
}

#[inline]
pub(crate) fn file_index(file: char) -> Result<u8, NotationError> {
    if ('a'..='h').contains(&file) {
        Ok(file as u8 - b'a')
    } else {
        Err(NotationError::InvalidFile(file))
    }
}

#[inline]
pub(crate) fn rank_index(rank: char) -> Result<u8, NotationError> {
    if ('1'..='8').contains(&rank) {
        Ok(rank as u8 - b'1')
    } else {
        Err(NotationError::InvalidRank(rank))
    }
}
