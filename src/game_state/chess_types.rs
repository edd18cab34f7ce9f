//! Core value types shared by the board, move generation and search.
//!
//! Pieces are stored in a 64-slot mailbox; an empty square holds the canonical
//! `Piece::EMPTY` value rather than an optional.

pub use crate::game_state::game_state::GameState;

/// Board square index (`0..=63`, `a1 == 0`, `h8 == 63`).
pub type Square = u8;

/// Side owning a piece, and side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Team {
    White,
    Black,
}

impl Team {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Team::White => Team::Black,
            Team::Black => Team::White,
        }
    }

    /// Rank step taken by this team's pawns.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Team::White => 1,
            Team::Black => -1,
        }
    }

    /// Rank holding this team's king and rooks at the start of the game.
    #[inline]
    pub const fn back_rank(self) -> u8 {
        match self {
            Team::White => 0,
            Team::Black => 7,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
    Empty,
}

impl PieceKind {
    /// Three-bit code used to embed a captured kind inside move flags.
    #[inline]
    pub const fn code(self) -> u32 {
        match self {
            PieceKind::King => 0,
            PieceKind::Queen => 1,
            PieceKind::Rook => 2,
            PieceKind::Bishop => 3,
            PieceKind::Knight => 4,
            PieceKind::Pawn => 5,
            PieceKind::Empty => 7,
        }
    }

    #[inline]
    pub const fn from_code(code: u32) -> PieceKind {
        match code {
            0 => PieceKind::King,
            1 => PieceKind::Queen,
            2 => PieceKind::Rook,
            3 => PieceKind::Bishop,
            4 => PieceKind::Knight,
            5 => PieceKind::Pawn,
            _ => PieceKind::Empty,
        }
    }
}

/// A square's occupant: a team and a kind. Empty squares always use
/// `Piece::EMPTY` so that boards compare equal square by square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub team: Team,
    pub kind: PieceKind,
}

impl Piece {
    pub const EMPTY: Piece = Piece {
        team: Team::White,
        kind: PieceKind::Empty,
    };

    #[inline]
    pub const fn new(team: Team, kind: PieceKind) -> Self {
        Self { team, kind }
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        matches!(self.kind, PieceKind::Empty)
    }

    /// True when the square holds a piece of `team`.
    #[inline]
    pub fn is_of(self, team: Team) -> bool {
        !self.is_empty() && self.team == team
    }

    #[inline]
    pub fn is(self, team: Team, kind: PieceKind) -> bool {
        self.kind == kind && self.team == team
    }
}

impl Default for Piece {
    fn default() -> Self {
        Piece::EMPTY
    }
}

pub type Board = [Piece; 64];

/// Castling rights bitmask. "Right" is the h-file rook side, "left" the
/// a-file rook side.
pub type CastlingRights = u8;

pub const CASTLE_WHITE_RIGHT: CastlingRights = 1 << 0;
pub const CASTLE_WHITE_LEFT: CastlingRights = 1 << 1;
pub const CASTLE_BLACK_RIGHT: CastlingRights = 1 << 2;
pub const CASTLE_BLACK_LEFT: CastlingRights = 1 << 3;
pub const CASTLE_ALL: CastlingRights =
    CASTLE_WHITE_RIGHT | CASTLE_WHITE_LEFT | CASTLE_BLACK_RIGHT | CASTLE_BLACK_LEFT;

#[inline]
pub const fn castle_right_flag(team: Team) -> CastlingRights {
    match team {
        Team::White => CASTLE_WHITE_RIGHT,
        Team::Black => CASTLE_BLACK_RIGHT,
    }
}

#[inline]
pub const fn castle_left_flag(team: Team) -> CastlingRights {
    match team {
        Team::White => CASTLE_WHITE_LEFT,
        Team::Black => CASTLE_BLACK_LEFT,
    }
}

/// Rights lost when a piece leaves or lands on `square`.
///
/// Only the king and rook home squares carry rights; anything moving off them
/// is the original piece, and anything landing on a rook corner captured it.
#[inline]
pub const fn castling_rights_touched_by(square: Square) -> CastlingRights {
    match square {
        0 => CASTLE_WHITE_LEFT,
        4 => CASTLE_WHITE_RIGHT | CASTLE_WHITE_LEFT,
        7 => CASTLE_WHITE_RIGHT,
        56 => CASTLE_BLACK_LEFT,
        60 => CASTLE_BLACK_RIGHT | CASTLE_BLACK_LEFT,
        63 => CASTLE_BLACK_RIGHT,
        _ => 0,
    }
}

#[inline]
pub const fn square_at(file: u8, rank: u8) -> Square {
    rank * 8 + file
}

#[inline]
pub const fn file_of(square: Square) -> u8 {
    square % 8
}

#[inline]
pub const fn rank_of(square: Square) -> u8 {
    square / 8
}

/// Square reached by stepping `(file_step, rank_step)`, or `None` off the board.
#[inline]
pub fn offset_square(square: Square, file_step: i8, rank_step: i8) -> Option<Square> {
    let file = file_of(square) as i8 + file_step;
    let rank = rank_of(square) as i8 + rank_step;
    if (0..8).contains(&file) && (0..8).contains(&rank) {
        Some(square_at(file as u8, rank as u8))
    } else {
        None
    }
}
