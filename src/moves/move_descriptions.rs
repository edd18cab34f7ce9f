use crate::game_state::chess_types::{CastlingRights, PieceKind, Square};

const CAPTURED_PIECE_SHIFT: u32 = 1;
const CASTLING_RIGHTS_SHIFT: u32 = 5;

const PIECE_MASK: u32 = 0x7;
const CASTLING_RIGHTS_MASK: u32 = 0xF;

pub const FLAG_CAPTURE: u32 = 1 << 0;
pub const FLAG_FIRST_MOVE: u32 = 1 << 4;
pub const FLAG_CASTLING: u32 = 1 << 9;
pub const FLAG_PROMOTION: u32 = 1 << 10;
pub const FLAG_DOUBLE_PAWN_PUSH: u32 = 1 << 11;
pub const FLAG_EN_PASSANT: u32 = 1 << 12;

/// A single move that carries everything needed to take it back.
///
/// Flag layout:
/// - bit 0: capture
/// - bits 1..=3: captured piece code (`PieceKind::code`)
/// - bit 4: first move of a king or rook that still held castling rights
/// - bits 5..=8: castling rights in force before the move
/// - bits 9..=12: castling, promotion, double pawn push, en passant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub flags: u32,
}

impl Move {
    /// A move with no flags, as produced from user text before validation.
    #[inline]
    pub const fn stub(from: Square, to: Square) -> Self {
        Self { from, to, flags: 0 }
    }

    #[inline]
    pub fn new(
        from: Square,
        to: Square,
        captured_piece: Option<PieceKind>,
        prior_castling_rights: CastlingRights,
        flags: u32,
    ) -> Self {
        let mut packed = flags & !(FLAG_CAPTURE | (PIECE_MASK << CAPTURED_PIECE_SHIFT));
        if let Some(captured) = captured_piece {
            packed |= FLAG_CAPTURE | (captured.code() << CAPTURED_PIECE_SHIFT);
        } else {
            packed |= PieceKind::Empty.code() << CAPTURED_PIECE_SHIFT;
        }
        packed &= !(CASTLING_RIGHTS_MASK << CASTLING_RIGHTS_SHIFT);
        packed |= (prior_castling_rights as u32 & CASTLING_RIGHTS_MASK) << CASTLING_RIGHTS_SHIFT;

        Self {
            from,
            to,
            flags: packed,
        }
    }

    #[inline]
    pub const fn has(&self, flag: u32) -> bool {
        self.flags & flag != 0
    }

    #[inline]
    pub const fn is_capture(&self) -> bool {
        self.has(FLAG_CAPTURE)
    }

    #[inline]
    pub const fn captured_piece(&self) -> Option<PieceKind> {
        if !self.is_capture() {
            return None;
        }
        match PieceKind::from_code((self.flags >> CAPTURED_PIECE_SHIFT) & PIECE_MASK) {
            PieceKind::Empty => None,
            kind => Some(kind),
        }
    }

    #[inline]
    pub const fn prior_castling_rights(&self) -> CastlingRights {
        ((self.flags >> CASTLING_RIGHTS_SHIFT) & CASTLING_RIGHTS_MASK) as CastlingRights
    }

    #[inline]
    pub const fn is_castling(&self) -> bool {
        self.has(FLAG_CASTLING)
    }

    #[inline]
    pub const fn is_promotion(&self) -> bool {
        self.has(FLAG_PROMOTION)
    }

    #[inline]
    pub const fn is_en_passant(&self) -> bool {
        self.has(FLAG_EN_PASSANT)
    }

    #[inline]
    pub const fn is_double_pawn_push(&self) -> bool {
        self.has(FLAG_DOUBLE_PAWN_PUSH)
    }

    /// Same source and destination, ignoring flags.
    #[inline]
    pub const fn same_squares(&self, other: &Move) -> bool {
        self.from == other.from && self.to == other.to
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{CASTLE_BLACK_LEFT, CASTLE_WHITE_RIGHT};

    #[test]
    fn capture_metadata_is_recoverable() {
        let mv = Move::new(
            12,
            21,
            Some(PieceKind::Knight),
            CASTLE_WHITE_RIGHT | CASTLE_BLACK_LEFT,
            FLAG_PROMOTION,
        );
        assert!(mv.is_capture());
        assert!(mv.is_promotion());
        assert!(!mv.is_en_passant());
        assert_eq!(mv.captured_piece(), Some(PieceKind::Knight));
        assert_eq!(mv.prior_castling_rights(), CASTLE_WHITE_RIGHT | CASTLE_BLACK_LEFT);
    }

    #[test]
    fn quiet_move_has_no_captured_piece() {
        let mv = Move::new(8, 24, None, 0, FLAG_DOUBLE_PAWN_PUSH);
        assert!(!mv.is_capture());
        assert!(mv.is_double_pawn_push());
        assert_eq!(mv.captured_piece(), None);
        assert!(mv.same_squares(&Move::stub(8, 24)));
    }
}
