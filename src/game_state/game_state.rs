//! Mailbox board state.
//!
//! `GameState` owns the 64-square board, side to move, castling rights, the
//! move history stack and the against-AI flag. It is only ever mutated by the
//! move executor's apply/undo pair.

use crate::game_state::chess_rules::BACK_RANK_LAYOUT;
use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::Move;
use crate::utils::fen_parser::parse_fen;
use crate::utils::NotationError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,
    pub side_to_move: Team,
    pub castling_rights: CastlingRights,
    pub history: Vec<Move>,
    pub against_ai: bool,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            board: [Piece::EMPTY; 64],
            side_to_move: Team::White,
            castling_rights: 0,
            history: Vec::new(),
            against_ai: false,
        }
    }
}

impl GameState {
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    /// Standard opening position, full castling rights, White to move.
    pub fn initialize(against_ai: bool) -> Self {
        let mut game = Self {
            castling_rights: CASTLE_ALL,
            against_ai,
            ..Self::default()
        };

        for (file, kind) in BACK_RANK_LAYOUT.iter().copied().enumerate() {
            let file = file as u8;
            game.board[square_at(file, 0) as usize] = Piece::new(Team::White, kind);
            game.board[square_at(file, 1) as usize] = Piece::new(Team::White, PieceKind::Pawn);
            game.board[square_at(file, 6) as usize] = Piece::new(Team::Black, PieceKind::Pawn);
            game.board[square_at(file, 7) as usize] = Piece::new(Team::Black, kind);
        }

        game
    }

    #[inline]
    pub fn new_game() -> Self {
        Self::initialize(false)
    }

    #[inline]
    pub fn from_fen(fen: &str) -> Result<Self, NotationError> {
        parse_fen(fen)
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Piece {
        self.board[square as usize]
    }

    #[inline]
    pub fn last_move(&self) -> Option<&Move> {
        self.history.last()
    }

    pub fn piece_count(&self) -> usize {
        self.board.iter().filter(|piece| !piece.is_empty()).count()
    }

    pub fn king_square(&self, team: Team) -> Option<Square> {
        self.board
            .iter()
            .position(|piece| piece.is(team, PieceKind::King))
            .map(|index| index as Square)
    }

    /// Board and castling rights, the parts undo must restore exactly.
    #[inline]
    pub fn position_snapshot(&self) -> (Board, CastlingRights) {
        (self.board, self.castling_rights)
    }
}
