//! FEN-to-GameState parser.
//!
//! Fills the mailbox board, side to move and castling rights. An en passant
//! field is turned into the double pawn push that would have produced it, so
//! the generator sees the same history it would after playing that move. The
//! move clocks are accepted and ignored.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::move_descriptions::{Move, FLAG_DOUBLE_PAWN_PUSH};
use crate::utils::algebraic::{algebraic_to_square, NotationError};

pub fn parse_fen(fen: &str) -> Result<GameState, NotationError> {
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or_else(|| invalid("missing board layout"))?;
    let side_part = parts.next().ok_or_else(|| invalid("missing side-to-move"))?;
    let castling_part = parts.next().unwrap_or("-");
    let en_passant_part = parts.next().unwrap_or("-");
    let _clocks = (parts.next(), parts.next());

    if parts.next().is_some() {
        return Err(invalid("extra trailing fields"));
    }

    let mut game_state = GameState::new_empty();

    parse_board(board_part, &mut game_state)?;
    game_state.side_to_move = parse_side_to_move(side_part)?;
    game_state.castling_rights = parse_castling_rights(castling_part)?;
    if let Some(double_push) = parse_en_passant_square(en_passant_part, &game_state)? {
        game_state.history.push(double_push);
    }

    Ok(game_state)
}

fn invalid(reason: impl Into<String>) -> NotationError {
    NotationError::InvalidFen(reason.into())
}

fn parse_board(board_part: &str, game_state: &mut GameState) -> Result<(), NotationError> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(invalid("board layout must contain 8 ranks"));
    }

    for (fen_rank_idx, rank_str) in ranks.iter().enumerate() {
        let board_rank = 7 - fen_rank_idx as u8;
        let mut file = 0u8;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(invalid(format!("invalid empty-square count '{ch}'")));
                }
                file += empty_count as u8;
                continue;
            }

            let (team, kind) = piece_from_fen_char(ch)
                .ok_or_else(|| invalid(format!("invalid piece character '{ch}'")))?;

            if file >= 8 {
                return Err(invalid("board rank has too many files"));
            }

            game_state.board[square_at(file, board_rank) as usize] = Piece::new(team, kind);
            file += 1;
        }

        if file != 8 {
            return Err(invalid(format!("rank '{rank_str}' does not sum to 8 files")));
        }
    }

    Ok(())
}

fn parse_side_to_move(side_part: &str) -> Result<Team, NotationError> {
    match side_part {
        "w" => Ok(Team::White),
        "b" => Ok(Team::Black),
        _ => Err(invalid(format!("invalid side-to-move field: {side_part}"))),
    }
}

fn parse_castling_rights(castling_part: &str) -> Result<CastlingRights, NotationError> {
    if castling_part == "-" {
        return Ok(0);
    }

    let mut rights: CastlingRights = 0;

    for ch in castling_part.chars() {
        match ch {
            'K' => rights |= CASTLE_WHITE_RIGHT,
            'Q' => rights |= CASTLE_WHITE_LEFT,
            'k' => rights |= CASTLE_BLACK_RIGHT,
            'q' => rights |= CASTLE_BLACK_LEFT,
            _ => return Err(invalid(format!("invalid castling rights character: {ch}"))),
        }
    }

    Ok(rights)
}

/// Rebuild the double push implied by an en passant target square.
fn parse_en_passant_square(
    en_passant_part: &str,
    game_state: &GameState,
) -> Result<Option<Move>, NotationError> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    let target = algebraic_to_square(en_passant_part)?;
    let mover = game_state.side_to_move.opposite();
    let step = mover.forward();
    let (Some(from), Some(to)) = (
        offset_square(target, 0, -step),
        offset_square(target, 0, step),
    ) else {
        return Err(invalid(format!("en passant square off the board: {en_passant_part}")));
    };

    if !game_state.piece_at(to).is(mover, PieceKind::Pawn) {
        return Err(invalid(format!(
            "no pawn behind en passant square {en_passant_part}"
        )));
    }

    Ok(Some(Move::new(
        from,
        to,
        None,
        game_state.castling_rights,
        FLAG_DOUBLE_PAWN_PUSH,
    )))
}

fn piece_from_fen_char(ch: char) -> Option<(Team, PieceKind)> {
    let team = if ch.is_ascii_uppercase() {
        Team::White
    } else if ch.is_ascii_lowercase() {
        Team::Black
    } else {
        return None;
    };

    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };

    Some((team, kind))
}
