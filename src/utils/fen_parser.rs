//! FEN-to-Game parser.
//!
//! Rebuilds a full aggregate from a Forsyth-Edwards Notation string:
//! placement, side to move, castling entitlements, and the en passant
//! window. The two clock fields are validated syntactically and discarded,
//! move-count rules are out of scope here. Check, terminal status, and a
//! pending pawn exchange are re-derived from the position.

use crate::errors::{ChessError, FenError};
use crate::game_state::board::Board;
use crate::game_state::chess_types::{CastlingEntitlements, Color, Piece};
use crate::game_state::game::Game;
use crate::geometry::coordinate::Coordinate;

/// The standard starting arrangement.
pub const STARTING_POSITION_FEN: &str =
    "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

pub fn parse_fen(fen: &str) -> Result<Game, ChessError> {
    let mut parts = fen.split_whitespace();
    let mut field = |name: &'static str| {
        parts
            .next()
            .ok_or(FenError::MissingField { field: name })
    };

    let board_part = field("placement")?;
    let side_part = field("side to move")?;
    let castling_part = field("castling")?;
    let en_passant_part = field("en passant")?;
    let halfmove_part = field("halfmove clock")?;
    let fullmove_part = field("fullmove number")?;

    if let Some(trailing) = parts.next() {
        return Err(FenError::TrailingInput {
            trailing: trailing.to_owned(),
        }
        .into());
    }

    let board = parse_placement(board_part)?;
    let turn = parse_side_to_move(side_part)?;
    let entitlements = parse_entitlements(castling_part)?;
    let en_passant = parse_en_passant(en_passant_part)?;
    if let Some(window) = en_passant {
        // The skipped square sits behind the opponent's double-stepped pawn.
        let skipped_rank = match turn {
            Color::White => 6,
            Color::Black => 3,
        };
        if window.rank() != skipped_rank {
            return Err(FenError::InvalidField {
                field: "en passant",
                value: en_passant_part.to_owned(),
            }
            .into());
        }
    }
    verify_clock(halfmove_part, "halfmove clock")?;
    verify_clock(fullmove_part, "fullmove number")?;

    Ok(Game::from_position(board, turn, entitlements, en_passant)?)
}

fn parse_placement(board_part: &str) -> Result<Board, ChessError> {
    let invalid = || FenError::InvalidField {
        field: "placement",
        value: board_part.to_owned(),
    };
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(invalid().into());
    }

    let mut board = Board::empty();
    for (row, rank_text) in ranks.iter().enumerate() {
        // FEN lists rank 8 first.
        let rank_index = 7 - row as u8;
        let mut file_index = 0u8;
        for ch in rank_text.chars() {
            if let Some(step) = ch.to_digit(10) {
                if !(1..=8).contains(&step) {
                    return Err(invalid().into());
                }
                file_index += step as u8;
                continue;
            }
            let piece = Piece::from_record_letter(ch).ok_or_else(invalid)?;
            if file_index >= 8 {
                return Err(invalid().into());
            }
            board.place(piece, Coordinate::from_indices(file_index, rank_index))?;
            file_index += 1;
        }
        if file_index != 8 {
            return Err(invalid().into());
        }
    }
    Ok(board)
}

fn parse_side_to_move(side_part: &str) -> Result<Color, FenError> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(FenError::InvalidField {
            field: "side to move",
            value: side_part.to_owned(),
        }),
    }
}

fn parse_entitlements(castling_part: &str) -> Result<CastlingEntitlements, FenError> {
    if castling_part == "-" {
        return Ok(CastlingEntitlements::none());
    }
    let mut entitlements = CastlingEntitlements::none();
    for ch in castling_part.chars() {
        match ch {
            'K' => entitlements.white_kingside = true,
            'Q' => entitlements.white_queenside = true,
            'k' => entitlements.black_kingside = true,
            'q' => entitlements.black_queenside = true,
            _ => {
                return Err(FenError::InvalidField {
                    field: "castling",
                    value: castling_part.to_owned(),
                })
            }
        }
    }
    Ok(entitlements)
}

fn parse_en_passant(en_passant_part: &str) -> Result<Option<Coordinate>, FenError> {
    if en_passant_part == "-" {
        return Ok(None);
    }
    let invalid = || FenError::InvalidField {
        field: "en passant",
        value: en_passant_part.to_owned(),
    };
    let square = Coordinate::from_text(en_passant_part).map_err(|_| invalid())?;
    // The skipped square of a double step is always on rank 3 or 6.
    if square.rank() != 3 && square.rank() != 6 {
        return Err(invalid());
    }
    Ok(Some(square))
}

fn verify_clock(text: &str, field: &'static str) -> Result<(), FenError> {
    text.parse::<u16>().map(|_| ()).map_err(|_| FenError::InvalidField {
        field,
        value: text.to_owned(),
    })
}
