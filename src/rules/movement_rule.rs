//! The per-kind movement validation seam.
//!
//! One `MovementRule` implementor exists per piece kind. A rule judges the
//! shape of a single move against a board snapshot: the direction it runs
//! in, how far it travels, and whether intervening squares are clear. A
//! rule never judges turn order, destination capture legality, or check;
//! the [`Game`](crate::game_state::game::Game) aggregate layers those on
//! top of every validated move.

use crate::errors::{ChessResult, MovementError};
use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, PieceKind};
use crate::geometry::coordinate::Coordinate;
use crate::geometry::direction::Direction;

/// Movement judgement for one piece kind.
pub trait MovementRule: Send + Sync {
    /// The kind this rule validates.
    fn kind(&self) -> PieceKind;

    /// Judge a move of a `color` piece of this kind from `source` to
    /// `destination` against the board snapshot.
    fn validate(
        &self,
        color: Color,
        source: Coordinate,
        destination: Coordinate,
        board: &Board,
    ) -> ChessResult<()>;
}

/// Confirm every square strictly between `source` and `destination` is
/// vacant. Used by the sliding rules; the destination itself is not judged
/// here.
pub(crate) fn verify_clear_path(
    board: &Board,
    source: Coordinate,
    destination: Coordinate,
    direction: Direction,
) -> ChessResult<()> {
    match board.first_piece_between(source, destination, direction)? {
        Some(blocking) => Err(MovementError::MoveOverInterveningPiece { blocking }.into()),
        None => Ok(()),
    }
}
