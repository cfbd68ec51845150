//! Rook movement validation.

use crate::errors::{ChessResult, MovementError};
use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, PieceKind};
use crate::geometry::coordinate::Coordinate;
use crate::geometry::direction::Direction;
use crate::rules::movement_rule::{verify_clear_path, MovementRule};

/// Any clear file or rank line.
pub struct RookRule;

impl MovementRule for RookRule {
    fn kind(&self) -> PieceKind {
        PieceKind::Rook
    }

    fn validate(
        &self,
        _color: Color,
        source: Coordinate,
        destination: Coordinate,
        board: &Board,
    ) -> ChessResult<()> {
        let direction = source.direction_to(destination)?;
        if direction == Direction::AlongDiagonal {
            return Err(MovementError::DirectionNotAllowed {
                kind: PieceKind::Rook,
                direction,
            }
            .into());
        }
        verify_clear_path(board, source, destination, direction)
    }
}
