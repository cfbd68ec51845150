//! Queen movement validation.

use crate::errors::ChessResult;
use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, PieceKind};
use crate::geometry::coordinate::Coordinate;
use crate::rules::movement_rule::{verify_clear_path, MovementRule};

/// Any clear straight line. Every direction the geometry can classify is a
/// queen direction, so only blocked paths and lineless pairs are refused.
pub struct QueenRule;

impl MovementRule for QueenRule {
    fn kind(&self) -> PieceKind {
        PieceKind::Queen
    }

    fn validate(
        &self,
        _color: Color,
        source: Coordinate,
        destination: Coordinate,
        board: &Board,
    ) -> ChessResult<()> {
        let direction = source.direction_to(destination)?;
        verify_clear_path(board, source, destination, direction)
    }
}
