//! Knight movement validation.

use crate::errors::{ChessResult, MovementError};
use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, PieceKind};
use crate::geometry::coordinate::Coordinate;
use crate::rules::movement_rule::MovementRule;

/// The two-and-one jump. Intervening pieces never matter.
pub struct KnightRule;

impl MovementRule for KnightRule {
    fn kind(&self) -> PieceKind {
        PieceKind::Knight
    }

    fn validate(
        &self,
        _color: Color,
        source: Coordinate,
        destination: Coordinate,
        _board: &Board,
    ) -> ChessResult<()> {
        let (file_delta, rank_delta) = source.deltas_to(destination);
        let shape = (file_delta.unsigned_abs(), rank_delta.unsigned_abs());
        if shape == (1, 2) || shape == (2, 1) {
            Ok(())
        } else {
            Err(MovementError::ShapeNotAllowed {
                kind: PieceKind::Knight,
                origin: source,
                destination,
            }
            .into())
        }
    }
}
