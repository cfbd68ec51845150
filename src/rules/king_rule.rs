//! King movement validation.

use crate::errors::{ChessResult, MovementError};
use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, PieceKind};
use crate::geometry::coordinate::Coordinate;
use crate::rules::movement_rule::MovementRule;

/// One step along any line.
///
/// The two-square castling move is a composite of king and rook and is
/// resolved by the aggregate before this rule is consulted. Exposure to
/// check is likewise judged there, where the whole match state is known.
pub struct KingRule;

impl MovementRule for KingRule {
    fn kind(&self) -> PieceKind {
        PieceKind::King
    }

    fn validate(
        &self,
        _color: Color,
        source: Coordinate,
        destination: Coordinate,
        _board: &Board,
    ) -> ChessResult<()> {
        let direction = source.direction_to(destination)?;
        let distance = source.distance_to(destination, direction)?;
        if distance == 1 {
            Ok(())
        } else {
            Err(MovementError::TooDistant {
                kind: PieceKind::King,
                distance,
            }
            .into())
        }
    }
}
