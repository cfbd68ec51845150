//! Pawn movement validation.

use crate::errors::{ChessResult, MovementError};
use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, PieceKind};
use crate::geometry::coordinate::Coordinate;
use crate::geometry::direction::Direction;
use crate::rules::movement_rule::MovementRule;

/// Forward steps onto vacant squares, single diagonal steps to capture.
///
/// The passing capture is not judged here. It needs the match's en passant
/// window, so the aggregate resolves it before consulting this rule.
pub struct PawnRule;

impl MovementRule for PawnRule {
    fn kind(&self) -> PieceKind {
        PieceKind::Pawn
    }

    fn validate(
        &self,
        color: Color,
        source: Coordinate,
        destination: Coordinate,
        board: &Board,
    ) -> ChessResult<()> {
        let direction = source.direction_to(destination)?;
        let (file_delta, rank_delta) = source.deltas_to(destination);
        let not_forward = MovementError::DirectionNotAllowed {
            kind: PieceKind::Pawn,
            direction,
        };
        match direction {
            Direction::AlongRank => Err(not_forward.into()),
            Direction::AlongFile if rank_delta.signum() != color.forward_step() => {
                Err(not_forward.into())
            }
            Direction::AlongDiagonal if rank_delta.signum() != color.forward_step() => {
                Err(not_forward.into())
            }
            Direction::AlongFile => {
                // Forward moves never capture, whatever stands there.
                board.verify_unoccupied(destination)?;
                match rank_delta.unsigned_abs() {
                    1 => Ok(()),
                    2 if source.rank() == color.initial_pawn_rank() => {
                        let crossed = source.next_towards(destination, direction)?;
                        match board.piece_at(crossed) {
                            Some(_) => Err(MovementError::MoveOverInterveningPiece {
                                blocking: crossed,
                            }
                            .into()),
                            None => Ok(()),
                        }
                    }
                    distance => Err(MovementError::TooDistant {
                        kind: PieceKind::Pawn,
                        distance,
                    }
                    .into()),
                }
            }
            Direction::AlongDiagonal => {
                let distance = file_delta.unsigned_abs();
                if distance != 1 {
                    return Err(MovementError::TooDistant {
                        kind: PieceKind::Pawn,
                        distance,
                    }
                    .into());
                }
                match board.piece_at(destination) {
                    Some(piece) if piece.color != color => Ok(()),
                    Some(_) => Err(crate::errors::OccupancyError::MoveToOccupiedPosition(
                        destination,
                    )
                    .into()),
                    None => Err(MovementError::ShapeNotAllowed {
                        kind: PieceKind::Pawn,
                        origin: source,
                        destination,
                    }
                    .into()),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{ChessError, GeometryError, OccupancyError};
    use crate::game_state::chess_types::Piece;

    fn at(text: &str) -> Coordinate {
        Coordinate::from_text(text).expect("test coordinate should parse")
    }

    fn board_with(pieces: &[(&str, Color, PieceKind)]) -> Board {
        let mut board = Board::empty();
        for (square, color, kind) in pieces {
            board
                .place(Piece::new(*color, *kind), at(square))
                .expect("test squares should be distinct");
        }
        board
    }

    #[test]
    fn single_forward_step_onto_a_vacant_square_passes() {
        let board = board_with(&[("e2", Color::White, PieceKind::Pawn)]);
        assert!(PawnRule
            .validate(Color::White, at("e2"), at("e3"), &board)
            .is_ok());
        let board = board_with(&[("d7", Color::Black, PieceKind::Pawn)]);
        assert!(PawnRule
            .validate(Color::Black, at("d7"), at("d6"), &board)
            .is_ok());
    }

    #[test]
    fn double_step_needs_the_initial_rank() {
        let board = board_with(&[("e2", Color::White, PieceKind::Pawn)]);
        assert!(PawnRule
            .validate(Color::White, at("e2"), at("e4"), &board)
            .is_ok());
        let board = board_with(&[("b4", Color::White, PieceKind::Pawn)]);
        assert_eq!(
            PawnRule.validate(Color::White, at("b4"), at("b6"), &board),
            Err(ChessError::Movement(MovementError::TooDistant {
                kind: PieceKind::Pawn,
                distance: 2,
            }))
        );
    }

    #[test]
    fn double_step_may_not_jump_an_intervening_piece() {
        let board = board_with(&[
            ("c2", Color::White, PieceKind::Pawn),
            ("c3", Color::Black, PieceKind::Knight),
        ]);
        assert_eq!(
            PawnRule.validate(Color::White, at("c2"), at("c4"), &board),
            Err(ChessError::Movement(
                MovementError::MoveOverInterveningPiece { blocking: at("c3") }
            ))
        );
    }

    #[test]
    fn forward_moves_never_capture() {
        let board = board_with(&[
            ("e4", Color::White, PieceKind::Pawn),
            ("e5", Color::Black, PieceKind::Pawn),
        ]);
        assert_eq!(
            PawnRule.validate(Color::White, at("e4"), at("e5"), &board),
            Err(ChessError::Occupancy(OccupancyError::SquareIsOccupied(
                at("e5")
            )))
        );
    }

    #[test]
    fn backward_and_sideways_steps_are_refused() {
        let board = board_with(&[("e4", Color::White, PieceKind::Pawn)]);
        assert_eq!(
            PawnRule.validate(Color::White, at("e4"), at("e3"), &board),
            Err(ChessError::Movement(MovementError::DirectionNotAllowed {
                kind: PieceKind::Pawn,
                direction: Direction::AlongFile,
            }))
        );
        assert_eq!(
            PawnRule.validate(Color::White, at("e4"), at("f4"), &board),
            Err(ChessError::Movement(MovementError::DirectionNotAllowed {
                kind: PieceKind::Pawn,
                direction: Direction::AlongRank,
            }))
        );
        assert_eq!(
            PawnRule.validate(Color::White, at("e4"), at("d3"), &board),
            Err(ChessError::Movement(MovementError::DirectionNotAllowed {
                kind: PieceKind::Pawn,
                direction: Direction::AlongDiagonal,
            }))
        );
    }

    #[test]
    fn diagonal_steps_capture_opposing_pieces_only() {
        let board = board_with(&[
            ("e4", Color::White, PieceKind::Pawn),
            ("d5", Color::Black, PieceKind::Knight),
            ("f5", Color::White, PieceKind::Bishop),
        ]);
        assert!(PawnRule
            .validate(Color::White, at("e4"), at("d5"), &board)
            .is_ok());
        assert_eq!(
            PawnRule.validate(Color::White, at("e4"), at("f5"), &board),
            Err(ChessError::Occupancy(
                OccupancyError::MoveToOccupiedPosition(at("f5"))
            ))
        );
    }

    #[test]
    fn diagonal_steps_onto_vacant_squares_have_no_shape() {
        let board = board_with(&[("e4", Color::White, PieceKind::Pawn)]);
        assert_eq!(
            PawnRule.validate(Color::White, at("e4"), at("d5"), &board),
            Err(ChessError::Movement(MovementError::ShapeNotAllowed {
                kind: PieceKind::Pawn,
                origin: at("e4"),
                destination: at("d5"),
            }))
        );
    }

    #[test]
    fn long_diagonals_are_too_distant_even_with_a_capture_waiting() {
        let board = board_with(&[
            ("c1", Color::White, PieceKind::Pawn),
            ("e3", Color::Black, PieceKind::Rook),
        ]);
        assert_eq!(
            PawnRule.validate(Color::White, at("c1"), at("e3"), &board),
            Err(ChessError::Movement(MovementError::TooDistant {
                kind: PieceKind::Pawn,
                distance: 2,
            }))
        );
    }

    #[test]
    fn knight_offsets_have_no_direction_for_a_pawn() {
        let board = board_with(&[("e4", Color::White, PieceKind::Pawn)]);
        assert_eq!(
            PawnRule.validate(Color::White, at("e4"), at("f6"), &board),
            Err(ChessError::Geometry(GeometryError::UnknownDirection {
                from: at("e4"),
                to: at("f6"),
            }))
        );
    }
}
