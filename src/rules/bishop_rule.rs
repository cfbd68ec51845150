//! Bishop movement validation.

use crate::errors::{ChessResult, MovementError};
use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, PieceKind};
use crate::geometry::coordinate::Coordinate;
use crate::geometry::direction::Direction;
use crate::rules::movement_rule::{verify_clear_path, MovementRule};

/// Any clear diagonal line.
pub struct BishopRule;

impl MovementRule for BishopRule {
    fn kind(&self) -> PieceKind {
        PieceKind::Bishop
    }

    fn validate(
        &self,
        _color: Color,
        source: Coordinate,
        destination: Coordinate,
        board: &Board,
    ) -> ChessResult<()> {
        let direction = source.direction_to(destination)?;
        if direction != Direction::AlongDiagonal {
            return Err(MovementError::DirectionNotAllowed {
                kind: PieceKind::Bishop,
                direction,
            }
            .into());
        }
        verify_clear_path(board, source, destination, direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ChessError;
    use crate::game_state::chess_types::Piece;

    fn at(text: &str) -> Coordinate {
        Coordinate::from_text(text).expect("test coordinate should parse")
    }

    #[test]
    fn clear_diagonals_of_any_length_pass() {
        let board = Board::empty();
        assert!(BishopRule
            .validate(Color::White, at("c1"), at("h6"), &board)
            .is_ok());
        assert!(BishopRule
            .validate(Color::Black, at("f8"), at("a3"), &board)
            .is_ok());
    }

    #[test]
    fn files_and_ranks_are_off_limits() {
        let board = Board::empty();
        assert_eq!(
            BishopRule.validate(Color::White, at("c1"), at("c8"), &board),
            Err(ChessError::Movement(MovementError::DirectionNotAllowed {
                kind: PieceKind::Bishop,
                direction: Direction::AlongFile,
            }))
        );
        assert_eq!(
            BishopRule.validate(Color::White, at("c1"), at("h1"), &board),
            Err(ChessError::Movement(MovementError::DirectionNotAllowed {
                kind: PieceKind::Bishop,
                direction: Direction::AlongRank,
            }))
        );
    }

    #[test]
    fn an_intervening_piece_blocks_the_line() {
        let mut board = Board::empty();
        board
            .place(Piece::new(Color::White, PieceKind::Pawn), at("e3"))
            .expect("e3 starts vacant");
        assert_eq!(
            BishopRule.validate(Color::White, at("c1"), at("g5"), &board),
            Err(ChessError::Movement(
                MovementError::MoveOverInterveningPiece { blocking: at("e3") }
            ))
        );
    }
}
