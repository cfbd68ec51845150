//! The requests a player can direct at a match.

use std::fmt;

use crate::game_state::chess_types::Piece;
use crate::geometry::coordinate::Coordinate;

/// One request against the match, as resolved by the engine.
///
/// `Move` and `Attack` describe committed relocations, `Exchange` the
/// replacement of a promoted pawn, and `CanMoveCheck` a hypothetical probe
/// that never mutates anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Move {
        piece: Piece,
        source: Coordinate,
        destination: Coordinate,
    },
    Attack {
        piece: Piece,
        source: Coordinate,
        destination: Coordinate,
    },
    Exchange {
        piece: Piece,
        position: Coordinate,
    },
    CanMoveCheck {
        piece: Piece,
        source: Coordinate,
        destination: Coordinate,
    },
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Move {
                piece,
                source,
                destination,
            } => write!(f, "{piece} moves {source} to {destination}"),
            Action::Attack {
                piece,
                source,
                destination,
            } => write!(f, "{piece} attacks {source} to {destination}"),
            Action::Exchange { piece, position } => {
                write!(f, "pawn exchanged for a {piece} on {position}")
            }
            Action::CanMoveCheck {
                piece,
                source,
                destination,
            } => write!(f, "{piece} could move {source} to {destination}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{Color, PieceKind};

    #[test]
    fn actions_describe_themselves() {
        let pawn = Piece::new(Color::White, PieceKind::Pawn);
        let action = Action::Move {
            piece: pawn,
            source: Coordinate::from_text("e2").expect("e2 should parse"),
            destination: Coordinate::from_text("e4").expect("e4 should parse"),
        };
        assert_eq!(action.to_string(), "white pawn moves e2 to e4");
    }
}
