//! Notifications a committed move can raise.

use std::fmt;

use crate::game_state::chess_types::Piece;
use crate::geometry::coordinate::Coordinate;

/// Something noteworthy that happened while a move was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// `piece` was captured on `position` and left the board.
    PieceWasCaptured { piece: Piece, position: Coordinate },
    /// The pawn now standing on `position` must be exchanged before the
    /// match continues.
    PawnReachedPromotion { piece: Piece, position: Coordinate },
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::PieceWasCaptured { piece, position } => {
                write!(f, "{piece} was captured on {position}")
            }
            Event::PawnReachedPromotion { piece, position } => {
                write!(f, "{piece} on {position} awaits exchange")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{Color, PieceKind};

    #[test]
    fn events_describe_themselves() {
        let event = Event::PieceWasCaptured {
            piece: Piece::new(Color::Black, PieceKind::Queen),
            position: Coordinate::from_text("d5").expect("d5 should parse"),
        };
        assert_eq!(event.to_string(), "black queen was captured on d5");
    }
}
