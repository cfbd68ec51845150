//! Error types for every way a request can be refused.
//!
//! Each family covers one layer of the validation pipeline, from raw
//! geometry up to match-level rules, and every variant carries the
//! coordinates or pieces needed to explain the refusal. A rejected request
//! never mutates any state, so callers may retry freely after any of these.

use thiserror::Error;

use crate::game_state::chess_types::{Color, PieceKind};
use crate::geometry::coordinate::Coordinate;
use crate::geometry::direction::Direction;

/// Shorthand for results carrying the crate-wide error.
pub type ChessResult<T> = Result<T, ChessError>;

/// Coordinate construction and line arithmetic failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeometryError {
    #[error("coordinate {file}{rank} lies outside the board")]
    OutOfBoard { file: char, rank: u8 },
    #[error("malformed coordinate text {text:?}")]
    MalformedCoordinate { text: String },
    #[error("no straight line joins {from} and {to}")]
    UnknownDirection { from: Coordinate, to: Coordinate },
    #[error("{to} is not reachable from {from} {direction}")]
    CoordinatesNotReachable {
        from: Coordinate,
        to: Coordinate,
        direction: Direction,
    },
}

/// Square occupancy failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OccupancyError {
    #[error("square {0} is already occupied")]
    SquareIsOccupied(Coordinate),
    #[error("square {0} is vacant")]
    SquareIsVacant(Coordinate),
    #[error("destination {0} is held by a piece of the moving color")]
    MoveToOccupiedPosition(Coordinate),
}

/// Piece movement rule failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MovementError {
    #[error("a {kind} may not move {direction}")]
    DirectionNotAllowed { kind: PieceKind, direction: Direction },
    #[error("a {kind} may not travel {distance} squares")]
    TooDistant { kind: PieceKind, distance: u8 },
    #[error("no {kind} move leads from {origin} to {destination}")]
    ShapeNotAllowed {
        kind: PieceKind,
        // Not named `source`: thiserror reserves that name for error chaining.
        origin: Coordinate,
        destination: Coordinate,
    },
    #[error("move passes over the piece standing on {blocking}")]
    MoveOverInterveningPiece { blocking: Coordinate },
}

/// The concrete precondition a refused castling request failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CastlingImpediment {
    EntitlementRevoked,
    PathOccupied(Coordinate),
    KingInCheck,
    PassesThroughAttack(Coordinate),
}

impl std::fmt::Display for CastlingImpediment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CastlingImpediment::EntitlementRevoked => {
                write!(f, "the entitlement has been revoked")
            }
            CastlingImpediment::PathOccupied(at) => {
                write!(f, "the path is occupied at {at}")
            }
            CastlingImpediment::KingInCheck => write!(f, "the king is in check"),
            CastlingImpediment::PassesThroughAttack(at) => {
                write!(f, "the king would pass through the attacked square {at}")
            }
        }
    }
}

/// Match-level failures of an otherwise well-formed request.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ActionError {
    #[error("it is not {color}'s turn to act")]
    ActionNotAllowed { color: Color },
    #[error("moving from {origin} would leave the {color} king in check")]
    MoveExposesToCheck { color: Color, origin: Coordinate },
    #[error("castling is prevented: {impediment}")]
    CastlingPrevented { impediment: CastlingImpediment },
    #[error("no pawn exchange may be performed at {position}")]
    ExchangeIsNotAllowed { position: Coordinate },
    #[error("the game has already ended")]
    GameHasEnded,
    #[error("no movement rule is registered for the {kind}")]
    MissingRule { kind: PieceKind },
}

/// Rule table construction failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuleSetError {
    #[error("rule set lacks movement rules for {missing:?}")]
    IncompleteRules { missing: Vec<PieceKind> },
    #[error("a movement rule for the {kind} is registered twice")]
    DuplicateRule { kind: PieceKind },
}

/// Position record parsing failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    #[error("position record is missing its {field} field")]
    MissingField { field: &'static str },
    #[error("position record has an invalid {field} field: {value:?}")]
    InvalidField { field: &'static str, value: String },
    #[error("position record carries trailing input: {trailing:?}")]
    TrailingInput { trailing: String },
}

/// Umbrella error uniting every family the engine can refuse with.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),
    #[error(transparent)]
    Occupancy(#[from] OccupancyError),
    #[error(transparent)]
    Movement(#[from] MovementError),
    #[error(transparent)]
    Action(#[from] ActionError),
    #[error(transparent)]
    RuleSet(#[from] RuleSetError),
    #[error(transparent)]
    Fen(#[from] FenError),
}
