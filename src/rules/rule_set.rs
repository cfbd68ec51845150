//! The movement rule dispatch table.
//!
//! A `RuleSet` holds exactly one [`MovementRule`] per piece kind.
//! Construction is all-or-nothing, a table missing a kind or registering a
//! kind twice is refused, so dispatch at play time can only fail if a
//! caller assembled a table by other means.

use std::fmt;

use crate::errors::{ActionError, ChessResult, OccupancyError, RuleSetError};
use crate::game_state::board::Board;
use crate::game_state::chess_types::PieceKind;
use crate::geometry::coordinate::Coordinate;
use crate::rules::bishop_rule::BishopRule;
use crate::rules::king_rule::KingRule;
use crate::rules::knight_rule::KnightRule;
use crate::rules::movement_rule::MovementRule;
use crate::rules::pawn_rule::PawnRule;
use crate::rules::queen_rule::QueenRule;
use crate::rules::rook_rule::RookRule;

pub struct RuleSet {
    rules: [Option<Box<dyn MovementRule>>; 6],
}

impl RuleSet {
    /// Assemble a table from one rule per kind, in any order.
    pub fn new(rules: Vec<Box<dyn MovementRule>>) -> Result<RuleSet, RuleSetError> {
        let mut table: [Option<Box<dyn MovementRule>>; 6] = std::array::from_fn(|_| None);
        for rule in rules {
            let kind = rule.kind();
            let slot = &mut table[kind.index()];
            if slot.is_some() {
                return Err(RuleSetError::DuplicateRule { kind });
            }
            *slot = Some(rule);
        }
        let missing: Vec<PieceKind> = PieceKind::ALL
            .into_iter()
            .filter(|kind| table[kind.index()].is_none())
            .collect();
        if missing.is_empty() {
            Ok(RuleSet { rules: table })
        } else {
            Err(RuleSetError::IncompleteRules { missing })
        }
    }

    /// The six standard rules.
    pub fn standard() -> Result<RuleSet, RuleSetError> {
        RuleSet::new(vec![
            Box::new(PawnRule),
            Box::new(KnightRule),
            Box::new(BishopRule),
            Box::new(RookRule),
            Box::new(QueenRule),
            Box::new(KingRule),
        ])
    }

    /// Judge the move of the piece standing on `source` against the rule
    /// registered for its kind.
    pub fn validate_move(
        &self,
        board: &Board,
        source: Coordinate,
        destination: Coordinate,
    ) -> ChessResult<()> {
        let piece = board
            .piece_at(source)
            .ok_or(OccupancyError::SquareIsVacant(source))?;
        let rule = self.rules[piece.kind.index()]
            .as_deref()
            .ok_or(ActionError::MissingRule { kind: piece.kind })?;
        rule.validate(piece.color, source, destination, board)
    }
}

impl fmt::Debug for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let registered: Vec<PieceKind> = PieceKind::ALL
            .into_iter()
            .filter(|kind| self.rules[kind.index()].is_some())
            .collect();
        f.debug_struct("RuleSet")
            .field("registered", &registered)
            .finish()
    }
}
