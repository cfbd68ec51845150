//! Attack detection over a board snapshot.
//!
//! A square is attacked when some piece of the attacking color could
//! capture on it right now. For every kind but the pawn that is exactly
//! the movement rule's judgement. Pawns move and capture along different
//! lines, so their threat is the single forward diagonal step regardless
//! of what stands on the target.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Piece, PieceKind};
use crate::geometry::coordinate::Coordinate;
use crate::rules::rule_set::RuleSet;

/// Whether the king of `color` currently stands attacked. A board with no
/// such king is never in check.
pub fn is_color_in_check(board: &Board, rules: &RuleSet, color: Color) -> bool {
    match board.locate(Piece::new(color, PieceKind::King)) {
        Some(king_at) => is_square_attacked(board, rules, king_at, color.opposite()),
        None => false,
    }
}

/// Whether any piece of `by` has a capturing line to `target`.
pub fn is_square_attacked(board: &Board, rules: &RuleSet, target: Coordinate, by: Color) -> bool {
    board
        .pieces()
        .filter(|(_, piece)| piece.color == by)
        .any(|(source, piece)| threatens(board, rules, source, piece, target))
}

fn threatens(
    board: &Board,
    rules: &RuleSet,
    source: Coordinate,
    piece: Piece,
    target: Coordinate,
) -> bool {
    if source == target {
        return false;
    }
    if piece.kind == PieceKind::Pawn {
        let (file_delta, rank_delta) = source.deltas_to(target);
        return file_delta.abs() == 1 && rank_delta == piece.color.forward_step();
    }
    rules.validate_move(board, source, target).is_ok()
}
