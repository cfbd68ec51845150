//! The match aggregate.
//!
//! `Game` owns one board, the rule table, and everything that makes a
//! position a match: whose turn it is, who stands in check, castling
//! entitlements, the en passant window, a pending pawn exchange, and the
//! terminal result. All mutation funnels through [`Game::play_move`] and
//! [`Game::exchange`], both of which validate completely before touching
//! the board, so a refused request leaves the aggregate exactly as it was.

use crate::errors::{
    ActionError, CastlingImpediment, ChessResult, MovementError, OccupancyError, RuleSetError,
};
use crate::game_state::actions::Action;
use crate::game_state::board::Board;
use crate::game_state::check_inspection::{is_color_in_check, is_square_attacked};
use crate::game_state::chess_types::{
    CastlingEntitlements, CastlingSide, Color, Piece, PieceKind,
};
use crate::game_state::events::Event;
use crate::geometry::coordinate::Coordinate;
use crate::rules::rule_set::RuleSet;

/// What a committed request did: the resolved action plus every event it
/// raised, in the order they happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub action: Action,
    pub events: Vec<Event>,
}

/// A fully validated move, ready to apply. Everything that could be refused
/// has been refused before one of these exists.
#[derive(Debug, Clone, Copy)]
struct MovePlan {
    piece: Piece,
    source: Coordinate,
    destination: Coordinate,
    /// Captured piece and the square it leaves. The square differs from the
    /// destination only for en passant.
    capture: Option<(Coordinate, Piece)>,
    /// Rook relocation accompanying a castling king move.
    rook_relocation: Option<(Coordinate, Coordinate)>,
    /// Skipped square a pawn double step exposes for one turn.
    opens_en_passant: Option<Coordinate>,
    promotes: bool,
}

impl MovePlan {
    fn action(&self) -> Action {
        match self.capture {
            Some(_) => Action::Attack {
                piece: self.piece,
                source: self.source,
                destination: self.destination,
            },
            None => Action::Move {
                piece: self.piece,
                source: self.source,
                destination: self.destination,
            },
        }
    }
}

pub struct Game {
    board: Board,
    rules: RuleSet,
    turn: Color,
    checked: Option<Color>,
    ended: bool,
    winner: Option<Color>,
    entitlements: CastlingEntitlements,
    en_passant: Option<Coordinate>,
    pending_exchange: Option<Coordinate>,
}

impl Game {
    /// A fresh match: the standard starting position, white to move, every
    /// castling entitlement held.
    pub fn setup() -> ChessResult<Game> {
        Ok(Game {
            board: Board::starting_position()?,
            rules: RuleSet::standard()?,
            turn: Color::White,
            checked: None,
            ended: false,
            winner: None,
            entitlements: CastlingEntitlements::initial(),
            en_passant: None,
            pending_exchange: None,
        })
    }

    /// Rebuild an aggregate from stored position fields, re-deriving check,
    /// terminal status, and any pending pawn exchange from the board.
    pub fn from_position(
        board: Board,
        turn: Color,
        entitlements: CastlingEntitlements,
        en_passant: Option<Coordinate>,
    ) -> Result<Game, RuleSetError> {
        let mut game = Game {
            board,
            rules: RuleSet::standard()?,
            turn,
            checked: None,
            ended: false,
            winner: None,
            entitlements,
            en_passant,
            pending_exchange: None,
        };
        // A side to move with a pawn standing on its own last rank can only
        // have come from an interrupted promotion.
        game.pending_exchange = game.board.pieces().find_map(|(at, piece)| {
            (piece == Piece::new(turn, PieceKind::Pawn) && at.rank() == turn.promotion_rank())
                .then_some(at)
        });
        game.refresh_status();
        Ok(game)
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The color whose action is awaited.
    #[inline]
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// The color currently standing in check, if any.
    #[inline]
    pub fn checked(&self) -> Option<Color> {
        self.checked
    }

    #[inline]
    pub fn is_ended(&self) -> bool {
        self.ended
    }

    /// The winning color of an ended match; `None` while in progress and for
    /// a stalemate.
    #[inline]
    pub fn winner(&self) -> Option<Color> {
        self.winner
    }

    #[inline]
    pub fn entitlements(&self) -> CastlingEntitlements {
        self.entitlements
    }

    /// The square a pawn skipped last move, open for en passant capture.
    #[inline]
    pub fn en_passant_window(&self) -> Option<Coordinate> {
        self.en_passant
    }

    /// The square holding a pawn that must be exchanged before play resumes.
    #[inline]
    pub fn pending_exchange(&self) -> Option<Coordinate> {
        self.pending_exchange
    }

    /// Play one move for the color on turn.
    ///
    /// Validation runs in a fixed order: match state, source occupancy, turn
    /// ownership, movement shape and path, destination occupancy, then the
    /// self-check gate. Only a fully validated move mutates the board.
    pub fn play_move(&mut self, source: Coordinate, destination: Coordinate) -> ChessResult<Outcome> {
        self.verify_playable()?;
        let plan = self.resolve_for(self.turn, source, destination)?;
        let action = plan.action();
        let events = self.apply(plan)?;
        if self.pending_exchange.is_none() {
            self.finish_turn();
        }
        Ok(Outcome { action, events })
    }

    /// Replace the pawn awaiting promotion on `position` with a `kind` piece
    /// of its own color, completing the interrupted turn.
    pub fn exchange(&mut self, position: Coordinate, kind: PieceKind) -> ChessResult<Outcome> {
        if self.ended {
            return Err(ActionError::GameHasEnded.into());
        }
        let refusal = ActionError::ExchangeIsNotAllowed { position };
        match self.pending_exchange {
            Some(pending) if pending == position => {}
            _ => return Err(refusal.into()),
        }
        if matches!(kind, PieceKind::Pawn | PieceKind::King) {
            return Err(refusal.into());
        }
        let replacement = Piece::new(self.turn, kind);
        self.board.pick(position)?;
        self.board.place(replacement, position)?;
        self.pending_exchange = None;
        self.finish_turn();
        Ok(Outcome {
            action: Action::Exchange {
                piece: replacement,
                position,
            },
            events: Vec::new(),
        })
    }

    /// The hypothetical-move probe: judge `source` to `destination` for the
    /// color on turn without applying anything.
    pub fn probe(&self, source: Coordinate, destination: Coordinate) -> ChessResult<Action> {
        self.verify_playable()?;
        let plan = self.resolve_for(self.turn, source, destination)?;
        Ok(Action::CanMoveCheck {
            piece: plan.piece,
            source,
            destination,
        })
    }

    /// Whether [`Game::play_move`] would accept this pair right now.
    pub fn can_move(&self, source: Coordinate, destination: Coordinate) -> bool {
        self.probe(source, destination).is_ok()
    }

    fn verify_playable(&self) -> ChessResult<()> {
        if self.ended {
            return Err(ActionError::GameHasEnded.into());
        }
        if let Some(position) = self.pending_exchange {
            return Err(ActionError::ExchangeIsNotAllowed { position }.into());
        }
        Ok(())
    }

    /// Validate a move of `color` completely, producing the plan to apply.
    /// Pure with respect to the aggregate.
    fn resolve_for(
        &self,
        color: Color,
        source: Coordinate,
        destination: Coordinate,
    ) -> ChessResult<MovePlan> {
        let piece = self
            .board
            .piece_at(source)
            .ok_or(OccupancyError::SquareIsVacant(source))?;
        if piece.color != color {
            return Err(ActionError::ActionNotAllowed { color: piece.color }.into());
        }
        if source == destination {
            // The destination provably holds the mover's own piece.
            return Err(OccupancyError::MoveToOccupiedPosition(destination).into());
        }
        let (file_delta, rank_delta) = source.deltas_to(destination);
        let plan = if piece.kind == PieceKind::King
            && rank_delta == 0
            && file_delta.unsigned_abs() == 2
            && source.file() == 'e'
            && source.rank() == color.home_rank()
        {
            self.resolve_castling(piece, source, destination, file_delta)?
        } else if piece.kind == PieceKind::Pawn
            && self.en_passant == Some(destination)
            && file_delta.unsigned_abs() == 1
            && rank_delta == color.forward_step()
        {
            self.resolve_en_passant(piece, source, destination)?
        } else {
            self.resolve_standard(piece, source, destination)?
        };
        self.verify_king_safe_after(color, source, &plan)?;
        Ok(plan)
    }

    fn resolve_standard(
        &self,
        piece: Piece,
        source: Coordinate,
        destination: Coordinate,
    ) -> ChessResult<MovePlan> {
        self.rules.validate_move(&self.board, source, destination)?;
        let capture = match self.board.piece_at(destination) {
            Some(standing) if standing.color == piece.color => {
                return Err(OccupancyError::MoveToOccupiedPosition(destination).into());
            }
            Some(standing) => Some((destination, standing)),
            None => None,
        };
        let (_, rank_delta) = source.deltas_to(destination);
        let opens_en_passant = (piece.kind == PieceKind::Pawn && rank_delta.unsigned_abs() == 2)
            .then(|| Coordinate::from_indices(source.file_index(), (source.rank_index() as i8 + rank_delta / 2) as u8));
        Ok(MovePlan {
            piece,
            source,
            destination,
            capture,
            rook_relocation: None,
            opens_en_passant,
            promotes: piece.kind == PieceKind::Pawn
                && destination.rank() == piece.color.promotion_rank(),
        })
    }

    fn resolve_en_passant(
        &self,
        piece: Piece,
        source: Coordinate,
        destination: Coordinate,
    ) -> ChessResult<MovePlan> {
        let passed_square =
            Coordinate::from_indices(destination.file_index(), source.rank_index());
        let passed = self
            .board
            .piece_at(passed_square)
            .ok_or(OccupancyError::SquareIsVacant(passed_square))?;
        // A loaded position may carry a window no double step produced.
        if passed.kind != PieceKind::Pawn || passed.color == piece.color {
            return Err(MovementError::ShapeNotAllowed {
                kind: PieceKind::Pawn,
                origin: source,
                destination,
            }
            .into());
        }
        Ok(MovePlan {
            piece,
            source,
            destination,
            capture: Some((passed_square, passed)),
            rook_relocation: None,
            opens_en_passant: None,
            promotes: false,
        })
    }

    fn resolve_castling(
        &self,
        piece: Piece,
        source: Coordinate,
        destination: Coordinate,
        file_delta: i8,
    ) -> ChessResult<MovePlan> {
        let color = piece.color;
        let side = if file_delta > 0 {
            CastlingSide::Kingside
        } else {
            CastlingSide::Queenside
        };
        let prevented = |impediment| ActionError::CastlingPrevented { impediment };
        let rook_home = home_corner(color, side);
        let entitled = self.entitlements.is_held(color, side)
            && self.board.piece_at(rook_home) == Some(Piece::new(color, PieceKind::Rook));
        if !entitled {
            return Err(prevented(CastlingImpediment::EntitlementRevoked).into());
        }
        let direction = source.direction_to(rook_home)?;
        if let Some(blocking) = self.board.first_piece_between(source, rook_home, direction)? {
            return Err(prevented(CastlingImpediment::PathOccupied(blocking)).into());
        }
        if self.checked == Some(color) {
            return Err(prevented(CastlingImpediment::KingInCheck).into());
        }
        let crossed = source.next_towards(destination, direction)?;
        for square in [crossed, destination] {
            if is_square_attacked(&self.board, &self.rules, square, color.opposite()) {
                return Err(prevented(CastlingImpediment::PassesThroughAttack(square)).into());
            }
        }
        Ok(MovePlan {
            piece,
            source,
            destination,
            capture: None,
            rook_relocation: Some((rook_home, crossed)),
            opens_en_passant: None,
            promotes: false,
        })
    }

    /// The self-check gate: refuse any plan whose board leaves the mover's
    /// own king attacked.
    fn verify_king_safe_after(
        &self,
        color: Color,
        source: Coordinate,
        plan: &MovePlan,
    ) -> ChessResult<()> {
        let mut scratch = self.board.clone();
        apply_to_board(&mut scratch, plan)?;
        if is_color_in_check(&scratch, &self.rules, color) {
            Err(ActionError::MoveExposesToCheck {
                color,
                origin: source,
            }
            .into())
        } else {
            Ok(())
        }
    }

    fn apply(&mut self, plan: MovePlan) -> ChessResult<Vec<Event>> {
        let mut events = Vec::new();
        if let Some((position, captured)) = plan.capture {
            events.push(Event::PieceWasCaptured {
                piece: captured,
                position,
            });
        }
        apply_to_board(&mut self.board, &plan)?;
        self.update_entitlements(&plan);
        self.en_passant = plan.opens_en_passant;
        if plan.promotes {
            self.pending_exchange = Some(plan.destination);
            events.push(Event::PawnReachedPromotion {
                piece: plan.piece,
                position: plan.destination,
            });
        }
        Ok(events)
    }

    fn update_entitlements(&mut self, plan: &MovePlan) {
        let color = plan.piece.color;
        match plan.piece.kind {
            PieceKind::King => self.entitlements.revoke_color(color),
            PieceKind::Rook => {
                for side in [CastlingSide::Kingside, CastlingSide::Queenside] {
                    if plan.source == home_corner(color, side) {
                        self.entitlements.revoke(color, side);
                    }
                }
            }
            _ => {}
        }
        if let Some((position, captured)) = plan.capture {
            for side in [CastlingSide::Kingside, CastlingSide::Queenside] {
                if position == home_corner(captured.color, side) {
                    self.entitlements.revoke(captured.color, side);
                }
            }
        }
    }

    /// Steps run once a turn is complete: re-evaluate check, detect the
    /// terminal states, and hand the turn over.
    fn finish_turn(&mut self) {
        let mover = self.turn;
        let next = mover.opposite();
        self.checked = is_color_in_check(&self.board, &self.rules, next).then_some(next);
        if self.has_any_legal_move(next) {
            self.turn = next;
        } else {
            self.ended = true;
            self.winner = self.checked.map(|_| mover);
        }
    }

    /// Status derivation for a freshly loaded position: the side to move may
    /// itself stand in check, mated, or stalemated.
    fn refresh_status(&mut self) {
        let turn = self.turn;
        let opponent = turn.opposite();
        self.checked = if is_color_in_check(&self.board, &self.rules, turn) {
            Some(turn)
        } else if is_color_in_check(&self.board, &self.rules, opponent) {
            Some(opponent)
        } else {
            None
        };
        if self.pending_exchange.is_none() && !self.has_any_legal_move(turn) {
            self.ended = true;
            self.winner = (self.checked == Some(turn)).then_some(opponent);
        }
    }

    /// Whether `color` has any move the full pipeline would accept.
    fn has_any_legal_move(&self, color: Color) -> bool {
        let sources: Vec<Coordinate> = self
            .board
            .pieces()
            .filter(|(_, piece)| piece.color == color)
            .map(|(at, _)| at)
            .collect();
        sources.into_iter().any(|source| {
            Coordinate::all()
                .any(|destination| self.resolve_for(color, source, destination).is_ok())
        })
    }
}

impl std::fmt::Debug for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("turn", &self.turn)
            .field("checked", &self.checked)
            .field("ended", &self.ended)
            .field("winner", &self.winner)
            .field("en_passant", &self.en_passant)
            .field("pending_exchange", &self.pending_exchange)
            .field("board", &self.board)
            .finish()
    }
}

fn apply_to_board(board: &mut Board, plan: &MovePlan) -> ChessResult<()> {
    if let Some((position, _)) = plan.capture {
        board.pick(position)?;
    }
    let piece = board.pick(plan.source)?;
    board.place(piece, plan.destination)?;
    if let Some((rook_from, rook_to)) = plan.rook_relocation {
        let rook = board.pick(rook_from)?;
        board.place(rook, rook_to)?;
    }
    Ok(())
}

fn home_corner(color: Color, side: CastlingSide) -> Coordinate {
    let file_index = match side {
        CastlingSide::Kingside => 7,
        CastlingSide::Queenside => 0,
    };
    Coordinate::from_indices(file_index, color.home_rank() - 1)
}
