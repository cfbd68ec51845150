//! The 8×8 occupancy grid.
//!
//! `Board` tracks which piece stands on which square and nothing else. It
//! refuses to stack pieces and to pick from vacant squares, but it has no
//! notion of movement legality, turns, or match state. Those live in the
//! rules and in [`Game`](crate::game_state::game::Game).

use crate::errors::{GeometryError, OccupancyError};
use crate::game_state::chess_types::{Color, Piece, PieceKind};
use crate::geometry::coordinate::Coordinate;
use crate::geometry::direction::Direction;

const SQUARE_COUNT: usize = 64;

#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    squares: [Option<Piece>; SQUARE_COUNT],
}

impl Board {
    /// A board with every square vacant.
    pub fn empty() -> Board {
        Board {
            squares: [None; SQUARE_COUNT],
        }
    }

    /// The standard starting arrangement of all thirty-two pieces.
    pub fn starting_position() -> Result<Board, OccupancyError> {
        const BACK_RANK: [PieceKind; 8] = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        let mut board = Board::empty();
        for (file_index, kind) in BACK_RANK.into_iter().enumerate() {
            let file_index = file_index as u8;
            board.place(
                Piece::new(Color::White, kind),
                Coordinate::from_indices(file_index, 0),
            )?;
            board.place(
                Piece::new(Color::White, PieceKind::Pawn),
                Coordinate::from_indices(file_index, 1),
            )?;
            board.place(
                Piece::new(Color::Black, PieceKind::Pawn),
                Coordinate::from_indices(file_index, 6),
            )?;
            board.place(
                Piece::new(Color::Black, kind),
                Coordinate::from_indices(file_index, 7),
            )?;
        }
        Ok(board)
    }

    #[inline]
    fn slot(at: Coordinate) -> usize {
        at.rank_index() as usize * 8 + at.file_index() as usize
    }

    /// The piece standing on `at`, if any.
    #[inline]
    pub fn piece_at(&self, at: Coordinate) -> Option<Piece> {
        self.squares[Self::slot(at)]
    }

    /// Put `piece` down on the vacant square `at`.
    pub fn place(&mut self, piece: Piece, at: Coordinate) -> Result<(), OccupancyError> {
        let slot = &mut self.squares[Self::slot(at)];
        if slot.is_some() {
            return Err(OccupancyError::SquareIsOccupied(at));
        }
        *slot = Some(piece);
        Ok(())
    }

    /// Lift the piece standing on `at` off the board.
    pub fn pick(&mut self, at: Coordinate) -> Result<Piece, OccupancyError> {
        self.squares[Self::slot(at)]
            .take()
            .ok_or(OccupancyError::SquareIsVacant(at))
    }

    /// Confirm that `at` is vacant.
    pub fn verify_unoccupied(&self, at: Coordinate) -> Result<(), OccupancyError> {
        match self.piece_at(at) {
            Some(_) => Err(OccupancyError::SquareIsOccupied(at)),
            None => Ok(()),
        }
    }

    /// The first occupied square strictly between `source` and `destination`
    /// along `direction`, walking from the source side.
    pub fn first_piece_between(
        &self,
        source: Coordinate,
        destination: Coordinate,
        direction: Direction,
    ) -> Result<Option<Coordinate>, GeometryError> {
        let mut cursor = source.next_towards(destination, direction)?;
        while cursor != destination {
            if self.piece_at(cursor).is_some() {
                return Ok(Some(cursor));
            }
            cursor = cursor.next_towards(destination, direction)?;
        }
        Ok(None)
    }

    /// Every occupied square together with the piece standing on it.
    pub fn pieces(&self) -> impl Iterator<Item = (Coordinate, Piece)> + '_ {
        Coordinate::all().filter_map(|at| self.piece_at(at).map(|piece| (at, piece)))
    }

    /// The square holding the given piece, scanning from a1.
    pub fn locate(&self, piece: Piece) -> Option<Coordinate> {
        self.pieces()
            .find(|(_, standing)| *standing == piece)
            .map(|(at, _)| at)
    }
}

impl std::fmt::Debug for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut entries = f.debug_map();
        for (at, piece) in self.pieces() {
            entries.entry(&format_args!("{at}"), &format_args!("{piece}"));
        }
        entries.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(text: &str) -> Coordinate {
        Coordinate::from_text(text).expect("test coordinate should parse")
    }

    #[test]
    fn placing_on_an_occupied_square_is_refused() {
        let mut board = Board::empty();
        let rook = Piece::new(Color::White, PieceKind::Rook);
        board.place(rook, at("d4")).expect("d4 starts vacant");
        assert_eq!(
            board.place(rook, at("d4")),
            Err(OccupancyError::SquareIsOccupied(at("d4")))
        );
        assert_eq!(board.piece_at(at("d4")), Some(rook));
    }

    #[test]
    fn picking_from_a_vacant_square_is_refused() {
        let mut board = Board::empty();
        assert_eq!(
            board.pick(at("b6")),
            Err(OccupancyError::SquareIsVacant(at("b6")))
        );
        let knight = Piece::new(Color::Black, PieceKind::Knight);
        board.place(knight, at("b6")).expect("b6 starts vacant");
        assert_eq!(board.pick(at("b6")), Ok(knight));
        assert_eq!(board.piece_at(at("b6")), None);
    }

    #[test]
    fn starting_position_covers_four_ranks() {
        let board = Board::starting_position().expect("starting position should assemble");
        assert_eq!(board.pieces().count(), 32);
        assert_eq!(
            board.piece_at(at("e1")),
            Some(Piece::new(Color::White, PieceKind::King))
        );
        assert_eq!(
            board.piece_at(at("d8")),
            Some(Piece::new(Color::Black, PieceKind::Queen))
        );
        assert_eq!(
            board.piece_at(at("a7")),
            Some(Piece::new(Color::Black, PieceKind::Pawn))
        );
        assert_eq!(board.piece_at(at("e4")), None);
        for file in 'a'..='h' {
            let pawn = Coordinate::from_file_and_rank(file, 2).expect("rank 2 exists");
            assert_eq!(
                board.piece_at(pawn),
                Some(Piece::new(Color::White, PieceKind::Pawn))
            );
        }
    }

    #[test]
    fn first_obstruction_is_reported_from_the_source_side() {
        let mut board = Board::empty();
        let pawn = Piece::new(Color::White, PieceKind::Pawn);
        board.place(pawn, at("a3")).expect("a3 starts vacant");
        board.place(pawn, at("a5")).expect("a5 starts vacant");
        assert_eq!(
            board.first_piece_between(at("a1"), at("a8"), Direction::AlongFile),
            Ok(Some(at("a3")))
        );
        assert_eq!(
            board.first_piece_between(at("a8"), at("a1"), Direction::AlongFile),
            Ok(Some(at("a5")))
        );
    }

    #[test]
    fn adjacent_squares_have_nothing_between_them() {
        let board = Board::starting_position().expect("starting position should assemble");
        assert_eq!(
            board.first_piece_between(at("e1"), at("e2"), Direction::AlongFile),
            Ok(None)
        );
    }

    #[test]
    fn occupied_endpoints_do_not_count_as_obstructions() {
        let mut board = Board::empty();
        board
            .place(Piece::new(Color::White, PieceKind::Rook), at("c1"))
            .expect("c1 starts vacant");
        board
            .place(Piece::new(Color::Black, PieceKind::Rook), at("c8"))
            .expect("c8 starts vacant");
        assert_eq!(
            board.first_piece_between(at("c1"), at("c8"), Direction::AlongFile),
            Ok(None)
        );
    }

    #[test]
    fn locate_finds_the_first_matching_piece() {
        let mut board = Board::empty();
        let king = Piece::new(Color::Black, PieceKind::King);
        assert_eq!(board.locate(king), None);
        board.place(king, at("g7")).expect("g7 starts vacant");
        assert_eq!(board.locate(king), Some(at("g7")));
    }
}
