//! Straight-line relationships between coordinates.
//!
//! Sliding movement is validated by walking a line one square at a time.
//! `Direction` names the three line families of the board and the
//! `Coordinate` methods in this module classify a pair of squares, step
//! along the line joining them, and report how many steps that takes.

use crate::errors::GeometryError;
use crate::geometry::coordinate::Coordinate;

/// The line family joining two aligned coordinates.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Same file, differing ranks.
    AlongFile,
    /// Same rank, differing files.
    AlongRank,
    /// File and rank change by the same amount.
    AlongDiagonal,
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Direction::AlongFile => "along a file",
            Direction::AlongRank => "along a rank",
            Direction::AlongDiagonal => "along a diagonal",
        };
        write!(f, "{text}")
    }
}

impl Coordinate {
    #[inline]
    pub(crate) fn deltas_to(self, other: Coordinate) -> (i8, i8) {
        (
            other.file_index() as i8 - self.file_index() as i8,
            other.rank_index() as i8 - self.rank_index() as i8,
        )
    }

    /// Classify the line from `self` to `other`.
    ///
    /// Diagonal classification wins when both components move equally, so a
    /// square relates to itself along a diagonal. Pairs joined by no straight
    /// line (knight offsets and the like) have no direction.
    pub fn direction_to(self, other: Coordinate) -> Result<Direction, GeometryError> {
        let (file_delta, rank_delta) = self.deltas_to(other);
        if file_delta.abs() == rank_delta.abs() {
            Ok(Direction::AlongDiagonal)
        } else if rank_delta == 0 {
            Ok(Direction::AlongRank)
        } else if file_delta == 0 {
            Ok(Direction::AlongFile)
        } else {
            Err(GeometryError::UnknownDirection {
                from: self,
                to: other,
            })
        }
    }

    /// The next coordinate one step from `self` towards `destination` along
    /// `direction`.
    ///
    /// Repeated application converges on `destination` in exactly
    /// `distance_to` steps. Fails when the two squares do not lie on a common
    /// line of the given direction.
    pub fn next_towards(
        self,
        destination: Coordinate,
        direction: Direction,
    ) -> Result<Coordinate, GeometryError> {
        let (file_delta, rank_delta) = self.verify_reachable(destination, direction)?;
        let file = (self.file_index() as i8 + file_delta.signum()) as u8;
        let rank = (self.rank_index() as i8 + rank_delta.signum()) as u8;
        Ok(Coordinate::from_indices(file, rank))
    }

    /// Number of single-square steps from `self` to `destination` along
    /// `direction`.
    pub fn distance_to(
        self,
        destination: Coordinate,
        direction: Direction,
    ) -> Result<u8, GeometryError> {
        let (file_delta, rank_delta) = self.verify_reachable(destination, direction)?;
        let steps = match direction {
            Direction::AlongFile => rank_delta.abs(),
            Direction::AlongRank | Direction::AlongDiagonal => file_delta.abs(),
        };
        Ok(steps as u8)
    }

    fn verify_reachable(
        self,
        destination: Coordinate,
        direction: Direction,
    ) -> Result<(i8, i8), GeometryError> {
        let (file_delta, rank_delta) = self.deltas_to(destination);
        let aligned = match direction {
            Direction::AlongFile => file_delta == 0,
            Direction::AlongRank => rank_delta == 0,
            Direction::AlongDiagonal => file_delta.abs() == rank_delta.abs(),
        };
        if aligned {
            Ok((file_delta, rank_delta))
        } else {
            Err(GeometryError::CoordinatesNotReachable {
                from: self,
                to: destination,
                direction,
            })
        }
    }
}
