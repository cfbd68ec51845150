//! Board coordinates and their algebraic text form.
//!
//! A `Coordinate` identifies one square of the 8×8 board as a (file, rank)
//! pair and is the only square identity used across the crate. Construction
//! is bounds-checked; the zero-based indices used for storage and geometry
//! arithmetic stay crate-internal.

use std::fmt;
use std::str::FromStr;

use crate::errors::GeometryError;

/// One square of the board, file `a..=h` and rank `1..=8`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Coordinate {
    file_index: u8,
    rank_index: u8,
}

impl Coordinate {
    /// Build a coordinate from a file letter and a one-based rank number.
    pub fn from_file_and_rank(file: char, rank: u8) -> Result<Self, GeometryError> {
        if !('a'..='h').contains(&file) || !(1..=8).contains(&rank) {
            return Err(GeometryError::OutOfBoard { file, rank });
        }
        Ok(Self {
            file_index: file as u8 - b'a',
            rank_index: rank - 1,
        })
    }

    /// Parse algebraic text (for example: "e4").
    pub fn from_text(text: &str) -> Result<Self, GeometryError> {
        let bytes = text.as_bytes();
        if bytes.len() != 2
            || !bytes[0].is_ascii_lowercase()
            || !bytes[1].is_ascii_digit()
            || bytes[1] == b'0'
        {
            return Err(GeometryError::MalformedCoordinate {
                text: text.to_owned(),
            });
        }
        Self::from_file_and_rank(bytes[0] as char, bytes[1] - b'0')
    }

    /// File letter, `'a'..='h'`.
    #[inline]
    pub fn file(self) -> char {
        char::from(b'a' + self.file_index)
    }

    /// Rank number, `1..=8`.
    #[inline]
    pub fn rank(self) -> u8 {
        self.rank_index + 1
    }

    #[inline]
    pub(crate) fn file_index(self) -> u8 {
        self.file_index
    }

    #[inline]
    pub(crate) fn rank_index(self) -> u8 {
        self.rank_index
    }

    // Callers must pass indices in 0..=7.
    #[inline]
    pub(crate) const fn from_indices(file_index: u8, rank_index: u8) -> Self {
        debug_assert!(file_index < 8 && rank_index < 8);
        Self {
            file_index,
            rank_index,
        }
    }

    /// The neighbouring coordinate at the given file/rank offset, or `None`
    /// when the offset leaves the board.
    pub fn offset(self, file_delta: i8, rank_delta: i8) -> Option<Self> {
        let file = self.file_index as i8 + file_delta;
        let rank = self.rank_index as i8 + rank_delta;
        if (0..8).contains(&file) && (0..8).contains(&rank) {
            Some(Self::from_indices(file as u8, rank as u8))
        } else {
            None
        }
    }

    /// Every coordinate of the board, a1, b1, .. h8.
    pub fn all() -> impl Iterator<Item = Coordinate> {
        (0u8..64).map(|square| Self::from_indices(square % 8, square / 8))
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file(), self.rank())
    }
}

impl FromStr for Coordinate {
    type Err = GeometryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_text(s)
    }
}
