//! Core piece and color types shared across the crate.

use std::fmt;

/// The two sides of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// The opposing color.
    #[inline]
    pub const fn opposite(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Rank delta of one forward pawn step, +1 for white and -1 for black.
    #[inline]
    pub const fn forward_step(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Rank where this color's pawns start.
    #[inline]
    pub const fn initial_pawn_rank(self) -> u8 {
        match self {
            Color::White => 2,
            Color::Black => 7,
        }
    }

    /// Rank where this color's pawns are exchanged.
    #[inline]
    pub const fn promotion_rank(self) -> u8 {
        match self {
            Color::White => 8,
            Color::Black => 1,
        }
    }

    /// Rank holding this color's king and rooks before they first move.
    #[inline]
    pub const fn home_rank(self) -> u8 {
        match self {
            Color::White => 1,
            Color::Black => 8,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

/// The six piece kinds of the standard game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Stable index used for per-kind lookup tables.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }

    /// Lower-case letter used in move text and position records.
    #[inline]
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    /// Inverse of [`PieceKind::letter`], case-insensitive.
    pub fn from_letter(letter: char) -> Option<PieceKind> {
        match letter.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PieceKind::Pawn => "pawn",
            PieceKind::Knight => "knight",
            PieceKind::Bishop => "bishop",
            PieceKind::Rook => "rook",
            PieceKind::Queen => "queen",
            PieceKind::King => "king",
        };
        write!(f, "{name}")
    }
}

/// A piece as it stands on the board, a kind owned by a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Piece {
        Piece { color, kind }
    }

    /// Letter used in position records, upper-case for white.
    #[inline]
    pub fn record_letter(self) -> char {
        match self.color {
            Color::White => self.kind.letter().to_ascii_uppercase(),
            Color::Black => self.kind.letter(),
        }
    }

    /// Inverse of [`Piece::record_letter`].
    pub fn from_record_letter(letter: char) -> Option<Piece> {
        let kind = PieceKind::from_letter(letter)?;
        let color = if letter.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(Piece::new(color, kind))
    }

    /// Unicode figurine used by the board renderer.
    pub fn glyph(self) -> char {
        match (self.color, self.kind) {
            (Color::White, PieceKind::Pawn) => '♙',
            (Color::White, PieceKind::Knight) => '♘',
            (Color::White, PieceKind::Bishop) => '♗',
            (Color::White, PieceKind::Rook) => '♖',
            (Color::White, PieceKind::Queen) => '♕',
            (Color::White, PieceKind::King) => '♔',
            (Color::Black, PieceKind::Pawn) => '♟',
            (Color::Black, PieceKind::Knight) => '♞',
            (Color::Black, PieceKind::Bishop) => '♝',
            (Color::Black, PieceKind::Rook) => '♜',
            (Color::Black, PieceKind::Queen) => '♛',
            (Color::Black, PieceKind::King) => '♚',
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.color, self.kind)
    }
}

/// The board wing a castling move happens on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastlingSide {
    Kingside,
    Queenside,
}

/// Which castling moves each color is still entitled to play.
///
/// An entitlement is lost forever once the king moves, once the matching
/// rook leaves its home corner, or once the home corner is captured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastlingEntitlements {
    pub white_kingside: bool,
    pub white_queenside: bool,
    pub black_kingside: bool,
    pub black_queenside: bool,
}

impl CastlingEntitlements {
    /// All four entitlements held, the state of a fresh match.
    pub const fn initial() -> CastlingEntitlements {
        CastlingEntitlements {
            white_kingside: true,
            white_queenside: true,
            black_kingside: true,
            black_queenside: true,
        }
    }

    /// No entitlement held, the default for ad-hoc positions.
    pub const fn none() -> CastlingEntitlements {
        CastlingEntitlements {
            white_kingside: false,
            white_queenside: false,
            black_kingside: false,
            black_queenside: false,
        }
    }

    #[inline]
    pub fn is_held(&self, color: Color, side: CastlingSide) -> bool {
        match (color, side) {
            (Color::White, CastlingSide::Kingside) => self.white_kingside,
            (Color::White, CastlingSide::Queenside) => self.white_queenside,
            (Color::Black, CastlingSide::Kingside) => self.black_kingside,
            (Color::Black, CastlingSide::Queenside) => self.black_queenside,
        }
    }

    pub fn revoke(&mut self, color: Color, side: CastlingSide) {
        match (color, side) {
            (Color::White, CastlingSide::Kingside) => self.white_kingside = false,
            (Color::White, CastlingSide::Queenside) => self.white_queenside = false,
            (Color::Black, CastlingSide::Kingside) => self.black_kingside = false,
            (Color::Black, CastlingSide::Queenside) => self.black_queenside = false,
        }
    }

    pub fn revoke_color(&mut self, color: Color) {
        self.revoke(color, CastlingSide::Kingside);
        self.revoke(color, CastlingSide::Queenside);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colors_oppose_each_other() {
        assert_eq!(Color::White.opposite(), Color::Black);
        assert_eq!(Color::Black.opposite(), Color::White);
        assert_eq!(Color::White.opposite().opposite(), Color::White);
    }

    #[test]
    fn pawn_geometry_constants_mirror_between_colors() {
        assert_eq!(Color::White.forward_step(), 1);
        assert_eq!(Color::Black.forward_step(), -1);
        assert_eq!(Color::White.initial_pawn_rank(), 2);
        assert_eq!(Color::Black.initial_pawn_rank(), 7);
        assert_eq!(Color::White.promotion_rank(), Color::Black.home_rank());
        assert_eq!(Color::Black.promotion_rank(), Color::White.home_rank());
    }

    #[test]
    fn kind_letters_round_trip() {
        for kind in PieceKind::ALL {
            assert_eq!(PieceKind::from_letter(kind.letter()), Some(kind));
            assert_eq!(
                PieceKind::from_letter(kind.letter().to_ascii_uppercase()),
                Some(kind)
            );
        }
        assert_eq!(PieceKind::from_letter('x'), None);
    }

    #[test]
    fn record_letters_carry_color_in_their_case() {
        let white_knight = Piece::new(Color::White, PieceKind::Knight);
        let black_queen = Piece::new(Color::Black, PieceKind::Queen);
        assert_eq!(white_knight.record_letter(), 'N');
        assert_eq!(black_queen.record_letter(), 'q');
        assert_eq!(Piece::from_record_letter('N'), Some(white_knight));
        assert_eq!(Piece::from_record_letter('q'), Some(black_queen));
        assert_eq!(Piece::from_record_letter('7'), None);
    }

    #[test]
    fn kind_indices_cover_the_lookup_table() {
        let mut seen = [false; 6];
        for kind in PieceKind::ALL {
            assert!(!seen[kind.index()]);
            seen[kind.index()] = true;
        }
        assert!(seen.iter().all(|slot| *slot));
    }

    #[test]
    fn entitlements_revoke_individually_and_by_color() {
        let mut entitlements = CastlingEntitlements::initial();
        entitlements.revoke(Color::White, CastlingSide::Queenside);
        assert!(entitlements.is_held(Color::White, CastlingSide::Kingside));
        assert!(!entitlements.is_held(Color::White, CastlingSide::Queenside));
        entitlements.revoke_color(Color::Black);
        assert!(!entitlements.is_held(Color::Black, CastlingSide::Kingside));
        assert!(!entitlements.is_held(Color::Black, CastlingSide::Queenside));
        assert_ne!(entitlements, CastlingEntitlements::none());
    }
}
