//! Long-algebraic move text.
//!
//! `"e2e4"` names a source and destination square; an optional fifth letter
//! (`"a7a8q"`) names the exchange kind for a promoting push, so a driver
//! can submit move and exchange as one token.

use std::fmt;

use crate::errors::GeometryError;
use crate::game_state::chess_types::PieceKind;
use crate::geometry::coordinate::Coordinate;

/// One parsed move token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveText {
    pub source: Coordinate,
    pub destination: Coordinate,
    pub exchange_kind: Option<PieceKind>,
}

pub fn parse_long_algebraic(text: &str) -> Result<MoveText, GeometryError> {
    let malformed = || GeometryError::MalformedCoordinate {
        text: text.to_owned(),
    };
    if !text.is_ascii() || (text.len() != 4 && text.len() != 5) {
        return Err(malformed());
    }
    let source = Coordinate::from_text(&text[0..2])?;
    let destination = Coordinate::from_text(&text[2..4])?;
    let exchange_kind = match text.chars().nth(4) {
        None => None,
        Some(letter) => match PieceKind::from_letter(letter) {
            Some(kind) if !matches!(kind, PieceKind::Pawn | PieceKind::King) => Some(kind),
            _ => return Err(malformed()),
        },
    };
    Ok(MoveText {
        source,
        destination,
        exchange_kind,
    })
}

impl fmt::Display for MoveText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.source, self.destination)?;
        if let Some(kind) = self.exchange_kind {
            write!(f, "{}", kind.letter())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(text: &str) -> Coordinate {
        Coordinate::from_text(text).expect("test coordinate should parse")
    }

    #[test]
    fn plain_moves_parse_and_print() {
        let parsed = parse_long_algebraic("e2e4").expect("e2e4 should parse");
        assert_eq!(
            parsed,
            MoveText {
                source: at("e2"),
                destination: at("e4"),
                exchange_kind: None,
            }
        );
        assert_eq!(parsed.to_string(), "e2e4");
    }

    #[test]
    fn the_fifth_letter_names_the_exchange_kind() {
        let parsed = parse_long_algebraic("a7a8q").expect("a7a8q should parse");
        assert_eq!(parsed.exchange_kind, Some(PieceKind::Queen));
        assert_eq!(parsed.to_string(), "a7a8q");
        assert_eq!(
            parse_long_algebraic("h2h1n")
                .expect("h2h1n should parse")
                .exchange_kind,
            Some(PieceKind::Knight)
        );
    }

    #[test]
    fn malformed_tokens_are_refused() {
        for text in ["", "e2", "e2e", "e2e44x", "e2i4", "e0e4", "e2e4k", "e2e4p", "e2e4x"] {
            assert!(
                parse_long_algebraic(text).is_err(),
                "{text:?} should not parse"
            );
        }
    }
}
