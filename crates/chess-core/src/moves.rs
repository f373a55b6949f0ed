//! Move intents and move outcomes.
//!
//! A [`Move`] is what a player asks for: "this color, from here, to there".
//! It carries no promotion choice. A [`MoveDetails`] is one concrete outcome
//! the rules derived from an intent; an intent with no outcomes is illegal,
//! and an intent with several (pawn promotion) needs the player to pick one.

use crate::{Color, ParseSquareError, PieceKind, Square};
use std::fmt;
use thiserror::Error;

/// Errors that can occur when parsing a move intent from text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseMoveError {
    #[error("expected four characters, got {0}")]
    Length(usize),

    #[error(transparent)]
    Square(#[from] ParseSquareError),
}

/// A proposed move: the active color and an origin/destination pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub active_color: Color,
    pub from: Square,
    pub to: Square,
}

impl Move {
    /// Creates a move intent.
    #[inline]
    pub const fn new(active_color: Color, from: Square, to: Square) -> Self {
        Move {
            active_color,
            from,
            to,
        }
    }

    /// Parses a move in the form `xNxN`, such as "d2d4".
    ///
    /// The string must be exactly four characters long.
    pub fn parse(s: &str, active_color: Color) -> Result<Self, ParseMoveError> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != 4 {
            return Err(ParseMoveError::Length(chars.len()));
        }
        let from = Square::from_chars(chars[0], chars[1])?;
        let to = Square::from_chars(chars[2], chars[3])?;
        Ok(Move::new(active_color, from, to))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

/// The two directions a king may castle in.
///
/// Named after the rook's starting wing so the names stay meaningful in
/// Chess960: the a-side castle is queenside (0-0-0) and the h-side castle is
/// kingside (0-0) on a standard board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    ASide,
    HSide,
}

impl Side {
    /// Returns the wing letter, 'a' or 'h'.
    #[inline]
    pub const fn letter(self) -> char {
        match self {
            Side::ASide => 'a',
            Side::HSide => 'h',
        }
    }

    /// Returns the castling notation, "0-0-0" or "0-0".
    #[inline]
    pub const fn notation(self) -> &'static str {
        match self {
            Side::ASide => "0-0-0",
            Side::HSide => "0-0",
        }
    }
}

/// The rook's half of a castling move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastlingDetails {
    pub rook_from: Square,
    pub rook_to: Square,
    pub side: Side,
}

/// One concrete outcome of a move intent.
///
/// The captured square can differ from the destination: an en passant
/// capture lands behind the captured pawn. The en-passant target is set only
/// by a two-square pawn advance and names the square a capturer would land
/// on next turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveDetails {
    pub captured_square: Option<Square>,
    pub en_passant_target: Option<Square>,
    pub promote_to: Option<PieceKind>,
    pub castling: Option<CastlingDetails>,
}

impl MoveDetails {
    /// An outcome with no side effects.
    #[inline]
    pub const fn plain() -> Self {
        MoveDetails {
            captured_square: None,
            en_passant_target: None,
            promote_to: None,
            castling: None,
        }
    }

    /// An outcome that captures the piece on the given square.
    #[inline]
    pub const fn capture(square: Square) -> Self {
        MoveDetails {
            captured_square: Some(square),
            en_passant_target: None,
            promote_to: None,
            castling: None,
        }
    }

    /// Returns true if nothing special happens: no capture, no promotion,
    /// no castling.
    #[inline]
    pub const fn is_quiet(&self) -> bool {
        self.captured_square.is_none() && self.promote_to.is_none() && self.castling.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid() {
        let m = Move::parse("d2d4", Color::White).unwrap();
        assert_eq!(m.from, Square::new(1, 3));
        assert_eq!(m.to, Square::new(3, 3));
        assert_eq!(m.active_color, Color::White);
    }

    #[test]
    fn parse_invalid_length() {
        assert_eq!(
            Move::parse("d2d", Color::White),
            Err(ParseMoveError::Length(3))
        );
        assert_eq!(
            Move::parse("d2d4q", Color::White),
            Err(ParseMoveError::Length(5))
        );
    }

    #[test]
    fn parse_invalid_square() {
        assert!(matches!(
            Move::parse("z2d4", Color::White),
            Err(ParseMoveError::Square(ParseSquareError::File('z')))
        ));
        assert!(matches!(
            Move::parse("d2d9", Color::Black),
            Err(ParseMoveError::Square(ParseSquareError::Rank('9')))
        ));
    }

    #[test]
    fn display() {
        let m = Move::parse("e2e4", Color::White).unwrap();
        assert_eq!(m.to_string(), "e2e4");
    }

    #[test]
    fn quiet_outcomes() {
        assert!(MoveDetails::plain().is_quiet());
        assert!(!MoveDetails::capture(Square::new(4, 3)).is_quiet());

        let mut double_push = MoveDetails::plain();
        double_push.en_passant_target = Some(Square::new(2, 4));
        // A double push is still a quiet move; the target is bookkeeping.
        assert!(double_push.is_quiet());
    }

    #[test]
    fn side_labels() {
        assert_eq!(Side::ASide.letter(), 'a');
        assert_eq!(Side::HSide.letter(), 'h');
        assert_eq!(Side::ASide.notation(), "0-0-0");
        assert_eq!(Side::HSide.notation(), "0-0");
    }
}
