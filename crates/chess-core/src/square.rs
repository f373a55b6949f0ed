//! Board square representation.
//!
//! A square is one location on a chess board, addressed by rank and file.
//! Ranks and files are signed so that movement arithmetic can step off the
//! board; whoever holds the board decides what is in bounds.

use std::fmt;
use thiserror::Error;

/// Errors that can occur when parsing a square from text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseSquareError {
    #[error("expected two characters, got {0}")]
    Length(usize),

    #[error("invalid file letter '{0}' (expected 'a' through 'h')")]
    File(char),

    #[error("invalid rank digit '{0}' (expected '1' through '8')")]
    Rank(char),
}

/// A location on the board.
///
/// Rank 0, file 0 is square "a1"; rank 7, file 7 is square "h8".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    pub rank: i8,
    pub file: i8,
}

impl Square {
    /// Creates a square from rank and file indices.
    #[inline]
    pub const fn new(rank: i8, file: i8) -> Self {
        Square { rank, file }
    }

    /// Returns the square shifted by the given rank and file deltas.
    #[inline]
    pub const fn offset(self, rank_delta: i8, file_delta: i8) -> Self {
        Square {
            rank: self.rank + rank_delta,
            file: self.file + file_delta,
        }
    }

    /// Returns the rank digit ('1' through '8').
    ///
    /// The rank must be between 0 and 7.
    #[inline]
    pub fn rank_digit(self) -> char {
        debug_assert!((0..8).contains(&self.rank));
        (b'1' + self.rank as u8) as char
    }

    /// Returns the file letter ('a' through 'h').
    ///
    /// The file must be between 0 and 7.
    #[inline]
    pub fn file_letter(self) -> char {
        debug_assert!((0..8).contains(&self.file));
        (b'a' + self.file as u8) as char
    }

    /// Parses a square from a file letter and a rank digit.
    pub fn from_chars(file: char, rank: char) -> Result<Self, ParseSquareError> {
        let file = file.to_ascii_lowercase();
        if !('a'..='h').contains(&file) {
            return Err(ParseSquareError::File(file));
        }
        if !('1'..='8').contains(&rank) {
            return Err(ParseSquareError::Rank(rank));
        }
        Ok(Square::new(rank as i8 - b'1' as i8, file as i8 - b'a' as i8))
    }

    /// Parses a square in the form `xN`, such as "d2".
    ///
    /// The string must be exactly two characters long.
    pub fn parse(s: &str) -> Result<Self, ParseSquareError> {
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(file), Some(rank), None) => Square::from_chars(file, rank),
            _ => Err(ParseSquareError::Length(s.chars().count())),
        }
    }
}

impl std::str::FromStr for Square {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Square::parse(s)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_letter(), self.rank_digit())
    }
}
