//! Chess piece representation.

use crate::Color;

/// The kinds of chess pieces.
///
/// Rooks and kings that have never moved are distinct kinds: they are the
/// pieces still allowed to castle. Relocating such a piece demotes it to its
/// ordinary counterpart, which is the only way castling rights are revoked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
    CastleableRook,
    CastleableKing,
}

impl PieceKind {
    /// The kinds a pawn may promote to, in the order promotion outcomes are
    /// generated.
    pub const PROMOTABLE: [PieceKind; 4] = [
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
    ];

    /// Returns true for a king, castleable or not.
    #[inline]
    pub const fn is_king(self) -> bool {
        matches!(self, PieceKind::King | PieceKind::CastleableKing)
    }

    /// Returns the ordinary counterpart of a castleable kind.
    ///
    /// Kinds that never carried castling rights are returned unchanged.
    #[inline]
    pub const fn demoted(self) -> Self {
        match self {
            PieceKind::CastleableRook => PieceKind::Rook,
            PieceKind::CastleableKing => PieceKind::King,
            other => other,
        }
    }

    /// Returns the uppercase letter for this kind.
    ///
    /// Castleable kinds share the letter of their ordinary counterpart.
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook | PieceKind::CastleableRook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King | PieceKind::CastleableKing => 'K',
        }
    }

    /// Parses a piece letter, case-insensitively.
    ///
    /// Letters never map to a castleable kind; those exist only on boards.
    pub const fn from_letter(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'P' => Some(PieceKind::Pawn),
            'N' => Some(PieceKind::Knight),
            'B' => Some(PieceKind::Bishop),
            'R' => Some(PieceKind::Rook),
            'Q' => Some(PieceKind::Queen),
            'K' => Some(PieceKind::King),
            _ => None,
        }
    }

    /// Returns the lowercase English name ("pawn", "knight", ...).
    pub const fn name(self) -> &'static str {
        match self {
            PieceKind::Pawn => "pawn",
            PieceKind::Knight => "knight",
            PieceKind::Bishop => "bishop",
            PieceKind::Rook | PieceKind::CastleableRook => "rook",
            PieceKind::Queen => "queen",
            PieceKind::King | PieceKind::CastleableKing => "king",
        }
    }
}

impl std::fmt::Display for PieceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A piece on the board: a kind paired with its owner's color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    /// Creates a piece.
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Piece { kind, color }
    }
}
