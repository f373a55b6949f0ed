//! Board state, attack detection, and the legality filter.
//!
//! The board owns piece placement and the en-passant target; nothing else
//! about a game is stored here. Legality is decided by simulation: each
//! pseudo-legal outcome is applied to a scratch copy and discarded if it
//! leaves the mover's own king under attack.

use crate::movegen;
use chess_core::{Color, Move, MoveDetails, Piece, PieceKind, Square};

/// One rank of the board, lowest file first.
pub type Rank = [Option<Piece>; 8];

/// The entire state of a chess board, except who moves next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    ranks: [Rank; 8],
    en_passant_target: Option<Square>,
}

impl Board {
    /// Creates a board from an array of ranks, lowest rank first.
    pub const fn new(ranks: [Rank; 8]) -> Self {
        Board {
            ranks,
            en_passant_target: None,
        }
    }

    /// Returns the board dimensions as a square one past the last rank and
    /// file.
    #[inline]
    pub const fn dimensions(&self) -> Square {
        Square::new(8, 8)
    }

    /// Returns true if the square lies on the board.
    #[inline]
    pub const fn is_in_bounds(&self, square: Square) -> bool {
        let dimensions = self.dimensions();
        square.rank >= 0
            && square.rank < dimensions.rank
            && square.file >= 0
            && square.file < dimensions.file
    }

    /// Returns true if the square lies off the board.
    #[inline]
    pub const fn is_out_of_bounds(&self, square: Square) -> bool {
        !self.is_in_bounds(square)
    }

    /// Returns the piece on the given square, if any.
    ///
    /// # Panics
    ///
    /// Panics if the square is out of bounds.
    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.ranks[square.rank as usize][square.file as usize]
    }

    /// Returns true if a piece occupies the given square.
    #[inline]
    pub fn is_occupied(&self, square: Square) -> bool {
        self.piece_at(square).is_some()
    }

    /// Returns the square a pawn could capture onto en passant, if the last
    /// applied move was a two-square pawn advance.
    #[inline]
    pub const fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    /// Iterates over every square of the board, from a8 to h1.
    pub fn squares(&self) -> impl Iterator<Item = Square> {
        let dimensions = self.dimensions();
        (0..dimensions.rank)
            .rev()
            .flat_map(move |rank| (0..dimensions.file).map(move |file| Square::new(rank, file)))
    }

    /// Returns the square of the given color's king.
    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.squares().find(|&square| {
            self.piece_at(square)
                .is_some_and(|piece| piece.kind.is_king() && piece.color == color)
        })
    }

    /// Returns true if the piece on the given square could be captured by
    /// some opposing move next turn.
    ///
    /// This is pseudo-legal attack detection: an attack still counts even if
    /// playing it would expose the attacker's own king. Castling can never
    /// capture, so attack probing goes through the castling-free generator
    /// and the castling safety check cannot recurse back into itself.
    ///
    /// # Panics
    ///
    /// Panics if the square is empty; probing an unoccupied square is a
    /// caller bug.
    pub fn is_piece_under_attack(&self, square: Square) -> bool {
        let piece = self
            .piece_at(square)
            .expect("attack probe on an empty square");
        let attacker = piece.color.opposite();
        self.squares().any(|from| {
            movegen::movement_outcomes(Move::new(attacker, from, square), self)
                .iter()
                .any(|details| details.captured_square == Some(square))
        })
    }

    /// Returns true if relocating the piece on `from` to `to` would place it
    /// under attack.
    ///
    /// Only the single piece is relocated on a scratch copy; no capture or
    /// castling semantics apply. Castling's transit-safety check relies on
    /// this to probe the king's path through the current position.
    pub fn would_piece_be_attacked(&self, from: Square, to: Square) -> bool {
        let mut copy = self.clone();
        copy.move_one_piece(from, to);
        copy.is_piece_under_attack(to)
    }

    /// Returns every legal outcome of the given intent, in generation order.
    ///
    /// An empty result means the intent is illegal. Several outcomes arise
    /// only from pawn promotion, one per promotable kind.
    pub fn legal_moves(&self, intent: Move) -> Vec<MoveDetails> {
        movegen::generate_outcomes(intent, self)
            .into_iter()
            .filter(|details| {
                let mut copy = self.clone();
                copy.force_move(intent, details);
                let king = copy
                    .find_king(intent.active_color)
                    .expect("the moving side has no king");
                !copy.is_piece_under_attack(king)
            })
            .collect()
    }

    /// Applies one legal outcome of the given intent, selected by `choose`.
    ///
    /// The choice function receives every legal outcome and returns the
    /// index of the one to apply. `None` or an out-of-range index (always
    /// the case when no outcome exists) leaves the board untouched and
    /// returns `None`; callers should treat that as "try another move".
    pub fn make_move(
        &mut self,
        intent: Move,
        choose: impl FnOnce(&[MoveDetails]) -> Option<usize>,
    ) -> Option<MoveDetails> {
        let choices = self.legal_moves(intent);
        let index = choose(&choices)?;
        let details = *choices.get(index)?;
        self.force_move(intent, &details);
        Some(details)
    }

    /// Applies an outcome to the board without questioning its legality.
    ///
    /// Private so that external code cannot manipulate the board in illegal
    /// ways; everything public funnels through the legality filter.
    pub(crate) fn force_move(&mut self, intent: Move, details: &MoveDetails) {
        // The rook comes off the board before the king moves: in Chess960
        // the king's destination may be the rook's square, or the other way
        // around.
        let rook = details
            .castling
            .map(|castling| self.pick_up(castling.rook_from));

        if let Some(captured) = details.captured_square {
            self.ranks[captured.rank as usize][captured.file as usize] = None;
        }

        self.move_one_piece(intent.from, intent.to);

        if let (Some(castling), Some(rook)) = (details.castling, rook) {
            self.put_down(castling.rook_to, rook);
        }

        if let Some(kind) = details.promote_to {
            self.at_mut(intent.to)
                .as_mut()
                .expect("no piece on the promotion square")
                .kind = kind;
        }

        self.en_passant_target = details.en_passant_target;
    }

    /// Relocates a single piece.
    fn move_one_piece(&mut self, from: Square, to: Square) {
        let piece = self.pick_up(from);
        self.put_down(to, piece);
    }

    fn pick_up(&mut self, square: Square) -> Piece {
        self.at_mut(square).take().expect("no piece to pick up")
    }

    /// Putting a piece down strips its castling eligibility. Every
    /// relocation funnels through here, so no call site can forget the
    /// demotion.
    fn put_down(&mut self, square: Square, mut piece: Piece) {
        piece.kind = piece.kind.demoted();
        *self.at_mut(square) = Some(piece);
    }

    fn at_mut(&mut self, square: Square) -> &mut Option<Piece> {
        &mut self.ranks[square.rank as usize][square.file as usize]
    }
}

fn home_rank(color: Color) -> Rank {
    let piece = |kind| Some(Piece::new(kind, color));
    [
        piece(PieceKind::CastleableRook),
        piece(PieceKind::Knight),
        piece(PieceKind::Bishop),
        piece(PieceKind::Queen),
        piece(PieceKind::CastleableKing),
        piece(PieceKind::Bishop),
        piece(PieceKind::Knight),
        piece(PieceKind::CastleableRook),
    ]
}

impl Default for Board {
    /// The standard starting position.
    fn default() -> Self {
        let mut ranks: [Rank; 8] = [[None; 8]; 8];
        ranks[0] = home_rank(Color::White);
        ranks[1] = [Some(Piece::new(PieceKind::Pawn, Color::White)); 8];
        ranks[6] = [Some(Piece::new(PieceKind::Pawn, Color::Black)); 8];
        ranks[7] = home_rank(Color::Black);
        Board::new(ranks)
    }
}
