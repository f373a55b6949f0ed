//! Chess960 starting positions.
//!
//! Arrangements are numbered 0..960 by the Fischer random numbering scheme:
//! the number decomposes into a light-squared bishop file, a dark-squared
//! bishop file, a queen position among the free squares, and an index into
//! the knight positioning table; the rooks and king always fill the last
//! three free squares rook-king-rook.

use crate::board::{Board, Rank};
use chess_core::{Color, Piece, PieceKind};
use rand::Rng;

/// Knight placements among the five squares left after the bishops and
/// queen, ordered by scheme index.
const KNIGHT_PLACEMENTS: [(usize, usize); 10] = [
    (0, 1), // NN___
    (0, 2), // N_N__
    (0, 3), // N__N_
    (0, 4), // N___N
    (1, 2), // _NN__
    (1, 3), // _N_N_
    (1, 4), // _N__N
    (2, 3), // __NN_
    (2, 4), // __N_N
    (3, 4), // ___NN
];

/// Generates a Chess960 starting board from the caller's number generator.
pub fn chess960_board<R: Rng + ?Sized>(rng: &mut R) -> Board {
    chess960_board_from_scheme(rng.random_range(0..960))
}

/// Builds the Chess960 starting board with the given scheme number.
///
/// Scheme number 518 is the classical arrangement.
///
/// # Panics
///
/// Panics if `number` is not below 960.
pub fn chess960_board_from_scheme(number: u16) -> Board {
    assert!(number < 960, "scheme number out of range: {number}");
    let mut index = number as usize;
    let bishop1 = div_rem(&mut index, 4);
    let bishop2 = div_rem(&mut index, 4);
    let queen = div_rem(&mut index, 6);

    let white = |kind| Some(Piece::new(kind, Color::White));
    let mut home: Rank = [None; 8];
    home[bishop1 * 2 + 1] = white(PieceKind::Bishop);
    home[bishop2 * 2] = white(PieceKind::Bishop);
    home[nth_free_file(&home, queen)] = white(PieceKind::Queen);

    // `index` is now the knight table entry. Both files are resolved before
    // either knight lands, since placing one renumbers the free squares.
    let (first, second) = KNIGHT_PLACEMENTS[index];
    let knight_files = (nth_free_file(&home, first), nth_free_file(&home, second));
    home[knight_files.0] = white(PieceKind::Knight);
    home[knight_files.1] = white(PieceKind::Knight);

    // Rooks in the outer free squares, the king in the middle one. Each
    // placement fills a square, so asking for the 0th free square three
    // times walks left to right.
    home[nth_free_file(&home, 0)] = white(PieceKind::CastleableRook);
    home[nth_free_file(&home, 0)] = white(PieceKind::CastleableKing);
    home[nth_free_file(&home, 0)] = white(PieceKind::CastleableRook);

    // The black home rank is the same, except the pieces are black.
    let mut black_home = home;
    for square in black_home.iter_mut() {
        if let Some(piece) = square {
            piece.color = Color::Black;
        }
    }

    let mut ranks: [Rank; 8] = [[None; 8]; 8];
    ranks[0] = home;
    ranks[1] = [Some(Piece::new(PieceKind::Pawn, Color::White)); 8];
    ranks[6] = [Some(Piece::new(PieceKind::Pawn, Color::Black)); 8];
    ranks[7] = black_home;
    Board::new(ranks)
}

fn div_rem(value: &mut usize, divisor: usize) -> usize {
    let remainder = *value % divisor;
    *value /= divisor;
    remainder
}

fn nth_free_file(rank: &Rank, n: usize) -> usize {
    let mut remaining = n;
    for (file, square) in rank.iter().enumerate() {
        if square.is_none() {
            if remaining == 0 {
                return file;
            }
            remaining -= 1;
        }
    }
    panic!("rank has fewer than {n} free squares");
}
