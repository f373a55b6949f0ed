//! End-of-turn mate detection.

use crate::Board;
use chess_core::{Color, Move};

/// The verdict for the side about to move. Checkmate and stalemate end the
/// game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mate {
    Ongoing,
    Checkmate,
    Stalemate,
}

/// Returns true if the given color's king is currently attacked.
///
/// # Panics
///
/// Panics if the board has no king of that color.
pub fn king_is_in_check(board: &Board, color: Color) -> bool {
    let king = board.find_king(color).expect("no king to check");
    board.is_piece_under_attack(king)
}

/// Decides whether the given color is checkmated, stalemated, or still has
/// a move.
///
/// Every origin/destination pair on the board is tried until one yields a
/// legal outcome. Quadratic in the square count, which is fine for a fixed
/// 8x8 board; nothing is cached between turns.
pub fn detect_mate(board: &Board, color: Color) -> Mate {
    for from in board.squares() {
        for to in board.squares() {
            if !board.legal_moves(Move::new(color, from, to)).is_empty() {
                return Mate::Ongoing;
            }
        }
    }

    if king_is_in_check(board, color) {
        Mate::Checkmate
    } else {
        Mate::Stalemate
    }
}
