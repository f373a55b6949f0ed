//! Rules engine for chess and Chess960.
//!
//! This crate decides what is legal on a chess board:
//! - [`movegen`] enumerates the pseudo-legal outcomes of an origin/destination
//!   pair, including captures, promotions, en passant, and castling
//! - [`Board`] holds piece placement, probes attacks, filters outcomes down
//!   to the truly legal ones by simulation, and applies chosen outcomes
//! - [`detect_mate`] classifies a position as ongoing, checkmate, or
//!   stalemate
//! - [`chess960_board`] shuffles a Chess960 starting position from an
//!   injected number generator
//!
//! Illegality is data, not control flow: an illegal intent produces an empty
//! outcome list, never an error. Only caller bugs (probing an empty square,
//! a board with no king) panic.
//!
//! # Example
//!
//! ```
//! use chess_core::{Color, Move, Square};
//! use chess_rules::Board;
//!
//! let mut board = Board::default();
//! let intent = Move::new(
//!     Color::White,
//!     Square::parse("e2").unwrap(),
//!     Square::parse("e4").unwrap(),
//! );
//! let details = board.make_move(intent, |_choices| Some(0)).unwrap();
//! assert_eq!(details.en_passant_target, Square::parse("e3").ok());
//! ```

mod board;
mod chess960;
mod mate;
pub mod movegen;

pub use board::{Board, Rank};
pub use chess960::{chess960_board, chess960_board_from_scheme};
pub use mate::{detect_mate, king_is_in_check, Mate};
