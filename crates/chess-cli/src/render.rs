//! Text renderings of the board.
//!
//! The board is read square by square through the rules crate's query
//! interface; nothing here can mutate it.

use chess_core::{Color, Square};
use chess_rules::Board;

/// How pieces are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    /// One letter per piece; the case denotes the color (K vs. k).
    Letter,
    /// Two letters per piece: color then kind (wk, bq).
    TwoLetter,
}

/// Renders the board with rank digits down the left edge and file letters
/// along the bottom.
pub fn render(board: &Board, style: Style) -> String {
    match style {
        Style::Letter => render_letters(board),
        Style::TwoLetter => render_two_letters(board),
    }
}

fn render_letters(board: &Board) -> String {
    let dimensions = board.dimensions();
    let mut out = String::new();
    for rank in (0..dimensions.rank).rev() {
        out.push(Square::new(rank, 0).rank_digit());
        out.push(' ');
        for file in 0..dimensions.file {
            match board.piece_at(Square::new(rank, file)) {
                None => out.push('.'),
                Some(piece) => {
                    let letter = piece.kind.letter();
                    out.push(match piece.color {
                        Color::White => letter,
                        Color::Black => letter.to_ascii_lowercase(),
                    });
                }
            }
        }
        out.push('\n');
    }

    out.push_str("\n  ");
    for file in 0..dimensions.file {
        out.push(Square::new(0, file).file_letter());
    }
    out.push('\n');
    out
}

fn render_two_letters(board: &Board) -> String {
    let dimensions = board.dimensions();
    let mut out = String::new();
    for rank in (0..dimensions.rank).rev() {
        out.push(Square::new(rank, 0).rank_digit());
        out.push(' ');
        for file in 0..dimensions.file {
            match board.piece_at(Square::new(rank, file)) {
                None => out.push_str(" . "),
                Some(piece) => {
                    out.push(match piece.color {
                        Color::White => 'w',
                        Color::Black => 'b',
                    });
                    out.push(piece.kind.letter().to_ascii_lowercase());
                    out.push(' ');
                }
            }
        }
        out.push('\n');
    }

    out.push_str("\n  ");
    for file in 0..dimensions.file {
        out.push(Square::new(0, file).file_letter());
        out.push_str("  ");
    }
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_rendering_of_the_starting_position() {
        let text = render(&Board::default(), Style::Letter);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "8 rnbqkbnr");
        assert_eq!(lines[1], "7 pppppppp");
        assert_eq!(lines[2], "6 ........");
        assert_eq!(lines[6], "2 PPPPPPPP");
        assert_eq!(lines[7], "1 RNBQKBNR");
        assert_eq!(lines[9], "  abcdefgh");
    }

    #[test]
    fn two_letter_rendering_spells_out_colors() {
        let text = render(&Board::default(), Style::TwoLetter);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "8 br bn bb bq bk bb bn br ");
        assert_eq!(lines[7], "1 wr wn wb wq wk wb wn wr ");
    }
}
