//! The game loop: where the rules engine meets the players.

use crate::ui::{Pause, UserInterface};
use chess_core::Color;
use chess_rules::{detect_mate, king_is_in_check, Board, Mate};

/// A game in progress: the board plus whose turn it is.
pub struct Game<U> {
    board: Board,
    ui: U,
    active_color: Color,
}

impl<U: UserInterface> Game<U> {
    pub fn new(board: Board, ui: U) -> Self {
        Game {
            board,
            ui,
            active_color: Color::White,
        }
    }

    /// Runs until checkmate, stalemate, or end of input.
    pub fn run(&mut self) {
        loop {
            self.ui.show(&self.board);

            match detect_mate(&self.board, self.active_color) {
                Mate::Checkmate => {
                    let winner = self.active_color.opposite();
                    tracing::info!(%winner, "checkmate");
                    self.ui
                        .notify(&format!("Checkmate. {winner} wins."), Pause::No);
                    return;
                }
                Mate::Stalemate => {
                    tracing::info!("stalemate");
                    self.ui.notify("Stalemate. The game is a draw.", Pause::No);
                    return;
                }
                Mate::Ongoing => {}
            }

            if king_is_in_check(&self.board, self.active_color) {
                self.ui.notify("Your king is in check.", Pause::No);
            }

            let Some(intent) = self.ui.read_move(self.active_color) else {
                return;
            };

            let ui = &mut self.ui;
            match self.board.make_move(intent, |choices| ui.choose_move(choices)) {
                Some(details) => {
                    tracing::info!(%intent, captured = ?details.captured_square, "move applied");
                    self.active_color = self.active_color.opposite();
                }
                None => self.ui.notify("Illegal move.", Pause::Yes),
            }
        }
    }
}
