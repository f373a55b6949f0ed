//! The terminal user interface.
//!
//! This is where the rules engine's external collaborators live: the
//! move-intent source (a text prompt), the choice resolver (a numbered list
//! of outcomes), and the presentation layer (the board renderings).

use crate::render::{render, Style};
use chess_core::{Color, Move, MoveDetails};
use chess_rules::Board;
use std::io::{self, BufRead, Write};

/// Whether a notification waits for the player to press enter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pause {
    No,
    Yes,
}

/// Everything a game loop needs from the players.
pub trait UserInterface {
    fn show(&mut self, board: &Board);

    /// Reads a move intent. `None` means input has ended.
    fn read_move(&mut self, active_color: Color) -> Option<Move>;

    /// Picks one of the legal outcomes. `None` (and any out-of-range index)
    /// means no move is made.
    fn choose_move(&mut self, choices: &[MoveDetails]) -> Option<usize>;

    fn notify(&mut self, message: &str, pause: Pause);
}

/// Reads a trimmed line from stdin. `None` on end of input.
pub(crate) fn read_line() -> Option<String> {
    let mut line = String::new();
    match io::stdin().lock().read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim().to_string()),
    }
}

/// Prints a prompt and reads the player's answer.
pub(crate) fn prompt(text: &str) -> Option<String> {
    print!("{text}");
    io::stdout().flush().ok();
    read_line()
}

/// A line-based interface on stdin/stdout.
pub struct TerminalUi {
    style: Style,
}

impl TerminalUi {
    pub fn new(style: Style) -> Self {
        TerminalUi { style }
    }
}

impl UserInterface for TerminalUi {
    fn show(&mut self, board: &Board) {
        println!("{}", render(board, self.style));
    }

    fn read_move(&mut self, active_color: Color) -> Option<Move> {
        loop {
            let input = prompt(&format!("{active_color}: Your move? "))?;
            match Move::parse(&input, active_color) {
                Ok(intent) => return Some(intent),
                Err(error) => {
                    tracing::debug!(%input, %error, "rejected move input");
                    println!("Please try again.");
                }
            }
        }
    }

    fn choose_move(&mut self, choices: &[MoveDetails]) -> Option<usize> {
        if choices.is_empty() {
            // No legal choice exists.
            return None;
        }
        if choices.len() == 1 {
            // Don't prompt when there is only one legal choice.
            return Some(0);
        }

        // Spell out what each choice does to the board so the player can
        // pick the move they intended.
        println!("Here are all of your legal choices:");
        for (index, choice) in choices.iter().enumerate() {
            println!("\t{}. {}", index + 1, describe(choice));
        }

        loop {
            let input = prompt("Choose a move by entering its number: ")?;
            match input.parse::<usize>() {
                Ok(number) if (1..=choices.len()).contains(&number) => return Some(number - 1),
                Ok(_) => println!("The number must be between 1 and {}.", choices.len()),
                Err(_) => println!("Your input is invalid."),
            }
        }
    }

    fn notify(&mut self, message: &str, pause: Pause) {
        println!("{message}");
        if pause == Pause::Yes {
            println!("Press enter to continue.");
            let _ = read_line();
        }
    }
}

fn describe(choice: &MoveDetails) -> String {
    let mut description = String::new();
    if let Some(captured) = choice.captured_square {
        description.push_str(&format!("Capture {captured}. "));
    }
    if let Some(kind) = choice.promote_to {
        description.push_str(&format!("Promote to {kind}. "));
    }
    if let Some(castling) = choice.castling {
        description.push_str(&format!(
            "Castle {}-side ({}). ",
            castling.side.letter(),
            castling.side.notation()
        ));
    }
    if choice.is_quiet() {
        description.push_str("Standard. ");
    }
    description.trim_end().to_string()
}
