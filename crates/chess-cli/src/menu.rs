//! A simple numbered terminal menu.

use crate::ui::prompt;

/// A titled list of choices with an implicit exit item.
pub struct Menu {
    title: &'static str,
    items: &'static [&'static str],
}

impl Menu {
    pub const fn new(title: &'static str, items: &'static [&'static str]) -> Self {
        Menu { title, items }
    }

    /// Displays the menu and reads a choice.
    ///
    /// Returns the zero-based index of the chosen item, or `None` when the
    /// player picks the exit item or input ends.
    pub fn run(&self) -> Option<usize> {
        println!("\n{}", self.title);
        println!("{}", "-".repeat(self.title.len()));
        for (index, item) in self.items.iter().enumerate() {
            println!("\t{}. {item}", index + 1);
        }
        println!("\t0. Exit");

        loop {
            let input = prompt("Choose an item by entering the corresponding number: ")?;
            match input.parse::<usize>() {
                Ok(0) => return None,
                Ok(choice) if choice <= self.items.len() => return Some(choice - 1),
                Ok(choice) => println!("'{choice}' is not a valid choice."),
                Err(_) => println!("Your input is invalid."),
            }
        }
    }
}
