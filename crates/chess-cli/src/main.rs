//! Two-player terminal chess with full rule enforcement.
//!
//! The rules crates do all the thinking; this binary only renders boards,
//! reads intents, and resolves ambiguous outcomes (promotion choices and
//! the occasional Chess960 castle that shares a destination with a plain
//! king step).

mod game;
mod menu;
mod render;
mod ui;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use game::Game;
use menu::Menu;
use render::Style;
use ui::TerminalUi;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Variant {
    Classical,
    Chess960,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum StyleChoice {
    Letter,
    TwoLetter,
}

/// Two-player chess in the terminal, classical or Chess960.
#[derive(Parser)]
#[command(name = "chess-cli")]
#[command(about = "Two-player chess with full rule enforcement")]
struct Args {
    /// Which variant to play; prompted interactively when omitted.
    #[arg(long, value_enum)]
    variant: Option<Variant>,

    /// How to draw the board; prompted interactively when omitted.
    #[arg(long, value_enum)]
    style: Option<StyleChoice>,
}

static STYLE_MENU: Menu = Menu::new(
    "Visual Style",
    &[
        "Uppercase and lowercase letters (e.g. K, q)",
        "Two letters (e.g. wk, bq)",
    ],
);

static VARIANT_MENU: Menu = Menu::new("Chess Variant", &["Classical", "Chess960"]);

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let Some(style) = choose_style(args.style) else {
        return Ok(());
    };
    let Some(variant) = choose_variant(args.variant) else {
        return Ok(());
    };

    let board = match variant {
        Variant::Classical => chess_rules::Board::default(),
        Variant::Chess960 => chess_rules::chess960_board(&mut rand::rng()),
    };
    tracing::info!(?variant, "starting game");

    Game::new(board, TerminalUi::new(style)).run();
    Ok(())
}

fn choose_style(arg: Option<StyleChoice>) -> Option<Style> {
    let choice = match arg {
        Some(StyleChoice::Letter) => 0,
        Some(StyleChoice::TwoLetter) => 1,
        None => STYLE_MENU.run()?,
    };
    Some(match choice {
        0 => Style::Letter,
        _ => Style::TwoLetter,
    })
}

fn choose_variant(arg: Option<Variant>) -> Option<Variant> {
    match arg {
        Some(variant) => Some(variant),
        None => VARIANT_MENU.run().map(|choice| match choice {
            0 => Variant::Classical,
            _ => Variant::Chess960,
        }),
    }
}
