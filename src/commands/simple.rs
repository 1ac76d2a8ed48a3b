//! Simple text mode
//!
//! Plays the puzzle from stdin without the TUI: coordinates are typed in
//! instead of pointed at.

use crate::core::CellPos;
use crate::output::{memory_value_label, print_notifications, print_session};
use crate::session::{GameSession, SessionPhase};
use anyhow::Result;
use colored::Colorize;
use rand::Rng;
use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

/// One line of player input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextCommand {
    Click(CellPos),
    Hover(CellPos),
    Unhover,
    GiveUp,
    Regenerate,
    Board,
    Help,
    Quit,
}

/// Error type for unparseable input lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    Empty,
    Unknown(String),
    MissingCoordinate,
    InvalidCoordinate(String),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "No command given"),
            Self::Unknown(cmd) => write!(f, "Unknown command '{cmd}', type 'help'"),
            Self::MissingCoordinate => write!(f, "Expected a row and a position"),
            Self::InvalidCoordinate(text) => write!(f, "'{text}' is not a cell on the board"),
        }
    }
}

impl std::error::Error for CommandError {}

fn parse_cell<'a>(mut args: impl Iterator<Item = &'a str>) -> Result<CellPos, CommandError> {
    let (Some(row), Some(pos)) = (args.next(), args.next()) else {
        return Err(CommandError::MissingCoordinate);
    };
    let parse = |text: &str| {
        text.parse::<usize>()
            .map_err(|_| CommandError::InvalidCoordinate(text.to_string()))
    };
    let cell = CellPos::new(parse(row)?, parse(pos)?);
    if cell.in_bounds() {
        Ok(cell)
    } else {
        Err(CommandError::InvalidCoordinate(format!("{row} {pos}")))
    }
}

impl FromStr for TextCommand {
    type Err = CommandError;

    /// Parse `click R P`, `hover R P`, `unhover`, `giveup`, `regen`, `board`,
    /// `help` or `quit` (first letters work too)
    ///
    /// # Examples
    /// ```
    /// use hexhack::commands::simple::TextCommand;
    /// use hexhack::core::CellPos;
    ///
    /// let cmd: TextCommand = "click 3 17".parse().unwrap();
    /// assert_eq!(cmd, TextCommand::Click(CellPos::new(3, 17)));
    /// assert!("click 30 1".parse::<TextCommand>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        let mut parts = lower.split_whitespace();
        let Some(cmd) = parts.next() else {
            return Err(CommandError::Empty);
        };

        match cmd {
            "click" | "c" => parse_cell(parts).map(Self::Click),
            "hover" | "h" => parse_cell(parts).map(Self::Hover),
            "unhover" | "u" => Ok(Self::Unhover),
            "giveup" | "give-up" | "g" => Ok(Self::GiveUp),
            "regen" | "new" | "r" => Ok(Self::Regenerate),
            "board" | "b" => Ok(Self::Board),
            "help" | "?" => Ok(Self::Help),
            "quit" | "q" | "exit" => Ok(Self::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

fn print_help() {
    println!("Commands:");
    println!("  click R P   select the cell at row R (0-23), position P (0-31)");
    println!("  hover R P   preview the highlight for a cell");
    println!("  unhover     clear the preview");
    println!("  giveup      reveal the secret");
    println!("  regen       start over with a new board");
    println!("  board       redraw the board");
    println!("  quit        leave\n");
}

/// Run the simple text mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple<R: Rng>(session: &mut GameSession<'_, R>) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Terminal Memory Dump - Text Mode             ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!("Find the secret word. Clicking a wrong word tells you how many");
    println!("letters sit in the right place; matched brackets remove a dud.\n");
    print_help();
    print_session(session);

    while let Some(line) = get_user_input("\n>")? {
        let command = match line.parse::<TextCommand>() {
            Ok(command) => command,
            Err(CommandError::Empty) => continue,
            Err(e) => {
                println!("{}", e.to_string().red());
                continue;
            }
        };

        let instructions = match command {
            TextCommand::Click(cell) => session.click(cell),
            TextCommand::Hover(cell) => session.hover(cell),
            TextCommand::Unhover => session.unhover(),
            TextCommand::GiveUp => session.give_up(),
            TextCommand::Regenerate => session.regenerate(),
            TextCommand::Board => Vec::new(),
            TextCommand::Help => {
                print_help();
                continue;
            }
            TextCommand::Quit => break,
        };

        print_session(session);
        if let TextCommand::Hover(cell) = command
            && let Some(value) = session.memory_value(cell)
        {
            println!("  {}", memory_value_label(Some(value)));
        }
        print_notifications(&instructions);

        if session.phase() == SessionPhase::SecretFound && !instructions.is_empty() {
            println!("\nType 'regen' for a new board or 'quit' to leave.");
        }
    }

    println!("\nGoodbye!\n");
    Ok(())
}

/// Get user input with a prompt; `None` at end of input
fn get_user_input(prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt} ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}
