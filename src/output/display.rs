//! Colored board printing for the line-oriented commands

use super::formatters::format_address;
use crate::core::{Board, COLUMN_COUNT, CellPos, ROW_COUNT};
use crate::session::{
    CellStyle, GameSession, IndicatorStatus, Instruction, MAX_WRONG_WORDS, Notification,
};
use colored::{ColoredString, Colorize};
use rand::Rng;

fn styled_cell(ch: char, style: CellStyle) -> ColoredString {
    let text = ch.to_string();
    match style {
        CellStyle::Base => text.green(),
        CellStyle::Hover => text.black().on_green(),
        CellStyle::Matched => text.bright_green().on_truecolor(0, 51, 0),
        CellStyle::Revealed => text.red().bold(),
    }
}

/// Print a board with both column segments side by side
///
/// `style` decides how each cell is drawn.
pub fn print_board_with(board: &Board, style: impl Fn(CellPos) -> CellStyle) {
    for row in 0..ROW_COUNT {
        let mut line = String::new();
        for column in 0..COLUMN_COUNT {
            if column > 0 {
                line.push_str("    ");
            }
            line.push_str(&format!("{} ", format_address(column, row).truecolor(0, 204, 0)));
            for (offset, &ch) in board.segment(column, row).iter().enumerate() {
                let cell = CellPos::in_column(column, row, offset);
                line.push_str(&styled_cell(ch, style(cell)).to_string());
            }
        }
        println!("  {line}");
    }
}

/// Print the session's board, its highlights and the attempt indicators
pub fn print_session<R: Rng>(session: &GameSession<'_, R>) {
    println!();
    print_board_with(session.board(), |cell| session.style_at(cell));

    let boxes: String = session
        .indicators()
        .iter()
        .map(|status| match status {
            IndicatorStatus::Intact => "■".green().to_string(),
            IndicatorStatus::Wrong => "■".red().to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ");
    println!(
        "\n  Attempts: {boxes}   Wrong words: {}/{MAX_WRONG_WORDS}",
        session.wrong_word_count()
    );
}

/// Print every notification carried by `instructions`
pub fn print_notifications(instructions: &[Instruction]) {
    for notification in instructions.iter().filter_map(Instruction::notification) {
        let line = format!("> {notification}");
        match notification {
            Notification::SecretFound => println!("{}", line.bright_green().bold()),
            Notification::Error => println!("{}", line.red()),
            _ => println!("{}", line.green()),
        }
    }
}
