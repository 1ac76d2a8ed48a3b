//! Print a single generated board

use crate::generator::{GridGenerator, Puzzle};
use crate::output::print_board_with;
use crate::session::CellStyle;
use colored::Colorize;
use rand::Rng;

/// Generate one board and print it
///
/// With `reveal`, the secret is drawn in red and every planted word is listed.
pub fn run_show<R: Rng>(generator: &GridGenerator<'_>, rng: &mut R, reveal: bool) -> Puzzle {
    let puzzle = generator.generate(rng);
    let secret = puzzle.secret.placement;

    println!();
    print_board_with(&puzzle.board, |cell| {
        if reveal && secret.contains(cell) {
            CellStyle::Revealed
        } else {
            CellStyle::Base
        }
    });

    if reveal {
        println!("\n{}", "Planted words".bright_cyan().bold());
        for placed in &puzzle.words {
            let p = placed.placement;
            let line = format!(
                "  {}  column {} row {:2} offset {:2}",
                placed.word.text().to_uppercase(),
                p.column(),
                p.row(),
                p.start()
            );
            if p == secret {
                println!("{}  {}", line.red().bold(), "(secret)".red());
            } else {
                println!("{line}");
            }
        }
        if puzzle.relaxed {
            println!("\n{}", "Spacing had to be relaxed for this board".yellow());
        }
    }

    puzzle
}
