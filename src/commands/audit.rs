//! Generator audit
//!
//! Generates many boards from consecutive seeds in parallel and checks every
//! placement invariant on each one.

use crate::core::COLUMN_COUNT;
use crate::generator::{GridGenerator, Puzzle};
use crate::output::formatters::create_progress_bar;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use std::time::{Duration, Instant};
use tracing::info;

/// Checks made on one generated board
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct BoardCheck {
    relaxed: bool,
    spacing_violations: usize,
    overlaps: usize,
    secret_violation: bool,
    corrupt_words: usize,
    column_words: [usize; COLUMN_COUNT],
}

impl BoardCheck {
    fn of(puzzle: &Puzzle) -> Self {
        let mut column_words = [0; COLUMN_COUNT];
        for placement in puzzle.placements() {
            column_words[placement.column()] += 1;
        }

        let secret_hits = puzzle.words.iter().filter(|w| **w == puzzle.secret).count();
        let corrupt_words = puzzle
            .words
            .iter()
            .filter(|w| puzzle.board.text_at(w.placement) != w.word.text())
            .count();

        Self {
            relaxed: puzzle.relaxed,
            spacing_violations: puzzle.spacing_violations(),
            overlaps: puzzle.overlaps(),
            secret_violation: secret_hits != 1,
            corrupt_words,
            column_words,
        }
    }
}

/// Aggregated audit results
#[derive(Debug, Clone, PartialEq)]
pub struct AuditReport {
    pub boards: usize,
    /// Boards that needed the spacing fallback
    pub relaxed: usize,
    /// Crowded placement pairs on boards that were not relaxed
    pub spacing_violations: usize,
    pub overlaps: usize,
    /// Boards whose secret is not exactly one of their planted words
    pub secret_violations: usize,
    /// Planted words whose letters are not on the board
    pub corrupt_words: usize,
    pub column_words: [usize; COLUMN_COUNT],
    pub duration: Duration,
    pub boards_per_second: f64,
}

impl AuditReport {
    /// Whether every hard invariant held on every board
    #[must_use]
    pub const fn is_clean(&self) -> bool {
        self.spacing_violations == 0
            && self.overlaps == 0
            && self.secret_violations == 0
            && self.corrupt_words == 0
    }
}

/// Generate `count` boards from seeds `first_seed..` and audit them
///
/// # Examples
/// ```
/// use hexhack::commands::audit::audit_boards;
/// use hexhack::generator::GridGenerator;
/// use hexhack::wordlists::{WORDS, loader::words_from_slice};
///
/// let bank = words_from_slice(WORDS);
/// let generator = GridGenerator::new(&bank).unwrap();
/// let report = audit_boards(&generator, 20, 0, None);
/// assert_eq!(report.boards, 20);
/// assert!(report.is_clean());
/// ```
#[must_use]
pub fn audit_boards(
    generator: &GridGenerator<'_>,
    count: usize,
    first_seed: u64,
    progress: Option<&ProgressBar>,
) -> AuditReport {
    let start = Instant::now();

    let checks: Vec<BoardCheck> = (0..count as u64)
        .into_par_iter()
        .map(|offset| {
            let mut rng = StdRng::seed_from_u64(first_seed.wrapping_add(offset));
            let check = BoardCheck::of(&generator.generate(&mut rng));
            if let Some(pb) = progress {
                pb.inc(1);
            }
            check
        })
        .collect();

    let duration = start.elapsed();
    let mut column_words = [0; COLUMN_COUNT];
    for check in &checks {
        for (total, n) in column_words.iter_mut().zip(check.column_words) {
            *total += n;
        }
    }

    AuditReport {
        boards: checks.len(),
        relaxed: checks.iter().filter(|c| c.relaxed).count(),
        spacing_violations: checks
            .iter()
            .filter(|c| !c.relaxed)
            .map(|c| c.spacing_violations)
            .sum(),
        overlaps: checks.iter().map(|c| c.overlaps).sum(),
        secret_violations: checks.iter().filter(|c| c.secret_violation).count(),
        corrupt_words: checks.iter().map(|c| c.corrupt_words).sum(),
        column_words,
        duration,
        boards_per_second: if duration.as_secs_f64() > 0.0 {
            checks.len() as f64 / duration.as_secs_f64()
        } else {
            0.0
        },
    }
}

/// Run the audit with a progress bar
pub fn run_audit(generator: &GridGenerator<'_>, count: usize, first_seed: u64) -> AuditReport {
    println!("🔍 Auditing {count} boards from seed {first_seed}...");

    let pb = ProgressBar::new(count as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );

    let report = audit_boards(generator, count, first_seed, Some(&pb));
    pb.finish_with_message("Complete!");

    info!(
        boards = report.boards,
        relaxed = report.relaxed,
        clean = report.is_clean(),
        "audit finished"
    );
    report
}

fn violation_line(label: &str, count: usize) {
    let value = count.to_string();
    let value = if count == 0 { value.green() } else { value.red().bold() };
    println!("  {label:<22}{value}");
}

/// Print audit results
pub fn print_audit_report(report: &AuditReport) {
    println!("\n{}", "═".repeat(60));
    println!(" Audit Results ");
    println!("{}", "═".repeat(60));

    println!("\n📊 {}", "Generation".bright_cyan().bold());
    println!("  Boards generated:     {}", report.boards);
    println!(
        "  Relaxed boards:       {} {}",
        report.relaxed,
        format!(
            "({:.2}%)",
            report.relaxed as f64 / report.boards.max(1) as f64 * 100.0
        )
        .yellow()
    );
    println!("  Total time:           {:.2}s", report.duration.as_secs_f64());
    println!("  Boards per second:    {:.0}", report.boards_per_second);

    println!("\n🧪 {}", "Invariants".bright_cyan().bold());
    violation_line("Spacing violations:", report.spacing_violations);
    violation_line("Overlapping words:", report.overlaps);
    violation_line("Secret violations:", report.secret_violations);
    violation_line("Corrupt words:", report.corrupt_words);

    println!("\n📈 {}", "Words per Column".bright_cyan().bold());
    let total: usize = report.column_words.iter().sum();
    for (column, &n) in report.column_words.iter().enumerate() {
        let share = n as f64 / total.max(1) as f64;
        println!(
            "  Column {column}: {} {n:6} ({:5.1}%)",
            create_progress_bar(share, 1.0, 40).green(),
            share * 100.0
        );
    }

    println!();
    if report.is_clean() {
        println!("{}", "✅ All invariants held".green().bold());
    } else {
        println!("{}", "❌ Invariant violations found".red().bold());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::wordlists::{WORDS, loader::words_from_slice};

    #[test]
    fn builtin_bank_audits_clean() {
        let bank = words_from_slice(WORDS);
        let generator = GridGenerator::new(&bank).unwrap();
        let report = audit_boards(&generator, 200, 42, None);

        assert_eq!(report.boards, 200);
        assert!(report.is_clean(), "{report:?}");
        assert_eq!(report.column_words.iter().sum::<usize>(), 200 * 8);
    }

    #[test]
    fn audit_is_reproducible() {
        let bank = words_from_slice(WORDS);
        let generator = GridGenerator::new(&bank).unwrap();
        let a = audit_boards(&generator, 30, 5, None);
        let b = audit_boards(&generator, 30, 5, None);
        assert_eq!(a.relaxed, b.relaxed);
        assert_eq!(a.column_words, b.column_words);
    }

    #[test]
    fn crowded_boards_are_counted_as_relaxed() {
        // More words than spaced slots exist forces the fallback
        let bank: Vec<Word> = (0..150u32)
            .map(|i| {
                let letters: String = [i / 26 % 26, i % 26, 0, 1]
                    .iter()
                    .map(|&n| char::from(b'a' + n as u8))
                    .collect();
                Word::new(letters).unwrap()
            })
            .collect();
        let generator = GridGenerator::new(&bank).unwrap().with_word_count(150);
        let report = audit_boards(&generator, 2, 0, None);

        assert_eq!(report.relaxed, 2);
        assert_eq!(report.secret_violations, 0);
    }

    #[test]
    fn zero_boards() {
        let bank = words_from_slice(WORDS);
        let generator = GridGenerator::new(&bank).unwrap();
        let report = audit_boards(&generator, 0, 0, None);
        assert_eq!(report.boards, 0);
        assert!(report.is_clean());
    }
}
