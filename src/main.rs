//! hexhack - CLI
//!
//! Memory-dump word hunt with TUI and text modes, plus tools for inspecting
//! and auditing the board generator.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hexhack::{
    commands::{print_audit_report, run_audit, run_show, run_simple},
    core::Word,
    generator::GridGenerator,
    session::GameSession,
    wordlists::{
        WORDS,
        loader::{load_from_file, words_from_slice},
    },
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "hexhack",
    about = "Find the secret word hidden in a two-column memory dump",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Seed for board generation (random if omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Write logs to this file (RUST_LOG controls the level)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Wordlist: 'builtin' (default, 48 words) or path to a file of 4-letter words
    #[arg(short = 'w', long, global = true, default_value = "builtin")]
    wordlist: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple text mode (type coordinates instead of pointing)
    Simple,

    /// Print one generated board and exit
    Show {
        /// Highlight the secret and list the planted words
        #[arg(short, long)]
        reveal: bool,
    },

    /// Generate many boards and check the placement rules
    Audit {
        /// Number of boards to generate
        #[arg(short = 'n', long, default_value = "1000")]
        count: usize,
    },
}

/// Install the file logger; without a path, events are dropped
fn init_logging(path: Option<&Path>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };

    let log_file = std::fs::File::create(path)
        .with_context(|| format!("cannot create log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install logger: {e}"))
}

/// Load the word bank based on the -w flag
fn load_wordlist(wordlist_mode: &str) -> Result<Vec<Word>> {
    match wordlist_mode {
        "builtin" => Ok(words_from_slice(WORDS)),
        path => load_from_file(path).with_context(|| format!("cannot read wordlist {path}")),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_deref())?;

    let bank = load_wordlist(&cli.wordlist)?;
    let generator = GridGenerator::new(&bank)?;
    info!(words = bank.len(), seed = ?cli.seed, "word bank loaded");

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(generator, cli.seed),
        Commands::Simple => run_simple_command(generator, cli.seed),
        Commands::Show { reveal } => {
            run_show(&generator, &mut make_rng(cli.seed), reveal);
            Ok(())
        }
        Commands::Audit { count } => {
            let report = run_audit(&generator, count, cli.seed.unwrap_or(0));
            print_audit_report(&report);
            Ok(())
        }
    }
}

fn make_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
}

fn run_simple_command(generator: GridGenerator<'_>, seed: Option<u64>) -> Result<()> {
    let mut session = GameSession::new(generator, make_rng(seed));
    run_simple(&mut session)
}

fn run_play_command(generator: GridGenerator<'_>, seed: Option<u64>) -> Result<()> {
    use hexhack::interactive::{App, run_tui};

    let app = App::new(GameSession::new(generator, make_rng(seed)));
    run_tui(app)
}
