//! Weaver Solver - CLI
//!
//! Finds shortest word ladders between two words using exact BFS, with a
//! management command for editing the backing dictionary file.

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use weaver_solver::{
    commands::{SolveConfig, dictionary_info, remove_word, run_solve},
    core::Mode,
    dictionary::Dictionary,
    output::{print_dictionary_info, print_remove_outcome, print_solve_report},
    solver::SearchLimits,
};

#[derive(Parser)]
#[command(
    name = "weaver_solver",
    about = "Word-ladder solver for Weaver-style puzzles (exact BFS shortest paths)",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Dictionary file (one word per line); defaults to the embedded list
    #[arg(short = 'd', long, global = true)]
    dictionary: Option<PathBuf>,

    /// Maximum BFS dequeues before giving up
    #[arg(long, global = true, default_value_t = SearchLimits::DEFAULT_MAX_ITERATIONS)]
    max_iterations: usize,

    /// Maximum words in a ladder before a branch is treated as a dead end
    #[arg(long, global = true, default_value_t = SearchLimits::DEFAULT_MAX_DEPTH)]
    max_depth: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the shortest ladder between two words
    Solve {
        /// Start word
        start: String,

        /// End word
        end: String,

        /// Transformation mode
        #[arg(short, long, value_enum, default_value_t = Mode::Weaver)]
        mode: Mode,
    },

    /// Remove a word from a dictionary file (requires --dictionary)
    Remove {
        /// Word to remove
        word: String,
    },

    /// Show dictionary source and size
    Info,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let dictionary = match &cli.dictionary {
        Some(path) => Dictionary::from_file(path),
        None => Dictionary::embedded(),
    };

    match cli.command {
        Commands::Solve { start, end, mode } => {
            let mut config = SolveConfig::new(start, end, mode);
            config.limits = SearchLimits {
                max_iterations: cli.max_iterations,
                max_depth: cli.max_depth,
            };

            // Solve failures are normal outcomes, printed rather than returned
            let report = run_solve(config, &dictionary);
            print_solve_report(&report);
            Ok(())
        }
        Commands::Remove { word } => {
            let Some(path) = &cli.dictionary else {
                bail!("remove needs a file-backed dictionary; pass --dictionary <path>");
            };

            let outcome = remove_word(path, &word)?;
            print_remove_outcome(&word, &outcome);
            Ok(())
        }
        Commands::Info => {
            let info = dictionary_info(&dictionary);
            print_dictionary_info(&info);
            Ok(())
        }
    }
}
