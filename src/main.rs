//! Reverse Wordle - CLI
//!
//! Recovers plausible guess sequences from a Wordle feedback grid.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use reverse_wordle::{
    commands::{SolveConfig, dictionary_report, explain_row, solve_grid},
    core::Word,
    output::{
        ProgressObserver, VerboseObserver, print_constraint_report, print_dictionary_report,
        print_solve_result,
    },
    solver::{ConstraintInheritance, SearchConfig},
    wordlists::{load_from_file, load_grid},
};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "reverse_wordle",
    about = "Recover the guesses behind a Wordle board from its tile colours",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find every guess sequence that fits a puzzle
    Solve {
        /// Puzzle file: solution word, then one feedback row per line
        puzzle: PathBuf,

        /// Dictionary file, one five-letter word per line
        #[arg(short, long)]
        dictionary: PathBuf,

        /// Trace each search step to stderr
        #[arg(short, long)]
        verbose: bool,

        /// Scan the dictionary on all cores
        #[arg(short, long)]
        parallel: bool,

        /// Let each row inherit the constraints derived for the row before it
        #[arg(long)]
        inherit_constraints: bool,

        /// Print at most this many sequences
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Print a dictionary in search order
    Dict {
        /// Dictionary file, one five-letter word per line
        dictionary: PathBuf,
    },

    /// Show the constraints one feedback row places on its words
    Constraints {
        /// Puzzle file: solution word, then one feedback row per line
        puzzle: PathBuf,

        /// Dictionary file, one five-letter word per line
        #[arg(short, long)]
        dictionary: PathBuf,

        /// Feedback row to inspect (1 = first row after the solution)
        #[arg(short, long, default_value = "1")]
        row: usize,

        /// Word placed on the previous row (defaults to the solution for row 1)
        #[arg(short, long)]
        word: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Solve {
            puzzle,
            dictionary,
            verbose,
            parallel,
            inherit_constraints,
            limit,
        } => {
            let inheritance = if inherit_constraints {
                ConstraintInheritance::CloneParent
            } else {
                ConstraintInheritance::Fresh
            };
            let config = SolveConfig {
                search: SearchConfig::sequential()
                    .parallel(parallel)
                    .inheritance(inheritance),
                limit,
            };
            run_solve_command(&puzzle, &dictionary, config, verbose)
        }
        Commands::Dict { dictionary } => run_dict_command(&dictionary),
        Commands::Constraints {
            puzzle,
            dictionary,
            row,
            word,
        } => run_constraints_command(&puzzle, &dictionary, row, word.as_deref()),
    }
}

fn load_dictionary(path: &Path) -> Result<Vec<Word>> {
    let words = load_from_file(path)
        .with_context(|| format!("failed to read dictionary {}", path.display()))?;
    if words.is_empty() {
        bail!("dictionary {} has no five-letter words", path.display());
    }
    Ok(words)
}

fn run_solve_command(
    puzzle: &Path,
    dictionary: &Path,
    config: SolveConfig,
    verbose: bool,
) -> Result<()> {
    let grid = load_grid(puzzle)?;
    let words = load_dictionary(dictionary)?;

    let result = if verbose {
        solve_grid(&grid, &words, config, &VerboseObserver)?
    } else {
        let progress = ProgressObserver::new();
        let result = solve_grid(&grid, &words, config, &progress);
        progress.finish();
        result?
    };

    print_solve_result(&result, verbose);
    Ok(())
}

fn run_dict_command(dictionary: &Path) -> Result<()> {
    let words = load_dictionary(dictionary)?;
    print_dictionary_report(&dictionary_report(&words));
    Ok(())
}

fn run_constraints_command(
    puzzle: &Path,
    dictionary: &Path,
    row: usize,
    word: Option<&str>,
) -> Result<()> {
    let grid = load_grid(puzzle)?;
    let words = load_dictionary(dictionary)?;

    let report = explain_row(&grid, &words, row, word)?;
    print_constraint_report(&report);
    Ok(())
}
