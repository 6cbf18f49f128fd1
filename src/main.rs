//! Word Game Solver - CLI
//!
//! Solves Word Hunt, Anagrams and Word Bites boards from the command line.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use std::path::{Path, PathBuf};
use word_game_solver::{
    commands::{BitesConfig, run_filter, solve_anagram, solve_bites, solve_grid},
    config::{BITES_COLS, BITES_ROWS, BUILTIN_WORD_LIST, MIN_WORD_LENGTH, WORD_LIST_PATH},
    core::{Block, BoardShape},
    output::{print_anagram_report, print_bites_report, print_filter_report, print_grid_report},
    solver::Solver,
    wordlists::Dictionary,
};

#[derive(Parser)]
#[command(
    name = "word_game_solver",
    about = "Finds every playable word on Word Hunt, Anagrams and Word Bites boards",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Word list: 'builtin' for the embedded sample, or path to file
    #[arg(short = 'w', long, global = true, default_value = WORD_LIST_PATH)]
    wordlist: String,

    /// Shortest word to report
    #[arg(short = 'm', long, global = true, default_value_t = MIN_WORD_LENGTH)]
    min_length: usize,

    /// Show paths and tiles; repeat for more log output
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a Word Hunt grid ('.' marks a hole)
    Grid {
        /// Board shape: 4x4, 5x5, X or O
        #[arg(short, long, default_value = "4x4")]
        shape: BoardShape,

        /// One string per row, top to bottom
        #[arg(required = true)]
        rows: Vec<String>,
    },

    /// Solve an Anagrams letter bag
    Anagram {
        /// Board shape: ANAGRAM6 or ANAGRAM7
        #[arg(short, long)]
        shape: Option<BoardShape>,

        /// The letters on the board
        letters: String,
    },

    /// Solve a Word Bites block board
    Bites {
        /// Board rows
        #[arg(long, default_value_t = BITES_ROWS)]
        rows: usize,

        /// Board columns
        #[arg(long, default_value_t = BITES_COLS)]
        cols: usize,

        /// Keep touching single blocks apart
        #[arg(long)]
        no_combine: bool,

        /// Blocks: E@0,4 (single), R-A@4,1 (horizontal), S|T@1,2 (vertical)
        #[arg(required = true)]
        blocks: Vec<Block>,
    },

    /// Filter a raw word list down to playable 3-16 letter words
    Filter {
        /// Raw word list
        input: PathBuf,

        /// Where to write the filtered list
        output: PathBuf,
    },
}

/// Load the dictionary selected by the -w flag
fn load_dictionary(wordlist: &str) -> Result<Dictionary> {
    if wordlist == BUILTIN_WORD_LIST {
        return Ok(Dictionary::builtin());
    }
    Dictionary::load(wordlist).with_context(|| format!("Failed to load word list '{wordlist}'"))
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let verbose = cli.verbose > 0;

    match cli.command {
        Commands::Grid { shape, rows } => {
            let dictionary = load_dictionary(&cli.wordlist)?;
            let solver = Solver::new(&dictionary).with_min_length(cli.min_length);
            run_grid_command(&rows, shape, &solver, verbose)
        }
        Commands::Anagram { shape, letters } => {
            let dictionary = load_dictionary(&cli.wordlist)?;
            let solver = Solver::new(&dictionary).with_min_length(cli.min_length);
            run_anagram_command(&letters, shape, &solver, verbose)
        }
        Commands::Bites {
            rows,
            cols,
            no_combine,
            blocks,
        } => {
            let dictionary = load_dictionary(&cli.wordlist)?;
            let solver = Solver::new(&dictionary).with_min_length(cli.min_length);
            let config = BitesConfig {
                rows,
                cols,
                blocks,
                combine: !no_combine,
            };
            let report = solve_bites(&config, &solver);
            print_bites_report(&report, verbose);
            Ok(())
        }
        Commands::Filter { input, output } => run_filter_command(&input, &output),
    }
}

fn run_grid_command(
    rows: &[String],
    shape: BoardShape,
    solver: &Solver<'_>,
    verbose: bool,
) -> Result<()> {
    let report = solve_grid(rows, shape, solver).context("Invalid grid")?;
    print_grid_report(&report, verbose);
    Ok(())
}

fn run_anagram_command(
    letters: &str,
    shape: Option<BoardShape>,
    solver: &Solver<'_>,
    verbose: bool,
) -> Result<()> {
    let report = solve_anagram(letters, shape, solver).context("Invalid letters")?;
    print_anagram_report(&report, verbose);
    Ok(())
}

fn run_filter_command(input: &Path, output: &Path) -> Result<()> {
    let report = run_filter(input, output)
        .with_context(|| format!("Failed to filter '{}'", input.display()))?;
    print_filter_report(&report);
    Ok(())
}
