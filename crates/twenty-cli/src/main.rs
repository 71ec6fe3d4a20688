//! CLI frontend for the Twenty guessing game.

mod commands;
mod logging;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "twenty",
    about = "Twenty: a Marvel twenty questions game",
    version,
    propagate_version = true
)]
struct Cli {
    /// Catalogue JSON file (built-in characters when omitted)
    #[arg(short, long, global = true)]
    catalogue: Option<PathBuf>,

    /// More logging on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Settings shared by `play` and `tui`.
#[derive(clap::Args)]
struct GameArgs {
    /// Who guesses: "you" or "me"
    #[arg(short, long, default_value = "you")]
    mode: String,

    /// Character list: easy, medium, or hard
    #[arg(short, long, default_value = "easy")]
    difficulty: String,

    /// How questions are chosen when the game guesses (priority, random, best-split)
    #[arg(long, default_value = "priority")]
    strategy: String,

    /// RNG seed for deterministic games
    #[arg(short, long, default_value = "42")]
    seed: u64,

    /// Wrong guesses allowed
    #[arg(long, default_value = "5")]
    attempts: u32,

    /// Question budget
    #[arg(long, default_value = "20")]
    questions: u32,

    /// Chat-completions endpoint for answering questions
    #[arg(long, env = "TWENTY_ORACLE_URL")]
    oracle_url: Option<String>,

    /// Model name sent to the oracle
    #[arg(long)]
    model: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play in the terminal, one line at a time
    Play {
        #[command(flatten)]
        game: GameArgs,

        /// Play as (or against) a specific character
        #[arg(long = "as")]
        secret: Option<String>,

        /// Write the transcript here when the session ends (.txt for plain text)
        #[arg(short, long)]
        transcript: Option<PathBuf>,
    },

    /// Launch the full-screen terminal UI
    Tui {
        #[command(flatten)]
        game: GameArgs,

        /// Log file (defaults to the system temp directory)
        #[arg(long)]
        log_file: Option<PathBuf>,
    },

    /// List the characters in the catalogue
    List {
        /// Only this difficulty (easy, medium, hard)
        difficulty: Option<String>,
    },

    /// Show one character's traits and hints
    Show {
        /// Character name (case-insensitive)
        name: String,
    },

    /// Validate the catalogue
    Check,

    /// Write the catalogue as JSON
    Export {
        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Let the game guess every character and report how it does
    Simulate {
        /// Question strategy (priority, random, best-split)
        #[arg(long, default_value = "priority")]
        strategy: String,

        /// Games per character with different seeds
        #[arg(short, long, default_value = "1")]
        rounds: u64,

        /// First seed
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// Question budget
        #[arg(long, default_value = "20")]
        questions: u32,
    },
}

fn main() {
    let cli = Cli::parse();
    let catalogue = cli.catalogue.as_deref();

    let result = match cli.command {
        Commands::Play {
            game,
            secret,
            transcript,
        } => logging::init_terminal(cli.verbose).and_then(|()| {
            commands::play::run(
                catalogue,
                &game,
                secret.as_deref(),
                transcript.as_deref(),
            )
        }),
        Commands::Tui { game, log_file } => {
            commands::tui::run(catalogue, &game, log_file.as_deref(), cli.verbose)
        }
        Commands::List { difficulty } => logging::init_terminal(cli.verbose)
            .and_then(|()| commands::list::run(catalogue, difficulty.as_deref())),
        Commands::Show { name } => logging::init_terminal(cli.verbose)
            .and_then(|()| commands::show::run(catalogue, &name)),
        Commands::Check => {
            logging::init_terminal(cli.verbose).and_then(|()| commands::check::run(catalogue))
        }
        Commands::Export { output } => logging::init_terminal(cli.verbose)
            .and_then(|()| commands::export::run(catalogue, output.as_deref())),
        Commands::Simulate {
            strategy,
            rounds,
            seed,
            questions,
        } => logging::init_terminal(cli.verbose).and_then(|()| {
            commands::simulate::run(catalogue, &strategy, rounds, seed, questions)
        }),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
