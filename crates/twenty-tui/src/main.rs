//! Standalone TUI binary for Twenty Questions.

use std::path::PathBuf;
use std::process;

use clap::Parser;

use twenty_core::{Catalogue, Difficulty, GameConfig, Mode, Strategy};
use twenty_oracle::OracleConfig;
use twenty_tui::{app::TuiApp, logging};

#[derive(Parser)]
#[command(
    name = "twenty-tui",
    about = "Terminal UI for Marvel Twenty Questions",
    version
)]
struct Args {
    /// Who guesses: "you" or "me"
    #[arg(long, default_value = "you")]
    mode: String,

    /// Character list: easy, medium, or hard
    #[arg(long, default_value = "easy")]
    difficulty: String,

    /// How questions are chosen when the game guesses (priority, random, best-split)
    #[arg(long, default_value = "priority")]
    strategy: String,

    /// RNG seed
    #[arg(long, default_value = "42")]
    seed: u64,

    /// Catalogue JSON file (built-in characters when omitted)
    #[arg(long)]
    catalogue: Option<PathBuf>,

    /// Chat-completions endpoint for answering questions
    #[arg(long, env = "TWENTY_ORACLE_URL")]
    oracle_url: Option<String>,

    /// Model name sent to the oracle
    #[arg(long)]
    model: Option<String>,

    /// Log file (defaults to the system temp directory)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// More logging (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();
    if let Err(e) = run(args) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn run(args: Args) -> Result<(), String> {
    let log_path = args.log_file.unwrap_or_else(logging::default_log_path);
    logging::init_file(&log_path, logging::level_for(args.verbose))?;

    let mode = Mode::parse(&args.mode).ok_or_else(|| format!("unknown mode: {}", args.mode))?;
    let difficulty = Difficulty::parse(&args.difficulty)
        .ok_or_else(|| format!("unknown difficulty: {}", args.difficulty))?;
    let strategy = Strategy::parse(&args.strategy)
        .ok_or_else(|| format!("unknown strategy: {}", args.strategy))?;

    let catalogue = match &args.catalogue {
        Some(path) => Catalogue::load(path).map_err(|e| e.to_string())?,
        None => Catalogue::builtin(),
    };

    let mut oracle_config = OracleConfig::from_env();
    if let Some(url) = args.oracle_url {
        oracle_config = oracle_config.with_endpoint(url);
    }
    if let Some(model) = args.model {
        oracle_config = oracle_config.with_model(model);
    }
    let label = twenty_oracle::describe(&oracle_config);
    let oracle = twenty_oracle::build(&oracle_config);

    let config = GameConfig::default()
        .with_seed(args.seed)
        .with_mode(mode)
        .with_difficulty(difficulty)
        .with_strategy(strategy);

    let app = TuiApp::new(catalogue, config, oracle, label)?;
    twenty_tui::terminal::run(app)
}
