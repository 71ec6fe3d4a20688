pub mod check;
pub mod export;
pub mod list;
pub mod play;
pub mod show;
pub mod simulate;
pub mod tui;

use std::path::Path;

use twenty_core::{Catalogue, Difficulty, GameConfig, Mode, QuestionOracle, Strategy};
use twenty_oracle::OracleConfig;

use crate::GameArgs;

/// Load the catalogue file, or the built-in characters when none is given.
fn load_catalogue(path: Option<&Path>) -> Result<Catalogue, String> {
    match path {
        Some(path) => Catalogue::load(path).map_err(|e| e.to_string()),
        None => Ok(Catalogue::builtin()),
    }
}

fn parse_mode(s: &str) -> Result<Mode, String> {
    Mode::parse(s).ok_or_else(|| format!("unknown mode: \"{s}\" (expected you or me)"))
}

fn parse_difficulty(s: &str) -> Result<Difficulty, String> {
    Difficulty::parse(s)
        .ok_or_else(|| format!("unknown difficulty: \"{s}\" (expected easy, medium, or hard)"))
}

fn parse_strategy(s: &str) -> Result<Strategy, String> {
    Strategy::parse(s).ok_or_else(|| {
        format!("unknown strategy: \"{s}\" (expected priority, random, or best-split)")
    })
}

/// Build the game settings from the command line.
fn game_config(args: &GameArgs) -> Result<GameConfig, String> {
    Ok(GameConfig::default()
        .with_seed(args.seed)
        .with_mode(parse_mode(&args.mode)?)
        .with_difficulty(parse_difficulty(&args.difficulty)?)
        .with_strategy(parse_strategy(&args.strategy)?)
        .with_attempts(args.attempts)
        .with_max_questions(args.questions))
}

/// Oracle settings from the environment, overridden by flags.
fn oracle_config(args: &GameArgs) -> OracleConfig {
    let mut config = OracleConfig::from_env();
    if let Some(url) = &args.oracle_url {
        config = config.with_endpoint(url.clone());
    }
    if let Some(model) = &args.model {
        config = config.with_model(model.clone());
    }
    config
}

fn oracle(args: &GameArgs) -> (Box<dyn QuestionOracle>, String) {
    let config = oracle_config(args);
    (twenty_oracle::build(&config), twenty_oracle::describe(&config))
}
