use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use twenty_core::{Character, GameConfig, GameState, Mode, Session};

/// Result of one self-played game.
struct GameStats {
    won: bool,
    questions: u32,
}

/// Per-difficulty totals.
struct Summary {
    won: usize,
    avg_questions: f64,
    max_questions: u32,
}

fn summarize(stats: &[GameStats]) -> Summary {
    let total: u64 = stats.iter().map(|s| u64::from(s.questions)).sum();
    Summary {
        won: stats.iter().filter(|s| s.won).count(),
        avg_questions: if stats.is_empty() {
            0.0
        } else {
            total as f64 / stats.len() as f64
        },
        max_questions: stats.iter().map(|s| s.questions).max().unwrap_or(0),
    }
}

/// Play a game against `name`, answering every question truthfully.
fn self_play(
    roster: Vec<Character>,
    name: &str,
    config: GameConfig,
) -> Result<GameStats, String> {
    let mut session = Session::with_secret(roster, name, config).map_err(|e| e.to_string())?;
    session.start().map_err(|e| e.to_string())?;
    while !session.state().is_terminal() {
        let yes = session.truthful_answer().map_err(|e| e.to_string())?;
        session.answer(yes).map_err(|e| e.to_string())?;
    }
    Ok(GameStats {
        won: session.state() == GameState::Win,
        questions: session.questions_asked(),
    })
}

pub fn run(
    catalogue: Option<&Path>,
    strategy: &str,
    rounds: u64,
    seed: u64,
    questions: u32,
) -> Result<(), String> {
    let catalogue = super::load_catalogue(catalogue)?;
    let strategy = super::parse_strategy(strategy)?;
    let rounds = rounds.max(1);

    println!(
        "  Simulating {} strategy, {rounds} round{} per character",
        strategy.to_string().bold(),
        if rounds == 1 { "" } else { "s" }
    );
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Difficulty", "Games", "Wins", "Avg questions", "Max questions"]);

    let mut games = 0usize;
    let mut wins = 0usize;
    let mut misses: Vec<String> = Vec::new();

    for difficulty in catalogue.difficulties() {
        let roster = catalogue.partition(difficulty);
        let mut stats = Vec::new();
        for character in roster {
            for round in 0..rounds {
                let config = GameConfig::default()
                    .with_mode(Mode::SystemGuesses)
                    .with_difficulty(difficulty)
                    .with_strategy(strategy)
                    .with_max_questions(questions)
                    .with_seed(seed.wrapping_add(round));
                let result = self_play(roster.to_vec(), &character.name, config)?;
                if !result.won {
                    misses.push(format!("{} (seed {})", character.name, seed.wrapping_add(round)));
                }
                stats.push(result);
            }
        }

        let Summary {
            won,
            avg_questions: avg,
            max_questions: max,
        } = summarize(&stats);
        log::debug!("{difficulty}: {won}/{} won", stats.len());

        table.add_row(vec![
            difficulty.to_string(),
            stats.len().to_string(),
            won.to_string(),
            format!("{avg:.1}"),
            max.to_string(),
        ]);
        games += stats.len();
        wins += won;
    }

    println!("{table}");
    println!();

    let rate = if games == 0 {
        0.0
    } else {
        100.0 * wins as f64 / games as f64
    };
    println!("  Win rate: {} ({wins}/{games})", format!("{rate:.1}%").bold());

    if !misses.is_empty() {
        println!();
        println!("  {}", "Missed:".dimmed());
        for miss in &misses {
            println!("    {miss}");
        }
    }

    Ok(())
}
