use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::Colorize;

use twenty_core::{Entry, Mode, QuestionOracle, Session, parse_answer};

use crate::GameArgs;

pub fn run(
    catalogue: Option<&Path>,
    args: &GameArgs,
    secret: Option<&str>,
    transcript: Option<&Path>,
) -> Result<(), String> {
    let catalogue = super::load_catalogue(catalogue)?;
    let config = super::game_config(args)?;
    let (oracle, oracle_label) = super::oracle(args);

    let mut session = match secret {
        Some(name) => {
            let roster = catalogue.partition(config.difficulty).to_vec();
            Session::with_secret(roster, name, config)
        }
        None => Session::new(&catalogue, config),
    }
    .map_err(|e| format!("failed to start game: {e}"))?;

    println!("  {} Twenty Questions", "Starting".bold());
    println!("  {}", session.status().dimmed());
    if session.mode() == Mode::HumanGuesses {
        println!("  Oracle: {oracle_label}");
        println!("  Ask a question, 'guess <name>', or 'hint'. 'status', 'new', 'quit'.\n");
    } else {
        println!("  Answer y or n. 'status', 'new', 'quit'.\n");
    }

    let entries = session.start().map_err(|e| e.to_string())?;
    print_entries(entries);

    let mut finished = Vec::new();
    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => break,
            "status" => {
                println!("  {}\n", session.status());
                continue;
            }
            "new" => {
                if transcript.is_some() {
                    finished.push(export(&session, transcript));
                }
                session.reset();
                println!("  {}\n", "New game".bold());
                let entries = session.start().map_err(|e| e.to_string())?;
                print_entries(entries);
                continue;
            }
            _ => {}
        }

        match step(&mut session, input, oracle.as_ref()) {
            Ok(()) => {
                if session.state().is_terminal() {
                    println!("  Type 'new' to play again or 'quit' to exit.\n");
                }
            }
            Err(e) => println!("  {}\n", e.yellow()),
        }
    }

    if let Some(path) = transcript {
        finished.push(export(&session, Some(path)));
        std::fs::write(path, finished.join("\n"))
            .map_err(|e| format!("cannot write {}: {e}", path.display()))?;
        println!("  Transcript written to {}", path.display());
    }

    Ok(())
}

/// Apply one line of input and print what the game said back.
fn step(session: &mut Session, input: &str, oracle: &dyn QuestionOracle) -> Result<(), String> {
    let entries = match session.mode() {
        Mode::HumanGuesses => session.submit(input, oracle),
        Mode::SystemGuesses => {
            let yes = parse_answer(input).ok_or("answer with y or n")?;
            session.answer(yes)
        }
    }
    .map_err(|e| e.to_string())?;
    print_entries(entries);
    Ok(())
}

/// Print the game's side of the conversation. The player's own lines are
/// already on screen.
fn print_entries(entries: &[Entry]) {
    for entry in entries {
        let text = entry.text();
        match entry {
            Entry::HumanQuestion { .. } | Entry::Guess { .. } | Entry::HumanAnswer { .. } => {}
            Entry::Outcome { won, .. } if *won => println!("  {}", text.green().bold()),
            Entry::Outcome { .. } => println!("  {}", text.red().bold()),
            Entry::OracleFailure { .. } => println!("  {}", text.yellow()),
            Entry::Hint { .. } => println!("  {}", text.cyan()),
            Entry::SystemQuestion { .. } | Entry::FinalGuess { .. } => {
                println!("  {}", text.bold())
            }
            _ => println!("  {text}"),
        }
    }
    println!();
}

/// Render the session transcript, as plain text for `.txt` paths and
/// Markdown otherwise.
fn export(session: &Session, path: Option<&Path>) -> String {
    let plain = path
        .and_then(|p| p.extension())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("txt"));
    if plain {
        session.transcript().export_text()
    } else {
        session.transcript().export_markdown()
    }
}
