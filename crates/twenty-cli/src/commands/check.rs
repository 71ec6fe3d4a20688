use std::path::Path;

use colored::Colorize;

use twenty_core::Difficulty;

pub fn run(catalogue: Option<&Path>) -> Result<(), String> {
    let catalogue = super::load_catalogue(catalogue)?;

    let mut problems = 0;
    for difficulty in Difficulty::ALL {
        if catalogue.partition(difficulty).is_empty() {
            println!(
                "  {} no {difficulty} characters",
                "warning:".yellow().bold()
            );
        }
    }

    for (difficulty, a, b) in catalogue.indistinguishable() {
        problems += 1;
        println!(
            "  {} {} and {} ({difficulty}) have the same traits",
            "error:".red().bold(),
            a.name,
            b.name
        );
    }

    for (difficulty, character) in catalogue.iter() {
        if character.hints.is_empty() {
            println!(
                "  {} {} ({difficulty}) has no hints",
                "warning:".yellow().bold(),
                character.name
            );
        }
    }

    if problems > 0 {
        return Err(format!(
            "{problems} pair{} of characters cannot be told apart",
            if problems == 1 { "" } else { "s" }
        ));
    }

    println!("  All checks passed.");
    println!(
        "  {} characters in {} difficulties",
        catalogue.len(),
        catalogue.difficulties().len()
    );

    Ok(())
}
