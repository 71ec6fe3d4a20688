use std::path::Path;

use colored::Colorize;

pub fn run(catalogue: Option<&Path>, name: &str) -> Result<(), String> {
    let catalogue = super::load_catalogue(catalogue)?;

    let (difficulty, character) = catalogue
        .find(name)
        .ok_or_else(|| format!("character not found: \"{name}\""))?;

    println!(
        "  {} [{}]",
        character.name.bold(),
        difficulty.to_string().dimmed()
    );
    println!();

    if character.traits.is_empty() {
        println!("  traits: (none)");
    } else {
        println!("  traits:");
        for tag in &character.traits {
            println!("    {:<24} {}", tag.name(), tag.question().dimmed());
        }
    }

    if !character.hints.is_empty() {
        println!();
        println!("  {}", "Hints:".dimmed());
        for (i, hint) in character.hints.iter().enumerate() {
            println!("    {}. {hint}", i + 1);
        }
    }

    Ok(())
}
