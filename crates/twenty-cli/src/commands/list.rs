use std::path::Path;

use comfy_table::{ContentArrangement, Table};

pub fn run(catalogue: Option<&Path>, difficulty: Option<&str>) -> Result<(), String> {
    let catalogue = super::load_catalogue(catalogue)?;
    let only = difficulty.map(super::parse_difficulty).transpose()?;

    let characters: Vec<_> = catalogue
        .iter()
        .filter(|(d, _)| only.is_none_or(|o| o == *d))
        .collect();

    if characters.is_empty() {
        println!("  No characters found.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Name", "Difficulty", "Traits", "Hints"]);

    for (difficulty, character) in &characters {
        table.add_row(vec![
            character.name.clone(),
            difficulty.to_string(),
            character.traits.len().to_string(),
            character.hints.len().to_string(),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} characters", characters.len());

    Ok(())
}
