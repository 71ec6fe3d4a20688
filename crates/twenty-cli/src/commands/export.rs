use std::path::Path;

pub fn run(catalogue: Option<&Path>, output: Option<&Path>) -> Result<(), String> {
    let catalogue = super::load_catalogue(catalogue)?;
    let json = catalogue.to_json().map_err(|e| e.to_string())?;

    match output {
        Some(path) => {
            std::fs::write(path, &json)
                .map_err(|e| format!("cannot write {}: {e}", path.display()))?;
            println!("  Exported {} characters to {}", catalogue.len(), path.display());
        }
        None => println!("{json}"),
    }

    Ok(())
}
