use std::path::Path;

pub fn run(path: &Path, spec: &str) -> Result<(), String> {
    let mut adventure = super::load(path)?;
    let id = super::resolve_location(&adventure.game_data, spec)?;

    let removed = adventure
        .game_data
        .remove_location(&id)
        .map_err(|e| e.to_string())?;

    super::save(path, &adventure)?;
    println!(
        "  Removed \"{}\" ({}) and every choice that pointed at it",
        removed.name, removed.id
    );
    Ok(())
}
