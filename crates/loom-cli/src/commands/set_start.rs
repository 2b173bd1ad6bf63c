use std::path::Path;

pub fn run(path: &Path, spec: &str) -> Result<(), String> {
    let mut adventure = super::load(path)?;
    let id = super::resolve_location(&adventure.game_data, spec)?;

    adventure
        .game_data
        .set_start(&id)
        .map_err(|e| e.to_string())?;

    super::save(path, &adventure)?;
    println!("  {id} is now the start location");
    Ok(())
}
