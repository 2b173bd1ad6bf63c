use std::path::Path;

use loom_core::LocationPatch;

/// The edits requested on the command line.
pub struct Edits {
    pub name: Option<String>,
    pub description: Option<String>,
    pub finish: bool,
    pub no_finish: bool,
    pub finish_message: Option<String>,
    pub adds_item: Option<String>,
}

pub fn run(path: &Path, spec: &str, edits: Edits) -> Result<(), String> {
    let mut adventure = super::load(path)?;
    let id = super::resolve_location(&adventure.game_data, spec)?;

    let is_finish = if edits.finish {
        Some(true)
    } else if edits.no_finish {
        Some(false)
    } else {
        None
    };

    let patch = LocationPatch {
        name: edits.name,
        description: edits.description,
        is_finish,
        finish_message: edits.finish_message,
        adds_item: edits.adds_item,
        choices: None,
    };

    adventure
        .game_data
        .update_location(&id, patch)
        .map_err(|e| e.to_string())?;

    super::save(path, &adventure)?;
    println!("  Updated {id}");
    if edits.finish {
        println!("  Marked as finish; its choices were cleared.");
    }
    Ok(())
}
