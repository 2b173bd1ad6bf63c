use std::path::Path;

use loom_core::{ChoiceField, ChoiceId};

pub fn add(path: &Path, spec: &str) -> Result<(), String> {
    let mut adventure = super::load(path)?;
    let location = super::resolve_location(&adventure.game_data, spec)?;

    let id = adventure
        .game_data
        .add_choice(&location)
        .map_err(|e| e.to_string())?;

    super::save(path, &adventure)?;
    println!("  Added choice {id} to {location}");
    println!("  Wire it up with: loom choice set {location} {id} --dest <location-id>");
    Ok(())
}

pub fn set(
    path: &Path,
    spec: &str,
    choice: &str,
    text: Option<String>,
    dest: Option<String>,
    requires: Option<String>,
) -> Result<(), String> {
    let mut adventure = super::load(path)?;
    let location = super::resolve_location(&adventure.game_data, spec)?;
    let choice_id = ChoiceId::from(choice);

    if text.is_none() && dest.is_none() && requires.is_none() {
        return Err("nothing to change; pass --text, --dest, or --requires".to_string());
    }

    let graph = &mut adventure.game_data;
    if let Some(text) = text {
        graph
            .update_choice(&location, &choice_id, ChoiceField::Text, &text)
            .map_err(|e| e.to_string())?;
    }
    if let Some(dest) = dest {
        graph
            .update_choice(&location, &choice_id, ChoiceField::Destination, &dest)
            .map_err(|e| e.to_string())?;
        if !dest.is_empty() && !graph.contains(&loom_core::LocationId::from(dest.as_str())) {
            println!("  Note: {dest} does not exist yet; the choice leads nowhere until it does.");
        }
    }
    if let Some(requires) = requires {
        graph
            .update_choice(&location, &choice_id, ChoiceField::RequiresItem, &requires)
            .map_err(|e| e.to_string())?;
    }

    super::save(path, &adventure)?;
    println!("  Updated choice {choice_id}");
    Ok(())
}

pub fn rm(path: &Path, spec: &str, choice: &str) -> Result<(), String> {
    let mut adventure = super::load(path)?;
    let location = super::resolve_location(&adventure.game_data, spec)?;
    let choice_id = ChoiceId::from(choice);

    adventure
        .game_data
        .remove_choice(&location, &choice_id)
        .map_err(|e| e.to_string())?;

    super::save(path, &adventure)?;
    println!("  Removed choice {choice_id} from {location}");
    Ok(())
}
