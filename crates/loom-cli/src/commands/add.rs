use std::path::Path;

use loom_core::LocationPatch;

pub fn run(path: &Path, name: Option<&str>) -> Result<(), String> {
    let mut adventure = super::load(path)?;
    let graph = &mut adventure.game_data;

    let id = graph.add_location();
    if let Some(name) = name {
        graph
            .update_location(
                &id,
                LocationPatch {
                    name: Some(name.to_string()),
                    ..Default::default()
                },
            )
            .map_err(|e| e.to_string())?;
    }

    let is_start = graph.location(&id).is_some_and(|l| l.is_start);
    super::save(path, &adventure)?;

    println!("  Added location {id}");
    if is_start {
        println!("  It is the first location, so it is now the start.");
    }
    Ok(())
}
