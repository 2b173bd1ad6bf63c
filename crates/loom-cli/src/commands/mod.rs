pub mod add;
pub mod check;
pub mod choice;
pub mod generate;
pub mod init;
pub mod items;
pub mod list;
pub mod play;
pub mod rm;
pub mod set;
pub mod set_start;
pub mod show;
pub mod title;
pub mod transfer;

use std::path::Path;

use loom_core::{Adventure, AdventureGraph, LocationId};

/// Load the adventure file.
pub fn load(path: &Path) -> Result<Adventure, String> {
    let json = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    Adventure::from_json(&json).map_err(|e| e.to_string())
}

/// Replace the adventure file wholesale with the new revision.
pub fn save(path: &Path, adventure: &Adventure) -> Result<(), String> {
    std::fs::write(path, adventure.to_json_pretty())
        .map_err(|e| format!("cannot write {}: {e}", path.display()))
}

/// Resolve a user-supplied location reference: an exact id, or a
/// case-insensitive name when exactly one location carries it.
pub fn resolve_location(graph: &AdventureGraph, spec: &str) -> Result<LocationId, String> {
    let as_id = LocationId::from(spec);
    if graph.contains(&as_id) {
        return Ok(as_id);
    }

    let matches: Vec<&LocationId> = graph
        .locations()
        .filter(|l| l.name.eq_ignore_ascii_case(spec))
        .map(|l| &l.id)
        .collect();
    match matches.as_slice() {
        [id] => Ok((*id).clone()),
        [] => Err(format!("no location with id or name \"{spec}\"")),
        _ => Err(format!(
            "name \"{spec}\" matches {} locations; use the id",
            matches.len()
        )),
    }
}
