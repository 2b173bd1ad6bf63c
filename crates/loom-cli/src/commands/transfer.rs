use std::path::Path;

use loom_core::{Adventure, AdventureExport};

pub fn export(path: &Path, output: &Path) -> Result<(), String> {
    let adventure = super::load(path)?;
    let export = AdventureExport::from(&adventure);

    std::fs::write(output, export.to_json_pretty())
        .map_err(|e| format!("cannot write {}: {e}", output.display()))?;
    println!("  Exported \"{}\" to {}", export.title, output.display());
    Ok(())
}

pub fn import(path: &Path, input: &Path) -> Result<(), String> {
    if path.exists() {
        return Err(format!(
            "{} already exists; import to another file with --file",
            path.display()
        ));
    }

    let json = std::fs::read_to_string(input)
        .map_err(|e| format!("cannot read {}: {e}", input.display()))?;
    let export = AdventureExport::from_json(&json).map_err(|e| e.to_string())?;
    let adventure = Adventure::from_export(export);

    super::save(path, &adventure)?;
    println!(
        "  Imported \"{}\" ({} location{}) as {}",
        adventure.title,
        adventure.game_data.len(),
        if adventure.game_data.len() == 1 { "" } else { "s" },
        adventure.id
    );
    Ok(())
}
