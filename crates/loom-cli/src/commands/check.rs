use std::path::Path;

use colored::Colorize;
use loom_core::lint::lint;

pub fn run(path: &Path) -> Result<(), String> {
    let adventure = super::load(path)?;
    let warnings = lint(&adventure.game_data);

    if warnings.is_empty() {
        println!("  {} no warnings", "ok:".green());
        return Ok(());
    }

    for warning in &warnings {
        println!("  {} {warning}", "warning:".yellow());
    }
    println!();
    println!(
        "  {} warning{}",
        warnings.len(),
        if warnings.len() == 1 { "" } else { "s" }
    );

    // Warnings are authoring aids, never failures.
    Ok(())
}
