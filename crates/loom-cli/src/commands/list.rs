use std::path::Path;

use comfy_table::{ContentArrangement, Table};

pub fn run(path: &Path) -> Result<(), String> {
    let adventure = super::load(path)?;
    let graph = &adventure.game_data;

    println!("  {}", adventure.title);

    if graph.is_empty() {
        println!("  No locations yet. Add one with: loom add");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Id", "Name", "Flags", "Choices", "Item"]);

    for location in graph.locations() {
        let mut flags = Vec::new();
        if location.is_start {
            flags.push("start");
        }
        if location.is_finish {
            flags.push("finish");
        }

        table.add_row(vec![
            location.id.to_string(),
            location.name.clone(),
            flags.join(", "),
            location.choices.len().to_string(),
            location.grants().unwrap_or("—").to_string(),
        ]);
    }

    println!("{table}");
    println!();
    println!(
        "  {} location{}",
        graph.len(),
        if graph.len() == 1 { "" } else { "s" }
    );

    Ok(())
}
