use std::path::Path;

pub fn run(path: &Path) -> Result<(), String> {
    let adventure = super::load(path)?;
    let items = adventure.game_data.items();

    if items.is_empty() {
        println!("  No items are granted anywhere yet.");
        return Ok(());
    }

    for item in &items {
        println!("  {item}");
    }
    println!();
    println!(
        "  {} item{}",
        items.len(),
        if items.len() == 1 { "" } else { "s" }
    );
    Ok(())
}
