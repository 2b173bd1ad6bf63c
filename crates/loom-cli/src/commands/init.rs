use std::path::Path;

use loom_core::Adventure;

pub fn run(path: &Path, title: &str, sample: bool) -> Result<(), String> {
    if path.exists() {
        return Err(format!(
            "{} already exists; choose another file with --file",
            path.display()
        ));
    }

    let mut adventure = if sample {
        Adventure::sample()
    } else {
        Adventure::new(title)
    };
    adventure.title = title.to_string();

    super::save(path, &adventure)?;
    println!(
        "  Created \"{}\" ({} location{}) at {}",
        adventure.title,
        adventure.game_data.len(),
        if adventure.game_data.len() == 1 { "" } else { "s" },
        path.display()
    );
    Ok(())
}
