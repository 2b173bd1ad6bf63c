use std::path::Path;

use loom_gen::{ContentGenerator, TemplateGenerator};

pub fn describe(path: &Path, spec: &str, theme: &str, apply: bool) -> Result<(), String> {
    let mut adventure = super::load(path)?;
    let id = super::resolve_location(&adventure.game_data, spec)?;
    let generator = TemplateGenerator::new();

    if apply {
        let text = loom_gen::apply_description(&generator, &mut adventure.game_data, &id, theme)
            .map_err(|e| e.to_string())?;
        super::save(path, &adventure)?;
        println!("  Wrote description for {id}:");
        println!("  {text}");
    } else {
        let name = adventure
            .game_data
            .location(&id)
            .map(|l| l.name.clone())
            .unwrap_or_default();
        println!("  {}", generator.generate_description(&name, theme));
        println!();
        println!("  (preview only; pass --apply to save it)");
    }
    Ok(())
}

pub fn choices(path: &Path, spec: &str, theme: &str, apply: bool) -> Result<(), String> {
    let mut adventure = super::load(path)?;
    let id = super::resolve_location(&adventure.game_data, spec)?;
    let generator = TemplateGenerator::new();

    let description = adventure
        .game_data
        .location(&id)
        .map(|l| l.description.clone())
        .unwrap_or_default();
    if description.is_empty() {
        return Err(format!(
            "{id} has no description to generate choices from; write or generate one first"
        ));
    }

    if apply {
        let labels = loom_gen::apply_choices(&generator, &mut adventure.game_data, &id, theme)
            .map_err(|e| e.to_string())?;
        super::save(path, &adventure)?;
        println!("  Appended {} choice(s) to {id}:", labels.len());
        for label in labels {
            println!("    {label}");
        }
        println!("  Wire up their destinations with: loom choice set");
    } else {
        for label in generator.generate_choices(&description, theme) {
            println!("  {label}");
        }
        println!();
        println!("  (preview only; pass --apply to append them)");
    }
    Ok(())
}
