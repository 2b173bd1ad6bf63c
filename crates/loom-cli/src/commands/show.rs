use std::path::Path;

use colored::Colorize;

pub fn run(path: &Path, spec: &str) -> Result<(), String> {
    let adventure = super::load(path)?;
    let graph = &adventure.game_data;
    let id = super::resolve_location(graph, spec)?;
    let location = graph
        .location(&id)
        .ok_or_else(|| format!("no location with id {id}"))?;

    println!("  {} ({})", location.name.bold(), location.id);

    let mut flags = Vec::new();
    if location.is_start {
        flags.push("start");
    }
    if location.is_finish {
        flags.push("finish");
    }
    if !flags.is_empty() {
        println!("  [{}]", flags.join(", "));
    }

    if location.description.is_empty() {
        println!("  (no description)");
    } else {
        println!("  {}", location.description);
    }

    if let Some(item) = location.grants() {
        println!("  Grants on arrival: {item}");
    }
    if location.is_finish {
        println!(
            "  Finish message: {}",
            location.finish_message.as_deref().unwrap_or("(default)")
        );
    }

    if location.choices.is_empty() {
        println!("  No choices.");
    } else {
        println!("  Choices:");
        for choice in &location.choices {
            let destination = match graph.location(&choice.destination) {
                Some(target) => format!("{} ({})", target.name, choice.destination),
                None => format!("{} {}", choice.destination, "· leads nowhere".red()),
            };
            match choice.gate() {
                Some(item) => println!(
                    "    {} \"{}\" -> {destination} [requires {item}]",
                    choice.id, choice.text
                ),
                None => println!("    {} \"{}\" -> {destination}", choice.id, choice.text),
            }
        }
    }

    Ok(())
}
