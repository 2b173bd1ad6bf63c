use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::Colorize;
use loom_play::{PlaySession, Scene};

pub fn run(path: &Path) -> Result<(), String> {
    let adventure = super::load(path)?;
    let graph = &adventure.game_data;

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let mut session = PlaySession::new();
    session.start(graph);

    println!();
    println!("  {}", adventure.title.bold());

    loop {
        match session.scene(graph) {
            Scene::NotStarted => session.start(graph),
            Scene::Empty { message } => {
                println!();
                println!("  {message}");
                return Ok(());
            }
            Scene::Finished { location, message } => {
                println!();
                println!("  {}", location.name.bold());
                println!();
                println!("  {}", message.green());
                println!();
                print!("  Play again? [y/N] ");
                flush()?;
                match lines.next() {
                    Some(line) => {
                        let line = line.map_err(|e| e.to_string())?;
                        if line.trim().eq_ignore_ascii_case("y") {
                            session.start(graph);
                        } else {
                            return Ok(());
                        }
                    }
                    None => return Ok(()),
                }
            }
            Scene::At {
                location,
                choices,
                notice,
            } => {
                println!();
                println!("  {}", location.name.bold());
                if !location.description.is_empty() {
                    println!();
                    println!("  {}", location.description);
                }
                if let Some(notice) = notice {
                    println!();
                    println!("  {}", notice.to_string().red());
                }
                if !session.player().is_empty() {
                    let held: Vec<&str> = session.player().items().collect();
                    println!();
                    println!("  Inventory: {}", held.join(", "));
                }
                println!();
                if choices.is_empty() {
                    println!("  {}", "The path ends here.".italic());
                } else {
                    for (i, choice) in choices.iter().enumerate() {
                        println!("  [{}] {}", i + 1, choice.text);
                    }
                }
                print!("  choose a number, r to restart, q to quit > ");
                flush()?;

                let Some(line) = lines.next() else {
                    return Ok(());
                };
                let line = line.map_err(|e| e.to_string())?;
                let input = line.trim();

                if input.eq_ignore_ascii_case("q") {
                    return Ok(());
                }
                if input.eq_ignore_ascii_case("r") {
                    session.start(graph);
                    continue;
                }
                match input.parse::<usize>() {
                    Ok(n) if (1..=choices.len()).contains(&n) => {
                        let id = choices[n - 1].id.clone();
                        // Offered moments ago, so the only failure left is a
                        // race with hand-edited data; surface it and go on.
                        if let Err(e) = session.choose(graph, &id) {
                            println!("  {e}");
                        }
                    }
                    _ => println!("  Pick one of the numbers shown."),
                }
            }
        }
    }
}

fn flush() -> Result<(), String> {
    io::stdout().flush().map_err(|e| e.to_string())
}
