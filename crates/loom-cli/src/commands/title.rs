use std::path::Path;

pub fn run(path: &Path, title: &str) -> Result<(), String> {
    let mut adventure = super::load(path)?;
    adventure.title = title.to_string();
    super::save(path, &adventure)?;
    println!("  Retitled to \"{title}\"");
    Ok(())
}
