//! Integration tests for the loom CLI commands.

#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn loom() -> Command {
    Command::cargo_bin("loom").unwrap()
}

/// A temp directory holding the bundled sample adventure.
fn sample_dir() -> (TempDir, String) {
    let dir = TempDir::new().unwrap();
    let file = dir
        .path()
        .join("adventure.json")
        .to_str()
        .unwrap()
        .to_string();
    loom()
        .args(["-f", &file, "init", "The Key and the Door", "--sample"])
        .assert()
        .success();
    (dir, file)
}

/// Find the id of a location by its name in the sample adventure.
fn location_id(file: &str, name: &str) -> String {
    let json = std::fs::read_to_string(file).unwrap();
    let adventure = loom_core::Adventure::from_json(&json).unwrap();
    adventure
        .game_data
        .locations()
        .find(|l| l.name == name)
        .unwrap()
        .id
        .0
        .clone()
}

// ---------------------------------------------------------------------------
// init
// ---------------------------------------------------------------------------

#[test]
fn init_creates_adventure_file() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("quest.json");

    loom()
        .args(["-f", file.to_str().unwrap(), "init", "My Quest"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created \"My Quest\""));

    assert!(file.exists());
}

#[test]
fn init_refuses_to_overwrite() {
    let (_dir, file) = sample_dir();
    loom()
        .args(["-f", &file, "init", "Another"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

// ---------------------------------------------------------------------------
// list / show / items
// ---------------------------------------------------------------------------

#[test]
fn list_shows_sample_locations() {
    let (_dir, file) = sample_dir();
    loom()
        .args(["-f", &file, "list"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("The Crossroads")
                .and(predicate::str::contains("Whispering Forest"))
                .and(predicate::str::contains("Dusty Hallway"))
                .and(predicate::str::contains("4 locations")),
        );
}

#[test]
fn show_resolves_by_name_and_lists_choices() {
    let (_dir, file) = sample_dir();
    loom()
        .args(["-f", &file, "show", "Decrepit House"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Try the locked door")
                .and(predicate::str::contains("requires Rusty Key")),
        );
}

#[test]
fn show_unknown_location_fails() {
    let (_dir, file) = sample_dir();
    loom()
        .args(["-f", &file, "show", "Nowhere"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no location"));
}

#[test]
fn items_lists_distinct_grants() {
    let (_dir, file) = sample_dir();
    loom()
        .args(["-f", &file, "items"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rusty Key").and(predicate::str::contains("1 item")));
}

// ---------------------------------------------------------------------------
// add / rm / set-start / set
// ---------------------------------------------------------------------------

#[test]
fn first_added_location_becomes_start() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("quest.json").to_str().unwrap().to_string();
    loom()
        .args(["-f", &file, "init", "My Quest"])
        .assert()
        .success();

    loom()
        .args(["-f", &file, "add", "--name", "Cavern"])
        .assert()
        .success()
        .stdout(predicate::str::contains("now the start"));

    loom()
        .args(["-f", &file, "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cavern").and(predicate::str::contains("start")));
}

#[test]
fn rm_cascades_choices_pointing_at_the_location() {
    let (_dir, file) = sample_dir();
    loom()
        .args(["-f", &file, "rm", "Whispering Forest"])
        .assert()
        .success()
        .stdout(predicate::str::contains("every choice that pointed at it"));

    loom()
        .args(["-f", &file, "show", "The Crossroads"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Enter the Whispering Forest").not());
}

#[test]
fn set_start_moves_the_flag() {
    let (_dir, file) = sample_dir();
    loom()
        .args(["-f", &file, "set-start", "Decrepit House"])
        .assert()
        .success();

    let house = location_id(&file, "Decrepit House");
    let crossroads = location_id(&file, "The Crossroads");
    let json = std::fs::read_to_string(&file).unwrap();
    let adventure = loom_core::Adventure::from_json(&json).unwrap();
    let graph = &adventure.game_data;
    assert!(graph.location(&loom_core::LocationId(house)).unwrap().is_start);
    assert!(
        !graph
            .location(&loom_core::LocationId(crossroads))
            .unwrap()
            .is_start
    );
}

#[test]
fn set_finish_clears_choices() {
    let (_dir, file) = sample_dir();
    loom()
        .args([
            "-f",
            &file,
            "set",
            "Decrepit House",
            "--finish",
            "--finish-message",
            "You never got inside.",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("choices were cleared"));

    loom()
        .args(["-f", &file, "show", "Decrepit House"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No choices.").and(predicate::str::contains("finish")));
}

// ---------------------------------------------------------------------------
// choice
// ---------------------------------------------------------------------------

#[test]
fn choice_add_and_wire_destination() {
    let (_dir, file) = sample_dir();
    let hallway = location_id(&file, "Dusty Hallway");

    let output = loom()
        .args(["-f", &file, "choice", "add", "Whispering Forest"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added choice"))
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8(output).unwrap();
    let choice_id = text
        .split_whitespace()
        .find(|w| w.starts_with("choice_"))
        .unwrap()
        .to_string();

    loom()
        .args([
            "-f",
            &file,
            "choice",
            "set",
            "Whispering Forest",
            &choice_id,
            "--text",
            "Slip through the hollow oak",
            "--dest",
            &hallway,
        ])
        .assert()
        .success();

    loom()
        .args(["-f", &file, "show", "Whispering Forest"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Slip through the hollow oak"));
}

#[test]
fn choice_set_requires_some_field() {
    let (_dir, file) = sample_dir();
    loom()
        .args([
            "-f",
            &file,
            "choice",
            "set",
            "Whispering Forest",
            "choice_forest_back",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("nothing to change"));
}

// ---------------------------------------------------------------------------
// check
// ---------------------------------------------------------------------------

#[test]
fn check_reports_no_warnings_on_sample() {
    let (_dir, file) = sample_dir();
    loom()
        .args(["-f", &file, "check"])
        .assert()
        .success()
        .stdout(predicate::str::contains("no warnings"));
}

#[test]
fn check_warns_about_unwired_choice_but_still_succeeds() {
    let (_dir, file) = sample_dir();
    loom()
        .args(["-f", &file, "choice", "add", "The Crossroads"])
        .assert()
        .success();

    loom()
        .args(["-f", &file, "check"])
        .assert()
        .success()
        .stdout(predicate::str::contains("no destination"));
}

// ---------------------------------------------------------------------------
// export / import
// ---------------------------------------------------------------------------

#[test]
fn export_then_import_assigns_fresh_id() {
    let (dir, file) = sample_dir();
    let export = dir.path().join("out.json").to_str().unwrap().to_string();
    let copy = dir.path().join("copy.json").to_str().unwrap().to_string();

    loom()
        .args(["-f", &file, "export", &export])
        .assert()
        .success();

    // The portable file has no host id.
    let portable = std::fs::read_to_string(&export).unwrap();
    assert!(!portable.contains("\"id\": \"adv_"));

    loom()
        .args(["-f", &copy, "import", &export])
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported \"The Key and the Door"));

    let original = loom_core::Adventure::from_json(&std::fs::read_to_string(&file).unwrap())
        .unwrap();
    let imported = loom_core::Adventure::from_json(&std::fs::read_to_string(&copy).unwrap())
        .unwrap();
    assert_ne!(original.id, imported.id);
    assert_eq!(original.title, imported.title);
}

#[test]
fn import_rejects_malformed_container() {
    let dir = TempDir::new().unwrap();
    let bad = dir.path().join("bad.json");
    std::fs::write(&bad, r#"{"name": "wrong shape"}"#).unwrap();
    let target = dir.path().join("adventure.json");

    loom()
        .args([
            "-f",
            target.to_str().unwrap(),
            "import",
            bad.to_str().unwrap(),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed adventure file"));

    // No partial import.
    assert!(!target.exists());
}

// ---------------------------------------------------------------------------
// gen
// ---------------------------------------------------------------------------

#[test]
fn gen_describe_preview_does_not_modify_the_file() {
    let (_dir, file) = sample_dir();
    let before = std::fs::read_to_string(&file).unwrap();

    loom()
        .args(["-f", &file, "gen", "describe", "The Crossroads"])
        .assert()
        .success()
        .stdout(predicate::str::contains("preview only"));

    assert_eq!(before, std::fs::read_to_string(&file).unwrap());
}

#[test]
fn gen_choices_apply_appends_unwired_choices() {
    let (_dir, file) = sample_dir();
    loom()
        .args([
            "-f", &file, "gen", "choices", "The Crossroads", "--apply",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Appended 3 choice(s)"));

    loom()
        .args(["-f", &file, "check"])
        .assert()
        .success()
        .stdout(predicate::str::contains("no destination"));
}

// ---------------------------------------------------------------------------
// play
// ---------------------------------------------------------------------------

#[test]
fn play_walks_the_gated_path() {
    let (_dir, file) = sample_dir();

    // Crossroads -> Forest (pick up the key) -> back -> House -> locked door
    // -> finish, then decline to play again.
    loom()
        .args(["-f", &file, "play"])
        .write_stdin("1\n1\n2\n1\nn\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("The Crossroads")
                .and(predicate::str::contains("Whispering Forest"))
                .and(predicate::str::contains("Inventory: Rusty Key"))
                .and(predicate::str::contains("Congratulations!"))
                .and(predicate::str::contains("Play again?")),
        );
}

#[test]
fn play_quits_on_q() {
    let (_dir, file) = sample_dir();
    loom()
        .args(["-f", &file, "play"])
        .write_stdin("q\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("The Crossroads"));
}

#[test]
fn play_reports_dead_end_and_stays_put() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("quest.json").to_str().unwrap().to_string();
    loom()
        .args(["-f", &file, "init", "Dead Ends"])
        .assert()
        .success();
    loom()
        .args(["-f", &file, "add", "--name", "Edge of the Map"])
        .assert()
        .success();
    loom()
        .args(["-f", &file, "choice", "add", "Edge of the Map"])
        .assert()
        .success();

    loom()
        .args(["-f", &file, "play"])
        .write_stdin("1\nq\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("leads nowhere")
                .and(predicate::str::contains("Edge of the Map")),
        );
}

#[test]
fn play_on_empty_adventure_reports_no_content() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("quest.json").to_str().unwrap().to_string();
    loom()
        .args(["-f", &file, "init", "Nothing Yet"])
        .assert()
        .success();

    loom()
        .args(["-f", &file, "play"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "No locations have been created for this game yet.",
        ));
}
