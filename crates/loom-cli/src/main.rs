//! CLI frontend for the Storyloom adventure builder.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "loom",
    about = "Storyloom — build and play branching text adventures",
    version,
    propagate_version = true
)]
struct Cli {
    /// Adventure file to operate on
    #[arg(short, long, default_value = "adventure.json", global = true)]
    file: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new adventure file
    Init {
        /// Title of the adventure
        title: String,

        /// Start from the bundled demo adventure instead of an empty graph
        #[arg(long)]
        sample: bool,
    },

    /// Rename the adventure
    Title {
        /// The new title
        title: String,
    },

    /// List all locations
    List,

    /// Show one location in detail, choices included
    Show {
        /// Location id or (unique) name
        location: String,
    },

    /// Add a new location
    Add {
        /// Name for the new location (default: "New Location")
        #[arg(short, long)]
        name: Option<String>,
    },

    /// Delete a location and every choice that pointed at it
    Rm {
        /// Location id or (unique) name
        location: String,
    },

    /// Mark a location as the start, clearing the flag everywhere else
    SetStart {
        /// Location id or (unique) name
        location: String,
    },

    /// Edit a location's fields
    Set {
        /// Location id or (unique) name
        location: String,

        /// New display name
        #[arg(long)]
        name: Option<String>,

        /// New description
        #[arg(long)]
        description: Option<String>,

        /// Mark as a finish location (clears its choices)
        #[arg(long, conflicts_with = "no_finish")]
        finish: bool,

        /// Unmark as a finish location
        #[arg(long)]
        no_finish: bool,

        /// Finish message, shown when the player arrives (empty to clear)
        #[arg(long)]
        finish_message: Option<String>,

        /// Item granted on arrival (empty to clear)
        #[arg(long)]
        adds_item: Option<String>,
    },

    /// Manage a location's choices
    #[command(subcommand)]
    Choice(ChoiceCommands),

    /// List every distinct item granted anywhere in the adventure
    Items,

    /// Report authoring warnings (dangling paths, missing start, ...)
    Check,

    /// Generate description or choice text for a location
    #[command(subcommand)]
    Gen(GenCommands),

    /// Write the adventure in its portable format (host id omitted)
    Export {
        /// Output file path
        output: PathBuf,
    },

    /// Create an adventure file from a portable export
    Import {
        /// Input file path
        input: PathBuf,
    },

    /// Play the adventure interactively
    Play,
}

#[derive(Subcommand)]
enum ChoiceCommands {
    /// Append a new, unwired choice to a location
    Add {
        /// Location id or (unique) name
        location: String,
    },

    /// Edit one choice's fields
    Set {
        /// Location id or (unique) name
        location: String,

        /// Choice id
        choice: String,

        /// Player-facing label
        #[arg(long)]
        text: Option<String>,

        /// Destination location id (empty to unset)
        #[arg(long)]
        dest: Option<String>,

        /// Item the player must hold (empty to clear)
        #[arg(long)]
        requires: Option<String>,
    },

    /// Remove one choice from a location
    Rm {
        /// Location id or (unique) name
        location: String,

        /// Choice id
        choice: String,
    },
}

#[derive(Subcommand)]
enum GenCommands {
    /// Generate a description from the location's name
    Describe {
        /// Location id or (unique) name
        location: String,

        /// Theme to write in
        #[arg(long, default_value = "Fantasy Quest")]
        theme: String,

        /// Write the result into the adventure file
        #[arg(long)]
        apply: bool,
    },

    /// Generate choice labels from the location's description
    Choices {
        /// Location id or (unique) name
        location: String,

        /// Theme to write in
        #[arg(long, default_value = "Fantasy Quest")]
        theme: String,

        /// Append the results to the adventure file
        #[arg(long)]
        apply: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    let file = cli.file;

    let result = match cli.command {
        Commands::Init { title, sample } => commands::init::run(&file, &title, sample),
        Commands::Title { title } => commands::title::run(&file, &title),
        Commands::List => commands::list::run(&file),
        Commands::Show { location } => commands::show::run(&file, &location),
        Commands::Add { name } => commands::add::run(&file, name.as_deref()),
        Commands::Rm { location } => commands::rm::run(&file, &location),
        Commands::SetStart { location } => commands::set_start::run(&file, &location),
        Commands::Set {
            location,
            name,
            description,
            finish,
            no_finish,
            finish_message,
            adds_item,
        } => commands::set::run(
            &file,
            &location,
            commands::set::Edits {
                name,
                description,
                finish,
                no_finish,
                finish_message,
                adds_item,
            },
        ),
        Commands::Choice(choice) => match choice {
            ChoiceCommands::Add { location } => commands::choice::add(&file, &location),
            ChoiceCommands::Set {
                location,
                choice,
                text,
                dest,
                requires,
            } => commands::choice::set(&file, &location, &choice, text, dest, requires),
            ChoiceCommands::Rm { location, choice } => {
                commands::choice::rm(&file, &location, &choice)
            }
        },
        Commands::Items => commands::items::run(&file),
        Commands::Check => commands::check::run(&file),
        Commands::Gen(command) => match command {
            GenCommands::Describe {
                location,
                theme,
                apply,
            } => commands::generate::describe(&file, &location, &theme, apply),
            GenCommands::Choices {
                location,
                theme,
                apply,
            } => commands::generate::choices(&file, &location, &theme, apply),
        },
        Commands::Export { output } => commands::transfer::export(&file, &output),
        Commands::Import { input } => commands::transfer::import(&file, &input),
        Commands::Play => commands::play::run(&file),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
