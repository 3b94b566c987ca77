//! Motion Maker CLI - add and remove subtle looping motion on scene objects
//!
//! This binary exposes the motion panel as commands: `panel` shows the
//! settings, `add` and `remove` are its two buttons.

use clap::{ArgAction, Parser, Subcommand};
use motionmaker_spec::SettingsOverrides;
use std::process::ExitCode;

use motionmaker_cli::commands;
use motionmaker_cli::commands::add::AddOptions;
use motionmaker_cli::logging;
use motionmaker_cli::overrides::SettingsArgs;

/// Motion Maker - subtle random motion for scene objects
#[derive(Parser)]
#[command(name = "motionmaker")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add subtle motion to an object
    Add {
        /// Path to the scene file
        #[arg(short, long)]
        scene: String,

        /// Object to animate (default: the scene's active object)
        #[arg(short, long)]
        object: Option<String>,

        /// Seed override (default: the scene's seed)
        #[arg(long)]
        seed: Option<u32>,

        /// Where to write the updated scene (default: overwrite the input)
        #[arg(long)]
        out: Option<String>,

        #[command(flatten)]
        settings: SettingsArgs,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Remove motion from an object and restore its initial transform
    Remove {
        /// Path to the scene file
        #[arg(short, long)]
        scene: String,

        /// Object to clear (default: the scene's active object)
        #[arg(short, long)]
        object: Option<String>,

        /// Where to write the updated scene (default: overwrite the input)
        #[arg(long)]
        out: Option<String>,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Validate a scene file without changing it
    Validate {
        /// Path to the scene file
        #[arg(short, long)]
        scene: String,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Show the motion settings panel
    Panel {
        /// Scene to read values from (default: built-in defaults)
        #[arg(short, long)]
        scene: Option<String>,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Create a starter scene with one object
    Init {
        /// Path for the new scene file
        #[arg(long)]
        out: String,

        /// Name of the object to create
        #[arg(short, long, default_value = "Cube")]
        object: String,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Add {
            scene,
            object,
            seed,
            out,
            settings,
            json,
        } => {
            let options = AddOptions {
                object: object.as_deref(),
                seed,
                out_path: out.as_deref(),
                overrides: SettingsOverrides::from(&settings),
            };
            commands::add::run(&scene, &options, json)
        }
        Commands::Remove {
            scene,
            object,
            out,
            json,
        } => commands::remove::run(&scene, object.as_deref(), out.as_deref(), json),
        Commands::Validate { scene, json } => commands::validate::run(&scene, json),
        Commands::Panel { scene, json } => commands::panel::run(scene.as_deref(), json),
        Commands::Init { out, object, force } => commands::init::run(&out, &object, force),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
