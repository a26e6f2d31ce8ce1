mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "liftchart",
    version,
    about = "Extract crane load-chart data from PDF manuals"
)]
struct Cli {
    /// Log progress (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract configurations and load points from a single PDF manual
    Parse {
        /// Path to PDF manual
        input_file: PathBuf,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Write extracted output to a JSON file
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,

        /// Custom JSON extraction profile
        #[arg(short, long, value_name = "FILE")]
        profile: Option<PathBuf>,
    },
    /// Build a dataset from every PDF manual in a directory
    Build {
        /// Directory containing PDF manuals
        #[arg(default_value = ".")]
        input_dir: PathBuf,

        /// SQLite database to (re)create
        #[arg(short = 'O', long = "out", value_name = "FILE", default_value = "cranes.db")]
        out: PathBuf,

        /// Also write the dataset as a JSON document
        #[arg(long, value_name = "FILE")]
        json: Option<PathBuf>,

        /// Custom JSON extraction profile
        #[arg(short, long, value_name = "FILE")]
        profile: Option<PathBuf>,
    },
    /// Manage and inspect extraction profiles
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },
}

#[derive(Subcommand)]
enum ProfileAction {
    /// List predefined profiles
    List,
    /// Print a predefined profile as JSON (a starting point for custom ones)
    Show {
        /// Preset name (e.g., "default")
        preset: String,
    },
    /// Validate a custom profile file
    Validate {
        /// Path to JSON profile file
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let result = match cli.command {
        Commands::Parse {
            input_file,
            output,
            out,
            profile,
        } => commands::parse::run(input_file, &output, out, profile),
        Commands::Build {
            input_dir,
            out,
            json,
            profile,
        } => commands::build::run(input_dir, out, json, profile),
        Commands::Profile { action } => match action {
            ProfileAction::List => commands::profile::list(),
            ProfileAction::Show { preset } => commands::profile::show(&preset),
            ProfileAction::Validate { file } => commands::profile::validate(&file),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
