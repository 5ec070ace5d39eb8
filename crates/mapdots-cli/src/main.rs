//! mapdots CLI
//!
//! Command-line host for mapdots: place, move, edit and delete dots in the
//! local slot, or replay a recorded pointer session against it.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use mapdots_core::{Config, DotStore, JsonFilePersistence, Mode};

mod args;
mod commands;
mod logging;
mod output;

use args::{Pair, RectArg};
use output::{Output, OutputFormat};

#[derive(Parser)]
#[command(name = "mapdots")]
#[command(about = "mapdots - labeled points of interest over a map image")]
#[command(version)]
#[command(propagate_version = true)]
struct Cli {
    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Quiet mode - minimal output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Log debug details
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use this config file instead of the default
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage dots
    Dot {
        #[command(subcommand)]
        command: DotCommands,
    },
    /// Replay a recorded list of pointer events
    Replay {
        /// JSON file holding an array of events
        file: PathBuf,
        /// Mode to start the session in
        #[arg(long, value_enum, default_value = "view")]
        mode: ModeArg,
    },
    /// Show or set configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },
    /// Show slot location and dot count
    Status,
}

#[derive(Subcommand)]
enum DotCommands {
    /// Place a new dot
    #[command(alias = "add")]
    Create {
        /// Pointer position in pixels, X,Y (needs --rect)
        #[arg(long, requires = "rect", conflicts_with = "pct")]
        at: Option<Pair>,
        /// Image box in pixels, LEFT,TOP,WIDTH,HEIGHT
        #[arg(long)]
        rect: Option<RectArg>,
        /// Position in percent, X,Y
        #[arg(long, required_unless_present = "at")]
        pct: Option<Pair>,
    },
    /// List all dots
    #[command(alias = "ls")]
    List,
    /// Show dot details
    Show {
        /// Dot ID (full or prefix)
        id: String,
    },
    /// Set a content field (title, description, imageUrl)
    Set {
        /// Dot ID (full or prefix)
        id: String,
        field: String,
        value: String,
    },
    /// Move a dot
    Move {
        /// Dot ID (full or prefix)
        id: String,
        /// New position in percent, X,Y
        #[arg(long, conflicts_with = "by")]
        to: Option<Pair>,
        /// Pixel delta DX,DY (needs --rect)
        #[arg(long, requires = "rect", required_unless_present = "to")]
        by: Option<Pair>,
        /// Image box in pixels, LEFT,TOP,WIDTH,HEIGHT
        #[arg(long)]
        rect: Option<RectArg>,
    },
    /// Delete a dot
    #[command(alias = "rm")]
    Delete {
        /// Dot ID (full or prefix)
        id: String,
    },
}

#[derive(Subcommand, Clone)]
enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Set a configuration value
    Set {
        /// Configuration key (data_dir, storage_key, log_file)
        key: String,
        /// Configuration value
        value: String,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum ModeArg {
    View,
    Edit,
}

impl From<ModeArg> for Mode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::View => Mode::View,
            ModeArg::Edit => Mode::Edit,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let output = Output::new(OutputFormat::from_flags(cli.json, cli.quiet));

    let config =
        Config::load_with_cli_override(cli.config.as_ref()).context("Failed to load configuration")?;
    logging::init(&config, cli.verbose);

    match cli.command {
        // Config commands work on the file, not the store
        Commands::Config { command } => match command {
            Some(ConfigCommands::Show) | None => commands::config::show(cli.config.as_ref(), &output),
            Some(ConfigCommands::Set { key, value }) => {
                commands::config::set(key, value, cli.config.as_ref(), &output)
            }
        },
        Commands::Dot { command } => {
            let mut store = open_store(&config);
            handle_dot_command(command, &mut store, &output)
        }
        Commands::Replay { file, mode } => {
            commands::replay::run(open_store(&config), &file, mode.into(), &output)
        }
        Commands::Status => commands::status::show(&open_store(&config), &config, &output),
    }
}

/// Load the dots slot named by the configuration
fn open_store(config: &Config) -> DotStore<JsonFilePersistence> {
    DotStore::init(JsonFilePersistence::from_config(config))
}

fn handle_dot_command(
    command: DotCommands,
    store: &mut DotStore<JsonFilePersistence>,
    output: &Output,
) -> Result<()> {
    match command {
        DotCommands::Create { at, rect, pct } => commands::dot::create(store, at, rect, pct, output),
        DotCommands::List => commands::dot::list(store, output),
        DotCommands::Show { id } => commands::dot::show(store, &id, output),
        DotCommands::Set { id, field, value } => {
            commands::dot::set(store, &id, &field, value, output)
        }
        DotCommands::Move { id, to, by, rect } => {
            commands::dot::move_dot(store, &id, to, by, rect, output)
        }
        DotCommands::Delete { id } => commands::dot::delete(store, &id, output),
    }
}
