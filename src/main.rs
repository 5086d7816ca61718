mod cli;
mod compose;
mod error;
mod output;
mod paths;
mod registry;
mod status;

use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "dcm")]
#[command(about = "Manage named docker compose deployments from anywhere")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new deployment (a name plus the directory holding its
    /// docker-compose file)
    Add {
        /// Name of the deployment (ex. plex)
        name: String,

        /// Directory containing the docker-compose file (ex. /opt/apps/plex)
        file_path: PathBuf,

        /// Start the deployment once added
        #[arg(long)]
        start: bool,
    },

    /// Remove a deployment from dcm (does not delete any data)
    Remove {
        /// Name of the deployment
        name: String,

        /// Stop the deployment before removing
        #[arg(long)]
        stop: bool,
    },

    /// Update a deployment by pulling new images
    Update {
        /// Name of the deployment
        name: String,

        /// Start the deployment once updated, if not already running
        #[arg(long, conflicts_with = "restart")]
        start: bool,

        /// Restart the deployment once updated
        #[arg(long, conflicts_with = "start")]
        restart: bool,
    },

    /// Start a deployment
    #[command(visible_alias = "start")]
    Up {
        /// Name of the deployment
        name: String,
    },

    /// Stop a deployment
    #[command(visible_alias = "stop")]
    Down {
        /// Name of the deployment
        name: String,
    },

    /// Restart a deployment
    Restart {
        /// Name of the deployment
        name: String,
    },

    /// List all deployments with their current status
    List {
        /// Show the directory containing each docker-compose file
        #[arg(short = 's', long)]
        show_file_path: bool,

        /// Show the raw settings file content
        #[arg(short = 'r', long)]
        show_raw: bool,
    },

    /// Check the status of a deployment
    Status {
        /// Name of the deployment
        name: String,

        /// List individual containers and their status
        #[arg(short = 'l', long)]
        list_containers: bool,
    },

    /// Stop all deployments
    StopAll {
        /// Skip the confirmation prompt
        #[arg(long)]
        force: bool,
    },

    /// Start all deployments
    StartAll {
        /// Skip the confirmation prompt
        #[arg(long)]
        force: bool,
    },

    /// Show statistics about the registered deployments
    #[command(visible_alias = "stats")]
    Statistics {
        /// Show a single statistic by key
        #[arg(short, long)]
        key: Option<String>,
    },
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Add {
            name,
            file_path,
            start,
        } => cli::add::run(name, file_path, start),
        Commands::Remove { name, stop } => cli::remove::run(&name, stop),
        Commands::Update {
            name,
            start,
            restart,
        } => cli::update::run(&name, start, restart),
        Commands::Up { name } => cli::start::run(&name),
        Commands::Down { name } => cli::stop::run(&name),
        Commands::Restart { name } => cli::restart::run(&name),
        Commands::List {
            show_file_path,
            show_raw,
        } => cli::list::run(show_file_path, show_raw),
        Commands::Status {
            name,
            list_containers,
        } => cli::status::run(&name, list_containers),
        Commands::StopAll { force } => cli::all::stop(force),
        Commands::StartAll { force } => cli::all::start(force),
        Commands::Statistics { key } => cli::stats::run(key),
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        output::error(&format!("{err:#}"));
        process::exit(error::exit_code(&err));
    }
}
