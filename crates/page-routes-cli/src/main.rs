mod commands;
mod config;
mod fs_project;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "page-routes")]
#[command(version, about = "Inspect the route table derived from a pages directory", long_about = None)]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, global = true, default_value = "pages.toml")]
    config: PathBuf,

    /// Log discovery diagnostics (unsupported area paths, skipped files)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Discover pages and print their route templates
    Routes {
        /// Application root directory (overrides [project] root)
        #[arg(short, long)]
        root: Option<PathBuf>,

        /// Precompiled page manifest (JSON) registered before live pages
        #[arg(short, long)]
        manifest: Option<PathBuf>,

        /// Skip area discovery
        #[arg(long)]
        disable_areas: bool,

        /// Print the full route models as JSON
        #[arg(long)]
        json: bool,
    },

    /// Decompose one areas-relative path, e.g. /Products/Pages/Home.cshtml
    Check {
        /// Path relative to the areas root, starting with '/'
        path: String,
    },
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = config::Config::load(&cli.config)?;

    // Execute command
    match cli.command {
        Commands::Routes {
            root,
            manifest,
            disable_areas,
            json,
        } => {
            let options = commands::routes::RoutesOptions {
                root,
                manifest,
                disable_areas,
                json,
            };
            commands::routes::execute(config, options)?;
        }
        Commands::Check { path } => {
            commands::check::execute(&config, &path)?;
        }
    }

    Ok(())
}
