//! Facade CLI - marketing page generator with a filterable glossary.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "facade")]
#[command(about = "Marketing page generator with a filterable glossary")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to site.toml config file
    #[arg(short, long, default_value = "site.toml")]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Scaffold site.toml and the data assets in the current project
    Init {
        /// Overwrite existing files
        #[arg(short, long)]
        yes: bool,
    },

    /// Generate the marketing pages and patch the host app
    Generate {
        /// App directory to write pages under (defaults to config or "app")
        #[arg(short, long)]
        app_dir: Option<PathBuf>,

        /// Skip the built-in patch set
        #[arg(long)]
        no_patches: bool,
    },

    /// Validate the data assets and report on the app directory
    Check,

    /// Query the glossary from the terminal
    Glossary {
        /// Case-insensitive search text
        query: Option<String>,

        /// Restrict to one category (all, financing, valuation, real-estate)
        #[arg(long)]
        category: Option<String>,

        /// Show one term's full name and detail
        #[arg(long)]
        show: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    // Execute command
    match cli.command {
        Commands::Init { yes } => {
            commands::init::run(yes).await?;
        }
        Commands::Generate {
            app_dir,
            no_patches,
        } => {
            commands::generate::run(&cli.config, app_dir, no_patches).await?;
        }
        Commands::Check => {
            commands::check::run(&cli.config).await?;
        }
        Commands::Glossary {
            query,
            category,
            show,
        } => {
            commands::glossary::run(&cli.config, query, category, show).await?;
        }
    }

    Ok(())
}
