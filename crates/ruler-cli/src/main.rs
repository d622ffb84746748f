//! dotruler CLI
//!
//! Keeps the rule files of every AI coding tool in sync with one
//! `.dotruler.toml`.

mod cli;
mod commands;
mod context;
mod error;
mod logging;

use clap::Parser;
use colored::Colorize;
use ruler_tools::TargetRegistry;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("{}: logging disabled: {}", "warning".yellow().bold(), e);
    }

    if let Err(e) = run(cli.command) {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(command: Commands) -> Result<()> {
    let registry = TargetRegistry::with_builtins();
    tracing::debug!(targets = registry.len(), "registry ready");

    match command {
        Commands::Init { directory, force } => commands::run_init(&directory, force),
        Commands::Generate {
            directory,
            config,
            dry_run,
        } => commands::run_generate(&registry, &directory, config.as_deref(), dry_run),
        Commands::Validate { config } => commands::run_validate(&registry, config.as_deref()),
        Commands::List { json } => commands::run_list(&registry, json),
        Commands::Diff {
            directory,
            config,
            json,
        } => commands::run_diff(&registry, &directory, config.as_deref(), json),
        Commands::Version => commands::run_version(),
    }
}
