//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Keep the rule files of every AI coding tool in sync with one config
#[derive(Parser, Debug)]
#[command(name = "dotruler")]
#[command(version, long_about = None, arg_required_else_help = true)]
#[command(about = "One config. Every AI coding tool. Always in sync.")]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Scan your project and write a starter .dotruler.toml
    Init {
        /// Project directory to scan
        #[arg(default_value = ".")]
        directory: PathBuf,

        /// Overwrite an existing config
        #[arg(short, long)]
        force: bool,
    },

    /// Write rule files for every enabled target
    Generate {
        /// Directory to write rule files into
        #[arg(default_value = ".")]
        directory: PathBuf,

        /// Path to .dotruler.toml (discovered from the current directory if omitted)
        #[arg(short, long, env = "DOTRULER_CONFIG")]
        config: Option<PathBuf>,

        /// Show what would be written without writing
        #[arg(short = 'n', long)]
        dry_run: bool,
    },

    /// Check .dotruler.toml for problems
    Validate {
        /// Path to .dotruler.toml (discovered from the current directory if omitted)
        #[arg(short, long, env = "DOTRULER_CONFIG")]
        config: Option<PathBuf>,
    },

    /// Show all available output targets
    List {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Preview what generate would change
    Diff {
        /// Project directory
        #[arg(default_value = ".")]
        directory: PathBuf,

        /// Path to .dotruler.toml (discovered from the current directory if omitted)
        #[arg(short, long, env = "DOTRULER_CONFIG")]
        config: Option<PathBuf>,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Show the current version
    Version,
}
