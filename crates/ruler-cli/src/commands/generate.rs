//! Generate command implementation

use std::path::Path;

use colored::Colorize;
use ruler_core::{GenerateAction, GenerateOptions, generate_targets};
use ruler_tools::TargetRegistry;

use crate::context::{load, resolve_dir};
use crate::error::Result;

/// Render and write every enabled target into `directory`.
pub fn run_generate(
    registry: &TargetRegistry,
    directory: &Path,
    config_path: Option<&Path>,
    dry_run: bool,
) -> Result<()> {
    let loaded = load(config_path)?;
    let root = resolve_dir(directory)?;

    println!("{} from {}...", "Generating".bold(), loaded.display_name());
    println!();

    let report = generate_targets(&loaded.config, registry, &root, GenerateOptions { dry_run })?;

    for entry in &report.entries {
        match &entry.action {
            GenerateAction::Written { path } => println!("  {} {}", "✓".green(), path),
            GenerateAction::WouldWrite { path } => println!("  {} {}", "would write".dimmed(), path),
            GenerateAction::Skipped { reason } => println!("  {} {}", "✗".red(), reason),
        }
    }

    println!();
    if dry_run {
        println!("{}", "Dry run - no files written.".dimmed());
    } else {
        println!(
            "{} {} configs generated.",
            "Done.".green().bold(),
            report.output_count()
        );
    }

    Ok(())
}
