//! Init command implementation

use std::path::Path;

use colored::Colorize;
use ruler_core::init_project;
use ruler_meta::CONFIG_FILENAME;

use crate::context::resolve_dir;
use crate::error::{CliError, Result};

/// Scan `directory` and write a starter config into it.
pub fn run_init(directory: &Path, force: bool) -> Result<()> {
    let root = resolve_dir(directory)?;
    if !root.is_dir() {
        return Err(CliError::user(format!("{root} is not a directory")));
    }

    println!("{} {}...", "Scanning".bold(), root);
    println!();

    let report = match init_project(&root, force) {
        Ok(report) => report,
        Err(ruler_core::Error::ConfigExists { .. }) => {
            return Err(CliError::user(format!(
                "{CONFIG_FILENAME} already exists. Use --force to overwrite."
            )));
        }
        Err(e) => return Err(e.into()),
    };

    let scan = &report.scan;
    if !scan.languages.is_empty() {
        println!("  Languages:  {}", scan.languages.join(", "));
    }
    if !scan.frameworks.is_empty() {
        println!("  Frameworks: {}", scan.frameworks.join(", "));
    }
    let commands: Vec<&str> = scan.commands.entries().into_iter().map(|(n, _)| n).collect();
    if !commands.is_empty() {
        println!("  Commands:   {}", commands.join(", "));
    }
    if !scan.existing.is_empty() {
        let ids: Vec<&str> = scan.existing.keys().map(String::as_str).collect();
        println!("  Rule files: {} (found existing)", ids.join(", "));
    }
    if !scan.is_empty() {
        println!();
    }

    println!("Created {}", CONFIG_FILENAME.green().bold());
    println!();
    println!("Next steps:");
    println!("  1. Edit {CONFIG_FILENAME} and add your coding rules");
    println!("  2. Run {} to sync configs", "dotruler generate".cyan());

    Ok(())
}
