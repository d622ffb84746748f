//! Diff command implementation
//!
//! Previews what generate would change without writing anything.

use std::path::Path;

use colored::Colorize;
use ruler_core::{DiffReport, DiffStatus, diff_targets};
use ruler_tools::TargetRegistry;
use serde_json::json;

use crate::context::{load, resolve_dir};
use crate::error::Result;

pub fn run_diff(
    registry: &TargetRegistry,
    directory: &Path,
    config_path: Option<&Path>,
    json: bool,
) -> Result<()> {
    let loaded = load(config_path)?;
    let root = resolve_dir(directory)?;
    let report = diff_targets(&loaded.config, registry, &root)?;

    if json {
        let output = json!({
            "has_changes": report.has_changes(),
            "targets": report.targets,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print_diff_output(&report);
    }

    Ok(())
}

fn print_diff_output(report: &DiffReport) {
    for target in &report.targets {
        let path = target.path.as_deref().unwrap_or(&target.target_id);
        match &target.status {
            DiffStatus::Unchanged => println!("  {} {}", "unchanged".dimmed(), path),
            DiffStatus::New => {
                println!();
                println!("  {} {}", "new".green(), path);
            }
            DiffStatus::Modified { diff } => {
                println!();
                println!("  {} {}", "modified".yellow(), path);
                for line in diff.lines() {
                    if line.starts_with('+') && !line.starts_with("+++") {
                        println!("    {}", line.green());
                    } else if line.starts_with('-') && !line.starts_with("---") {
                        println!("    {}", line.red());
                    } else {
                        println!("    {line}");
                    }
                }
            }
            DiffStatus::Skipped { reason } => println!("  {} {}", "skipped".dimmed(), reason),
        }
    }

    println!();
    if report.has_changes() {
        println!(
            "{} {} {}",
            "Run".dimmed(),
            "dotruler generate".bold(),
            "to apply changes.".dimmed()
        );
    } else {
        println!("{}", "Everything is in sync.".dimmed());
    }
}
