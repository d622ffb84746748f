//! Validate command implementation

use std::path::Path;

use colored::Colorize;
use ruler_core::{Severity, validate_config};
use ruler_tools::TargetRegistry;

use crate::context::load;
use crate::error::{CliError, Result};

/// Print every finding; fail when any of them is an error.
pub fn run_validate(registry: &TargetRegistry, config_path: Option<&Path>) -> Result<()> {
    let loaded = load(config_path)?;
    let report = validate_config(&loaded.config, registry);

    if report.is_clean() {
        println!("{} {} is valid.", "✓".green().bold(), loaded.display_name());
        return Ok(());
    }

    for finding in &report.findings {
        match finding.severity {
            Severity::Error => println!("  {} {}", "✗".red(), finding.message),
            Severity::Warning => println!("  {} {}", "!".yellow(), finding.message),
        }
    }

    let errors = report.errors().count();
    if errors > 0 {
        return Err(CliError::ValidationFailed { errors });
    }
    Ok(())
}
