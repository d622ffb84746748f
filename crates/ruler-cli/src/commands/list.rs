//! List command implementation

use colored::Colorize;
use ruler_tools::TargetRegistry;
use serde_json::json;

use crate::error::Result;

/// Print every registered target with its output file and length limit.
pub fn run_list(registry: &TargetRegistry, json: bool) -> Result<()> {
    if json {
        let targets: Vec<_> = registry
            .iter()
            .map(|reg| {
                let renderer = reg.create();
                json!({
                    "id": reg.id,
                    "name": reg.name,
                    "output": renderer.default_output_path(),
                    "description": renderer.description(),
                    "max_chars": renderer.max_chars(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&targets)?);
        return Ok(());
    }

    println!("{}", "Available Targets".bold());
    println!();
    println!(
        "  {:<13} {:<33} {:<40} {:>7}",
        "ID".dimmed(),
        "OUTPUT FILE".dimmed(),
        "DESCRIPTION".dimmed(),
        "LIMIT".dimmed()
    );

    for reg in registry.iter() {
        let renderer = reg.create();
        let limit = renderer
            .max_chars()
            .map(group_thousands)
            .unwrap_or_else(|| "-".to_string());
        println!(
            "  {:<13} {:<33} {:<40} {:>7}",
            reg.id.cyan().bold(),
            renderer.default_output_path(),
            renderer.description(),
            limit
        );
    }

    println!();
    println!("{} {} targets available.", "Total:".dimmed(), registry.len());
    Ok(())
}

/// `12000` -> `12,000`
fn group_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
