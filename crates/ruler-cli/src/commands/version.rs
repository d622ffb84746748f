//! Version command implementation

use colored::Colorize;

use crate::error::Result;

pub fn run_version() -> Result<()> {
    println!("dotruler {}", env!("CARGO_PKG_VERSION").bold());
    Ok(())
}
