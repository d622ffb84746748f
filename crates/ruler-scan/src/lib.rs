//! Project scanner for dotruler.
//!
//! Inspects a project directory and infers the parts of a configuration that
//! can be read off the repository: languages from file extensions,
//! frameworks from marker files and manifests, common commands, and rule
//! files other tools have already written. Scanning only reads; every
//! detection is best-effort and a failure in one never affects another.

mod commands;
mod existing;
mod frameworks;
mod languages;
mod manifest;
mod report;
pub mod tables;

pub use commands::scan_commands;
pub use existing::scan_existing_rule_files;
pub use frameworks::scan_frameworks;
pub use languages::scan_languages;
pub use report::{ScanOptions, ScanReport, scan_project, scan_project_with};
