//! Configuration model and loading for dotruler.
//!
//! A project describes itself once in `.dotruler.toml`; this crate turns that
//! file into a typed [`Configuration`] with every absent field defaulted, and
//! finds the file by walking up from a starting directory.

pub mod config;
pub mod error;
pub mod loader;

pub use config::{
    ArchitectureNotes, CommandSet, Configuration, DEFAULT_TARGETS, ProjectInfo, StyleRules,
    TargetOverride, TargetSelection,
};
pub use error::{Error, Result};
pub use loader::{CONFIG_FILENAME, find_config, load_config, parse_config};
