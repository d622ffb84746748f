//! Config and directory resolution shared by commands

use std::path::Path;

use ruler_fs::NormalizedPath;
use ruler_meta::{CONFIG_FILENAME, Configuration, find_config, load_config};

use crate::error::{CliError, Result};

/// A loaded configuration and where it came from.
pub struct LoadedConfig {
    pub config: Configuration,
    pub path: NormalizedPath,
}

impl LoadedConfig {
    /// File name of the config for messages.
    pub fn display_name(&self) -> &str {
        self.path.file_name().unwrap_or(CONFIG_FILENAME)
    }
}

/// Load the config at `explicit`, or discover it upward from the current
/// directory.
pub fn load(explicit: Option<&Path>) -> Result<LoadedConfig> {
    let path = match explicit {
        Some(path) => NormalizedPath::new(path),
        None => {
            let cwd = std::env::current_dir()?;
            find_config(&cwd).ok_or_else(|| {
                CliError::user(format!(
                    "No {CONFIG_FILENAME} found. Run `dotruler init` to create one."
                ))
            })?
        }
    };

    let config = load_config(&path)?;
    tracing::debug!(path = %path, targets = config.targets.enabled.len(), "loaded config");
    Ok(LoadedConfig { config, path })
}

/// Absolute form of a directory argument.
///
/// Symlinks are resolved when the directory exists; otherwise the path is
/// only made absolute.
pub fn resolve_dir(dir: &Path) -> Result<NormalizedPath> {
    let absolute = match dir.canonicalize() {
        Ok(path) => path,
        Err(_) => std::path::absolute(dir)?,
    };
    Ok(NormalizedPath::new(absolute))
}
