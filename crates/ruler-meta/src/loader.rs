//! Loading and discovery of `.dotruler.toml`

use std::path::{Path, PathBuf};

use ruler_fs::{NormalizedPath, io};

use crate::config::Configuration;
use crate::{Error, Result};

/// Well-known name of the project configuration file.
pub const CONFIG_FILENAME: &str = ".dotruler.toml";

/// Parse configuration text, defaulting every absent field.
///
/// Malformed TOML, or a field of the wrong type, fails the whole parse.
pub fn parse_config(content: &str) -> Result<Configuration> {
    let config: Configuration = toml::from_str(content)?;
    Ok(config)
}

/// Load and parse a configuration file.
pub fn load_config(path: &NormalizedPath) -> Result<Configuration> {
    if !path.is_file() {
        return Err(Error::ConfigNotFound {
            path: path.to_native(),
        });
    }

    let content = io::read_text(path)?;
    let config = parse_config(&content).map_err(|e| Error::InvalidConfig {
        path: path.to_native(),
        message: match e {
            Error::Parse(inner) => inner.to_string().trim_end().to_string(),
            other => other.to_string(),
        },
    })?;

    tracing::debug!(
        path = %path,
        targets = config.targets.enabled.len(),
        "loaded configuration"
    );
    Ok(config)
}

/// Find `.dotruler.toml` in `start` or the nearest ancestor containing one.
///
/// A relative `start` is resolved against the current directory first.
/// Returns `None` when the filesystem root is reached without a match.
pub fn find_config(start: &Path) -> Option<NormalizedPath> {
    let start: PathBuf = if start.is_absolute() {
        start.to_path_buf()
    } else {
        std::env::current_dir().ok()?.join(start)
    };

    start
        .ancestors()
        .map(|dir| dir.join(CONFIG_FILENAME))
        .find(|candidate| candidate.is_file())
        .map(NormalizedPath::from)
}
