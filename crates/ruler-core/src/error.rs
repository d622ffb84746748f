//! Error types for ruler-core

use std::path::PathBuf;

/// Result type for ruler-core operations
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// `init` found a configuration and was not asked to replace it
    #[error("{} already exists", .path.display())]
    ConfigExists { path: PathBuf },

    #[error(transparent)]
    Fs(#[from] ruler_fs::Error),

    #[error(transparent)]
    Meta(#[from] ruler_meta::Error),

    #[error(transparent)]
    Tools(#[from] ruler_tools::Error),
}
