//! Error types for ruler-tools

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Filesystem error: {0}")]
    Fs(#[from] ruler_fs::Error),

    #[error("Unknown target '{id}'. Available: {}", .available.join(", "))]
    UnknownTarget { id: String, available: Vec<String> },

    #[error("Target '{id}' is already registered")]
    DuplicateTarget { id: String },
}
