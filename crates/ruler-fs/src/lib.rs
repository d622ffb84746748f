//! Filesystem helpers for dotruler
//!
//! Provides slash-normalized paths and the small set of text I/O operations
//! the generator needs: reading rule files back for comparison and writing
//! rendered output in place.

pub mod error;
pub mod io;
pub mod path;

pub use error::{Error, Result};
pub use path::NormalizedPath;
