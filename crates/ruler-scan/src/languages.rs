//! Language detection from file extensions

use std::collections::BTreeSet;

use ruler_fs::NormalizedPath;
use walkdir::{DirEntry, WalkDir};

use crate::tables::{SKIP_DIRS, language_for_extension};

/// Languages used in the project, sorted and de-duplicated.
///
/// Files directly in `root` and in directories up to `max_depth` levels
/// below it are considered. Directories named in [`SKIP_DIRS`] are pruned
/// and unreadable entries are skipped.
pub fn scan_languages(root: &NormalizedPath, max_depth: usize) -> Vec<String> {
    let mut found = BTreeSet::new();

    // Files inside a directory at depth N sit at walk depth N + 1.
    let walker = WalkDir::new(root.to_native())
        .max_depth(max_depth + 1)
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_skipped_dir(entry));

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::debug!(error = %e, "skipping unreadable entry");
                continue;
            }
        };
        // Symlinked files count; symlinked directories are not descended.
        if !entry.path().is_file() {
            continue;
        }
        let language = entry
            .path()
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(language_for_extension);
        if let Some(language) = language {
            found.insert(language);
        }
    }

    tracing::debug!(root = %root, languages = ?found, "language scan complete");
    found.into_iter().map(String::from).collect()
}

fn is_skipped_dir(entry: &DirEntry) -> bool {
    entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| SKIP_DIRS.contains(&name))
}
