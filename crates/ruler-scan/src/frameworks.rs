//! Framework detection from marker files and manifests

use std::collections::BTreeSet;

use ruler_fs::NormalizedPath;

use crate::manifest::{read_package_json, read_pyproject_dependencies};
use crate::tables::{FRAMEWORK_MARKERS, NPM_FRAMEWORKS, PYTHON_FRAMEWORKS};

/// Frameworks used in the project, sorted and de-duplicated.
///
/// Only the project root is inspected.
pub fn scan_frameworks(root: &NormalizedPath) -> Vec<String> {
    let mut found = BTreeSet::new();

    for (marker, framework) in FRAMEWORK_MARKERS {
        if root.join(marker).exists() {
            found.insert(*framework);
        }
    }

    if let Some(manifest) = read_package_json(root) {
        for framework in NPM_FRAMEWORKS {
            if manifest.depends_on(framework) {
                found.insert(*framework);
            }
        }
    }

    if let Some(deps) = read_pyproject_dependencies(root) {
        // Specs like "fastapi>=0.110" are matched by substring.
        let joined = deps.join(" ").to_lowercase();
        for framework in PYTHON_FRAMEWORKS {
            if joined.contains(framework) {
                found.insert(*framework);
            }
        }
    }

    tracing::debug!(root = %root, frameworks = ?found, "framework scan complete");
    found.into_iter().map(String::from).collect()
}
