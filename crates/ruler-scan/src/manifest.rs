//! Best-effort readers for `package.json` and `pyproject.toml`
//!
//! A missing, unreadable or malformed manifest reads as `None`.

use std::collections::BTreeMap;

use ruler_fs::{NormalizedPath, io};
use serde::Deserialize;

/// The parts of `package.json` the scanner looks at.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct PackageManifest {
    #[serde(default)]
    pub dependencies: BTreeMap<String, serde_json::Value>,
    #[serde(default, rename = "devDependencies")]
    pub dev_dependencies: BTreeMap<String, serde_json::Value>,
    #[serde(default)]
    pub scripts: BTreeMap<String, serde_json::Value>,
}

impl PackageManifest {
    pub fn depends_on(&self, name: &str) -> bool {
        self.dependencies.contains_key(name) || self.dev_dependencies.contains_key(name)
    }
}

pub(crate) fn read_package_json(root: &NormalizedPath) -> Option<PackageManifest> {
    let path = root.join("package.json");
    let content = read_optional(&path)?;
    match serde_json::from_str(&content) {
        Ok(manifest) => Some(manifest),
        Err(e) => {
            tracing::debug!(path = %path, error = %e, "ignoring malformed package.json");
            None
        }
    }
}

/// `project.dependencies` from `pyproject.toml`.
pub(crate) fn read_pyproject_dependencies(root: &NormalizedPath) -> Option<Vec<String>> {
    let path = root.join("pyproject.toml");
    let content = read_optional(&path)?;
    let doc: toml::Value = match toml::from_str(&content) {
        Ok(doc) => doc,
        Err(e) => {
            tracing::debug!(path = %path, error = %e, "ignoring malformed pyproject.toml");
            return None;
        }
    };

    let deps = doc
        .get("project")
        .and_then(|p| p.get("dependencies"))
        .and_then(toml::Value::as_array)
        .map(|deps| {
            deps.iter()
                .filter_map(toml::Value::as_str)
                .map(String::from)
                .collect()
        })
        .unwrap_or_default();
    Some(deps)
}

fn read_optional(path: &NormalizedPath) -> Option<String> {
    match io::read_text_if_exists(path) {
        Ok(content) => content,
        Err(e) => {
            tracing::debug!(path = %path, error = %e, "cannot read manifest");
            None
        }
    }
}
