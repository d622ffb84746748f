//! Diff pipeline: compare rendered targets with what is on disk

use ruler_fs::{NormalizedPath, io};
use ruler_meta::Configuration;
use ruler_tools::{TargetRegistry, render_output, resolve_output_path};
use serde::Serialize;
use similar::TextDiff;

use crate::error::Result;

/// How a target's file on disk relates to its rendered output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum DiffStatus {
    Unchanged,
    /// The file exists with different content; `diff` is a unified diff
    /// from the file on disk to the rendered output.
    Modified { diff: String },
    /// No file exists yet.
    New,
    /// The target id is not registered.
    Skipped { reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TargetDiff {
    pub target_id: String,
    /// Output path relative to the project directory
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(flatten)]
    pub status: DiffStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DiffReport {
    pub targets: Vec<TargetDiff>,
}

impl DiffReport {
    /// Whether running `generate` would change anything on disk.
    pub fn has_changes(&self) -> bool {
        self.targets
            .iter()
            .any(|t| matches!(t.status, DiffStatus::Modified { .. } | DiffStatus::New))
    }
}

/// Render every enabled target and compare it with the file under `root`.
///
/// The comparison uses the length-limited output, i.e. exactly what
/// `generate` would write. Nothing is written.
pub fn diff_targets(
    config: &Configuration,
    registry: &TargetRegistry,
    root: &NormalizedPath,
) -> Result<DiffReport> {
    let mut report = DiffReport::default();

    for target_id in &config.targets.enabled {
        let renderer = match registry.get(target_id) {
            Ok(renderer) => renderer,
            Err(e) => {
                tracing::warn!(target_id = %target_id, "skipping unknown target");
                report.targets.push(TargetDiff {
                    target_id: target_id.clone(),
                    path: None,
                    status: DiffStatus::Skipped {
                        reason: e.to_string(),
                    },
                });
                continue;
            }
        };

        let relative = resolve_output_path(&*renderer, config.override_for(target_id));
        let full_path = root.join(&relative);
        let display_path = full_path.relative_to(root);
        let rendered = render_output(&*renderer, config);

        let status = match io::read_text_if_exists(&full_path)? {
            None => DiffStatus::New,
            Some(current) if current == rendered => DiffStatus::Unchanged,
            Some(current) => DiffStatus::Modified {
                diff: unified_diff(&current, &rendered, &display_path),
            },
        };
        tracing::debug!(target_id = %target_id, path = %display_path, ?status, "compared target");

        report.targets.push(TargetDiff {
            target_id: target_id.clone(),
            path: Some(display_path),
            status,
        });
    }

    Ok(report)
}

/// Line-based unified diff from `old` to `new`, both labelled `path`.
pub fn unified_diff(old: &str, new: &str, path: &str) -> String {
    TextDiff::from_lines(old, new)
        .unified_diff()
        .context_radius(3)
        .header(path, path)
        .to_string()
}
