//! Generate pipeline: render every enabled target and write it to disk

use ruler_fs::NormalizedPath;
use ruler_meta::Configuration;
use ruler_tools::{TargetRegistry, resolve_output_path, write_target};
use serde::Serialize;

use crate::error::Result;

/// Options for [`generate_targets`]
#[derive(Debug, Clone, Copy, Default)]
pub struct GenerateOptions {
    /// Resolve output paths but do not write anything.
    pub dry_run: bool,
}

/// What happened to one enabled target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "kebab-case")]
pub enum GenerateAction {
    Written { path: String },
    WouldWrite { path: String },
    Skipped { reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerateEntry {
    pub target_id: String,
    #[serde(flatten)]
    pub action: GenerateAction,
}

/// Per-target results in `targets.enabled` order.
///
/// Paths are relative to the output directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GenerateReport {
    pub dry_run: bool,
    pub entries: Vec<GenerateEntry>,
}

impl GenerateReport {
    /// Number of files written, or that would be written on a dry run.
    pub fn output_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| !matches!(e.action, GenerateAction::Skipped { .. }))
            .count()
    }

    pub fn skipped(&self) -> impl Iterator<Item = &GenerateEntry> {
        self.entries
            .iter()
            .filter(|e| matches!(e.action, GenerateAction::Skipped { .. }))
    }
}

/// Render each enabled target into `root`.
///
/// Targets are processed sequentially. An id missing from `registry` is
/// recorded as skipped and processing continues. A write failure aborts the
/// run; files written for earlier targets are left in place.
pub fn generate_targets(
    config: &Configuration,
    registry: &TargetRegistry,
    root: &NormalizedPath,
    options: GenerateOptions,
) -> Result<GenerateReport> {
    let mut report = GenerateReport {
        dry_run: options.dry_run,
        entries: Vec::with_capacity(config.targets.enabled.len()),
    };

    for target_id in &config.targets.enabled {
        let renderer = match registry.get(target_id) {
            Ok(renderer) => renderer,
            Err(e) => {
                tracing::warn!(target_id = %target_id, "skipping unknown target");
                report.entries.push(GenerateEntry {
                    target_id: target_id.clone(),
                    action: GenerateAction::Skipped {
                        reason: e.to_string(),
                    },
                });
                continue;
            }
        };

        let action = if options.dry_run {
            let relative = resolve_output_path(&*renderer, config.override_for(target_id));
            let path = root.join(&relative).relative_to(root);
            tracing::debug!(target_id = %target_id, path = %path, "dry run");
            GenerateAction::WouldWrite { path }
        } else {
            let written = write_target(&*renderer, config, root)?;
            GenerateAction::Written {
                path: written.relative_to(root),
            }
        };

        report.entries.push(GenerateEntry {
            target_id: target_id.clone(),
            action,
        });
    }

    Ok(report)
}
