//! Full project scan and draft configuration

use std::collections::BTreeMap;

use ruler_fs::NormalizedPath;
use ruler_meta::{CommandSet, Configuration, ProjectInfo};

use crate::{scan_commands, scan_existing_rule_files, scan_frameworks, scan_languages};

/// Knobs for [`scan_project_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanOptions {
    /// Directory levels below the root searched for source files.
    pub max_depth: usize,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self { max_depth: 3 }
    }
}

/// Everything a scan found.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScanReport {
    pub languages: Vec<String>,
    pub frameworks: Vec<String>,
    pub commands: CommandSet,
    /// Target id to the rule file already on disk
    pub existing: BTreeMap<String, NormalizedPath>,
}

impl ScanReport {
    /// A configuration seeded with the detections.
    ///
    /// Style rules and architecture notes are left empty. The default
    /// targets are enabled, followed by any target whose rule file already
    /// exists.
    pub fn draft_config(&self, name: &str) -> Configuration {
        let mut config = Configuration {
            project: ProjectInfo {
                name: name.to_string(),
                description: String::new(),
                languages: self.languages.clone(),
                frameworks: self.frameworks.clone(),
            },
            commands: self.commands.clone(),
            ..Default::default()
        };
        for target_id in self.existing.keys() {
            if !config.targets.enabled.contains(target_id) {
                config.targets.enabled.push(target_id.clone());
            }
        }
        config
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
            && self.frameworks.is_empty()
            && self.commands.is_empty()
            && self.existing.is_empty()
    }
}

/// Scan `root` with default options.
pub fn scan_project(root: &NormalizedPath) -> ScanReport {
    scan_project_with(root, ScanOptions::default())
}

pub fn scan_project_with(root: &NormalizedPath, options: ScanOptions) -> ScanReport {
    tracing::debug!(root = %root, max_depth = options.max_depth, "scanning project");
    ScanReport {
        languages: scan_languages(root, options.max_depth),
        frameworks: scan_frameworks(root),
        commands: scan_commands(root),
        existing: scan_existing_rule_files(root),
    }
}
