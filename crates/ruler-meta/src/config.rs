//! Configuration types for `.dotruler.toml`
//!
//! ```toml
//! [project]
//! name = "myapp"
//! languages = ["typescript"]
//!
//! [style]
//! rules = ["Prefer const over let"]
//!
//! [targets]
//! enabled = ["claude-md", "cursorrules"]
//!
//! [targets.claude-md]
//! extra_rules = ["Read files before editing them"]
//! output_path = "docs/CLAUDE.md"
//! ```

use std::collections::BTreeMap;

use serde::de::Error as _;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Targets enabled when `[targets] enabled` is absent.
pub const DEFAULT_TARGETS: [&str; 3] = ["claude-md", "cursorrules", "copilot"];

/// Reserved key under `[targets]`; every other table is an override.
const ENABLED_KEY: &str = "enabled";

/// Project metadata, the `[project]` section
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectInfo {
    pub name: String,
    pub description: String,
    pub languages: Vec<String>,
    pub frameworks: Vec<String>,
}

/// Project-wide coding rules, the `[style]` section
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleRules {
    pub rules: Vec<String>,
}

/// Well-known project commands, the `[commands]` section
///
/// Only set, non-empty commands reach the rendered output.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CommandSet {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dev: Option<String>,
}

impl CommandSet {
    /// Set commands as `(name, command)` pairs, in build, test, lint, dev order.
    pub fn entries(&self) -> Vec<(&'static str, &str)> {
        [
            ("build", &self.build),
            ("test", &self.test),
            ("lint", &self.lint),
            ("dev", &self.dev),
        ]
        .into_iter()
        .filter_map(|(name, cmd)| {
            cmd.as_deref()
                .filter(|c| !c.is_empty())
                .map(|c| (name, c))
        })
        .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }
}

/// Free-form architecture notes, the `[architecture]` section
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ArchitectureNotes {
    pub notes: Vec<String>,
}

/// Per-target customization from a `[targets.<id>]` table
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TargetOverride {
    /// Rules appended after the global style rules for this target only
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub extra_rules: Vec<String>,
    /// Output path relative to the project root, replacing the default
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_path: Option<String>,
}

/// Enabled targets and their overrides, the `[targets]` section
///
/// `enabled` keeps document order and is not de-duplicated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetSelection {
    pub enabled: Vec<String>,
    pub overrides: BTreeMap<String, TargetOverride>,
}

impl Default for TargetSelection {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            overrides: BTreeMap::new(),
        }
    }
}

fn default_enabled() -> Vec<String> {
    DEFAULT_TARGETS.iter().map(|t| t.to_string()).collect()
}

/// Wire shape of `[targets]`: the reserved list plus every other key.
#[derive(Deserialize)]
struct RawTargets {
    #[serde(default = "default_enabled")]
    enabled: Vec<String>,
    #[serde(flatten)]
    rest: BTreeMap<String, toml::Value>,
}

impl<'de> Deserialize<'de> for TargetSelection {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawTargets::deserialize(deserializer)?;

        let mut overrides = BTreeMap::new();
        for (id, value) in raw.rest {
            if !value.is_table() {
                continue;
            }
            let target_override: TargetOverride = value.try_into().map_err(|e| {
                D::Error::custom(format!("invalid override for target '{id}': {e}"))
            })?;
            overrides.insert(id, target_override);
        }

        Ok(Self {
            enabled: raw.enabled,
            overrides,
        })
    }
}

impl Serialize for TargetSelection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1 + self.overrides.len()))?;
        map.serialize_entry(ENABLED_KEY, &self.enabled)?;
        for (id, target_override) in &self.overrides {
            map.serialize_entry(id, target_override)?;
        }
        map.end()
    }
}

/// The full project configuration parsed from `.dotruler.toml`
///
/// Construction never validates; an empty name or target list is reported
/// by validation instead.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    pub project: ProjectInfo,
    pub style: StyleRules,
    pub commands: CommandSet,
    pub architecture: ArchitectureNotes,
    pub targets: TargetSelection,
}

impl Configuration {
    /// Override table for a target, if one was configured.
    pub fn override_for(&self, target_id: &str) -> Option<&TargetOverride> {
        self.targets.overrides.get(target_id)
    }
}
