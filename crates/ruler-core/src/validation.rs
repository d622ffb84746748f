//! Configuration validation
//!
//! Validation only observes: it never changes the configuration and reports
//! every finding rather than stopping at the first.

use std::fmt;

use ruler_meta::Configuration;
use ruler_tools::TargetRegistry;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Output will be incomplete but can still be produced
    Warning,
    /// The configuration is unusable as written
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub severity: Severity,
    pub message: String,
    /// Target the finding is about, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}

impl Finding {
    fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
            target: None,
        }
    }

    fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
            target: None,
        }
    }

    fn for_target(mut self, target_id: &str) -> Self {
        self.target = Some(target_id.to_string());
        self
    }
}

/// All findings for one configuration, in check order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub findings: Vec<Finding>,
}

impl ValidationReport {
    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }

    pub fn errors(&self) -> impl Iterator<Item = &Finding> {
        self.by_severity(Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Finding> {
        self.by_severity(Severity::Warning)
    }

    fn by_severity(&self, severity: Severity) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(move |f| f.severity == severity)
    }
}

/// Check `config` against the targets known to `registry`.
pub fn validate_config(config: &Configuration, registry: &TargetRegistry) -> ValidationReport {
    let mut findings = Vec::new();

    if config.project.name.is_empty() {
        findings.push(Finding::error("project.name is required"));
    }

    if config.style.rules.is_empty() {
        findings.push(Finding::warning(
            "style.rules is empty - your AI tools won't have any coding rules",
        ));
    }

    if config.targets.enabled.is_empty() {
        findings.push(Finding::error(
            "targets.enabled is empty - no output files will be generated",
        ));
    }

    for target_id in &config.targets.enabled {
        if !registry.contains(target_id) {
            findings.push(
                Finding::error(format!("unknown target '{target_id}' in targets.enabled"))
                    .for_target(target_id),
            );
        }
    }

    for target_id in config.targets.overrides.keys() {
        if !registry.contains(target_id) {
            findings.push(
                Finding::warning(format!("override for unknown target '{target_id}'"))
                    .for_target(target_id),
            );
        }
    }

    tracing::debug!(findings = findings.len(), "validated configuration");
    ValidationReport { findings }
}
