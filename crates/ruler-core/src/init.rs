//! Project init: scan a directory and write a starter `.dotruler.toml`

use ruler_fs::{NormalizedPath, io};
use ruler_meta::CONFIG_FILENAME;
use ruler_scan::{ScanReport, scan_project};

use crate::error::{Error, Result};

/// Outcome of [`init_project`].
#[derive(Debug, Clone)]
pub struct InitReport {
    pub config_path: NormalizedPath,
    pub scan: ScanReport,
}

/// Scan `root` and write a starter configuration into it.
///
/// An existing configuration is left alone unless `force` is set. The
/// project name is the last component of `root`, so callers should pass an
/// absolute path.
pub fn init_project(root: &NormalizedPath, force: bool) -> Result<InitReport> {
    let config_path = root.join(CONFIG_FILENAME);
    if config_path.exists() && !force {
        return Err(Error::ConfigExists {
            path: config_path.to_native(),
        });
    }

    let scan = scan_project(root);
    let name = root.file_name().unwrap_or("project");
    io::write_text(&config_path, &starter_config(name, &scan))?;

    tracing::info!(path = %config_path, "wrote starter configuration");
    Ok(InitReport { config_path, scan })
}

/// The starter `.dotruler.toml` for a scanned project.
///
/// Rendered from [`ScanReport::draft_config`]. Sections with nothing
/// detected carry commented-out examples so the file still parses.
pub fn starter_config(name: &str, scan: &ScanReport) -> String {
    let draft = scan.draft_config(name);
    let mut config = String::new();

    config.push_str("[project]\n");
    config.push_str(&format!("name = {}\n", quote(&draft.project.name)));
    config.push_str(&format!("description = {}\n", quote(&draft.project.description)));
    config.push_str(&format!("languages = {}\n", string_array(&draft.project.languages)));
    config.push_str(&format!("frameworks = {}\n", string_array(&draft.project.frameworks)));

    config.push_str("\n[style]\n");
    config.push_str("rules = [\n");
    config.push_str("  # \"Use functional components with hooks\",\n");
    config.push_str("  # \"Prefer const over let\",\n");
    config.push_str("]\n");

    config.push_str("\n[commands]\n");
    let commands = draft.commands.entries();
    if commands.is_empty() {
        config.push_str("# build = \"npm run build\"\n");
        config.push_str("# test = \"npm test\"\n");
        config.push_str("# lint = \"npm run lint\"\n");
        config.push_str("# dev = \"npm run dev\"\n");
    } else {
        for (name, command) in commands {
            config.push_str(&format!("{name} = {}\n", quote(command)));
        }
    }

    config.push_str("\n[architecture]\n");
    config.push_str("notes = [\n");
    config.push_str("  # \"API routes in src/app/api/\",\n");
    config.push_str("  # \"Database models in src/models/\",\n");
    config.push_str("]\n");

    config.push_str("\n[targets]\n");
    config.push_str(&format!("enabled = {}\n", string_array(&draft.targets.enabled)));

    config
}

fn quote(value: &str) -> String {
    toml::Value::String(value.to_string()).to_string()
}

fn string_array(values: &[String]) -> String {
    let items: Vec<String> = values.iter().map(|v| quote(v)).collect();
    format!("[{}]", items.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ruler_meta::{CommandSet, DEFAULT_TARGETS, parse_config};
    use std::collections::BTreeMap;

    fn scan() -> ScanReport {
        ScanReport {
            languages: vec!["python".into()],
            frameworks: vec![],
            commands: CommandSet {
                test: Some("pytest".into()),
                lint: Some("ruff check .".into()),
                ..Default::default()
            },
            existing: BTreeMap::new(),
        }
    }

    #[test]
    fn test_starter_config_snapshot() {
        insta::assert_snapshot!(starter_config("api", &scan()), @r###"
        [project]
        name = "api"
        description = ""
        languages = ["python"]
        frameworks = []

        [style]
        rules = [
          # "Use functional components with hooks",
          # "Prefer const over let",
        ]

        [commands]
        test = "pytest"
        lint = "ruff check ."

        [architecture]
        notes = [
          # "API routes in src/app/api/",
          # "Database models in src/models/",
        ]

        [targets]
        enabled = ["claude-md", "cursorrules", "copilot"]
        "###);
    }

    #[test]
    fn test_starter_config_parses_back() {
        let config = parse_config(&starter_config("api", &scan())).unwrap();

        assert_eq!(config.project.name, "api");
        assert_eq!(config.project.languages, vec!["python"]);
        assert_eq!(config.commands.test.as_deref(), Some("pytest"));
        assert!(config.style.rules.is_empty());
        assert_eq!(config.targets.enabled, DEFAULT_TARGETS);
    }

    #[test]
    fn test_name_is_escaped() {
        let config = parse_config(&starter_config("my \"quoted\" app", &ScanReport::default()))
            .unwrap();
        assert_eq!(config.project.name, "my \"quoted\" app");
        assert!(config.commands.is_empty());
    }

    #[test]
    fn test_existing_rule_files_are_enabled() {
        let mut report = scan();
        report
            .existing
            .insert("codex".into(), NormalizedPath::new("/p/AGENTS.md"));
        report
            .existing
            .insert("claude-md".into(), NormalizedPath::new("/p/CLAUDE.md"));

        let config = parse_config(&starter_config("p", &report)).unwrap();
        assert_eq!(
            config.targets.enabled,
            vec!["claude-md", "cursorrules", "copilot", "codex"]
        );
    }

    #[test]
    fn test_starter_config_matches_draft() {
        let mut report = scan();
        report
            .existing
            .insert("windsurf".into(), NormalizedPath::new("/p/.windsurfrules"));

        let parsed = parse_config(&starter_config("p", &report)).unwrap();
        assert_eq!(parsed, report.draft_config("p"));
    }
}
