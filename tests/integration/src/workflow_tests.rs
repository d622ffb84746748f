//! Workflow Integration Tests
//!
//! Each test copies a fixture project from `test-fixtures/projects` into a
//! temporary directory and drives the whole pipeline over it:
//! scan, init, validate, generate, then diff.

use pretty_assertions::assert_eq;
use rstest::rstest;
use ruler_core::{
    DiffStatus, GenerateAction, GenerateOptions, diff_targets, generate_targets, init_project,
    validate_config,
};
use ruler_meta::{CONFIG_FILENAME, load_config};
use ruler_scan::scan_project;
use ruler_test_utils::TestProject;
use ruler_tools::TargetRegistry;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

// =============================================================================
// Test Infrastructure
// =============================================================================

fn fixture_dir(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../../test-fixtures/projects")
        .join(name)
}

/// Copy a fixture project into a fresh temporary directory.
fn project_from_fixture(name: &str) -> TestProject {
    let source = fixture_dir(name);
    assert!(source.is_dir(), "missing fixture {}", source.display());

    let project = TestProject::new();
    for entry in WalkDir::new(&source).min_depth(1) {
        let entry = entry.unwrap();
        let relative = entry.path().strip_prefix(&source).unwrap();
        let dest = project.root().join(relative);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&dest).unwrap();
        } else {
            fs::copy(entry.path(), &dest).unwrap();
        }
    }
    project
}

// =============================================================================
// Scanning
// =============================================================================

#[test]
fn test_scan_next_app() {
    let project = project_from_fixture("next-app");

    let report = scan_project(&project.normalized_root());

    // dist/ is build output and must not contribute languages
    assert_eq!(report.languages, vec!["javascript", "typescript"]);
    assert_eq!(report.frameworks, vec!["nextjs", "react"]);
    assert_eq!(report.commands.build.as_deref(), Some("npm run build"));
    assert_eq!(report.commands.lint.as_deref(), Some("npm run lint"));
    assert_eq!(report.commands.dev.as_deref(), Some("npm run dev"));
    assert_eq!(report.commands.test, None);
    let existing: Vec<&str> = report.existing.keys().map(String::as_str).collect();
    assert_eq!(existing, vec!["cursorrules"]);
}

#[test]
fn test_scan_py_service() {
    let project = project_from_fixture("py-service");

    let report = scan_project(&project.normalized_root());

    assert_eq!(report.languages, vec!["python"]);
    assert_eq!(report.frameworks, vec!["fastapi"]);
    assert_eq!(report.commands.build.as_deref(), Some("make build"));
    assert_eq!(report.commands.test.as_deref(), Some("make test"));
    assert_eq!(report.commands.lint.as_deref(), Some("ruff check ."));
    assert!(report.existing.is_empty());
}

// =============================================================================
// Full workflow
// =============================================================================

#[rstest]
#[case("next-app")]
#[case("py-service")]
fn test_init_generate_diff_workflow(#[case] fixture: &str) {
    let project = project_from_fixture(fixture);
    let root = project.normalized_root();
    let registry = TargetRegistry::with_builtins();

    let init = init_project(&root, false).unwrap();
    assert_eq!(init.config_path, root.join(CONFIG_FILENAME));

    let config = load_config(&init.config_path).unwrap();
    assert_eq!(config.project.languages, init.scan.languages);
    assert_eq!(config.commands, init.scan.commands);

    // Starter rules are commented out, so only warnings are expected
    let validation = validate_config(&config, &registry);
    assert!(!validation.has_errors(), "{:?}", validation.findings);

    let before = diff_targets(&config, &registry, &root).unwrap();
    assert!(before.has_changes());

    let report = generate_targets(&config, &registry, &root, GenerateOptions::default()).unwrap();
    assert_eq!(report.output_count(), config.targets.enabled.len());
    assert!(
        report
            .entries
            .iter()
            .all(|e| matches!(e.action, GenerateAction::Written { .. }))
    );

    let after = diff_targets(&config, &registry, &root).unwrap();
    assert!(!after.has_changes());
    assert!(
        after
            .targets
            .iter()
            .all(|t| t.status == DiffStatus::Unchanged)
    );
}

#[test]
fn test_existing_rule_file_is_reported_then_replaced() {
    let project = project_from_fixture("next-app");
    let root = project.normalized_root();
    let registry = TargetRegistry::with_builtins();

    init_project(&root, false).unwrap();
    let config = load_config(&root.join(CONFIG_FILENAME)).unwrap();

    let diff = diff_targets(&config, &registry, &root).unwrap();
    let cursor = diff
        .targets
        .iter()
        .find(|t| t.target_id == "cursorrules")
        .unwrap();
    match &cursor.status {
        DiffStatus::Modified { diff } => {
            assert!(diff.contains("-Always use TypeScript strict mode."));
        }
        other => panic!("expected modified, got {other:?}"),
    }

    generate_targets(&config, &registry, &root, GenerateOptions::default()).unwrap();

    let content = project.read_file(".cursorrules");
    assert!(!content.contains("Always use TypeScript strict mode."));
    assert!(content.contains("nextjs"));
}

#[test]
fn test_edited_config_shows_up_in_diff() {
    let project = project_from_fixture("py-service");
    let root = project.normalized_root();
    let registry = TargetRegistry::with_builtins();

    init_project(&root, false).unwrap();
    let mut config = load_config(&root.join(CONFIG_FILENAME)).unwrap();
    generate_targets(&config, &registry, &root, GenerateOptions::default()).unwrap();

    config.style.rules.push("Type-annotate every public function".into());
    let diff = diff_targets(&config, &registry, &root).unwrap();

    assert!(diff.has_changes());
    for target in &diff.targets {
        match &target.status {
            DiffStatus::Modified { diff } => {
                assert!(diff.contains("+- Type-annotate every public function"));
            }
            other => panic!("{}: expected modified, got {other:?}", target.target_id),
        }
    }
}

#[test]
fn test_dry_run_leaves_fixture_untouched() {
    let project = project_from_fixture("next-app");
    let root = project.normalized_root();
    let registry = TargetRegistry::with_builtins();

    init_project(&root, false).unwrap();
    let config = load_config(&root.join(CONFIG_FILENAME)).unwrap();

    let report = generate_targets(&config, &registry, &root, GenerateOptions { dry_run: true })
        .unwrap();

    assert!(report.dry_run);
    project.assert_file_not_exists("CLAUDE.md");
    project.assert_file_not_exists(".github/copilot-instructions.md");
    assert_eq!(
        project.read_file(".cursorrules"),
        "Always use TypeScript strict mode.\n"
    );
}
