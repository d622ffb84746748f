//! CLI end-to-end tests that invoke the compiled `dotruler` binary

use assert_cmd::Command;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use ruler_test_utils::{SAMPLE_CONFIG, TestProject};

const MINIMAL_CONFIG: &str = r#"[project]
name = "test"

[style]
rules = ["Be consistent"]

[targets]
enabled = ["claude-md"]
"#;

/// Get a Command for the dotruler binary with a clean environment.
fn dotruler() -> Command {
    let mut cmd = Command::cargo_bin("dotruler").expect("Failed to find dotruler binary");
    cmd.env_remove("DOTRULER_CONFIG")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

/// A project with `config` written and the path to it as a string.
fn project_with(config: &str) -> (TestProject, String) {
    let project = TestProject::new();
    let path = project.write_config(config);
    (project, path.to_string())
}

fn root_arg(project: &TestProject) -> String {
    project.root().to_string_lossy().into_owned()
}

// ============================================================================
// help / version / list
// ============================================================================

#[test]
fn test_help() {
    dotruler()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("One config"));
}

#[test]
fn test_no_args_shows_help() {
    dotruler()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_version_command() {
    dotruler()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("0.1.0"));
}

#[test]
fn test_version_flag() {
    dotruler()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("0.1.0"));
}

#[test]
fn test_list() {
    dotruler()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("claude-md"))
        .stdout(predicate::str::contains("cursorrules"))
        .stdout(predicate::str::contains("copilot"))
        .stdout(predicate::str::contains("12,000"));
}

#[test]
fn test_list_json() {
    let output = dotruler().args(["list", "--json"]).output().unwrap();
    assert!(output.status.success());

    let targets: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let targets = targets.as_array().unwrap();
    assert_eq!(targets.len(), 6);

    let windsurf = targets.iter().find(|t| t["id"] == "windsurf").unwrap();
    assert_eq!(windsurf["output"], ".windsurfrules");
    assert_eq!(windsurf["max_chars"], 12000);

    let claude = targets.iter().find(|t| t["id"] == "claude-md").unwrap();
    assert!(claude["max_chars"].is_null());
}

// ============================================================================
// init
// ============================================================================

#[test]
fn test_init() {
    let project = TestProject::new();
    project.write_file("app.py", "print('hello')");

    dotruler()
        .args(["init", &root_arg(&project)])
        .assert()
        .success()
        .stdout(predicate::str::contains("Languages:  python"))
        .stdout(predicate::str::contains("Created .dotruler.toml"));

    project.assert_file_contains(".dotruler.toml", "languages = [\"python\"]");
}

#[test]
fn test_init_no_overwrite() {
    let project = TestProject::new();
    project.write_config("[project]\nname = 'x'\n");

    dotruler()
        .args(["init", &root_arg(&project)])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("already exists"));

    assert_eq!(project.read_file(".dotruler.toml"), "[project]\nname = 'x'\n");
}

#[test]
fn test_init_force_overwrite() {
    let project = TestProject::new();
    project.write_config("[project]\nname = 'x'\n");

    dotruler()
        .args(["init", &root_arg(&project), "--force"])
        .assert()
        .success();

    project.assert_file_contains(".dotruler.toml", "[targets]");
}

// ============================================================================
// generate
// ============================================================================

#[test]
fn test_generate() {
    let (project, config) = project_with(MINIMAL_CONFIG);

    dotruler()
        .args(["generate", &root_arg(&project), "--config", &config])
        .assert()
        .success()
        .stdout(predicate::str::contains("CLAUDE.md"));

    project.assert_file_contains("CLAUDE.md", "- Be consistent");
}

#[test]
fn test_generate_dry_run() {
    let (project, config) = project_with(MINIMAL_CONFIG);

    dotruler()
        .args(["generate", &root_arg(&project), "--config", &config, "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("would write"));

    project.assert_file_not_exists("CLAUDE.md");
}

#[test]
fn test_generate_discovers_config_from_cwd() {
    let (project, _) = project_with(SAMPLE_CONFIG);
    project.mkdir("src/nested");

    dotruler()
        .current_dir(project.path("src/nested"))
        .args(["generate", &root_arg(&project)])
        .assert()
        .success();

    project.assert_file_exists("CLAUDE.md");
    project.assert_file_exists(".cursorrules");
    project.assert_file_exists(".github/copilot-instructions.md");
}

#[test]
fn test_generate_config_from_env() {
    let (project, config) = project_with(MINIMAL_CONFIG);
    let elsewhere = TestProject::new();

    dotruler()
        .current_dir(elsewhere.root())
        .env("DOTRULER_CONFIG", &config)
        .args(["generate", &root_arg(&project)])
        .assert()
        .success();

    project.assert_file_exists("CLAUDE.md");
}

#[test]
fn test_generate_skips_unknown_target() {
    let (project, config) = project_with(
        "[project]\nname = \"x\"\n\n[targets]\nenabled = [\"emacs\", \"claude-md\"]\n",
    );

    dotruler()
        .args(["generate", &root_arg(&project), "--config", &config])
        .assert()
        .success()
        .stdout(predicate::str::contains("Unknown target 'emacs'"));

    project.assert_file_exists("CLAUDE.md");
}

#[test]
fn test_generate_malformed_config() {
    let (project, config) = project_with("[project\nname = ");

    dotruler()
        .args(["generate", &root_arg(&project), "--config", &config])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("error"));

    project.assert_file_not_exists("CLAUDE.md");
}

// ============================================================================
// validate
// ============================================================================

#[test]
fn test_validate_valid() {
    let (_project, config) = project_with(MINIMAL_CONFIG);

    dotruler()
        .args(["validate", "--config", &config])
        .assert()
        .success()
        .stdout(predicate::str::contains("valid"));
}

#[test]
fn test_validate_invalid() {
    let (_project, config) = project_with("[project]\nname = \"\"\n\n[targets]\nenabled = []\n");

    dotruler()
        .args(["validate", "--config", &config])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("project.name is required"))
        .stdout(predicate::str::contains("targets.enabled is empty"));
}

#[test]
fn test_validate_warnings_only_succeeds() {
    let (_project, config) = project_with("[project]\nname = \"x\"\n");

    dotruler()
        .args(["validate", "--config", &config])
        .assert()
        .success()
        .stdout(predicate::str::contains("style.rules is empty"));
}

// ============================================================================
// diff
// ============================================================================

#[test]
fn test_diff_no_config() {
    let project = TestProject::new();

    dotruler()
        .current_dir(project.root())
        .arg("diff")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No .dotruler.toml found"));
}

#[test]
fn test_diff_no_changes() {
    let (project, config) = project_with(MINIMAL_CONFIG);

    dotruler()
        .args(["generate", &root_arg(&project), "--config", &config])
        .assert()
        .success();

    dotruler()
        .args(["diff", &root_arg(&project), "--config", &config])
        .assert()
        .success()
        .stdout(predicate::str::contains("unchanged"))
        .stdout(predicate::str::contains("Everything is in sync."));
}

#[test]
fn test_diff_shows_new_and_modified() {
    let (project, config) = project_with(SAMPLE_CONFIG);
    project.write_file("CLAUDE.md", "# old\n");

    dotruler()
        .args(["diff", &root_arg(&project), "--config", &config])
        .assert()
        .success()
        .stdout(predicate::str::contains("modified CLAUDE.md"))
        .stdout(predicate::str::contains("-# old"))
        .stdout(predicate::str::contains("new .cursorrules"))
        .stdout(predicate::str::contains("dotruler generate"));

    assert_eq!(project.read_file("CLAUDE.md"), "# old\n");
}

#[test]
fn test_diff_json() {
    let (project, config) = project_with(MINIMAL_CONFIG);

    let output = dotruler()
        .args(["diff", &root_arg(&project), "--config", &config, "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["has_changes"], true);
    assert_eq!(report["targets"][0]["target_id"], "claude-md");
    assert_eq!(report["targets"][0]["status"], "new");
    assert_eq!(report["targets"][0]["path"], "CLAUDE.md");
}
