//! Shared test fixtures for the dotruler workspace.
//!
//! Dev-dependency only, never published.
//!
//! - [`project`]: [`TestProject`] builder for a throwaway project directory
//! - [`SAMPLE_CONFIG`]: a complete `.dotruler.toml` used across suites

pub mod project;

pub use project::TestProject;

/// A `.dotruler.toml` that exercises every section and validates cleanly.
pub const SAMPLE_CONFIG: &str = r#"[project]
name = "myapp"
description = "A test application"
languages = ["typescript", "python"]
frameworks = ["nextjs", "fastapi"]

[style]
rules = [
  "Use functional components",
  "Prefer const over let",
]

[commands]
build = "npm run build"
test = "pytest && npm test"
lint = "ruff check ."

[architecture]
notes = ["API routes in src/app/api/"]

[targets]
enabled = ["claude-md", "cursorrules", "copilot"]

[targets.claude-md]
extra_rules = ["Use Read tool before editing"]
"#;
