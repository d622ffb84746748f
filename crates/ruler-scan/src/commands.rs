//! Command detection
//!
//! Sources are consulted in order: `package.json` scripts, a `Makefile`, then
//! Python project files. Each command slot keeps the first value found.

use ruler_fs::NormalizedPath;
use ruler_meta::CommandSet;

use crate::manifest::read_package_json;

/// Common project commands inferred from build files.
pub fn scan_commands(root: &NormalizedPath) -> CommandSet {
    let mut commands = CommandSet::default();

    if let Some(manifest) = read_package_json(root) {
        let has = |script: &str| manifest.scripts.contains_key(script);
        if has("build") {
            commands.build = Some("npm run build".into());
        }
        if has("test") {
            commands.test = Some("npm test".into());
        }
        if has("lint") {
            commands.lint = Some("npm run lint".into());
        }
        if has("dev") {
            commands.dev = Some("npm run dev".into());
        } else if has("start") {
            commands.dev = Some("npm start".into());
        }
    }

    if root.join("Makefile").exists() {
        commands.build.get_or_insert_with(|| "make build".into());
        commands.test.get_or_insert_with(|| "make test".into());
    }

    if root.join("pyproject.toml").exists() || root.join("setup.py").exists() {
        commands.test.get_or_insert_with(|| "pytest".into());
        commands.lint.get_or_insert_with(|| "ruff check .".into());
    }

    tracing::debug!(root = %root, commands = ?commands.entries(), "command scan complete");
    commands
}
