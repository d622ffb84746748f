//! Lookup tables driving detection

/// File extension (lowercase, without the dot) to language.
pub const LANGUAGE_EXTENSIONS: &[(&str, &str)] = &[
    ("py", "python"),
    ("js", "javascript"),
    ("jsx", "javascript"),
    ("ts", "typescript"),
    ("tsx", "typescript"),
    ("go", "go"),
    ("rs", "rust"),
    ("rb", "ruby"),
    ("java", "java"),
    ("kt", "kotlin"),
    ("swift", "swift"),
    ("c", "c"),
    ("cpp", "cpp"),
    ("cs", "csharp"),
    ("php", "php"),
    ("dart", "dart"),
    ("lua", "lua"),
    ("zig", "zig"),
    ("ex", "elixir"),
    ("exs", "elixir"),
];

/// Marker file at the project root to framework.
pub const FRAMEWORK_MARKERS: &[(&str, &str)] = &[
    ("next.config.js", "nextjs"),
    ("next.config.mjs", "nextjs"),
    ("next.config.ts", "nextjs"),
    ("nuxt.config.ts", "nuxt"),
    ("nuxt.config.js", "nuxt"),
    ("svelte.config.js", "svelte"),
    ("astro.config.mjs", "astro"),
    ("angular.json", "angular"),
    ("vue.config.js", "vue"),
    ("vite.config.ts", "vite"),
    ("vite.config.js", "vite"),
    ("remix.config.js", "remix"),
    ("gatsby-config.js", "gatsby"),
    ("manage.py", "django"),
    ("Cargo.toml", "rust"),
    ("go.mod", "go"),
    ("Gemfile", "rails"),
    ("pubspec.yaml", "flutter"),
    ("Package.swift", "swift"),
    ("build.gradle", "gradle"),
    ("pom.xml", "maven"),
    ("composer.json", "laravel"),
    ("tailwind.config.js", "tailwind"),
    ("tailwind.config.ts", "tailwind"),
];

/// `package.json` dependency names that identify a framework.
pub const NPM_FRAMEWORKS: &[&str] = &["react", "vue", "express", "fastify"];

/// Substrings of `pyproject.toml` dependency specs that identify a framework.
pub const PYTHON_FRAMEWORKS: &[&str] = &["fastapi", "flask", "django"];

/// Rule file path relative to the root to the target that produces it.
pub const RULE_FILES: &[(&str, &str)] = &[
    ("CLAUDE.md", "claude-md"),
    (".cursorrules", "cursorrules"),
    (".github/copilot-instructions.md", "copilot"),
    (".windsurfrules", "windsurf"),
    ("AGENTS.md", "codex"),
    ("CONVENTIONS.md", "aider"),
];

/// Directory names never descended into.
pub const SKIP_DIRS: &[&str] = &[
    ".git",
    "node_modules",
    ".venv",
    "venv",
    "__pycache__",
    "build",
    "dist",
    ".next",
    ".nuxt",
    "target",
    ".tox",
    ".mypy_cache",
    ".pytest_cache",
    ".ruff_cache",
];

/// Language for a file extension, compared case-insensitively.
pub fn language_for_extension(ext: &str) -> Option<&'static str> {
    let ext = ext.to_ascii_lowercase();
    LANGUAGE_EXTENSIONS
        .iter()
        .find(|(e, _)| *e == ext)
        .map(|(_, lang)| *lang)
}
