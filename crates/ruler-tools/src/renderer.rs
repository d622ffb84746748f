//! Renderer trait and the shared operations built on it

use ruler_fs::{NormalizedPath, io};
use ruler_meta::{Configuration, TargetOverride};

use crate::error::Result;

/// Converts a [`Configuration`] into one tool's rule file format.
///
/// Implementations differ only in which sections they emit, how each section
/// is phrased, and whether the tool caps the file length. Everything else is
/// handled by the free functions in this module.
pub trait Renderer: Send + Sync {
    /// Stable identifier used in `targets.enabled` (e.g. `"claude-md"`).
    fn target_id(&self) -> &str;

    /// Output path relative to the project root.
    fn default_output_path(&self) -> &str;

    /// One-line description shown by `dotruler list`.
    fn description(&self) -> &str;

    /// Hard limit on output length in characters, if the tool has one.
    fn max_chars(&self) -> Option<usize> {
        None
    }

    /// Render the configuration. Must be pure and deterministic.
    fn render(&self, config: &Configuration) -> String;
}

/// Output path for a renderer: the override's path when set and non-empty,
/// otherwise the renderer's default.
pub fn resolve_output_path<R: Renderer + ?Sized>(
    renderer: &R,
    target_override: Option<&TargetOverride>,
) -> String {
    target_override
        .and_then(|o| o.output_path.as_deref())
        .filter(|p| !p.is_empty())
        .unwrap_or_else(|| renderer.default_output_path())
        .to_string()
}

/// Global style rules followed by this target's extra rules.
///
/// Extra rules are appended as-is; a rule present in both lists appears twice.
pub fn collect_rules<R: Renderer + ?Sized>(renderer: &R, config: &Configuration) -> Vec<String> {
    let mut rules = config.style.rules.clone();
    if let Some(target_override) = config.override_for(renderer.target_id()) {
        rules.extend(target_override.extra_rules.iter().cloned());
    }
    rules
}

/// Keep the first `limit` characters of `content`.
///
/// This is a raw cut: it may end mid-word or mid-line, but never splits a
/// character.
pub fn truncate_chars(content: &str, limit: usize) -> String {
    match content.char_indices().nth(limit) {
        Some((byte_idx, _)) => content[..byte_idx].to_string(),
        None => content.to_string(),
    }
}

/// The exact text `write_target` would put on disk.
pub fn render_output<R: Renderer + ?Sized>(renderer: &R, config: &Configuration) -> String {
    limited_output(renderer, config).0
}

/// Rendered output cut to the target's limit, and whether a cut happened.
fn limited_output<R: Renderer + ?Sized>(renderer: &R, config: &Configuration) -> (String, bool) {
    let content = renderer.render(config);
    match renderer.max_chars() {
        Some(limit) if limit > 0 => {
            let truncated = truncate_chars(&content, limit);
            let was_cut = truncated.len() != content.len();
            (truncated, was_cut)
        }
        _ => (content, false),
    }
}

/// Render a target and write it under `base_dir`, replacing any existing file.
///
/// Returns the path that was written.
pub fn write_target<R: Renderer + ?Sized>(
    renderer: &R,
    config: &Configuration,
    base_dir: &NormalizedPath,
) -> Result<NormalizedPath> {
    let relative = resolve_output_path(renderer, config.override_for(renderer.target_id()));
    let output_path = base_dir.join(&relative);
    let (content, was_cut) = limited_output(renderer, config);
    if was_cut {
        tracing::warn!(
            target_id = renderer.target_id(),
            limit = renderer.max_chars(),
            "output exceeds the target's length limit and was truncated"
        );
    }

    io::write_text(&output_path, &content)?;

    tracing::debug!(
        target_id = renderer.target_id(),
        path = %output_path,
        chars = content.chars().count(),
        "wrote rule file"
    );
    Ok(output_path)
}
