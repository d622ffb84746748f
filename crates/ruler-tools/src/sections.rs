//! Formatting helpers shared by the built-in renderers

use ruler_meta::{CommandSet, ProjectInfo};

/// `- item` lines joined by newlines.
pub(crate) fn bullets<S: AsRef<str>>(items: &[S]) -> String {
    items
        .iter()
        .map(|item| format!("- {}", item.as_ref()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// `Languages: ...` and `Frameworks: ...` lines for the non-empty lists.
pub(crate) fn stack_lines(project: &ProjectInfo) -> Vec<String> {
    let mut lines = Vec::new();
    if !project.languages.is_empty() {
        lines.push(format!("Languages: {}", project.languages.join(", ")));
    }
    if !project.frameworks.is_empty() {
        lines.push(format!("Frameworks: {}", project.frameworks.join(", ")));
    }
    lines
}

/// One `name: command` line per set command, with the command in backticks.
pub(crate) fn command_lines(commands: &CommandSet) -> Vec<String> {
    commands
        .entries()
        .into_iter()
        .map(|(name, cmd)| format!("{name}: `{cmd}`"))
        .collect()
}

/// Like [`command_lines`] with the command name capitalized.
pub(crate) fn titled_command_lines(commands: &CommandSet) -> Vec<String> {
    commands
        .entries()
        .into_iter()
        .map(|(name, cmd)| format!("{}: `{cmd}`", capitalize(name)))
        .collect()
}

/// Blank-line-separated sections with a single trailing newline.
pub(crate) fn finish(sections: Vec<String>) -> String {
    let mut out = sections.join("\n\n");
    out.push('\n');
    out
}

/// Ensures prose ends with sentence punctuation.
pub(crate) fn sentence(text: &str) -> String {
    if text.ends_with(['.', '!', '?']) {
        text.to_string()
    } else {
        format!("{text}.")
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
