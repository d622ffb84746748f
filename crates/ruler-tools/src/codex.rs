//! OpenAI Codex renderer.
//!
//! Produces `AGENTS.md`. Codex concatenates every `AGENTS.md` it finds and
//! stops reading after its project doc budget, so output is capped at
//! [`CODEX_CHAR_LIMIT`].

use ruler_meta::Configuration;

use crate::renderer::{Renderer, collect_rules};
use crate::sections::{bullets, finish, stack_lines, titled_command_lines};

/// Default project doc budget for Codex (32 KiB).
pub const CODEX_CHAR_LIMIT: usize = 32_768;

#[derive(Debug, Default)]
pub struct CodexRenderer;

impl CodexRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for CodexRenderer {
    fn target_id(&self) -> &str {
        "codex"
    }

    fn default_output_path(&self) -> &str {
        "AGENTS.md"
    }

    fn description(&self) -> &str {
        "OpenAI Codex agent instructions"
    }

    fn max_chars(&self) -> Option<usize> {
        Some(CODEX_CHAR_LIMIT)
    }

    fn render(&self, config: &Configuration) -> String {
        let mut sections = Vec::new();
        let project = &config.project;

        let mut context = Vec::new();
        if !project.name.is_empty() {
            context.push(format!("# {}", project.name));
        }
        if !project.description.is_empty() {
            context.push(project.description.clone());
        }
        if !context.is_empty() {
            sections.push(context.join("\n\n"));
        }

        let stack = stack_lines(project);
        if !stack.is_empty() {
            sections.push(format!("## Stack\n\n{}", bullets(&stack)));
        }

        let rules = collect_rules(self, config);
        if !rules.is_empty() {
            sections.push(format!("## Conventions\n\n{}", bullets(&rules)));
        }

        let commands = titled_command_lines(&config.commands);
        if !commands.is_empty() {
            sections.push(format!("## Commands\n\n{}", bullets(&commands)));
        }

        if !config.architecture.notes.is_empty() {
            sections.push(format!(
                "## Architecture Notes\n\n{}",
                bullets(&config.architecture.notes)
            ));
        }

        finish(sections)
    }
}
