//! Claude Code renderer.
//!
//! Produces `CLAUDE.md`, the project memory file Claude Code loads at the
//! start of every session.

use ruler_meta::Configuration;

use crate::renderer::{Renderer, collect_rules};
use crate::sections::{bullets, command_lines, finish, stack_lines};

/// Renders `CLAUDE.md` as Markdown with `##` sections.
#[derive(Debug, Default)]
pub struct ClaudeRenderer;

impl ClaudeRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for ClaudeRenderer {
    fn target_id(&self) -> &str {
        "claude-md"
    }

    fn default_output_path(&self) -> &str {
        "CLAUDE.md"
    }

    fn description(&self) -> &str {
        "Claude Code project memory"
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
            sections.push(format!("## Tech Stack\n\n{}", bullets(&stack)));
        }

        let rules = collect_rules(self, config);
        if !rules.is_empty() {
            sections.push(format!("## Code Style\n\n{}", bullets(&rules)));
        }

        let commands = command_lines(&config.commands);
        if !commands.is_empty() {
            sections.push(format!("## Commands\n\n{}", bullets(&commands)));
        }

        if !config.architecture.notes.is_empty() {
            sections.push(format!(
                "## Architecture\n\n{}",
                bullets(&config.architecture.notes)
            ));
        }

        finish(sections)
    }
}
