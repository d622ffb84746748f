//! Cursor renderer.
//!
//! Produces the legacy single-file `.cursorrules` format, which Cursor reads
//! as plain prose.

use ruler_meta::Configuration;

use crate::renderer::{Renderer, collect_rules};
use crate::sections::{bullets, command_lines, finish, sentence, stack_lines};

/// Renders `.cursorrules` as prose followed by `Label:` lists.
#[derive(Debug, Default)]
pub struct CursorRulesRenderer;

impl CursorRulesRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for CursorRulesRenderer {
    fn target_id(&self) -> &str {
        "cursorrules"
    }

    fn default_output_path(&self) -> &str {
        ".cursorrules"
    }

    fn description(&self) -> &str {
        "Cursor AI project rules"
    }

    fn render(&self, config: &Configuration) -> String {
        let mut sections = Vec::new();
        let project = &config.project;

        let mut context = Vec::new();
        if !project.name.is_empty() {
            context.push(format!("You are working on {}.", project.name));
        }
        if !project.description.is_empty() {
            context.push(sentence(&project.description));
        }
        if !context.is_empty() {
            sections.push(context.join(" "));
        }

        let stack = stack_lines(project);
        if !stack.is_empty() {
            sections.push(format!("Tech Stack:\n{}", bullets(&stack)));
        }

        let rules = collect_rules(self, config);
        if !rules.is_empty() {
            sections.push(format!("Code Style:\n{}", bullets(&rules)));
        }

        let commands = command_lines(&config.commands);
        if !commands.is_empty() {
            sections.push(format!("Commands:\n{}", bullets(&commands)));
        }

        if !config.architecture.notes.is_empty() {
            sections.push(format!(
                "Architecture:\n{}",
                bullets(&config.architecture.notes)
            ));
        }

        finish(sections)
    }
}
