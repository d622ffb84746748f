//! GitHub Copilot renderer.
//!
//! Produces `.github/copilot-instructions.md`, the repository-wide custom
//! instructions file picked up by Copilot Chat and the coding agent.

use ruler_meta::Configuration;

use crate::renderer::{Renderer, collect_rules};
use crate::sections::{bullets, finish, sentence, stack_lines, titled_command_lines};

#[derive(Debug, Default)]
pub struct CopilotRenderer;

impl CopilotRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for CopilotRenderer {
    fn target_id(&self) -> &str {
        "copilot"
    }

    fn default_output_path(&self) -> &str {
        ".github/copilot-instructions.md"
    }

    fn description(&self) -> &str {
        "GitHub Copilot repository instructions"
    }

    fn render(&self, config: &Configuration) -> String {
        let mut sections = Vec::new();
        let project = &config.project;

        let mut intro = Vec::new();
        if !project.name.is_empty() {
            intro.push(format!("This repository contains **{}**.", project.name));
        }
        if !project.description.is_empty() {
            intro.push(sentence(&project.description));
        }
        if !intro.is_empty() {
            sections.push(format!("# Copilot Instructions\n\n{}", intro.join(" ")));
        }

        let stack = stack_lines(project);
        if !stack.is_empty() {
            sections.push(format!("## Tech Stack\n\n{}", bullets(&stack)));
        }

        let rules = collect_rules(self, config);
        if !rules.is_empty() {
            sections.push(format!("## Coding Guidelines\n\n{}", bullets(&rules)));
        }

        let commands = titled_command_lines(&config.commands);
        if !commands.is_empty() {
            sections.push(format!("## Commands\n\n{}", bullets(&commands)));
        }

        if !config.architecture.notes.is_empty() {
            sections.push(format!(
                "## Project Structure\n\n{}",
                bullets(&config.architecture.notes)
            ));
        }

        finish(sections)
    }
}
