//! Windsurf renderer.
//!
//! Windsurf reads `.windsurfrules` as a flat rules file and ignores anything
//! past its character budget, so output is capped at
//! [`WINDSURF_CHAR_LIMIT`].

use ruler_meta::Configuration;

use crate::renderer::{Renderer, collect_rules};
use crate::sections::{bullets, command_lines, finish, stack_lines};

/// Maximum characters Windsurf reads from a workspace rules file.
pub const WINDSURF_CHAR_LIMIT: usize = 12_000;

#[derive(Debug, Default)]
pub struct WindsurfRenderer;

impl WindsurfRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for WindsurfRenderer {
    fn target_id(&self) -> &str {
        "windsurf"
    }

    fn default_output_path(&self) -> &str {
        ".windsurfrules"
    }

    fn description(&self) -> &str {
        "Windsurf workspace rules"
    }

    fn max_chars(&self) -> Option<usize> {
        Some(WINDSURF_CHAR_LIMIT)
    }

    fn render(&self, config: &Configuration) -> String {
        let mut sections = Vec::new();
        let project = &config.project;

        match (project.name.is_empty(), project.description.is_empty()) {
            (false, false) => {
                sections.push(format!("Project: {} - {}", project.name, project.description))
            }
            (false, true) => sections.push(format!("Project: {}", project.name)),
            (true, false) => sections.push(format!("Project: {}", project.description)),
            (true, true) => {}
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
