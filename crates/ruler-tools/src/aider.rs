//! Aider renderer.
//!
//! Produces `CONVENTIONS.md`, which aider loads with `--read CONVENTIONS.md`
//! or a `read:` entry in `.aider.conf.yml`.

use ruler_meta::Configuration;

use crate::renderer::{Renderer, collect_rules};
use crate::sections::{bullets, command_lines, finish, stack_lines};

#[derive(Debug, Default)]
pub struct AiderRenderer;

impl AiderRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for AiderRenderer {
    fn target_id(&self) -> &str {
        "aider"
    }

    fn default_output_path(&self) -> &str {
        "CONVENTIONS.md"
    }

    fn description(&self) -> &str {
        "Aider coding conventions"
    }

    fn render(&self, config: &Configuration) -> String {
        let mut sections = Vec::new();
        let project = &config.project;

        // The description only appears under the heading.
        if !project.name.is_empty() {
            let mut header = format!("# {} Conventions", project.name);
            if !project.description.is_empty() {
                header.push_str("\n\n");
                header.push_str(&project.description);
            }
            sections.push(header);
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
