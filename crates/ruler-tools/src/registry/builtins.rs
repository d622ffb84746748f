//! Built-in target registrations
//!
//! Every renderer shipped with dotruler is listed here and nowhere else.

use super::TargetRegistration;
use crate::renderer::Renderer;
use crate::{
    AiderRenderer, ClaudeRenderer, CodexRenderer, CopilotRenderer, CursorRulesRenderer,
    WindsurfRenderer,
};

/// Number of built-in targets.
pub const BUILTIN_COUNT: usize = 6;

/// Returns all built-in target registrations in display order.
pub fn builtin_registrations() -> Vec<TargetRegistration> {
    vec![
        TargetRegistration::new("claude-md", "Claude Code", || -> Box<dyn Renderer> {
            Box::new(ClaudeRenderer::new())
        }),
        TargetRegistration::new("cursorrules", "Cursor", || -> Box<dyn Renderer> {
            Box::new(CursorRulesRenderer::new())
        }),
        TargetRegistration::new("copilot", "GitHub Copilot", || -> Box<dyn Renderer> {
            Box::new(CopilotRenderer::new())
        }),
        TargetRegistration::new("windsurf", "Windsurf", || -> Box<dyn Renderer> {
            Box::new(WindsurfRenderer::new())
        }),
        TargetRegistration::new("codex", "OpenAI Codex", || -> Box<dyn Renderer> {
            Box::new(CodexRenderer::new())
        }),
        TargetRegistration::new("aider", "Aider", || -> Box<dyn Renderer> {
            Box::new(AiderRenderer::new())
        }),
    ]
}
