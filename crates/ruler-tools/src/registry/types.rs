//! Registry entry types

use std::fmt;

use crate::renderer::Renderer;

/// Constructs a fresh renderer instance.
pub type RendererFactory = fn() -> Box<dyn Renderer>;

/// A registered output target.
#[derive(Clone)]
pub struct TargetRegistration {
    /// Identifier used in `targets.enabled` (e.g. "claude-md")
    pub id: String,
    /// Display name (e.g. "Claude Code")
    pub name: String,
    pub factory: RendererFactory,
}

impl TargetRegistration {
    pub fn new(id: impl Into<String>, name: impl Into<String>, factory: RendererFactory) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            factory,
        }
    }

    /// Build a renderer for this target.
    pub fn create(&self) -> Box<dyn Renderer> {
        (self.factory)()
    }
}

impl fmt::Debug for TargetRegistration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TargetRegistration")
            .field("id", &self.id)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
