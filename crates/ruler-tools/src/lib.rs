//! Output renderers for dotruler.
//!
//! Each supported AI coding tool gets a [`Renderer`] that turns the shared
//! [`Configuration`](ruler_meta::Configuration) into that tool's rule file.
//! Renderers only produce text; path resolution, rule collection,
//! truncation and writing are free functions in [`renderer`] that work over
//! any renderer.
//!
//! The [`TargetRegistry`] maps target identifiers to renderer factories. It
//! is built explicitly with [`TargetRegistry::with_builtins`], so adding a
//! target means adding a module and one entry in
//! [`registry::builtin_registrations`].

pub mod aider;
pub mod claude;
pub mod codex;
pub mod copilot;
pub mod cursor;
pub mod error;
pub mod registry;
pub mod renderer;
mod sections;
pub mod windsurf;

pub use aider::AiderRenderer;
pub use claude::ClaudeRenderer;
pub use codex::CodexRenderer;
pub use copilot::CopilotRenderer;
pub use cursor::CursorRulesRenderer;
pub use error::{Error, Result};
pub use registry::{BUILTIN_COUNT, RendererFactory, TargetRegistration, TargetRegistry};
pub use renderer::{
    Renderer, collect_rules, render_output, resolve_output_path, truncate_chars, write_target,
};
pub use windsurf::WindsurfRenderer;
