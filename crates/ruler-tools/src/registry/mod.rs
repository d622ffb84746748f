//! Target registry
//!
//! Maps target identifiers to renderer factories. The registry is built once
//! at startup and only read afterwards.

mod builtins;
mod store;
mod types;

pub use builtins::{BUILTIN_COUNT, builtin_registrations};
pub use store::TargetRegistry;
pub use types::{RendererFactory, TargetRegistration};
