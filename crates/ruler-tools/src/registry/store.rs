//! Target registry storage

use std::collections::BTreeMap;

use super::TargetRegistration;
use crate::error::{Error, Result};
use crate::renderer::Renderer;

/// Lookup table from target id to registration.
///
/// Iteration and [`ids`](Self::ids) are in id order.
#[derive(Debug, Clone)]
pub struct TargetRegistry {
    targets: BTreeMap<String, TargetRegistration>,
}

impl TargetRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            targets: BTreeMap::new(),
        }
    }

    /// Create a registry holding every built-in target.
    ///
    /// A built-in whose id is already taken is logged and dropped; the
    /// first registration keeps the id.
    pub fn with_builtins() -> Self {
        Self::with_registrations(super::builtins::builtin_registrations())
    }

    /// Create a registry from `registrations`, in order, through
    /// [`register`](Self::register).
    pub fn with_registrations(registrations: impl IntoIterator<Item = TargetRegistration>) -> Self {
        let mut registry = Self::new();
        for reg in registrations {
            if let Err(e) = registry.register(reg) {
                tracing::error!(error = %e, "skipping target registration");
            }
        }
        registry
    }

    /// Add a target. Fails if the id is already taken.
    pub fn register(&mut self, reg: TargetRegistration) -> Result<()> {
        if self.targets.contains_key(&reg.id) {
            return Err(Error::DuplicateTarget { id: reg.id });
        }
        tracing::debug!(target_id = %reg.id, "registered target");
        self.targets.insert(reg.id.clone(), reg);
        Ok(())
    }

    /// Build the renderer for `id`.
    pub fn get(&self, id: &str) -> Result<Box<dyn Renderer>> {
        self.targets
            .get(id)
            .map(TargetRegistration::create)
            .ok_or_else(|| Error::UnknownTarget {
                id: id.to_string(),
                available: self.ids().into_iter().map(String::from).collect(),
            })
    }

    pub fn contains(&self, id: &str) -> bool {
        self.targets.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// All registered ids, sorted.
    pub fn ids(&self) -> Vec<&str> {
        self.targets.keys().map(String::as_str).collect()
    }

    /// A copy of the id to registration mapping.
    ///
    /// Changes to the copy do not affect the registry.
    pub fn snapshot(&self) -> BTreeMap<String, TargetRegistration> {
        self.targets.clone()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TargetRegistration> {
        self.targets.values()
    }
}

impl Default for TargetRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ClaudeRenderer;
    use crate::registry::BUILTIN_COUNT;

    fn make_reg(id: &str) -> TargetRegistration {
        TargetRegistration::new(id, id.to_uppercase(), || -> Box<dyn Renderer> {
            Box::new(ClaudeRenderer::new())
        })
    }

    #[test]
    fn test_empty_registry() {
        let registry = TargetRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn test_register_and_get() {
        let mut registry = TargetRegistry::new();
        registry.register(make_reg("test")).unwrap();

        assert!(!registry.is_empty());
        assert_eq!(registry.len(), 1);
        assert!(registry.contains("test"));
        assert!(registry.get("test").is_ok());
        assert!(!registry.contains("unknown"));
    }

    #[test]
    fn test_duplicate_register_fails() {
        let mut registry = TargetRegistry::new();
        registry.register(make_reg("test")).unwrap();

        let err = registry.register(make_reg("test")).unwrap_err();
        assert!(matches!(err, Error::DuplicateTarget { ref id } if id == "test"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_builtin_id_cannot_be_reregistered() {
        let mut registry = TargetRegistry::with_builtins();
        assert!(registry.register(make_reg("claude-md")).is_err());
    }

    #[test]
    fn test_with_registrations_keeps_first_duplicate() {
        let first = make_reg("dup");
        let second = TargetRegistration::new("dup", "Second", || -> Box<dyn Renderer> {
            Box::new(crate::AiderRenderer::new())
        });

        let registry = TargetRegistry::with_registrations([first, second, make_reg("other")]);

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get("dup").unwrap().target_id(), "claude-md");
        let names: Vec<_> = registry.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["DUP", "OTHER"]);
    }

    #[test]
    fn test_ids_sorted() {
        let mut registry = TargetRegistry::new();
        registry.register(make_reg("zed")).unwrap();
        registry.register(make_reg("aider")).unwrap();
        registry.register(make_reg("claude")).unwrap();

        assert_eq!(registry.ids(), vec!["aider", "claude", "zed"]);
    }

    #[test]
    fn test_unknown_target_lists_available() {
        let registry = TargetRegistry::with_builtins();
        let err = registry.get("nonexistent").err().unwrap();

        assert_eq!(
            err.to_string(),
            "Unknown target 'nonexistent'. Available: aider, claude-md, codex, copilot, cursorrules, windsurf"
        );
    }

    #[test]
    fn test_snapshot_is_independent() {
        let registry = TargetRegistry::with_builtins();
        let mut copy = registry.snapshot();
        copy.remove("claude-md");

        assert_eq!(copy.len(), BUILTIN_COUNT - 1);
        assert!(registry.contains("claude-md"));
    }

    #[test]
    fn test_with_builtins() {
        let registry = TargetRegistry::with_builtins();
        assert_eq!(registry.len(), BUILTIN_COUNT);
        for id in ["claude-md", "cursorrules", "copilot", "windsurf", "codex", "aider"] {
            assert!(registry.contains(id), "missing {id}");
        }
    }

    #[test]
    fn test_iter_in_id_order() {
        let registry = TargetRegistry::with_builtins();
        let ids: Vec<_> = registry.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, registry.ids());
    }
}
