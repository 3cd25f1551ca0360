//! Per-class appearance label lookup.

use std::collections::HashMap;

use crate::models::Appearance;

/// Lookup from appearance label to its declaration.
///
/// Built once per actor class from the declared appearance list. If a label is
/// declared more than once, the first declaration wins.
///
/// ```
/// use stagehand::models::Appearance;
/// use stagehand::registry::AppearanceRegistry;
///
/// let registry = AppearanceRegistry::from_declared(&[
///     Appearance::new("idle", "cat-idle.png", 32, 32),
///     Appearance::new("walk", "cat-walk.png", 32, 32),
/// ]);
///
/// assert!(registry.contains("idle"));
/// assert_eq!(registry.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct AppearanceRegistry {
    appearances: HashMap<String, Appearance>,
}

impl AppearanceRegistry {
    /// Create a new empty appearance registry.
    pub fn new() -> Self {
        Self { appearances: HashMap::new() }
    }

    /// Build the lookup from a declared appearance list.
    pub fn from_declared(declared: &[Appearance]) -> Self {
        let mut registry = Self::new();
        for appearance in declared {
            registry.register(appearance.clone());
        }
        registry
    }

    /// Register an appearance, keeping any existing entry with the same label.
    pub fn register(&mut self, appearance: Appearance) {
        self.appearances.entry(appearance.label.clone()).or_insert(appearance);
    }

    /// Get an appearance by label.
    pub fn get(&self, label: &str) -> Option<&Appearance> {
        self.appearances.get(label)
    }

    /// Check if an appearance with the given label exists.
    pub fn contains(&self, label: &str) -> bool {
        self.appearances.contains_key(label)
    }

    /// Get the number of distinct labels.
    pub fn len(&self) -> usize {
        self.appearances.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.appearances.is_empty()
    }
}
