//! In-memory instance registry.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use crate::engine::{ActorId, InstanceRegistry};
use crate::models::{ActorClass, ClassId};

/// Live instances per class, in registration order.
///
/// Entries are keyed by [`ClassId`], so classes that happen to share a name
/// keep separate lists.
///
/// Hosts that share the list with actors wrap it in a `RwLock`, which
/// implements [`InstanceRegistry`].
#[derive(Debug, Clone, Default)]
pub struct InstanceList {
    instances: HashMap<ClassId, Vec<ActorId>>,
}

impl InstanceList {
    /// Create a new empty instance list.
    pub fn new() -> Self {
        Self { instances: HashMap::new() }
    }

    /// Append an instance to its class's list.
    ///
    /// Registering the same instance twice is a no-op.
    pub fn register(&mut self, class: &ActorClass, id: ActorId) {
        let list = self.instances.entry(class.id()).or_default();
        if !list.contains(&id) {
            list.push(id);
        }
    }

    /// Remove an instance. Returns whether it was registered.
    pub fn unregister(&mut self, class: &ActorClass, id: ActorId) -> bool {
        let Some(list) = self.instances.get_mut(&class.id()) else {
            return false;
        };
        let before = list.len();
        list.retain(|existing| *existing != id);
        let removed = list.len() != before;
        if list.is_empty() {
            self.instances.remove(&class.id());
        }
        removed
    }

    /// Instances of `class`, in registration order.
    pub fn get(&self, class: &ActorClass) -> Option<&Vec<ActorId>> {
        self.instances.get(&class.id())
    }

    /// Check if any instance of `class` is registered.
    pub fn contains(&self, class: &ActorClass) -> bool {
        self.instances.contains_key(&class.id())
    }

    /// Check if `id` is registered under any class.
    pub fn is_live(&self, id: ActorId) -> bool {
        self.instances.values().any(|list| list.contains(&id))
    }

    /// Number of classes with live instances.
    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}

impl InstanceRegistry for InstanceList {
    fn registered_instances(&self, class: &ActorClass) -> Vec<ActorId> {
        self.get(class).cloned().unwrap_or_default()
    }
}

impl InstanceRegistry for RwLock<InstanceList> {
    fn registered_instances(&self, class: &ActorClass) -> Vec<ActorId> {
        self.read().unwrap_or_else(PoisonError::into_inner).registered_instances(class)
    }
}
