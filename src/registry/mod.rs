//! Lookup tables for actor classes.
//!
//! This module provides:
//! - `AppearanceRegistry` mapping appearance labels of one class to their declarations
//! - `InstanceList`, an in-memory ordered store of live instances per class

mod appearance;
mod instances;

// Re-export all public items from submodules
pub use appearance::AppearanceRegistry;
pub use instances::InstanceList;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{ActorId, InstanceRegistry};
    use crate::models::{ActorClass, Appearance};
    use std::sync::RwLock;

    fn alien() -> ActorClass {
        ActorClass::sprite("Alien", vec![Appearance::new("green", "alien-green.png", 24, 24)])
    }

    #[test]
    fn test_appearance_registry_new_is_empty() {
        let registry = AppearanceRegistry::new();
        assert!(registry.is_empty());
        assert!(!registry.contains("anything"));
    }

    #[test]
    fn test_appearance_registry_from_declared() {
        let registry = AppearanceRegistry::from_declared(&[
            Appearance::new("idle", "cat-idle.png", 32, 32),
            Appearance::new("walk", "cat-walk.png", 32, 40),
        ]);

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get("walk").map(|a| a.height), Some(40));
        assert!(registry.get("jump").is_none());
    }

    #[test]
    fn test_appearance_registry_first_declaration_wins() {
        let registry = AppearanceRegistry::from_declared(&[
            Appearance::new("idle", "first.png", 8, 8),
            Appearance::new("idle", "second.png", 16, 16),
        ]);

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("idle").map(|a| a.asset.as_str()), Some("first.png"));
    }

    #[test]
    fn test_instance_list_preserves_registration_order() {
        let class = alien();
        let ids = [ActorId(10), ActorId(3), ActorId(7)];
        let mut list = InstanceList::new();
        for id in ids {
            list.register(&class, id);
        }

        assert_eq!(list.registered_instances(&class), ids.to_vec());
    }

    #[test]
    fn test_instance_list_register_twice_is_noop() {
        let class = alien();
        let mut list = InstanceList::new();
        list.register(&class, ActorId(1));
        list.register(&class, ActorId(1));

        assert_eq!(list.get(&class).map(Vec::len), Some(1));
    }

    #[test]
    fn test_instance_list_unregister_keeps_original_first() {
        let class = alien();
        let mut list = InstanceList::new();
        for n in 1..=4 {
            list.register(&class, ActorId(n));
        }

        assert!(list.unregister(&class, ActorId(3)));
        assert!(!list.unregister(&class, ActorId(3)));
        assert_eq!(
            list.registered_instances(&class),
            vec![ActorId(1), ActorId(2), ActorId(4)]
        );
        assert!(!list.is_live(ActorId(3)));
    }

    #[test]
    fn test_instance_list_drops_empty_classes() {
        let class = alien();
        let mut list = InstanceList::new();
        list.register(&class, ActorId(1));
        list.unregister(&class, ActorId(1));

        assert!(!list.contains(&class));
        assert!(list.registered_instances(&class).is_empty());
    }

    #[test]
    fn test_instance_list_separates_classes_sharing_a_name() {
        let first = alien();
        let second = alien();
        let mut list = InstanceList::new();
        list.register(&first, ActorId(1));
        list.register(&second, ActorId(2));

        assert_eq!(list.len(), 2);
        assert_eq!(list.registered_instances(&first), vec![ActorId(1)]);
        assert_eq!(list.registered_instances(&second), vec![ActorId(2)]);

        assert!(!list.unregister(&second, ActorId(1)));
        assert!(list.unregister(&first, ActorId(1)));
        assert!(!list.contains(&first));
        assert!(list.contains(&second));
    }

    #[test]
    fn test_instance_list_behind_lock() {
        let class = alien();
        let shared = RwLock::new(InstanceList::new());
        shared.write().unwrap().register(&class, ActorId(5));

        let registry: &dyn InstanceRegistry = &shared;
        assert_eq!(registry.registered_instances(&class), vec![ActorId(5)]);
    }
}
