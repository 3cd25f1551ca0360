//! Data models for actor classes (appearances, sounds, class declarations)

mod appearance;
mod class;

// Re-export all public types
pub use appearance::{ActorKind, Appearance, Sound};
pub use class::{ActorClass, ClassId};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_appearance_toml_defaults_dimensions() {
        let appearance: Appearance =
            toml::from_str("label = \"idle\"\nasset = \"cat-idle.png\"\n").unwrap();
        assert_eq!(appearance.label, "idle");
        assert_eq!(appearance.width, 0);
        assert_eq!(appearance.height, 0);
    }

    #[test]
    fn test_actor_kind_serialization() {
        assert_eq!(serde_json::to_string(&ActorKind::Sprite).unwrap(), "\"sprite\"");
        let kind: ActorKind = serde_json::from_str("\"stage\"").unwrap();
        assert_eq!(kind, ActorKind::Stage);
    }

    #[test]
    fn test_actor_kind_display() {
        assert_eq!(ActorKind::Sprite.to_string(), "Sprite");
        assert_eq!(ActorKind::Stage.to_string(), "Stage");
    }
}
