//! Actor class declarations.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;

use crate::registry::AppearanceRegistry;

use super::appearance::{ActorKind, Appearance, Sound};

static NEXT_CLASS_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique identity of a class declaration.
///
/// Two declarations with the same name are still different classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClassId(u64);

impl ClassId {
    fn next() -> Self {
        Self(NEXT_CLASS_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for ClassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "class#{}", self.0)
    }
}

/// An immutable declaration of an actor class.
///
/// This is what a script author writes when defining `class Cat(Sprite)`:
/// a name, an ordered list of appearances, and an ordered list of sounds.
/// Every instance of the class shares one declaration through an `Arc`.
///
/// The label lookup used to validate appearance switches is derived from the
/// declared list the first time it is needed and cached on the class.
#[derive(Debug)]
pub struct ActorClass {
    id: ClassId,
    name: String,
    kind: ActorKind,
    appearances: Vec<Appearance>,
    sounds: Vec<Sound>,
    appearance_names: OnceLock<AppearanceRegistry>,
}

impl ActorClass {
    /// Declare a sprite class with the given costumes.
    pub fn sprite(name: impl Into<String>, costumes: Vec<Appearance>) -> Self {
        Self::new(name, ActorKind::Sprite, costumes)
    }

    /// Declare a stage class with the given backdrops.
    pub fn stage(name: impl Into<String>, backdrops: Vec<Appearance>) -> Self {
        Self::new(name, ActorKind::Stage, backdrops)
    }

    fn new(name: impl Into<String>, kind: ActorKind, appearances: Vec<Appearance>) -> Self {
        Self {
            id: ClassId::next(),
            name: name.into(),
            kind,
            appearances,
            sounds: Vec::new(),
            appearance_names: OnceLock::new(),
        }
    }

    /// Attach sound declarations to this class.
    pub fn with_sounds(mut self, sounds: Vec<Sound>) -> Self {
        self.sounds = sounds;
        self
    }

    /// The costume a sprite class gets when it declares none explicitly.
    pub fn default_costume() -> Appearance {
        Appearance::new("question-mark", "library/images/question-mark.png", 16, 16)
    }

    /// The backdrop a stage class gets when it declares none explicitly.
    pub fn default_backdrop() -> Appearance {
        Appearance::new("solid-white", "library/images/stage/solid-white.png", 480, 360)
    }

    pub fn id(&self) -> ClassId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ActorKind {
        self.kind
    }

    /// Declared appearances, in declaration order.
    pub fn appearances(&self) -> &[Appearance] {
        &self.appearances
    }

    /// Declared sounds, in declaration order.
    pub fn sounds(&self) -> &[Sound] {
        &self.sounds
    }

    /// "Costume" or "Backdrop", depending on the class kind.
    pub fn appearance_hyponym(&self) -> &'static str {
        self.kind.appearance_hyponym()
    }

    /// The appearance an instance starts with, if any.
    pub fn first_appearance(&self) -> Option<&Appearance> {
        self.appearances.first()
    }

    /// Build the label lookup for this class if it has not been built yet.
    ///
    /// Subsequent calls return the cached lookup.
    pub fn ensure_have_appearance_names(&self) -> &AppearanceRegistry {
        self.appearance_names.get_or_init(|| {
            tracing::trace!(class = %self.name, "building appearance names");
            AppearanceRegistry::from_declared(&self.appearances)
        })
    }

    /// Check whether `label` names one of this class's appearances.
    pub fn has_appearance(&self, label: &str) -> bool {
        self.ensure_have_appearance_names().contains(label)
    }

    /// Look up a declared sound by label.
    pub fn sound(&self, label: &str) -> Option<&Sound> {
        self.sounds.iter().find(|s| s.label == label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cat() -> ActorClass {
        ActorClass::sprite(
            "Cat",
            vec![
                Appearance::new("idle", "cat-idle.png", 32, 32),
                Appearance::new("walk", "cat-walk.png", 32, 40),
            ],
        )
    }

    #[test]
    fn test_names_built_lazily_and_cached() {
        let class = cat();
        assert!(class.appearance_names.get().is_none());

        let first = class.ensure_have_appearance_names() as *const AppearanceRegistry;
        let second = class.ensure_have_appearance_names() as *const AppearanceRegistry;
        assert_eq!(first, second);
        assert_eq!(class.ensure_have_appearance_names().len(), 2);
    }

    #[test]
    fn test_has_appearance() {
        let class = cat();
        assert!(class.has_appearance("idle"));
        assert!(class.has_appearance("walk"));
        assert!(!class.has_appearance("jump"));
    }

    #[test]
    fn test_hyponym_follows_kind() {
        assert_eq!(cat().appearance_hyponym(), "Costume");
        let stage = ActorClass::stage("Space", vec![ActorClass::default_backdrop()]);
        assert_eq!(stage.appearance_hyponym(), "Backdrop");
        assert_eq!(stage.kind(), ActorKind::Stage);
    }

    #[test]
    fn test_first_appearance() {
        assert_eq!(cat().first_appearance().map(|a| a.label.as_str()), Some("idle"));
        assert!(ActorClass::sprite("Ghost", vec![]).first_appearance().is_none());
    }

    #[test]
    fn test_sound_lookup() {
        let class = cat().with_sounds(vec![Sound::new("meow", "meow.mp3")]);
        assert_eq!(class.sound("meow").map(|s| s.asset.as_str()), Some("meow.mp3"));
        assert!(class.sound("bark").is_none());
    }

    #[test]
    fn test_same_name_declarations_are_distinct_classes() {
        let first = cat();
        let second = cat();
        assert_eq!(first.name(), second.name());
        assert_ne!(first.id(), second.id());

        let id = first.id();
        assert_eq!(first.with_sounds(vec![Sound::new("meow", "meow.mp3")]).id(), id);
    }

    #[test]
    fn test_default_declarations() {
        let costume = ActorClass::default_costume();
        assert_eq!(costume.label, "question-mark");
        assert_eq!((costume.width, costume.height), (16, 16));
        assert_eq!(ActorClass::default_backdrop().label, "solid-white");
    }
}
