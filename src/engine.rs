//! Collaborator interfaces the actor core calls into.
//!
//! The actor types own only their local state. Everything that needs a view
//! of the whole project is reached through these traits:
//! - [`InstanceRegistry`] answers "which instances of this class are live"
//! - [`ParentProject`] handles touching tests, (un)registration and draw layers
//! - [`SoundPlayer`] starts sound playback
//!
//! An [`Engine`] bundles one handle to each and is injected into every actor.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::actor::Sprite;
use crate::models::ActorClass;

static NEXT_ACTOR_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique identity of a live actor instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ActorId(pub u64);

impl ActorId {
    /// Allocate a fresh identity.
    pub fn next() -> Self {
        Self(NEXT_ACTOR_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "actor#{}", self.0)
    }
}

/// A request to move an actor within its draw-layer group.
///
/// Interpretation and clamping of the amount belong to the parent project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "mode", content = "amount", rename_all = "lowercase")]
pub enum LayerMove {
    /// Move to a fixed index; `0` is the back, `-1` the front
    Absolute(i64),
    /// Shift by this many layers; positive is toward the front
    Relative(i64),
}

impl LayerMove {
    /// Move to the topmost layer.
    pub const FRONT: LayerMove = LayerMove::Absolute(-1);
    /// Move to the bottom layer.
    pub const BACK: LayerMove = LayerMove::Absolute(0);

    pub fn mode(&self) -> &'static str {
        match self {
            LayerMove::Absolute(_) => "absolute",
            LayerMove::Relative(_) => "relative",
        }
    }

    pub fn amount(&self) -> i64 {
        match self {
            LayerMove::Absolute(n) | LayerMove::Relative(n) => *n,
        }
    }
}

/// Ordered store of live instances per class.
pub trait InstanceRegistry: Send + Sync {
    /// All live instances of `class`, in registration order.
    ///
    /// The first element is the original; the rest are clones.
    fn registered_instances(&self, class: &ActorClass) -> Vec<ActorId>;
}

/// The project that coordinates cross-actor concerns on behalf of a sprite.
pub trait ParentProject: Send + Sync {
    /// Whether `instance` overlaps any live instance of `target`.
    fn instance_is_touching_any_of(&self, instance: &Sprite, target: &ActorClass) -> bool;

    /// Add a newly created clone to the project.
    fn register_actor_instance(&self, instance: &Sprite);

    /// Remove `instance` from the project. It no longer appears in registry queries.
    fn unregister_actor_instance(&self, instance: &Sprite);

    /// Reposition `instance` in the draw order.
    fn move_within_draw_layer_group(&self, instance: &Sprite, movement: LayerMove);
}

/// Sound playback device access.
pub trait SoundPlayer: Send + Sync {
    /// Start playing `sound_name` for `actor`.
    ///
    /// When `wait_until_done` is true the call returns only once playback has
    /// finished; otherwise it returns as soon as playback has started.
    fn play_sound(&self, actor: ActorId, class: &ActorClass, sound_name: &str, wait_until_done: bool);
}

/// Handles to the collaborators an actor delegates to.
///
/// Cloning an engine clones the handles, not the collaborators.
#[derive(Clone)]
pub struct Engine {
    project: Arc<dyn ParentProject>,
    instances: Arc<dyn InstanceRegistry>,
    sounds: Arc<dyn SoundPlayer>,
}

impl Engine {
    pub fn new(
        project: Arc<dyn ParentProject>,
        instances: Arc<dyn InstanceRegistry>,
        sounds: Arc<dyn SoundPlayer>,
    ) -> Self {
        Self { project, instances, sounds }
    }

    pub fn project(&self) -> &dyn ParentProject {
        self.project.as_ref()
    }

    pub fn instances(&self) -> &dyn InstanceRegistry {
        self.instances.as_ref()
    }

    pub fn sounds(&self) -> &dyn SoundPlayer {
        self.sounds.as_ref()
    }
}

impl fmt::Debug for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Engine").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_actor_ids_are_unique() {
        let a = ActorId::next();
        let b = ActorId::next();
        assert_ne!(a, b);
        assert!(b > a);
    }

    #[test]
    fn test_layer_move_constants() {
        assert_eq!(LayerMove::FRONT.mode(), "absolute");
        assert_eq!(LayerMove::FRONT.amount(), -1);
        assert_eq!(LayerMove::BACK.amount(), 0);
        assert_eq!(LayerMove::Relative(3).mode(), "relative");
    }

    #[test]
    fn test_layer_move_serialization() {
        let json = serde_json::to_string(&LayerMove::Relative(-2)).unwrap();
        assert_eq!(json, r#"{"mode":"relative","amount":-2}"#);
    }
}
