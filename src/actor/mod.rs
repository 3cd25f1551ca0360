//! Actors: the sprites and the stage that scripts manipulate.
//!
//! Both kinds share the appearance capability through an embedded
//! [`AppearanceHolder`] and the [`Actor`] trait. Movement, layering, touching
//! and cloning exist only on [`Sprite`].

mod error;
mod sprite;
mod stage;

use std::sync::Arc;

use crate::engine::{ActorId, Engine};
use crate::models::{ActorClass, ActorKind, Appearance};

pub use error::ActorError;
pub use sprite::Sprite;
pub use stage::Stage;

/// The currently selected appearance of an actor, validated against its class.
#[derive(Debug, Clone)]
pub struct AppearanceHolder {
    class: Arc<ActorClass>,
    appearance: Option<String>,
}

impl AppearanceHolder {
    /// A holder with no appearance selected.
    fn unset(class: Arc<ActorClass>) -> Self {
        Self { class, appearance: None }
    }

    pub fn class(&self) -> &Arc<ActorClass> {
        &self.class
    }

    /// Label of the current appearance.
    pub fn appearance(&self) -> Option<&str> {
        self.appearance.as_deref()
    }

    /// Declaration of the current appearance.
    pub fn current(&self) -> Option<&Appearance> {
        let label = self.appearance.as_deref()?;
        self.class.ensure_have_appearance_names().get(label)
    }

    /// Select the appearance labelled `name`.
    ///
    /// Leaves the current appearance untouched on error.
    pub fn switch_appearance(&mut self, name: &str) -> Result<(), ActorError> {
        if !self.class.has_appearance(name) {
            tracing::warn!(class = %self.class.name(), appearance = name, "unknown appearance");
            return Err(ActorError::InvalidAppearance {
                kind: self.class.appearance_hyponym(),
                name: name.to_string(),
                class: self.class.name().to_string(),
            });
        }

        tracing::debug!(class = %self.class.name(), appearance = name, "switch appearance");
        self.appearance = Some(name.to_string());
        Ok(())
    }
}

/// Behaviour shared by sprites and the stage.
pub trait Actor {
    /// Identity used when talking to collaborators.
    fn id(&self) -> ActorId;

    fn appearance_holder(&self) -> &AppearanceHolder;

    fn appearance_holder_mut(&mut self) -> &mut AppearanceHolder;

    fn engine(&self) -> &Engine;

    fn class(&self) -> &ActorClass {
        self.appearance_holder().class()
    }

    /// Label of the current costume or backdrop.
    fn appearance(&self) -> Option<&str> {
        self.appearance_holder().appearance()
    }

    fn switch_appearance(&mut self, name: &str) -> Result<(), ActorError> {
        self.appearance_holder_mut().switch_appearance(name)
    }

    /// Start a sound and carry on without waiting for it.
    fn start_sound(&self, sound_name: &str) -> Result<(), ActorError> {
        play_sound(self, sound_name, false)
    }

    /// Play a sound and return once it has finished.
    fn play_sound_until_done(&self, sound_name: &str) -> Result<(), ActorError> {
        play_sound(self, sound_name, true)
    }
}

fn play_sound<A: Actor + ?Sized>(
    actor: &A,
    sound_name: &str,
    wait_until_done: bool,
) -> Result<(), ActorError> {
    let class = actor.class();
    if class.sound(sound_name).is_none() {
        tracing::warn!(actor = %actor.id(), class = %class.name(), sound = sound_name, "unknown sound");
        return Err(ActorError::UnknownSound {
            name: sound_name.to_string(),
            class: class.name().to_string(),
        });
    }

    tracing::debug!(actor = %actor.id(), sound = sound_name, wait_until_done, "play sound");
    actor.engine().sounds().play_sound(actor.id(), class, sound_name, wait_until_done);
    Ok(())
}

fn check_kind(class: &ActorClass, expected: ActorKind) -> Result<(), ActorError> {
    if class.kind() == expected {
        Ok(())
    } else {
        Err(ActorError::WrongKind {
            class: class.name().to_string(),
            expected,
            actual: class.kind(),
        })
    }
}
