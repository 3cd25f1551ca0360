//! Errors raised by actor operations.

use thiserror::Error;

use crate::models::ActorKind;

/// Error from an actor operation.
///
/// All variants are authoring errors in the script: they are reported to the
/// caller and never retried.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ActorError {
    /// Appearance label not declared by the actor's class
    #[error("could not find {kind} \"{name}\" in class \"{class}\"")]
    InvalidAppearance { kind: &'static str, name: String, class: String },
    /// `show()` on a sprite whose class declares no costumes
    #[error("cannot show Sprite \"{class}\" with no Costumes")]
    CannotShow { class: String },
    /// Stage class declares no backdrops
    #[error("no Backdrops in Stage \"{class}\"")]
    EmptyBackdropSet { class: String },
    /// Class declaration used for the wrong kind of actor
    #[error("class \"{class}\" is declared as a {actual}, not a {expected}")]
    WrongKind { class: String, expected: ActorKind, actual: ActorKind },
    /// Sound label not declared by the actor's class
    #[error("could not find Sound \"{name}\" in class \"{class}\"")]
    UnknownSound { name: String, class: String },
}
