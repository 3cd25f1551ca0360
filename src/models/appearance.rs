//! Appearance (costume/backdrop) and sound declarations.

use serde::{Deserialize, Serialize};

/// A named visual state of an actor: a Costume for a Sprite, a Backdrop for a Stage.
///
/// Labels are unique within the declaring class. The order of declarations only
/// matters for picking the appearance an actor starts with.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Appearance {
    /// Label used by scripts to switch to this appearance
    pub label: String,
    /// Reference to the image asset (path or URL, opaque to this crate)
    pub asset: String,
    /// Image width in pixels
    #[serde(default)]
    pub width: u32,
    /// Image height in pixels
    #[serde(default)]
    pub height: u32,
}

impl Appearance {
    /// Create a new appearance declaration.
    pub fn new(label: impl Into<String>, asset: impl Into<String>, width: u32, height: u32) -> Self {
        Self { label: label.into(), asset: asset.into(), width, height }
    }
}

/// A named sound an actor can trigger.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Sound {
    pub label: String,
    pub asset: String,
}

impl Sound {
    /// Create a new sound declaration.
    pub fn new(label: impl Into<String>, asset: impl Into<String>) -> Self {
        Self { label: label.into(), asset: asset.into() }
    }
}

/// Which kind of actor a class declares.
///
/// The kind fixes the word used for its appearances in messages
/// ("Costume" for sprites, "Backdrop" for the stage).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActorKind {
    /// Movable, cloneable actor
    Sprite,
    /// The always-visible backdrop holder
    Stage,
}

impl ActorKind {
    /// Singular name of this kind's appearances.
    pub fn appearance_hyponym(self) -> &'static str {
        match self {
            ActorKind::Sprite => "Costume",
            ActorKind::Stage => "Backdrop",
        }
    }
}

impl std::fmt::Display for ActorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActorKind::Sprite => write!(f, "Sprite"),
            ActorKind::Stage => write!(f, "Stage"),
        }
    }
}
