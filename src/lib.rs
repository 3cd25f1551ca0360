//! Stagehand - actor model for Scratch-like visual programming projects
//!
//! This library provides:
//! - Actor class declarations with ordered costumes/backdrops and sounds
//! - `Sprite` instances with position, size, visibility and appearance switching
//! - The `Stage`, an always-visible actor that must have at least one backdrop
//! - Collaborator traits for instance tracking, layering, touching and sound playback
//! - Project manifests (`stagehand.toml`) declaring the classes of a project

pub mod actor;
pub mod cli;
pub mod config;
pub mod engine;
pub mod models;
pub mod registry;

pub use actor::{Actor, ActorError, Sprite, Stage};
pub use engine::{ActorId, Engine, LayerMove};
pub use models::{ActorClass, ActorKind, Appearance, ClassId, Sound};
