//! Manifest schema types for `stagehand.toml`
//!
//! A manifest declares the stage class and the sprite classes of a project.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;

use crate::models::{ActorClass, Appearance, Sound};

/// Project metadata section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Project name (required)
    pub name: String,
    /// Project version
    #[serde(default = "default_version")]
    pub version: String,
}

fn default_version() -> String {
    "0.1.0".to_string()
}

/// Stage class declaration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageConfig {
    /// Class name
    #[serde(default = "default_stage_name")]
    pub name: String,
    /// Backdrops; omitted means the default solid-white backdrop
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub backdrops: Option<Vec<Appearance>>,
    /// Sounds the stage can play
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub sounds: Vec<Sound>,
}

fn default_stage_name() -> String {
    "Stage".to_string()
}

impl Default for StageConfig {
    fn default() -> Self {
        Self { name: default_stage_name(), backdrops: None, sounds: Vec::new() }
    }
}

impl StageConfig {
    /// Backdrops after applying the default.
    pub fn effective_backdrops(&self) -> Vec<Appearance> {
        self.backdrops.clone().unwrap_or_else(|| vec![ActorClass::default_backdrop()])
    }

    pub fn to_class(&self) -> ActorClass {
        ActorClass::stage(&self.name, self.effective_backdrops()).with_sounds(self.sounds.clone())
    }
}

/// Sprite class declaration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpriteConfig {
    /// Class name (required)
    pub name: String,
    /// Costumes; omitted means the default question-mark costume,
    /// an explicit empty list means none
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub costumes: Option<Vec<Appearance>>,
    /// Sounds the sprite can play
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub sounds: Vec<Sound>,
}

impl SpriteConfig {
    /// Costumes after applying the default.
    pub fn effective_costumes(&self) -> Vec<Appearance> {
        self.costumes.clone().unwrap_or_else(|| vec![ActorClass::default_costume()])
    }

    pub fn to_class(&self) -> ActorClass {
        ActorClass::sprite(&self.name, self.effective_costumes()).with_sounds(self.sounds.clone())
    }
}

/// Root manifest structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    /// Project metadata (required)
    pub project: ProjectConfig,
    /// Stage declaration
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub stage: Option<StageConfig>,
    /// Sprite declarations
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub sprites: Vec<SpriteConfig>,
}

/// Manifest validation error
#[derive(Debug, Clone, PartialEq)]
pub struct ManifestValidationError {
    /// Path to the invalid field (e.g., "sprites.Cat.costumes")
    pub field: String,
    /// Error message
    pub message: String,
}

impl std::fmt::Display for ManifestValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "'{}' {}", self.field, self.message)
    }
}

impl Manifest {
    /// Validate the manifest and return any errors
    pub fn validate(&self) -> Vec<ManifestValidationError> {
        let mut errors = Vec::new();

        if self.project.name.is_empty() {
            errors.push(ManifestValidationError {
                field: "project.name".to_string(),
                message: "must be a non-empty string".to_string(),
            });
        }

        let mut class_names = HashSet::new();

        if let Some(stage) = &self.stage {
            let field = format!("stage.{}", stage.name);
            check_class_name(&stage.name, "stage.name", &mut class_names, &mut errors);

            let backdrops = stage.effective_backdrops();
            if backdrops.is_empty() {
                errors.push(ManifestValidationError {
                    field: format!("{}.backdrops", field),
                    message: "must contain at least one backdrop".to_string(),
                });
            }
            check_labels(backdrops.iter().map(|b| b.label.as_str()), &field, "backdrops", &mut errors);
            check_labels(stage.sounds.iter().map(|s| s.label.as_str()), &field, "sounds", &mut errors);
        }

        for sprite in &self.sprites {
            let field = format!("sprites.{}", sprite.name);
            check_class_name(&sprite.name, "sprites.name", &mut class_names, &mut errors);

            let costumes = sprite.effective_costumes();
            check_labels(costumes.iter().map(|c| c.label.as_str()), &field, "costumes", &mut errors);
            check_labels(sprite.sounds.iter().map(|s| s.label.as_str()), &field, "sounds", &mut errors);
        }

        errors
    }

    /// Check if validation passed
    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }

    /// The declared stage class, if the manifest has a stage section.
    pub fn stage_class(&self) -> Option<Arc<ActorClass>> {
        self.stage.as_ref().map(|stage| Arc::new(stage.to_class()))
    }

    /// The declared sprite classes, in declaration order.
    pub fn sprite_classes(&self) -> Vec<Arc<ActorClass>> {
        self.sprites.iter().map(|sprite| Arc::new(sprite.to_class())).collect()
    }

    /// Every declared class, stage first.
    pub fn classes(&self) -> Vec<Arc<ActorClass>> {
        self.stage_class().into_iter().chain(self.sprite_classes()).collect()
    }

    /// Look up a declared class by name.
    pub fn class(&self, name: &str) -> Option<Arc<ActorClass>> {
        self.classes().into_iter().find(|class| class.name() == name)
    }
}

fn check_class_name(
    name: &str,
    field: &str,
    seen: &mut HashSet<String>,
    errors: &mut Vec<ManifestValidationError>,
) {
    if name.is_empty() {
        errors.push(ManifestValidationError {
            field: field.to_string(),
            message: "must be a non-empty string".to_string(),
        });
    } else if !seen.insert(name.to_string()) {
        errors.push(ManifestValidationError {
            field: field.to_string(),
            message: format!("duplicate class name '{}'", name),
        });
    }
}

fn check_labels<'a>(
    labels: impl Iterator<Item = &'a str>,
    field: &str,
    list: &str,
    errors: &mut Vec<ManifestValidationError>,
) {
    let mut seen = HashSet::new();
    for label in labels {
        if label.is_empty() {
            errors.push(ManifestValidationError {
                field: format!("{}.{}", field, list),
                message: "labels must be non-empty".to_string(),
            });
        } else if !seen.insert(label) {
            errors.push(ManifestValidationError {
                field: format!("{}.{}", field, list),
                message: format!("duplicate label '{}'", label),
            });
        }
    }
}
