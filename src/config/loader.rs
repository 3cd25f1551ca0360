//! Manifest loading and discovery for `stagehand.toml`
//!
//! Provides functions to find and load a project manifest.

use super::schema::Manifest;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name searched for by [`find_manifest`].
pub const MANIFEST_FILE: &str = "stagehand.toml";

/// Manifest loading error
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// File I/O error
    #[error("Failed to read manifest: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error
    #[error("Failed to parse TOML manifest: {0}")]
    Parse(#[from] toml::de::Error),
    /// JSON parsing error
    #[error("Failed to parse JSON manifest: {0}")]
    Json(#[from] serde_json::Error),
    /// Validation error
    #[error("Manifest validation failed:\n{}", .0.iter().map(|e| format!("  - {}", e)).collect::<Vec<_>>().join("\n"))]
    Validation(Vec<String>),
}

/// Find the manifest by walking up from the current working directory.
pub fn find_manifest() -> Option<PathBuf> {
    env::current_dir().ok().and_then(find_manifest_from)
}

/// Find the manifest by walking up from a specific directory.
pub fn find_manifest_from(start: PathBuf) -> Option<PathBuf> {
    let mut current = start;

    loop {
        let manifest_path = current.join(MANIFEST_FILE);
        if manifest_path.exists() {
            return Some(manifest_path);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Load a manifest from a specific file path.
///
/// Files ending in `.json` are parsed as JSON, everything else as TOML.
pub fn load_manifest_file(path: &Path) -> Result<Manifest, ConfigError> {
    let contents = fs::read_to_string(path)?;
    let is_json = path.extension().and_then(|e| e.to_str()) == Some("json");
    let manifest = if is_json { parse_json(&contents)? } else { parse_toml(&contents)? };
    tracing::info!(path = %path.display(), classes = manifest.sprites.len(), "loaded manifest");
    Ok(manifest)
}

/// Parse and validate a TOML manifest.
pub fn parse_toml(contents: &str) -> Result<Manifest, ConfigError> {
    let manifest: Manifest = toml::from_str(contents)?;
    validated(manifest)
}

/// Parse and validate a JSON manifest.
pub fn parse_json(contents: &str) -> Result<Manifest, ConfigError> {
    let manifest: Manifest = serde_json::from_str(contents)?;
    validated(manifest)
}

fn validated(manifest: Manifest) -> Result<Manifest, ConfigError> {
    let errors = manifest.validate();
    if !errors.is_empty() {
        return Err(ConfigError::Validation(errors.into_iter().map(|e| e.to_string()).collect()));
    }
    Ok(manifest)
}
