//! Init command implementation

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::config::{Manifest, ProjectConfig, SpriteConfig, StageConfig, MANIFEST_FILE};
use crate::models::ActorClass;

use super::{EXIT_ERROR, EXIT_INVALID_ARGS, EXIT_SUCCESS};

/// Starter manifest: default stage plus one sprite with the default costume.
pub(crate) fn starter_manifest(name: &str) -> Manifest {
    Manifest {
        project: ProjectConfig { name: name.to_string(), version: "0.1.0".to_string() },
        stage: Some(StageConfig {
            backdrops: Some(vec![ActorClass::default_backdrop()]),
            ..Default::default()
        }),
        sprites: vec![SpriteConfig {
            name: "Sprite1".to_string(),
            costumes: Some(vec![ActorClass::default_costume()]),
            sounds: Vec::new(),
        }],
    }
}

/// Execute the init command
pub fn run_init(dir: Option<&Path>, name: Option<&str>, force: bool) -> ExitCode {
    let dir: PathBuf = match dir {
        Some(d) => d.to_path_buf(),
        None => match env::current_dir() {
            Ok(d) => d,
            Err(e) => {
                eprintln!("Error: Cannot determine current directory: {}", e);
                return ExitCode::from(EXIT_ERROR);
            }
        },
    };

    let path = dir.join(MANIFEST_FILE);
    if path.exists() && !force {
        eprintln!("Error: '{}' already exists (use --force to overwrite)", path.display());
        return ExitCode::from(EXIT_INVALID_ARGS);
    }

    let project_name = name
        .map(str::to_string)
        .or_else(|| dir.file_name().map(|n| n.to_string_lossy().into_owned()))
        .unwrap_or_else(|| "unnamed".to_string());

    let contents = match toml::to_string_pretty(&starter_manifest(&project_name)) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    if let Err(e) = fs::create_dir_all(&dir).and_then(|_| fs::write(&path, contents)) {
        eprintln!("Error: Cannot write '{}': {}", path.display(), e);
        return ExitCode::from(EXIT_ERROR);
    }

    println!("Created {}", path.display());
    ExitCode::from(EXIT_SUCCESS)
}
