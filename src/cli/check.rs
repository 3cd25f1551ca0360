//! Check command implementation

use std::path::Path;
use std::process::ExitCode;

use crate::config::Manifest;

use super::{load_for_command, EXIT_ERROR, EXIT_SUCCESS};

/// Warnings for declarations that load fine but are probably mistakes.
pub(crate) fn manifest_warnings(manifest: &Manifest) -> Vec<String> {
    let mut warnings = Vec::new();

    if manifest.stage.is_none() {
        warnings.push("no [stage] section; the project has no backdrop".to_string());
    }

    for class in manifest.sprite_classes() {
        if class.appearances().is_empty() {
            warnings.push(format!(
                "sprite '{}' declares no costumes and can never be shown",
                class.name()
            ));
        }
    }

    warnings
}

/// Execute the check command
pub fn run_check(manifest: Option<&Path>, strict: bool) -> ExitCode {
    let manifest = match load_for_command(manifest) {
        Ok(m) => m,
        Err(code) => return code,
    };

    let warnings = manifest_warnings(&manifest);
    for warning in &warnings {
        eprintln!("Warning: {}", warning);
    }

    if strict && !warnings.is_empty() {
        eprintln!("Error: {} warning(s) in strict mode", warnings.len());
        return ExitCode::from(EXIT_ERROR);
    }

    println!(
        "{}: ok ({} class(es))",
        manifest.project.name,
        manifest.classes().len()
    );
    ExitCode::from(EXIT_SUCCESS)
}
