//! Show command implementation

use std::path::Path;
use std::process::ExitCode;

use crate::models::ActorClass;

use super::{load_for_command, EXIT_ERROR, EXIT_SUCCESS};

fn class_json(class: &ActorClass) -> serde_json::Value {
    serde_json::json!({
        "name": class.name(),
        "kind": class.kind(),
        "appearances": class.appearances(),
        "sounds": class.sounds(),
    })
}

fn print_class(class: &ActorClass) {
    println!("{} {}", class.kind(), class.name());
    if class.appearances().is_empty() {
        println!("  (no {}s)", class.appearance_hyponym());
    }
    for (i, appearance) in class.appearances().iter().enumerate() {
        let marker = if i == 0 { "*" } else { " " };
        println!(
            "  {} {} {:<16} {}x{}  {}",
            marker,
            class.appearance_hyponym(),
            appearance.label,
            appearance.width,
            appearance.height,
            appearance.asset
        );
    }
    for sound in class.sounds() {
        println!("    Sound   {:<16} {}", sound.label, sound.asset);
    }
}

/// Execute the show command
pub fn run_show(manifest: Option<&Path>, class_filter: Option<&str>, json: bool) -> ExitCode {
    let manifest = match load_for_command(manifest) {
        Ok(m) => m,
        Err(code) => return code,
    };

    let classes: Vec<_> = match class_filter {
        Some(name) => match manifest.class(name) {
            Some(class) => vec![class],
            None => {
                eprintln!("Error: No class named '{}' in manifest", name);
                let names: Vec<String> =
                    manifest.classes().iter().map(|c| c.name().to_string()).collect();
                if !names.is_empty() {
                    eprintln!("Available classes: {}", names.join(", "));
                }
                return ExitCode::from(EXIT_ERROR);
            }
        },
        None => manifest.classes(),
    };

    if json {
        let value = serde_json::json!({
            "project": manifest.project.name,
            "version": manifest.project.version,
            "classes": classes.iter().map(|c| class_json(c)).collect::<Vec<_>>(),
        });
        match serde_json::to_string_pretty(&value) {
            Ok(text) => println!("{}", text),
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::from(EXIT_ERROR);
            }
        }
    } else {
        println!("{} {}", manifest.project.name, manifest.project.version);
        for class in &classes {
            println!();
            print_class(class);
        }
    }

    ExitCode::from(EXIT_SUCCESS)
}
