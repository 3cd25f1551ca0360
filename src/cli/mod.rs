//! Command-line interface implementation
//!
//! This module provides the CLI entry point and dispatches to submodules
//! for specific command implementations.

mod check;
mod init;
mod show;

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use crate::config::{find_manifest, load_manifest_file, ConfigError, Manifest};

/// Exit codes
pub(crate) const EXIT_SUCCESS: u8 = 0;
pub(crate) const EXIT_ERROR: u8 = 1;
pub(crate) const EXIT_INVALID_ARGS: u8 = 2;

/// Stagehand - inspect and validate sprite/stage project manifests
#[derive(Parser)]
#[command(name = "stagehand")]
#[command(about = "Stagehand - inspect and validate sprite/stage project manifests")]
#[command(version)]
pub struct Cli {
    /// Log delegated actor operations and manifest loading
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Load a manifest and report declaration problems
    Check {
        /// Manifest file (.toml or .json). Defaults to the nearest stagehand.toml
        manifest: Option<PathBuf>,

        /// Treat warnings as errors
        #[arg(long)]
        strict: bool,
    },

    /// List the classes declared in a manifest
    Show {
        /// Manifest file (.toml or .json). Defaults to the nearest stagehand.toml
        manifest: Option<PathBuf>,

        /// Only show the class with this name
        #[arg(short, long)]
        class: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write a starter stagehand.toml
    Init {
        /// Directory to create the manifest in (default: current directory)
        dir: Option<PathBuf>,

        /// Project name (default: directory name)
        #[arg(long)]
        name: Option<String>,

        /// Overwrite an existing manifest
        #[arg(long)]
        force: bool,
    },
}

/// Install the tracing subscriber. `RUST_LOG` wins over `--verbose`.
fn init_logging(verbose: bool) {
    let default = if verbose { "stagehand=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).try_init();
}

/// Resolve the manifest argument and load it, printing errors to stderr.
pub(crate) fn load_for_command(manifest: Option<&Path>) -> Result<Manifest, ExitCode> {
    let Some(path) = manifest.map(Path::to_path_buf).or_else(find_manifest) else {
        eprintln!("Error: No stagehand.toml found in this directory or any parent");
        return Err(ExitCode::from(EXIT_INVALID_ARGS));
    };

    match load_manifest_file(&path) {
        Ok(manifest) => Ok(manifest),
        Err(ConfigError::Io(e)) => {
            eprintln!("Error: Cannot read manifest '{}': {}", path.display(), e);
            Err(ExitCode::from(EXIT_INVALID_ARGS))
        }
        Err(e) => {
            eprintln!("Error: {}: {}", path.display(), e);
            Err(ExitCode::from(EXIT_ERROR))
        }
    }
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Check { manifest, strict } => check::run_check(manifest.as_deref(), strict),
        Commands::Show { manifest, class, json } => {
            show::run_show(manifest.as_deref(), class.as_deref(), json)
        }
        Commands::Init { dir, name, force } => init::run_init(dir.as_deref(), name.as_deref(), force),
    }
}
