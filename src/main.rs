//! Stagehand - command-line tool for inspecting sprite/stage project manifests

use std::process::ExitCode;

use stagehand::cli;

fn main() -> ExitCode {
    cli::run()
}
