//! Keeps the pinned git `ref:` in a Flutter `pubspec.yaml` in sync with the
//! latest commit of its remote module repository.
//!
//! The pipeline reads the current pin, asks the remote for `HEAD`, backs up
//! and rewrites the manifest when they differ, then runs `flutter pub get`.

pub mod cli;
pub mod error;
pub mod pubspec;
pub mod refresh;
pub mod remote;
pub mod report;
pub mod steps;
pub mod verify;

pub use error::*;

pub fn run() -> Result<()> {
    use clap::Parser;

    let cli = cli::Cli::parse();
    steps::sync::execute(cli.args)?;
    Ok(())
}
