//! Dependency refresh after a manifest update.

use crate::error::{Result, SyncError};
use std::path::Path;
use std::process::Command;

/// Re-resolves project dependencies against the updated manifest.
pub trait DependencyRefresh {
    /// Command line shown to the user.
    fn describe(&self) -> String;

    /// Runs the refresh in `project_root`.
    ///
    /// Returns `RefreshFailed` if the tool cannot be started or exits
    /// non-zero.
    fn refresh(&self, project_root: &Path) -> Result<()>;
}

/// `flutter pub get`.
#[derive(Debug, Clone)]
pub struct FlutterPubGet {
    program: String,
}

impl FlutterPubGet {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for FlutterPubGet {
    fn default() -> Self {
        Self::new("flutter")
    }
}

impl DependencyRefresh for FlutterPubGet {
    fn describe(&self) -> String {
        format!("{} pub get", self.program)
    }

    fn refresh(&self, project_root: &Path) -> Result<()> {
        log::debug!("Running `{}` in {}", self.describe(), project_root.display());

        let status = Command::new(&self.program)
            .args(["pub", "get"])
            .current_dir(project_root)
            .status()
            .map_err(|e| {
                SyncError::RefreshFailed(format!("failed to run {}: {}", self.program, e))
            })?;

        if !status.success() {
            return Err(SyncError::RefreshFailed(format!(
                "`{}` exited with {}",
                self.describe(),
                status
            )));
        }

        Ok(())
    }
}
