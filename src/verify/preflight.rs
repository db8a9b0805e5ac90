//! Pre-flight checks for the manifest and the `git` binary.
//!
//! Unlike `rules`, these functions perform I/O (checking files exist,
//! probing for the `git` binary).

use crate::error::{Result, SyncError};
use std::path::Path;
use std::process::Command;

/// Fails with `ManifestNotFound` if `manifest_path` is not a file.
pub fn check_manifest_exists(manifest_path: &Path) -> Result<()> {
    if !manifest_path.is_file() {
        log::debug!(
            "Current working directory: {}",
            std::env::current_dir()
                .map(|d| d.display().to_string())
                .unwrap_or_else(|_| "<unknown>".to_string())
        );
        return Err(SyncError::ManifestNotFound(manifest_path.to_path_buf()));
    }
    Ok(())
}

/// Checks that `git` can be launched.
///
/// Run by the remote query right before `git ls-remote`, so a missing
/// binary surfaces as a clear error naming the remote.
pub fn check_git_available(repo_url: &str) -> Result<()> {
    let available = Command::new("git")
        .arg("--version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false);

    if !available {
        return Err(SyncError::RemoteQueryFailed {
            url: repo_url.to_string(),
            reason: "git is not installed or not on PATH".to_string(),
        });
    }

    log::debug!("git is available");
    Ok(())
}

/// Runs the checks that must pass before the manifest is read.
///
/// Nothing here touches the network; the `git` probe belongs to the remote
/// query so a manifest problem is always reported first.
pub fn preflight_checks(manifest_path: &Path) -> Result<()> {
    check_manifest_exists(manifest_path)?;
    Ok(())
}
