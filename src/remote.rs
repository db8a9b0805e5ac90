//! Remote commit lookup.
//!
//! Resolves what a remote's `HEAD` points to with `git ls-remote`, which
//! performs the ref advertisement handshake only and never clones.

use crate::error::{Result, SyncError};
use crate::verify::{check_git_available, validate_commit_hash};
use std::process::Command;

/// Repository whose `HEAD` the manifest tracks.
pub const DEFAULT_REPO_URL: &str = "https://github.com/Pet-Pals/whiskr_mobile_modules.git";

/// Source of the latest commit for the pinned repository.
pub trait RemoteRefs {
    /// Human-readable location, used in messages.
    fn location(&self) -> &str;

    /// Full commit hash the remote's default branch points to.
    fn latest_commit(&self) -> Result<String>;
}

/// Queries a git remote through the `git` CLI.
#[derive(Debug, Clone)]
pub struct GitRemote {
    url: String,
}

impl GitRemote {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl RemoteRefs for GitRemote {
    fn location(&self) -> &str {
        &self.url
    }

    fn latest_commit(&self) -> Result<String> {
        check_git_available(&self.url)?;
        log::debug!("Running: git ls-remote {} HEAD", self.url);

        let output = Command::new("git")
            .args(["ls-remote", self.url.as_str(), "HEAD"])
            .output()
            .map_err(|e| SyncError::RemoteQueryFailed {
                url: self.url.clone(),
                reason: format!("failed to execute git: {}", e),
            })?;

        if !output.status.success() {
            return Err(SyncError::RemoteQueryFailed {
                url: self.url.clone(),
                reason: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        parse_ls_remote(&String::from_utf8_lossy(&output.stdout))
    }
}

/// Extracts the commit hash from `git ls-remote <url> HEAD` output.
///
/// Output is `<hash>\tHEAD`; only the first field of the first line is used.
pub fn parse_ls_remote(stdout: &str) -> Result<String> {
    let hash = stdout.split_whitespace().next().unwrap_or_default();
    validate_commit_hash(hash)?;
    Ok(hash.to_string())
}
