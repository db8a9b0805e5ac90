//! Error types for pubspec-ref-sync.
//!
//! All operations return `Result<T>` which aliases `Result<T, SyncError>`.

use std::path::PathBuf;
use thiserror::Error;

/// Errors from sync operations.
#[derive(Debug, Error)]
pub enum SyncError {
    /// Manifest file does not exist.
    #[error("pubspec.yaml not found at: {}", .0.display())]
    ManifestNotFound(PathBuf),

    /// Manifest exists but carries no `ref:` pin.
    #[error("No git ref found in {}", .0.display())]
    RefNotFound(PathBuf),

    /// `git ls-remote` could not be run or exited non-zero.
    #[error("Failed to fetch latest commit from {url}: {reason}")]
    RemoteQueryFailed { url: String, reason: String },

    /// Remote answered with something that is not a commit hash.
    #[error("Remote returned an invalid commit hash: {0:?}")]
    InvalidRemoteRef(String),

    /// Dependency refresh command failed.
    ///
    /// Not fatal; the orchestrator reports it as a warning.
    #[error("Dependency refresh failed: {0}")]
    RefreshFailed(String),

    /// File system operation failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Regex compilation failed (indicates bug).
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    /// Unexpected error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for pubspec-ref-sync operations.
pub type Result<T> = std::result::Result<T, SyncError>;
