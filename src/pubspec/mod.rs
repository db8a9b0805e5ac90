//! `pubspec.yaml` manipulation.
//!
//! This module reads and rewrites the pinned git `ref:` of a Flutter
//! manifest. It is split into three concerns:
//!
//! - **`reader`**: Extracts the currently pinned reference
//! - **`backup`**: Timestamped copies written before any mutation
//! - **`updater`**: Literal replacement of the pinned reference
//!
//! Edits are plain substring replacements so YAML formatting, comments and
//! key order survive untouched.

pub mod backup;
pub mod reader;
pub mod updater;

pub use backup::{BACKUP_DIR, create_backup};
pub use reader::{find_refs, read_current_ref};
pub use updater::{ManifestUpdate, count_occurrences, update_refs};

use crate::error::SyncError;
use std::path::Path;

/// File name of the manifest inside a project root.
pub const MANIFEST_FILE: &str = "pubspec.yaml";

/// Wraps an I/O error with the action and path that produced it.
pub(crate) fn io_error(action: &str, path: &Path, e: std::io::Error) -> SyncError {
    log::error!("Failed to {} {}: {}", action, path.display(), e);
    SyncError::Io(std::io::Error::new(
        e.kind(),
        format!("Failed to {} {}: {}", action, path.display(), e),
    ))
}
