//! Rewrites the pinned reference in a manifest.

use crate::error::{Result, SyncError};
use crate::pubspec::{backup, io_error};
use crate::report;
use crate::verify::check_manifest_exists;
use std::fs;
use std::path::{Path, PathBuf};

/// Result of a manifest update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestUpdate {
    /// Occurrences of the old reference that were replaced.
    pub replacements: usize,
    /// Backup written before the manifest was touched.
    pub backup: PathBuf,
}

/// Number of non-overlapping occurrences of `needle` in `content`.
pub fn count_occurrences(content: &str, needle: &str) -> usize {
    if needle.is_empty() {
        return 0;
    }
    content.matches(needle).count()
}

/// Replaces every literal occurrence of `old_ref` with `new_ref`.
///
/// ## Steps
///
/// 1. Back up the manifest to `pubspec_backups/` (created if absent)
/// 2. Count occurrences of `old_ref`
/// 3. If none, leave the manifest alone and report zero
/// 4. Otherwise rewrite the whole file with every occurrence replaced
///
/// The backup and rewrite are independent writes. A failure after the
/// backup leaves a stray backup next to an unchanged manifest.
///
/// There is no `old_ref == new_ref` guard; callers compare first.
///
/// # Errors
///
/// - `ManifestNotFound`: no file at `manifest_path`
/// - `Io`: backup, read or write failed
/// - `Other`: `old_ref` is empty
pub fn update_refs(manifest_path: &Path, old_ref: &str, new_ref: &str) -> Result<ManifestUpdate> {
    check_manifest_exists(manifest_path)?;

    if old_ref.is_empty() {
        return Err(SyncError::Other(anyhow::anyhow!(
            "Refusing to replace an empty ref in {}",
            manifest_path.display()
        )));
    }

    let project_root = manifest_path.parent().unwrap_or_else(|| Path::new("."));

    let backup = backup::create_backup(manifest_path)?;
    report::info(
        "Backup",
        format!("created {}", report::display_path(&backup, project_root)),
    );

    let content =
        fs::read_to_string(manifest_path).map_err(|e| io_error("read", manifest_path, e))?;
    let replacements = count_occurrences(&content, old_ref);

    if replacements == 0 {
        log::debug!("{} not present in {}", old_ref, manifest_path.display());
        report::success("Fresh", "Already up to date!");
        return Ok(ManifestUpdate {
            replacements,
            backup,
        });
    }

    let updated = content.replace(old_ref, new_ref);
    fs::write(manifest_path, updated).map_err(|e| io_error("write", manifest_path, e))?;

    report::success("Updated", format!("pubspec.yaml with new ref: {}", new_ref));
    report::success(
        "Replaced",
        format!(
            "{} module reference{}",
            replacements,
            if replacements == 1 { "" } else { "s" }
        ),
    );

    Ok(ManifestUpdate {
        replacements,
        backup,
    })
}
