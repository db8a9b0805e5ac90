//! Extraction of the pinned reference from a manifest.

use crate::error::{Result, SyncError};
use crate::pubspec::io_error;
use crate::verify::check_manifest_exists;
use regex::Regex;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

/// A `ref:` key followed by a full commit hash.
const REF_PATTERN: &str = r"ref:\s*([a-f0-9]{40})";

/// Returns every pinned reference in `content`, in document order.
pub fn find_refs(content: &str) -> Result<Vec<String>> {
    let pattern = Regex::new(REF_PATTERN)?;
    Ok(pattern
        .captures_iter(content)
        .map(|caps| caps[1].to_string())
        .collect())
}

/// Reads the currently pinned reference from the manifest.
///
/// All `ref:` entries are expected to pin the same commit; the first one
/// is returned. When they disagree a warning lists them, since a blanket
/// replace of the first will leave the others untouched.
///
/// # Errors
///
/// - `ManifestNotFound`: no file at `manifest_path`
/// - `RefNotFound`: no `ref: <40 hex>` entry
/// - `Io`: file cannot be read
pub fn read_current_ref(manifest_path: &Path) -> Result<String> {
    check_manifest_exists(manifest_path)?;

    let content =
        fs::read_to_string(manifest_path).map_err(|e| io_error("read", manifest_path, e))?;
    let refs = find_refs(&content)?;

    let Some(current) = refs.first().cloned() else {
        return Err(SyncError::RefNotFound(manifest_path.to_path_buf()));
    };

    log::debug!(
        "Found {} ref entr{} in {}",
        refs.len(),
        if refs.len() == 1 { "y" } else { "ies" },
        manifest_path.display()
    );

    let distinct: BTreeSet<&str> = refs.iter().map(String::as_str).collect();
    if distinct.len() > 1 {
        log::warn!(
            "{} pins {} different refs; only {} will be updated",
            manifest_path.display(),
            distinct.len(),
            current
        );
        for r in &distinct {
            log::warn!("  {}", r);
        }
    }

    Ok(current)
}
