//! Timestamped manifest backups.
//!
//! Backups land in `<project-root>/pubspec_backups/` and are named
//! `pubspec.yaml.backup.<YYYYMMDD_HHMMSS>`. They are write-once and never
//! read back; restoring is a manual copy.

use crate::error::Result;
use crate::pubspec::{MANIFEST_FILE, io_error};
use chrono::{Local, NaiveDateTime};
use std::fs::{self, File};
use std::path::{Path, PathBuf};

/// Directory, relative to the project root, that holds backups.
pub const BACKUP_DIR: &str = "pubspec_backups";

const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Returns the backup path for `manifest_path` at `timestamp`.
///
/// Pure; does not check whether the path is taken.
pub fn backup_path(manifest_path: &Path, timestamp: NaiveDateTime) -> PathBuf {
    let project_root = manifest_path.parent().unwrap_or_else(|| Path::new("."));
    let file_name = manifest_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| MANIFEST_FILE.to_string());

    project_root.join(BACKUP_DIR).join(format!(
        "{}.backup.{}",
        file_name,
        timestamp.format(TIMESTAMP_FORMAT)
    ))
}

/// Copies the manifest to a new backup stamped with the current local time.
pub fn create_backup(manifest_path: &Path) -> Result<PathBuf> {
    create_backup_at(manifest_path, Local::now().naive_local())
}

/// Copies the manifest to a new backup stamped with `timestamp`.
///
/// Creates the backup directory if needed. Permissions and modification
/// time are carried over. A backup from the same second is never
/// overwritten: a `.1`, `.2`, ... suffix is appended instead.
pub fn create_backup_at(manifest_path: &Path, timestamp: NaiveDateTime) -> Result<PathBuf> {
    let path = unused_path(backup_path(manifest_path, timestamp));

    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(|e| io_error("create", dir, e))?;
    }

    fs::copy(manifest_path, &path).map_err(|e| io_error("back up", manifest_path, e))?;
    preserve_modified_time(manifest_path, &path);

    log::debug!(
        "Backed up {} to {}",
        manifest_path.display(),
        path.display()
    );
    Ok(path)
}

fn unused_path(candidate: PathBuf) -> PathBuf {
    if !candidate.exists() {
        return candidate;
    }

    let base = candidate.as_os_str().to_owned();
    (1..)
        .map(|n| {
            let mut name = base.clone();
            name.push(format!(".{}", n));
            PathBuf::from(name)
        })
        .find(|p| !p.exists())
        .unwrap_or(candidate)
}

/// `fs::copy` keeps permissions but not timestamps.
fn preserve_modified_time(from: &Path, to: &Path) {
    let result = fs::metadata(from)
        .and_then(|m| m.modified())
        .and_then(|modified| File::open(to)?.set_modified(modified));

    if let Err(e) = result {
        log::debug!(
            "Could not preserve modification time on {}: {}",
            to.display(),
            e
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::time::{Duration, SystemTime};
    use tempfile::TempDir;

    fn stamp() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 16)
            .unwrap()
            .and_hms_opt(9, 5, 3)
            .unwrap()
    }

    #[test]
    fn test_backup_path_format() {
        let path = backup_path(Path::new("/app/pubspec.yaml"), stamp());
        assert_eq!(
            path,
            PathBuf::from("/app/pubspec_backups/pubspec.yaml.backup.20261016_090503")
        );
    }

    #[test]
    fn test_backup_is_byte_identical() {
        let temp = TempDir::new().unwrap();
        let manifest = temp.path().join("pubspec.yaml");
        let content = "name: app\n# keep me\ndependencies: {}\n";
        fs::write(&manifest, content).unwrap();

        let backup = create_backup_at(&manifest, stamp()).unwrap();

        assert!(backup.starts_with(temp.path().join(BACKUP_DIR)));
        assert_eq!(fs::read_to_string(&backup).unwrap(), content);
        assert_eq!(fs::read_to_string(&manifest).unwrap(), content);
    }

    #[test]
    fn test_same_second_does_not_overwrite() {
        let temp = TempDir::new().unwrap();
        let manifest = temp.path().join("pubspec.yaml");

        fs::write(&manifest, "first").unwrap();
        let first = create_backup_at(&manifest, stamp()).unwrap();

        fs::write(&manifest, "second").unwrap();
        let second = create_backup_at(&manifest, stamp()).unwrap();

        assert_ne!(first, second);
        assert!(second.to_string_lossy().ends_with("20261016_090503.1"));
        assert_eq!(fs::read_to_string(&first).unwrap(), "first");
        assert_eq!(fs::read_to_string(&second).unwrap(), "second");
    }

    #[test]
    fn test_preserves_modified_time() {
        let temp = TempDir::new().unwrap();
        let manifest = temp.path().join("pubspec.yaml");
        fs::write(&manifest, "name: app\n").unwrap();

        let old = SystemTime::UNIX_EPOCH + Duration::from_secs(1_600_000_000);
        File::options()
            .write(true)
            .open(&manifest)
            .unwrap()
            .set_modified(old)
            .unwrap();

        let backup = create_backup_at(&manifest, stamp()).unwrap();
        let modified = fs::metadata(&backup).unwrap().modified().unwrap();
        assert_eq!(modified, old);
    }

    #[test]
    fn test_missing_manifest_fails() {
        let temp = TempDir::new().unwrap();
        let manifest = temp.path().join("pubspec.yaml");

        assert!(create_backup_at(&manifest, stamp()).is_err());
    }
}
