//! Orchestration of a pubspec ref sync.
//!
//! Reader → fetcher → compare → updater → refresh, strictly in that order.
//! Every fatal condition is returned as an error; only the refresh step is
//! allowed to fail without failing the run.

use crate::error::{Result, SyncError};
use crate::pubspec::{MANIFEST_FILE, ManifestUpdate, count_occurrences};
use crate::pubspec::{io_error, read_current_ref, update_refs};
use crate::refresh::{DependencyRefresh, FlutterPubGet};
use crate::remote::{DEFAULT_REPO_URL, GitRemote, RemoteRefs};
use crate::report;
use crate::verify::preflight_checks;

use clap::Args;
use std::fs;
use std::path::{Path, PathBuf};

/// Arguments for a sync run. Every option has a default, so a bare
/// invocation syncs the project the executable lives in.
#[derive(Args, Debug, Clone)]
pub struct SyncArgs {
    /// Flutter project root containing pubspec.yaml
    ///
    /// Defaults to the parent of the directory holding this executable,
    /// which fits a binary placed in <project>/scripts/. A binary started
    /// through cargo run or installed with cargo install lives in
    /// target/debug/ or ~/.cargo/bin/, so pass this option there.
    #[arg(long, value_name = "DIR")]
    pub project_root: Option<PathBuf>,

    /// Git repository whose HEAD the pinned ref should follow
    #[arg(long, value_name = "URL", default_value = DEFAULT_REPO_URL)]
    pub repo_url: String,

    /// Flutter executable used for `pub get`
    #[arg(long, value_name = "PATH", default_value = "flutter")]
    pub flutter: String,

    /// Update pubspec.yaml without running `flutter pub get`
    #[arg(long)]
    pub skip_pub_get: bool,

    /// Show what would change without writing anything
    #[arg(long, short = 'n')]
    pub dry_run: bool,
}

impl SyncArgs {
    /// Returns the project root, resolving the default from the executable
    /// location when `--project-root` was not given.
    pub fn resolve_project_root(&self) -> Result<PathBuf> {
        if let Some(root) = &self.project_root {
            return Ok(root.clone());
        }

        let exe = std::env::current_exe()?;
        exe.parent()
            .and_then(Path::parent)
            .map(Path::to_path_buf)
            .ok_or_else(|| {
                SyncError::Other(anyhow::anyhow!(
                    "Cannot derive project root from executable path {}",
                    exe.display()
                ))
            })
    }

    pub fn options(&self) -> SyncOptions {
        SyncOptions {
            dry_run: self.dry_run,
            skip_refresh: self.skip_pub_get,
        }
    }
}

/// Behavior switches for [`sync`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncOptions {
    pub dry_run: bool,
    pub skip_refresh: bool,
}

/// Terminal state of a sync run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    /// Pinned ref already matches the remote. Nothing was written.
    UpToDate,
    /// Dry run: the manifest would have been rewritten.
    WouldUpdate { occurrences: usize },
    /// Backup was taken but the ref was no longer in the manifest.
    NoOccurrences { backup: PathBuf },
    /// Manifest rewritten.
    Updated {
        replacements: usize,
        backup: PathBuf,
        /// `false` if the refresh was skipped or failed.
        refreshed: bool,
    },
}

/// Executes a sync against the real git remote and Flutter toolchain.
///
/// ## Phases
///
/// 1. Resolve project root and manifest path
/// 2. Pre-flight checks (manifest exists)
/// 3. [`sync`]
pub fn execute(args: SyncArgs) -> Result<SyncOutcome> {
    let project_root = args.resolve_project_root()?;
    let manifest_path = project_root.join(MANIFEST_FILE);

    report::info("Project", project_root.display());
    report::info("Manifest", manifest_path.display());

    preflight_checks(&manifest_path)?;

    let remote = GitRemote::new(args.repo_url.as_str());
    let refresher = FlutterPubGet::new(args.flutter.as_str());

    sync(&project_root, &remote, &refresher, args.options())
}

/// Brings the pinned ref in `project_root/pubspec.yaml` up to date with
/// `remote`.
///
/// The refresh runs at most once, and only after a non-zero number of
/// replacements. Its failure is reported as a warning.
pub fn sync(
    project_root: &Path,
    remote: &impl RemoteRefs,
    refresher: &impl DependencyRefresh,
    options: SyncOptions,
) -> Result<SyncOutcome> {
    let manifest_path = project_root.join(MANIFEST_FILE);

    let current_ref = read_current_ref(&manifest_path)?;
    report::info("Found", format!("current ref in pubspec.yaml: {}", current_ref));

    report::info(
        "Fetching",
        format!("latest commit from {}", remote.location()),
    );
    let latest_commit = remote.latest_commit()?;

    report::info("Current", &current_ref);
    report::info("Latest", &latest_commit);

    if current_ref == latest_commit {
        report::success("Fresh", "Already up to date!");
        return Ok(SyncOutcome::UpToDate);
    }

    if options.dry_run {
        let content = fs::read_to_string(&manifest_path)
            .map_err(|e| io_error("read", &manifest_path, e))?;
        let occurrences = count_occurrences(&content, &current_ref);
        report::info(
            "Pending",
            format!(
                "{} reference{} {} → {}",
                occurrences,
                if occurrences == 1 { "" } else { "s" },
                current_ref,
                latest_commit
            ),
        );
        report::info("Dry run", "no changes written. Run without --dry-run to apply.");
        return Ok(SyncOutcome::WouldUpdate { occurrences });
    }

    report::info("Updating", "pubspec.yaml");
    let ManifestUpdate {
        replacements,
        backup,
    } = update_refs(&manifest_path, &current_ref, &latest_commit)?;

    if replacements == 0 {
        return Ok(SyncOutcome::NoOccurrences { backup });
    }

    let refreshed = if options.skip_refresh {
        report::info("Skipping", refresher.describe());
        false
    } else {
        run_refresh(project_root, refresher)
    };

    report::success("Finished", "Successfully updated all module references!");

    Ok(SyncOutcome::Updated {
        replacements,
        backup,
        refreshed,
    })
}

fn run_refresh(project_root: &Path, refresher: &impl DependencyRefresh) -> bool {
    report::info("Running", refresher.describe());

    match refresher.refresh(project_root) {
        Ok(()) => {
            report::success(
                "Finished",
                format!("{} completed successfully!", refresher.describe()),
            );
            true
        }
        Err(e) => {
            log::debug!("Refresh error: {:?}", e);
            report::warn(format!("{}, but refs were updated", e));
            report::hint("You may need to run 'flutter clean' and try again");
            false
        }
    }
}
