//! Shared helpers for pubspec-ref-sync integration tests.
//!
//! Each test gets a Flutter-style project directory and a local git
//! repository that stands in for the remote module repo; `git ls-remote`
//! accepts plain paths.

#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

pub const STALE_REF: &str = "aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa";

/// A project directory plus a local "remote" repository.
pub struct Fixture {
    pub temp: TempDir,
    pub project: PathBuf,
    pub remote: PathBuf,
    pub head: String,
}

impl Fixture {
    pub fn manifest_path(&self) -> PathBuf {
        self.project.join("pubspec.yaml")
    }

    pub fn manifest(&self) -> String {
        fs::read_to_string(self.manifest_path()).unwrap()
    }

    pub fn backups(&self) -> Vec<PathBuf> {
        let dir = self.project.join("pubspec_backups");
        if !dir.exists() {
            return Vec::new();
        }
        fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().path())
            .collect()
    }
}

fn git(dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .args([
            "-c",
            "user.name=Test",
            "-c",
            "user.email=test@example.com",
            "-c",
            "commit.gpgsign=false",
        ])
        .args(args)
        .current_dir(dir)
        .output()
        .expect("failed to run git");
    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

/// Builds a pubspec pinning `count` modules to `git_ref`.
pub fn pubspec(git_ref: &str, count: usize) -> String {
    let mut out = String::from(
        "name: whiskr\ndescription: Pet social app\nversion: 1.4.0+12\n\nenvironment:\n  sdk: \">=3.0.0 <4.0.0\"\n\ndependencies:\n  flutter:\n    sdk: flutter\n",
    );
    for i in 0..count {
        out.push_str(&format!(
            "  module_{i}:\n    git:\n      url: https://github.com/example/modules.git\n      path: packages/module_{i}\n      ref: {git_ref}\n"
        ));
    }
    out
}

/// Creates a project whose pubspec pins `count` modules to `git_ref`
/// (or to the remote's HEAD when `git_ref` is `None`).
pub fn create_fixture(git_ref: Option<&str>, count: usize) -> Fixture {
    let temp = TempDir::new().unwrap();

    let remote = temp.path().join("modules");
    fs::create_dir(&remote).unwrap();
    git(&remote, &["init", "--quiet"]);
    fs::write(remote.join("README.md"), "# modules\n").unwrap();
    git(&remote, &["add", "README.md"]);
    git(&remote, &["commit", "--quiet", "-m", "init"]);
    let head = git(&remote, &["rev-parse", "HEAD"]);

    let project = temp.path().join("app");
    fs::create_dir(&project).unwrap();
    let pinned = git_ref.unwrap_or(head.as_str()).to_string();
    fs::write(project.join("pubspec.yaml"), pubspec(&pinned, count)).unwrap();

    Fixture {
        temp,
        project,
        remote,
        head,
    }
}

/// Runs the binary against `fixture` with `extra_args`.
pub fn run_sync(fixture: &Fixture, extra_args: &[&str]) -> assert_cmd::assert::Assert {
    let mut cmd = cargo_bin_cmd!("pubspec-ref-sync");
    cmd.arg("--project-root")
        .arg(&fixture.project)
        .arg("--repo-url")
        .arg(&fixture.remote)
        .args(extra_args)
        .env("NO_COLOR", "1")
        .env("RUST_LOG", "warn")
        .current_dir(fixture.temp.path());

    cmd.assert()
}
