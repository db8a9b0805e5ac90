//! Colored status lines.
//!
//! Every line starts with a label right-aligned to 12 columns, the way
//! cargo prints `Compiling` and `Finished`. Informational and success lines
//! go to stdout, warnings to stderr.

use colored::Colorize;
use std::fmt::Display;
use std::path::Path;

/// Progress or informational line (cyan label).
pub fn info(label: &str, message: impl Display) {
    println!("{:>12} {}", label.cyan().bold(), message);
}

/// Completed step (green label).
pub fn success(label: &str, message: impl Display) {
    println!("{:>12} {}", label.green().bold(), message);
}

/// Non-fatal problem (yellow label).
pub fn warn(message: impl Display) {
    eprintln!("{:>12} {}", "Warning".yellow().bold(), message);
}

/// Remediation hint following a warning.
pub fn hint(message: impl Display) {
    eprintln!("{:>12} {}", "Hint".blue().bold(), message.to_string().dimmed());
}

/// `path` relative to `root` with forward slashes, or `path` unchanged when
/// no relative form exists.
pub fn display_path(path: &Path, root: &Path) -> String {
    let relative = pathdiff::diff_paths(path, root).unwrap_or_else(|| path.to_path_buf());
    relative.to_string_lossy().replace('\\', "/")
}
