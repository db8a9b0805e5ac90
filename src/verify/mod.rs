//! Validation and verification for sync operations.

pub mod preflight;
pub mod rules;

pub use preflight::{check_git_available, check_manifest_exists, preflight_checks};
pub use rules::{COMMIT_HASH_LEN, is_commit_hash, validate_commit_hash};
