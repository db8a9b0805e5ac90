//! Validation rules for commit references.
//!
//! Pure functions with no I/O or side effects.

use crate::error::{Result, SyncError};

/// Length of a full SHA-1 commit hash in hex.
pub const COMMIT_HASH_LEN: usize = 40;

/// Returns `true` if `s` is a full lowercase hex commit hash.
///
/// Matches what the `ref:` pattern in a pubspec accepts, so a hash that
/// passes here can be found again by the reader after it is written.
pub fn is_commit_hash(s: &str) -> bool {
    s.len() == COMMIT_HASH_LEN && s.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}

/// Validates a commit hash reported by the remote.
///
/// ## Rules
/// - Exactly 40 characters
/// - Only `[0-9a-f]`
pub fn validate_commit_hash(hash: &str) -> Result<()> {
    if !is_commit_hash(hash) {
        return Err(SyncError::InvalidRemoteRef(hash.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_full_lowercase_hash() {
        assert!(is_commit_hash("0123456789abcdef0123456789abcdef01234567"));
        assert!(validate_commit_hash(&"a".repeat(40)).is_ok());
    }

    #[test]
    fn test_rejects_short_and_long() {
        assert!(!is_commit_hash(&"a".repeat(39)));
        assert!(!is_commit_hash(&"a".repeat(41)));
        assert!(!is_commit_hash(""));
    }

    #[test]
    fn test_rejects_uppercase_and_non_hex() {
        assert!(!is_commit_hash(&"A".repeat(40)));
        assert!(!is_commit_hash(&"g".repeat(40)));

        let err = validate_commit_hash("refs/heads/main").unwrap_err();
        assert!(matches!(err, SyncError::InvalidRemoteRef(s) if s == "refs/heads/main"));
    }
}
