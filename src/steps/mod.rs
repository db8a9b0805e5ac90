//! Top-level operations.

pub mod sync;

pub use self::sync::{SyncArgs, SyncOptions, SyncOutcome, execute, sync};
