//! Error types for the content-store crate.

use thiserror::Error;

/// Errors that can occur while importing or exporting content snapshots.
#[derive(Error, Debug)]
pub enum ContentStoreError {
    /// Snapshot text was not valid JSON or did not match the snapshot shape
    #[error("Invalid snapshot: {0}")]
    InvalidSnapshot(#[from] serde_json::Error),

    /// A value was requested under a key that holds nothing
    #[error("No content under key: {key}")]
    MissingKey { key: String },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, ContentStoreError>;
