//! # Content Store Crate
//!
//! Explicit repository interface over the site's editable content: blog
//! posts and page images kept as JSON documents under string keys.
//!
//! ## Main Components
//!
//! - **store**: ContentRepository trait, InMemoryContentStore, Snapshot
//! - **error**: Error types for snapshot import/export
//!
//! ## Semantics
//!
//! Single writer, single reader, last write wins, no versioning. Snapshots
//! replace the store wholesale on import.

// Public modules
pub mod error;
pub mod store;

// Re-export commonly used types for convenience
pub use error::{ContentStoreError, Result};
pub use store::{
    ContentRepository, InMemoryContentStore, Snapshot, KEY_PAGE_IMAGES, KEY_POSTS,
};
