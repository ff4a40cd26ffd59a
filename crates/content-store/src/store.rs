//! The content repository interface and its in-memory implementation.
//!
//! The site's editable content (blog posts, page images) is a small
//! key-value document store: one writer (the admin screen), one reader (the
//! rendering layer), last write wins, no versioning. Making the store an
//! explicit trait keeps it injectable instead of ambient global state.

use crate::error::{ContentStoreError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

// Well-known collection keys used by the site.
pub const KEY_POSTS: &str = "posts";
pub const KEY_PAGE_IMAGES: &str = "page-images";

/// A full copy of the store's contents, used for import/export.
///
/// Importing a snapshot replaces the store wholesale; there is no merge and
/// no version check, matching the store's last-write-wins model.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub entries: HashMap<String, Value>,
}

impl Snapshot {
    /// Parse a snapshot from JSON text.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Serialize the snapshot as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Repository interface over the site's editable content.
///
/// Kept dyn-compatible so the rendering layer can hold the store as a
/// `Box<dyn ContentRepository>` rather than naming the implementation.
pub trait ContentRepository {
    /// Get the document stored under a key, if any.
    fn get(&self, key: &str) -> Option<&Value>;

    /// Store a document under a key, replacing whatever was there.
    fn set(&mut self, key: &str, value: Value);

    /// Remove a document, returning it if it existed.
    fn remove(&mut self, key: &str) -> Option<Value>;

    /// Replace the entire store with a snapshot's contents.
    fn import_snapshot(&mut self, snapshot: Snapshot);

    /// Copy the entire store out as a snapshot.
    fn export_snapshot(&self) -> Snapshot;
}

/// HashMap-backed store, the only implementation the site needs.
#[derive(Debug, Default)]
pub struct InMemoryContentStore {
    entries: HashMap<String, Value>,
}

impl InMemoryContentStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated from a snapshot.
    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        Self {
            entries: snapshot.entries,
        }
    }

    /// Get a document or a keyed error, for callers that treat absence as
    /// a failure.
    pub fn try_get(&self, key: &str) -> Result<&Value> {
        self.entries.get(key).ok_or_else(|| ContentStoreError::MissingKey {
            key: key.to_string(),
        })
    }

    /// Number of stored documents.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ContentRepository for InMemoryContentStore {
    fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    fn set(&mut self, key: &str, value: Value) {
        tracing::debug!("Storing content under key: {}", key);
        self.entries.insert(key.to_string(), value);
    }

    fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries.remove(key)
    }

    fn import_snapshot(&mut self, snapshot: Snapshot) {
        tracing::debug!(
            "Importing snapshot with {} entries (replacing {})",
            snapshot.entries.len(),
            self.entries.len()
        );
        self.entries = snapshot.entries;
    }

    fn export_snapshot(&self) -> Snapshot {
        Snapshot {
            entries: self.entries.clone(),
        }
    }
}
