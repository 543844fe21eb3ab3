//! # Storage Layer
//!
//! Posts are written to a document store through the [`DocumentStore`] trait.
//! The store is an append-only collection: `create` takes a client-assembled
//! [`PostRecord`], assigns the document id and both timestamps on its side,
//! and hands back a [`CreatedPost`] receipt. The client never invents those
//! values.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production store on the local filesystem
//!   - One JSON document per post: `<root>/<collection>/<id>.json`
//!   - Writes go to a temp file first, then rename
//!
//! - [`memory::InMemoryStore`]: In-memory store for testing
//!   - Counts `create` calls
//!   - Can be told to fail with a given reason
//!
//! ## Sharing
//!
//! A store handle is built once from an immutable [`StoreConfig`] and shared
//! as `Arc<S>`. Records never reference each other, so concurrent sessions
//! writing to the same collection need no locking beyond what a single
//! document write does.

use crate::error::StoreError;
use crate::model::{CreatedPost, PersistedPost, PostRecord};
use async_trait::async_trait;
use std::path::PathBuf;

pub mod fs;
pub mod memory;

pub const DEFAULT_COLLECTION: &str = "posts";

/// Everything a store needs to open its collection. Fixed for the life of the
/// process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub root: PathBuf,
    pub collection: String,
}

impl StoreConfig {
    pub fn new(root: impl Into<PathBuf>, collection: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            collection: collection.into(),
        }
    }

    pub fn collection_dir(&self) -> PathBuf {
        self.root.join(&self.collection)
    }
}

#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Appends a new document and returns its store-assigned id and timestamps.
    async fn create(&self, record: &PostRecord) -> Result<CreatedPost, StoreError>;

    /// All documents in the collection, in no particular order.
    async fn list(&self) -> Result<Vec<PersistedPost>, StoreError>;
}
