use super::DocumentStore;
use crate::error::StoreError;
use crate::model::{CreatedPost, PersistedPost, PostRecord};
use async_trait::async_trait;
use chrono::Utc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};
use uuid::Uuid;

/// In-memory document store for testing.
///
/// `create` yields to the runtime once before writing, like a network round
/// trip would, so tests can observe a submission while it is pending.
#[derive(Default)]
pub struct InMemoryStore {
    posts: Mutex<Vec<PersistedPost>>,
    create_calls: AtomicUsize,
    failure: Mutex<Option<String>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every `create` fails with `reason`.
    pub fn failing(reason: impl Into<String>) -> Self {
        let store = Self::default();
        store.set_failure(Some(reason.into()));
        store
    }

    /// Enable (or with `None`, disable) write error simulation.
    pub fn set_failure(&self, reason: Option<String>) {
        *lock(&self.failure) = reason;
    }

    /// How many times `create` was invoked, failed calls included.
    pub fn create_calls(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }

    pub fn posts(&self) -> Vec<PersistedPost> {
        lock(&self.posts).clone()
    }
}

#[async_trait]
impl DocumentStore for InMemoryStore {
    async fn create(&self, record: &PostRecord) -> Result<CreatedPost, StoreError> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        tokio::task::yield_now().await;

        if let Some(reason) = lock(&self.failure).clone() {
            return Err(StoreError::new(reason));
        }

        let post = PersistedPost::new(Uuid::new_v4().to_string(), record.clone(), Utc::now());
        let receipt = post.receipt();
        lock(&self.posts).push(post);
        Ok(receipt)
    }

    async fn list(&self) -> Result<Vec<PersistedPost>, StoreError> {
        Ok(self.posts())
    }
}
