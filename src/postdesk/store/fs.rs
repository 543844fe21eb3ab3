use super::{DocumentStore, StoreConfig};
use crate::error::StoreError;
use crate::model::{CreatedPost, PersistedPost, PostRecord};
use async_trait::async_trait;
use chrono::Utc;
use std::path::{Path, PathBuf};
use tokio::fs;
use uuid::Uuid;

const DOC_EXT: &str = "json";

pub struct FileStore {
    config: StoreConfig,
}

impl FileStore {
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn document_path(&self, id: &str) -> PathBuf {
        self.config
            .collection_dir()
            .join(format!("{}.{}", id, DOC_EXT))
    }

    async fn ensure_dir(&self, path: &Path) -> Result<(), StoreError> {
        if !fs::try_exists(path).await? {
            fs::create_dir_all(path).await?;
        }
        Ok(())
    }

    async fn read_document(&self, path: &Path) -> Result<Option<PersistedPost>, StoreError> {
        let id = match path.file_stem().and_then(|s| s.to_str()) {
            Some(id) if path.extension().and_then(|e| e.to_str()) == Some(DOC_EXT) => id,
            _ => return Ok(None),
        };
        let content = fs::read_to_string(path).await?;
        let mut post: PersistedPost = serde_json::from_str(&content)?;
        post.id = id.to_string();
        Ok(Some(post))
    }
}

#[async_trait]
impl DocumentStore for FileStore {
    async fn create(&self, record: &PostRecord) -> Result<CreatedPost, StoreError> {
        let dir = self.config.collection_dir();
        self.ensure_dir(&dir).await?;

        let post = PersistedPost::new(Uuid::new_v4().to_string(), record.clone(), Utc::now());
        let content = serde_json::to_string_pretty(&post)?;

        // Atomic Write
        let tmp_path = dir.join(format!(".{}.tmp", post.id));
        fs::write(&tmp_path, content).await?;
        fs::rename(&tmp_path, self.document_path(&post.id)).await?;

        tracing::debug!(id = %post.id, dir = %dir.display(), "document written");
        Ok(post.receipt())
    }

    async fn list(&self) -> Result<Vec<PersistedPost>, StoreError> {
        let dir = self.config.collection_dir();
        if !fs::try_exists(&dir).await? {
            return Ok(Vec::new());
        }

        let mut posts = Vec::new();
        let mut entries = fs::read_dir(&dir).await?;
        while let Some(entry) = entries.next_entry().await? {
            if let Some(post) = self.read_document(&entry.path()).await? {
                posts.push(post);
            }
        }
        Ok(posts)
    }
}
