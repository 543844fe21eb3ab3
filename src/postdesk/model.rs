use crate::error::ValidationError;
use crate::tags::parse_tags;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostType {
    #[default]
    Question,
    Article,
}

impl PostType {
    pub fn label(&self) -> &'static str {
        match self {
            PostType::Question => "question",
            PostType::Article => "article",
        }
    }
}

impl fmt::Display for PostType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PostType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "question" | "q" => Ok(PostType::Question),
            "article" | "a" => Ok(PostType::Article),
            other => Err(format!(
                "Unknown post type '{}' (expected 'question' or 'article')",
                other
            )),
        }
    }
}

/// The in-progress, unsaved post.
///
/// `image_payload` is either `None` or a complete encoded image; the encoder
/// never leaves a partial value behind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostDraft {
    pub title: String,
    pub description: String,
    pub tags_raw: String,
    pub post_type: PostType,
    pub image_payload: Option<String>,
}

impl PostDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Back to the state of a freshly opened form.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Whether the form would let the user press submit.
    pub fn can_submit(&self) -> bool {
        self.validate().is_ok()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.is_empty() {
            return Err(ValidationError::MissingTitle);
        }
        if self.description.is_empty() {
            return Err(ValidationError::MissingDescription);
        }
        Ok(())
    }
}

/// The client-assembled part of a post, as handed to the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostRecord {
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub post_type: PostType,
    pub tags: Vec<String>,
    pub image_payload: Option<String>,
}

impl PostRecord {
    pub fn from_draft(draft: &PostDraft) -> Self {
        Self {
            title: draft.title.clone(),
            description: draft.description.clone(),
            post_type: draft.post_type,
            tags: parse_tags(&draft.tags_raw),
            image_payload: draft.image_payload.clone(),
        }
    }
}

/// A post as it lives in the store.
///
/// The id is the document key and is not part of the serialized document;
/// both timestamps are assigned by the store at write time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedPost {
    #[serde(skip)]
    pub id: String,
    #[serde(flatten)]
    pub record: PostRecord,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PersistedPost {
    pub fn new(id: String, record: PostRecord, now: DateTime<Utc>) -> Self {
        Self {
            id,
            record,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn receipt(&self) -> CreatedPost {
        CreatedPost {
            id: self.id.clone(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// What the store hands back after a successful create.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedPost {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
