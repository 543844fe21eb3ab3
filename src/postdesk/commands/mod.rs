use crate::config::PostdeskConfig;
use crate::model::{CreatedPost, PersistedPost};
use crate::status::{StatusKind, StatusMessage};

pub mod attach;
pub mod config;
pub mod list;
pub mod submit;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

impl From<StatusMessage> for CmdMessage {
    fn from(status: StatusMessage) -> Self {
        match status.kind {
            StatusKind::Success => CmdMessage::success(status.text),
            StatusKind::Error => CmdMessage::error(status.text),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub created: Option<CreatedPost>,
    pub listed_posts: Vec<PersistedPost>,
    pub config: Option<PostdeskConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_created(mut self, created: CreatedPost) -> Self {
        self.created = Some(created);
        self
    }

    pub fn with_listed_posts(mut self, posts: Vec<PersistedPost>) -> Self {
        self.listed_posts = posts;
        self
    }

    pub fn with_config(mut self, config: PostdeskConfig) -> Self {
        self.config = Some(config);
        self
    }
}
