//! # API Facade
//!
//! [`PostApi`] is the single entry point for one editing session, whatever UI
//! drives it. It owns the draft, the status channel and the submission
//! controller, and dispatches to the command modules.
//!
//! ## Role and Responsibilities
//!
//! - **Routes field edits** into the draft
//! - **Dispatches** attach, submit and list to `commands/*.rs`
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! No business logic, no terminal I/O, no formatting beyond the status text the
//! commands produce.
//!
//! ## Generic Over DocumentStore
//!
//! - Production: `PostApi<FileStore>`
//! - Testing: `PostApi<InMemoryStore>`
//!
//! The store is passed in as an `Arc` so one handle built at startup can be
//! shared by every session.
//!
//! All methods take `&self`; a UI may keep editing fields while an image is
//! loading or a submission is pending.

use crate::commands::submit::{SubmissionController, SubmissionState};
use crate::commands::{self, CmdResult};
use crate::draft::DraftSession;
use crate::error::Result;
use crate::image::ImageSource;
use crate::model::{PostDraft, PostType};
use crate::status::{StatusChannel, StatusMessage};
use crate::store::DocumentStore;
use std::sync::Arc;

pub use crate::commands::config::ConfigAction;
pub use crate::commands::{CmdMessage, MessageLevel};

pub struct PostApi<S: DocumentStore> {
    store: Arc<S>,
    session: DraftSession,
    status: StatusChannel,
    controller: SubmissionController<S>,
}

impl<S: DocumentStore> PostApi<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self {
            controller: SubmissionController::new(store.clone()),
            store,
            session: DraftSession::new(),
            status: StatusChannel::new(),
        }
    }

    pub fn draft(&self) -> PostDraft {
        self.session.snapshot()
    }

    pub fn set_title(&self, title: impl Into<String>) {
        self.session.set_title(title);
    }

    pub fn set_description(&self, description: impl Into<String>) {
        self.session.set_description(description);
    }

    pub fn set_tags(&self, tags_raw: impl Into<String>) {
        self.session.set_tags(tags_raw);
    }

    pub fn set_type(&self, post_type: PostType) {
        self.session.set_type(post_type);
    }

    /// Whether submit should be enabled right now.
    pub fn can_submit(&self) -> bool {
        !self.controller.state().is_pending() && self.session.snapshot().can_submit()
    }

    pub async fn attach_image(&self, source: &ImageSource) -> Result<CmdResult> {
        commands::attach::run(&self.session, &self.status, source).await
    }

    pub async fn submit(&self) -> Result<CmdResult> {
        let created = self.controller.submit(&self.session, &self.status).await?;
        let mut result = CmdResult::default();
        if let Some(status) = self.status.current() {
            result.add_message(status.into());
        }
        Ok(result.with_created(created))
    }

    /// The user pressed "clear": empty form, no image, no status line.
    pub fn clear(&self) {
        self.session.reset();
        self.status.clear();
    }

    pub fn status(&self) -> Option<StatusMessage> {
        self.status.current()
    }

    pub fn submission_state(&self) -> SubmissionState {
        self.controller.state()
    }

    pub async fn list_posts(&self) -> Result<CmdResult> {
        commands::list::run(self.store.as_ref()).await
    }
}
