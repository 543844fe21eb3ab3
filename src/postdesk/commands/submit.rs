//! # Submission
//!
//! [`SubmissionController`] turns the current draft into a stored post:
//!
//! 1. Validate: title and description must be non-empty. The boundary layer
//!    normally keeps submit disabled until they are, but the controller checks
//!    again and never calls the store on a draft that fails.
//! 2. Assemble a [`PostRecord`] (tags parsed from the raw field, everything
//!    else copied verbatim).
//! 3. Call [`DocumentStore::create`] once. No retries.
//! 4. Publish the outcome on the status channel. Store failures are surfaced
//!    with the store's reason unchanged.
//! 5. On success only, reset the draft (which also drops the attached image).
//!
//! ## State machine
//!
//! ```text
//!   Idle ─► Validating ─► Submitting ─► Succeeded
//!              │              │
//!              └──────────────┴───────► Failed
//! ```
//!
//! `Validating` and `Submitting` are the pending states. A `submit` that
//! arrives while the controller is pending is rejected with
//! [`SubmissionError::InFlight`] and writes nothing. `Succeeded` and `Failed`
//! accept a new attempt, which clears the status channel first.
//!
//! If the submit future is dropped mid-flight the controller falls back to
//! `Idle`; the write itself may or may not have landed.

use crate::draft::DraftSession;
use crate::error::SubmissionError;
use crate::model::{CreatedPost, PostRecord};
use crate::status::{StatusChannel, StatusMessage};
use crate::store::DocumentStore;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Validating,
    Submitting,
    Succeeded,
    Failed,
}

impl SubmissionState {
    pub fn is_pending(&self) -> bool {
        matches!(self, SubmissionState::Validating | SubmissionState::Submitting)
    }
}

pub struct SubmissionController<S: DocumentStore> {
    store: Arc<S>,
    state: Mutex<SubmissionState>,
}

/// Marks the controller pending for as long as it lives.
struct Pending<'a> {
    state: &'a Mutex<SubmissionState>,
    settled: bool,
}

impl Pending<'_> {
    fn advance(&self, next: SubmissionState) {
        *lock(self.state) = next;
    }

    fn settle(mut self, outcome: SubmissionState) {
        self.settled = true;
        *lock(self.state) = outcome;
    }
}

impl Drop for Pending<'_> {
    fn drop(&mut self) {
        if !self.settled {
            *lock(self.state) = SubmissionState::Idle;
        }
    }
}

fn lock(state: &Mutex<SubmissionState>) -> MutexGuard<'_, SubmissionState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

impl<S: DocumentStore> SubmissionController<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            state: Mutex::new(SubmissionState::Idle),
        }
    }

    pub fn state(&self) -> SubmissionState {
        *lock(&self.state)
    }

    fn begin(&self) -> Result<Pending<'_>, SubmissionError> {
        let mut state = lock(&self.state);
        if state.is_pending() {
            return Err(SubmissionError::InFlight);
        }
        *state = SubmissionState::Validating;
        Ok(Pending {
            state: &self.state,
            settled: false,
        })
    }

    pub async fn submit(
        &self,
        session: &DraftSession,
        status: &StatusChannel,
    ) -> Result<CreatedPost, SubmissionError> {
        let pending = match self.begin() {
            Ok(pending) => pending,
            Err(err) => {
                tracing::debug!("submit ignored, another submission is pending");
                return Err(err);
            }
        };
        status.clear();

        let draft = session.snapshot();
        if let Err(err) = draft.validate() {
            tracing::debug!(%err, "draft failed validation");
            pending.settle(SubmissionState::Failed);
            return Err(err.into());
        }

        let record = PostRecord::from_draft(&draft);
        pending.advance(SubmissionState::Submitting);

        match self.store.create(&record).await {
            Ok(created) => {
                tracing::info!(id = %created.id, post_type = %record.post_type, "post created");
                session.reset();
                status.publish(StatusMessage::success(format!(
                    "Post created successfully! Document ID: {}",
                    created.id
                )));
                pending.settle(SubmissionState::Succeeded);
                Ok(created)
            }
            Err(err) => {
                tracing::warn!(reason = %err.reason, "creating post failed");
                status.publish(StatusMessage::error(format!(
                    "Error creating post: {}",
                    err.reason
                )));
                pending.settle(SubmissionState::Failed);
                Err(err.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use crate::model::{PostDraft, PostType};
    use crate::status::StatusKind;
    use crate::store::memory::InMemoryStore;

    struct Fixture {
        store: Arc<InMemoryStore>,
        controller: SubmissionController<InMemoryStore>,
        session: DraftSession,
        status: StatusChannel,
    }

    fn fixture(store: InMemoryStore) -> Fixture {
        let store = Arc::new(store);
        Fixture {
            controller: SubmissionController::new(store.clone()),
            store,
            session: DraftSession::new(),
            status: StatusChannel::new(),
        }
    }

    fn fill(session: &DraftSession) {
        session.set_title("Q1");
        session.set_description("D1");
        session.set_tags("x, y");
        session.set_type(PostType::Question);
    }

    #[tokio::test]
    async fn test_success_stores_record_and_resets_draft() {
        let f = fixture(InMemoryStore::new());
        fill(&f.session);
        f.session.set_type(PostType::Article);
        f.session
            .apply_image(f.session.token(), Some("data:image/png;base64,AA==".into()));

        let created = f.controller.submit(&f.session, &f.status).await.unwrap();

        let posts = f.store.posts();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].id, created.id);
        assert_eq!(posts[0].record.post_type, PostType::Article);
        assert_eq!(
            posts[0].record.image_payload.as_deref(),
            Some("data:image/png;base64,AA==")
        );

        assert_eq!(f.session.snapshot(), PostDraft::default());
        assert_eq!(f.controller.state(), SubmissionState::Succeeded);
    }

    #[tokio::test]
    async fn test_success_publishes_document_id() {
        let f = fixture(InMemoryStore::new());
        fill(&f.session);

        let created = f.controller.submit(&f.session, &f.status).await.unwrap();
        let status = f.status.current().unwrap();
        assert_eq!(status.kind, StatusKind::Success);
        assert_eq!(
            status.text,
            format!("Post created successfully! Document ID: {}", created.id)
        );
    }

    #[tokio::test]
    async fn test_store_failure_keeps_draft_and_reason() {
        let f = fixture(InMemoryStore::failing("permission-denied"));
        fill(&f.session);
        f.session.apply_image(f.session.token(), Some("img".into()));
        let before = f.session.snapshot();

        let err = f.controller.submit(&f.session, &f.status).await.unwrap_err();

        assert_eq!(
            err,
            SubmissionError::Store(crate::error::StoreError::new("permission-denied"))
        );
        assert_eq!(f.session.snapshot(), before);
        assert_eq!(
            f.status.current(),
            Some(StatusMessage::error("Error creating post: permission-denied"))
        );
        assert_eq!(f.controller.state(), SubmissionState::Failed);
    }

    #[tokio::test]
    async fn test_retry_after_failure() {
        let f = fixture(InMemoryStore::failing("offline"));
        fill(&f.session);

        assert!(f.controller.submit(&f.session, &f.status).await.is_err());
        f.store.set_failure(None);
        assert!(f.controller.submit(&f.session, &f.status).await.is_ok());

        assert_eq!(f.store.create_calls(), 2);
        assert_eq!(f.store.posts().len(), 1);
    }

    #[tokio::test]
    async fn test_empty_title_never_reaches_store() {
        let f = fixture(InMemoryStore::new());
        f.session.set_description("D1");

        let err = f.controller.submit(&f.session, &f.status).await.unwrap_err();
        assert_eq!(err, SubmissionError::Validation(ValidationError::MissingTitle));
        assert_eq!(f.store.create_calls(), 0);
        assert_eq!(f.session.snapshot().description, "D1");
        assert_eq!(f.controller.state(), SubmissionState::Failed);
    }

    #[tokio::test]
    async fn test_empty_description_never_reaches_store() {
        let f = fixture(InMemoryStore::new());
        f.session.set_title("Q1");

        let err = f.controller.submit(&f.session, &f.status).await.unwrap_err();
        assert_eq!(
            err,
            SubmissionError::Validation(ValidationError::MissingDescription)
        );
        assert_eq!(f.store.create_calls(), 0);
    }

    #[tokio::test]
    async fn test_new_attempt_clears_previous_status() {
        let f = fixture(InMemoryStore::failing("offline"));
        fill(&f.session);
        let _ = f.controller.submit(&f.session, &f.status).await;
        assert!(f.status.current().is_some());

        f.session.set_title("");
        let _ = f.controller.submit(&f.session, &f.status).await;
        assert_eq!(f.status.current(), None);
    }

    #[tokio::test]
    async fn test_concurrent_submits_write_once() {
        let f = fixture(InMemoryStore::new());
        fill(&f.session);

        let (first, second) = tokio::join!(
            f.controller.submit(&f.session, &f.status),
            f.controller.submit(&f.session, &f.status)
        );

        assert!(first.is_ok());
        assert_eq!(second, Err(SubmissionError::InFlight));
        assert_eq!(f.store.create_calls(), 1);
        assert_eq!(f.store.posts().len(), 1);
    }

    #[tokio::test]
    async fn test_dropped_submit_returns_to_idle() {
        let f = fixture(InMemoryStore::new());
        fill(&f.session);

        {
            let fut = f.controller.submit(&f.session, &f.status);
            tokio::pin!(fut);
            // first poll parks inside the store call
            assert!(poll_once(fut.as_mut()).await.is_none());
            assert_eq!(f.controller.state(), SubmissionState::Submitting);
        }

        assert_eq!(f.controller.state(), SubmissionState::Idle);
        assert!(f.controller.submit(&f.session, &f.status).await.is_ok());
    }

    async fn poll_once<F: std::future::Future + Unpin>(fut: F) -> Option<F::Output> {
        tokio::select! {
            biased;
            out = fut => Some(out),
            _ = std::future::ready(()) => None,
        }
    }
}
