//! # Editing Session
//!
//! A [`DraftSession`] owns the one [`PostDraft`] being edited and a generation
//! counter. The generation advances every time the draft is reset (after a
//! successful submit or an explicit clear), so the draft a user sees after a
//! reset is a new "version" of the form.
//!
//! Image encoding finishes at an arbitrary later point. Before it starts, the
//! caller takes a [`DraftToken`]; when the encode completes the payload is only
//! applied if the token still matches the current generation. A late result
//! that belongs to a form the user already submitted or cleared is dropped
//! instead of attaching itself to the fresh draft.
//!
//! Field edits made while an encode is running do not touch the generation, so
//! they survive; completion only ever writes `image_payload`.

use crate::model::{PostDraft, PostType};
use std::sync::{Mutex, MutexGuard, PoisonError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DraftToken {
    generation: u64,
}

impl DraftToken {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[derive(Debug, Default)]
struct DraftState {
    draft: PostDraft,
    generation: u64,
}

#[derive(Debug, Default)]
pub struct DraftSession {
    state: Mutex<DraftState>,
}

impl DraftSession {
    pub fn new() -> Self {
        Self::default()
    }

    // Guards are never held across an await, so a poisoned lock still holds a
    // consistent draft.
    fn lock(&self) -> MutexGuard<'_, DraftState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// A consistent copy of the draft as it is right now.
    pub fn snapshot(&self) -> PostDraft {
        self.lock().draft.clone()
    }

    pub fn edit<F: FnOnce(&mut PostDraft)>(&self, f: F) {
        f(&mut self.lock().draft);
    }

    pub fn set_title(&self, title: impl Into<String>) {
        let title = title.into();
        self.edit(|d| d.title = title);
    }

    pub fn set_description(&self, description: impl Into<String>) {
        let description = description.into();
        self.edit(|d| d.description = description);
    }

    pub fn set_tags(&self, tags_raw: impl Into<String>) {
        let tags_raw = tags_raw.into();
        self.edit(|d| d.tags_raw = tags_raw);
    }

    pub fn set_type(&self, post_type: PostType) {
        self.edit(|d| d.post_type = post_type);
    }

    pub fn token(&self) -> DraftToken {
        DraftToken {
            generation: self.lock().generation,
        }
    }

    pub fn generation(&self) -> u64 {
        self.lock().generation
    }

    /// Applies an encode result that was started under `token`.
    ///
    /// Returns false, leaving the draft untouched, when the draft has been reset
    /// since the token was taken.
    pub fn apply_image(&self, token: DraftToken, payload: Option<String>) -> bool {
        let mut state = self.lock();
        if state.generation != token.generation {
            tracing::warn!(
                stale = token.generation,
                current = state.generation,
                "dropping image for a draft that no longer exists"
            );
            return false;
        }
        state.draft.image_payload = payload;
        true
    }

    /// Empties the form and starts a new generation.
    pub fn reset(&self) {
        let mut state = self.lock();
        state.draft.reset();
        state.generation += 1;
        tracing::debug!(generation = state.generation, "draft reset");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setters_update_fields() {
        let session = DraftSession::new();
        session.set_title("T");
        session.set_description("D");
        session.set_tags("a,b");
        session.set_type(PostType::Article);

        let draft = session.snapshot();
        assert_eq!(draft.title, "T");
        assert_eq!(draft.description, "D");
        assert_eq!(draft.tags_raw, "a,b");
        assert_eq!(draft.post_type, PostType::Article);
    }

    #[test]
    fn image_applies_with_current_token() {
        let session = DraftSession::new();
        let token = session.token();
        assert!(session.apply_image(token, Some("data:image/png;base64,AA==".into())));
        assert_eq!(
            session.snapshot().image_payload.as_deref(),
            Some("data:image/png;base64,AA==")
        );
    }

    #[test]
    fn image_only_overwrites_payload() {
        let session = DraftSession::new();
        let token = session.token();
        // user keeps typing while the file is read
        session.set_title("typed during encode");
        session.set_tags("x");

        assert!(session.apply_image(token, Some("payload".into())));
        let draft = session.snapshot();
        assert_eq!(draft.title, "typed during encode");
        assert_eq!(draft.tags_raw, "x");
        assert_eq!(draft.image_payload.as_deref(), Some("payload"));
    }

    #[test]
    fn stale_token_is_ignored_after_reset() {
        let session = DraftSession::new();
        let token = session.token();
        session.set_title("old");
        session.reset();
        session.set_title("new");

        assert!(!session.apply_image(token, Some("late".into())));
        let draft = session.snapshot();
        assert_eq!(draft.title, "new");
        assert_eq!(draft.image_payload, None);
    }

    #[test]
    fn reset_clears_and_bumps_generation() {
        let session = DraftSession::new();
        session.set_title("T");
        session.apply_image(session.token(), Some("img".into()));
        let before = session.generation();

        session.reset();
        assert_eq!(session.snapshot(), PostDraft::default());
        assert_eq!(session.generation(), before + 1);
    }

    #[test]
    fn none_payload_clears_image() {
        let session = DraftSession::new();
        session.apply_image(session.token(), Some("img".into()));
        assert!(session.apply_image(session.token(), None));
        assert_eq!(session.snapshot().image_payload, None);
    }
}
