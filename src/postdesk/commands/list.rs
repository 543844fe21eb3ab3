use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::DocumentStore;

/// Stored posts, newest first.
pub async fn run<S: DocumentStore>(store: &S) -> Result<CmdResult> {
    let mut posts = store.list().await?;
    posts.sort_by(|a, b| {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| a.id.cmp(&b.id))
    });
    Ok(CmdResult::default().with_listed_posts(posts))
}
