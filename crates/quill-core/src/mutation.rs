//! Mutation executor - one storage call per operation, failures turned into form errors.

use crate::domain::{Post, PostFields, parse_post_id};
use crate::error::RepoError;
use crate::form::FormResult;
use crate::ports::PostRepository;

/// Shown when a storage failure carries no message of its own.
pub const FALLBACK_MESSAGE: &str = "Something went wrong";

pub async fn create(posts: &dyn PostRepository, fields: PostFields) -> Result<Post, FormResult> {
    posts.create(fields).await.map_err(persistence_failure)
}

pub async fn update(
    posts: &dyn PostRepository,
    id: &str,
    fields: PostFields,
) -> Result<Post, FormResult> {
    let id = parse_post_id(id).ok_or_else(|| persistence_failure(RepoError::NotFound))?;
    posts.update(id, fields).await.map_err(persistence_failure)
}

pub async fn delete(posts: &dyn PostRepository, id: &str) -> Result<Post, FormResult> {
    let id = parse_post_id(id).ok_or_else(|| persistence_failure(RepoError::NotFound))?;
    posts.delete(id).await.map_err(persistence_failure)
}

fn persistence_failure(err: RepoError) -> FormResult {
    tracing::warn!(error = %err, "Post mutation failed");

    if err.is_opaque() {
        FormResult::form_error(FALLBACK_MESSAGE)
    } else {
        FormResult::form_error(err.to_string())
    }
}
