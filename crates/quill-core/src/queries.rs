//! Read accessors used by the presentation layer.

use crate::domain::{Post, parse_post_id};
use crate::error::DomainError;
use crate::ports::PostRepository;

/// Every post, most recently updated first.
pub async fn list_posts(posts: &dyn PostRepository) -> Result<Vec<Post>, DomainError> {
    Ok(posts.find_all().await?)
}

/// A single post.
///
/// A miss is reported as [`DomainError::NotFound`] so callers can route it to
/// a not-found page instead of treating it like a storage failure.
pub async fn get_post(posts: &dyn PostRepository, id: &str) -> Result<Post, DomainError> {
    let not_found = || DomainError::NotFound {
        entity_type: "Post",
        id: id.to_string(),
    };

    let id = parse_post_id(id).ok_or_else(not_found)?;
    posts.find_by_id(id).await?.ok_or_else(not_found)
}
