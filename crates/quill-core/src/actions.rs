//! Action dispatcher - the create/update/delete entry points.
//!
//! Each action validates (create and update only), runs one mutation, and on
//! success invalidates the cached listing and asks the caller to navigate to
//! it. Failures come back as [`FormResult`]s for re-display; nothing here is
//! returned as an `Err`.

use std::sync::Arc;

use crate::form::FormResult;
use crate::mutation;
use crate::ports::{PageCache, PostRepository};
use crate::validation::{PostInput, validate_post};

/// Logical path of the post listing view.
pub const LISTING_PATH: &str = "/";

/// What the caller should do after an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The mutation committed; navigate to this path.
    Redirect(&'static str),
    /// The submission broke a field constraint. Storage was not touched.
    ValidationFailed(FormResult),
    /// Storage rejected the mutation.
    PersistenceFailed(FormResult),
}

impl ActionOutcome {
    /// The error report, if the action failed.
    pub fn form_result(&self) -> Option<&FormResult> {
        match self {
            ActionOutcome::Redirect(_) => None,
            ActionOutcome::ValidationFailed(result) | ActionOutcome::PersistenceFailed(result) => {
                Some(result)
            }
        }
    }
}

/// Post mutations wired to their collaborators.
#[derive(Clone)]
pub struct PostActions {
    posts: Arc<dyn PostRepository>,
    cache: Arc<dyn PageCache>,
}

impl PostActions {
    pub fn new(posts: Arc<dyn PostRepository>, cache: Arc<dyn PageCache>) -> Self {
        Self { posts, cache }
    }

    #[tracing::instrument(name = "create_post", skip_all)]
    pub async fn create(&self, input: PostInput) -> ActionOutcome {
        let fields = match validate_post(input) {
            Ok(fields) => fields,
            Err(errors) => return ActionOutcome::ValidationFailed(errors),
        };

        match mutation::create(self.posts.as_ref(), fields).await {
            Ok(post) => {
                tracing::info!(post_id = %post.id, "Post created");
                self.commit().await
            }
            Err(errors) => ActionOutcome::PersistenceFailed(errors),
        }
    }

    #[tracing::instrument(name = "update_post", skip(self, input))]
    pub async fn update(&self, id: &str, input: PostInput) -> ActionOutcome {
        let fields = match validate_post(input) {
            Ok(fields) => fields,
            Err(errors) => return ActionOutcome::ValidationFailed(errors),
        };

        match mutation::update(self.posts.as_ref(), id, fields).await {
            Ok(post) => {
                tracing::info!(post_id = %post.id, "Post updated");
                self.commit().await
            }
            Err(errors) => ActionOutcome::PersistenceFailed(errors),
        }
    }

    #[tracing::instrument(name = "delete_post", skip(self))]
    pub async fn delete(&self, id: &str) -> ActionOutcome {
        match mutation::delete(self.posts.as_ref(), id).await {
            Ok(post) => {
                tracing::info!(post_id = %post.id, "Post deleted");
                self.commit().await
            }
            Err(errors) => ActionOutcome::PersistenceFailed(errors),
        }
    }

    async fn commit(&self) -> ActionOutcome {
        // The write has committed; a failed invalidation only leaves a stale listing.
        if let Err(e) = self.cache.invalidate(LISTING_PATH).await {
            tracing::warn!(error = %e, path = LISTING_PATH, "Failed to invalidate cached listing");
        }
        ActionOutcome::Redirect(LISTING_PATH)
    }
}
