use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Post, PostFields};
use crate::error::RepoError;

/// Generic repository trait for lookups and removal by ID.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Delete an entity by its ID, returning what was removed.
    ///
    /// Fails with [`RepoError::NotFound`] when nothing matches.
    async fn delete(&self, id: ID) -> Result<T, RepoError>;
}

/// Post repository - the storage collaborator of the mutation pipeline.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, Uuid> {
    /// Insert a new post. Storage assigns the ID and timestamps.
    async fn create(&self, fields: PostFields) -> Result<Post, RepoError>;

    /// All posts, most recently updated first.
    async fn find_all(&self) -> Result<Vec<Post>, RepoError>;

    /// Overwrite title and content and bump `updated_at`.
    ///
    /// Fails with [`RepoError::NotFound`] when nothing matches.
    async fn update(&self, id: Uuid, fields: PostFields) -> Result<Post, RepoError>;
}
