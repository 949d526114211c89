use async_trait::async_trait;
use std::time::Duration;

/// Cache of rendered views, keyed by the logical path they were rendered for.
///
/// Every invalidation advances the path's generation. A render is stored
/// against the generation observed before it read storage, so a render that
/// raced a mutation is discarded instead of outliving it.
#[async_trait]
pub trait PageCache: Send + Sync {
    /// Get the cached body for a path, if present and fresh.
    async fn get(&self, path: &str) -> Option<String>;

    /// Current generation of a path. Unknown paths are at generation 0.
    async fn generation(&self, path: &str) -> u64;

    /// Store a body rendered at `generation`, with optional TTL.
    ///
    /// Returns `false` without storing when the path has been invalidated
    /// since `generation` was read.
    async fn store(
        &self,
        path: &str,
        body: &str,
        ttl: Option<Duration>,
        generation: u64,
    ) -> Result<bool, CacheError>;

    /// Mark the cached output for a path as stale.
    async fn invalidate(&self, path: &str) -> Result<(), CacheError>;
}

/// Cache operation errors.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("Connection failed: {0}")]
    Connection(String),

    #[error("Operation failed: {0}")]
    Operation(String),
}
