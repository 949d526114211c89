//! Application state - shared across all handlers.

use std::sync::Arc;
use std::time::Duration;

use quill_core::PostActions;
use quill_core::ports::{PageCache, PostRepository};
use quill_infra::{InMemoryPageCache, InMemoryPostRepository};

use crate::config::AppConfig;

#[cfg(feature = "postgres")]
use quill_infra::PostgresPostRepository;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
    pub cache: Arc<dyn PageCache>,
    pub actions: PostActions,
    pub listing_cache_ttl: Option<Duration>,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(config: &AppConfig) -> Self {
        let posts = Self::post_repository(config).await;
        let state = Self::with_repository(posts, config.listing_cache_ttl);

        tracing::info!("Application state initialized");
        state
    }

    /// Wire the state around an already-built repository.
    pub fn with_repository(posts: Arc<dyn PostRepository>, listing_cache_ttl: Option<Duration>) -> Self {
        let cache: Arc<dyn PageCache> = Arc::new(InMemoryPageCache::new());
        let actions = PostActions::new(posts.clone(), cache.clone());

        Self {
            posts,
            cache,
            actions,
            listing_cache_ttl,
        }
    }

    #[cfg(feature = "postgres")]
    async fn post_repository(config: &AppConfig) -> Arc<dyn PostRepository> {
        let Some(db_config) = &config.database else {
            tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
            return Arc::new(InMemoryPostRepository::new());
        };

        match quill_infra::database::connect(db_config).await {
            Ok(conn) => Arc::new(PostgresPostRepository::new(conn)),
            Err(e) => {
                tracing::error!(
                    "Failed to connect to database: {}. Using in-memory fallback.",
                    e
                );
                Arc::new(InMemoryPostRepository::new())
            }
        }
    }

    #[cfg(not(feature = "postgres"))]
    async fn post_repository(_config: &AppConfig) -> Arc<dyn PostRepository> {
        tracing::info!("Running without postgres feature - using in-memory repository");
        Arc::new(InMemoryPostRepository::new())
    }
}
