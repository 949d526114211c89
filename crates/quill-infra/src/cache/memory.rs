//! In-memory page cache.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tokio::sync::RwLock;

use quill_core::ports::{CacheError, PageCache};

struct CachedPage {
    body: String,
    expires_at: Option<Instant>,
}

impl CachedPage {
    fn is_expired(&self) -> bool {
        self.expires_at
            .map(|exp| Instant::now() > exp)
            .unwrap_or(false)
    }
}

#[derive(Default)]
struct Slot {
    generation: u64,
    page: Option<CachedPage>,
}

/// Rendered pages keyed by path, held in a `HashMap` behind an async `RwLock`.
pub struct InMemoryPageCache {
    slots: RwLock<HashMap<String, Slot>>,
}

impl InMemoryPageCache {
    pub fn new() -> Self {
        Self {
            slots: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryPageCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PageCache for InMemoryPageCache {
    async fn get(&self, path: &str) -> Option<String> {
        let slots = self.slots.read().await;
        let page = slots.get(path)?.page.as_ref()?;

        if page.is_expired() {
            drop(slots);
            let mut slots = self.slots.write().await;
            // Re-check under the write lock; a fresh page may have replaced it.
            if let Some(slot) = slots.get_mut(path) {
                if slot.page.as_ref().is_some_and(CachedPage::is_expired) {
                    slot.page = None;
                }
            }
            return None;
        }

        Some(page.body.clone())
    }

    async fn generation(&self, path: &str) -> u64 {
        let slots = self.slots.read().await;
        slots.get(path).map_or(0, |slot| slot.generation)
    }

    async fn store(
        &self,
        path: &str,
        body: &str,
        ttl: Option<Duration>,
        generation: u64,
    ) -> Result<bool, CacheError> {
        let mut slots = self.slots.write().await;
        let slot = slots.entry(path.to_string()).or_default();

        if slot.generation != generation {
            tracing::debug!(path, generation, current = slot.generation, "Discarded stale render");
            return Ok(false);
        }

        slot.page = Some(CachedPage {
            body: body.to_string(),
            expires_at: ttl.map(|d| Instant::now() + d),
        });
        Ok(true)
    }

    async fn invalidate(&self, path: &str) -> Result<(), CacheError> {
        let mut slots = self.slots.write().await;
        let slot = slots.entry(path.to_string()).or_default();
        slot.generation += 1;
        if slot.page.take().is_some() {
            tracing::debug!(path, "Invalidated cached page");
        }
        Ok(())
    }
}
