//! Recording collaborators for pipeline tests.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Post, PostFields};
use crate::error::RepoError;
use crate::ports::{BaseRepository, CacheError, PageCache, PostRepository};

/// In-process repository that counts every call made through the port.
#[derive(Default)]
pub struct RecordingRepository {
    posts: Mutex<HashMap<Uuid, Post>>,
    created: Mutex<Vec<PostFields>>,
    calls: AtomicUsize,
    deleted: AtomicUsize,
    failure: Option<fn() -> RepoError>,
}

impl RecordingRepository {
    /// A repository whose every call fails with the error `make` builds.
    pub fn failing(make: fn() -> RepoError) -> Self {
        Self {
            failure: Some(make),
            ..Self::default()
        }
    }

    /// Insert a post directly, bypassing the call counter.
    pub fn seed(&self) -> Uuid {
        let post = Post::new(PostFields {
            title: "Seeded post".to_string(),
            content: "Seeded content body".to_string(),
        });
        let id = post.id;
        self.posts.lock().unwrap().insert(id, post);
        id
    }

    pub fn insert(&self, post: Post) {
        self.posts.lock().unwrap().insert(post.id, post);
    }

    pub fn get(&self, id: Uuid) -> Option<Post> {
        self.posts.lock().unwrap().get(&id).cloned()
    }

    pub fn created(&self) -> Vec<PostFields> {
        self.created.lock().unwrap().clone()
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn deleted(&self) -> usize {
        self.deleted.load(Ordering::SeqCst)
    }

    fn enter(&self) -> Result<(), RepoError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.failure {
            Some(make) => Err(make()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl BaseRepository<Post, Uuid> for RecordingRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError> {
        self.enter()?;
        Ok(self.get(id))
    }

    async fn delete(&self, id: Uuid) -> Result<Post, RepoError> {
        self.enter()?;
        let removed = self.posts.lock().unwrap().remove(&id);
        let post = removed.ok_or(RepoError::NotFound)?;
        self.deleted.fetch_add(1, Ordering::SeqCst);
        Ok(post)
    }
}

#[async_trait]
impl PostRepository for RecordingRepository {
    async fn create(&self, fields: PostFields) -> Result<Post, RepoError> {
        self.enter()?;
        self.created.lock().unwrap().push(fields.clone());
        let post = Post::new(fields);
        self.insert(post.clone());
        Ok(post)
    }

    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        self.enter()?;
        let mut posts: Vec<Post> = self.posts.lock().unwrap().values().cloned().collect();
        posts.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(posts)
    }

    async fn update(&self, id: Uuid, fields: PostFields) -> Result<Post, RepoError> {
        self.enter()?;
        let mut posts = self.posts.lock().unwrap();
        let post = posts.get_mut(&id).ok_or(RepoError::NotFound)?;
        post.apply(fields);
        Ok(post.clone())
    }
}

/// Page cache that remembers which paths were invalidated.
#[derive(Default)]
pub struct RecordingCache {
    invalidated: Mutex<Vec<String>>,
    broken: bool,
}

impl RecordingCache {
    /// A cache whose invalidations always fail.
    pub fn broken() -> Self {
        Self {
            broken: true,
            ..Self::default()
        }
    }

    pub fn invalidated(&self) -> Vec<String> {
        self.invalidated.lock().unwrap().clone()
    }
}

#[async_trait]
impl PageCache for RecordingCache {
    async fn get(&self, _path: &str) -> Option<String> {
        None
    }

    async fn generation(&self, _path: &str) -> u64 {
        self.invalidated.lock().unwrap().len() as u64
    }

    async fn store(
        &self,
        _path: &str,
        _body: &str,
        _ttl: Option<Duration>,
        _generation: u64,
    ) -> Result<bool, CacheError> {
        Ok(false)
    }

    async fn invalidate(&self, path: &str) -> Result<(), CacheError> {
        if self.broken {
            return Err(CacheError::Connection("cache offline".to_string()));
        }
        self.invalidated.lock().unwrap().push(path.to_string());
        Ok(())
    }
}
