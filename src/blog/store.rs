//! Blog storage.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use thiserror::Error;

use super::model::Blog;

#[derive(Debug, Error)]
pub enum StoreError {
    /// A writer panicked while holding the lock.
    #[error("blog store lock poisoned")]
    Poisoned,
}

impl<T> From<PoisonError<T>> for StoreError {
    fn from(_: PoisonError<T>) -> Self {
        Self::Poisoned
    }
}

/// Keyed storage for blogs, shared by every request handler.
pub trait BlogStore: Send + Sync + 'static {
    fn get(&self, id: &str) -> Result<Option<Blog>, StoreError>;

    /// Inserts `blog` under its id, replacing any previous entry.
    fn put(&self, blog: Blog) -> Result<(), StoreError>;

    /// Removes and returns the blog stored under `id`.
    fn delete(&self, id: &str) -> Result<Option<Blog>, StoreError>;
}

/// In-process store. Contents live until deleted or the process exits.
#[derive(Debug, Default)]
pub struct MemoryStore {
    blogs: RwLock<HashMap<String, Blog>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BlogStore for MemoryStore {
    fn get(&self, id: &str) -> Result<Option<Blog>, StoreError> {
        Ok(self.blogs.read()?.get(id).cloned())
    }

    fn put(&self, blog: Blog) -> Result<(), StoreError> {
        self.blogs.write()?.insert(blog.blog_id.clone(), blog);
        Ok(())
    }

    fn delete(&self, id: &str) -> Result<Option<Blog>, StoreError> {
        Ok(self.blogs.write()?.remove(id))
    }
}
