use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{BlogPost, PostChanges};
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID. A missing entity is `Ok(None)`.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Save an entity (create or replace).
    async fn save(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID. Fails with [`RepoError::NotFound`]
    /// when nothing was deleted.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// Blog post store.
#[async_trait]
pub trait PostRepository: BaseRepository<BlogPost, Uuid> {
    /// Store a batch of already-built posts.
    async fn insert_many(&self, posts: Vec<BlogPost>) -> Result<(), RepoError>;

    /// Every stored post, oldest first.
    async fn find_all(&self) -> Result<Vec<BlogPost>, RepoError>;

    /// Apply `changes` to the post with `id`.
    /// Returns the updated post, or `None` if there is no such post.
    async fn update_by_id(
        &self,
        id: Uuid,
        changes: PostChanges,
    ) -> Result<Option<BlogPost>, RepoError>;

    /// Number of stored posts.
    async fn count(&self) -> Result<u64, RepoError>;

    /// Remove every post.
    async fn clear(&self) -> Result<(), RepoError>;
}
