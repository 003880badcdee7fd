//! In-memory post store - used when no database is configured, and by tests.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use blog_core::domain::{BlogPost, PostChanges};
use blog_core::error::RepoError;
use blog_core::ports::{BaseRepository, PostRepository};

/// In-memory post store backed by an insertion-ordered `Vec` behind an
/// async RwLock.
///
/// Note: Data is lost on process restart.
pub struct InMemoryPostRepository {
    posts: RwLock<Vec<BlogPost>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            posts: RwLock::new(Vec::new()),
        }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<BlogPost, Uuid> for InMemoryPostRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<BlogPost>, RepoError> {
        let posts = self.posts.read().await;
        Ok(posts.iter().find(|p| p.id == id).cloned())
    }

    async fn save(&self, post: BlogPost) -> Result<BlogPost, RepoError> {
        let mut posts = self.posts.write().await;

        match posts.iter_mut().find(|p| p.id == post.id) {
            Some(existing) => *existing = post.clone(),
            None => posts.push(post.clone()),
        }

        Ok(post)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let mut posts = self.posts.write().await;
        let index = posts
            .iter()
            .position(|p| p.id == id)
            .ok_or(RepoError::NotFound)?;

        posts.remove(index);
        Ok(())
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn insert_many(&self, new_posts: Vec<BlogPost>) -> Result<(), RepoError> {
        let mut posts = self.posts.write().await;

        for post in &new_posts {
            if posts.iter().any(|p| p.id == post.id) {
                return Err(RepoError::Constraint(format!(
                    "post {} already exists",
                    post.id
                )));
            }
        }

        tracing::debug!(count = new_posts.len(), "Inserting posts");
        posts.extend(new_posts);
        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<BlogPost>, RepoError> {
        Ok(self.posts.read().await.clone())
    }

    async fn update_by_id(
        &self,
        id: Uuid,
        changes: PostChanges,
    ) -> Result<Option<BlogPost>, RepoError> {
        // Write lock held across lookup and update keeps the update atomic.
        let mut posts = self.posts.write().await;

        Ok(posts.iter_mut().find(|p| p.id == id).map(|post| {
            post.apply(changes);
            post.clone()
        }))
    }

    async fn count(&self) -> Result<u64, RepoError> {
        Ok(self.posts.read().await.len() as u64)
    }

    async fn clear(&self) -> Result<(), RepoError> {
        self.posts.write().await.clear();
        Ok(())
    }
}
