//! PostgreSQL post store.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DbErr, EntityTrait, PaginatorTrait, QueryOrder, Set};
use uuid::Uuid;

use blog_core::domain::{BlogPost, PostChanges};
use blog_core::error::RepoError;
use blog_core::ports::PostRepository;

use super::entity::post::{self, Entity as PostEntity};
use super::postgres_base::{PostgresBaseRepository, map_db_err};

/// PostgreSQL post repository.
pub type PostgresPostRepository = PostgresBaseRepository<PostEntity>;

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn insert_many(&self, posts: Vec<BlogPost>) -> Result<(), RepoError> {
        if posts.is_empty() {
            return Ok(());
        }

        tracing::debug!(count = posts.len(), "Inserting posts");
        let models = posts.into_iter().map(post::ActiveModel::from);

        PostEntity::insert_many(models)
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<BlogPost>, RepoError> {
        let result = PostEntity::find()
            .order_by_asc(post::Column::Created)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn update_by_id(
        &self,
        id: Uuid,
        changes: PostChanges,
    ) -> Result<Option<BlogPost>, RepoError> {
        let Some(model) = PostEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(map_db_err)?
        else {
            return Ok(None);
        };

        if changes.is_empty() {
            return Ok(Some(model.into()));
        }

        // Only supplied columns are marked dirty; id and created stay as read.
        let mut active: post::ActiveModel = model.into();
        if let Some(title) = changes.title {
            active.title = Set(title);
        }
        if let Some(content) = changes.content {
            active.content = Set(content);
        }
        if let Some(author) = changes.author {
            if let Some(first_name) = author.first_name {
                active.author_first_name = Set(first_name);
            }
            if let Some(last_name) = author.last_name {
                active.author_last_name = Set(last_name);
            }
        }

        // The row can be deleted between the read and the UPDATE.
        match active.update(&self.db).await {
            Ok(updated) => Ok(Some(updated.into())),
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(e) => Err(map_db_err(e)),
        }
    }

    async fn count(&self) -> Result<u64, RepoError> {
        PostEntity::find()
            .count(&self.db)
            .await
            .map_err(map_db_err)
    }

    async fn clear(&self) -> Result<(), RepoError> {
        let result = PostEntity::delete_many()
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;

        tracing::debug!(deleted = result.rows_affected, "Cleared posts");
        Ok(())
    }
}
