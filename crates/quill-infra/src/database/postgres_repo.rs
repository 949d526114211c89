//! PostgreSQL post repository.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::ActiveValue::{NotSet, Set, Unchanged};
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder};
use uuid::Uuid;

use quill_core::domain::{Post, PostFields};
use quill_core::error::RepoError;
use quill_core::ports::PostRepository;

use super::entity::post::{self, Entity as PostEntity};
use super::postgres_base::{PostgresBaseRepository, map_db_err};

/// PostgreSQL post repository.
pub type PostgresPostRepository = PostgresBaseRepository<PostEntity>;

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn create(&self, fields: PostFields) -> Result<Post, RepoError> {
        let active_model: post::ActiveModel = Post::new(fields).into();
        let model = active_model.insert(&self.db).await.map_err(map_db_err)?;

        tracing::debug!(post_id = %model.id, "Inserted post");
        Ok(model.into())
    }

    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        let result = PostEntity::find()
            .order_by_desc(post::Column::UpdatedAt)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn update(&self, id: Uuid, fields: PostFields) -> Result<Post, RepoError> {
        let active_model = post::ActiveModel {
            id: Unchanged(id),
            title: Set(fields.title),
            content: Set(fields.content),
            created_at: NotSet,
            updated_at: Set(Utc::now().into()),
        };

        // A missing row surfaces as `RecordNotUpdated`, which maps to `NotFound`.
        let model = PostEntity::update(active_model)
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;

        tracing::debug!(post_id = %model.id, "Updated post");
        Ok(model.into())
    }
}
