use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use models::tag;

use crate::errors::ServiceError;

#[async_trait]
pub trait TagRepository: Send + Sync {
    /// Every stored tag in storage order.
    async fn list_tags(&self) -> Result<Vec<tag::Model>, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmTagRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl TagRepository for SeaOrmTagRepository {
    async fn list_tags(&self) -> Result<Vec<tag::Model>, ServiceError> {
        Ok(tag::list_all(&self.db).await?)
    }
}
