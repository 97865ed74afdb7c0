use std::sync::Arc;

use tracing::{info, instrument, warn};

use super::repository::TagRepository;
use crate::errors::{log_unexpected, ServiceError};

pub const LIST_FAILED: &str = "Internal Server error occurred while getting all tags from database";

pub struct TagService<R: TagRepository> {
    repo: Arc<R>,
}

impl<R: TagRepository> TagService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// All tag descriptions in storage order; not-found when there are none.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<String>, ServiceError> {
        self.try_list().await.inspect_err(log_unexpected(LIST_FAILED))
    }

    async fn try_list(&self) -> Result<Vec<String>, ServiceError> {
        let tags = self.repo.list_tags().await?;
        if tags.is_empty() {
            let msg = "There is no tags in database".to_string();
            warn!("{}", msg);
            return Err(ServiceError::NotFound(msg));
        }
        info!(count = tags.len(), "listed tags");
        Ok(tags.into_iter().map(|t| t.tag_description).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blog::{domain::CreateBlogInput, repository::mock::MockBlogRepository, BlogService};
    use crate::tag::repository::SeaOrmTagRepository;
    use crate::test_support::get_db;

    #[tokio::test]
    async fn empty_store_is_not_found() {
        let svc = TagService::new(Arc::new(MockBlogRepository::default()));
        let err = svc.list().await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(ref m) if m == "There is no tags in database"));
    }

    #[tokio::test]
    async fn lists_descriptions_in_storage_order() {
        let repo = Arc::new(MockBlogRepository::default());
        let blogs = BlogService::new(repo.clone());
        let tags = TagService::new(repo);

        let input = |title: &str, tags: &[&str]| CreateBlogInput {
            title: title.into(),
            description: "d".into(),
            body: "b".into(),
            tag_list: tags.iter().map(|t| t.to_string()).collect(),
        };
        blogs.create(input("one", &["IOS", "Android"])).await.unwrap();
        blogs.create(input("two", &["Android", "Mac"])).await.unwrap();

        assert_eq!(tags.list().await.unwrap(), vec!["IOS", "Android", "Mac"]);
    }

    #[tokio::test]
    async fn seaorm_repository_lists_stored_tags() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let svc = TagService::new(Arc::new(SeaOrmTagRepository { db: db.clone() }));
        assert!(matches!(svc.list().await, Err(ServiceError::NotFound(_))));

        models::tag::create(&db, "IOS").await?;
        tokio::time::sleep(std::time::Duration::from_millis(2)).await;
        models::tag::create(&db, "Mac").await?;
        assert_eq!(svc.list().await?, vec!["IOS", "Mac"]);
        Ok(())
    }
}
