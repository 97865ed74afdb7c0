use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::blog::{repo::SeaOrmBlogRepository, BlogService};
use service::tag::{repository::SeaOrmTagRepository, TagService};

/// Shared handler state: the services wired on top of the pool.
#[derive(Clone)]
pub struct ServerState {
    pub blogs: Arc<BlogService<SeaOrmBlogRepository>>,
    pub tags: Arc<TagService<SeaOrmTagRepository>>,
}

impl ServerState {
    pub fn new(db: DatabaseConnection) -> Self {
        let blogs = BlogService::new(Arc::new(SeaOrmBlogRepository { db: db.clone() }));
        let tags = TagService::new(Arc::new(SeaOrmTagRepository { db }));
        Self { blogs: Arc::new(blogs), tags: Arc::new(tags) }
    }
}
