use std::collections::HashMap;

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, JoinType, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait, Set, TransactionTrait,
};
use tracing::debug;
use uuid::Uuid;

use models::{blog, blog_tag, tag};

use crate::blog::domain::{BlogChanges, BlogWithTags, NewBlog, TagRef};
use crate::blog::repository::BlogRepository;
use crate::errors::ServiceError;

pub struct SeaOrmBlogRepository {
    pub db: DatabaseConnection,
}

/// Pair every blog with its tags using one extra query for the whole batch.
async fn attach_tags<C: ConnectionTrait>(db: &C, blogs: Vec<blog::Model>) -> Result<Vec<BlogWithTags>, ServiceError> {
    let ids: Vec<Uuid> = blogs.iter().map(|b| b.id).collect();
    let mut by_blog: HashMap<Uuid, Vec<tag::Model>> = HashMap::new();
    for (link, t) in blog_tag::tags_for_blogs(db, &ids).await? {
        by_blog.entry(link.blog_id).or_default().push(t);
    }
    Ok(blogs
        .into_iter()
        .map(|blog| {
            let tags = by_blog.remove(&blog.id).unwrap_or_default();
            BlogWithTags { blog, tags }
        })
        .collect())
}

#[async_trait::async_trait]
impl BlogRepository for SeaOrmBlogRepository {
    async fn find_by_slug(&self, slug: &str) -> Result<Option<BlogWithTags>, ServiceError> {
        let Some(found) = blog::find_by_slug(&self.db, slug).await? else { return Ok(None) };
        Ok(attach_tags(&self.db, vec![found]).await?.pop())
    }

    async fn list_with_tags(&self, tag: Option<&str>) -> Result<Vec<BlogWithTags>, ServiceError> {
        let mut finder = blog::Entity::find().order_by_desc(blog::Column::CreatedAt);
        if let Some(t) = tag {
            finder = finder
                .join(JoinType::InnerJoin, blog::Relation::BlogTag.def())
                .join(JoinType::InnerJoin, blog_tag::Relation::Tag.def())
                .filter(tag::Column::TagDescription.eq(t));
        }
        let blogs = finder.all(&self.db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
        debug!(count = blogs.len(), filtered = tag.is_some(), "loaded blogs");
        attach_tags(&self.db, blogs).await
    }

    async fn find_tag(&self, description: &str) -> Result<Option<tag::Model>, ServiceError> {
        Ok(tag::find_by_description(&self.db, description).await?)
    }

    async fn insert_blog(&self, new: NewBlog, tags: Vec<TagRef>) -> Result<BlogWithTags, ServiceError> {
        let txn = self.db.begin().await.map_err(|e| ServiceError::Db(e.to_string()))?;

        let mut stored = Vec::with_capacity(tags.len());
        for r in tags {
            match r {
                TagRef::Existing(t) => stored.push(t),
                TagRef::New(d) => stored.push(tag::create(&txn, &d).await?),
            }
        }
        let created = blog::create(&txn, &new.slug, &new.title, &new.description, &new.body).await?;
        for t in &stored {
            blog_tag::link(&txn, created.id, t.id).await?;
        }

        txn.commit().await.map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(BlogWithTags { blog: created, tags: stored })
    }

    async fn update_blog(&self, current: blog::Model, changes: BlogChanges) -> Result<BlogWithTags, ServiceError> {
        let mut am: blog::ActiveModel = current.into();
        if let Some(v) = changes.slug { am.slug = Set(v); }
        if let Some(v) = changes.title { am.title = Set(v); }
        if let Some(v) = changes.description { am.description = Set(v); }
        if let Some(v) = changes.body { am.body = Set(v); }
        let updated = am.update(&self.db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(attach_tags(&self.db, vec![updated])
            .await?
            .pop()
            .ok_or_else(|| ServiceError::Db("updated blog vanished while loading tags".into()))?)
    }

    async fn delete_blog(&self, id: Uuid) -> Result<u64, ServiceError> {
        let res = blog::Entity::delete_by_id(id).exec(&self.db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(res.rows_affected)
    }
}
