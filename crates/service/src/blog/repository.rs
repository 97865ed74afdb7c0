use async_trait::async_trait;
use uuid::Uuid;

use models::{blog, tag};

use super::domain::{BlogChanges, BlogWithTags, NewBlog, TagRef};
use crate::errors::ServiceError;

/// Repository abstraction for blog persistence.
#[async_trait]
pub trait BlogRepository: Send + Sync {
    async fn find_by_slug(&self, slug: &str) -> Result<Option<BlogWithTags>, ServiceError>;
    /// Newest first; restricted to blogs carrying `tag` when given.
    async fn list_with_tags(&self, tag: Option<&str>) -> Result<Vec<BlogWithTags>, ServiceError>;
    async fn find_tag(&self, description: &str) -> Result<Option<tag::Model>, ServiceError>;

    /// Store new tags, the blog and its links as one unit.
    async fn insert_blog(&self, blog: NewBlog, tags: Vec<TagRef>) -> Result<BlogWithTags, ServiceError>;
    async fn update_blog(&self, current: blog::Model, changes: BlogChanges) -> Result<BlogWithTags, ServiceError>;
    /// Returns the number of blog rows removed.
    async fn delete_blog(&self, id: Uuid) -> Result<u64, ServiceError>;
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::sync::Mutex;

    use crate::tag::repository::TagRepository;
    use models::timestamps;

    #[derive(Default)]
    struct Store {
        blogs: Vec<(blog::Model, Vec<Uuid>)>, // insertion order, tag ids in link order
        tags: Vec<tag::Model>,                // insertion order
    }

    impl Store {
        fn load(&self, b: &blog::Model, tag_ids: &[Uuid]) -> BlogWithTags {
            let tags = tag_ids
                .iter()
                .filter_map(|id| self.tags.iter().find(|t| &t.id == id).cloned())
                .collect();
            BlogWithTags { blog: b.clone(), tags }
        }

        fn slug_taken(&self, slug: &str, except: Option<Uuid>) -> bool {
            self.blogs.iter().any(|(b, _)| b.slug == slug && Some(b.id) != except)
        }
    }

    #[derive(Default)]
    pub struct MockBlogRepository {
        store: Mutex<Store>,
    }

    impl MockBlogRepository {
        pub fn blog_count(&self) -> usize { self.store.lock().unwrap().blogs.len() }
        pub fn tag_count(&self) -> usize { self.store.lock().unwrap().tags.len() }
        pub fn link_count(&self) -> usize {
            self.store.lock().unwrap().blogs.iter().map(|(_, ids)| ids.len()).sum()
        }
    }

    #[async_trait]
    impl BlogRepository for MockBlogRepository {
        async fn find_by_slug(&self, slug: &str) -> Result<Option<BlogWithTags>, ServiceError> {
            let store = self.store.lock().unwrap();
            Ok(store.blogs.iter().find(|(b, _)| b.slug == slug).map(|(b, ids)| store.load(b, ids)))
        }

        async fn list_with_tags(&self, tag: Option<&str>) -> Result<Vec<BlogWithTags>, ServiceError> {
            let store = self.store.lock().unwrap();
            let mut out: Vec<BlogWithTags> = store
                .blogs
                .iter()
                .rev()
                .map(|(b, ids)| store.load(b, ids))
                .filter(|bwt| match tag {
                    Some(t) => bwt.tags.iter().any(|x| x.tag_description == t),
                    None => true,
                })
                .collect();
            out.sort_by(|a, b| b.blog.created_at.cmp(&a.blog.created_at));
            Ok(out)
        }

        async fn find_tag(&self, description: &str) -> Result<Option<tag::Model>, ServiceError> {
            let store = self.store.lock().unwrap();
            Ok(store.tags.iter().find(|t| t.tag_description == description).cloned())
        }

        async fn insert_blog(&self, new: NewBlog, tags: Vec<TagRef>) -> Result<BlogWithTags, ServiceError> {
            let mut store = self.store.lock().unwrap();
            if store.slug_taken(&new.slug, None) {
                return Err(ServiceError::Db("duplicate key value violates unique constraint \"blog_slug_key\"".into()));
            }
            let now = timestamps::now();
            let mut tag_ids = Vec::with_capacity(tags.len());
            let mut fresh = Vec::new();
            for r in tags {
                match r {
                    TagRef::Existing(t) => tag_ids.push(t.id),
                    TagRef::New(d) => {
                        if store.tags.iter().chain(fresh.iter()).any(|t: &tag::Model| t.tag_description == d) {
                            return Err(ServiceError::Db("duplicate key value violates unique constraint \"tag_tag_description_key\"".into()));
                        }
                        let t = tag::Model { id: Uuid::new_v4(), tag_description: d, created_at: now, updated_at: now };
                        tag_ids.push(t.id);
                        fresh.push(t);
                    }
                }
            }
            store.tags.extend(fresh);
            let b = blog::Model {
                id: Uuid::new_v4(),
                slug: new.slug,
                title: new.title,
                description: new.description,
                body: new.body,
                created_at: now,
                updated_at: now,
            };
            let loaded = store.load(&b, &tag_ids);
            store.blogs.push((b, tag_ids));
            Ok(loaded)
        }

        async fn update_blog(&self, current: blog::Model, changes: BlogChanges) -> Result<BlogWithTags, ServiceError> {
            let mut store = self.store.lock().unwrap();
            if let Some(slug) = &changes.slug {
                if store.slug_taken(slug, Some(current.id)) {
                    return Err(ServiceError::Db("duplicate key value violates unique constraint \"blog_slug_key\"".into()));
                }
            }
            let (b, ids) = store
                .blogs
                .iter_mut()
                .find(|(b, _)| b.id == current.id)
                .ok_or_else(|| ServiceError::Db("record not updated".into()))?;
            if let Some(v) = changes.slug { b.slug = v; }
            if let Some(v) = changes.title { b.title = v; }
            if let Some(v) = changes.description { b.description = v; }
            if let Some(v) = changes.body { b.body = v; }
            b.updated_at = timestamps::now();
            let (b, ids) = (b.clone(), ids.clone());
            Ok(store.load(&b, &ids))
        }

        async fn delete_blog(&self, id: Uuid) -> Result<u64, ServiceError> {
            let mut store = self.store.lock().unwrap();
            let before = store.blogs.len();
            store.blogs.retain(|(b, _)| b.id != id);
            Ok((before - store.blogs.len()) as u64)
        }
    }

    #[async_trait]
    impl TagRepository for MockBlogRepository {
        async fn list_tags(&self) -> Result<Vec<tag::Model>, ServiceError> {
            Ok(self.store.lock().unwrap().tags.clone())
        }
    }
}
