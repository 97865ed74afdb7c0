use std::sync::Arc;

use tracing::{info, instrument, warn};

use super::domain::{BlogChanges, BlogResponse, BlogWithTags, CreateBlogInput, NewBlog, TagRef, UpdateBlogInput};
use super::repository::BlogRepository;
use crate::errors::{log_unexpected, ServiceError};
use crate::slugs::{normalize_tags, slug_for_title};

pub const LIST_FAILED: &str = "Internal Server error occurred while getting all blogs by tag query";
pub const GET_FAILED: &str = "Internal Server error occurred while getting blog by slug";
pub const CREATE_FAILED: &str = "Internal Server error occurred while adding new blog";
pub const UPDATE_FAILED: &str = "Internal Server error occurred while updating blog by slug";
pub const DELETE_FAILED: &str = "Internal Server error occurred while deleting blog by slug";

fn provided(v: Option<String>) -> Option<String> {
    v.filter(|s| !s.trim().is_empty())
}

fn require(field: &str, value: &str) -> Result<(), ServiceError> {
    if value.trim().is_empty() {
        return Err(ServiceError::Validation(format!("{field} is required")));
    }
    Ok(())
}

/// Blog business service independent of web framework
pub struct BlogService<R: BlogRepository> {
    repo: Arc<R>,
}

impl<R: BlogRepository> BlogService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// All blogs newest-first, optionally only those tagged `tag`.
    #[instrument(skip(self))]
    pub async fn list(&self, tag: Option<&str>) -> Result<Vec<BlogResponse>, ServiceError> {
        self.try_list(tag).await.inspect_err(log_unexpected(LIST_FAILED))
    }

    async fn try_list(&self, tag: Option<&str>) -> Result<Vec<BlogResponse>, ServiceError> {
        let tag = tag.map(str::trim).filter(|t| !t.is_empty());
        let blogs = self.repo.list_with_tags(tag).await?;
        if blogs.is_empty() {
            let msg = match tag {
                Some(t) => format!("There is no blogs with tag = {t}"),
                None => "There is no blogs in database".to_string(),
            };
            warn!("{}", msg);
            return Err(ServiceError::NotFound(msg));
        }
        info!(count = blogs.len(), "listed blogs");
        Ok(blogs.into_iter().map(BlogResponse::from).collect())
    }

    #[instrument(skip(self))]
    pub async fn get(&self, slug: &str) -> Result<BlogResponse, ServiceError> {
        self.find_existing(slug).await.map(BlogResponse::from).inspect_err(log_unexpected(GET_FAILED))
    }

    /// Create a blog, reusing stored tags by their text.
    ///
    /// # Examples
    /// ```
    /// use service::blog::{BlogService, domain::CreateBlogInput, repository::mock::MockBlogRepository};
    /// use std::sync::Arc;
    /// let repo = Arc::new(MockBlogRepository::default());
    /// let svc = BlogService::new(repo.clone());
    /// let input = CreateBlogInput {
    ///     title: "Hello World".into(),
    ///     description: "first post".into(),
    ///     body: "...".into(),
    ///     tag_list: vec!["intro".into()],
    /// };
    /// let blog = tokio_test::block_on(svc.create(input)).unwrap();
    /// assert_eq!(blog.slug, "hello-world");
    /// assert_eq!(repo.tag_count(), 1);
    /// ```
    #[instrument(skip(self, input), fields(title = %input.title))]
    pub async fn create(&self, input: CreateBlogInput) -> Result<BlogResponse, ServiceError> {
        self.try_create(input).await.inspect_err(log_unexpected(CREATE_FAILED))
    }

    async fn try_create(&self, input: CreateBlogInput) -> Result<BlogResponse, ServiceError> {
        require("title", &input.title)?;
        require("description", &input.description)?;
        require("body", &input.body)?;

        let slug = slug_for_title(&input.title)?;
        if self.repo.find_by_slug(&slug).await?.is_some() {
            let msg = format!("There is already blog with slug = {slug}");
            warn!("{}", msg);
            return Err(ServiceError::Conflict(msg));
        }

        let mut tags = Vec::new();
        for text in normalize_tags(&input.tag_list) {
            match self.repo.find_tag(&text).await? {
                Some(existing) => tags.push(TagRef::Existing(existing)),
                None => {
                    info!(tag = %text, "adding new tag");
                    tags.push(TagRef::New(text));
                }
            }
        }

        let new = NewBlog { slug, title: input.title, description: input.description, body: input.body };
        let created = self.repo.insert_blog(new, tags).await?;
        info!(slug = %created.blog.slug, title = %created.blog.title, "added new blog");
        Ok(created.into())
    }

    /// Overwrite only the non-empty fields; a new title also moves the slug.
    #[instrument(skip(self, input))]
    pub async fn update(&self, slug: &str, input: UpdateBlogInput) -> Result<BlogResponse, ServiceError> {
        self.try_update(slug, input).await.inspect_err(log_unexpected(UPDATE_FAILED))
    }

    async fn try_update(&self, slug: &str, input: UpdateBlogInput) -> Result<BlogResponse, ServiceError> {
        let current = self.find_existing(slug).await?;

        let title = provided(input.title);
        let description = provided(input.description);
        let body = provided(input.body);
        if title.is_none() && description.is_none() && body.is_none() {
            let msg = "Didn't specify what you want to update".to_string();
            warn!("{}", msg);
            return Err(ServiceError::Validation(msg));
        }

        let new_slug = match &title {
            Some(t) => {
                let s = slug_for_title(t)?;
                if s != current.blog.slug {
                    if let Some(other) = self.repo.find_by_slug(&s).await? {
                        if other.blog.id != current.blog.id {
                            let msg = format!("There is already blog with slug = {s}");
                            warn!("{}", msg);
                            return Err(ServiceError::Conflict(msg));
                        }
                    }
                }
                Some(s)
            }
            None => None,
        };

        let changes = BlogChanges { slug: new_slug, title, description, body };
        let updated = self.repo.update_blog(current.blog, changes).await?;
        info!(old_slug = %slug, slug = %updated.blog.slug, "updated blog");
        Ok(updated.into())
    }

    /// Remove a blog; its tag links go with it. Returns what was deleted.
    #[instrument(skip(self))]
    pub async fn delete(&self, slug: &str) -> Result<BlogResponse, ServiceError> {
        self.try_delete(slug).await.inspect_err(log_unexpected(DELETE_FAILED))
    }

    async fn try_delete(&self, slug: &str) -> Result<BlogResponse, ServiceError> {
        let current = self.find_existing(slug).await?;
        let removed = self.repo.delete_blog(current.blog.id).await?;
        if removed == 0 {
            // lost a race with another delete
            return Err(ServiceError::NotFound(format!("There is no blog with slug = {slug}")));
        }
        info!(slug = %slug, "deleted blog");
        Ok(current.into())
    }

    async fn find_existing(&self, slug: &str) -> Result<BlogWithTags, ServiceError> {
        match self.repo.find_by_slug(slug).await? {
            Some(found) => Ok(found),
            None => {
                let msg = format!("There is no blog with slug = {slug}");
                warn!("{}", msg);
                Err(ServiceError::NotFound(msg))
            }
        }
    }
}
