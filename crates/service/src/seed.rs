//! Demo content loaded into an empty database at startup.

use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait, TransactionTrait};
use tracing::{info, instrument};

use models::{blog, blog_tag, tag};

use crate::errors::ServiceError;
use crate::slugs::slug_for_title;

pub const SEED_TAGS: [&str; 3] = ["IOS", "Android", "Mac"];
pub const SEED_BLOGS: usize = 3;

/// Seed three blogs sharing three tags when both tables are empty.
/// Returns whether anything was inserted.
#[instrument(skip(db))]
pub async fn seed_if_empty(db: &DatabaseConnection) -> Result<bool, ServiceError> {
    let blogs = blog::Entity::find().count(db).await?;
    let tags = tag::Entity::find().count(db).await?;
    if blogs > 0 || tags > 0 {
        info!(blogs, tags, "database already has content; skipping seed");
        return Ok(false);
    }

    let txn = db.begin().await?;
    let mut stored = Vec::with_capacity(SEED_TAGS.len());
    for d in SEED_TAGS {
        stored.push(tag::create(&txn, d).await?);
    }
    for n in 1..=SEED_BLOGS {
        let title = format!("title {n}");
        let slug = slug_for_title(&title)?;
        let b = blog::create(&txn, &slug, &title, &format!("description {n}"), &format!("body {n}")).await?;
        for t in &stored {
            blog_tag::link(&txn, b.id, t.id).await?;
        }
    }
    txn.commit().await?;

    info!(blogs = SEED_BLOGS, tags = SEED_TAGS.len(), "seeded initial data");
    Ok(true)
}
